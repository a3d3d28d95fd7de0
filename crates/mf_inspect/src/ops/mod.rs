//! Provide the value views an [`Inspect`] type maps itself onto.
//!
//! ## Menu
//!
//! - [`ValueRef`]: the closed view variant set returned by [`Inspect::inspect_ref`].
//!     - [`StructView`]: for structs (e.g. `A { .. }`), fields in declaration order.
//!     - [`SequenceView`]: for sequences (e.g. `Vec<T>`, `[T; N]`).
//!     - [`RefView`]: for references (e.g. `Option<T>`, `Box<T>`), possibly nil.
//!     - [`MapView`]: for maps (e.g. `BTreeMap<K, V>`), always a leaf.
//!     - [`ScalarRef`]: for strings, bools, chars, integers and floats.
//!
//! [`Inspect`]: crate::Inspect
//! [`Inspect::inspect_ref`]: crate::Inspect::inspect_ref

// -----------------------------------------------------------------------------
// Modules

mod map_view;
mod sequence_view;
mod struct_view;
mod value_ref;

// -----------------------------------------------------------------------------
// Exports

pub use map_view::{MapIter, MapView};
pub use sequence_view::{SequenceIter, SequenceView};
pub use struct_view::{StructView, VisibleFieldIter};
pub use value_ref::{RefView, ScalarRef, ValueRef};

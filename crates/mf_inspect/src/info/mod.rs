//! Provide static type information for inspected values.
//!
//! ## Menu
//!
//! - [`ValueKind`]: the closed classification of a value, one of `Struct`,
//!   `Sequence`, `Reference`, `Map` and `Scalar`.
//!
//! - [`TypeShape`]: a small `Copy` record describing a type: its name, its
//!   declared kind and its effective kind (the kind left after every
//!   reference layer is peeled away).
//!
//! - [`Typed`]: a trait for obtaining the [`TypeShape`] of a type.
//!
//! - [`DynamicTyped`]: provide dynamic dispatch for `Typed`.
//!
//! - [`FieldDescriptor`]: a named, ordered, visibility-tagged member of a struct.
//!     - [`Visibility`]: `Public` or `Hidden`.

// -----------------------------------------------------------------------------
// Modules

mod field;
mod kind;
mod shape;

// -----------------------------------------------------------------------------
// Exports

pub use field::{FieldDescriptor, Visibility};
pub use kind::ValueKind;
pub use shape::{DynamicTyped, TypeShape, Typed};

//! Provide the traversal algorithms over inspected values.
//!
//! - [`resolve`]: normalise a value to a representative struct.
//! - [`each_field`]: visit the visible fields of a resolved struct.
//! - [`terminal_fields`] / [`try_terminal_fields`]: breadth-first collection
//!   of every leaf path.
//!
//! [`dereference`] is the shared primitive that peels reference layers.
//!
//! All functions are read-only and take the [`InspectConfig`] explicitly,
//! so concurrent calls with different separators never interfere.
//!
//! [`InspectConfig`]: crate::InspectConfig

// -----------------------------------------------------------------------------
// Modules

mod collect;
mod enumerate;
mod resolve;

// -----------------------------------------------------------------------------
// Exports

pub use collect::{CollectError, terminal_fields, try_terminal_fields};
pub use enumerate::each_field;
pub use resolve::{dereference, resolve};

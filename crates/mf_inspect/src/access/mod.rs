//! Fetch values by path.
//!
//! A path names a chain of fields joined by the configured separator, as
//! produced by [`terminal_fields`](crate::terminal_fields). Access walks the
//! chain one segment at a time:
//!
//! - references are followed; a nil reference yields [`Got::Absent`]
//!   carrying the static shape of its target,
//! - a sequence applies the remaining path to every element and yields
//!   [`Got::Fanned`], one slot per element,
//! - a struct looks the segment up among its visible fields,
//! - maps and scalars have no fields.
//!
//! ```
//! use mf_inspect::{Inspect, InspectPathAccess};
//! use mf_inspect::ops::ScalarRef;
//!
//! #[derive(Inspect)]
//! struct Config {
//!     pub name: String,
//!     pub retries: Option<u8>,
//! }
//!
//! let config = Config { name: "svc".into(), retries: None };
//!
//! assert_eq!(config.get_path("name").as_scalar(), Some(ScalarRef::Str("svc")));
//! assert!(config.get_path("retries").is_absent());
//! assert!(config.get_path("missing").is_absent());
//! ```

// -----------------------------------------------------------------------------
// Modules

mod got;
mod path;
mod path_access;

// -----------------------------------------------------------------------------
// Exports

pub use got::Got;
pub use path::FieldPath;
pub use path_access::{InspectPathAccess, get};

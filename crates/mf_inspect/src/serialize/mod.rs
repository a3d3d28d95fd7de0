//! Serialize inspected values with `serde`.
//!
//! Inspected types need not implement [`serde::Serialize`]; their view is
//! serialized instead:
//!
//! | view        | serde data model                          |
//! |-------------|-------------------------------------------|
//! | `Struct`    | struct of the visible fields, in order    |
//! | `Sequence`  | seq                                       |
//! | `Reference` | option                                    |
//! | `Map`       | map                                       |
//! | `Scalar`    | the matching primitive                    |
//!
//! [`Got`](crate::Got) serializes as well: `Absent` becomes none and
//! `Fanned` a seq, so path lookups can be dumped directly.
//!
//! ```
//! use mf_inspect::{Inspect, InspectPathAccess};
//! use mf_inspect::serialize::SerializeDriver;
//!
//! #[derive(Inspect)]
//! struct Entry {
//!     pub id: u32,
//!     pub tags: Vec<&'static str>,
//!     pub parent: Option<u32>,
//!     token: String,
//! }
//!
//! let entry = Entry { id: 1, tags: vec!["a"], parent: None, token: "x".into() };
//!
//! let json = serde_json::to_string(&SerializeDriver::new(&entry)).unwrap();
//! assert_eq!(json, r#"{"id":1,"tags":["a"],"parent":null}"#);
//!
//! let json = serde_json::to_string(&entry.get_path("tags")).unwrap();
//! assert_eq!(json, r#"["a"]"#);
//! # let _ = entry.token;
//! ```

// -----------------------------------------------------------------------------
// Modules

mod driver;
mod got;
mod scalar;
mod struct_serializer;

// -----------------------------------------------------------------------------
// Exports

pub use driver::SerializeDriver;

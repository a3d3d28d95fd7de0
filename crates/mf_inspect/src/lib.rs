#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro emits `::mf_inspect::...` paths, which must also resolve
// when the macro is used on this crate's own types (tests, doctests).
extern crate self as mf_inspect;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod inspect;

pub mod access;
pub mod config;
pub mod impls;
pub mod info;
pub mod ops;
pub mod serialize;
pub mod traverse;

#[cfg(test)]
mod fixtures;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use access::{Got, InspectPathAccess, get};
pub use config::InspectConfig;
pub use inspect::Inspect;
pub use mf_inspect_derive::Inspect;
pub use traverse::{each_field, resolve, terminal_fields};

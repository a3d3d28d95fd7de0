//! See following macros:
//!
//! - [`Inspect`](derive_inspect)
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static INSPECT_ATTRIBUTE_NAME: &str = "inspect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Inspect Derivation
///
/// `#[derive(Inspect)]` maps a struct with named fields onto the `Struct`
/// value view. It implements:
///
/// - `Typed`
/// - `Inspect`
/// - `StructView`
///
/// Unit structs (`struct T;`) are structs without fields. Enums, unions and
/// tuple structs are rejected.
///
/// ## Visibility
///
/// Only `pub` fields are visible. Any other visibility, `pub(crate)`
/// included, produces a hidden field: it keeps its descriptor but is never
/// enumerated, accessed or serialized. Hidden fields carry no trait bounds.
///
/// ```rust, ignore
/// #[derive(Inspect)]
/// struct Account {
///     pub id: u64,
///     password_hash: String, // hidden
/// }
/// ```
///
/// ## Field attributes
///
/// - `#[inspect(skip)]`: hide a `pub` field.
/// - `#[inspect(embedded)]`: mark the field as embedded into its parent.
///   Embedded fields are skipped like hidden ones.
/// - `#[inspect(rename = "Name")]`: expose the field under another name.
///
/// ```rust, ignore
/// #[derive(Inspect)]
/// struct Record {
///     #[inspect(rename = "ID")]
///     pub id: u64,
///     #[inspect(embedded)]
///     pub meta: Meta,
///     #[inspect(skip)]
///     pub cache: Cache,
/// }
/// ```
///
/// ## Generics
///
/// For generic structs every visible field type gets an `Inspect` bound.
///
/// ```rust, ignore
/// #[derive(Inspect)]
/// struct Page<T> {
///     pub items: Vec<T>, // adds `Vec<T>: Inspect`
/// }
/// ```
#[proc_macro_derive(Inspect, attributes(inspect))]
pub fn derive_inspect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::InspectStruct::from_input(&ast) {
        Ok(info) => impls::impl_inspect(&info).into(),
        Err(err) => err.into_compile_error().into(),
    }
}

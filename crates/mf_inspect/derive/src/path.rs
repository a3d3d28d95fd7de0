//! This independent module is used to provide the required paths,
//! so that generated code stays stable when `mf_inspect` is reorganised.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the correct access path to the `mf_inspect` crate.
///
/// 1. For crates that depend on `mf_inspect`, `::mf_inspect` is returned.
/// 2. For crates that depend on `metaflect`, `::metaflect::inspect` is returned.
/// 3. For other situations, `::mf_inspect` is returned, but this may be incorrect.
///
/// This scans the caller's `Cargo.toml`, so it is called once per derive and
/// the result is passed around.
pub(crate) fn mf_inspect() -> syn::Path {
    mf_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("mf_inspect"))
}

#[inline(always)]
pub(crate) fn inspect_(mf_inspect_path: &syn::Path) -> TokenStream {
    quote! { #mf_inspect_path::Inspect }
}

#[inline(always)]
pub(crate) fn typed_(mf_inspect_path: &syn::Path) -> TokenStream {
    quote! { #mf_inspect_path::info::Typed }
}

#[inline(always)]
pub(crate) fn type_shape_(mf_inspect_path: &syn::Path) -> TokenStream {
    quote! { #mf_inspect_path::info::TypeShape }
}

#[inline(always)]
pub(crate) fn value_kind_(mf_inspect_path: &syn::Path) -> TokenStream {
    quote! { #mf_inspect_path::info::ValueKind }
}

#[inline(always)]
pub(crate) fn field_descriptor_(mf_inspect_path: &syn::Path) -> TokenStream {
    quote! { #mf_inspect_path::info::FieldDescriptor }
}

#[inline(always)]
pub(crate) fn visibility_(mf_inspect_path: &syn::Path) -> TokenStream {
    quote! { #mf_inspect_path::info::Visibility }
}

#[inline(always)]
pub(crate) fn struct_view_(mf_inspect_path: &syn::Path) -> TokenStream {
    quote! { #mf_inspect_path::ops::StructView }
}

#[inline(always)]
pub(crate) fn value_ref_(mf_inspect_path: &syn::Path) -> TokenStream {
    quote! { #mf_inspect_path::ops::ValueRef }
}

#[inline(always)]
pub(crate) fn option_() -> TokenStream {
    quote! { ::core::option::Option }
}

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::InspectStruct;

/// Implement `Typed`, `Inspect` and `StructView` for a struct type.
pub(crate) fn impl_inspect(info: &InspectStruct) -> TokenStream {
    let mf_inspect_path = &info.mf_inspect_path;
    let inspect_ = crate::path::inspect_(mf_inspect_path);
    let typed_ = crate::path::typed_(mf_inspect_path);
    let type_shape_ = crate::path::type_shape_(mf_inspect_path);
    let value_kind_ = crate::path::value_kind_(mf_inspect_path);
    let field_descriptor_ = crate::path::field_descriptor_(mf_inspect_path);
    let visibility_ = crate::path::visibility_(mf_inspect_path);
    let struct_view_ = crate::path::struct_view_(mf_inspect_path);
    let value_ref_ = crate::path::value_ref_(mf_inspect_path);
    let option_ = crate::path::option_();

    let ident = info.ident;

    // `Typed` needs no bounds, the views need every visible field to be inspectable.
    let (impl_generics, ty_generics, where_clause) = info.generics.split_for_impl();

    let mut bounded = info.generics.clone();
    if !info.generics.params.is_empty() {
        let predicates = &mut bounded.make_where_clause().predicates;
        for field in info.fields.iter().filter(|field| field.is_visible()) {
            let ty = field.ty;
            predicates.push(syn::parse_quote!(#ty: #inspect_));
        }
    }
    let (_, _, bounded_where_clause) = bounded.split_for_impl();

    let descriptors = info.fields.iter().map(|field| {
        let name = &field.name;
        let visibility = if field.public {
            quote!(#visibility_::Public)
        } else {
            quote!(#visibility_::Hidden)
        };
        let embedded = field.embedded;
        quote! {
            #field_descriptor_::new(#name, #visibility, #embedded)
        }
    });

    let field_arms = info
        .fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.is_visible())
        .map(|(index, field)| {
            let member = &field.member;
            quote! {
                #index => #option_::Some(&self.#member as &dyn #inspect_),
            }
        });

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            #[inline]
            fn type_shape() -> #type_shape_ {
                #type_shape_::of::<Self>(#value_kind_::Struct)
            }
        }

        impl #impl_generics #inspect_ for #ident #ty_generics #bounded_where_clause {
            #[inline]
            fn inspect_ref(&self) -> #value_ref_<'_> {
                #value_ref_::Struct(self)
            }
        }

        impl #impl_generics #struct_view_ for #ident #ty_generics #bounded_where_clause {
            #[inline]
            fn descriptors(&self) -> &'static [#field_descriptor_] {
                const DESCRIPTORS: &[#field_descriptor_] = &[ #(#descriptors),* ];
                DESCRIPTORS
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #inspect_> {
                match index {
                    #(#field_arms)*
                    _ => #option_::None,
                }
            }
        }
    }
}

use syn::{Data, DeriveInput, Fields, Generics, Ident, Member, Type, spanned::Spanned};

use crate::INSPECT_ATTRIBUTE_NAME;
use crate::derive_data::FieldAttributes;

/// A single named field, as seen by code generation.
pub(crate) struct StructField<'a> {
    pub member: Member,
    pub ty: &'a Type,
    /// Exposed name, after `rename`.
    pub name: String,
    /// `pub` and not `#[inspect(skip)]`.
    pub public: bool,
    pub embedded: bool,
}

impl StructField<'_> {
    /// Visible fields are enumerated and accessed; the rest only keep a descriptor.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.public && !self.embedded
    }
}

/// Everything needed to generate `Inspect` for a struct.
pub(crate) struct InspectStruct<'a> {
    pub ident: &'a Ident,
    pub generics: &'a Generics,
    pub fields: Vec<StructField<'a>>,
    pub mf_inspect_path: syn::Path,
}

impl<'a> InspectStruct<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        if let Some(attr) = input
            .attrs
            .iter()
            .find(|attr| attr.path().is_ident(INSPECT_ATTRIBUTE_NAME))
        {
            return Err(syn::Error::new(
                attr.span(),
                "`#[inspect(...)]` is only supported on fields",
            ));
        }

        let data = match &input.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`Inspect` can only be derived for structs",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`Inspect` can only be derived for structs",
                ));
            }
        };

        let fields = match &data.fields {
            Fields::Named(named) => named
                .named
                .iter()
                .map(|field| {
                    let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
                    let ident = field.ident.as_ref().ok_or_else(|| {
                        syn::Error::new(field.span(), "named field without an ident")
                    })?;
                    let name = match &attrs.rename {
                        Some(rename) => rename.value(),
                        None => ident.to_string().trim_start_matches("r#").to_owned(),
                    };
                    Ok(StructField {
                        member: Member::Named(ident.clone()),
                        ty: &field.ty,
                        name,
                        public: matches!(field.vis, syn::Visibility::Public(_)) && !attrs.skip,
                        embedded: attrs.embedded,
                    })
                })
                .collect::<syn::Result<Vec<_>>>()?,
            Fields::Unit => Vec::new(),
            Fields::Unnamed(unnamed) => {
                return Err(syn::Error::new(
                    unnamed.span(),
                    "`Inspect` requires named fields",
                ));
            }
        };

        let mut seen = std::collections::BTreeSet::new();
        for field in fields.iter().filter(|field| field.is_visible()) {
            if !seen.insert(field.name.as_str()) {
                return Err(syn::Error::new(
                    field.ty.span(),
                    format!("duplicate visible field name `{}`", field.name),
                ));
            }
        }

        Ok(Self {
            ident: &input.ident,
            generics: &input.generics,
            fields,
            mf_inspect_path: crate::path::mf_inspect(),
        })
    }
}

use syn::{Attribute, Ident, LitStr, Token, parse::ParseStream};

use crate::INSPECT_ATTRIBUTE_NAME;

/// Parsed `#[inspect(...)]` options of a single field.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[inspect(skip)]`
    pub skip: bool,
    /// `#[inspect(embedded)]`
    pub embedded: bool,
    /// `#[inspect(rename = "...")]`
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    /// Collects every `#[inspect(...)]` attribute of a field.
    ///
    /// Attributes may be split, `#[inspect(skip)] #[inspect(rename = "a")]`
    /// is the same as `#[inspect(skip, rename = "a")]`.
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(INSPECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_args_with(|input: ParseStream| out.parse_stream(input))?;
        }

        Ok(out)
    }

    /// Parse the comma separated content of one attribute.
    ///
    /// Format: `skip`, `embedded`, `rename = "Name"`
    pub fn parse_stream(&mut self, input: ParseStream) -> syn::Result<()> {
        while !input.is_empty() {
            let key: Ident = input.parse()?;
            if key == "skip" {
                self.skip = true;
            } else if key == "embedded" {
                self.embedded = true;
            } else if key == "rename" {
                self.parse_rename(&key, input)?;
            } else {
                return Err(syn::Error::new(
                    key.span(),
                    "expected `skip`, `embedded` or `rename = \"...\"`",
                ));
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(())
    }

    fn parse_rename(&mut self, key: &Ident, input: ParseStream) -> syn::Result<()> {
        if self.rename.is_some() {
            return Err(syn::Error::new(key.span(), "duplicate `rename`"));
        }
        input.parse::<Token![=]>()?;
        let name: LitStr = input.parse()?;
        if name.value().is_empty() {
            return Err(syn::Error::new(name.span(), "field name cannot be empty"));
        }
        self.rename = Some(name);
        Ok(())
    }
}

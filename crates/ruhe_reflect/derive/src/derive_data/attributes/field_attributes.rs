use proc_macro2::Span;
use syn::Attribute;

use crate::REFLECT_ATTRIBUTE_NAME;

/// Field-level `#[reflect(...)]` options.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `base`: lookups that miss on the struct continue in this field.
    pub base: Option<Span>,
    /// `ignore`: the field is invisible to reflection.
    pub ignore: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                let span = meta.path.get_ident().map(syn::Ident::span);
                if meta.path.is_ident("base") {
                    this.base = span;
                } else if meta.path.is_ident("ignore") {
                    this.ignore = span;
                } else {
                    return Err(meta.error("unknown field option, expected `base` or `ignore`"));
                }
                Ok(())
            })?;
        }

        if let (Some(span), Some(_)) = (this.base, this.ignore) {
            return Err(syn::Error::new(span, "a base field cannot be ignored"));
        }
        Ok(this)
    }

    #[inline]
    pub fn is_ignored(&self) -> bool {
        self.ignore.is_some()
    }
}

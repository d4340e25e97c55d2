use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::punctuated::Punctuated;
use syn::token::Paren;
use syn::{Attribute, LitBool, LitStr, Path, Token, parenthesized};

use super::{TraitAvailableFlags, TraitImplSwitches};
use crate::REFLECT_ATTRIBUTE_NAME;

/// Type-level `#[reflect(...)]` options.
///
/// ```ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "shop::stock::Crate", default, members)]
/// #[reflect(type_trait = (ReflectDisposable, ReflectPrint))]
/// struct Crate { /* ... */ }
/// ```
#[derive(Debug)]
pub(crate) struct TypeAttributes {
    pub impl_switchs: TraitImplSwitches,
    pub avail_traits: TraitAvailableFlags,
    /// `type_path = "..."`, already split into segments.
    pub type_path: Option<Path>,
    /// `members`: the type has a `#[reflect_members]` block.
    pub members: Option<Span>,
    /// On unless `auto_register = false`.
    pub auto_register: Option<Span>,
    /// `type_trait = X` or `type_trait = (X, Y)`.
    pub extra_type_trait: Vec<Path>,
}

impl Default for TypeAttributes {
    fn default() -> Self {
        Self {
            impl_switchs: TraitImplSwitches::default(),
            avail_traits: TraitAvailableFlags::default(),
            type_path: None,
            members: None,
            auto_register: Some(Span::call_site()),
            extra_type_trait: Vec::new(),
        }
    }
}

impl TypeAttributes {
    /// Collects every `#[reflect(...)]` among `attrs`, other attributes are skipped.
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        let Some(ident) = meta.path.get_ident() else {
            return Err(meta.error("expected a reflect option"));
        };
        let span = ident.span();

        match ident.to_string().as_str() {
            "TypePath" => self.impl_switchs.impl_type_path = parse_switch(&meta)?,
            "Typed" => self.impl_switchs.impl_typed = parse_switch(&meta)?,
            "Reflect" => self.impl_switchs.impl_reflect = parse_switch(&meta)?,
            "GetTypeMeta" => self.impl_switchs.impl_get_type_meta = parse_switch(&meta)?,
            "default" => self.avail_traits.default = Some(span),
            "debug" => self.avail_traits.debug = Some(span),
            "partial_eq" => self.avail_traits.partial_eq = Some(span),
            "members" => self.members = Some(span),
            "auto_register" => {
                let enabled = if meta.input.peek(Token![=]) {
                    parse_switch(&meta)?
                } else {
                    true
                };
                self.auto_register = enabled.then_some(span);
            }
            "type_path" => {
                if self.type_path.is_some() {
                    return Err(meta.error("`type_path` is already set"));
                }
                self.type_path = Some(parse_type_path(&meta)?);
            }
            "type_trait" => {
                let input = meta.value()?;
                if input.peek(Paren) {
                    let content;
                    parenthesized!(content in input);
                    let paths = Punctuated::<Path, Token![,]>::parse_terminated(&content)?;
                    self.extra_type_trait.extend(paths);
                } else {
                    self.extra_type_trait.push(input.parse()?);
                }
            }
            _ => return Err(meta.error("unknown reflect option")),
        }
        Ok(())
    }
}

/// Format: `Name = true` or `Name = false`.
fn parse_switch(meta: &ParseNestedMeta) -> syn::Result<bool> {
    Ok(meta.value()?.parse::<LitBool>()?.value)
}

/// Format: `type_path = "module::path::Name"`.
fn parse_type_path(meta: &ParseNestedMeta) -> syn::Result<Path> {
    let lit = meta.value()?.parse::<LitStr>()?;
    let path = lit.parse_with(Path::parse_mod_style)?;

    if path.leading_colon.is_some() {
        return Err(syn::Error::new(lit.span(), "did not expect a leading `::`"));
    }
    if path.segments.len() < 2 {
        return Err(syn::Error::new(
            lit.span(),
            "`type_path` needs a module, e.g. `my_crate::Name`",
        ));
    }
    Ok(path)
}

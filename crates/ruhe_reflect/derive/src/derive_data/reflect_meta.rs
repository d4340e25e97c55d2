use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::punctuated::Punctuated;
use syn::{Generics, Ident, ImplGenerics, LitStr, Path, Token, Type, TypeGenerics};

use super::TypeAttributes;

/// Everything the trait generators need to know about the annotated type,
/// independent of whether it is a struct or an enum.
pub(crate) struct ReflectMeta<'a> {
    ruhe_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
    // Field types, deduplicated in declaration order so the generated
    // `where` clause is stable between builds.
    active_types: Vec<Type>,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("ruhe_reflect_path", &self.ruhe_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    /// Fails for lifetime and const parameters, reflected types are `'static`
    /// and their paths are built from type parameters only.
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> syn::Result<Self> {
        if let Some(lifetime) = generics.lifetimes().next() {
            return Err(syn::Error::new_spanned(
                lifetime,
                "reflected types cannot have lifetime parameters",
            ));
        }
        if let Some(param) = generics.const_params().next() {
            return Err(syn::Error::new_spanned(
                param,
                "reflected types cannot have const parameters",
            ));
        }

        Ok(Self {
            ruhe_reflect_path: crate::path::ruhe_reflect(),
            attrs,
            ident,
            generics,
            active_types: Vec::new(),
        })
    }

    /// Records the field types that need `Reflect + Typed` bounds.
    pub(super) fn set_active_types(&mut self, types: impl Iterator<Item = Type>) {
        for ty in types {
            if !self.active_types.contains(&ty) {
                self.active_types.push(ty);
            }
        }
    }

    #[inline]
    pub fn ruhe_reflect_path(&self) -> &Path {
        &self.ruhe_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn real_ident(&self) -> &'a Ident {
        self.ident
    }

    #[inline]
    pub fn generics(&self) -> &'a Generics {
        self.generics
    }

    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
    }

    #[inline]
    pub fn active_types(&self) -> &[Type] {
        &self.active_types
    }

    /// The short name without generics, e.g. `"Crate"`.
    pub fn type_ident(&self) -> String {
        match &self.attrs.type_path {
            Some(path) => path
                .segments
                .last()
                .map(|segment| segment.ident.to_string())
                .unwrap_or_default(),
            None => self.ident.to_string(),
        }
    }

    /// A `&'static str` expression of the module path.
    pub fn module_path(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(path) => {
                let module = path
                    .segments
                    .iter()
                    .take(path.segments.len() - 1)
                    .map(|segment| segment.ident.to_string())
                    .collect::<Vec<_>>()
                    .join("::");
                LitStr::new(&module, proc_macro2::Span::call_site()).to_token_stream()
            }
            None => quote!(::core::module_path!()),
        }
    }

    /// Returns `impl_generics`, `ty_generics` and a `where` clause.
    ///
    /// Type parameters always get a `TypePath` bound and `Self` gets
    /// `Any + Send + Sync`. With `add_reflect_typed`, every field type
    /// mentioning a type parameter must be `Reflect + Typed`, and with
    /// `add_get_type_meta` additionally `GetTypeMeta`.
    pub fn split_generics(
        &self,
        add_reflect_typed: bool,
        add_get_type_meta: bool,
    ) -> (ImplGenerics<'a>, TypeGenerics<'a>, TokenStream) {
        use crate::path::fp::{AnyFP, SendFP, SyncFP};

        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let mut generic_where_clause = quote! { where };

        if !self.impl_with_generic() {
            if let Some(where_clause) = where_clause {
                let predicates = where_clause.predicates.iter();
                generic_where_clause.extend(quote! { #(#predicates,)* });
            }
            return (impl_generics, ty_generics, generic_where_clause);
        }

        generic_where_clause.extend(quote! { Self: #AnyFP + #SendFP + #SyncFP, });

        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        let ruhe_reflect_path = &self.ruhe_reflect_path;
        let type_path_ = crate::path::type_path_(ruhe_reflect_path);

        let mut predicates: Punctuated<TokenStream, Token![,]> = Punctuated::new();
        predicates.extend(self.generics.type_params().map(|param| {
            let ident = &param.ident;
            quote!(#ident: #type_path_)
        }));

        if add_reflect_typed {
            let reflect_ = crate::path::reflect_(ruhe_reflect_path);
            let typed_ = crate::path::typed_(ruhe_reflect_path);
            let get_type_meta_ = add_get_type_meta.then(|| {
                let get_type_meta_ = crate::path::get_type_meta_(ruhe_reflect_path);
                quote!( + #get_type_meta_ )
            });

            let params = self
                .generics
                .type_params()
                .map(|param| param.ident.clone())
                .collect::<Vec<Ident>>();

            predicates.extend(
                self.active_types
                    .iter()
                    .filter(|ty| mentions_any(&params, ty.to_token_stream()))
                    .map(|ty| quote!(#ty: #reflect_ + #typed_ #get_type_meta_)),
            );
        }

        generic_where_clause.extend(quote! { #predicates });

        (impl_generics, ty_generics, generic_where_clause)
    }
}

/// Does any of `idents` appear in `tokens`?
fn mentions_any(idents: &[Ident], tokens: TokenStream) -> bool {
    tokens.into_iter().any(|tree| match tree {
        proc_macro2::TokenTree::Ident(ident) => idents.contains(&ident),
        proc_macro2::TokenTree::Group(group) => mentions_any(idents, group.stream()),
        _ => false,
    })
}

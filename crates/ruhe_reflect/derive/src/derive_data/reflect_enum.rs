use proc_macro2::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{Attribute, Fields, Token, Variant};

use super::ReflectMeta;

/// A fieldless enum.
///
/// Discriminants are read with `Self::Variant as i128`, which works for
/// every primitive `repr` and for implicit discriminants. Under
/// `#[repr(u128)]` the cast would wrap values above `i128::MAX`, so those
/// enums get a compile-time range check instead.
pub(crate) struct ReflectEnum<'a> {
    meta: ReflectMeta<'a>,
    variants: Vec<&'a Variant>,
    repr_u128: bool,
}

impl<'a> ReflectEnum<'a> {
    pub fn new(
        meta: ReflectMeta<'a>,
        attrs: &[Attribute],
        variants: &'a Punctuated<Variant, Token![,]>,
    ) -> syn::Result<Self> {
        if meta.impl_with_generic() {
            return Err(syn::Error::new_spanned(
                meta.generics(),
                "`Reflect` cannot be derived for generic enums",
            ));
        }
        if variants.is_empty() {
            return Err(syn::Error::new_spanned(
                meta.real_ident(),
                "`Reflect` cannot be derived for enums without variants",
            ));
        }
        for variant in variants {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(syn::Error::new_spanned(
                    &variant.fields,
                    "only fieldless enum variants can be reflected",
                ));
            }
        }

        Ok(Self {
            meta,
            variants: variants.iter().collect(),
            repr_u128: is_repr_u128(attrs)?,
        })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn variants(&self) -> &[&'a Variant] {
        &self.variants
    }

    /// Rejects, at compile time, `u128` discriminants that do not fit an
    /// `i128`. Empty for every other `repr`.
    pub fn discriminant_check_tokens(&self) -> TokenStream {
        if !self.repr_u128 {
            return crate::utils::empty();
        }
        let real_ident = self.meta.real_ident();
        let checks = self.variants.iter().map(|variant| {
            let ident = &variant.ident;
            let message = format!("discriminant of `{real_ident}::{ident}` exceeds `i128::MAX`");
            quote! {
                ::core::assert!(
                    (#real_ident::#ident as ::core::primitive::u128)
                        <= (::core::primitive::i128::MAX as ::core::primitive::u128),
                    #message,
                );
            }
        });
        quote! {
            const _: () = {
                #(#checks)*
            };
        }
    }

    /// `EnumInfo` constructor tokens.
    ///
    /// ```ignore
    /// TypeInfo::Enum(
    ///     EnumInfo::new::<Self>(&[
    ///         VariantInfo::new("Low", Self::Low as i128, || Box::new(Self::Low)),
    ///     ])
    /// )
    /// ```
    pub fn to_info_tokens(&self) -> TokenStream {
        let ruhe_reflect_path = self.meta.ruhe_reflect_path();
        let type_info_ = crate::path::type_info_(ruhe_reflect_path);
        let enum_info_ = crate::path::enum_info_(ruhe_reflect_path);
        let variant_info_ = crate::path::variant_info_(ruhe_reflect_path);
        let alloc_utils_ = crate::path::alloc_utils_(ruhe_reflect_path);

        let variants = self.variants.iter().map(|variant| {
            let ident = &variant.ident;
            let name = ident.to_string();
            quote! {
                #variant_info_::new(
                    #name,
                    Self::#ident as i128,
                    || #alloc_utils_::Box::new(Self::#ident),
                )
            }
        });

        quote! {
            #type_info_::Enum(
                #enum_info_::new::<Self>(&[ #(#variants),* ])
            )
        }
    }
}

fn is_repr_u128(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut found = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("u128") {
                found = true;
            } else if meta.input.peek(syn::token::Paren) {
                // `align(N)`, `packed(N)`
                let _content;
                syn::parenthesized!(_content in meta.input);
            }
            Ok(())
        })?;
    }
    Ok(found)
}

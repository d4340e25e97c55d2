use proc_macro2::{Ident, TokenStream};
use quote::{quote, quote_spanned};

use crate::derive_data::ReflectMeta;
use crate::path::fp::{DebugFP, OptionFP, PartialEqFP, ResultFP};

/// Generate implementation code for `Reflect`.
///
/// `kind` is `Struct` or `Enum`, it names both the `ReflectKind` and the
/// `ReflectRef`/`ReflectMut` variants.
pub(crate) fn impl_trait_reflect(meta: &ReflectMeta, kind: Ident) -> TokenStream {
    let ruhe_reflect_path = meta.ruhe_reflect_path();
    let reflect_ = crate::path::reflect_(ruhe_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(ruhe_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(ruhe_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(ruhe_reflect_path);
    let alloc_utils_ = crate::path::alloc_utils_(ruhe_reflect_path);

    let partial_eq_tokens = match meta.attrs().avail_traits.partial_eq {
        Some(span) => quote_spanned! { span =>
            fn reflect_partial_eq(&self, other: &dyn #reflect_) -> #OptionFP<bool> {
                #OptionFP::Some(match other.downcast_ref::<Self>() {
                    #OptionFP::Some(other) => #PartialEqFP::eq(self, other),
                    #OptionFP::None => false,
                })
            }
        },
        None => crate::utils::empty(),
    };

    let debug_tokens = match meta.attrs().avail_traits.debug {
        Some(span) => quote_spanned! { span =>
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                #DebugFP::fmt(self, f)
            }
        },
        None => crate::utils::empty(),
    };

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true, false);

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            fn set(
                &mut self,
                value: #alloc_utils_::Box<dyn #reflect_>,
            ) -> #ResultFP<(), #alloc_utils_::Box<dyn #reflect_>> {
                *self = value.take::<Self>()?;
                #ResultFP::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#kind
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#kind(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::#kind(self)
            }

            #partial_eq_tokens

            #debug_tokens
        }
    }
}

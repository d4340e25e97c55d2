use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use super::{get_auto_register_impl, impl_trait_get_type_meta, impl_trait_reflect};
use super::{impl_trait_type_path, impl_trait_typed};

use crate::derive_data::ReflectEnum;

/// Implement full reflect for a fieldless enum.
pub(crate) fn impl_enum(info: &ReflectEnum) -> TokenStream {
    let meta = info.meta();

    // trait: TypePath
    let type_path_trait_tokens = if meta.attrs().impl_switchs.impl_type_path {
        impl_trait_type_path(meta)
    } else {
        crate::utils::empty()
    };

    // trait: Typed
    let typed_trait_tokens = if meta.attrs().impl_switchs.impl_typed {
        impl_trait_typed(meta, info.to_info_tokens())
    } else {
        crate::utils::empty()
    };

    // trait: Enum
    let enum_trait_tokens = impl_trait_enum(info);

    // trait: Reflect
    let reflect_trait_tokens = if meta.attrs().impl_switchs.impl_reflect {
        impl_trait_reflect(meta, Ident::new("Enum", Span::call_site()))
    } else {
        crate::utils::empty()
    };

    // trait: GetTypeMeta
    let get_type_meta_tokens = if meta.attrs().impl_switchs.impl_get_type_meta {
        impl_trait_get_type_meta(meta, crate::utils::empty())
    } else {
        crate::utils::empty()
    };

    // feature: auto_register
    let auto_register_tokens = get_auto_register_impl(meta);

    let discriminant_check_tokens = info.discriminant_check_tokens();

    quote! {
        #discriminant_check_tokens

        #type_path_trait_tokens

        #typed_trait_tokens

        #enum_trait_tokens

        #reflect_trait_tokens

        #get_type_meta_tokens

        #auto_register_tokens
    }
}

/// Generate `Enum` trait implementation tokens.
fn impl_trait_enum(info: &ReflectEnum) -> TokenStream {
    let meta = info.meta();
    let enum_ = crate::path::enum_(meta.ruhe_reflect_path());

    let idents = info
        .variants()
        .iter()
        .map(|variant| &variant.ident)
        .collect::<Vec<_>>();
    let names = idents.iter().map(ToString::to_string).collect::<Vec<_>>();
    let indices = 0..idents.len();

    let real_ident = meta.real_ident();

    quote! {
        impl #enum_ for #real_ident {
            fn variant_name(&self) -> &str {
                match self {
                    #(Self::#idents => #names,)*
                }
            }

            fn variant_index(&self) -> usize {
                match self {
                    #(Self::#idents => #indices,)*
                }
            }

            fn discriminant(&self) -> i128 {
                match self {
                    #(Self::#idents => Self::#idents as i128,)*
                }
            }
        }
    }
}

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;
use crate::path::fp::OptionFP;

/// Generate implementation code for `TypePath`.
///
/// Non-generic types get string constants. Generic types build their
/// names once per instantiation and keep them in a `GenericTypePathCell`.
pub(crate) fn impl_trait_type_path(meta: &ReflectMeta) -> TokenStream {
    let ruhe_reflect_path = meta.ruhe_reflect_path();
    let type_path_ = crate::path::type_path_(ruhe_reflect_path);

    let type_ident = meta.type_ident();
    let module_path = meta.module_path();

    let (type_path, type_name, inline_flag) = if meta.impl_with_generic() {
        let concat_ = crate::path::concat_(ruhe_reflect_path);
        let path_params = generic_list(meta, quote!(type_path));
        let name_params = generic_list(meta, quote!(type_name));
        let open = format!("::{type_ident}<");
        let short_open = format!("{type_ident}<");

        (
            static_path_cell(
                ruhe_reflect_path,
                quote!(#concat_(&[#module_path, #open, #path_params ">"])),
            ),
            static_path_cell(
                ruhe_reflect_path,
                quote!(#concat_(&[#short_open, #name_params ">"])),
            ),
            crate::utils::empty(),
        )
    } else {
        let type_path = match &meta.attrs().type_path {
            Some(path) => {
                let joined = path
                    .segments
                    .iter()
                    .map(|segment| segment.ident.to_string())
                    .collect::<Vec<_>>()
                    .join("::");
                quote!(#joined)
            }
            None => quote!(::core::concat!(::core::module_path!(), "::", #type_ident)),
        };
        (type_path, quote!(#type_ident), quote!(#[inline]))
    };

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(false, false);

    quote! {
        impl #impl_generics #type_path_ for #real_ident #ty_generics #where_clause {
            #inline_flag
            fn type_path() -> &'static str {
                #type_path
            }

            #inline_flag
            fn type_name() -> &'static str {
                #type_name
            }

            #[inline]
            fn type_ident() -> &'static str {
                #type_ident
            }

            #[inline]
            fn module_path() -> #OptionFP<&'static str> {
                #OptionFP::Some(#module_path)
            }
        }
    }
}

fn static_path_cell(ruhe_reflect_path: &syn::Path, generator: TokenStream) -> TokenStream {
    let path_cell_ = crate::path::generic_type_path_cell_(ruhe_reflect_path);

    quote! {
        static CELL: #path_cell_ = #path_cell_::new();
        CELL.get_or_insert::<Self>(|| {
            #generator
        })
    }
}

/// `<T as TypePath>::method(), ", ", <U as TypePath>::method(),` for every
/// type parameter.
fn generic_list(meta: &ReflectMeta, method: TokenStream) -> TokenStream {
    let type_path_ = crate::path::type_path_(meta.ruhe_reflect_path());
    let params = meta
        .generics()
        .type_params()
        .map(|param| {
            let ident = &param.ident;
            quote!(<#ident as #type_path_>::#method())
        })
        .collect::<Vec<_>>();

    let mut tokens = TokenStream::new();
    for (index, param) in params.iter().enumerate() {
        if index > 0 {
            tokens.extend(quote!(", ",));
        }
        tokens.extend(quote!(#param,));
    }
    tokens
}

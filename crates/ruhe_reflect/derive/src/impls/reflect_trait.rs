use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::ItemTrait;

use crate::path::fp::{OptionFP, ResultFP};

/// Generate the `Reflect{Trait}` type trait of a trait.
pub(crate) fn impl_reflect_trait(input: TokenStream) -> TokenStream {
    let item_trait = match syn::parse::<ItemTrait>(input) {
        Ok(item) => item,
        Err(err) => return err.into_compile_error().into(),
    };

    if !item_trait.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &item_trait.generics,
            "`#[reflect_trait]` does not support generic traits",
        )
        .into_compile_error()
        .into();
    }

    let ruhe_reflect_path = crate::path::ruhe_reflect();
    let reflect_ = crate::path::reflect_(&ruhe_reflect_path);
    let typed_ = crate::path::typed_(&ruhe_reflect_path);
    let from_type_ = crate::path::from_type_(&ruhe_reflect_path);
    let alloc_utils_ = crate::path::alloc_utils_(&ruhe_reflect_path);

    let vis = &item_trait.vis;
    let trait_ident = &item_trait.ident;
    let reflect_trait_ident = format_ident!("Reflect{}", trait_ident);

    let struct_doc = format!(
        " A type trait casting `dyn Reflect` to `dyn {trait_ident}`.\n\n Register it with `#[reflect(type_trait = {reflect_trait_ident})]`."
    );
    let get_doc = format!(" Casts `&dyn Reflect` to `&dyn {trait_ident}`.");
    let get_mut_doc = format!(" Casts `&mut dyn Reflect` to `&mut dyn {trait_ident}`.");
    let get_boxed_doc = format!(
        " Casts `Box<dyn Reflect>` to `Box<dyn {trait_ident}>`, handing the box back on a type mismatch."
    );

    TokenStream::from(quote! {
        #item_trait

        #[doc = #struct_doc]
        #[derive(Clone)]
        #vis struct #reflect_trait_ident {
            get_func: fn(&dyn #reflect_) -> #OptionFP<&dyn #trait_ident>,
            get_mut_func: fn(&mut dyn #reflect_) -> #OptionFP<&mut dyn #trait_ident>,
            get_boxed_func: fn(
                #alloc_utils_::Box<dyn #reflect_>,
            ) -> #ResultFP<#alloc_utils_::Box<dyn #trait_ident>, #alloc_utils_::Box<dyn #reflect_>>,
        }

        impl #reflect_trait_ident {
            #[doc = #get_doc]
            #[inline]
            pub fn get<'a>(&self, value: &'a dyn #reflect_) -> #OptionFP<&'a dyn #trait_ident> {
                (self.get_func)(value)
            }

            #[doc = #get_mut_doc]
            #[inline]
            pub fn get_mut<'a>(&self, value: &'a mut dyn #reflect_) -> #OptionFP<&'a mut dyn #trait_ident> {
                (self.get_mut_func)(value)
            }

            #[doc = #get_boxed_doc]
            #[inline]
            pub fn get_boxed(
                &self,
                value: #alloc_utils_::Box<dyn #reflect_>,
            ) -> #ResultFP<#alloc_utils_::Box<dyn #trait_ident>, #alloc_utils_::Box<dyn #reflect_>> {
                (self.get_boxed_func)(value)
            }
        }

        impl<T: #trait_ident + #reflect_ + #typed_> #from_type_<T> for #reflect_trait_ident {
            fn from_type() -> Self {
                Self {
                    get_func: |value| {
                        value.downcast_ref::<T>().map(|value| value as &dyn #trait_ident)
                    },
                    get_mut_func: |value| {
                        value.downcast_mut::<T>().map(|value| value as &mut dyn #trait_ident)
                    },
                    get_boxed_func: |value| {
                        value.downcast::<T>().map(|value| value as #alloc_utils_::Box<dyn #trait_ident>)
                    },
                }
            }
        }
    })
}

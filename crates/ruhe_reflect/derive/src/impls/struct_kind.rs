use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::Ident;

use super::{get_auto_register_impl, impl_trait_get_type_meta, impl_trait_reflect};
use super::{impl_trait_type_path, impl_trait_typed};

use crate::derive_data::{FieldAccessors, ReflectStruct};
use crate::path::fp::OptionFP;

/// Implement full reflect for a struct with named fields.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
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

    // trait: Struct
    let struct_trait_tokens = impl_trait_struct(info);

    // trait: Reflect
    let reflect_trait_tokens = if meta.attrs().impl_switchs.impl_reflect {
        impl_trait_reflect(meta, Ident::new("Struct", Span::call_site()))
    } else {
        crate::utils::empty()
    };

    // trait: GetTypeMeta
    let get_type_meta_tokens = if meta.attrs().impl_switchs.impl_get_type_meta {
        impl_trait_get_type_meta(meta, get_registry_dependencies(info))
    } else {
        crate::utils::empty()
    };

    // feature: auto_register
    let auto_register_tokens = get_auto_register_impl(meta);

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens

        #get_type_meta_tokens

        #auto_register_tokens
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let ruhe_reflect_path = meta.ruhe_reflect_path();
    let struct_ = crate::path::struct_(ruhe_reflect_path);
    let reflect_ = crate::path::reflect_(ruhe_reflect_path);
    let option_ = OptionFP;

    let FieldAccessors {
        field_names,
        fields_ref,
        fields_mut,
        field_indices,
        field_count,
    } = FieldAccessors::new(info);

    let members_tokens = match meta.attrs().members {
        Some(span) => {
            let members_ = crate::path::members_(ruhe_reflect_path);
            quote_spanned! { span =>
                #[inline]
                fn as_members(&self) -> #option_<&dyn #members_> {
                    #option_::Some(self)
                }

                #[inline]
                fn as_members_mut(&mut self) -> #option_<&mut dyn #members_> {
                    #option_::Some(self)
                }
            }
        }
        None => crate::utils::empty(),
    };

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true, false);

    quote! {
        impl #impl_generics #struct_ for #real_ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #option_<&dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(#fields_ref),)*
                    _ => #option_::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #option_<&mut dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(#fields_mut),)*
                    _ => #option_::None,
                }
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(#fields_ref),)*
                    _ => #option_::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #option_<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(#fields_mut),)*
                    _ => #option_::None,
                }
            }

            fn name_at(&self, index: usize) -> #option_<&str> {
                match index {
                    #(#field_indices => #option_::Some(#field_names),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            #members_tokens
        }
    }
}

/// `register_dependencies` registering every reflected field type.
fn get_registry_dependencies(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let field_types = meta.active_types();
    if field_types.is_empty() {
        return crate::utils::empty();
    }

    let type_registry_ = crate::path::type_registry_(meta.ruhe_reflect_path());

    quote! {
        fn register_dependencies(registry: &mut #type_registry_) {
            #(registry.register::<#field_types>();)*
        }
    }
}

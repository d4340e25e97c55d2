//! `#[reflect_members]`: publishes the methods of an inherent `impl` block
//! as reflected properties and methods.

// -----------------------------------------------------------------------------
// Modules

mod parse;

// -----------------------------------------------------------------------------
// Generation

use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::{ToTokens, quote};
use syn::{ImplItem, ItemImpl, Type, Visibility};

use crate::path::fp::{CloneFP, OptionFP, ResultFP};
use parse::{MethodAttributes, MethodSig, Returns};

/// A property assembled from its getter and setter.
struct Property {
    name: String,
    ty: Type,
    vis: Visibility,
    getter: Option<(Ident, bool)>,
    setter: Option<Ident>,
}

struct Method {
    name: String,
    sig: MethodSig,
}

#[derive(Default)]
struct Collected {
    properties: Vec<Property>,
    methods: Vec<Method>,
}

pub(crate) fn impl_reflect_members(input: TokenStream) -> TokenStream {
    let mut item_impl = match syn::parse::<ItemImpl>(input) {
        Ok(item) => item,
        Err(err) => return err.into_compile_error().into(),
    };

    if let Some((_, path, _)) = &item_impl.trait_ {
        let err = syn::Error::new_spanned(path, "`#[reflect_members]` goes on an inherent `impl` block");
        return err.into_compile_error().into();
    }

    let mut collected = Collected::default();
    let mut errors: Option<syn::Error> = None;

    // Every method is visited so that all inert `#[reflect]` attributes are
    // stripped, even after an error.
    for item in &mut item_impl.items {
        let ImplItem::Fn(method) = item else {
            continue;
        };
        if let Err(err) = collect_method(&mut collected, method) {
            match &mut errors {
                Some(errors) => errors.combine(err),
                None => errors = Some(err),
            }
        }
    }

    let generated = match errors {
        Some(errors) => errors.into_compile_error(),
        None => impl_trait_members(&item_impl, &collected),
    };

    TokenStream::from(quote! {
        #item_impl

        const _: () = {
            #generated
        };
    })
}

fn collect_method(collected: &mut Collected, method: &mut syn::ImplItemFn) -> syn::Result<()> {
    let attrs = MethodAttributes::take_from(method)?;
    if attrs.skip {
        return Ok(());
    }

    let Some(sig) = MethodSig::parse(method)? else {
        if attrs.name.is_some() || attrs.get.is_some() || attrs.set.is_some() {
            return Err(syn::Error::new_spanned(
                &method.sig.ident,
                "only methods taking `&self` or `&mut self` can be reflected",
            ));
        }
        return Ok(());
    };

    if let Some(prop) = attrs.get {
        let (ty, by_ref) = match &sig.returns {
            Returns::Value(ty) => (ty.clone(), false),
            Returns::Borrowed(ty) => (ty.clone(), true),
            _ => return Err(syn::Error::new(sig.span(), "a getter must return a value")),
        };
        if sig.is_mut || !sig.params.is_empty() {
            return Err(syn::Error::new(sig.span(), "a getter takes `&self` and nothing else"));
        }
        let property = property_entry(collected, prop.value(), &ty, &sig.vis, sig.span())?;
        if property.getter.is_some() {
            return Err(syn::Error::new_spanned(prop, "this property already has a getter"));
        }
        property.getter = Some((sig.ident, by_ref));
        return Ok(());
    }

    if let Some(prop) = attrs.set {
        if !sig.is_mut || sig.params.len() != 1 || !matches!(sig.returns, Returns::Unit) {
            return Err(syn::Error::new(
                sig.span(),
                "a setter takes `&mut self` and one value, and returns nothing",
            ));
        }
        let ty = sig.params[0].ty.clone();
        let property = property_entry(collected, prop.value(), &ty, &sig.vis, sig.span())?;
        if property.setter.is_some() {
            return Err(syn::Error::new_spanned(prop, "this property already has a setter"));
        }
        property.setter = Some(sig.ident);
        return Ok(());
    }

    if matches!(sig.returns, Returns::Borrowed(_)) {
        return Err(syn::Error::new(
            sig.span(),
            "only property getters may return a reference, mark it `#[reflect(get = \"...\")]` or return an owned value",
        ));
    }

    let name = match attrs.name {
        Some(lit) => lit.value(),
        None => sig.ident.to_string(),
    };

    let signature = |sig: &MethodSig| {
        sig.params
            .iter()
            .map(|param| param.ty.to_token_stream().to_string())
            .collect::<Vec<_>>()
    };
    if collected
        .methods
        .iter()
        .any(|method| method.name == name && signature(&method.sig) == signature(&sig))
    {
        return Err(syn::Error::new(
            sig.span(),
            "a method with this name and these parameter types is already reflected",
        ));
    }

    collected.methods.push(Method { name, sig });
    Ok(())
}

/// Finds or creates the property `name`, checking that getter and setter agree on its type.
fn property_entry<'a>(
    collected: &'a mut Collected,
    name: String,
    ty: &Type,
    vis: &Visibility,
    span: Span,
) -> syn::Result<&'a mut Property> {
    let index = match collected.properties.iter().position(|prop| prop.name == name) {
        Some(index) => {
            let existing = &collected.properties[index].ty;
            if existing.to_token_stream().to_string() != ty.to_token_stream().to_string() {
                return Err(syn::Error::new(
                    span,
                    "getter and setter of a property must use the same type",
                ));
            }
            index
        }
        None => {
            collected.properties.push(Property {
                name,
                ty: ty.clone(),
                vis: vis.clone(),
                getter: None,
                setter: None,
            });
            collected.properties.len() - 1
        }
    };
    Ok(&mut collected.properties[index])
}

/// Generate `Members` trait implementation tokens.
fn impl_trait_members(item_impl: &ItemImpl, collected: &Collected) -> TokenStream2 {
    let ruhe_reflect_path = crate::path::ruhe_reflect();
    let reflect_ = crate::path::reflect_(&ruhe_reflect_path);
    let members_ = crate::path::members_(&ruhe_reflect_path);
    let property_info_ = crate::path::property_info_(&ruhe_reflect_path);
    let method_info_ = crate::path::method_info_(&ruhe_reflect_path);
    let param_info_ = crate::path::param_info_(&ruhe_reflect_path);
    let visibility_ = crate::path::visibility_(&ruhe_reflect_path);
    let invoke_result_ = crate::path::invoke_result_(&ruhe_reflect_path);
    let invocation_error_ = crate::path::invocation_error_(&ruhe_reflect_path);
    let alloc_utils_ = crate::path::alloc_utils_(&ruhe_reflect_path);
    let option_ = OptionFP;
    let result_ = ResultFP;
    let clone_ = CloneFP;

    // properties()
    let property_infos = collected.properties.iter().map(|prop| {
        let ty = &prop.ty;
        let name = &prop.name;
        let visibility = crate::utils::visibility_tokens(&visibility_, &prop.vis);
        let with_getter = prop.getter.as_ref().map(|_| quote!(.with_getter()));
        let with_setter = prop.setter.as_ref().map(|_| quote!(.with_setter()));
        quote! {
            #property_info_::new::<#ty>(#name)
                #with_getter
                #with_setter
                .with_visibility(#visibility)
        }
    });

    // methods()
    let method_infos = collected.methods.iter().map(|method| {
        let name = &method.name;
        let sig = &method.sig;
        let params = sig.params.iter().map(|param| {
            let ty = &param.ty;
            let param_name = &param.name;
            quote!(#param_info_::new::<#ty>(#param_name))
        });
        let with_return = match &sig.returns {
            Returns::Value(ty) | Returns::FallibleValue(ty) => quote!(.with_return::<#ty>()),
            _ => crate::utils::empty(),
        };
        let with_fallible = match &sig.returns {
            Returns::FallibleUnit | Returns::FallibleValue(_) => quote!(.with_fallible()),
            _ => crate::utils::empty(),
        };
        let with_mut_receiver = sig.is_mut.then(|| quote!(.with_mut_receiver()));
        let visibility = crate::utils::visibility_tokens(&visibility_, &sig.vis);
        quote! {
            #method_info_::new(#name, &[ #(#params),* ])
                #with_return
                #with_mut_receiver
                #with_fallible
                .with_visibility(#visibility)
        }
    });

    // get_property()
    let getter_arms = collected.properties.iter().filter_map(|prop| {
        let (getter, by_ref) = prop.getter.as_ref()?;
        let name = &prop.name;
        let ty = &prop.ty;
        let value = if *by_ref {
            quote!(<#ty as #clone_>::clone(Self::#getter(self)))
        } else {
            quote!(Self::#getter(self))
        };
        Some(quote! {
            #name => #option_::Some(<#ty as #reflect_>::into_boxed_reflect(#value)),
        })
    });

    // set_property()
    let setter_arms = collected
        .properties
        .iter()
        .filter_map(|prop| {
            let setter = prop.setter.as_ref()?;
            let name = &prop.name;
            let ty = &prop.ty;
            Some(quote! {
                #name => #option_::Some(
                    <dyn #reflect_>::take::<#ty>(value).map(|value| Self::#setter(self, value))
                ),
            })
        })
        .collect::<Vec<_>>();
    let value_ident = if setter_arms.is_empty() {
        Ident::new("_value", Span::call_site())
    } else {
        Ident::new("value", Span::call_site())
    };

    // invoke_method()
    let method_arms = collected.methods.iter().map(|method| {
        let name = &method.name;
        let sig = &method.sig;
        let ident = &sig.ident;
        let arity = sig.params.len();

        let arg_idents = (0..arity)
            .map(|index| Ident::new(&format!("__arg{index}"), Span::call_site()))
            .collect::<Vec<_>>();
        let arg_types = sig.params.iter().map(|param| &param.ty).collect::<Vec<_>>();
        let arg_indices = 0..arity;

        let unpack = if arity == 0 {
            crate::utils::empty()
        } else {
            quote! {
                let mut __args = args.into_iter();
                #(
                    let #arg_idents = match __args.next().map(|arg| <dyn #reflect_>::take::<#arg_types>(arg)) {
                        #option_::Some(#result_::Ok(value)) => value,
                        _ => return #option_::None,
                    };
                )*
            }
        };

        let call = quote!(Self::#ident(self, #(#arg_idents),*));
        let result = match &sig.returns {
            Returns::Unit => quote! {{
                #call;
                #result_::Ok(#option_::None)
            }},
            Returns::Value(ty) | Returns::Borrowed(ty) => quote! {
                #result_::Ok(#option_::Some(<#ty as #reflect_>::into_boxed_reflect(#call)))
            },
            Returns::FallibleUnit => quote! {
                match #call {
                    #result_::Ok(_) => #result_::Ok(#option_::None),
                    #result_::Err(err) => #result_::Err(#invocation_error_::new(err)),
                }
            },
            Returns::FallibleValue(ty) => quote! {
                match #call {
                    #result_::Ok(value) => #result_::Ok(#option_::Some(
                        <#ty as #reflect_>::into_boxed_reflect(value),
                    )),
                    #result_::Err(err) => #result_::Err(#invocation_error_::new(err)),
                }
            },
        };

        quote! {
            #name if args.len() == #arity #(&& <dyn #reflect_>::is::<#arg_types>(&*args[#arg_indices]))* => {
                #unpack
                #option_::Some(#result)
            }
        }
    });
    let args_ident = if collected.methods.is_empty() {
        Ident::new("_args", Span::call_site())
    } else {
        Ident::new("args", Span::call_site())
    };

    let self_ty = &item_impl.self_ty;
    let (impl_generics, _, where_clause) = item_impl.generics.split_for_impl();

    quote! {
        impl #impl_generics #members_ for #self_ty #where_clause {
            fn properties() -> #alloc_utils_::Vec<#property_info_> {
                #alloc_utils_::vec![ #(#property_infos),* ]
            }

            fn methods() -> #alloc_utils_::Vec<#method_info_> {
                #alloc_utils_::vec![ #(#method_infos),* ]
            }

            fn get_property(&self, name: &str) -> #option_<#alloc_utils_::Box<dyn #reflect_>> {
                match name {
                    #(#getter_arms)*
                    _ => #option_::None,
                }
            }

            fn set_property(
                &mut self,
                name: &str,
                #value_ident: #alloc_utils_::Box<dyn #reflect_>,
            ) -> #option_<#result_<(), #alloc_utils_::Box<dyn #reflect_>>> {
                match name {
                    #(#setter_arms)*
                    _ => #option_::None,
                }
            }

            fn invoke_method(
                &mut self,
                name: &str,
                #args_ident: #alloc_utils_::Vec<#alloc_utils_::Box<dyn #reflect_>>,
            ) -> #option_<#invoke_result_> {
                match name {
                    #(#method_arms)*
                    _ => #option_::None,
                }
            }
        }
    }
}

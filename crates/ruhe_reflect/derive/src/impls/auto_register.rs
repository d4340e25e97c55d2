use crate::derive_data::ReflectMeta;

/// Generate the `inventory` submission of the type's registration.
///
/// Generic types are skipped, their instantiations are unknown here.
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(meta: &ReflectMeta) -> proc_macro2::TokenStream {
    use quote::quote_spanned;

    let Some(span) = meta.attrs().auto_register else {
        return crate::utils::empty();
    };
    if meta.impl_with_generic() {
        return crate::utils::empty();
    }

    let auto_register_ = crate::path::auto_register_(meta.ruhe_reflect_path());
    let real_ident = meta.real_ident();

    quote_spanned! { span =>
        #auto_register_::inventory::submit!{
            #auto_register_::__AutoRegisterFunc(
                <#real_ident as #auto_register_::__RegisterType>::__register
            )
        }
    }
}

#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &ReflectMeta) -> proc_macro2::TokenStream {
    crate::utils::empty()
}

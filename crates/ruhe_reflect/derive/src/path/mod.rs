//! Paths of the `ruhe_reflect` items referenced by generated code.
//!
//! Keeping them here means a reorganisation of `ruhe_reflect` only
//! touches this module.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the access path of the `ruhe_reflect` crate for the invoking crate.
///
/// 1. Crates depending on `ruhe_reflect` get `::ruhe_reflect`.
/// 2. Crates depending on the `ruhe` facade get `::ruhe::reflect`.
/// 3. Otherwise `::ruhe_reflect`, which may be wrong.
///
/// This reads the invoking crate's `Cargo.toml`, so call it once per
/// expansion and pass the result around.
pub(crate) fn ruhe_reflect() -> syn::Path {
    ruhe_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("ruhe_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Root

#[inline(always)]
pub(crate) fn reflect_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::Reflect }
}

#[inline(always)]
pub(crate) fn alloc_utils_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::__macro_exports::alloc_utils }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::__macro_exports::auto_register }
}

// -----------------------------------------------------------------------------
// info

#[inline(always)]
pub(crate) fn type_path_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::info::TypePath }
}

#[inline(always)]
pub(crate) fn typed_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::info::Typed }
}

#[inline(always)]
pub(crate) fn type_info_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::info::TypeInfo }
}

#[inline(always)]
pub(crate) fn reflect_kind_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::info::ReflectKind }
}

#[inline(always)]
pub(crate) fn struct_info_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::info::StructInfo }
}

#[inline(always)]
pub(crate) fn named_field_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::info::NamedField }
}

#[inline(always)]
pub(crate) fn enum_info_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::info::EnumInfo }
}

#[inline(always)]
pub(crate) fn variant_info_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::info::VariantInfo }
}

#[inline(always)]
pub(crate) fn visibility_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::info::Visibility }
}

#[inline(always)]
pub(crate) fn property_info_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::info::PropertyInfo }
}

#[inline(always)]
pub(crate) fn method_info_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::info::MethodInfo }
}

#[inline(always)]
pub(crate) fn param_info_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::info::ParamInfo }
}

// -----------------------------------------------------------------------------
// impls

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::impls::NonGenericTypeInfoCell }
}

#[inline(always)]
pub(crate) fn generic_type_info_cell_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::impls::GenericTypeInfoCell }
}

#[inline(always)]
pub(crate) fn generic_type_path_cell_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::impls::GenericTypePathCell }
}

#[inline(always)]
pub(crate) fn concat_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::impls::concat }
}

// -----------------------------------------------------------------------------
// ops

#[inline(always)]
pub(crate) fn struct_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::ops::Struct }
}

#[inline(always)]
pub(crate) fn enum_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::ops::Enum }
}

#[inline(always)]
pub(crate) fn members_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::ops::Members }
}

#[inline(always)]
pub(crate) fn invoke_result_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::ops::InvokeResult }
}

#[inline(always)]
pub(crate) fn reflect_ref_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::ops::ReflectRef }
}

#[inline(always)]
pub(crate) fn reflect_mut_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::ops::ReflectMut }
}

// -----------------------------------------------------------------------------
// access

#[inline(always)]
pub(crate) fn invocation_error_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::access::InvocationError }
}

// -----------------------------------------------------------------------------
// registry

#[inline(always)]
pub(crate) fn get_type_meta_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::registry::GetTypeMeta }
}

#[inline(always)]
pub(crate) fn type_meta_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::registry::TypeMeta }
}

#[inline(always)]
pub(crate) fn type_registry_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::registry::TypeRegistry }
}

#[inline(always)]
pub(crate) fn from_type_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::registry::FromType }
}

#[inline(always)]
pub(crate) fn type_trait_default_(ruhe_reflect_path: &syn::Path) -> TokenStream {
    quote! { #ruhe_reflect_path::registry::TypeTraitDefault }
}

use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}

/// Maps a declared visibility onto `Visibility::{Public, Restricted, Private}`.
pub(crate) fn visibility_tokens(visibility_: &TokenStream, vis: &syn::Visibility) -> TokenStream {
    match vis {
        syn::Visibility::Public(_) => quote!(#visibility_::Public),
        syn::Visibility::Restricted(_) => quote!(#visibility_::Restricted),
        syn::Visibility::Inherited => quote!(#visibility_::Private),
    }
}

//! Fully qualified paths of `core` items.
//!
//! Generated code must not depend on what the invoking crate has in scope,
//! so `Option` is written as `::core::option::Option` and so on.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_fp {
    ($($name:ident => [$($path:tt)+]),* $(,)?) => {
        $(
            pub(crate) struct $name;

            impl ToTokens for $name {
                #[inline]
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    tokens.extend(quote!($($path)+));
                }
            }
        )*
    };
}

define_fp! {
    OptionFP => [::core::option::Option],
    ResultFP => [::core::result::Result],
    CloneFP => [::core::clone::Clone],
    PartialEqFP => [::core::cmp::PartialEq],
    DebugFP => [::core::fmt::Debug],
    AnyFP => [::core::any::Any],
    SendFP => [::core::marker::Send],
    SyncFP => [::core::marker::Sync],
}

//! Utilities for implementing the reflection traits, and the built-in impls.
//!
//! - [`concat`]: string concatenation with one allocation.
//! - [`NonGenericTypeInfoCell`]: backs [`Typed`] for non-generic types.
//! - [`GenericTypeInfoCell`]: backs [`Typed`] for generic types.
//! - [`GenericTypePathCell`]: backs [`TypePath`] for generic types.
//! - `xxx_partial_eq` / `xxx_debug`: defaults of [`Reflect::reflect_partial_eq`]
//!   and [`Reflect::reflect_debug`].
//!
//! ## Implemented Menu
//!
//! All built-in types are opaque.
//!
//! - `bool`, `char`, `()`
//! - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//! - `&'static str`, `String`, `Cow<'static, str>`
//! - `Vec<T>`, `Option<T>`
//!
//! [`Typed`]: crate::info::Typed
//! [`TypePath`]: crate::info::TypePath
//! [`Reflect::reflect_partial_eq`]: crate::Reflect::reflect_partial_eq
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod common;

mod generic;
mod primitive;
mod text;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use common::impl_opaque_reflect;
pub(crate) use text::as_text;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};
pub use common::{enum_debug, enum_partial_eq, struct_debug, struct_partial_eq};

/// Concatenates string slices with a single allocation.
///
/// Mostly used to build generic type paths.
///
/// ```
/// use ruhe_reflect::impls;
///
/// let s = impls::concat(&["alloc::vec::Vec", "<", "u8", ">"]);
/// assert_eq!(s, "alloc::vec::Vec<u8>");
/// assert_eq!(s.capacity(), 19);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> ::alloc::string::String {
    let len = arr.iter().map(|item| item.len()).sum();
    let mut res = ::alloc::string::String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}

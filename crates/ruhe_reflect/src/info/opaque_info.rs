use crate::Reflect;
use crate::info::{Type, TypePath, impl_type_fn};

/// Information about a type whose internals are not reflected.
///
/// Primitives, strings and containers are opaque.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<T: Reflect + TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}

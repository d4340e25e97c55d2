use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{Enum, Struct};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable, kind-specific view of a reflected value.
///
/// Returned by [`Reflect::reflect_ref`].
///
/// # Examples
///
/// ```
/// use ruhe_reflect::{Reflect, ops::ReflectRef};
///
/// let value = 5_u64;
/// assert!(matches!(value.reflect_ref(), ReflectRef::Opaque(_)));
/// assert!(value.reflect_ref().as_struct().is_err());
/// ```
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    Enum(&'a dyn Enum),
    Opaque(&'a dyn Reflect),
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable, kind-specific view of a reflected value.
///
/// Returned by [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    Enum(&'a mut dyn Enum),
    Opaque(&'a mut dyn Reflect),
}

// -----------------------------------------------------------------------------
// Casting

macro_rules! impl_kind_fn {
    ($($mut:ident)?) => {
        /// The kind of the viewed value.
        #[inline]
        pub const fn kind(&self) -> ReflectKind {
            match self {
                Self::Struct(_) => ReflectKind::Struct,
                Self::Enum(_) => ReflectKind::Enum,
                Self::Opaque(_) => ReflectKind::Opaque,
            }
        }

        /// Returns the struct view, or an error for other kinds.
        pub fn as_struct(self) -> Result<&'a $($mut)? dyn Struct, ReflectKindError> {
            let received = self.kind();
            match self {
                Self::Struct(value) => Ok(value),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::Struct,
                    received,
                }),
            }
        }

        /// Returns the enum view, or an error for other kinds.
        pub fn as_enum(self) -> Result<&'a $($mut)? dyn Enum, ReflectKindError> {
            let received = self.kind();
            match self {
                Self::Enum(value) => Ok(value),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::Enum,
                    received,
                }),
            }
        }
    };
}

impl<'a> ReflectRef<'a> {
    impl_kind_fn!();
}

impl<'a> ReflectMut<'a> {
    impl_kind_fn!(mut);
}

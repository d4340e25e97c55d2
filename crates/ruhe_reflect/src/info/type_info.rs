use core::fmt;

use thiserror::Error;

use crate::info::{EnumInfo, OpaqueInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// The shape of a reflected type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// A struct with named fields.
    Struct,
    /// An enum whose variants carry no data.
    Enum,
    /// Anything whose internals are not reflected.
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::Enum => f.pad("Enum"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Returned when a [`TypeInfo`] or reflected value has another kind
/// than the one requested.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("reflect kind mismatch: expected {expected}, received {received}")]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time information about a reflected type.
///
/// # Examples
///
/// ```
/// use ruhe_reflect::info::{ReflectKind, Typed};
///
/// let info = <u8 as Typed>::type_info();
/// assert_eq!(info.kind(), ReflectKind::Opaque);
/// assert!(info.as_struct().is_err());
/// assert!(info.type_is::<u8>());
/// ```
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    Enum(EnumInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Returns the [`", stringify!($info), "`], or an error for other kinds.")]
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_enum: Enum => EnumInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the described [`Type`].
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::Enum(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Enum(_) => ReflectKind::Enum,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    #[inline]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }
}

//! Coercion of loose values into enum values.
//!
//! A value is first classified into an [`EnumInput`]:
//!
//! - a string (`String`, `&'static str`, `Cow<'static, str>`) becomes
//!   [`EnumInput::Name`],
//! - any primitive integer becomes [`EnumInput::Ordinal`],
//! - everything else stays [`EnumInput::Typed`].
//!
//! Names match variant names exactly, case included. Ordinals match
//! declared discriminants exactly, no value outside the declared variants
//! is ever produced. A typed value converts only to its own enum type.
//!
//! # Examples
//!
//! ```
//! use ruhe_reflect::Reflect;
//! use ruhe_reflect::convert::{EnumConversionError, convert_to_enum_as};
//! use ruhe_reflect::derive::Reflect;
//!
//! #[derive(Reflect, Debug, PartialEq)]
//! enum Phase {
//!     Solid = 0,
//!     Liquid = 1,
//! }
//!
//! assert_eq!(convert_to_enum_as::<Phase>("Liquid".into_boxed_reflect()), Ok(Phase::Liquid));
//! assert_eq!(convert_to_enum_as::<Phase>(0_u8.into_boxed_reflect()), Ok(Phase::Solid));
//! assert_eq!(convert_to_enum_as::<Phase>(Phase::Solid.into_boxed_reflect()), Ok(Phase::Solid));
//!
//! assert!(matches!(
//!     convert_to_enum_as::<Phase>("liquid".into_boxed_reflect()),
//!     Err(EnumConversionError::UnknownName { .. }),
//! ));
//! ```

use alloc::borrow::{Cow, ToOwned};
use alloc::boxed::Box;
use alloc::string::String;

use thiserror::Error;

use crate::Reflect;
use crate::info::{EnumInfo, Typed, VariantInfo};
use crate::ops::Enum;

// -----------------------------------------------------------------------------
// EnumConversionError

/// Failure of an enum coercion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EnumConversionError {
    /// The string names no variant of the target.
    #[error("`{name}` is not a variant of `{target}`")]
    UnknownName { name: String, target: &'static str },
    /// No variant of the target has this discriminant.
    #[error("no variant of `{target}` has the discriminant {ordinal}")]
    UnknownOrdinal { ordinal: i128, target: &'static str },
    /// A `u128` too large for any discriminant.
    #[error("{value} is out of the discriminant range")]
    OrdinalOverflow { value: u128 },
    /// The value is neither a string, an integer nor the target type.
    #[error("a `{found}` cannot be converted into `{target}`")]
    Incompatible {
        found: &'static str,
        target: &'static str,
    },
}

// -----------------------------------------------------------------------------
// EnumInput

/// The shapes a value can take on its way into an enum.
#[derive(Debug)]
pub enum EnumInput {
    /// A variant name.
    Name(String),
    /// A discriminant.
    Ordinal(i128),
    /// Any other value, convertible only if it already is the target.
    Typed(Box<dyn Reflect>),
}

macro_rules! try_ordinal {
    ($value:ident: $($ty:ty),*) => {$(
        if let Some(n) = $value.downcast_ref::<$ty>() {
            return Ok(Self::Ordinal(*n as i128));
        }
    )*};
}

impl EnumInput {
    /// Classifies `value`.
    ///
    /// Fails only for a `u128` above `i128::MAX`.
    pub fn classify(value: Box<dyn Reflect>) -> Result<Self, EnumConversionError> {
        try_ordinal!(value: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

        if let Some(n) = value.downcast_ref::<u128>() {
            return i128::try_from(*n)
                .map(Self::Ordinal)
                .map_err(|_| EnumConversionError::OrdinalOverflow { value: *n });
        }

        let value = match value.take::<String>() {
            Ok(name) => return Ok(Self::Name(name)),
            Err(value) => value,
        };
        if let Some(name) = value.downcast_ref::<&'static str>() {
            return Ok(Self::Name((*name).to_owned()));
        }
        match value.take::<Cow<'static, str>>() {
            Ok(name) => Ok(Self::Name(name.into_owned())),
            Err(value) => Ok(Self::Typed(value)),
        }
    }

    /// Returns `true` for values that classify as a name or an ordinal.
    ///
    /// Implicit coercion on assignment only applies to these.
    pub fn is_loose(value: &dyn Reflect) -> bool {
        crate::impls::as_text(value).is_some() || is_integer(value)
    }
}

fn is_integer(value: &dyn Reflect) -> bool {
    macro_rules! any_of {
        ($($ty:ty),*) => { false $(|| value.is::<$ty>())* };
    }
    any_of!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize)
}

// -----------------------------------------------------------------------------
// Conversion

/// Converts `value` into a variant of the enum described by `info`.
///
/// The result is a boxed value of the enum type.
pub fn convert_to_enum(
    value: Box<dyn Reflect>,
    info: &EnumInfo,
) -> Result<Box<dyn Reflect>, EnumConversionError> {
    let target = info.type_path();
    match EnumInput::classify(value)? {
        EnumInput::Typed(value) if value.ty_id() == info.ty_id() => Ok(value),
        EnumInput::Typed(value) => Err(EnumConversionError::Incompatible {
            found: value.reflect_type_path(),
            target,
        }),
        EnumInput::Name(name) => match info.variant(&name) {
            Some(variant) => Ok(variant.construct()),
            None => Err(EnumConversionError::UnknownName { name, target }),
        },
        EnumInput::Ordinal(ordinal) => info
            .variant_with_discriminant(ordinal)
            .map(VariantInfo::construct)
            .ok_or(EnumConversionError::UnknownOrdinal { ordinal, target }),
    }
}

/// Converts `value` into the enum `T`.
pub fn convert_to_enum_as<T: Enum + Typed>(value: Box<dyn Reflect>) -> Result<T, EnumConversionError> {
    let incompatible = |found| EnumConversionError::Incompatible {
        found,
        target: T::type_path(),
    };
    let Ok(info) = T::type_info().as_enum() else {
        return Err(incompatible(value.reflect_type_path()));
    };
    convert_to_enum(value, info)?
        .take::<T>()
        .map_err(|value| incompatible(value.reflect_type_path()))
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::string::String;

    use super::{EnumConversionError, EnumInput, convert_to_enum, convert_to_enum_as};
    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::info::{TypePath, Typed};

    #[derive(Reflect, Debug, PartialEq, Clone, Copy)]
    enum TestEnum {
        Tchotchke = 0,
        Dingsbums = 1,
    }

    #[derive(Reflect, Debug, PartialEq)]
    #[repr(i16)]
    enum Sparse {
        Low = -4,
        High = 300,
    }

    // Larger discriminants are rejected by the derive.
    #[derive(Reflect, Debug, PartialEq)]
    #[repr(u128)]
    enum Wide {
        Zero = 0,
        Top = i128::MAX as u128,
    }

    #[test]
    fn identity() {
        for value in [TestEnum::Tchotchke, TestEnum::Dingsbums] {
            assert_eq!(convert_to_enum_as::<TestEnum>(value.into_boxed_reflect()), Ok(value));
        }
    }

    #[test]
    fn by_name() {
        assert_eq!(
            convert_to_enum_as::<TestEnum>("Tchotchke".into_boxed_reflect()),
            Ok(TestEnum::Tchotchke),
        );
        assert_eq!(
            convert_to_enum_as::<TestEnum>(String::from("Dingsbums").into_boxed_reflect()),
            Ok(TestEnum::Dingsbums),
        );
        assert_eq!(
            convert_to_enum_as::<TestEnum>(Cow::<'static, str>::Borrowed("Dingsbums").into_boxed_reflect()),
            Ok(TestEnum::Dingsbums),
        );
    }

    #[test]
    fn by_ordinal() {
        assert_eq!(convert_to_enum_as::<TestEnum>(1_i32.into_boxed_reflect()), Ok(TestEnum::Dingsbums));
        assert_eq!(convert_to_enum_as::<TestEnum>(0_u64.into_boxed_reflect()), Ok(TestEnum::Tchotchke));
        assert_eq!(convert_to_enum_as::<Sparse>((-4_i8).into_boxed_reflect()), Ok(Sparse::Low));
        assert_eq!(convert_to_enum_as::<Sparse>(300_usize.into_boxed_reflect()), Ok(Sparse::High));
    }

    #[test]
    fn wide_discriminants_stay_exact() {
        let info = Wide::type_info().as_enum().unwrap();
        assert_eq!(info.variant("Top").map(|v| v.discriminant()), Some(i128::MAX));
        assert_eq!(
            convert_to_enum_as::<Wide>((i128::MAX as u128).into_boxed_reflect()),
            Ok(Wide::Top),
        );
        assert_eq!(convert_to_enum_as::<Wide>(0_u8.into_boxed_reflect()), Ok(Wide::Zero));
        assert_eq!(
            convert_to_enum_as::<Wide>((-1_i8).into_boxed_reflect()),
            Err(EnumConversionError::UnknownOrdinal {
                ordinal: -1,
                target: Wide::type_path(),
            }),
        );
        assert_eq!(
            convert_to_enum_as::<Wide>(u128::MAX.into_boxed_reflect()),
            Err(EnumConversionError::OrdinalOverflow { value: u128::MAX }),
        );
    }

    #[test]
    fn runtime_token() {
        let info = TestEnum::type_info().as_enum().unwrap();
        let value = convert_to_enum("Dingsbums".into_boxed_reflect(), info).unwrap();
        assert_eq!(value.downcast_ref::<TestEnum>(), Some(&TestEnum::Dingsbums));
    }

    #[test]
    fn failures() {
        assert_eq!(
            convert_to_enum_as::<TestEnum>("NoSuchMember".into_boxed_reflect()),
            Err(EnumConversionError::UnknownName {
                name: "NoSuchMember".into(),
                target: TestEnum::type_path(),
            }),
        );
        assert!(matches!(
            convert_to_enum_as::<TestEnum>("dingsbums".into_boxed_reflect()),
            Err(EnumConversionError::UnknownName { .. }),
        ));
        assert_eq!(
            convert_to_enum_as::<TestEnum>(99_u8.into_boxed_reflect()),
            Err(EnumConversionError::UnknownOrdinal {
                ordinal: 99,
                target: TestEnum::type_path(),
            }),
        );
        assert_eq!(
            convert_to_enum_as::<TestEnum>(u128::MAX.into_boxed_reflect()),
            Err(EnumConversionError::OrdinalOverflow { value: u128::MAX }),
        );
        assert_eq!(
            convert_to_enum_as::<TestEnum>(1.0_f32.into_boxed_reflect()),
            Err(EnumConversionError::Incompatible {
                found: "f32",
                target: TestEnum::type_path(),
            }),
        );
        assert!(matches!(
            convert_to_enum_as::<TestEnum>(Sparse::Low.into_boxed_reflect()),
            Err(EnumConversionError::Incompatible { .. }),
        ));
    }

    #[test]
    fn loose_values() {
        assert!(EnumInput::is_loose(&"A"));
        assert!(EnumInput::is_loose(&7_u128));
        assert!(!EnumInput::is_loose(&true));
        assert!(!EnumInput::is_loose(&TestEnum::Tchotchke));
    }
}

use core::fmt;

use crate::Reflect;
use crate::ops::{Enum, ReflectRef, Struct};

/// Default [`Reflect::reflect_partial_eq`] for structs.
///
/// `Some(false)` unless `y` is a struct of the same type. Otherwise the
/// fields are compared by name, and the first field that is not
/// `Some(true)` decides the result.
pub fn struct_partial_eq(x: &dyn Struct, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Struct(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.ty_id() != y.ty_id() || x.field_len() != y.field_len() {
        return Some(false);
    }

    for (index, y_field) in y.iter_fields().enumerate() {
        let Some(x_field) = y.name_at(index).and_then(|name| x.field(name)) else {
            return Some(false);
        };
        let result = x_field.reflect_partial_eq(y_field);
        if result != Some(true) {
            return result;
        }
    }
    Some(true)
}

/// Default [`Reflect::reflect_debug`] for structs.
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_name());
    for (index, field) in dyn_struct.iter_fields().enumerate() {
        if let Some(name) = dyn_struct.name_at(index) {
            debug.field(name, &field as &dyn fmt::Debug);
        }
    }
    debug.finish()
}

/// Default [`Reflect::reflect_partial_eq`] for enums.
///
/// Equal when `y` is the same enum type at the same variant.
pub fn enum_partial_eq(x: &dyn Enum, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Enum(y) = y.reflect_ref() else {
        return Some(false);
    };
    Some(x.ty_id() == y.ty_id() && x.variant_index() == y.variant_index())
}

/// Default [`Reflect::reflect_debug`] for enums, prints the variant name.
#[inline]
pub fn enum_debug(dyn_enum: &dyn Enum, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(dyn_enum.variant_name())
}

/// Implements [`Reflect`] for an opaque type with `PartialEq` and `Debug`.
macro_rules! impl_opaque_reflect {
    () => {
        $crate::reflection::impl_reflect_cast_fn!(Opaque);

        fn reflect_partial_eq(&self, other: &dyn $crate::Reflect) -> Option<bool> {
            match <dyn $crate::Reflect>::downcast_ref::<Self>(other) {
                Some(other) => Some(PartialEq::eq(self, other)),
                None => Some(false),
            }
        }

        #[inline]
        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            ::core::fmt::Debug::fmt(self, f)
        }
    };
}

pub(crate) use impl_opaque_reflect;

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;

    use crate::Reflect;
    use crate::derive::Reflect;

    #[derive(Reflect)]
    struct Label {
        text: String,
        size: u8,
    }

    #[derive(Reflect)]
    struct Other {
        text: String,
        size: u8,
    }

    fn label(text: &str, size: u8) -> Label {
        Label {
            text: text.into(),
            size,
        }
    }

    #[test]
    fn struct_fields_compared_by_name() {
        let a = label("ok", 1);
        assert_eq!(a.reflect_partial_eq(&label("ok", 1)), Some(true));
        assert_eq!(a.reflect_partial_eq(&label("ok", 2)), Some(false));
        let other = Other {
            text: "ok".into(),
            size: 1,
        };
        assert_eq!(a.reflect_partial_eq(&other), Some(false));
        assert_eq!(a.reflect_partial_eq(&1_u8), Some(false));
    }

    #[test]
    fn struct_debug_lists_fields() {
        let value: &dyn Reflect = &label("ok", 3);
        assert_eq!(format!("{value:?}"), r#"Label { text: "ok", size: 3 }"#);
    }
}

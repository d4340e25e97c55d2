use alloc::borrow::Cow;
use alloc::string::String;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTraitDefault};

macro_rules! impl_text {
    ($ty:ty, $path:literal, $name:literal, $ident:literal, $module:literal) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }
            #[inline]
            fn type_name() -> &'static str {
                $name
            }
            #[inline]
            fn type_ident() -> &'static str {
                $ident
            }
            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl Reflect for $ty {
            crate::impls::impl_opaque_reflect!();
        }

        impl GetTypeMeta for $ty {
            fn get_type_meta() -> TypeMeta {
                let mut type_meta = TypeMeta::with_capacity::<Self>(1);
                type_meta.insert_trait::<TypeTraitDefault>(FromType::<Self>::from_type());
                type_meta
            }
        }
    };
}

impl_text!(String, "alloc::string::String", "String", "String", "alloc::string");
impl_text!(
    Cow<'static, str>,
    "alloc::borrow::Cow<str>",
    "Cow<str>",
    "Cow",
    "alloc::borrow"
);

/// Returns the text of a `String`, `&'static str` or `Cow<'static, str>`.
pub(crate) fn as_text(value: &dyn Reflect) -> Option<&str> {
    if let Some(text) = value.downcast_ref::<String>() {
        Some(text.as_str())
    } else if let Some(text) = value.downcast_ref::<&'static str>() {
        Some(*text)
    } else {
        value.downcast_ref::<Cow<'static, str>>().map(|text| &**text)
    }
}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::string::String;

    use super::as_text;
    use crate::info::TypePath;

    #[test]
    fn text_values() {
        assert_eq!(as_text(&String::from("a")), Some("a"));
        assert_eq!(as_text(&"b"), Some("b"));
        assert_eq!(as_text(&Cow::<'static, str>::Borrowed("c")), Some("c"));
        assert_eq!(as_text(&1_u8), None);
        assert_eq!(<String as TypePath>::module_path(), Some("alloc::string"));
    }
}

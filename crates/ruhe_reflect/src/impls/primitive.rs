use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTraitDefault};

macro_rules! impl_primitive {
    ($($ty:ty => $name:literal),* $(,)?) => {$(
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $name
            }
            #[inline]
            fn type_name() -> &'static str {
                $name
            }
            #[inline]
            fn type_ident() -> &'static str {
                $name
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
    )*};
}

impl_primitive! {
    () => "()",
    bool => "bool",
    char => "char",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    f32 => "f32",
    f64 => "f64",
    &'static str => "&str",
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};

    #[test]
    fn primitive_paths() {
        assert_eq!(<u8 as TypePath>::type_path(), "u8");
        assert_eq!(<&'static str as TypePath>::type_name(), "&str");
        assert_eq!(<() as TypePath>::module_path(), None);
        assert_eq!(<f64 as Typed>::type_info().kind(), ReflectKind::Opaque);
    }

    #[test]
    fn primitive_eq_and_debug() {
        let a: &dyn Reflect = &3_i16;
        assert_eq!(a.reflect_partial_eq(&3_i16), Some(true));
        assert_eq!(a.reflect_partial_eq(&4_i16), Some(false));
        assert_eq!(a.reflect_partial_eq(&3_i32), Some(false));
        assert_eq!(format!("{a:?}"), "3");
    }
}

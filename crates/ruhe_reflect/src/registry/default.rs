use alloc::boxed::Box;

use crate::Reflect;
use crate::info::Typed;
use crate::registry::FromType;

/// Builds default instances of a registered type.
///
/// Inserted by `#[reflect(default)]` and for every built-in type.
///
/// ```
/// use core::any::TypeId;
/// use ruhe_reflect::registry::{TypeRegistry, TypeTraitDefault};
///
/// let registry = TypeRegistry::new();
/// let default = registry
///     .get_type_trait::<TypeTraitDefault>(TypeId::of::<u32>())
///     .unwrap();
///
/// assert_eq!(default.default().take::<u32>().ok(), Some(0));
/// ```
#[derive(Clone)]
pub struct TypeTraitDefault {
    func: fn() -> Box<dyn Reflect>,
}

impl TypeTraitDefault {
    #[inline(always)]
    pub fn default(&self) -> Box<dyn Reflect> {
        (self.func)()
    }
}

impl<T: Default + Typed + Reflect> FromType<T> for TypeTraitDefault {
    fn from_type() -> Self {
        Self {
            func: || Box::<T>::default(),
        }
    }
}

use alloc::boxed::Box;
use core::any::Any;

/// A capability of a registered type, stored in its [`TypeMeta`].
///
/// Implemented for every `Clone + Send + Sync + 'static` type, so a type
/// trait is any cloneable struct, usually holding function pointers built
/// by [`FromType`].
///
/// [`TypeMeta`]: crate::registry::TypeMeta
/// [`FromType`]: crate::registry::FromType
pub trait TypeTrait: Any + Send + Sync {
    /// Clones into a new box.
    fn clone_type_trait(&self) -> Box<dyn TypeTrait>;
}

impl<T: Clone + Any + Send + Sync> TypeTrait for T {
    #[inline]
    fn clone_type_trait(&self) -> Box<dyn TypeTrait> {
        Box::new(self.clone())
    }
}

impl dyn TypeTrait {
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        <dyn Any>::is::<T>(self)
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }
}

impl core::fmt::Debug for dyn TypeTrait {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("TypeTrait")
    }
}

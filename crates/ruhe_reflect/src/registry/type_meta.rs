use alloc::boxed::Box;
use core::any::TypeId;

use ruhe_utils::TypeIdMap;

use crate::info::{Type, TypeInfo, Typed};
use crate::registry::{TypeRegistry, TypeTrait};

// -----------------------------------------------------------------------------
// TypeMeta

/// The registry entry of one type: its [`TypeInfo`] and a table of
/// [`TypeTrait`]s.
///
/// # Examples
///
/// ```
/// use ruhe_reflect::registry::{FromType, TypeMeta, TypeTraitDefault};
///
/// let mut meta = TypeMeta::of::<String>();
/// assert!(!meta.has_trait::<TypeTraitDefault>());
///
/// meta.insert_trait::<TypeTraitDefault>(FromType::<String>::from_type());
/// assert!(meta.has_trait::<TypeTraitDefault>());
/// assert_eq!(meta.type_path(), "alloc::string::String");
/// ```
pub struct TypeMeta {
    // Cached to skip the kind match of `TypeInfo::ty`.
    ty: &'static Type,
    type_info: &'static TypeInfo,
    traits: TypeIdMap<Box<dyn TypeTrait>>,
}

impl TypeMeta {
    /// Creates an entry for `T` with an empty trait table.
    #[inline]
    pub fn of<T: Typed>() -> Self {
        Self::with_capacity::<T>(0)
    }

    #[inline]
    pub fn with_capacity<T: Typed>(capacity: usize) -> Self {
        let type_info = T::type_info();
        Self {
            ty: type_info.ty(),
            type_info,
            traits: TypeIdMap::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.type_info
    }

    #[inline(always)]
    pub const fn ty(&self) -> &'static Type {
        self.ty
    }

    crate::info::impl_type_fn!();

    /// Inserts a type trait, replacing one of the same type.
    #[inline]
    pub fn insert_trait<T: TypeTrait>(&mut self, data: T) {
        self.traits.insert(TypeId::of::<T>(), Box::new(data));
    }

    /// Returns the type trait `T` if the type carries it.
    pub fn get_trait<T: TypeTrait>(&self) -> Option<&T> {
        self.traits.get(&TypeId::of::<T>())?.downcast_ref::<T>()
    }

    #[inline]
    pub fn has_trait<T: TypeTrait>(&self) -> bool {
        self.has_trait_id(TypeId::of::<T>())
    }

    /// Same as [`has_trait`](Self::has_trait) with the trait given by id.
    #[inline]
    pub fn has_trait_id(&self, trait_id: TypeId) -> bool {
        self.traits.contains(&trait_id)
    }

    /// Number of type traits carried.
    #[inline]
    pub fn trait_count(&self) -> usize {
        self.traits.len()
    }
}

impl Clone for TypeMeta {
    fn clone(&self) -> Self {
        let mut traits = TypeIdMap::with_capacity(self.trait_count());
        for (id, data) in self.traits.iter() {
            traits.insert(*id, (**data).clone_type_trait());
        }
        Self {
            ty: self.ty,
            type_info: self.type_info,
            traits,
        }
    }
}

impl core::fmt::Debug for TypeMeta {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypeMeta")
            .field("type_path", &self.type_path())
            .field("traits", &self.trait_count())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// GetTypeMeta

/// Builds the [`TypeMeta`] of a type for registration.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect).
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `GetTypeMeta` so cannot be registered",
    note = "consider annotating `{Self}` with `#[derive(Reflect)]`"
)]
pub trait GetTypeMeta: Typed {
    fn get_type_meta() -> TypeMeta;

    /// Registers the types this one depends on, such as field types.
    fn register_dependencies(_registry: &mut TypeRegistry) {}
}

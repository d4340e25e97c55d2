use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::TypeId;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use ruhe_utils::TypeIdMap;
use ruhe_utils::hash::{HashMap, HashSet};

use crate::info::{TypeInfo, Typed};
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTrait};

// -----------------------------------------------------------------------------
// TypeRegistry

/// Storage of [`TypeMeta`]s.
///
/// Besides the [`TypeId`], types can be found by their full type path,
/// by their short type name (unless it is ambiguous) and by the crate
/// they are declared in.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use ruhe_reflect::derive::Reflect;
/// use ruhe_reflect::registry::TypeRegistry;
///
/// #[derive(Reflect)]
/// #[reflect(type_path = "inventory::items::Lamp")]
/// struct Lamp {
///     watts: u16,
/// }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Lamp>();
///
/// assert!(registry.contains(TypeId::of::<Lamp>()));
/// assert!(registry.get_with_type_path("inventory::items::Lamp").is_some());
/// assert!(registry.get_with_type_name("Lamp").is_some());
/// assert!(registry.contains_module("inventory"));
/// assert!(!registry.contains_module("warehouse"));
/// ```
pub struct TypeRegistry {
    type_meta_table: TypeIdMap<TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
    crate_to_ids: HashMap<&'static str, Vec<TypeId>>,
    auto_registered: bool,
}

impl Default for TypeRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates a registry without any types.
    pub fn empty() -> Self {
        Self {
            type_meta_table: TypeIdMap::new(),
            type_path_to_id: HashMap::default(),
            type_name_to_id: HashMap::default(),
            ambiguous_names: HashSet::default(),
            crate_to_ids: HashMap::default(),
            auto_registered: false,
        }
    }

    /// Creates a registry with the built-in primitive and string types.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<()>();
        registry.register::<bool>();
        registry.register::<char>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<u128>();
        registry.register::<usize>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<i128>();
        registry.register::<isize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<&'static str>();
        registry.register::<String>();
        registry.register::<Cow<'static, str>>();
        registry
    }

    // The type must not be registered yet.
    fn add_new_type_indices(&mut self, type_meta: &TypeMeta) {
        let ty = type_meta.ty();
        let type_name = ty.name();

        if !self.ambiguous_names.contains(type_name) {
            if self.type_name_to_id.remove(type_name).is_some() {
                self.ambiguous_names.insert(type_name);
            } else {
                self.type_name_to_id.insert(type_name, ty.id());
            }
        }

        let type_path = ty.path();
        if self.type_path_to_id.contains_key(type_path) {
            log::warn!("type path `{type_path}` is already registered for another type, keeping the first");
        } else {
            self.type_path_to_id.insert(type_path, ty.id());
        }

        if let Some(crate_name) = ty.crate_name() {
            self.crate_to_ids.entry(crate_name).or_default().push(ty.id());
        }
    }

    /// Registers `T` and its dependencies.
    ///
    /// Registering a type twice does nothing.
    pub fn register<T: GetTypeMeta>(&mut self) {
        if self.contains(TypeId::of::<T>()) {
            return;
        }
        let type_meta = T::get_type_meta();
        self.add_new_type_indices(&type_meta);
        self.type_meta_table.insert(TypeId::of::<T>(), type_meta);
        T::register_dependencies(self);
    }

    /// Inserts `type_meta`, replacing the trait table of an existing entry.
    pub fn insert_type_meta(&mut self, type_meta: TypeMeta) {
        if !self.contains(type_meta.ty_id()) {
            self.add_new_type_indices(&type_meta);
        }
        self.type_meta_table.insert(type_meta.ty_id(), type_meta);
    }

    /// Runs every registration submitted with the `auto_register` feature.
    ///
    /// Returns `false` if the feature is off or the platform does not
    /// support static registration. Later calls are cheap.
    ///
    /// ```
    /// use ruhe_reflect::registry::TypeRegistry;
    ///
    /// let mut registry = TypeRegistry::new();
    /// let supported = registry.auto_register();
    /// assert_eq!(supported, ruhe_reflect::cfg::auto_register!());
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        crate::cfg::auto_register! {
            if {
                use crate::__macro_exports::auto_register;
                if !self.auto_registered {
                    let before = self.type_meta_table.len();
                    let submitted = auto_register::__register_types(self);
                    log::debug!(
                        "auto_register ran {submitted} registrations, {} new types",
                        self.type_meta_table.len() - before,
                    );
                    self.auto_registered = submitted > 0;
                }
                self.auto_registered
            } else {
                false
            }
        }
    }

    /// Inserts the type trait `D` for the registered type `T`.
    ///
    /// # Panics
    ///
    /// Panics if `T` is not registered.
    pub fn register_type_trait<T: Typed, D: TypeTrait + FromType<T>>(&mut self) {
        match self.type_meta_table.get_mut(&TypeId::of::<T>()) {
            Some(type_meta) => type_meta.insert_trait(D::from_type()),
            None => panic!(
                "Called `TypeRegistry::register_type_trait`, but the type `{}` of type trait `{}` is not registered",
                T::type_path(),
                core::any::type_name::<D>(),
            ),
        }
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains(&type_id)
    }

    /// Returns `true` if any registered type is declared in crate `name`.
    #[inline]
    pub fn contains_module(&self, name: &str) -> bool {
        self.crate_to_ids.contains_key(name)
    }

    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    #[inline]
    pub fn get_mut(&mut self, type_id: TypeId) -> Option<&mut TypeMeta> {
        self.type_meta_table.get_mut(&type_id)
    }

    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Lookup by short name, `None` if the name is ambiguous.
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&TypeMeta> {
        match self.type_name_to_id.get(type_name) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// The types declared in crate `name`.
    pub fn iter_module<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a TypeMeta> {
        self.crate_to_ids
            .get(name)
            .into_iter()
            .flatten()
            .filter_map(|id| self.get(*id))
    }

    pub fn get_type_trait<T: TypeTrait>(&self, type_id: TypeId) -> Option<&T> {
        match self.get(type_id) {
            Some(type_meta) => type_meta.get_trait::<T>(),
            None => None,
        }
    }

    pub fn get_type_info(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.get(type_id).map(TypeMeta::type_info)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }
}

impl core::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.type_path_to_id.keys()).finish()
    }
}

// -----------------------------------------------------------------------------
// TypeRegistryArc

/// A [`TypeRegistry`] shared behind an `Arc<RwLock<_>>`.
///
/// Lock poisoning is ignored, the registry has no invariant a panicking
/// writer could break halfway.
#[derive(Clone, Default)]
pub struct TypeRegistryArc {
    pub internal: Arc<RwLock<TypeRegistry>>,
}

impl TypeRegistryArc {
    pub fn new(registry: TypeRegistry) -> Self {
        Self {
            internal: Arc::new(RwLock::new(registry)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, TypeRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, TypeRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl core::fmt::Debug for TypeRegistryArc {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.read().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::{TypeRegistry, TypeRegistryArc};
    use crate::registry::TypeTraitDefault;

    #[test]
    fn builtin_types() {
        let registry = TypeRegistry::new();
        assert!(registry.contains(TypeId::of::<u8>()));
        assert!(registry.get_with_type_path("alloc::string::String").is_some());
        assert!(registry.contains_module("alloc"));
        assert!(!registry.contains_module("u8"));
        assert!(registry.get_type_trait::<TypeTraitDefault>(TypeId::of::<bool>()).is_some());
    }

    #[test]
    fn empty_registry() {
        let registry = TypeRegistry::empty();
        assert_eq!(registry.len(), 0);
        assert!(registry.get_with_type_name("u8").is_none());
    }

    #[test]
    fn register_twice() {
        let mut registry = TypeRegistry::empty();
        registry.register::<u32>();
        registry.register::<u32>();
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_ambiguous("u32"));
    }

    #[test]
    fn shared_registry() {
        let shared = TypeRegistryArc::new(TypeRegistry::empty());
        shared.write().register::<i64>();
        assert!(shared.read().contains(TypeId::of::<i64>()));
    }
}

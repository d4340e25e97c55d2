use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// TypePath

/// Stable names of a type, used for lookups by string.
///
/// The output of [`core::any::type_name`] may change between compiler
/// versions, these names do not. None of them start with `::`.
///
/// | function        | `Option<Vec<usize>>`                               |
/// |-----------------|----------------------------------------------------|
/// | [`type_path`]   | `core::option::Option<alloc::vec::Vec<usize>>`     |
/// | [`type_name`]   | `Option<Vec<usize>>`                               |
/// | [`type_ident`]  | `Option`                                           |
/// | [`module_path`] | `Some("core::option")`                             |
///
/// `type_path` is unique per type. `type_name` is not, two crates may
/// both declare a `Button`.
///
/// # Examples
///
/// ```
/// use ruhe_reflect::derive::TypePath;
/// use ruhe_reflect::info::TypePath;
///
/// #[derive(TypePath)]
/// #[reflect(type_path = "shop::stock::Crate")]
/// struct Crate;
///
/// assert_eq!(Crate::type_path(), "shop::stock::Crate");
/// assert_eq!(Crate::type_name(), "Crate");
/// assert_eq!(Crate::module_path(), Some("shop::stock"));
/// ```
///
/// Implementing it by hand:
///
/// ```
/// use ruhe_reflect::info::TypePath;
///
/// struct Gauge;
///
/// impl TypePath for Gauge {
///     fn type_path() -> &'static str { "meters::Gauge" }
///     fn type_name() -> &'static str { "Gauge" }
///     fn type_ident() -> &'static str { "Gauge" }
///     fn module_path() -> Option<&'static str> { Some("meters") }
/// }
/// ```
///
/// [`type_path`]: TypePath::type_path
/// [`type_name`]: TypePath::type_name
/// [`type_ident`]: TypePath::type_ident
/// [`module_path`]: TypePath::module_path
pub trait TypePath: 'static {
    /// Full path including generic arguments.
    fn type_path() -> &'static str;

    /// Path without the module, generic arguments included.
    fn type_name() -> &'static str;

    /// Bare identifier.
    fn type_ident() -> &'static str;

    /// Declaring module, `None` for primitives.
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// [`TypePath`] through a trait object.
///
/// ```
/// use ruhe_reflect::{Reflect, info::DynamicTypePath};
///
/// let value: &dyn Reflect = &String::new();
/// assert_eq!(value.reflect_type_path(), "alloc::string::String");
/// ```
pub trait DynamicTypePath {
    fn reflect_type_path(&self) -> &'static str;

    fn reflect_type_name(&self) -> &'static str;

    fn reflect_type_ident(&self) -> &'static str;

    fn reflect_module_path(&self) -> Option<&'static str>;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        T::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        T::type_name()
    }

    #[inline]
    fn reflect_type_ident(&self) -> &'static str {
        T::type_ident()
    }

    #[inline]
    fn reflect_module_path(&self) -> Option<&'static str> {
        T::module_path()
    }
}

// -----------------------------------------------------------------------------
// TypePathTable

/// The [`TypePath`] functions of one type, captured as pointers so they
/// can be called without naming the type.
///
/// ```
/// use ruhe_reflect::info::TypePathTable;
///
/// let table = TypePathTable::of::<String>();
/// assert_eq!(table.path(), "alloc::string::String");
/// assert_eq!(table.module_path(), Some("alloc::string"));
/// assert_eq!(table.crate_name(), Some("alloc"));
/// ```
#[derive(Clone, Copy)]
pub struct TypePathTable {
    path: fn() -> &'static str,
    name: fn() -> &'static str,
    ident: fn() -> &'static str,
    module: fn() -> Option<&'static str>,
}

impl TypePathTable {
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            path: T::type_path,
            name: T::type_name,
            ident: T::type_ident,
            module: T::module_path,
        }
    }

    #[inline]
    pub fn path(&self) -> &'static str {
        (self.path)()
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        (self.name)()
    }

    #[inline]
    pub fn ident(&self) -> &'static str {
        (self.ident)()
    }

    #[inline]
    pub fn module_path(&self) -> Option<&'static str> {
        (self.module)()
    }

    /// First segment of the module path.
    pub fn crate_name(&self) -> Option<&'static str> {
        self.module_path().and_then(crate_name_of)
    }
}

fn crate_name_of(module_path: &str) -> Option<&str> {
    module_path.split("::").next().filter(|name| !name.is_empty())
}

impl fmt::Debug for TypePathTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypePathTable").field(&self.path()).finish()
    }
}

// -----------------------------------------------------------------------------
// Type

/// A [`TypeId`] that also knows its names.
///
/// Compared and hashed by `TypeId` alone.
///
/// ```
/// use core::any::TypeId;
/// use ruhe_reflect::info::Type;
///
/// let ty = Type::of::<String>();
/// assert!(ty.is::<String>());
/// assert_eq!(ty.id(), TypeId::of::<String>());
/// assert_eq!(ty.name(), "String");
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    paths: TypePathTable,
}

impl Type {
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            paths: TypePathTable::of::<T>(),
        }
    }

    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    #[inline]
    pub const fn paths(&self) -> &TypePathTable {
        &self.paths
    }

    #[inline]
    pub fn path(&self) -> &'static str {
        self.paths.path()
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.paths.name()
    }

    #[inline]
    pub fn ident(&self) -> &'static str {
        self.paths.ident()
    }

    #[inline]
    pub fn module_path(&self) -> Option<&'static str> {
        self.paths.module_path()
    }

    #[inline]
    pub fn crate_name(&self) -> Option<&'static str> {
        self.paths.crate_name()
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// impl_type_fn

// Adds the `Type` getters to an info struct. With a field name it also
// defines `ty()` over that field, without one `ty()` must already exist.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// The described type.
        #[inline]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        $crate::info::impl_type_fn!();
    };
    () => {
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.ty().id()
        }

        /// Returns `true` if the described type is `T`.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.ty().is::<T>()
        }

        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.ty().path()
        }

        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.ty().name()
        }

        #[inline]
        pub fn module_path(&self) -> Option<&'static str> {
            self.ty().module_path()
        }

        /// The crate declaring the type, see [`Type::crate_name`].
        ///
        /// [`Type::crate_name`]: $crate::info::Type::crate_name
        #[inline]
        pub fn crate_name(&self) -> Option<&'static str> {
            self.ty().crate_name()
        }
    };
}

pub(crate) use impl_type_fn;

#[cfg(test)]
mod tests {
    use super::{Type, TypePathTable, crate_name_of};

    #[test]
    fn crate_names() {
        assert_eq!(crate_name_of("shop::stock"), Some("shop"));
        assert_eq!(crate_name_of("solo"), Some("solo"));
        assert_eq!(crate_name_of(""), None);
        assert_eq!(TypePathTable::of::<u8>().crate_name(), None);
    }

    #[test]
    fn type_equality_ignores_names() {
        assert_eq!(Type::of::<u8>(), Type::of::<u8>());
        assert_ne!(Type::of::<u8>(), Type::of::<i8>());
        assert_eq!(Type::of::<Option<u8>>().ident(), "Option");
    }
}

use alloc::boxed::Box;
use core::any::{Any, TypeId};

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{DynamicTypePath, DynamicTyped, TypePath, Typed};
use crate::info::{OpaqueInfo, ReflectKind, TypeInfo};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait of runtime reflection.
///
/// Prefer [`#[derive(Reflect)]`](crate::derive::Reflect) over manual
/// implementations. The derive also implements [`Struct`] or [`Enum`]
/// depending on the shape of the type.
///
/// # Type identification
///
/// [`Any::type_id`] on a `Box<dyn Reflect>` returns the id of the box.
/// Use [`Reflect::ty_id`] instead:
///
/// ```
/// use core::any::{Any, TypeId};
/// use ruhe_reflect::Reflect;
///
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());
/// assert!(x.ty_id() == TypeId::of::<i32>());
/// ```
///
/// # Casting
///
/// [`reflect_ref`] and [`reflect_mut`] expose the kind-specific traits.
/// `downcast_ref`, `downcast_mut`, `downcast` and `take` recover the
/// concrete type:
///
/// ```
/// use ruhe_reflect::Reflect;
///
/// let x: Box<dyn Reflect> = 10_u8.into_boxed_reflect();
/// assert_eq!(x.downcast_ref::<u8>(), Some(&10));
/// assert_eq!(x.take::<u8>().ok(), Some(10));
/// ```
///
/// [`Struct`]: crate::ops::Struct
/// [`Enum`]: crate::ops::Enum
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts to `&dyn Reflect`.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts to `&mut dyn Reflect`.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Boxes the value as `Box<dyn Reflect>`.
    ///
    /// ```
    /// use ruhe_reflect::Reflect;
    ///
    /// let r = "text".into_boxed_reflect();
    /// assert!(r.is::<&'static str>());
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// The [`TypeId`] of the underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Type-checked assignment.
    ///
    /// Replaces `self` when `value` has exactly the type of `self`,
    /// otherwise hands `value` back untouched.
    ///
    /// ```
    /// use ruhe_reflect::Reflect;
    ///
    /// let mut n = 1_u16;
    /// n.set(7_u16.into_boxed_reflect()).unwrap();
    /// assert_eq!(n, 7);
    ///
    /// let rejected = n.set(7_u32.into_boxed_reflect()).unwrap_err();
    /// assert!(rejected.is::<u32>());
    /// ```
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// The [kind](ReflectKind) of the type.
    fn reflect_kind(&self) -> ReflectKind;

    /// Immutable kind-specific view.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Mutable kind-specific view.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Reflective equality.
    ///
    /// `None` means the comparison is not supported. The default compares
    /// structs field by field and enums by variant. Opaque types return
    /// `None` unless they override it.
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_partial_eq(data, other),
            ReflectRef::Enum(data) => impls::enum_partial_eq(data, other),
            ReflectRef::Opaque(_) => None,
        }
    }

    /// Debug formatter for the value.
    ///
    /// Opaque types print `"Opaque(type_path)"` unless they override it.
    fn reflect_debug(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_debug(data, f),
            ReflectRef::Enum(data) => impls::enum_debug(data, f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is a `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the box, handing it back on a type mismatch.
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        match any.downcast::<T>() {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("type id was checked"),
        }
    }

    /// Unboxes the value, handing the box back on a type mismatch.
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl core::fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.reflect_debug(f)
    }
}

impl TypePath for dyn Reflect {
    #[inline]
    fn type_path() -> &'static str {
        "dyn ruhe_reflect::Reflect"
    }
    #[inline]
    fn type_name() -> &'static str {
        "dyn Reflect"
    }
    #[inline]
    fn type_ident() -> &'static str {
        "dyn Reflect"
    }
}

impl Typed for dyn Reflect {
    /// The info of `dyn Reflect` itself, not of the underlying value.
    ///
    /// Use [`DynamicTyped::reflect_type_info`] for the latter.
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements `set`, `reflect_kind`, `reflect_ref` and `reflect_mut`.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;

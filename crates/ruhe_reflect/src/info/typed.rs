use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// Static access to a type's [`TypeInfo`].
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect).
/// Manual implementations store the info in a
/// [`NonGenericTypeInfoCell`] or [`GenericTypeInfoCell`]:
///
/// ```
/// use ruhe_reflect::derive::Reflect;
/// use ruhe_reflect::impls::NonGenericTypeInfoCell;
/// use ruhe_reflect::info::{NamedField, StructInfo, TypeInfo, Typed};
///
/// #[derive(Reflect)]
/// #[reflect(Typed = false)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Typed for Point {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| {
///             TypeInfo::Struct(StructInfo::new::<Self>(&[
///                 NamedField::new::<i32>("x"),
///                 NamedField::new::<i32>("y"),
///             ]))
///         })
///     }
/// }
///
/// let info = Point::type_info().as_struct().unwrap();
/// assert_eq!(info.field_len(), 2);
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: TypePath {
    /// Returns the type information of `Self`.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Object-safe access to [`Typed`], implemented for every `T: Typed`.
pub trait DynamicTyped {
    /// Returns the type information of the underlying value.
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}

use crate::info::Typed;

/// Builds a [`TypeTrait`](crate::registry::TypeTrait) for the type `T`.
///
/// ```
/// use ruhe_reflect::info::Typed;
/// use ruhe_reflect::registry::FromType;
///
/// #[derive(Clone)]
/// struct TypeTraitName(&'static str);
///
/// impl<T: Typed> FromType<T> for TypeTraitName {
///     fn from_type() -> Self {
///         TypeTraitName(T::type_path())
///     }
/// }
///
/// let name = <TypeTraitName as FromType<u16>>::from_type();
/// assert_eq!(name.0, "u16");
/// ```
pub trait FromType<T: Typed> {
    fn from_type() -> Self;
}

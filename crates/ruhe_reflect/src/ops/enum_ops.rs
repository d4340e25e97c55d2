use crate::Reflect;

/// Access to the current variant of a fieldless enum.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// # Examples
///
/// ```
/// use ruhe_reflect::{derive::Reflect, ops::Enum};
///
/// #[derive(Reflect)]
/// enum Signal {
///     Red = 3,
///     Green = 7,
/// }
///
/// let value = Signal::Green;
/// assert_eq!(value.variant_name(), "Green");
/// assert_eq!(value.variant_index(), 1);
/// assert_eq!(value.discriminant(), 7);
/// ```
pub trait Enum: Reflect {
    /// Name of the current variant.
    fn variant_name(&self) -> &str;

    /// Declaration index of the current variant.
    fn variant_index(&self) -> usize;

    /// Declared discriminant of the current variant.
    fn discriminant(&self) -> i128;
}

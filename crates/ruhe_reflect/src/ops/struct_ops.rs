use crate::Reflect;
use crate::ops::Members;

// -----------------------------------------------------------------------------
// Struct

/// Field access for structs with named fields.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// # Examples
///
/// ```
/// use ruhe_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     a: i32,
///     b: bool,
/// }
///
/// let foo = Foo { a: 10, b: true };
/// let foo_ref: &dyn Struct = &foo;
///
/// assert_eq!(foo_ref.field_len(), 2);
/// assert_eq!(foo_ref.field_as::<i32>("a"), Some(&10));
/// assert_eq!(foo_ref.name_at(1), Some("b"));
/// ```
pub trait Struct: Reflect {
    /// The field named `name`, or `None` if it does not exist.
    ///
    /// Only the struct's own fields are searched. Its base is a field like
    /// any other.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// The field named `name`, or `None` if it does not exist.
    ///
    /// ```
    /// use ruhe_reflect::{derive::Reflect, ops::Struct};
    ///
    /// #[derive(Reflect)]
    /// struct Foo { a: i32 }
    ///
    /// let mut foo = Foo { a: 1 };
    /// if let Some(field) = foo.field_mut("a") {
    ///     *field.downcast_mut::<i32>().unwrap() = 42;
    /// }
    /// assert_eq!(foo.a, 42);
    /// ```
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// The field at `index` in declaration order.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// The field at `index` in declaration order.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// The name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Number of reflected fields.
    fn field_len(&self) -> usize;

    /// The published properties and methods, if the struct has any.
    ///
    /// Overridden by `#[reflect(members)]`.
    #[inline]
    fn as_members(&self) -> Option<&dyn Members> {
        None
    }

    /// See [`Struct::as_members`].
    #[inline]
    fn as_members_mut(&mut self) -> Option<&mut dyn Members> {
        None
    }
}

impl dyn Struct {
    /// Iterates the field values in declaration order.
    #[inline]
    pub fn iter_fields(&self) -> StructFieldIter<'_> {
        StructFieldIter::new(self)
    }

    /// Returns the field named `name` downcast to `T`.
    #[inline]
    pub fn field_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name)?.downcast_ref::<T>()
    }

    /// Returns the field named `name` downcast to `T`.
    #[inline]
    pub fn field_mut_as<T: Reflect>(&mut self, name: &str) -> Option<&mut T> {
        self.field_mut(name)?.downcast_mut::<T>()
    }
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// An iterator over the field values of a struct.
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.struct_val.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len() - self.index;
        (size, Some(size))
    }
}

impl<'a> ExactSizeIterator for StructFieldIter<'a> {}

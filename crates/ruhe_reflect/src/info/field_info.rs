use core::any::{Any, TypeId};

use crate::info::{MemberFlags, TypeInfo, Typed, Visibility};

// -----------------------------------------------------------------------------
// NamedField

/// Information about a named struct field.
///
/// # Examples
///
/// ```
/// use ruhe_reflect::info::{NamedField, Visibility};
///
/// let field = NamedField::new::<u32>("count").with_visibility(Visibility::Private);
/// assert_eq!(field.name(), "count");
/// assert!(field.type_is::<u32>());
/// assert!(!field.is_base());
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    // Delays building the field's `TypeInfo` until it is needed.
    type_info: fn() -> &'static TypeInfo,
    visibility: Visibility,
    flags: MemberFlags,
}

impl NamedField {
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            type_info: T::type_info,
            ty_id: TypeId::of::<T>(),
            visibility: Visibility::Public,
            flags: MemberFlags::empty(),
        }
    }

    /// Sets the declared visibility.
    #[inline]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Marks the field as the base of its struct.
    ///
    /// Member lookups that miss on a struct continue into its base field.
    #[inline]
    pub const fn as_base(mut self) -> Self {
        self.flags = self.flags.union(MemberFlags::BASE);
        self
    }

    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The declared type's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub const fn is_base(&self) -> bool {
        self.flags.contains(MemberFlags::BASE)
    }
}

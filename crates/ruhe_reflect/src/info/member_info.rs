use alloc::boxed::Box;
use core::any::TypeId;

use bitflags::bitflags;

use crate::info::{Type, TypeInfo, TypePath, Typed};

// -----------------------------------------------------------------------------
// Visibility

/// Declared visibility of a reflected member.
///
/// Informational only: reflective access ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// `pub`
    #[default]
    Public,
    /// `pub(crate)`, `pub(super)` or `pub(in path)`
    Restricted,
    /// No visibility modifier.
    Private,
}

impl Visibility {
    #[inline]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}

// -----------------------------------------------------------------------------
// MemberFlags

bitflags! {
    /// Capabilities of a reflected member.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MemberFlags: u8 {
        /// The field is the struct's base.
        const BASE         = 1 << 0;
        /// The property has a getter.
        const READ         = 1 << 1;
        /// The property has a setter.
        const WRITE        = 1 << 2;
        /// The method takes `&mut self`.
        const MUT_RECEIVER = 1 << 3;
        /// The method returns a `Result`.
        const FALLIBLE     = 1 << 4;
    }
}

// -----------------------------------------------------------------------------
// PropertyInfo

/// A property: a getter and/or setter pair published under one name.
///
/// # Examples
///
/// ```
/// use ruhe_reflect::info::PropertyInfo;
///
/// let prop = PropertyInfo::new::<bool>("Enabled").with_getter();
/// assert!(prop.can_read());
/// assert!(!prop.can_write());
/// ```
#[derive(Clone, Debug)]
pub struct PropertyInfo {
    name: &'static str,
    ty: Type,
    type_info: fn() -> &'static TypeInfo,
    visibility: Visibility,
    flags: MemberFlags,
}

impl PropertyInfo {
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            ty: Type::of::<T>(),
            type_info: T::type_info,
            visibility: Visibility::Public,
            flags: MemberFlags::empty(),
        }
    }

    #[inline]
    pub const fn with_getter(mut self) -> Self {
        self.flags = self.flags.union(MemberFlags::READ);
        self
    }

    #[inline]
    pub const fn with_setter(mut self) -> Self {
        self.flags = self.flags.union(MemberFlags::WRITE);
        self
    }

    #[inline]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    crate::info::impl_type_fn!(ty);

    /// The property type's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub const fn can_read(&self) -> bool {
        self.flags.contains(MemberFlags::READ)
    }

    #[inline]
    pub const fn can_write(&self) -> bool {
        self.flags.contains(MemberFlags::WRITE)
    }
}

// -----------------------------------------------------------------------------
// ParamInfo

/// A method parameter.
#[derive(Clone, Copy, Debug)]
pub struct ParamInfo {
    name: &'static str,
    ty: Type,
}

impl ParamInfo {
    #[inline]
    pub const fn new<T: TypePath>(name: &'static str) -> Self {
        Self {
            name,
            ty: Type::of::<T>(),
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    crate::info::impl_type_fn!(ty);
}

// -----------------------------------------------------------------------------
// MethodInfo

/// A method callable through [`Members::invoke_method`].
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use ruhe_reflect::info::{MethodInfo, ParamInfo};
///
/// let method = MethodInfo::new("Scale", &[ParamInfo::new::<f32>("factor")])
///     .with_return::<f32>()
///     .with_mut_receiver();
///
/// assert_eq!(method.arity(), 1);
/// assert!(method.accepts(&[TypeId::of::<f32>()]));
/// assert!(!method.accepts(&[TypeId::of::<f64>()]));
/// assert!(method.return_type().unwrap().is::<f32>());
/// ```
///
/// [`Members::invoke_method`]: crate::ops::Members::invoke_method
#[derive(Clone, Debug)]
pub struct MethodInfo {
    name: &'static str,
    params: Box<[ParamInfo]>,
    returns: Option<Type>,
    visibility: Visibility,
    flags: MemberFlags,
}

impl MethodInfo {
    /// Creates a method taking `&self` and returning nothing.
    pub fn new(name: &'static str, params: &[ParamInfo]) -> Self {
        Self {
            name,
            params: params.into(),
            returns: None,
            visibility: Visibility::Public,
            flags: MemberFlags::empty(),
        }
    }

    /// Sets the type of the value the method produces.
    ///
    /// For a fallible method this is the `Ok` type.
    #[inline]
    pub fn with_return<T: TypePath>(mut self) -> Self {
        self.returns = Some(Type::of::<T>());
        self
    }

    #[inline]
    pub fn with_mut_receiver(mut self) -> Self {
        self.flags |= MemberFlags::MUT_RECEIVER;
        self
    }

    #[inline]
    pub fn with_fallible(mut self) -> Self {
        self.flags |= MemberFlags::FALLIBLE;
        self
    }

    #[inline]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn params(&self) -> &[ParamInfo] {
        &self.params
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// `None` for methods returning `()`.
    #[inline]
    pub const fn return_type(&self) -> Option<&Type> {
        self.returns.as_ref()
    }

    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub const fn is_mut(&self) -> bool {
        self.flags.contains(MemberFlags::MUT_RECEIVER)
    }

    #[inline]
    pub const fn is_fallible(&self) -> bool {
        self.flags.contains(MemberFlags::FALLIBLE)
    }

    /// Returns `true` if arguments of exactly these types can be passed.
    pub fn accepts(&self, arg_types: &[TypeId]) -> bool {
        self.params.len() == arg_types.len()
            && self
                .params
                .iter()
                .zip(arg_types)
                .all(|(param, ty)| param.ty_id() == *ty)
    }
}

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::Reflect;
use crate::access::InvocationError;
use crate::info::{MethodInfo, PropertyInfo};
use crate::ops::Struct;

/// Outcome of a reflected method call.
///
/// `Ok(None)` is the "no value" result of a method returning `()`.
pub type InvokeResult = Result<Option<Box<dyn Reflect>>, InvocationError>;

/// Property accessors and methods published by a struct.
///
/// Implemented by [`#[reflect_members]`](crate::derive::reflect_members)
/// on an inherent `impl` block. The struct additionally needs
/// `#[reflect(members)]` so that [`Struct::as_members`] and its
/// [`StructInfo`](crate::info::StructInfo) expose these members.
///
/// Dispatch methods return `None` when no member matches. They only
/// see the struct's own members, walking bases is left to the
/// [`Reflector`](crate::access::Reflector).
///
/// # Examples
///
/// ```
/// use ruhe_reflect::derive::{Reflect, reflect_members};
/// use ruhe_reflect::{Reflect, ops::Members};
///
/// #[derive(Reflect, Default)]
/// #[reflect(members)]
/// struct Counter {
///     hits: u32,
/// }
///
/// #[reflect_members]
/// impl Counter {
///     #[reflect(get = "Hits")]
///     fn hits(&self) -> u32 {
///         self.hits
///     }
///
///     fn bump(&mut self, by: u32) {
///         self.hits += by;
///     }
/// }
///
/// let mut counter = Counter::default();
/// counter.invoke_method("bump", vec![2_u32.into_boxed_reflect()]).unwrap().unwrap();
///
/// let hits = counter.get_property("Hits").unwrap();
/// assert_eq!(hits.downcast_ref::<u32>(), Some(&2));
/// assert!(counter.get_property("Misses").is_none());
/// ```
pub trait Members: Struct {
    /// Every published property of `Self`.
    fn properties() -> Vec<PropertyInfo>
    where
        Self: Sized;

    /// Every published method of `Self`.
    fn methods() -> Vec<MethodInfo>
    where
        Self: Sized;

    /// Calls the getter of property `name`.
    ///
    /// `None` if there is no such property or it has no getter.
    fn get_property(&self, name: &str) -> Option<Box<dyn Reflect>>;

    /// Calls the setter of property `name`.
    ///
    /// `None` if there is no such property or it has no setter.
    /// `Some(Err(value))` hands back a value of the wrong type.
    fn set_property(
        &mut self,
        name: &str,
        value: Box<dyn Reflect>,
    ) -> Option<Result<(), Box<dyn Reflect>>>;

    /// Calls the method `name` whose parameter types match `args` exactly.
    ///
    /// `None` if no method matches, in which case `args` was not consumed
    /// by a call.
    fn invoke_method(&mut self, name: &str, args: Vec<Box<dyn Reflect>>) -> Option<InvokeResult>;
}

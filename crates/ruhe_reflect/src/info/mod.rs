//! Compile-time type information.
//!
//! - [`TypePath`] / [`DynamicTypePath`]: stable type names.
//! - [`Type`]: a `TypeId` with its [`TypePathTable`].
//! - [`Typed`] / [`DynamicTyped`]: access to a [`TypeInfo`].
//! - [`TypeInfo`]: one of
//!     - [`StructInfo`]: fields ([`NamedField`]), an optional base field,
//!       properties ([`PropertyInfo`]) and methods ([`MethodInfo`]).
//!     - [`EnumInfo`]: fieldless variants ([`VariantInfo`]) with discriminants.
//!     - [`OpaqueInfo`]: types whose internals are not reflected.
//! - [`Visibility`] and [`MemberFlags`] describe members.

// -----------------------------------------------------------------------------
// Modules

mod enum_info;
mod field_info;
mod member_info;
mod opaque_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use enum_info::{EnumInfo, VariantInfo};
pub use field_info::NamedField;
pub use member_info::{MemberFlags, MethodInfo, ParamInfo, PropertyInfo, Visibility};
pub use opaque_info::OpaqueInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath, TypePathTable};
pub use typed::{DynamicTyped, Typed};

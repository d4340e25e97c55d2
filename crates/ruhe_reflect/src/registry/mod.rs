//! Type registry for querying types by id, path or crate.
//!
//! ## Menu
//!
//! - [`TypeTrait`]: a capability supported by a type, stored type-erased.
//! - [`FromType`]: builds a `TypeTrait` for a concrete type.
//! - [`TypeMeta`]: a [`TypeInfo`] plus a table of `TypeTrait`s.
//! - [`GetTypeMeta`]: builds the `TypeMeta` of a type.
//! - [`TypeRegistry`]: the `TypeMeta` storage, indexed by [`TypeId`],
//!   type path, short type name and crate name.
//! - [`TypeRegistryArc`]: a shared, lockable registry.
//! - TypeTraits:
//!     - [`TypeTraitDefault`]: builds a default instance.
//!     - `Reflect{Trait}`: generated by [`reflect_trait`], casts a
//!       `dyn Reflect` to `dyn Trait`.
//!
//! ## auto_register
//!
//! With the `auto_register` feature, types deriving `Reflect` submit a
//! registration function through [`inventory`], and
//! [`TypeRegistry::auto_register`] runs all of them. Opt out per type with
//! `#[reflect(auto_register = false)]`.
//!
//! Platforms without `inventory` support make `auto_register` return
//! `false` instead of failing.
//!
//! [`reflect_trait`]: crate::derive::reflect_trait
//! [`TypeInfo`]: crate::info::TypeInfo
//! [`TypeId`]: core::any::TypeId
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod default;
mod from_type;
mod type_meta;
mod type_registry;
mod type_trait;

// -----------------------------------------------------------------------------
// Exports

pub use default::TypeTraitDefault;
pub use from_type::FromType;
pub use type_meta::{GetTypeMeta, TypeMeta};
pub use type_registry::{TypeRegistry, TypeRegistryArc};
pub use type_trait::TypeTrait;

//! Kind-specific data access.
//!
//! ## Menu
//!
//! The following are subtraits of [`Reflect`]:
//!
//! - [`Struct`]: named-field structs (e.g. `A { .. }`).
//! - [`Enum`]: fieldless enums (e.g. `Color::Red`).
//! - [`Members`]: property accessors and methods published by a struct.
//!
//! [`ReflectRef`] and [`ReflectMut`] select one of them from a
//! `dyn Reflect`.
//!
//! [`Reflect`]: crate::Reflect

// -----------------------------------------------------------------------------
// Modules

mod enum_ops;
mod kind;
mod members;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};

pub use enum_ops::Enum;
pub use members::{InvokeResult, Members};
pub use struct_ops::{Struct, StructFieldIter};

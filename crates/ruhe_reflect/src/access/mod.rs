//! Name-based member access.
//!
//! [`Reflector`] reads and writes fields, calls property accessors,
//! invokes methods and answers type queries by string name. Failures are
//! reported as [`ReflectError`].

// -----------------------------------------------------------------------------
// Modules

mod cache;
mod error;
mod reflector;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Exports

pub use error::{AccessOp, InvocationError, MemberKind, ReflectError};
pub use reflector::Reflector;

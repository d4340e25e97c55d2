//! Name-based reflection over Rust types.
//!
//! The facade re-exports the workspace crates:
//!
//! - [`reflect`]: type information, the type registry, enum coercion and
//!   the [`Reflector`](reflect::access::Reflector).
//! - [`utils`]: hashers and maps keyed by `TypeId`.
//! - [`cfg`]: compile-time feature aliases.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use ruhe_cfg as cfg;
pub use ruhe_reflect as reflect;
pub use ruhe_utils as utils;

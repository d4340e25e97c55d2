//! Runtime reflection with name-based member access.
//!
//! Types opt in with [`#[derive(Reflect)]`](derive::Reflect). Property
//! accessors and methods are published from an `impl` block with
//! [`#[reflect_members]`](derive::reflect_members). The
//! [`Reflector`](access::Reflector) then reads and writes fields, calls
//! property accessors and invokes methods by their string names.
//!
//! ```
//! use ruhe_reflect::{Reflect, access::Reflector, derive::Reflect};
//!
//! #[derive(Reflect, Default, PartialEq)]
//! #[reflect(partial_eq)]
//! enum Mood {
//!     #[default]
//!     Calm = 0,
//!     Busy = 1,
//! }
//!
//! #[derive(Reflect, Default)]
//! struct Desk {
//!     mood: Mood,
//!     papers: u32,
//! }
//!
//! let reflector = Reflector::new();
//! let mut desk = Desk::default();
//!
//! reflector.set_field_value(&mut desk, "mood", "Busy".into_boxed_reflect()).unwrap();
//! reflector.set_field_value(&mut desk, "papers", 3_u32.into_boxed_reflect()).unwrap();
//!
//! assert!(desk.mood == Mood::Busy);
//! assert_eq!(desk.papers, 3);
//! assert!(reflector.field_exists(&desk, "papers"));
//! assert!(!reflector.field_exists(&desk, "pens"));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    ruhe_cfg::define_alias! {
        #[cfg(feature = "auto_register")] => auto_register,
        #[cfg(all(debug_assertions, feature = "debug"))] => debug,
    }
}

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate `ruhe_reflect`, including inside the crate.
extern crate self as ruhe_reflect;

// -----------------------------------------------------------------------------
// no_std support

extern crate alloc;

// Locks and once-cells for the static type tables.
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod access;
pub mod convert;
pub mod impls;
pub mod info;
pub mod ops;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use reflection::Reflect;
pub use ruhe_reflect_derive as derive;

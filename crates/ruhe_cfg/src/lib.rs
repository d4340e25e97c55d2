//! Macros for compilation control.
//!
//! [`define_alias!`] turns a `#[cfg(...)]` predicate into a macro, so that
//! a crate can write `crate::cfg::auto_register! { ... }` instead of
//! repeating the predicate at every use site.
//!
//! An alias macro accepts three forms:
//!
//! - `alias! { items }`: keeps `items` only when the predicate holds.
//! - `alias! { if { a } else { b } }`: picks one of two branches.
//! - `alias!()`: evaluates to a `bool` literal.
//!
//! # Examples
//!
//! ```
//! mod cfg {
//!     ruhe_cfg::define_alias! {
//!         #[cfg(debug_assertions)] => debug,
//!         #[cfg(any())] => never,
//!     }
//! }
//!
//! cfg::never! {
//!     compile_error!("never expanded");
//! }
//!
//! let msg = cfg::never! { if { "on" } else { "off" } };
//! assert_eq!(msg, "off");
//! assert_eq!(cfg::debug!(), cfg!(debug_assertions));
//! ```
#![no_std]

/// Defines one alias macro per `#[cfg(...)] => name` entry.
///
/// The predicate is evaluated in the crate invoking this macro,
/// so feature names refer to that crate's features.
#[macro_export]
macro_rules! define_alias {
    () => {};
    (
        #[cfg($meta:meta)] => $name:ident
        $(, $($rest:tt)*)?
    ) => {
        #[cfg($meta)]
        #[doc(hidden)]
        pub use $crate::enabled as $name;

        #[cfg(not($meta))]
        #[doc(hidden)]
        pub use $crate::disabled as $name;

        $( $crate::define_alias! { $($rest)* } )?
    };
}

/// Alias body used when the predicate holds.
#[doc(hidden)]
#[macro_export]
macro_rules! enabled {
    () => { true };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($p)* };
    ($($p:tt)*) => { $($p)* };
}

/// Alias body used when the predicate does not hold.
#[doc(hidden)]
#[macro_export]
macro_rules! disabled {
    () => { false };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($n)* };
    ($($p:tt)*) => {};
}

#[cfg(test)]
mod tests {
    mod cfg {
        crate::define_alias! {
            #[cfg(all())] => always,
            #[cfg(any())] => never,
        }
    }

    #[test]
    fn branch_selection() {
        assert!(cfg::always!());
        assert!(!cfg::never!());

        let picked = cfg::always! { if { 1 } else { 2 } };
        assert_eq!(picked, 1);

        let picked = cfg::never! { if { 1 } else { 2 } };
        assert_eq!(picked, 2);
    }

    #[test]
    fn item_gating() {
        cfg::always! {
            fn kept() -> u8 { 7 }
        }
        cfg::never! {
            fn dropped() -> u8 { 8 }
        }
        assert_eq!(kept(), 7);
    }
}

//! Items used by the code generated from `ruhe_reflect_derive`.

/// Re-exports of `alloc` items, since the invoking crate may be `no_std`.
pub mod alloc_utils {
    pub use ::alloc::boxed::Box;
    pub use ::alloc::vec;
    pub use ::alloc::vec::Vec;
}

crate::cfg::auto_register! {
    /// Static registration through `inventory`.
    pub mod auto_register {
        pub use ::inventory;

        use crate::registry::{GetTypeMeta, TypeRegistry};

        /// A registration function submitted by a derived type.
        pub struct __AutoRegisterFunc(pub fn(&mut TypeRegistry));

        ::inventory::collect!(__AutoRegisterFunc);

        /// Gives every registrable type a plain function pointer to submit.
        pub trait __RegisterType {
            fn __register(registry: &mut TypeRegistry);
        }

        impl<T: GetTypeMeta> __RegisterType for T {
            #[inline]
            fn __register(registry: &mut TypeRegistry) {
                registry.register::<T>();
            }
        }

        // Always submitted, so a non-zero count proves `inventory` works here.
        fn __mark_available(_: &mut TypeRegistry) {}

        ::inventory::submit! { __AutoRegisterFunc(__mark_available) }

        /// Runs every submitted registration, returns how many ran.
        pub fn __register_types(registry: &mut TypeRegistry) -> usize {
            let mut count = 0usize;
            for func in ::inventory::iter::<__AutoRegisterFunc> {
                (func.0)(registry);
                count += 1;
            }
            count
        }
    }
}

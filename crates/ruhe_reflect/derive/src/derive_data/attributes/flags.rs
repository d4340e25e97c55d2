use proc_macro2::Span;

/// Controls which traits the derive implements.
#[derive(Debug)]
pub(crate) struct TraitImplSwitches {
    /// Default is `true`, use `#[reflect(TypePath = false)]` to disable it.
    pub(crate) impl_type_path: bool,
    /// Default is `true`, use `#[reflect(Typed = false)]` to disable it.
    pub(crate) impl_typed: bool,
    /// Default is `true`, use `#[reflect(Reflect = false)]` to disable it.
    pub(crate) impl_reflect: bool,
    /// Default is `true`, use `#[reflect(GetTypeMeta = false)]` to disable it.
    pub(crate) impl_get_type_meta: bool,
}

impl Default for TraitImplSwitches {
    #[inline]
    fn default() -> Self {
        Self {
            impl_type_path: true,
            impl_typed: true,
            impl_reflect: true,
            impl_get_type_meta: true,
        }
    }
}

/// Standard traits the type declares to implement.
///
/// The span points at the flag, so errors from a missing impl land there.
#[derive(Default, Debug)]
pub(crate) struct TraitAvailableFlags {
    pub default: Option<Span>,
    pub debug: Option<Span>,
    pub partial_eq: Option<Span>,
}

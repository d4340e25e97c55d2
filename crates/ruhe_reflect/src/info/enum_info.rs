use alloc::boxed::Box;
use alloc::string::String;

use ruhe_utils::hash::HashMap;

use crate::Reflect;
use crate::info::{Type, TypePath, impl_type_fn};
use crate::ops::Enum;

// -----------------------------------------------------------------------------
// VariantInfo

/// A fieldless enum variant and its discriminant.
///
/// Discriminants are stored as `i128` so every primitive `repr` fits.
#[derive(Clone, Debug)]
pub struct VariantInfo {
    name: &'static str,
    discriminant: i128,
    construct: fn() -> Box<dyn Reflect>,
}

impl VariantInfo {
    /// `construct` must return the variant as a boxed value of the enum.
    #[inline]
    pub const fn new(
        name: &'static str,
        discriminant: i128,
        construct: fn() -> Box<dyn Reflect>,
    ) -> Self {
        Self {
            name,
            discriminant,
            construct,
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn discriminant(&self) -> i128 {
        self.discriminant
    }

    /// Builds a fresh value of this variant.
    #[inline]
    pub fn construct(&self) -> Box<dyn Reflect> {
        (self.construct)()
    }
}

// -----------------------------------------------------------------------------
// EnumInfo

/// A container for compile-time enum info.
///
/// # Examples
///
/// ```
/// use ruhe_reflect::derive::Reflect;
/// use ruhe_reflect::info::Typed;
///
/// #[derive(Reflect)]
/// enum Level {
///     Low = 1,
///     High = 10,
/// }
///
/// let info = Level::type_info().as_enum().unwrap();
/// assert_eq!(info.variant_names(), ["Low", "High"]);
/// assert_eq!(info.variant("High").unwrap().discriminant(), 10);
/// assert_eq!(info.variant_with_discriminant(1).unwrap().name(), "Low");
/// assert!(info.variant("high").is_none());
/// ```
#[derive(Clone, Debug)]
pub struct EnumInfo {
    ty: Type,
    variants: Box<[VariantInfo]>,
    variant_names: Box<[&'static str]>,
    variant_indices: HashMap<&'static str, usize>,
}

impl EnumInfo {
    impl_type_fn!(ty);

    pub fn new<TEnum: Enum + TypePath>(variants: &[VariantInfo]) -> Self {
        let variant_names = variants.iter().map(VariantInfo::name).collect();
        let variant_indices = variants
            .iter()
            .enumerate()
            .map(|(index, variant)| (variant.name(), index))
            .collect();

        Self {
            ty: Type::of::<TEnum>(),
            variants: variants.into(),
            variant_names,
            variant_indices,
        }
    }

    /// Exact, case-sensitive lookup by name.
    pub fn variant(&self, name: &str) -> Option<&VariantInfo> {
        self.variants.get(*self.variant_indices.get(name)?)
    }

    #[inline]
    pub fn variant_at(&self, index: usize) -> Option<&VariantInfo> {
        self.variants.get(index)
    }

    /// Lookup by declared discriminant. O(N).
    pub fn variant_with_discriminant(&self, discriminant: i128) -> Option<&VariantInfo> {
        self.variants
            .iter()
            .find(|variant| variant.discriminant() == discriminant)
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &VariantInfo> {
        self.variants.iter()
    }

    #[inline]
    pub fn contains_variant(&self, name: &str) -> bool {
        self.variant_indices.contains_key(name)
    }

    #[inline]
    pub fn variant_names(&self) -> &[&'static str] {
        &self.variant_names
    }

    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.variant_indices.get(name).copied()
    }

    /// Returns `"path::to::Enum::Variant"`.
    #[inline]
    pub fn variant_path(&self, name: &str) -> String {
        crate::impls::concat(&[self.type_path(), "::", name])
    }

    #[inline]
    pub fn variant_len(&self) -> usize {
        self.variants.len()
    }
}

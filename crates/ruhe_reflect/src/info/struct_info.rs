use alloc::boxed::Box;
use alloc::vec::Vec;

use ruhe_utils::hash::HashMap;

use crate::info::{MethodInfo, NamedField, PropertyInfo, Type, TypePath};
use crate::info::impl_type_fn;
use crate::ops::Struct;

/// A container for compile-time named struct info.
///
/// Besides fields, a struct can publish properties and methods (see
/// [`reflect_members`](crate::derive::reflect_members)) and designate one
/// field as its base. Lookups through the [`Reflector`] that miss on the
/// struct itself continue into the base.
///
/// # Examples
///
/// ```
/// use ruhe_reflect::derive::Reflect;
/// use ruhe_reflect::info::{Typed, Visibility};
///
/// #[derive(Reflect)]
/// struct Node {
///     pub id: u32,
///     label: String,
/// }
///
/// let info = Node::type_info().as_struct().unwrap();
/// assert_eq!(info.field_names(), ["id", "label"]);
/// assert_eq!(info.field("label").unwrap().visibility(), Visibility::Private);
/// assert!(info.base().is_none());
/// ```
///
/// [`Reflector`]: crate::access::Reflector
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    field_names: Box<[&'static str]>,
    field_indices: HashMap<&'static str, usize>,
    base: Option<usize>,
    properties: Box<[PropertyInfo]>,
    methods: Box<[MethodInfo]>,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Creates the info for `T` from its fields in declaration order.
    ///
    /// The first field marked [`as_base`](NamedField::as_base) becomes the base.
    pub fn new<T: Struct + TypePath>(fields: &[NamedField]) -> Self {
        let field_names = fields.iter().map(NamedField::name).collect();
        let field_indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();
        let base = fields.iter().position(NamedField::is_base);

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            field_names,
            field_indices,
            base,
            properties: Box::new([]),
            methods: Box::new([]),
        }
    }

    /// Attaches properties and methods.
    pub fn with_members(mut self, properties: Vec<PropertyInfo>, methods: Vec<MethodInfo>) -> Self {
        self.properties = properties.into_boxed_slice();
        self.methods = methods.into_boxed_slice();
        self
    }

    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(*self.field_indices.get(name)?)
    }

    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    #[inline]
    pub fn field_names(&self) -> &[&'static str] {
        &self.field_names
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Index of the base field.
    #[inline]
    pub const fn base_index(&self) -> Option<usize> {
        self.base
    }

    /// The base field.
    #[inline]
    pub fn base(&self) -> Option<&NamedField> {
        self.fields.get(self.base?)
    }

    /// The base type's struct info, if the base is a reflected struct.
    pub fn base_info(&self) -> Option<&'static StructInfo> {
        self.base()?.type_info().as_struct().ok()
    }

    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|prop| prop.name() == name)
    }

    #[inline]
    pub fn properties(&self) -> &[PropertyInfo] {
        &self.properties
    }

    /// Every method called `name`.
    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MethodInfo> {
        self.methods.iter().filter(move |method| method.name() == name)
    }

    #[inline]
    pub fn methods(&self) -> &[MethodInfo] {
        &self.methods
    }
}

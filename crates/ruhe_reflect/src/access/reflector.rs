use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::TypeId;
use std::sync::OnceLock;

use crate::Reflect;
use crate::access::cache::{MemberCache, Resolution};
use crate::access::{AccessOp, MemberKind, ReflectError};
use crate::convert::{EnumInput, convert_to_enum};
use crate::impls::concat;
use crate::info::{StructInfo, TypeInfo, TypePath};
use crate::ops::Struct;
use crate::registry::{TypeRegistry, TypeRegistryArc, TypeTrait, TypeTraitDefault};

// -----------------------------------------------------------------------------
// Reflector

/// Name-based access to fields, properties and methods.
///
/// Lookups search the target's own members first, then continue into its
/// base field (see [`StructInfo::base`]), recursively. Declared visibility
/// is ignored.
///
/// Assigning a string or an integer to an enum-typed field or property
/// converts it with [`convert_to_enum`] first. Everything else must match
/// the declared type exactly. A failed assignment leaves the target
/// unchanged.
///
/// Field and property resolutions are cached per type and name, see
/// [`Reflector::without_cache`].
///
/// # Examples
///
/// ```
/// use ruhe_reflect::Reflect;
/// use ruhe_reflect::access::{ReflectError, Reflector};
/// use ruhe_reflect::derive::Reflect;
///
/// #[derive(Reflect, Default)]
/// struct Shape {
///     sides: u8,
/// }
///
/// #[derive(Reflect, Default)]
/// struct Tile {
///     #[reflect(base)]
///     shape: Shape,
///     color: String,
/// }
///
/// let reflector = Reflector::new();
/// let mut tile = Tile::default();
///
/// // `sides` is found through the base field.
/// reflector.set_field_value(&mut tile, "sides", 6_u8.into_boxed_reflect()).unwrap();
/// assert_eq!(tile.shape.sides, 6);
/// assert_eq!(reflector.get_field_value_as::<u8>(&tile, "sides").unwrap(), &6);
///
/// let err = reflector.set_field_value(&mut tile, "color", 1_u8.into_boxed_reflect());
/// assert!(matches!(err, Err(ReflectError::TypeMismatch { .. })));
/// ```
pub struct Reflector {
    registry: TypeRegistryArc,
    cache: Option<MemberCache>,
}

impl Default for Reflector {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Reflector {
    /// Creates a reflector with the built-in types registered.
    #[inline]
    pub fn new() -> Self {
        Self::with_registry(TypeRegistry::new())
    }

    /// Creates a reflector over `registry`.
    ///
    /// The registry answers [`implements_interface`], [`get_cross_module_type`]
    /// and [`create_instance`]. Member access does not need it.
    ///
    /// [`implements_interface`]: Self::implements_interface
    /// [`get_cross_module_type`]: Self::get_cross_module_type
    /// [`create_instance`]: Self::create_instance
    #[inline]
    pub fn with_registry(registry: TypeRegistry) -> Self {
        Self::with_shared_registry(TypeRegistryArc::new(registry))
    }

    /// Creates a reflector over a registry shared with other owners.
    pub fn with_shared_registry(registry: TypeRegistryArc) -> Self {
        Self {
            registry,
            cache: Some(MemberCache::new()),
        }
    }

    /// Disables the member cache. Every lookup walks the type information.
    pub fn without_cache(mut self) -> Self {
        self.cache = None;
        self
    }

    /// A process-wide reflector whose registry ran
    /// [`auto_register`](TypeRegistry::auto_register).
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<Reflector> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            let mut registry = TypeRegistry::new();
            let registered = registry.auto_register();
            log::debug!(
                "global reflector ready with {} types (auto_register: {registered})",
                registry.len(),
            );
            Self::with_registry(registry)
        })
    }

    #[inline]
    pub fn registry(&self) -> &TypeRegistryArc {
        &self.registry
    }

    // -------------------------------------------------------------------------
    // Fields

    /// Returns `true` if the target or one of its bases declares the field.
    pub fn field_exists(&self, target: &dyn Reflect, name: &str) -> bool {
        self.resolve(target.reflect_type_info(), MemberKind::Field, name)
            .is_some()
    }

    /// Reads a field.
    pub fn get_field_value<'a>(
        &self,
        target: &'a dyn Reflect,
        name: &str,
    ) -> Result<&'a dyn Reflect, ReflectError> {
        let info = target.reflect_type_info();
        let resolution = self
            .resolve(info, MemberKind::Field, name)
            .ok_or_else(|| member_not_found(info, MemberKind::Field, name))?;

        walk(target, &resolution.hops)
            .and_then(|owner| owner.field_at(resolution.index))
            .ok_or_else(|| member_not_found(info, MemberKind::Field, name))
    }

    /// Reads a field of a known type.
    pub fn get_field_value_as<'a, T: Reflect + TypePath>(
        &self,
        target: &'a dyn Reflect,
        name: &str,
    ) -> Result<&'a T, ReflectError> {
        let value = self.get_field_value(target, name)?;
        value.downcast_ref::<T>().ok_or_else(|| ReflectError::TypeMismatch {
            name: name.into(),
            expected: T::type_path(),
            found: value.reflect_type_path(),
        })
    }

    /// Assigns a field, converting strings and integers for enum fields.
    pub fn set_field_value(
        &self,
        target: &mut dyn Reflect,
        name: &str,
        value: Box<dyn Reflect>,
    ) -> Result<(), ReflectError> {
        self.assign_field(target, name, value, false)
    }

    /// Assigns an enum field from a name, an ordinal or an enum value.
    ///
    /// Fails with [`ReflectError::TypeMismatch`] if the field is not an enum.
    pub fn set_field_value_as_enum(
        &self,
        target: &mut dyn Reflect,
        name: &str,
        value: Box<dyn Reflect>,
    ) -> Result<(), ReflectError> {
        self.assign_field(target, name, value, true)
    }

    fn assign_field(
        &self,
        target: &mut dyn Reflect,
        name: &str,
        value: Box<dyn Reflect>,
        force_enum: bool,
    ) -> Result<(), ReflectError> {
        let info = target.reflect_type_info();
        let resolution = self
            .resolve(info, MemberKind::Field, name)
            .ok_or_else(|| member_not_found(info, MemberKind::Field, name))?;

        let declared = resolution
            .owner
            .field_at(resolution.index)
            .ok_or_else(|| member_not_found(info, MemberKind::Field, name))?
            .type_info();
        let value = coerce(declared, value, name, force_enum)?;

        let slot = walk_mut(target, &resolution.hops)
            .and_then(|owner| owner.field_at_mut(resolution.index))
            .ok_or_else(|| member_not_found(info, MemberKind::Field, name))?;

        slot.set(value).map_err(|value| ReflectError::TypeMismatch {
            name: name.into(),
            expected: declared.type_path(),
            found: value.reflect_type_path(),
        })
    }

    // -------------------------------------------------------------------------
    // Properties

    /// Calls a property getter.
    pub fn get_property_value(
        &self,
        target: &dyn Reflect,
        name: &str,
    ) -> Result<Box<dyn Reflect>, ReflectError> {
        let info = target.reflect_type_info();
        let resolution = self
            .resolve(info, MemberKind::Property, name)
            .ok_or_else(|| member_not_found(info, MemberKind::Property, name))?;

        if !resolution.owner.properties()[resolution.index].can_read() {
            return Err(ReflectError::Access {
                kind: MemberKind::Property,
                name: name.into(),
                type_path: info.type_path(),
                operation: AccessOp::Read,
            });
        }

        walk(target, &resolution.hops)
            .and_then(Struct::as_members)
            .and_then(|members| members.get_property(name))
            .ok_or_else(|| member_not_found(info, MemberKind::Property, name))
    }

    /// Calls a property setter, converting strings and integers for enum
    /// properties.
    pub fn set_property_value(
        &self,
        target: &mut dyn Reflect,
        name: &str,
        value: Box<dyn Reflect>,
    ) -> Result<(), ReflectError> {
        self.assign_property(target, name, value, false)
    }

    /// Calls the setter of an enum property with a name, an ordinal or an
    /// enum value.
    pub fn set_property_value_as_enum(
        &self,
        target: &mut dyn Reflect,
        name: &str,
        value: Box<dyn Reflect>,
    ) -> Result<(), ReflectError> {
        self.assign_property(target, name, value, true)
    }

    fn assign_property(
        &self,
        target: &mut dyn Reflect,
        name: &str,
        value: Box<dyn Reflect>,
        force_enum: bool,
    ) -> Result<(), ReflectError> {
        let info = target.reflect_type_info();
        let resolution = self
            .resolve(info, MemberKind::Property, name)
            .ok_or_else(|| member_not_found(info, MemberKind::Property, name))?;

        let property = &resolution.owner.properties()[resolution.index];
        if !property.can_write() {
            return Err(ReflectError::Access {
                kind: MemberKind::Property,
                name: name.into(),
                type_path: info.type_path(),
                operation: AccessOp::Write,
            });
        }

        let value = coerce(property.type_info(), value, name, force_enum)?;
        let mismatch = |value: &dyn Reflect| ReflectError::TypeMismatch {
            name: name.into(),
            expected: property.type_path(),
            found: value.reflect_type_path(),
        };
        if value.ty_id() != property.ty_id() {
            return Err(mismatch(&*value));
        }

        let members = walk_mut(target, &resolution.hops)
            .and_then(Struct::as_members_mut)
            .ok_or_else(|| member_not_found(info, MemberKind::Property, name))?;

        match members.set_property(name, value) {
            Some(Ok(())) => Ok(()),
            Some(Err(value)) => Err(mismatch(&*value)),
            None => Err(member_not_found(info, MemberKind::Property, name)),
        }
    }

    // -------------------------------------------------------------------------
    // Methods

    /// Invokes a method.
    ///
    /// The method is chosen by name and by the exact types of `args`,
    /// searching the bases when the target has no match. `Ok(None)` is the
    /// result of a method returning `()`. An error returned by the method
    /// comes back as [`ReflectError::Invocation`]. Panics are not caught.
    pub fn invoke_method(
        &self,
        target: &mut dyn Reflect,
        name: &str,
        args: Vec<Box<dyn Reflect>>,
    ) -> Result<Option<Box<dyn Reflect>>, ReflectError> {
        let info = target.reflect_type_info();
        let arg_types: Vec<TypeId> = args.iter().map(|arg| arg.ty_id()).collect();

        let resolution = info
            .as_struct()
            .ok()
            .and_then(|info| {
                resolve_in(info, |owner| {
                    owner
                        .methods()
                        .iter()
                        .position(|method| method.name() == name && method.accepts(&arg_types))
                })
            })
            .ok_or_else(|| member_not_found(info, MemberKind::Method, name))?;

        let members = walk_mut(target, &resolution.hops)
            .and_then(Struct::as_members_mut)
            .ok_or_else(|| member_not_found(info, MemberKind::Method, name))?;

        match members.invoke_method(name, args) {
            Some(result) => Ok(result?),
            None => Err(member_not_found(info, MemberKind::Method, name)),
        }
    }

    // -------------------------------------------------------------------------
    // Types

    /// Returns `true` if the registered type, or a registered type along its
    /// base chain, carries the type trait `I`.
    ///
    /// Interfaces are traits annotated with
    /// [`#[reflect_trait]`](crate::derive::reflect_trait), `I` is the
    /// generated `Reflect{Trait}` type. Unregistered types give `false`.
    #[inline]
    pub fn implements_interface<I: TypeTrait>(&self, type_id: TypeId) -> bool {
        self.implements_interface_by_id(type_id, TypeId::of::<I>())
    }

    /// [`implements_interface`](Self::implements_interface) with the type
    /// trait given by id.
    pub fn implements_interface_by_id(&self, type_id: TypeId, trait_id: TypeId) -> bool {
        let registry = self.registry.read();
        let mut current = type_id;
        loop {
            let Some(meta) = registry.get(current) else {
                return false;
            };
            if meta.has_trait_id(trait_id) {
                return true;
            }
            match meta.type_info().as_struct().ok().and_then(StructInfo::base) {
                Some(base) => current = base.ty_id(),
                None => return false,
            }
        }
    }

    /// Looks up a registered type by the crate it lives in and its path.
    ///
    /// `type_path` is either the full path or the path below the crate,
    /// `("shop", "stock::Crate")` and `("shop", "shop::stock::Crate")` find
    /// the same type.
    pub fn get_cross_module_type(
        &self,
        module: &str,
        type_path: &str,
    ) -> Result<&'static TypeInfo, ReflectError> {
        let registry = self.registry.read();
        if !registry.contains_module(module) {
            return Err(ReflectError::ModuleNotFound {
                module: module.into(),
            });
        }

        registry
            .get_with_type_path(type_path)
            .filter(|meta| meta.crate_name() == Some(module))
            .or_else(|| registry.get_with_type_path(&concat(&[module, "::", type_path])))
            .map(|meta| meta.type_info())
            .ok_or_else(|| ReflectError::TypeNotFound {
                module: module.into(),
                type_path: String::from(type_path),
            })
    }

    /// Builds a default value of a registered type with
    /// [`TypeTraitDefault`].
    pub fn create_instance(&self, type_id: TypeId) -> Option<Box<dyn Reflect>> {
        self.registry
            .read()
            .get_type_trait::<TypeTraitDefault>(type_id)
            .map(TypeTraitDefault::default)
    }

    // -------------------------------------------------------------------------
    // Resolution

    fn resolve(&self, info: &'static TypeInfo, kind: MemberKind, name: &str) -> Option<Resolution> {
        let info = info.as_struct().ok()?;
        let find = || match kind {
            MemberKind::Field => resolve_in(info, |owner| owner.index_of(name)),
            MemberKind::Property => resolve_in(info, |owner| {
                owner.properties().iter().position(|prop| prop.name() == name)
            }),
            MemberKind::Method => None,
        };

        match &self.cache {
            Some(cache) => cache.get_or_resolve(info.ty_id(), kind, name, find),
            None => find(),
        }
    }
}

impl core::fmt::Debug for Reflector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Reflector")
            .field("registry", &self.registry)
            .field("cached", &self.cache.as_ref().map(MemberCache::len))
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Helpers

// Walks `info` and its bases until `find` locates the member.
fn resolve_in(
    info: &'static StructInfo,
    find: impl Fn(&'static StructInfo) -> Option<usize>,
) -> Option<Resolution> {
    let mut owner = info;
    let mut hops = Vec::new();
    loop {
        if let Some(index) = find(owner) {
            return Some(Resolution {
                hops: hops.into_boxed_slice(),
                owner,
                index,
            });
        }
        hops.push(owner.base_index()?);
        owner = owner.base_info()?;
    }
}

fn walk<'a>(target: &'a dyn Reflect, hops: &[usize]) -> Option<&'a dyn Struct> {
    let mut current = target.reflect_ref().as_struct().ok()?;
    for &hop in hops {
        current = current.field_at(hop)?.reflect_ref().as_struct().ok()?;
    }
    Some(current)
}

fn walk_mut<'a>(target: &'a mut dyn Reflect, hops: &[usize]) -> Option<&'a mut dyn Struct> {
    let mut current = target.reflect_mut().as_struct().ok()?;
    for &hop in hops {
        current = current.field_at_mut(hop)?.reflect_mut().as_struct().ok()?;
    }
    Some(current)
}

fn coerce(
    declared: &'static TypeInfo,
    value: Box<dyn Reflect>,
    name: &str,
    force_enum: bool,
) -> Result<Box<dyn Reflect>, ReflectError> {
    match declared {
        TypeInfo::Enum(info) if force_enum || EnumInput::is_loose(&*value) => {
            Ok(convert_to_enum(value, info)?)
        }
        _ if force_enum => Err(ReflectError::TypeMismatch {
            name: name.into(),
            expected: declared.type_path(),
            found: value.reflect_type_path(),
        }),
        _ => Ok(value),
    }
}

fn member_not_found(info: &'static TypeInfo, kind: MemberKind, name: &str) -> ReflectError {
    crate::cfg::debug! {
        if let Ok(info) = info.as_struct() {
            match kind {
                MemberKind::Field => log::debug!(
                    "no field `{name}` on `{}`, declared fields: {:?}",
                    info.type_path(),
                    info.field_names(),
                ),
                MemberKind::Property => log::debug!(
                    "no property `{name}` on `{}`, declared properties: {:?}",
                    info.type_path(),
                    info.properties().iter().map(|prop| prop.name()).collect::<Vec<_>>(),
                ),
                MemberKind::Method => log::debug!(
                    "no matching method `{name}` on `{}`, declared methods: {:?}",
                    info.type_path(),
                    info.methods().iter().map(|method| method.name()).collect::<Vec<_>>(),
                ),
            }
        }
    }

    ReflectError::MemberNotFound {
        kind,
        name: name.into(),
        type_path: info.type_path(),
    }
}

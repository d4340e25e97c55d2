//! See following macros:
//!
//! - [`Reflect`]
//! - [`TypePath`]
//! - [`reflect_members`]
//! - [`reflect_trait`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod members;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Full Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits:
///
/// - `TypePath`
/// - `Typed`
/// - `Reflect`
/// - `GetTypeMeta`
/// - `Struct` (for `struct T { ... }` and `struct T;`)
/// - `Enum` (for fieldless `enum T { ... }`)
///
/// Tuple structs, unions and enums whose variants carry data are rejected.
///
/// ## Implementation Control
///
/// `TypePath`, `Typed`, `Reflect` and `GetTypeMeta` can be switched off,
/// the type must then implement them itself:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(TypePath = false, Typed = false)]
/// struct Foo { /* ... */ }
/// ```
///
/// ### Custom Type Path
///
/// The default path is `module_path!()` followed by the type name. Use
/// `type_path` to pin it, for example when the type is looked up by path
/// from another crate:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "shop::stock::Crate")]
/// struct Crate { /* ... */ }
/// ```
///
/// The path must have at least two segments. Generics are appended
/// automatically.
///
/// ## Standard Traits
///
/// The macro cannot see which standard traits a type implements. Declare
/// them so the reflection code can use them:
///
/// - `default`: inserts `TypeTraitDefault` into the type's `TypeMeta`.
/// - `partial_eq`: `reflect_partial_eq` uses `PartialEq`.
/// - `debug`: `reflect_debug` uses `Debug`.
///
/// ```rust, ignore
/// #[derive(Reflect, Default, PartialEq, Debug)]
/// #[reflect(default, partial_eq, debug)]
/// struct Foo { /* ... */ }
/// ```
///
/// ## Members
///
/// `members` declares that an `impl` block of the type carries
/// [`#[reflect_members]`](reflect_members). Its properties and methods
/// then appear in the `StructInfo` and are reachable through
/// `Struct::as_members`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(members)]
/// struct Foo { /* ... */ }
///
/// #[reflect_members]
/// impl Foo { /* ... */ }
/// ```
///
/// ## Type Traits
///
/// `type_trait` inserts additional type traits, usually the
/// `Reflect{Trait}` types made by [`reflect_trait`]:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_trait = ReflectDisposable)]
/// struct A;
///
/// #[derive(Reflect)]
/// #[reflect(type_trait = (ReflectDisposable, ReflectPrint))]
/// struct B;
/// ```
///
/// ## Auto Registration
///
/// With the `auto_register` feature, non-generic types submit their
/// registration through `inventory`, collected by
/// `TypeRegistry::auto_register`. Opt out with
/// `#[reflect(auto_register = false)]`.
///
/// ## Field Attributes
///
/// - `base`: member lookups that miss on the struct continue into this
///   field. At most one per struct.
/// - `ignore`: the field is invisible to reflection. It is left out of the
///   type information and `field_len`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Button {
///     #[reflect(base)]
///     widget: Widget,
///     #[reflect(ignore)]
///     handle: RawHandle,
///     label: String,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_full_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}

/// # Derive TypePath Trait
///
/// This macro only implements `TypePath`, the usage is similar to
/// [`derive Reflect`](derive_full_reflect).
///
/// ## Example
///
/// ```rust, ignore
/// // default implementation
/// #[derive(TypePath)]
/// struct A;
///
/// // custom implementation
/// #[derive(TypePath)]
/// #[reflect(type_path = "crate_name::foo::B")]
/// struct B;
/// ```
#[proc_macro_derive(TypePath, attributes(reflect))]
pub fn derive_type_path(input: TokenStream) -> TokenStream {
    use crate::derive_data::{ReflectMeta, TypeAttributes};

    let ast: DeriveInput = parse_macro_input!(input as DeriveInput);

    let type_attributes = match TypeAttributes::parse_attrs(&ast.attrs) {
        Ok(v) => v,
        Err(err) => return err.into_compile_error().into(),
    };

    match ReflectMeta::new(type_attributes, &ast.ident, &ast.generics) {
        Ok(meta) => impls::impl_trait_type_path(&meta).into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Publishes the methods of an inherent `impl` block as reflected
/// properties and methods by implementing `Members`.
///
/// The type needs `#[reflect(members)]` on its `#[derive(Reflect)]`.
///
/// - Methods taking `&self` or `&mut self` become reflected methods.
///   Associated functions are left alone.
/// - `#[reflect(get = "Name")]` turns a `&self` method without parameters
///   into the getter of property `Name`. A getter returning `&T` clones.
/// - `#[reflect(set = "Name")]` turns a `&mut self` method with one
///   parameter into the setter of property `Name`.
/// - `#[reflect(name = "...")]` publishes a method under another name,
///   several methods may share a name if their parameter types differ.
/// - `#[reflect(skip)]` leaves a method out.
///
/// Parameters must be owned types. A method returning `Result<T, E>` is
/// fallible: its `Err` is handed to the caller wrapped in
/// `InvocationError`, so `E` must convert into
/// `Box<dyn Error + Send + Sync>`.
///
/// Getters and setters are only reachable as properties.
///
/// ## Example
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(members)]
/// struct Lamp {
///     watts: u16,
/// }
///
/// #[reflect_members]
/// impl Lamp {
///     #[reflect(get = "Watts")]
///     fn watts(&self) -> u16 {
///         self.watts
///     }
///
///     #[reflect(set = "Watts")]
///     fn set_watts(&mut self, watts: u16) {
///         self.watts = watts;
///     }
///
///     fn dim(&mut self, by: u16) -> Result<u16, String> {
///         self.watts = self.watts.checked_sub(by).ok_or("too dark")?;
///         Ok(self.watts)
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn reflect_members(_args: TokenStream, input: TokenStream) -> TokenStream {
    members::impl_reflect_members(input)
}

/// Makes a trait usable as a reflected interface.
///
/// Generates a `Reflect{Trait}` struct that implements `TypeTrait` and
/// `FromType<T>` for every `T: Trait + Reflect + Typed`. Insert it with
/// `#[reflect(type_trait = Reflect{Trait})]`.
///
/// It only contains three methods:
/// - `get`: cast `&dyn Reflect` to `&dyn {Trait}`
/// - `get_mut`: cast `&mut dyn Reflect` to `&mut dyn {Trait}`
/// - `get_boxed`: cast `Box<dyn Reflect>` to `Box<dyn {Trait}>`
///
/// ## Example
///
/// ```rust, ignore
/// #[reflect_trait]
/// pub trait Disposable {
///     fn dispose(&mut self);
/// }
///
/// #[derive(Reflect)]
/// #[reflect(type_trait = ReflectDisposable)]
/// struct Texture { /* ... */ }
///
/// impl Disposable for Texture { /* ... */ }
///
/// let reflector = Reflector::global();
/// assert!(reflector.implements_interface::<ReflectDisposable>(TypeId::of::<Texture>()));
/// ```
#[proc_macro_attribute]
pub fn reflect_trait(_args: TokenStream, input: TokenStream) -> TokenStream {
    impls::impl_reflect_trait(input)
}

use proc_macro2::Span;
use syn::{FnArg, GenericArgument, Ident, ImplItemFn, LitStr, Pat, PathArguments};
use syn::{ReturnType, Type, Visibility};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// Method attributes

/// `#[reflect(...)]` on a method inside `#[reflect_members]`.
#[derive(Default)]
pub(super) struct MethodAttributes {
    /// `name = "..."`: published name, defaults to the function name.
    pub name: Option<LitStr>,
    /// `skip`: not published.
    pub skip: bool,
    /// `get = "Prop"`: the getter of a property.
    pub get: Option<LitStr>,
    /// `set = "Prop"`: the setter of a property.
    pub set: Option<LitStr>,
}

impl MethodAttributes {
    /// Parses and removes the `#[reflect(...)]` attributes of `method`.
    pub fn take_from(method: &mut ImplItemFn) -> syn::Result<Self> {
        let mut this = Self::default();
        let mut error: Option<syn::Error> = None;

        method.attrs.retain(|attr| {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                return true;
            }
            let parsed = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    this.skip = true;
                } else if meta.path.is_ident("name") {
                    this.name = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("get") {
                    this.get = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("set") {
                    this.set = Some(meta.value()?.parse()?);
                } else {
                    return Err(meta.error(
                        "unknown method option, expected `name`, `skip`, `get` or `set`",
                    ));
                }
                Ok(())
            });
            if let Err(err) = parsed {
                match &mut error {
                    Some(error) => error.combine(err),
                    None => error = Some(err),
                }
            }
            false
        });

        if let Some(error) = error {
            return Err(error);
        }

        let roles = [this.name.is_some(), this.get.is_some(), this.set.is_some()];
        if roles.iter().filter(|role| **role).count() > 1 {
            return Err(syn::Error::new_spanned(
                &method.sig.ident,
                "`name`, `get` and `set` are mutually exclusive",
            ));
        }
        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// Signature

/// What a reflected method hands back.
pub(super) enum Returns {
    /// `()` or no return type.
    Unit,
    /// A plain value.
    Value(Type),
    /// `&T`, only allowed on getters, which clone.
    Borrowed(Type),
    /// `Result<(), E>`.
    FallibleUnit,
    /// `Result<T, E>`.
    FallibleValue(Type),
}

pub(super) struct Param {
    pub name: String,
    pub ty: Type,
}

/// The parts of a method signature the generated dispatch needs.
pub(super) struct MethodSig {
    pub ident: Ident,
    pub vis: Visibility,
    pub is_mut: bool,
    pub params: Vec<Param>,
    pub returns: Returns,
}

impl MethodSig {
    /// `None` for associated functions, which have no receiver to call on.
    pub fn parse(method: &ImplItemFn) -> syn::Result<Option<Self>> {
        let sig = &method.sig;
        let Some(receiver) = sig.receiver() else {
            return Ok(None);
        };

        if receiver.reference.is_none() {
            return Err(syn::Error::new_spanned(
                receiver,
                "reflected methods take `&self` or `&mut self`, use `#[reflect(skip)]` to leave this one out",
            ));
        }
        if !sig.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &sig.generics,
                "generic methods cannot be reflected, use `#[reflect(skip)]` to leave this one out",
            ));
        }
        if let Some(asyncness) = &sig.asyncness {
            return Err(syn::Error::new_spanned(
                asyncness,
                "async methods cannot be reflected, use `#[reflect(skip)]` to leave this one out",
            ));
        }

        let mut params = Vec::new();
        for (index, arg) in sig.inputs.iter().enumerate() {
            let FnArg::Typed(pat_type) = arg else {
                continue;
            };
            if !is_owned(&pat_type.ty) {
                return Err(syn::Error::new_spanned(
                    &pat_type.ty,
                    "reflected method parameters must be owned `'static` types",
                ));
            }
            let name = match &*pat_type.pat {
                Pat::Ident(pat) => pat.ident.to_string(),
                _ => format!("arg{index}"),
            };
            params.push(Param {
                name,
                ty: (*pat_type.ty).clone(),
            });
        }

        Ok(Some(Self {
            ident: sig.ident.clone(),
            vis: method.vis.clone(),
            is_mut: receiver.mutability.is_some(),
            params,
            returns: parse_returns(&sig.output)?,
        }))
    }

    /// The span to report signature misuse at.
    pub fn span(&self) -> Span {
        self.ident.span()
    }
}

fn parse_returns(output: &ReturnType) -> syn::Result<Returns> {
    let ty = match output {
        ReturnType::Default => return Ok(Returns::Unit),
        ReturnType::Type(_, ty) => &**ty,
    };

    if is_unit(ty) {
        return Ok(Returns::Unit);
    }

    if let Type::Reference(reference) = ty {
        if reference.mutability.is_some() || !is_owned(&reference.elem) {
            return Err(syn::Error::new_spanned(
                ty,
                "reflected methods cannot return mutable or nested references",
            ));
        }
        return Ok(Returns::Borrowed((*reference.elem).clone()));
    }

    if let Some(ok) = result_ok_type(ty) {
        if !is_owned(ok) {
            return Err(syn::Error::new_spanned(
                ok,
                "the `Ok` type of a reflected method must be an owned `'static` type",
            ));
        }
        return Ok(if is_unit(ok) {
            Returns::FallibleUnit
        } else {
            Returns::FallibleValue(ok.clone())
        });
    }

    if !is_owned(ty) {
        return Err(syn::Error::new_spanned(
            ty,
            "reflected methods must return an owned `'static` type",
        ));
    }
    Ok(Returns::Value(ty.clone()))
}

fn is_unit(ty: &Type) -> bool {
    matches!(ty, Type::Tuple(tuple) if tuple.elems.is_empty())
}

/// The `T` of `Result<T, E>`, matched on the last path segment.
fn result_ok_type(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Result" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(ok) => Some(ok),
        _ => None,
    }
}

/// Rejects references, `impl Trait` and anything else that cannot travel
/// inside a `Box<dyn Reflect>`.
fn is_owned(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => {
            path.qself.is_none()
                && path.path.segments.iter().all(|segment| match &segment.arguments {
                    PathArguments::AngleBracketed(args) => args.args.iter().all(|arg| match arg {
                        GenericArgument::Type(ty) => is_owned(ty),
                        GenericArgument::Lifetime(lifetime) => lifetime.ident == "static",
                        _ => true,
                    }),
                    _ => true,
                })
        }
        Type::Tuple(tuple) => tuple.elems.is_empty(),
        Type::Paren(paren) => is_owned(&paren.elem),
        Type::Group(group) => is_owned(&group.elem),
        _ => false,
    }
}

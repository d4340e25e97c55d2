use syn::{Data, DeriveInput};

use super::{ReflectEnum, ReflectMeta, ReflectStruct, TypeAttributes};

/// The parsed input of `#[derive(Reflect)]`.
pub(crate) enum ReflectDerive<'a> {
    Struct(ReflectStruct<'a>),
    Enum(ReflectEnum<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let meta = ReflectMeta::new(attrs, &input.ident, &input.generics)?;

        match &input.data {
            Data::Struct(data) => Ok(Self::Struct(ReflectStruct::new(meta, &data.fields)?)),
            Data::Enum(data) => {
                if let Some(span) = meta.attrs().members {
                    return Err(syn::Error::new(span, "`members` is only supported on structs"));
                }
                Ok(Self::Enum(ReflectEnum::new(meta, &input.attrs, &data.variants)?))
            }
            Data::Union(data) => Err(syn::Error::new_spanned(
                data.union_token,
                "`Reflect` cannot be derived for unions",
            )),
        }
    }
}

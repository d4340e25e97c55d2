use proc_macro2::TokenStream;
use quote::quote;
use syn::{Field, Fields, Ident};

use super::{FieldAttributes, ReflectMeta};

/// A named field together with its reflect options.
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub ident: &'a Ident,
    pub attrs: FieldAttributes,
    /// Index among the fields reflection can see.
    pub reflection_index: usize,
}

impl StructField<'_> {
    #[inline]
    pub fn name(&self) -> String {
        self.ident.to_string()
    }
}

/// A struct with named fields (or a unit struct, which has none).
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn new(mut meta: ReflectMeta<'a>, fields: &'a Fields) -> syn::Result<Self> {
        let named = match fields {
            Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(unnamed) => {
                return Err(syn::Error::new_spanned(
                    unnamed,
                    "`Reflect` can only be derived for structs with named fields",
                ));
            }
        };

        let mut active = Vec::with_capacity(named.len());
        let mut base_seen = false;
        for data in named {
            let Some(ident) = &data.ident else {
                continue;
            };
            let attrs = FieldAttributes::parse_attrs(&data.attrs)?;
            if attrs.is_ignored() {
                continue;
            }
            if let Some(span) = attrs.base {
                if base_seen {
                    return Err(syn::Error::new(span, "a struct can have at most one base field"));
                }
                base_seen = true;
            }
            active.push(StructField {
                data,
                ident,
                attrs,
                reflection_index: active.len(),
            });
        }

        meta.set_active_types(active.iter().map(|field| field.data.ty.clone()));

        Ok(Self {
            meta,
            fields: active,
        })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// The fields visible to reflection, in declaration order.
    #[inline]
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter()
    }

    /// `StructInfo` constructor tokens.
    ///
    /// ```ignore
    /// TypeInfo::Struct(
    ///     StructInfo::new::<Self>(&[
    ///         NamedField::new::<u32>("id").with_visibility(Visibility::Public),
    ///         NamedField::new::<Shape>("shape").with_visibility(..).as_base(),
    ///     ])
    ///     .with_members(<Self as Members>::properties(), <Self as Members>::methods())
    /// )
    /// ```
    pub fn to_info_tokens(&self) -> TokenStream {
        let ruhe_reflect_path = self.meta.ruhe_reflect_path();
        let type_info_ = crate::path::type_info_(ruhe_reflect_path);
        let struct_info_ = crate::path::struct_info_(ruhe_reflect_path);
        let named_field_ = crate::path::named_field_(ruhe_reflect_path);
        let visibility_ = crate::path::visibility_(ruhe_reflect_path);

        let fields = self.active_fields().map(|field| {
            let ty = &field.data.ty;
            let name = field.name();
            let visibility = crate::utils::visibility_tokens(&visibility_, &field.data.vis);
            let as_base = field.attrs.base.map(|_| quote!(.as_base()));
            quote! {
                #named_field_::new::<#ty>(#name)
                    .with_visibility(#visibility)
                    #as_base
            }
        });

        let with_members = self.meta.attrs().members.map(|span| {
            let members_ = crate::path::members_(ruhe_reflect_path);
            quote::quote_spanned! { span =>
                .with_members(
                    <Self as #members_>::properties(),
                    <Self as #members_>::methods(),
                )
            }
        });

        quote! {
            #type_info_::Struct(
                #struct_info_::new::<Self>(&[ #(#fields),* ])
                    #with_members
            )
        }
    }
}

/// Match arms shared by the `Struct` accessors.
pub(crate) struct FieldAccessors {
    pub field_names: Vec<String>,
    pub fields_ref: Vec<TokenStream>,
    pub fields_mut: Vec<TokenStream>,
    pub field_indices: Vec<usize>,
    pub field_count: usize,
}

impl FieldAccessors {
    pub fn new(info: &ReflectStruct) -> Self {
        let mut this = Self {
            field_names: Vec::new(),
            fields_ref: Vec::new(),
            fields_mut: Vec::new(),
            field_indices: Vec::new(),
            field_count: 0,
        };

        for field in info.active_fields() {
            let ident = field.ident;
            this.field_names.push(field.name());
            this.fields_ref.push(quote!(&self.#ident));
            this.fields_mut.push(quote!(&mut self.#ident));
            this.field_indices.push(field.reflection_index);
            this.field_count += 1;
        }
        this
    }
}

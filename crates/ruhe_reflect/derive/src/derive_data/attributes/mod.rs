//! Parsing of `#[reflect(...)]` attributes on types and fields.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod flags;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

use flags::{TraitAvailableFlags, TraitImplSwitches};

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use type_attributes::TypeAttributes;

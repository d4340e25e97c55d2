use alloc::boxed::Box;
use alloc::string::String;
use core::error::Error;
use core::fmt;

use thiserror::Error;

use crate::convert::EnumConversionError;

// -----------------------------------------------------------------------------
// MemberKind

/// The kind of member an operation looked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Property,
    Method,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field => f.pad("field"),
            Self::Property => f.pad("property"),
            Self::Method => f.pad("method"),
        }
    }
}

/// The half of a property that was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessOp {
    Read,
    Write,
}

impl fmt::Display for AccessOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.pad("read"),
            Self::Write => f.pad("written"),
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectError

/// Failure of a [`Reflector`](crate::access::Reflector) operation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReflectError {
    /// No member of that kind and name exists on the type or its bases.
    #[error("{kind} `{name}` not found on `{type_path}`")]
    MemberNotFound {
        kind: MemberKind,
        name: String,
        type_path: &'static str,
    },
    /// The member exists but does not support the operation.
    #[error("{kind} `{name}` of `{type_path}` cannot be {operation}")]
    Access {
        kind: MemberKind,
        name: String,
        type_path: &'static str,
        operation: AccessOp,
    },
    /// The value does not have the member's declared type.
    #[error("`{name}` expects a `{expected}`, found a `{found}`")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
    /// Coercing the value into the member's enum type failed.
    #[error(transparent)]
    EnumConversion(#[from] EnumConversionError),
    /// The invoked method returned an error, kept as is.
    #[error(transparent)]
    Invocation(#[from] InvocationError),
    /// No registered type is declared in the module.
    #[error("no registered type is declared in module `{module}`")]
    ModuleNotFound { module: String },
    /// The module is known but does not contain the type.
    #[error("type `{type_path}` not found in module `{module}`")]
    TypeNotFound { module: String, type_path: String },
}

// -----------------------------------------------------------------------------
// InvocationError

/// The error returned by a reflected method.
///
/// Displays exactly like the original error and exposes it as its
/// [`source`](Error::source).
///
/// ```
/// use core::error::Error;
/// use ruhe_reflect::access::InvocationError;
///
/// #[derive(Debug, PartialEq)]
/// struct Jammed;
///
/// impl core::fmt::Display for Jammed {
///     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
///         f.write_str("printer jammed")
///     }
/// }
///
/// impl Error for Jammed {}
///
/// let error = InvocationError::new(Jammed);
/// assert_eq!(error.to_string(), "printer jammed");
/// assert_eq!(error.downcast_ref::<Jammed>(), Some(&Jammed));
/// assert!(error.source().is_some());
/// ```
pub struct InvocationError(Box<dyn Error + Send + Sync>);

impl InvocationError {
    /// Wraps the error returned by a method.
    #[inline]
    pub fn new(error: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self(error.into())
    }

    /// Returns the original error.
    #[inline]
    pub fn get_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.0
    }

    /// Returns the original error if it is an `E`.
    #[inline]
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }

    /// Unwraps the original error.
    #[inline]
    pub fn into_inner(self) -> Box<dyn Error + Send + Sync> {
        self.0
    }
}

impl fmt::Debug for InvocationError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for InvocationError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for InvocationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.0)
    }
}

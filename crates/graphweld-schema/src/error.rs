//! Error types for schema construction.
//!
//! Every error raised here is fatal to the surrounding schema build: the
//! registry errors indicate schema-definition or registration-order bugs,
//! and none of them is meant to be retried. Visibility beyond the error
//! value itself is the caller's concern.

use graphweld_core::TypeKind;
use thiserror::Error;

/// Errors that can occur while constructing a schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A type with the same name was registered twice.
    #[error("Type \"{name}\" is already registered")]
    DuplicateType { name: String },

    /// A lookup referenced a name no type was registered under.
    #[error("Could not find type \"{name}\" in registry")]
    TypeNotFound { name: String },

    /// A lookup found the named type, but with the wrong kind.
    #[error("Expected type \"{name}\" to be an {expected} type, got an {actual} type")]
    TypeKindMismatch {
        name: String,
        expected: TypeKind,
        actual: TypeKind,
    },

    /// A registration was attempted after the registry was sealed.
    #[error("Registry is sealed, type \"{name}\" can no longer be registered")]
    RegistrySealed { name: String },

    /// No resolution strategy matched a parameter, in strict operation.
    #[error("No resolution strategy matched parameter \"{parameter}\"")]
    UnresolvedParameter { parameter: String },

    /// Invalid mapper configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid schema object model input.
    #[error(transparent)]
    Core(#[from] graphweld_core::CoreError),
}

impl SchemaError {
    /// Create a new DuplicateType error
    pub fn duplicate_type(name: impl Into<String>) -> Self {
        Self::DuplicateType { name: name.into() }
    }

    /// Create a new TypeNotFound error
    pub fn type_not_found(name: impl Into<String>) -> Self {
        Self::TypeNotFound { name: name.into() }
    }

    /// Create a new TypeKindMismatch error
    pub fn type_kind_mismatch(name: impl Into<String>, expected: TypeKind, actual: TypeKind) -> Self {
        Self::TypeKindMismatch {
            name: name.into(),
            expected,
            actual,
        }
    }

    /// Create a new RegistrySealed error
    pub fn registry_sealed(name: impl Into<String>) -> Self {
        Self::RegistrySealed { name: name.into() }
    }

    /// Create a new UnresolvedParameter error
    pub fn unresolved_parameter(parameter: impl Into<String>) -> Self {
        Self::UnresolvedParameter {
            parameter: parameter.into(),
        }
    }

    /// Create a new Configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Get error category for logging/monitoring
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicateType { .. } | Self::RegistrySealed { .. } => ErrorCategory::Registration,
            Self::TypeNotFound { .. } | Self::TypeKindMismatch { .. } => ErrorCategory::Lookup,
            Self::UnresolvedParameter { .. } => ErrorCategory::Resolution,
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Core(_) => ErrorCategory::Model,
        }
    }
}

/// Error categories for monitoring and classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Registration,
    Lookup,
    Resolution,
    Configuration,
    Model,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Registration => write!(f, "registration"),
            Self::Lookup => write!(f, "lookup"),
            Self::Resolution => write!(f, "resolution"),
            Self::Configuration => write!(f, "configuration"),
            Self::Model => write!(f, "model"),
        }
    }
}

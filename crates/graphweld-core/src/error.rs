use thiserror::Error;

/// Core error types for the graphweld object model
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid type name: {0}")]
    InvalidTypeName(String),

    #[error("Invalid field name \"{name}\" on type {type_name}")]
    InvalidFieldName { type_name: String, name: String },

    #[error("Invalid argument name \"{name}\" on field {field_name}")]
    InvalidArgumentName { field_name: String, name: String },
}

impl CoreError {
    /// Create a new InvalidTypeName error
    pub fn invalid_type_name(name: impl Into<String>) -> Self {
        Self::InvalidTypeName(name.into())
    }

    /// Create a new InvalidFieldName error
    pub fn invalid_field_name(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self::InvalidFieldName {
            type_name: type_name.into(),
            name: name.into(),
        }
    }

    /// Create a new InvalidArgumentName error
    pub fn invalid_argument_name(field_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self::InvalidArgumentName {
            field_name: field_name.into(),
            name: name.into(),
        }
    }
}

/// Convenience result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

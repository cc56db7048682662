//! Reflection-supplied parameter metadata and resolution outcomes.
//!
//! Descriptors and doc metadata are produced by a reflection subsystem
//! upstream of this workspace and may cross a process boundary as JSON,
//! so the whole model is serde-serializable.

use serde::{Deserialize, Serialize};

use crate::types::TypeRef;

/// Describes one declared parameter of a callable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Parameter name as declared in source.
    pub name: String,
    /// Declared type name, if the declaration carries one.
    #[serde(default)]
    pub type_name: Option<String>,
    /// Zero-based position in the parameter list.
    pub position: usize,
    /// Whether the declaration permits null.
    #[serde(default)]
    pub nullable: bool,
    /// Declared default value, if any.
    #[serde(default)]
    pub default_value: Option<serde_json::Value>,
}

impl ParameterDescriptor {
    /// Creates a descriptor with no declared type, no default, not nullable.
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            type_name: None,
            position,
            nullable: false,
            default_value: None,
        }
    }

    /// Sets the declared type name.
    #[must_use]
    pub fn typed(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Marks the parameter nullable.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Sets the declared default value.
    #[must_use]
    pub fn with_default(mut self, value: serde_json::Value) -> Self {
        self.default_value = Some(value);
        self
    }
}

/// Documentation metadata extracted from a callable's doc block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocMetadata {
    /// One-line summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Long-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the callable is marked deprecated.
    #[serde(default)]
    pub deprecated: bool,
    /// Deprecation reason, when present.
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

/// Documentation tag for a single parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamTag {
    /// Type name stated in the documentation, if any.
    #[serde(default)]
    pub type_name: Option<String>,
    /// Description text for the parameter.
    #[serde(default)]
    pub description: Option<String>,
}

impl ParamTag {
    /// Creates a tag with a documented type and description.
    pub fn new(
        type_name: impl Into<Option<String>>,
        description: impl Into<Option<String>>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            description: description.into(),
        }
    }
}

/// The outcome of a successful parameter resolution.
///
/// Each variant captures one binding capability. The resolver chain never
/// inspects the variant; it is interpreted by the invoker that eventually
/// calls the underlying method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParameterBinding {
    /// Binds to an entry of the request/execution context.
    Context {
        /// Context entry key.
        key: String,
    },
    /// Binds to a declared schema input argument.
    Argument {
        /// Exposed argument name.
        name: String,
        /// Argument type reference.
        ty: TypeRef,
        /// Argument description, when documented.
        #[serde(default)]
        description: Option<String>,
        /// Default applied when the argument is omitted.
        #[serde(default)]
        default_value: Option<serde_json::Value>,
    },
    /// Binds to an injected service instance.
    Service {
        /// Identifier of the service in the composition root's catalogue.
        service_id: String,
    },
}

impl ParameterBinding {
    /// Returns the argument definition carried by an argument binding.
    pub fn as_argument(&self) -> Option<(&str, &TypeRef)> {
        match self {
            Self::Argument { name, ty, .. } => Some((name, ty)),
            _ => None,
        }
    }
}

//! Named schema types and by-name type references.
//!
//! The model mirrors the shape of a GraphQL-style schema without depending
//! on any particular GraphQL implementation. Types reference each other by
//! name through [`TypeRef`]; resolving a name to a concrete type is the
//! registry's job. This is what allows self-referential and mutually
//! referential types to be described without special-casing cycles.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::name::is_valid_name;

/// A reference to a schema type by name, with list/non-null wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeRef {
    /// A nullable reference to the named type.
    Named(String),
    /// A non-null wrapper around the inner reference.
    NonNull(Box<TypeRef>),
    /// A nullable list of the inner reference.
    List(Box<TypeRef>),
}

impl TypeRef {
    /// Built-in scalar name for strings.
    pub const STRING: &'static str = "String";
    /// Built-in scalar name for integers.
    pub const INT: &'static str = "Int";
    /// Built-in scalar name for floats.
    pub const FLOAT: &'static str = "Float";
    /// Built-in scalar name for booleans.
    pub const BOOLEAN: &'static str = "Boolean";
    /// Built-in scalar name for identifiers.
    pub const ID: &'static str = "ID";

    /// Creates a nullable reference to a named type.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Creates a non-null reference to a named type.
    pub fn named_nn(name: impl Into<String>) -> Self {
        Self::NonNull(Box::new(Self::Named(name.into())))
    }

    /// Creates a nullable list of nullable references to a named type.
    pub fn named_list(name: impl Into<String>) -> Self {
        Self::List(Box::new(Self::Named(name.into())))
    }

    /// Wraps this reference in a non-null modifier.
    #[must_use]
    pub fn non_null(self) -> Self {
        Self::NonNull(Box::new(self))
    }

    /// Wraps this reference in a list modifier.
    #[must_use]
    pub fn list(self) -> Self {
        Self::List(Box::new(self))
    }

    /// Returns the innermost referenced type name.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::NonNull(inner) | Self::List(inner) => inner.type_name(),
        }
    }

    /// Returns true if the outermost modifier allows null.
    pub fn is_nullable(&self) -> bool {
        !matches!(self, Self::NonNull(_))
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
            Self::List(inner) => write!(f, "[{inner}]"),
        }
    }
}

/// An input argument declared on a field.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentDefinition {
    /// Argument name.
    pub name: String,
    /// Argument type reference.
    pub ty: TypeRef,
    /// Human-readable description, if documented.
    pub description: Option<String>,
    /// Default value applied when the argument is omitted.
    pub default_value: Option<serde_json::Value>,
}

impl ArgumentDefinition {
    /// Creates a new argument definition.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
            default_value: None,
        }
    }

    /// Sets the argument description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: serde_json::Value) -> Self {
        self.default_value = Some(value);
        self
    }
}

/// A field on an object or interface type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    /// Field name.
    pub name: String,
    /// Result type reference.
    pub ty: TypeRef,
    /// Human-readable description, if documented.
    pub description: Option<String>,
    /// Deprecation reason; `Some` marks the field deprecated.
    pub deprecation_reason: Option<String>,
    /// Declared input arguments, in declaration order.
    pub arguments: Vec<ArgumentDefinition>,
}

impl FieldDefinition {
    /// Creates a new field definition.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
            deprecation_reason: None,
            arguments: Vec::new(),
        }
    }

    /// Sets the field description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the field deprecated with a reason.
    #[must_use]
    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    /// Appends an input argument.
    #[must_use]
    pub fn argument(mut self, argument: ArgumentDefinition) -> Self {
        self.arguments.push(argument);
        self
    }
}

/// The kind of a named schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Object,
    Interface,
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Object => write!(f, "object"),
            Self::Interface => write!(f, "interface"),
        }
    }
}

/// An object-kind schema type.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectType {
    /// Type name, unique across the schema.
    pub name: String,
    /// Human-readable description.
    pub description: Option<String>,
    /// Fields in declaration order, keyed by field name.
    pub fields: IndexMap<String, FieldDefinition>,
    /// Names of interface-kind types this type implements.
    pub implements: Vec<String>,
}

impl ObjectType {
    /// Creates a new object type with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
            implements: Vec::new(),
        }
    }

    /// Sets the type description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a field. A later field with the same name replaces the earlier
    /// one in place, keeping the original position.
    #[must_use]
    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    /// Declares that this type implements the named interface.
    #[must_use]
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.implements.push(interface.into());
        self
    }

    /// Validates the type name and all field and argument names.
    pub fn validate(&self) -> Result<()> {
        validate_names(&self.name, &self.fields)?;
        for interface in &self.implements {
            if !is_valid_name(interface) {
                return Err(CoreError::invalid_type_name(interface));
            }
        }
        Ok(())
    }
}

/// An interface-kind schema type.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceType {
    /// Type name, unique across the schema.
    pub name: String,
    /// Human-readable description.
    pub description: Option<String>,
    /// Fields in declaration order, keyed by field name.
    pub fields: IndexMap<String, FieldDefinition>,
}

impl InterfaceType {
    /// Creates a new interface type with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
        }
    }

    /// Sets the type description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a field. A later field with the same name replaces the earlier
    /// one in place, keeping the original position.
    #[must_use]
    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    /// Validates the type name and all field and argument names.
    pub fn validate(&self) -> Result<()> {
        validate_names(&self.name, &self.fields)
    }
}

fn validate_names(type_name: &str, fields: &IndexMap<String, FieldDefinition>) -> Result<()> {
    if !is_valid_name(type_name) {
        return Err(CoreError::invalid_type_name(type_name));
    }
    for field in fields.values() {
        if !is_valid_name(&field.name) {
            return Err(CoreError::invalid_field_name(type_name, &field.name));
        }
        for argument in &field.arguments {
            if !is_valid_name(&argument.name) {
                return Err(CoreError::invalid_argument_name(&field.name, &argument.name));
            }
        }
    }
    Ok(())
}

/// A fully computed named schema type.
///
/// "Fully computed" means all deferred extension merges have already been
/// applied; consumers such as the type registry never see a partially
/// built type.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaType {
    Object(ObjectType),
    Interface(InterfaceType),
}

impl SchemaType {
    /// Returns the type name.
    pub fn name(&self) -> &str {
        match self {
            Self::Object(object) => &object.name,
            Self::Interface(interface) => &interface.name,
        }
    }

    /// Returns the type kind.
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Object(_) => TypeKind::Object,
            Self::Interface(_) => TypeKind::Interface,
        }
    }

    /// Returns the type description, if any.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Object(object) => object.description.as_deref(),
            Self::Interface(interface) => interface.description.as_deref(),
        }
    }

    /// Returns the fields in declaration order.
    pub fn fields(&self) -> &IndexMap<String, FieldDefinition> {
        match self {
            Self::Object(object) => &object.fields,
            Self::Interface(interface) => &interface.fields,
        }
    }

    /// Returns the object variant, if this is an object-kind type.
    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Self::Object(object) => Some(object),
            Self::Interface(_) => None,
        }
    }

    /// Validates the type name and all field and argument names.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Object(object) => object.validate(),
            Self::Interface(interface) => interface.validate(),
        }
    }
}

impl From<ObjectType> for SchemaType {
    fn from(object: ObjectType) -> Self {
        Self::Object(object)
    }
}

impl From<InterfaceType> for SchemaType {
    fn from(interface: InterfaceType) -> Self {
        Self::Interface(interface)
    }
}

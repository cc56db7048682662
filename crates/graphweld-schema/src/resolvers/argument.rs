//! Resolution of schema input-argument parameters.

use std::collections::HashMap;

use graphweld_core::{DocMetadata, ParamTag, ParameterBinding, ParameterDescriptor, TypeRef};
use tracing::trace;

use super::ParameterResolver;
use crate::error::SchemaError;
use crate::Result;

/// Binds parameters as schema input arguments.
///
/// This is the general fallback strategy and belongs last in the chain: any
/// parameter not claimed by a more specific strategy becomes an input
/// argument of the exposed field. The argument type comes from the declared
/// type name, or from the documentation tag when the declaration carries no
/// type and doc-tag inference is enabled.
pub struct ArgumentResolver {
    infer_from_doc_tags: bool,
    strict: bool,
}

impl ArgumentResolver {
    /// Creates a resolver with doc-tag inference enabled and strict mode
    /// disabled.
    pub fn new() -> Self {
        Self {
            infer_from_doc_tags: true,
            strict: false,
        }
    }

    /// Enables or disables falling back to the documented type.
    #[must_use]
    pub fn infer_from_doc_tags(mut self, infer: bool) -> Self {
        self.infer_from_doc_tags = infer;
        self
    }

    /// Enables or disables strict mode.
    ///
    /// In strict mode a parameter with neither a declared nor a documented
    /// type fails the build with `UnresolvedParameter` instead of being
    /// left for the caller's fallback.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for ArgumentResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterResolver for ArgumentResolver {
    fn resolve(
        &self,
        parameter: &ParameterDescriptor,
        _doc: &DocMetadata,
        param_tags: &HashMap<String, ParamTag>,
    ) -> Result<Option<ParameterBinding>> {
        let tag = param_tags.get(&parameter.name);

        let documented = if self.infer_from_doc_tags {
            tag.and_then(|t| t.type_name.as_deref())
        } else {
            None
        };
        let Some(type_name) = parameter.type_name.as_deref().or(documented) else {
            if self.strict {
                return Err(SchemaError::unresolved_parameter(&parameter.name));
            }
            return Ok(None);
        };

        // A declared default makes the argument omittable, hence nullable.
        let base = TypeRef::named(scalar_name(type_name));
        let ty = if parameter.nullable || parameter.default_value.is_some() {
            base
        } else {
            base.non_null()
        };

        trace!(parameter = %parameter.name, %ty, "Binding argument parameter");
        Ok(Some(ParameterBinding::Argument {
            name: parameter.name.clone(),
            ty,
            description: tag.and_then(|t| t.description.clone()),
            default_value: parameter.default_value.clone(),
        }))
    }
}

/// Maps a declared primitive type name to its schema scalar.
///
/// Reflection reports source-language primitive names in lowercase; complex
/// types pass through unchanged and are expected to be registered as named
/// types of their own.
fn scalar_name(type_name: &str) -> &str {
    match type_name {
        "string" => TypeRef::STRING,
        "int" | "integer" => TypeRef::INT,
        "float" | "double" => TypeRef::FLOAT,
        "bool" | "boolean" => TypeRef::BOOLEAN,
        "id" => TypeRef::ID,
        other => other,
    }
}

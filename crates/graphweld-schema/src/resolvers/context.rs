//! Resolution of execution-context parameters.

use std::collections::{HashMap, HashSet};

use graphweld_core::{DocMetadata, ParamTag, ParameterBinding, ParameterDescriptor};
use tracing::trace;

use super::ParameterResolver;
use crate::Result;

/// Binds parameters whose declared type denotes the execution context.
///
/// Context parameters carry per-request state (the authenticated user, the
/// current operation, loader caches) and must never surface as schema input
/// arguments, so this resolver is placed ahead of [`ArgumentResolver`] in
/// the chain.
///
/// [`ArgumentResolver`]: super::ArgumentResolver
pub struct ContextResolver {
    context_types: HashSet<String>,
}

impl ContextResolver {
    /// Creates a resolver matching the given declared type names.
    pub fn new(context_types: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            context_types: context_types.into_iter().map(Into::into).collect(),
        }
    }
}

impl ParameterResolver for ContextResolver {
    fn resolve(
        &self,
        parameter: &ParameterDescriptor,
        _doc: &DocMetadata,
        _param_tags: &HashMap<String, ParamTag>,
    ) -> Result<Option<ParameterBinding>> {
        let Some(type_name) = parameter.type_name.as_deref() else {
            return Ok(None);
        };
        if !self.context_types.contains(type_name) {
            return Ok(None);
        }

        trace!(parameter = %parameter.name, type_name, "Binding context parameter");
        Ok(Some(ParameterBinding::Context {
            key: type_name.to_string(),
        }))
    }
}

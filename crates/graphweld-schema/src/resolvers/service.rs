//! Resolution of injected-service parameters.

use std::collections::HashMap;

use graphweld_core::{DocMetadata, ParamTag, ParameterBinding, ParameterDescriptor};
use indexmap::IndexMap;
use tracing::trace;

use super::ParameterResolver;
use crate::Result;

/// Binds parameters to services from the composition root's catalogue.
///
/// The catalogue maps a declared type name to the identifier the service is
/// registered under. Like context parameters, service parameters are an
/// implementation detail of the exposed callable and must not surface as
/// schema input arguments.
pub struct ServiceResolver {
    services: IndexMap<String, String>,
}

impl ServiceResolver {
    /// Creates a resolver from a declared-type-name to service-id mapping.
    pub fn new(services: IndexMap<String, String>) -> Self {
        Self { services }
    }
}

impl ParameterResolver for ServiceResolver {
    fn resolve(
        &self,
        parameter: &ParameterDescriptor,
        _doc: &DocMetadata,
        _param_tags: &HashMap<String, ParamTag>,
    ) -> Result<Option<ParameterBinding>> {
        let Some(type_name) = parameter.type_name.as_deref() else {
            return Ok(None);
        };
        let Some(service_id) = self.services.get(type_name) else {
            return Ok(None);
        };

        trace!(parameter = %parameter.name, type_name, service_id, "Binding service parameter");
        Ok(Some(ParameterBinding::Service {
            service_id: service_id.clone(),
        }))
    }
}

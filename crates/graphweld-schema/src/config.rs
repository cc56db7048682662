//! Mapper configuration.
//!
//! The only real tunable of the mapping layer is the set and order of
//! parameter resolution strategies. Configuration can be specified in TOML
//! under a `[mapper]` section and turned into a ready-to-use chain with
//! [`MapperConfig::resolver_chain`].
//!
//! # Example Configuration
//!
//! ```toml
//! [mapper]
//! context_types = ["RequestContext"]
//! infer_from_doc_tags = true
//! strict = false
//!
//! [mapper.service_types]
//! Mailer = "app.mailer"
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::resolvers::{ArgumentResolver, ContextResolver, ParameterResolver, ResolverChain, ServiceResolver};
use crate::Result;

/// Configuration for parameter resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapperConfig {
    /// Declared type names bound to the execution context.
    /// Default: empty
    #[serde(default)]
    pub context_types: Vec<String>,

    /// Declared type name to service id mapping for injected services.
    /// Default: empty
    #[serde(default)]
    pub service_types: IndexMap<String, String>,

    /// Whether an undeclared parameter type may be inferred from its
    /// documentation tag.
    /// Default: true
    #[serde(default = "default_infer_from_doc_tags")]
    pub infer_from_doc_tags: bool,

    /// Whether a parameter no strategy can bind aborts the build.
    /// Default: false (the caller applies its own fallback)
    #[serde(default = "default_strict")]
    pub strict: bool,
}

fn default_infer_from_doc_tags() -> bool {
    true
}

fn default_strict() -> bool {
    false
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            context_types: Vec::new(),
            service_types: IndexMap::new(),
            infer_from_doc_tags: default_infer_from_doc_tags(),
            strict: default_strict(),
        }
    }
}

impl MapperConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error when a type name or service id is
    /// blank.
    pub fn validate(&self) -> Result<()> {
        for type_name in &self.context_types {
            if type_name.trim().is_empty() {
                return Err(SchemaError::configuration(
                    "mapper.context_types must not contain blank names",
                ));
            }
        }
        for (type_name, service_id) in &self.service_types {
            if type_name.trim().is_empty() {
                return Err(SchemaError::configuration(
                    "mapper.service_types must not contain blank type names",
                ));
            }
            if service_id.trim().is_empty() {
                return Err(SchemaError::configuration(format!(
                    "mapper.service_types[\"{type_name}\"] must not be blank"
                )));
            }
        }
        Ok(())
    }

    /// Assembles the resolver chain this configuration describes.
    ///
    /// Context parameters take priority over injected services, which take
    /// priority over the generic argument fallback.
    #[must_use]
    pub fn resolver_chain(&self) -> ResolverChain {
        let resolvers: Vec<Box<dyn ParameterResolver>> = vec![
            Box::new(ContextResolver::new(self.context_types.iter().cloned())),
            Box::new(ServiceResolver::new(self.service_types.clone())),
            Box::new(
                ArgumentResolver::new()
                    .infer_from_doc_tags(self.infer_from_doc_tags)
                    .strict(self.strict),
            ),
        ];
        ResolverChain::new(resolvers)
    }
}

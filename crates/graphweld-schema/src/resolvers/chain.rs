//! First-match dispatch over an ordered set of resolution strategies.

use std::collections::HashMap;

use graphweld_core::{DocMetadata, ParamTag, ParameterBinding, ParameterDescriptor};
use tracing::{debug, trace};

use super::ParameterResolver;
use crate::Result;

/// An ordered chain of parameter resolvers with first-match-wins dispatch.
///
/// The chain holds the configured strategies verbatim, in construction
/// order. Order is significant: when more than one strategy could bind a
/// parameter, the earliest one wins and the rest are never consulted.
///
/// The chain is a pure dispatch shim. It mutates nothing, raises no errors
/// of its own, and forwards a delegate's error unchanged.
pub struct ResolverChain {
    resolvers: Vec<Box<dyn ParameterResolver>>,
}

impl ResolverChain {
    /// Creates a chain from an ordered sequence of resolvers.
    ///
    /// The sequence is collected once and kept for the lifetime of the
    /// chain; the same instance is reused across all parameters of a
    /// schema build.
    pub fn new(resolvers: impl IntoIterator<Item = Box<dyn ParameterResolver>>) -> Self {
        Self {
            resolvers: resolvers.into_iter().collect(),
        }
    }

    /// Returns the number of configured resolvers.
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    /// Returns true if the chain holds no resolvers.
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Resolves a parameter against the chain.
    ///
    /// Consults each resolver in construction order with the same inputs
    /// and returns the first binding produced. Returns `Ok(None)` when no
    /// resolver matches, signalling the caller to apply its own fallback.
    ///
    /// # Errors
    ///
    /// Forwards the first delegate error unchanged; remaining resolvers
    /// are not consulted after a failure.
    pub fn resolve(
        &self,
        parameter: &ParameterDescriptor,
        doc: &DocMetadata,
        param_tags: &HashMap<String, ParamTag>,
    ) -> Result<Option<ParameterBinding>> {
        for (index, resolver) in self.resolvers.iter().enumerate() {
            trace!(parameter = %parameter.name, index, "Consulting parameter resolver");
            if let Some(binding) = resolver.resolve(parameter, doc, param_tags)? {
                debug!(parameter = %parameter.name, index, "Parameter resolved");
                return Ok(Some(binding));
            }
        }

        debug!(parameter = %parameter.name, "No resolution strategy matched parameter");
        Ok(None)
    }
}

// A chain is itself a resolver, so chains can nest inside other chains.
impl ParameterResolver for ResolverChain {
    fn resolve(
        &self,
        parameter: &ParameterDescriptor,
        doc: &DocMetadata,
        param_tags: &HashMap<String, ParamTag>,
    ) -> Result<Option<ParameterBinding>> {
        ResolverChain::resolve(self, parameter, doc, param_tags)
    }
}

//! Parameter resolution strategies.
//!
//! Each strategy decides whether it can bind one callable parameter and, if
//! so, how. The stock strategies are:
//! - `context`: parameters whose declared type denotes the execution context
//! - `service`: parameters bound to injected services from the composition
//!   root's catalogue
//! - `argument`: the general fallback that exposes a parameter as a schema
//!   input argument
//!
//! [`ResolverChain`] composes strategies in a significant order and
//! dispatches to the first one that matches.

mod argument;
mod chain;
mod context;
mod service;

pub use argument::ArgumentResolver;
pub use chain::ResolverChain;
pub use context::ContextResolver;
pub use service::ServiceResolver;

use std::collections::HashMap;

use graphweld_core::{DocMetadata, ParamTag, ParameterBinding, ParameterDescriptor};

use crate::Result;

/// A single parameter resolution strategy.
///
/// Implementations are stateless per call; any configuration they hold is
/// immutable after construction, which is what makes a chain of them safe
/// to share across the parameters of a whole schema build.
pub trait ParameterResolver: Send + Sync {
    /// Attempts to bind the given parameter.
    ///
    /// Returns `Ok(None)` when this strategy does not apply to the
    /// parameter; that is a normal outcome, not an error. `Err` is reserved
    /// for genuine failures and aborts the surrounding resolution.
    fn resolve(
        &self,
        parameter: &ParameterDescriptor,
        doc: &DocMetadata,
        param_tags: &HashMap<String, ParamTag>,
    ) -> Result<Option<ParameterBinding>>;
}

//! # graphweld-schema
//!
//! Type registry and parameter resolution for graphweld schema
//! construction.
//!
//! This crate supplies the two pieces a reflection-driven schema builder
//! leans on while it walks an object graph:
//!
//! - [`TypeRegistry`] - a write-once-per-name cache of fully computed
//!   schema types. Registering a type as soon as it is finalized and
//!   resolving every reference by name afterwards is what lets cyclic and
//!   forward type references be built without special-casing cycles.
//! - [`ResolverChain`] - first-match dispatch over an ordered set of
//!   [`ParameterResolver`] strategies, deciding how each callable
//!   parameter is bound (execution context, injected service, or schema
//!   input argument).
//!
//! Both components are synchronous, in-memory, and free of shared mutable
//! state; they are designed to run inside a single schema-construction
//! pass driven by an external builder.
//!
//! ## Modules
//!
//! - [`config`] - Mapper configuration and chain assembly
//! - [`error`] - Error types for schema construction
//! - [`registry`] - The write-once type registry
//! - [`resolvers`] - Parameter resolution strategies and the chain

pub mod config;
pub mod error;
pub mod registry;
pub mod resolvers;

// Re-export main types
pub use config::MapperConfig;
pub use error::{ErrorCategory, SchemaError};
pub use registry::TypeRegistry;
pub use resolvers::{
    ArgumentResolver, ContextResolver, ParameterResolver, ResolverChain, ServiceResolver,
};

/// Result type for schema construction operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

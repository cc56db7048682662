//! # graphweld-core
//!
//! Core object model for the graphweld schema mapping layer.
//!
//! This crate defines the library-agnostic building blocks shared by the
//! rest of the workspace:
//!
//! - Named schema types (object and interface kinds) with their fields and
//!   arguments
//! - By-name type references, which is what lets cyclic and forward type
//!   references be expressed without linking object graphs together
//! - Reflection-supplied parameter metadata (descriptors, doc metadata,
//!   per-parameter documentation tags)
//! - Parameter bindings, the outcome of parameter resolution
//!
//! The model carries no execution behavior. Resolution strategies and the
//! type registry live in `graphweld-schema`.

pub mod error;
pub mod name;
pub mod params;
pub mod types;

pub use error::{CoreError, Result};
pub use name::is_valid_name;
pub use params::{DocMetadata, ParamTag, ParameterBinding, ParameterDescriptor};
pub use types::{
    ArgumentDefinition, FieldDefinition, InterfaceType, ObjectType, SchemaType, TypeKind, TypeRef,
};

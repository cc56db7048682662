//! Write-once cache for fully computed schema types.
//!
//! Schema graphs are routinely cyclic: type A references type B which
//! references type A. The registry breaks such cycles by name. The builder
//! registers each type exactly once, as soon as it is finalized, and every
//! other part of the build resolves named references through [`get`] /
//! [`get_object`] without re-triggering construction.
//!
//! [`get`]: TypeRegistry::get
//! [`get_object`]: TypeRegistry::get_object

use graphweld_core::{ObjectType, SchemaType, TypeKind};
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::SchemaError;
use crate::Result;

/// A cache mapping type names to fully computed schema types.
///
/// Per name, the state machine is `absent -> registered`, with no way back:
/// a successful registration fixes the mapping permanently and a failed one
/// leaves the registry untouched. Globally the registry moves from building
/// to sealed via [`seal`](TypeRegistry::seal); once sealed it is read-only.
///
/// Types registered here MUST be fully computed. In particular, all pending
/// extension merges must already have been applied; the registry never
/// stores a partially built type.
///
/// The write API takes `&mut self`, so a single writer at a time is a
/// compile-time guarantee. A multi-threaded builder has to wrap the
/// registry in its own lock, since `register` is a check-then-write
/// sequence.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    /// Registered types in registration order, keyed by name.
    types: IndexMap<String, SchemaType>,
    /// Whether the registry has been sealed.
    sealed: bool,
}

impl TypeRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fully computed type under its name.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateType` if a type with the same name is already
    /// registered, and `RegistrySealed` after [`seal`](TypeRegistry::seal)
    /// has been called. Both indicate a bug in the surrounding builder and
    /// should abort schema construction; the registry state is unchanged
    /// in either case.
    pub fn register(&mut self, schema_type: SchemaType) -> Result<()> {
        if self.sealed {
            return Err(SchemaError::registry_sealed(schema_type.name()));
        }
        if self.types.contains_key(schema_type.name()) {
            return Err(SchemaError::duplicate_type(schema_type.name()));
        }

        trace!(
            type_name = %schema_type.name(),
            kind = %schema_type.kind(),
            "Registering schema type"
        );
        self.types
            .insert(schema_type.name().to_string(), schema_type);
        Ok(())
    }

    /// Checks whether a type is registered under the given name.
    pub fn has(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Looks up a registered type by name.
    ///
    /// # Errors
    ///
    /// Returns `TypeNotFound` if no type is registered under the name,
    /// which indicates a missing definition or a registration-order bug.
    pub fn get(&self, name: &str) -> Result<&SchemaType> {
        self.types
            .get(name)
            .ok_or_else(|| SchemaError::type_not_found(name))
    }

    /// Looks up a registered type by name, requiring the object kind.
    ///
    /// # Errors
    ///
    /// Returns `TypeNotFound` if the name is absent and `TypeKindMismatch`
    /// if the registered type is not object-kind.
    pub fn get_object(&self, name: &str) -> Result<&ObjectType> {
        let schema_type = self.get(name)?;
        schema_type.as_object().ok_or_else(|| {
            SchemaError::type_kind_mismatch(name, TypeKind::Object, schema_type.kind())
        })
    }

    /// Seals the registry, forbidding all further registration.
    ///
    /// Idempotent. Called by the builder once schema construction finishes,
    /// turning the end-of-build convention into an enforced invariant.
    pub fn seal(&mut self) {
        if !self.sealed {
            debug!(count = self.types.len(), "Sealing type registry");
            self.sealed = true;
        }
    }

    /// Returns true once the registry has been sealed.
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Returns the number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no type has been registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates registered types in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaType)> {
        self.types.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    /// Iterates registered type names in registration order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphweld_core::{FieldDefinition, InterfaceType, TypeRef};

    fn contact() -> SchemaType {
        ObjectType::new("Contact")
            .field(FieldDefinition::new(
                "name",
                TypeRef::named_nn(TypeRef::STRING),
            ))
            .into()
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = TypeRegistry::new();
        assert!(registry.is_empty());

        registry.register(contact()).unwrap();
        assert!(registry.has("Contact"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Contact").unwrap().name(), "Contact");
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = TypeRegistry::new();
        registry.register(contact()).unwrap();

        let err = registry.register(contact()).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateType { name } if name == "Contact"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_missing_fails() {
        let registry = TypeRegistry::new();
        let err = registry.get("Contact").unwrap_err();
        assert!(matches!(err, SchemaError::TypeNotFound { name } if name == "Contact"));
    }

    #[test]
    fn test_get_object_kind_check() {
        let mut registry = TypeRegistry::new();
        registry.register(contact()).unwrap();
        registry
            .register(InterfaceType::new("Person").into())
            .unwrap();

        assert_eq!(registry.get_object("Contact").unwrap().name, "Contact");

        let err = registry.get_object("Person").unwrap_err();
        assert!(matches!(
            err,
            SchemaError::TypeKindMismatch {
                expected: TypeKind::Object,
                actual: TypeKind::Interface,
                ..
            }
        ));
    }

    #[test]
    fn test_seal_forbids_registration() {
        let mut registry = TypeRegistry::new();
        registry.register(contact()).unwrap();

        registry.seal();
        assert!(registry.is_sealed());

        let err = registry
            .register(InterfaceType::new("Person").into())
            .unwrap_err();
        assert!(matches!(err, SchemaError::RegistrySealed { name } if name == "Person"));

        // Reads still work after sealing.
        assert!(registry.has("Contact"));
        assert_eq!(registry.get("Contact").unwrap().name(), "Contact");

        // Sealing twice is a no-op.
        registry.seal();
        assert!(registry.is_sealed());
    }

    #[test]
    fn test_iteration_preserves_registration_order() {
        let mut registry = TypeRegistry::new();
        registry.register(ObjectType::new("Query").into()).unwrap();
        registry.register(contact()).unwrap();
        registry
            .register(InterfaceType::new("Person").into())
            .unwrap();

        let names: Vec<&str> = registry.type_names().collect();
        assert_eq!(names, vec!["Query", "Contact", "Person"]);

        let kinds: Vec<TypeKind> = registry.iter().map(|(_, ty)| ty.kind()).collect();
        assert_eq!(
            kinds,
            vec![TypeKind::Object, TypeKind::Object, TypeKind::Interface]
        );
    }
}

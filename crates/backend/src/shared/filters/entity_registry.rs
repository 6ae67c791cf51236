//! Filter spec registry
//!
//! Maps every entity kind onto its static filter declaration and the table
//! the WHERE preview is written against.

use std::collections::BTreeMap;

use contracts::domain::spec_for;
use contracts::shared::filters::api::FilterSpecInfo;
use contracts::shared::filters::{EntityKind, FilterError, FilterSpec};

/// Entry for a registered spec
struct RegisteredSpec {
    spec: &'static FilterSpec,
    table_name: &'static str,
}

/// Registry of the filter specs of all entity kinds
pub struct FilterRegistry {
    specs: BTreeMap<EntityKind, RegisteredSpec>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            specs: BTreeMap::new(),
        };
        for kind in EntityKind::all() {
            registry.register(spec_for(*kind), table_name_for(*kind));
        }
        registry
    }

    fn register(&mut self, spec: &'static FilterSpec, table_name: &'static str) {
        self.specs
            .insert(spec.entity, RegisteredSpec { spec, table_name });
    }

    /// Entity kinds with field counts, in kind order
    pub fn list_all(&self) -> Vec<FilterSpecInfo> {
        self.specs
            .values()
            .map(|entry| FilterSpecInfo {
                entity: entry.spec.entity,
                field_count: entry.spec.fields.len(),
                advanced_count: entry.spec.fields.iter().filter(|f| f.is_advanced).count(),
            })
            .collect()
    }

    /// Resolve an entity name from a URL ("client" or "clients")
    pub fn resolve(&self, entity: &str) -> Result<EntityKind, FilterError> {
        let kind: EntityKind = entity.parse()?;
        if self.specs.contains_key(&kind) {
            Ok(kind)
        } else {
            Err(FilterError::UnknownEntityKind(entity.to_string()))
        }
    }

    pub fn get_spec(&self, entity: &str) -> Result<&'static FilterSpec, FilterError> {
        let kind = self.resolve(entity)?;
        self.spec(kind)
    }

    pub fn spec(&self, kind: EntityKind) -> Result<&'static FilterSpec, FilterError> {
        self.specs
            .get(&kind)
            .map(|entry| entry.spec)
            .ok_or_else(|| FilterError::UnknownEntityKind(kind.to_string()))
    }

    pub fn get_table_name(&self, kind: EntityKind) -> Option<&'static str> {
        self.specs.get(&kind).map(|entry| entry.table_name)
    }

    /// Check every registered spec, stopping at the first broken one
    pub fn validate_all(&self) -> Result<(), FilterError> {
        for entry in self.specs.values() {
            entry.spec.validate()?;
        }
        Ok(())
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn table_name_for(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Client => "a001_client",
        EntityKind::Lead => "a002_lead",
        EntityKind::Package => "a003_package",
        EntityKind::Contact => "a004_contact",
        EntityKind::User => "a005_user",
        EntityKind::Task => "a006_task",
        EntityKind::Deal => "a007_deal",
        EntityKind::Subscription => "a008_subscription",
    }
}

/// Global filter registry instance
static REGISTRY: std::sync::OnceLock<FilterRegistry> = std::sync::OnceLock::new();

/// Get global filter registry
pub fn get_registry() -> &'static FilterRegistry {
    REGISTRY.get_or_init(FilterRegistry::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_kind() {
        let registry = FilterRegistry::new();
        let listed = registry.list_all();
        assert_eq!(listed.len(), EntityKind::all().len());
        assert!(registry.validate_all().is_ok());
    }

    #[test]
    fn test_resolve_plural_and_unknown() {
        let registry = FilterRegistry::new();
        assert_eq!(registry.resolve("clients"), Ok(EntityKind::Client));
        assert_eq!(
            registry.get_spec("deals").map(|s| s.entity),
            Ok(EntityKind::Deal)
        );
        assert!(matches!(
            registry.get_spec("invoices"),
            Err(FilterError::UnknownEntityKind(_))
        ));
    }

    #[test]
    fn test_table_names() {
        let registry = get_registry();
        assert_eq!(registry.get_table_name(EntityKind::Task), Some("a006_task"));
    }
}

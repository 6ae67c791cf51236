//! In-memory store of saved filter snapshots

use std::collections::HashMap;
use std::sync::RwLock;

use contracts::shared::filters::api::SaveFilterRequest;
use contracts::shared::filters::{EntityKind, FilterError, FilterSpec, FilterState, SavedFilter};
use once_cell::sync::Lazy;

/// Snapshots keyed by id
#[derive(Default)]
pub struct SavedFilterStore {
    items: RwLock<HashMap<String, SavedFilter>>,
}

impl SavedFilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots of one entity, oldest first
    pub fn list(&self, entity: EntityKind) -> Vec<SavedFilter> {
        let items = self.items.read().unwrap_or_else(|e| e.into_inner());
        let mut result: Vec<SavedFilter> = items
            .values()
            .filter(|f| f.entity == entity)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.name.cmp(&b.name)));
        result
    }

    /// Validate the request against `spec` and store it under a new id
    pub fn save(&self, spec: &FilterSpec, request: SaveFilterRequest) -> Result<SavedFilter, FilterError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(FilterError::EmptySavedFilterName);
        }
        request.values.validate(spec)?;

        let state = FilterState {
            entity: spec.entity,
            values: request.values,
            rules: request.rules,
        };
        let saved = SavedFilter::snapshot(name, &state, spec);

        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        items.insert(saved.id.clone(), saved.clone());
        tracing::info!(entity = %spec.entity, id = %saved.id, name = %saved.name, "filter saved");
        Ok(saved)
    }

    pub fn get(&self, entity: EntityKind, id: &str) -> Result<SavedFilter, FilterError> {
        let items = self.items.read().unwrap_or_else(|e| e.into_inner());
        items
            .get(id)
            .filter(|f| f.entity == entity)
            .cloned()
            .ok_or_else(|| FilterError::SavedFilterNotFound(id.to_string()))
    }

    pub fn delete(&self, entity: EntityKind, id: &str) -> Result<(), FilterError> {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        match items.get(id) {
            Some(f) if f.entity == entity => {
                items.remove(id);
                tracing::info!(%entity, %id, "saved filter deleted");
                Ok(())
            }
            _ => Err(FilterError::SavedFilterNotFound(id.to_string())),
        }
    }
}

static STORE: Lazy<SavedFilterStore> = Lazy::new(SavedFilterStore::new);

/// Get global saved filter store
pub fn get_store() -> &'static SavedFilterStore {
    &STORE
}

//! Filter state of a list page
//!
//! The current filter parameters are one immutable value; every change goes
//! through [`FilterState::reduce`].

use serde::{Deserialize, Serialize};

use super::counter::count_active;
use super::field::{FilterKind, FilterSpec};
use super::record::{EntityKind, FilterRecord};
use super::rules::{AdvancedRule, RuleSet};
use super::values::{DateRange, FilterValue, FilterValues};

/// Current filters and rules of one entity list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub entity: EntityKind,
    pub values: FilterValues,
    #[serde(default)]
    pub rules: RuleSet,
}

/// State transitions triggered by the filter panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterAction {
    /// Set a search or select value
    SetText { key: String, value: String },
    /// Set a date range value
    SetRange { key: String, range: DateRange },
    /// Put one field back to its default
    ResetField { key: String },
    /// Defaults everywhere, rules cleared
    ResetAll,
    AddRule { rule: AdvancedRule },
    UpdateRule { index: usize, rule: AdvancedRule },
    RemoveRule { index: usize },
    ClearRules,
    /// Replace values and rules with a saved snapshot
    ApplySaved { filter: SavedFilter },
}

impl FilterState {
    /// Initial state: `spec.default_filters()`, no rules
    pub fn new(spec: &FilterSpec) -> Self {
        Self {
            entity: spec.entity,
            values: spec.default_filters(),
            rules: RuleSet::default(),
        }
    }

    /// Apply one action, returning the next state.
    ///
    /// Keys `spec` does not declare and values of the wrong shape leave the
    /// state unchanged, as do snapshots saved for another entity.
    pub fn reduce(self, spec: &FilterSpec, action: FilterAction) -> Self {
        let mut next = self;
        match action {
            FilterAction::SetText { key, value } => {
                if let Some(field) = spec.field(&key) {
                    if !matches!(field.kind, FilterKind::DateRange { .. }) {
                        next.values.set(key, FilterValue::Text(value));
                    }
                }
            }
            FilterAction::SetRange { key, range } => {
                if let Some(field) = spec.field(&key) {
                    if matches!(field.kind, FilterKind::DateRange { .. }) {
                        next.values.set(key, FilterValue::Range(range));
                    }
                }
            }
            FilterAction::ResetField { key } => {
                if let Some(field) = spec.field(&key) {
                    next.values.set(key, field.default_filter_value());
                }
            }
            FilterAction::ResetAll => return Self::new(spec),
            FilterAction::AddRule { rule } => next.rules.0.push(rule),
            FilterAction::UpdateRule { index, rule } => {
                if let Some(slot) = next.rules.0.get_mut(index) {
                    *slot = rule;
                }
            }
            FilterAction::RemoveRule { index } => {
                if index < next.rules.0.len() {
                    next.rules.0.remove(index);
                }
            }
            FilterAction::ClearRules => next.rules = RuleSet::default(),
            FilterAction::ApplySaved { filter } => {
                if filter.entity == spec.entity {
                    let mut values = spec.default_filters();
                    for (key, value) in filter.values.iter() {
                        if spec.field(key).is_some() {
                            values.set(key.clone(), value.clone());
                        }
                    }
                    next.values = values;
                    next.rules = filter.rules;
                }
            }
        }
        next
    }

    /// Badge count: active fields plus complete rules
    pub fn active_count(&self, spec: &FilterSpec) -> usize {
        count_active(&self.values, spec) + self.rules.active_count()
    }

    /// Field filters, then rules
    pub fn apply<R: FilterRecord + Clone>(&self, records: &[R], spec: &FilterSpec) -> Vec<R> {
        let filtered = super::engine::filter(records, &self.values, spec);
        self.rules.apply(&filtered)
    }
}

/// Named snapshot of a filter state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedFilter {
    /// Unique identifier (UUID)
    pub id: String,
    pub entity: EntityKind,
    pub name: String,
    pub values: FilterValues,
    #[serde(default)]
    pub rules: RuleSet,
    /// Creation timestamp
    pub created_at: String,
}

impl SavedFilter {
    /// Snapshot the state under a new id, keeping only active values
    pub fn snapshot(name: impl Into<String>, state: &FilterState, spec: &FilterSpec) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            entity: state.entity,
            name: name.into(),
            values: state.values.without_inactive(spec),
            rules: state.rules.clone(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filters::field::{opt, FilterField, FilterOption};
    use crate::shared::filters::rules::RuleOperator;

    static STATUS: &[FilterOption] = &[opt("new", "New"), opt("qualified", "Qualified")];
    static FIELDS: &[FilterField] = &[
        FilterField::search("search", "Search", &["name"]),
        FilterField::select("status", "Status", STATUS),
        FilterField::date_range("created_at", "Created", "created_at"),
    ];
    static SPEC: FilterSpec = FilterSpec {
        entity: EntityKind::Lead,
        fields: FIELDS,
    };

    fn set(key: &str, value: &str) -> FilterAction {
        FilterAction::SetText {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_set_and_reset() {
        let state = FilterState::new(&SPEC)
            .reduce(&SPEC, set("status", "qualified"))
            .reduce(&SPEC, set("search", "ann"));
        assert_eq!(state.active_count(&SPEC), 2);

        let state = state.reduce(
            &SPEC,
            FilterAction::ResetField {
                key: "status".to_string(),
            },
        );
        assert_eq!(state.values.get("status"), Some(&FilterValue::text("all")));
        assert_eq!(state.active_count(&SPEC), 1);

        let state = state.reduce(&SPEC, FilterAction::ResetAll);
        assert_eq!(state, FilterState::new(&SPEC));
    }

    #[test]
    fn test_unknown_key_and_wrong_shape_ignored() {
        let initial = FilterState::new(&SPEC);
        let state = initial
            .clone()
            .reduce(&SPEC, set("owner", "me"))
            .reduce(&SPEC, set("created_at", "2024-01-01"));
        assert_eq!(state, initial);
    }

    #[test]
    fn test_rule_actions() {
        let rule = AdvancedRule::new("name", RuleOperator::Contains, "a");
        let state = FilterState::new(&SPEC)
            .reduce(&SPEC, FilterAction::AddRule { rule: rule.clone() })
            .reduce(&SPEC, FilterAction::AddRule { rule: rule.clone().or() })
            .reduce(&SPEC, FilterAction::RemoveRule { index: 0 })
            .reduce(&SPEC, FilterAction::RemoveRule { index: 7 });
        assert_eq!(state.rules.0, vec![rule.or()]);
        assert_eq!(state.active_count(&SPEC), 1);

        let state = state.reduce(&SPEC, FilterAction::ClearRules);
        assert!(state.rules.0.is_empty());
    }

    #[test]
    fn test_saved_round_trip() {
        let state = FilterState::new(&SPEC)
            .reduce(&SPEC, set("status", "new"))
            .reduce(
                &SPEC,
                FilterAction::SetRange {
                    key: "created_at".to_string(),
                    range: DateRange::parse(Some("2024-01-01"), None).unwrap(),
                },
            );
        let saved = SavedFilter::snapshot("New this year", &state, &SPEC);
        // only active values are stored
        assert_eq!(saved.values.len(), 2);

        let restored = FilterState::new(&SPEC).reduce(&SPEC, FilterAction::ApplySaved { filter: saved });
        assert_eq!(restored, state);
    }

    #[test]
    fn test_saved_for_other_entity_ignored() {
        let mut saved = SavedFilter::snapshot("x", &FilterState::new(&SPEC), &SPEC);
        saved.entity = EntityKind::Client;
        saved.values.set("status", FilterValue::text("new"));
        let state = FilterState::new(&SPEC).reduce(&SPEC, FilterAction::ApplySaved { filter: saved });
        assert_eq!(state, FilterState::new(&SPEC));
    }
}

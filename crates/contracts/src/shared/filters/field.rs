use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::bucket::{BucketOwned, BucketScale};
use super::error::FilterError;
use super::record::EntityKind;
use super::values::{FilterValue, FilterValues};

/// Select value meaning "no constraint"
pub const ALL: &str = "all";

/// Date attribute used by range fields unless they name another one
pub const DEFAULT_DATE_ATTRIBUTE: &str = "created_at";

/// Option of a Select field: (value, label)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Shorthand for option tables
pub const fn opt(value: &'static str, label: &'static str) -> FilterOption {
    FilterOption { value, label }
}

/// Select value computed from a numeric attribute instead of read directly
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedBucket {
    /// Numeric attribute path (e.g. "usage_percentage")
    pub measure: &'static str,
    pub scale: &'static BucketScale,
}

/// Kind of a filter field and the record attributes it reads
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterKind {
    /// Case-insensitive substring over any of the attributes
    Search { attributes: &'static [&'static str] },
    /// Equality on `record[attribute]`, or on a derived bucket label
    Select {
        attribute: &'static str,
        derived: Option<DerivedBucket>,
    },
    /// Record timestamp within `[from, to]`
    DateRange { attribute: &'static str },
}

impl FilterKind {
    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::Search { .. } => "search",
            FilterKind::Select { .. } => "select",
            FilterKind::DateRange { .. } => "date_range",
        }
    }
}

/// Definition of a single filter field (static version)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterField {
    /// Key in FilterValues
    pub key: &'static str,
    /// Human-readable label
    pub label: &'static str,
    pub kind: FilterKind,
    /// Select options in display order
    pub options: &'static [FilterOption],
    /// Overrides the kind's inactive sentinel
    pub default_value: Option<&'static str>,
    /// Shown in the collapsible "advanced" section
    pub is_advanced: bool,
}

impl FilterField {
    pub const fn search(key: &'static str, label: &'static str, attributes: &'static [&'static str]) -> Self {
        Self {
            key,
            label,
            kind: FilterKind::Search { attributes },
            options: &[],
            default_value: None,
            is_advanced: false,
        }
    }

    pub const fn select(key: &'static str, label: &'static str, options: &'static [FilterOption]) -> Self {
        Self {
            key,
            label,
            kind: FilterKind::Select {
                attribute: key,
                derived: None,
            },
            options,
            default_value: None,
            is_advanced: false,
        }
    }

    /// Select reading another attribute than its key (e.g. "company.industry")
    pub const fn select_on(
        key: &'static str,
        label: &'static str,
        attribute: &'static str,
        options: &'static [FilterOption],
    ) -> Self {
        Self {
            key,
            label,
            kind: FilterKind::Select {
                attribute,
                derived: None,
            },
            options,
            default_value: None,
            is_advanced: false,
        }
    }

    /// Select whose value is the bucket of a numeric measure
    pub const fn bucketed(
        key: &'static str,
        label: &'static str,
        measure: &'static str,
        scale: &'static BucketScale,
        options: &'static [FilterOption],
    ) -> Self {
        Self {
            key,
            label,
            kind: FilterKind::Select {
                attribute: measure,
                derived: Some(DerivedBucket { measure, scale }),
            },
            options,
            default_value: None,
            is_advanced: false,
        }
    }

    pub const fn date_range(key: &'static str, label: &'static str, attribute: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FilterKind::DateRange { attribute },
            options: &[],
            default_value: None,
            is_advanced: false,
        }
    }

    pub const fn advanced(mut self) -> Self {
        self.is_advanced = true;
        self
    }

    /// Textual default: `''` for search, `'all'` for select unless overridden
    pub fn default_text(&self) -> &'static str {
        match (self.default_value, &self.kind) {
            (Some(v), _) => v,
            (None, FilterKind::Select { .. }) => ALL,
            (None, _) => "",
        }
    }

    /// Default value used to initialise UI state
    pub fn default_filter_value(&self) -> FilterValue {
        match self.kind {
            FilterKind::DateRange { .. } => FilterValue::Range(Default::default()),
            _ => FilterValue::text(self.default_text()),
        }
    }

    /// Whether `value` constrains records.
    ///
    /// The engine skips exactly the values this returns `false` for, and the
    /// active-filter counter counts exactly the values it returns `true` for.
    pub fn is_active(&self, value: &FilterValue) -> bool {
        match (&self.kind, value) {
            (FilterKind::Search { .. }, FilterValue::Text(s)) => !s.trim().is_empty(),
            (FilterKind::Select { .. }, FilterValue::Text(s)) => {
                let s = s.trim();
                !s.is_empty() && s != ALL && s != self.default_text()
            }
            (FilterKind::DateRange { .. }, FilterValue::Range(r)) => !r.is_open(),
            // Shape mismatch constrains nothing
            _ => false,
        }
    }
}

/// Filter declaration of one entity type (static version)
#[derive(Debug, Clone, Copy)]
pub struct FilterSpec {
    pub entity: EntityKind,
    pub fields: &'static [FilterField],
}

impl FilterSpec {
    pub fn field(&self, key: &str) -> Option<&'static FilterField> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Values every field starts from; they constrain nothing
    pub fn default_filters(&self) -> FilterValues {
        self.fields
            .iter()
            .map(|f| (f.key.to_string(), f.default_filter_value()))
            .collect()
    }

    /// Catch table mistakes at startup: duplicate keys, selects without
    /// options, defaults outside the options, malformed bucket scales.
    pub fn validate(&self) -> Result<(), FilterError> {
        let invalid = |reason: String| FilterError::InvalidSpec {
            entity: self.entity.to_string(),
            reason,
        };

        let mut seen = HashSet::new();
        for field in self.fields {
            if !seen.insert(field.key) {
                return Err(invalid(format!("duplicate field key '{}'", field.key)));
            }

            match &field.kind {
                FilterKind::Search { attributes } => {
                    if attributes.is_empty() {
                        return Err(invalid(format!("search '{}' has no attributes", field.key)));
                    }
                }
                FilterKind::Select { attribute, derived } => {
                    if attribute.is_empty() {
                        return Err(invalid(format!("select '{}' has no attribute", field.key)));
                    }
                    if field.options.is_empty() {
                        return Err(invalid(format!("select '{}' has no options", field.key)));
                    }
                    let default = field.default_text();
                    if default != ALL && !field.options.iter().any(|o| o.value == default) {
                        return Err(invalid(format!(
                            "default '{}' of '{}' is not an option",
                            default, field.key
                        )));
                    }
                    if let Some(bucket) = derived {
                        bucket
                            .scale
                            .validate()
                            .map_err(|e| invalid(format!("'{}': {}", field.key, e)))?;
                        if let Some(o) = field
                            .options
                            .iter()
                            .find(|o| !bucket.scale.labels().any(|l| l == o.value))
                        {
                            return Err(invalid(format!(
                                "option '{}' of '{}' is not a bucket label",
                                o.value, field.key
                            )));
                        }
                    }
                }
                FilterKind::DateRange { attribute } => {
                    if attribute.is_empty() {
                        return Err(invalid(format!("range '{}' has no attribute", field.key)));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Owned version of FilterSpec for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSpecOwned {
    pub entity: EntityKind,
    pub fields: Vec<FilterFieldOwned>,
    pub default_filters: FilterValues,
}

impl From<&FilterSpec> for FilterSpecOwned {
    fn from(spec: &FilterSpec) -> Self {
        Self {
            entity: spec.entity,
            fields: spec.fields.iter().map(|f| f.into()).collect(),
            default_filters: spec.default_filters(),
        }
    }
}

/// Owned version of FilterField for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterFieldOwned {
    pub key: String,
    pub label: String,
    /// "search" | "select" | "date_range"
    pub kind: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<(String, String)>,
    pub default_value: FilterValue,
    pub is_advanced: bool,
    /// Attributes read by the field (search candidates, date attribute, bucket measure)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buckets: Option<Vec<BucketOwned>>,
}

impl From<&FilterField> for FilterFieldOwned {
    fn from(field: &FilterField) -> Self {
        let (attributes, buckets) = match &field.kind {
            FilterKind::Search { attributes } => {
                (attributes.iter().map(|a| a.to_string()).collect(), None)
            }
            FilterKind::Select {
                derived: Some(b), ..
            } => (
                vec![b.measure.to_string()],
                Some(b.scale.buckets.iter().map(BucketOwned::from).collect()),
            ),
            FilterKind::Select {
                attribute,
                derived: None,
            } => (vec![attribute.to_string()], None),
            FilterKind::DateRange { attribute } => (vec![attribute.to_string()], None),
        };

        Self {
            key: field.key.to_string(),
            label: field.label.to_string(),
            kind: field.kind.name().to_string(),
            options: field
                .options
                .iter()
                .map(|o| (o.value.to_string(), o.label.to_string()))
                .collect(),
            default_value: field.default_filter_value(),
            is_advanced: field.is_advanced,
            attributes,
            buckets,
        }
    }
}

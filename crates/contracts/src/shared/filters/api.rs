use serde::{Deserialize, Serialize};

use super::record::EntityKind;
use super::rules::RuleSet;
use super::values::FilterValues;

/// Entry of the filter spec listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSpecInfo {
    pub entity: EntityKind,
    pub field_count: usize,
    pub advanced_count: usize,
}

/// Body of POST /api/:entity/filter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterRequest {
    #[serde(default)]
    pub values: FilterValues,
    #[serde(default)]
    pub rules: RuleSet,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub page_size: Option<usize>,
}

/// Filtered, paginated entity list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilteredListResponse<T> {
    pub items: Vec<T>,
    /// Records before filtering
    pub total: usize,
    /// Records after filtering, before pagination
    pub filtered: usize,
    /// Active fields plus complete rules
    pub active_filters: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// Body of POST /api/:entity/saved-filters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFilterRequest {
    pub name: String,
    #[serde(default)]
    pub values: FilterValues,
    #[serde(default)]
    pub rules: RuleSet,
}

/// Parameterised WHERE fragment for the predicates a query builder can run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WherePreviewResponse {
    pub entity: EntityKind,
    /// SQL condition clause, empty when nothing is pushed down
    pub sql: String,
    pub params: Vec<String>,
    /// Active fields left to in-memory filtering (search, derived buckets)
    pub residual: Vec<String>,
}

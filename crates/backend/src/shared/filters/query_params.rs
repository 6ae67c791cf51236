//! `filters[...]` parameter bag
//!
//! List endpoints take filters as `filters[key]=value` and
//! `filters[key][from]=..&filters[key][to]=..`; the POST endpoint takes the
//! same bag as JSON. Entries that are `null`, `false` or `''` are dropped
//! before anything else looks at them; the rest is checked against the entity's `FilterSpec`.
//! Query strings have no types, so for select and range fields the literal
//! words `null` and `false` are dropped as well. Search text is kept as typed.

use std::collections::BTreeMap;

use contracts::shared::filters::api::{FilterRequest, SaveFilterRequest};
use contracts::shared::filters::{
    DateRange, FilterError, FilterKind, FilterSpec, FilterValue, FilterValues, RuleSet,
};
use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: usize = 25;
pub const MAX_PAGE_SIZE: usize = 200;

/// Value of one bag entry as sent by the client
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawParam {
    Text(String),
    Range {
        #[serde(default)]
        from: Option<String>,
        #[serde(default)]
        to: Option<String>,
    },
    Flag(bool),
    Null,
}

impl RawParam {
    /// `null`, `false`, `''` and a range without bounds carry no filter
    fn is_blank(&self) -> bool {
        match self {
            RawParam::Text(s) => s.trim().is_empty(),
            RawParam::Range { from, to } => {
                let blank = |v: &Option<String>| v.as_deref().map_or(true, |s| s.trim().is_empty());
                blank(from) && blank(to)
            }
            RawParam::Flag(flag) => !flag,
            RawParam::Null => true,
        }
    }

    /// Untyped spelling of `null` / `false`
    fn is_literal_sentinel(&self) -> bool {
        matches!(self, RawParam::Text(s) if matches!(s.trim(), "null" | "false"))
    }
}

/// Unvalidated filter entries keyed by field
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct FilterBag(pub BTreeMap<String, RawParam>);

impl FilterBag {
    /// Drop blank entries, then check the rest against `spec`.
    ///
    /// Unknown keys, undeclared select options, malformed dates and values of
    /// the wrong shape are errors.
    pub fn into_values(self, spec: &FilterSpec) -> Result<FilterValues, FilterError> {
        let mut values = FilterValues::new();

        for (key, raw) in self.0 {
            if raw.is_blank() {
                continue;
            }
            let field = spec.field(&key).ok_or_else(|| FilterError::UnknownField {
                entity: spec.entity.to_string(),
                field: key.clone(),
            })?;
            if !matches!(field.kind, FilterKind::Search { .. }) && raw.is_literal_sentinel() {
                continue;
            }

            let value = match (&field.kind, raw) {
                (FilterKind::DateRange { .. }, RawParam::Range { from, to }) => {
                    let range = DateRange::parse(from.as_deref(), to.as_deref())
                        .map_err(|bad| FilterError::InvalidDate {
                            field: key.clone(),
                            value: bad,
                        })?;
                    FilterValue::Range(range)
                }
                (FilterKind::DateRange { .. }, _) => {
                    return Err(FilterError::ValueShapeMismatch {
                        field: key,
                        expected: "date range",
                    })
                }
                (_, RawParam::Text(s)) => FilterValue::Text(s),
                (_, RawParam::Flag(flag)) => FilterValue::text(flag.to_string()),
                (_, RawParam::Range { .. } | RawParam::Null) => {
                    return Err(FilterError::ValueShapeMismatch {
                        field: key,
                        expected: "text",
                    })
                }
            };
            values.set(key, value);
        }

        values.validate(spec)?;
        Ok(values)
    }
}

/// Query string of GET /api/:entity/list and /api/filters/:entity/sql
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub filters: FilterBag,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub page_size: Option<usize>,
}

impl ListQuery {
    /// Parse a raw query string; brackets may arrive percent-encoded
    pub fn parse(query: Option<&str>) -> Result<Self, serde_qs::Error> {
        match query {
            Some(q) if !q.is_empty() => serde_qs::Config::new(5, false).deserialize_str(q),
            _ => Ok(Self::default()),
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.page_size)
    }
}

/// Body of POST /api/:entity/filter.
///
/// Same shape as [`FilterRequest`], but the values are a lenient bag.
#[derive(Debug, Default, Deserialize)]
pub struct FilterBody {
    #[serde(default)]
    pub values: FilterBag,
    #[serde(default)]
    pub rules: RuleSet,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub page_size: Option<usize>,
}

impl FilterBody {
    /// Validate against `spec`, producing the typed request
    pub fn into_request(self, spec: &FilterSpec) -> Result<FilterRequest, FilterError> {
        Ok(FilterRequest {
            values: self.values.into_values(spec)?,
            rules: self.rules,
            page: self.page,
            page_size: self.page_size,
        })
    }
}

/// Body of POST /api/:entity/saved-filters, values as a lenient bag
#[derive(Debug, Default, Deserialize)]
pub struct SaveFilterBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub values: FilterBag,
    #[serde(default)]
    pub rules: RuleSet,
}

impl SaveFilterBody {
    pub fn into_request(self, spec: &FilterSpec) -> Result<SaveFilterRequest, FilterError> {
        Ok(SaveFilterRequest {
            name: self.name,
            values: self.values.into_values(spec)?,
            rules: self.rules,
        })
    }
}

/// 1-based page window applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Pagination {
    pub fn new(page: Option<usize>, page_size: Option<usize>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_client::filters::CLIENT_FILTERS;
    use contracts::domain::a007_deal::filters::DEAL_FILTERS;

    #[test]
    fn test_query_string_bag() {
        let query = ListQuery::parse(Some(
            "filters[status]=active&filters[search]=ac&filters[created_at][from]=2024-01-01&page=2&page_size=10",
        ))
        .unwrap();
        assert_eq!(query.pagination(), Pagination { page: 2, page_size: 10 });

        let values = query.filters.into_values(&CLIENT_FILTERS).unwrap();
        assert_eq!(values.get("status"), Some(&FilterValue::text("active")));
        let range = values.get("created_at").and_then(|v| v.as_range()).unwrap();
        assert!(range.from.is_some());
        assert!(range.to.is_none());
    }

    #[test]
    fn test_encoded_brackets() {
        let query = ListQuery::parse(Some("filters%5Bstatus%5D=trial")).unwrap();
        let values = query.filters.into_values(&CLIENT_FILTERS).unwrap();
        assert_eq!(values.get("status"), Some(&FilterValue::text("trial")));
    }

    #[test]
    fn test_blank_entries_dropped() {
        let body: FilterBody = serde_json::from_value(serde_json::json!({
            "values": {
                "status": null,
                "plan": false,
                "search": "",
                "created_at": { "from": "", "to": null },
                "no_such_field": ""
            }
        }))
        .unwrap();
        let request = body.into_request(&CLIENT_FILTERS).unwrap();
        assert!(request.values.is_empty());
    }

    #[test]
    fn test_untyped_sentinels_dropped() {
        let query = ListQuery::parse(Some("filters[status]=null&filters[plan]=false")).unwrap();
        let values = query.filters.into_values(&CLIENT_FILTERS).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_search_keeps_literal_words() {
        let query = ListQuery::parse(Some("filters[search]=null&filters[status]=null")).unwrap();
        let values = query.filters.into_values(&CLIENT_FILTERS).unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values.get("search"), Some(&FilterValue::text("null")));

        let query = ListQuery::parse(Some("filters[search]=false")).unwrap();
        let values = query.filters.into_values(&CLIENT_FILTERS).unwrap();
        assert_eq!(values.get("search"), Some(&FilterValue::text("false")));
    }

    #[test]
    fn test_save_body_drops_blank_entries() {
        let body: SaveFilterBody = serde_json::from_value(serde_json::json!({
            "name": "Active only",
            "values": { "status": "active", "plan": null, "search": false }
        }))
        .unwrap();
        let request = body.into_request(&CLIENT_FILTERS).unwrap();
        assert_eq!(request.name, "Active only");
        assert_eq!(
            request.values,
            FilterValues::new().with("status", FilterValue::text("active"))
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        let query = ListQuery::parse(Some("filters[colour]=red")).unwrap();
        assert!(matches!(
            query.filters.into_values(&CLIENT_FILTERS),
            Err(FilterError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_invalid_option_and_date_rejected() {
        let query = ListQuery::parse(Some("filters[stage]=closed")).unwrap();
        assert!(matches!(
            query.filters.into_values(&DEAL_FILTERS),
            Err(FilterError::InvalidOption { .. })
        ));

        let query = ListQuery::parse(Some("filters[expected_close][to]=tomorrow")).unwrap();
        assert_eq!(
            query.filters.into_values(&DEAL_FILTERS),
            Err(FilterError::InvalidDate {
                field: "expected_close".to_string(),
                value: "tomorrow".to_string(),
            })
        );
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let query = ListQuery::parse(Some("filters[created_at]=2024-01-01")).unwrap();
        assert!(matches!(
            query.filters.into_values(&CLIENT_FILTERS),
            Err(FilterError::ValueShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_typed_request_is_accepted_as_body() {
        let request = FilterRequest {
            values: FilterValues::new().with("stage", FilterValue::text("won")),
            ..Default::default()
        };
        let body: FilterBody = serde_json::from_value(serde_json::to_value(&request).unwrap()).unwrap();
        let parsed = body.into_request(&DEAL_FILTERS).unwrap();
        assert_eq!(parsed.values, request.values);
    }

    #[test]
    fn test_pagination_bounds() {
        let p = Pagination::new(Some(0), Some(10_000));
        assert_eq!(p, Pagination { page: 1, page_size: MAX_PAGE_SIZE });
        let p = Pagination::new(Some(3), Some(10));
        assert_eq!(p.offset(), 20);
        assert_eq!(p.total_pages(21), 3);
        assert_eq!(p.total_pages(0), 0);
    }
}

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::dates::{format_timestamp, parse_lower_bound, parse_upper_bound, parse_timestamp};
use super::error::FilterError;
use super::field::{FilterKind, FilterSpec, ALL};

/// Current value of one filter field.
///
/// On the wire a Search/Select value is a plain string and a DateRange value
/// is an object `{ "from": "...", "to": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Text(String),
    Range(DateRange),
}

impl FilterValue {
    pub fn text(value: impl Into<String>) -> Self {
        FilterValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(s) => Some(s),
            FilterValue::Range(_) => None,
        }
    }

    pub fn as_range(&self) -> Option<&DateRange> {
        match self {
            FilterValue::Range(r) => Some(r),
            FilterValue::Text(_) => None,
        }
    }
}

/// Date range with already-parsed bounds; either side may be open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange", into = "RawDateRange")]
pub struct DateRange {
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
}

impl DateRange {
    /// Parse wire bounds. Empty strings mean an open side.
    /// A plain-date `to` covers the whole day.
    pub fn parse(from: Option<&str>, to: Option<&str>) -> Result<Self, String> {
        let from = match from.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Some(parse_lower_bound(raw).ok_or_else(|| raw.to_string())?),
            None => None,
        };
        let to = match to.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Some(parse_upper_bound(raw).ok_or_else(|| raw.to_string())?),
            None => None,
        };
        Ok(Self { from, to })
    }

    /// Neither bound set: the range constrains nothing
    pub fn is_open(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn contains(&self, ts: &NaiveDateTime) -> bool {
        self.from.map_or(true, |from| *ts >= from) && self.to.map_or(true, |to| *ts <= to)
    }

    /// Range test against a raw record date. Unparseable dates never match.
    pub fn contains_raw(&self, raw: &str) -> bool {
        parse_timestamp(raw).is_some_and(|ts| self.contains(&ts))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawDateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    to: Option<String>,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = String;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        DateRange::parse(raw.from.as_deref(), raw.to.as_deref())
            .map_err(|bad| format!("invalid date '{}'", bad))
    }
}

impl From<DateRange> for RawDateRange {
    fn from(range: DateRange) -> Self {
        Self {
            from: range.from.as_ref().map(format_timestamp),
            to: range.to.as_ref().map(format_timestamp),
        }
    }
}

/// Field key -> current value. Keys absent from the map are at their default.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterValues(BTreeMap<String, FilterValue>);

impl FilterValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: FilterValue) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.0.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: FilterValue) {
        self.0.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<FilterValue> {
        self.0.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FilterValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check every entry against `spec`: known key, matching shape,
    /// declared option for selects.
    pub fn validate(&self, spec: &FilterSpec) -> Result<(), FilterError> {
        for (key, value) in &self.0 {
            let field = spec.field(key).ok_or_else(|| FilterError::UnknownField {
                entity: spec.entity.to_string(),
                field: key.clone(),
            })?;

            match (&field.kind, value) {
                (FilterKind::Search { .. }, FilterValue::Text(_)) => {}
                (FilterKind::Select { .. }, FilterValue::Text(v)) => {
                    let v = v.trim();
                    let declared = v.is_empty()
                        || v == ALL
                        || v == field.default_text()
                        || field.options.iter().any(|o| o.value == v);
                    if !declared {
                        return Err(FilterError::InvalidOption {
                            field: key.clone(),
                            value: v.to_string(),
                        });
                    }
                }
                (FilterKind::DateRange { .. }, FilterValue::Range(_)) => {}
                // A cleared date picker may send an empty string
                (FilterKind::DateRange { .. }, FilterValue::Text(v)) if v.trim().is_empty() => {}
                (FilterKind::DateRange { .. }, FilterValue::Text(_)) => {
                    return Err(FilterError::ValueShapeMismatch {
                        field: key.clone(),
                        expected: "date range",
                    })
                }
                (_, FilterValue::Range(_)) => {
                    return Err(FilterError::ValueShapeMismatch {
                        field: key.clone(),
                        expected: "text",
                    })
                }
            }
        }
        Ok(())
    }

    /// Drop entries that impose no constraint
    pub fn without_inactive(&self, spec: &FilterSpec) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(key, value)| spec.field(key).is_some_and(|f| f.is_active(value)))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

impl FromIterator<(String, FilterValue)> for FilterValues {
    fn from_iter<I: IntoIterator<Item = (String, FilterValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

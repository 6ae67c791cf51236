//! Predicate engine
//!
//! Turns a [`FilterSpec`] plus [`FilterValues`] into a record predicate:
//! every active field must pass (AND); inactive fields are skipped.

use super::field::{FilterField, FilterKind, FilterSpec};
use super::record::FilterRecord;
use super::values::{DateRange, FilterValue, FilterValues};

/// Compiled predicate of one active field
enum FieldPredicate<'a> {
    Search {
        attributes: &'static [&'static str],
        needle: String,
    },
    Select {
        field: &'static FilterField,
        expected: &'a str,
    },
    DateRange {
        attribute: &'static str,
        range: &'a DateRange,
    },
}

impl FieldPredicate<'_> {
    fn test<R: FilterRecord>(&self, record: &R) -> bool {
        match self {
            FieldPredicate::Search { attributes, needle } => attributes.iter().any(|path| {
                record
                    .attribute(path)
                    .is_some_and(|v| v.to_lowercase().contains(needle.as_str()))
            }),
            FieldPredicate::Select { field, expected } => match &field.kind {
                FilterKind::Select {
                    derived: Some(bucket),
                    ..
                } => record
                    .numeric_attribute(bucket.measure)
                    .and_then(|m| bucket.scale.classify(m))
                    .is_some_and(|label| label == *expected),
                FilterKind::Select { attribute, .. } => record
                    .attribute(attribute)
                    .is_some_and(|v| &*v == *expected),
                _ => false,
            },
            FieldPredicate::DateRange { attribute, range } => record
                .attribute(attribute)
                .is_some_and(|raw| range.contains_raw(&raw)),
        }
    }
}

/// Predicate built from a spec and the current values
pub struct PredicateEngine<'a> {
    predicates: Vec<FieldPredicate<'a>>,
}

impl<'a> PredicateEngine<'a> {
    /// Compile the active fields of `values`; inactive and absent ones are dropped
    pub fn new(spec: &FilterSpec, values: &'a FilterValues) -> Self {
        let predicates = spec
            .fields
            .iter()
            .filter_map(|field| {
                let value = values.get(field.key)?;
                if !field.is_active(value) {
                    return None;
                }
                compile(field, value)
            })
            .collect();

        Self { predicates }
    }

    /// Number of predicates that will actually run
    pub fn active_fields(&self) -> usize {
        self.predicates.len()
    }

    pub fn matches<R: FilterRecord>(&self, record: &R) -> bool {
        self.predicates.iter().all(|p| p.test(record))
    }

    /// New vector with the records that pass every active field
    pub fn apply<R: FilterRecord + Clone>(&self, records: &[R]) -> Vec<R> {
        records.iter().filter(|r| self.matches(*r)).cloned().collect()
    }
}

fn compile<'a>(field: &'static FilterField, value: &'a FilterValue) -> Option<FieldPredicate<'a>> {
    match (&field.kind, value) {
        (FilterKind::Search { attributes }, FilterValue::Text(s)) => Some(FieldPredicate::Search {
            attributes: *attributes,
            needle: s.trim().to_lowercase(),
        }),
        (FilterKind::Select { .. }, FilterValue::Text(s)) => Some(FieldPredicate::Select {
            field,
            expected: s.trim(),
        }),
        (FilterKind::DateRange { attribute }, FilterValue::Range(range)) => {
            Some(FieldPredicate::DateRange {
                attribute: *attribute,
                range,
            })
        }
        _ => None,
    }
}

/// Filter `records` by `values` under `spec`.
///
/// Pure and idempotent; returns a new vector in the original order.
pub fn filter<R: FilterRecord + Clone>(records: &[R], values: &FilterValues, spec: &FilterSpec) -> Vec<R> {
    let engine = PredicateEngine::new(spec, values);
    if engine.active_fields() == 0 {
        return records.to_vec();
    }

    let result = engine.apply(records);
    tracing::debug!(
        entity = %spec.entity,
        active = engine.active_fields(),
        total = records.len(),
        matched = result.len(),
        "filter applied"
    );
    result
}

use super::field::FilterSpec;
use super::values::FilterValues;

/// Number of fields whose current value differs from its inactive sentinel.
///
/// Uses the same rule as the predicate engine's skip logic, so a count of 0
/// means filtering returns every record unchanged.
pub fn count_active(values: &FilterValues, spec: &FilterSpec) -> usize {
    spec.fields
        .iter()
        .filter(|field| values.get(field.key).is_some_and(|v| field.is_active(v)))
        .count()
}

/// Keys of the active fields, in spec order (used for filter chips)
pub fn active_keys(values: &FilterValues, spec: &FilterSpec) -> Vec<&'static str> {
    spec.fields
        .iter()
        .filter(|field| values.get(field.key).is_some_and(|v| field.is_active(v)))
        .map(|field| field.key)
        .collect()
}

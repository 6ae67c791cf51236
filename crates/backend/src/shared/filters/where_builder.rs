use std::fmt;

use chrono::NaiveDateTime;
use contracts::shared::filters::{FilterKind, FilterSpec, FilterValue, FilterValues};

/// Result of WHERE building
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    /// Conditions joined with AND, empty when nothing is pushed down
    pub sql: String,
    /// Bound parameters, in placeholder order
    pub params: Vec<QueryParam>,
    /// Active fields that must still be filtered in memory
    pub residual: Vec<&'static str>,
}

/// Query parameter
#[derive(Debug, Clone, PartialEq)]
pub enum QueryParam {
    Text(String),
    Timestamp(NaiveDateTime),
}

impl fmt::Display for QueryParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryParam::Text(s) => f.write_str(s),
            QueryParam::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S%.f")),
        }
    }
}

/// Parameterised WHERE builder for the active filters of one entity.
///
/// Raw select equality and date bounds on flat columns become conditions.
/// Search, derived buckets and nested attributes stay residual.
pub struct WhereBuilder<'a> {
    spec: &'a FilterSpec,
    values: &'a FilterValues,
    table: &'a str,
}

impl<'a> WhereBuilder<'a> {
    pub fn new(spec: &'a FilterSpec, values: &'a FilterValues, table: &'a str) -> Self {
        Self {
            spec,
            values,
            table,
        }
    }

    pub fn build(&self) -> WhereClause {
        let mut conditions = Vec::new();
        let mut params = Vec::new();
        let mut residual = Vec::new();

        for field in self.spec.fields {
            let Some(value) = self.values.get(field.key) else {
                continue;
            };
            if !field.is_active(value) {
                continue;
            }

            match (&field.kind, value) {
                (
                    FilterKind::Select {
                        attribute,
                        derived: None,
                    },
                    FilterValue::Text(s),
                ) if is_column(attribute) => {
                    conditions.push(format!("{}.{} = ?", self.table, attribute));
                    params.push(QueryParam::Text(s.trim().to_string()));
                }
                (FilterKind::DateRange { attribute }, FilterValue::Range(range))
                    if is_column(attribute) =>
                {
                    let column = format!("{}.{}", self.table, attribute);
                    if let Some(from) = range.from {
                        conditions.push(format!("{} >= ?", column));
                        params.push(QueryParam::Timestamp(from));
                    }
                    if let Some(to) = range.to {
                        conditions.push(format!("{} <= ?", column));
                        params.push(QueryParam::Timestamp(to));
                    }
                }
                _ => residual.push(field.key),
            }
        }

        WhereClause {
            sql: conditions.join(" AND "),
            params,
            residual,
        }
    }
}

/// Plain column names only; dotted paths live in related tables
fn is_column(attribute: &str) -> bool {
    !attribute.is_empty() && attribute.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

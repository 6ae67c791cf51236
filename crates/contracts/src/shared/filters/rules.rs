//! Ad-hoc filter rules chained with AND/OR
//!
//! Rules are evaluated left to right; each rule's connector joins it to the
//! result accumulated so far, so the first rule's connector is never used.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::dates::parse_timestamp;
use super::record::FilterRecord;

/// Rule operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleOperator {
    Equals,
    NotEquals,
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
    GreaterThan,
    LessThan,
    IsEmpty,
    IsNotEmpty,
}

impl RuleOperator {
    /// Get display label for UI
    pub fn label(&self) -> &'static str {
        match self {
            RuleOperator::Equals => "equals",
            RuleOperator::NotEquals => "does not equal",
            RuleOperator::Contains => "contains",
            RuleOperator::NotContains => "does not contain",
            RuleOperator::StartsWith => "starts with",
            RuleOperator::EndsWith => "ends with",
            RuleOperator::GreaterThan => "greater than",
            RuleOperator::LessThan => "less than",
            RuleOperator::IsEmpty => "is empty",
            RuleOperator::IsNotEmpty => "is not empty",
        }
    }

    /// Operators that ignore the rule value
    pub fn is_unary(&self) -> bool {
        matches!(self, RuleOperator::IsEmpty | RuleOperator::IsNotEmpty)
    }

    pub fn all() -> &'static [RuleOperator] {
        &[
            RuleOperator::Equals,
            RuleOperator::NotEquals,
            RuleOperator::Contains,
            RuleOperator::NotContains,
            RuleOperator::StartsWith,
            RuleOperator::EndsWith,
            RuleOperator::GreaterThan,
            RuleOperator::LessThan,
            RuleOperator::IsEmpty,
            RuleOperator::IsNotEmpty,
        ]
    }
}

/// How a rule joins the result of the rules before it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connector {
    #[default]
    And,
    Or,
}

/// A single user-built rule: attribute, operator, value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedRule {
    /// Record attribute path
    pub field: String,
    pub operator: RuleOperator,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub connector: Connector,
}

impl AdvancedRule {
    pub fn new(field: impl Into<String>, operator: RuleOperator, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
            connector: Connector::And,
        }
    }

    pub fn or(mut self) -> Self {
        self.connector = Connector::Or;
        self
    }

    /// Rules still being edited in the builder are skipped
    pub fn is_complete(&self) -> bool {
        !self.field.trim().is_empty() && (self.operator.is_unary() || !self.value.trim().is_empty())
    }

    pub fn matches<R: FilterRecord>(&self, record: &R) -> bool {
        let actual = record.attribute(self.field.trim());
        let actual = actual.as_deref().unwrap_or("");
        let actual_lower = actual.to_lowercase();
        let expected = self.value.trim().to_lowercase();

        match self.operator {
            RuleOperator::Equals => actual_lower == expected,
            RuleOperator::NotEquals => actual_lower != expected,
            RuleOperator::Contains => actual_lower.contains(&expected),
            RuleOperator::NotContains => !actual_lower.contains(&expected),
            RuleOperator::StartsWith => actual_lower.starts_with(&expected),
            RuleOperator::EndsWith => actual_lower.ends_with(&expected),
            RuleOperator::GreaterThan => compare(actual, self.value.trim()) == Some(Ordering::Greater),
            RuleOperator::LessThan => compare(actual, self.value.trim()) == Some(Ordering::Less),
            RuleOperator::IsEmpty => actual.trim().is_empty(),
            RuleOperator::IsNotEmpty => !actual.trim().is_empty(),
        }
    }
}

/// Numbers compare numerically, dates chronologically, everything else as
/// lower-cased text. A missing attribute never orders against a value.
fn compare(actual: &str, expected: &str) -> Option<Ordering> {
    let actual = actual.trim();
    if actual.is_empty() {
        return None;
    }
    if let (Ok(a), Ok(b)) = (actual.parse::<f64>(), expected.parse::<f64>()) {
        return a.partial_cmp(&b);
    }
    if let (Some(a), Some(b)) = (parse_timestamp(actual), parse_timestamp(expected)) {
        return Some(a.cmp(&b));
    }
    Some(actual.to_lowercase().cmp(&expected.to_lowercase()))
}

/// Ordered rule list built in the "advanced filters" panel
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet(pub Vec<AdvancedRule>);

impl RuleSet {
    pub fn new(rules: Vec<AdvancedRule>) -> Self {
        Self(rules)
    }

    /// Number of complete rules
    pub fn active_count(&self) -> usize {
        self.0.iter().filter(|r| r.is_complete()).count()
    }

    /// Left-to-right evaluation; no complete rules means everything passes
    pub fn matches<R: FilterRecord>(&self, record: &R) -> bool {
        let mut complete = self.0.iter().filter(|r| r.is_complete());
        let Some(first) = complete.next() else {
            return true;
        };

        complete.fold(first.matches(record), |acc, rule| match rule.connector {
            Connector::And => acc && rule.matches(record),
            Connector::Or => acc || rule.matches(record),
        })
    }

    pub fn apply<R: FilterRecord + Clone>(&self, records: &[R]) -> Vec<R> {
        if self.active_count() == 0 {
            return records.to_vec();
        }
        records.iter().filter(|r| self.matches(*r)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::shared::filters::record::{display, text};

    #[derive(Debug, Clone, PartialEq)]
    struct Deal {
        title: &'static str,
        stage: &'static str,
        amount: f64,
        closed_at: &'static str,
    }

    impl FilterRecord for Deal {
        fn attribute(&self, path: &str) -> Option<Cow<'_, str>> {
            match path {
                "title" => text(self.title),
                "stage" => text(self.stage),
                "amount" => display(self.amount),
                "closed_at" => text(self.closed_at),
                _ => None,
            }
        }
    }

    fn deals() -> Vec<Deal> {
        vec![
            Deal {
                title: "Acme renewal",
                stage: "won",
                amount: 900.0,
                closed_at: "2024-03-01",
            },
            Deal {
                title: "Beta expansion",
                stage: "negotiation",
                amount: 12_000.0,
                closed_at: "",
            },
            Deal {
                title: "Gamma pilot",
                stage: "lost",
                amount: 100.0,
                closed_at: "2023-11-20",
            },
        ]
    }

    fn titles(rules: &RuleSet) -> Vec<&'static str> {
        rules.apply(&deals()).iter().map(|d| d.title).collect()
    }

    #[test]
    fn test_and_chain() {
        let rules = RuleSet::new(vec![
            AdvancedRule::new("title", RuleOperator::Contains, "a"),
            AdvancedRule::new("amount", RuleOperator::GreaterThan, "500"),
        ]);
        assert_eq!(titles(&rules), vec!["Acme renewal", "Beta expansion"]);
    }

    #[test]
    fn test_left_to_right_or() {
        // (stage = won OR stage = lost) AND amount < 500
        let rules = RuleSet::new(vec![
            AdvancedRule::new("stage", RuleOperator::Equals, "WON"),
            AdvancedRule::new("stage", RuleOperator::Equals, "lost").or(),
            AdvancedRule::new("amount", RuleOperator::LessThan, "500"),
        ]);
        assert_eq!(titles(&rules), vec!["Gamma pilot"]);
    }

    #[test]
    fn test_first_connector_ignored() {
        let rules = RuleSet::new(vec![AdvancedRule::new("stage", RuleOperator::Equals, "won").or()]);
        assert_eq!(titles(&rules), vec!["Acme renewal"]);
    }

    #[test]
    fn test_incomplete_rules_skipped() {
        let rules = RuleSet::new(vec![
            AdvancedRule::new("", RuleOperator::Equals, "won"),
            AdvancedRule::new("stage", RuleOperator::Equals, " "),
        ]);
        assert_eq!(rules.active_count(), 0);
        assert_eq!(titles(&rules).len(), 3);
    }

    #[test]
    fn test_dates_and_emptiness() {
        let rules = RuleSet::new(vec![AdvancedRule::new(
            "closed_at",
            RuleOperator::GreaterThan,
            "2024-01-01",
        )]);
        assert_eq!(titles(&rules), vec!["Acme renewal"]);

        let rules = RuleSet::new(vec![AdvancedRule::new("closed_at", RuleOperator::IsEmpty, "")]);
        assert_eq!(titles(&rules), vec!["Beta expansion"]);
    }

    #[test]
    fn test_rule_wire_format() {
        let rule: AdvancedRule = serde_json::from_str(
            r#"{"field":"stage","operator":"not_equals","value":"lost","connector":"or"}"#,
        )
        .unwrap();
        assert_eq!(rule.operator, RuleOperator::NotEquals);
        assert_eq!(rule.connector, Connector::Or);
    }
}

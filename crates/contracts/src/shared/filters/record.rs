use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::FilterError;

/// Entity types that own a filter spec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Client,
    Lead,
    Package,
    Contact,
    User,
    Task,
    Deal,
    Subscription,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Client => "client",
            EntityKind::Lead => "lead",
            EntityKind::Package => "package",
            EntityKind::Contact => "contact",
            EntityKind::User => "user",
            EntityKind::Task => "task",
            EntityKind::Deal => "deal",
            EntityKind::Subscription => "subscription",
        }
    }

    /// Get all entity kinds
    pub fn all() -> &'static [EntityKind] {
        &[
            EntityKind::Client,
            EntityKind::Lead,
            EntityKind::Package,
            EntityKind::Contact,
            EntityKind::User,
            EntityKind::Task,
            EntityKind::Deal,
            EntityKind::Subscription,
        ]
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = FilterError;

    /// Accepts the singular name and the plural used in list URLs ("clients")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let singular = normalized.strip_suffix('s').unwrap_or(&normalized);
        EntityKind::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == normalized || k.as_str() == singular)
            .ok_or_else(|| FilterError::UnknownEntityKind(s.to_string()))
    }
}

/// Typed attribute access for records that can be filtered.
///
/// Implementations map attribute paths (dotted for nested values, e.g.
/// `company.name`) onto the record's fields, and may expose computed
/// attributes such as `usage_percentage`. Unknown paths return `None`.
pub trait FilterRecord {
    fn attribute(&self, path: &str) -> Option<Cow<'_, str>>;

    /// Numeric view of an attribute, used by bucketed selects
    fn numeric_attribute(&self, path: &str) -> Option<f64> {
        self.attribute(path)?.trim().parse::<f64>().ok()
    }
}

/// Borrow a string attribute
pub fn text(value: &str) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(value))
}

/// Borrow an optional string attribute
pub fn opt_text(value: &Option<String>) -> Option<Cow<'_, str>> {
    value.as_deref().map(Cow::Borrowed)
}

/// Render a non-string attribute
pub fn display<T: ToString>(value: T) -> Option<Cow<'static, str>> {
    Some(Cow::Owned(value.to_string()))
}

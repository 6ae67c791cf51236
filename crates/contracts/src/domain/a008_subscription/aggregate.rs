use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::filters::{display, opt_text, text, usage_percentage, FilterRecord};

// ============================================================================
// Aggregate
// ============================================================================
/// Client subscription to a package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: Uuid,
    pub client_name: String,
    pub package_name: String,
    /// active | trialing | past_due | cancelled | expired
    pub status: String,
    /// monthly | yearly
    pub billing_cycle: String,
    pub users_count: u32,
    pub users_limit: u32,
    pub started_at: String,
    pub renews_at: Option<String>,
}

impl Subscription {
    pub fn usage_percentage(&self) -> f64 {
        usage_percentage(self.users_count, self.users_limit)
    }
}

// ============================================================================
// Filter attributes
// ============================================================================
impl FilterRecord for Subscription {
    fn attribute(&self, path: &str) -> Option<Cow<'_, str>> {
        match path {
            "id" => display(self.id),
            "client_name" => text(&self.client_name),
            "package_name" => text(&self.package_name),
            "status" => text(&self.status),
            "billing_cycle" => text(&self.billing_cycle),
            "users_count" => display(self.users_count),
            "users_limit" => display(self.users_limit),
            "usage_percentage" => display(self.usage_percentage()),
            "started_at" => text(&self.started_at),
            "renews_at" => opt_text(&self.renews_at),
            _ => None,
        }
    }

    fn numeric_attribute(&self, path: &str) -> Option<f64> {
        match path {
            "usage_percentage" => Some(self.usage_percentage()),
            "users_count" => Some(f64::from(self.users_count)),
            "users_limit" => Some(f64::from(self.users_limit)),
            _ => None,
        }
    }
}

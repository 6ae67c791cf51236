use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::filters::{display, text, usage_percentage, FilterRecord};

// ============================================================================
// Aggregate
// ============================================================================
/// Tenant account of the CRM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    /// active | trial | suspended | expired
    pub status: String,
    /// starter | professional | enterprise
    pub plan: String,
    pub users_count: u32,
    pub users_limit: u32,
    pub created_at: String,
}

impl Client {
    /// Seat usage in percent
    pub fn usage_percentage(&self) -> f64 {
        usage_percentage(self.users_count, self.users_limit)
    }
}

// ============================================================================
// Filter attributes
// ============================================================================
impl FilterRecord for Client {
    fn attribute(&self, path: &str) -> Option<Cow<'_, str>> {
        match path {
            "id" => display(self.id),
            "name" => text(&self.name),
            "email" => text(&self.email),
            "company" => text(&self.company),
            "phone" => text(&self.phone),
            "status" => text(&self.status),
            "plan" => text(&self.plan),
            "users_count" => display(self.users_count),
            "users_limit" => display(self.users_limit),
            "usage_percentage" => display(self.usage_percentage()),
            "created_at" => text(&self.created_at),
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

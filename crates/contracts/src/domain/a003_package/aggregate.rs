use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::filters::{display, text, FilterRecord};

// ============================================================================
// Aggregate
// ============================================================================
/// Subscription package offered to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Price per billing cycle
    pub price: f64,
    /// monthly | yearly
    pub billing_cycle: String,
    /// active | archived
    pub status: String,
    pub users_limit: u32,
    pub created_at: String,
}

// ============================================================================
// Filter attributes
// ============================================================================
impl FilterRecord for Package {
    fn attribute(&self, path: &str) -> Option<Cow<'_, str>> {
        match path {
            "id" => display(self.id),
            "name" => text(&self.name),
            "description" => text(&self.description),
            "price" => display(self.price),
            "billing_cycle" => text(&self.billing_cycle),
            "status" => text(&self.status),
            "users_limit" => display(self.users_limit),
            "created_at" => text(&self.created_at),
            _ => None,
        }
    }

    fn numeric_attribute(&self, path: &str) -> Option<f64> {
        match path {
            "price" => Some(self.price),
            "users_limit" => Some(f64::from(self.users_limit)),
            _ => None,
        }
    }
}

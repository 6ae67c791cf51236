use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::filters::{display, opt_text, text, FilterRecord};

// ============================================================================
// Aggregate
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    /// website | referral | social | campaign | event
    pub source: String,
    /// new | contacted | qualified | converted | lost
    pub status: String,
    /// Qualification score, 0–100
    pub score: u8,
    pub assigned_to: Option<String>,
    pub created_at: String,
}

// ============================================================================
// Filter attributes
// ============================================================================
impl FilterRecord for Lead {
    fn attribute(&self, path: &str) -> Option<Cow<'_, str>> {
        match path {
            "id" => display(self.id),
            "name" => text(&self.name),
            "email" => text(&self.email),
            "company" => opt_text(&self.company),
            "phone" => opt_text(&self.phone),
            "source" => text(&self.source),
            "status" => text(&self.status),
            "score" => display(self.score),
            "assigned_to" => opt_text(&self.assigned_to),
            "created_at" => text(&self.created_at),
            _ => None,
        }
    }
}

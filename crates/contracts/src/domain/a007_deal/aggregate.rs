use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::filters::{display, opt_text, text, FilterRecord};

// ============================================================================
// Aggregate
// ============================================================================
/// Sales opportunity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: Uuid,
    pub title: String,
    pub contact_name: String,
    pub company: String,
    /// prospecting | qualification | proposal | negotiation | won | lost
    pub stage: String,
    pub amount: f64,
    pub owner: String,
    pub expected_close_date: Option<String>,
    pub created_at: String,
}

// ============================================================================
// Filter attributes
// ============================================================================
impl FilterRecord for Deal {
    fn attribute(&self, path: &str) -> Option<Cow<'_, str>> {
        match path {
            "id" => display(self.id),
            "title" => text(&self.title),
            "contact_name" => text(&self.contact_name),
            "company" => text(&self.company),
            "stage" => text(&self.stage),
            "amount" => display(self.amount),
            "owner" => text(&self.owner),
            "expected_close_date" => opt_text(&self.expected_close_date),
            "created_at" => text(&self.created_at),
            _ => None,
        }
    }

    fn numeric_attribute(&self, path: &str) -> Option<f64> {
        match path {
            "amount" => Some(self.amount),
            _ => None,
        }
    }
}

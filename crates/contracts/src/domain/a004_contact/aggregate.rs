use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::filters::{display, opt_text, text, FilterRecord};

// ============================================================================
// Aggregate
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<CompanyRef>,
    /// customer | partner | vendor | prospect
    pub contact_type: String,
    /// active | inactive
    pub status: String,
    pub created_at: String,
}

/// Company the contact works for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRef {
    pub name: String,
    pub industry: Option<String>,
}

impl Contact {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// ============================================================================
// Filter attributes
// ============================================================================
impl FilterRecord for Contact {
    fn attribute(&self, path: &str) -> Option<Cow<'_, str>> {
        match path {
            "id" => display(self.id),
            "first_name" => text(&self.first_name),
            "last_name" => text(&self.last_name),
            "full_name" => Some(Cow::Owned(self.full_name())),
            "email" => text(&self.email),
            "phone" => opt_text(&self.phone),
            "company.name" => self.company.as_ref().and_then(|c| text(&c.name)),
            "company.industry" => {
                self.company.as_ref().and_then(|c| opt_text(&c.industry))
            }
            "contact_type" => text(&self.contact_type),
            "status" => text(&self.status),
            "created_at" => text(&self.created_at),
            _ => None,
        }
    }
}

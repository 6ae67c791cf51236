use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::filters::{display, opt_text, text, FilterRecord};

// ============================================================================
// Aggregate
// ============================================================================
/// CRM operator account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// admin | manager | agent | viewer
    pub role: String,
    /// active | invited | disabled
    pub status: String,
    /// Never set for invited users
    pub last_login_at: Option<String>,
    pub created_at: String,
}

// ============================================================================
// Filter attributes
// ============================================================================
impl FilterRecord for User {
    fn attribute(&self, path: &str) -> Option<Cow<'_, str>> {
        match path {
            "id" => display(self.id),
            "name" => text(&self.name),
            "email" => text(&self.email),
            "role" => text(&self.role),
            "status" => text(&self.status),
            "last_login_at" => opt_text(&self.last_login_at),
            "created_at" => text(&self.created_at),
            _ => None,
        }
    }
}

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::filters::{display, opt_text, text, FilterRecord};

// ============================================================================
// Aggregate
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub assignee: Option<String>,
    /// low | medium | high | urgent
    pub priority: String,
    /// todo | in_progress | done | cancelled
    pub status: String,
    pub due_date: Option<String>,
    pub created_at: String,
}

// ============================================================================
// Filter attributes
// ============================================================================
impl FilterRecord for Task {
    fn attribute(&self, path: &str) -> Option<Cow<'_, str>> {
        match path {
            "id" => display(self.id),
            "title" => text(&self.title),
            "description" => text(&self.description),
            "assignee" => opt_text(&self.assignee),
            "priority" => text(&self.priority),
            "status" => text(&self.status),
            "due_date" => opt_text(&self.due_date),
            "created_at" => text(&self.created_at),
            _ => None,
        }
    }
}

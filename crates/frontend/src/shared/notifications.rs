//! Transient user notifications (errors and warnings shown above the grid)

use crate::shared::errors::{FetchError, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            Severity::Error => "alert--error",
            Severity::Warning => "alert--warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
}

/// FIFO of visible notifications, each with a unique id for dismissal
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn push(&mut self, severity: Severity, summary: impl Into<String>, detail: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            severity,
            summary: summary.into(),
            detail: detail.into(),
        });
        id
    }

    pub fn push_fetch_error(&mut self, error: &FetchError) -> u64 {
        self.push(Severity::Error, "Error in fetching data", error.to_string())
    }

    pub fn push_validation_error(&mut self, error: &ValidationError) -> u64 {
        self.push(Severity::Warning, "Invalid", error.to_string())
    }

    /// Removes the notification; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

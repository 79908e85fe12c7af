//! Selectable filter options for the worklist sidebar.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::issue::{IssueStatus, Priority};
use crate::user::User;

/// One selectable entry in a filter group: a display label plus the numeric
/// identifier of the underlying record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Identifier of the underlying record.
    pub id: u32,
    /// Display label shown to the user.
    pub label: String,
}

impl FilterOption {
    /// Creates a filter option from an ID and label.
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

impl fmt::Display for FilterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl From<&User> for FilterOption {
    fn from(user: &User) -> Self {
        Self::new(user.id.value(), user.name.clone())
    }
}

impl From<Priority> for FilterOption {
    fn from(priority: Priority) -> Self {
        Self::new(priority.as_value() as u32, priority.to_string())
    }
}

impl From<IssueStatus> for FilterOption {
    fn from(status: IssueStatus) -> Self {
        Self::new(status.id(), status.to_string())
    }
}

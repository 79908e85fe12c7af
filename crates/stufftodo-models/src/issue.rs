//! Issue types for the worklist service.
//!
//! Issues are the work items a user's worklist is made of. This service
//! only reads them; their lifecycle belongs to the surrounding tracker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{IssueId, UserId};

/// Workflow status of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    /// Issue has been filed but not started.
    #[default]
    New,
    /// Issue is being worked on.
    InProgress,
    /// Issue has a fix awaiting verification.
    Resolved,
    /// Issue is done and closed.
    Closed,
}

impl IssueStatus {
    /// Numeric ID of the status, stable across the service.
    pub fn id(&self) -> u32 {
        match self {
            IssueStatus::New => 1,
            IssueStatus::InProgress => 2,
            IssueStatus::Resolved => 3,
            IssueStatus::Closed => 4,
        }
    }

    /// All statuses in workflow order.
    pub fn all() -> [IssueStatus; 4] {
        [
            IssueStatus::New,
            IssueStatus::InProgress,
            IssueStatus::Resolved,
            IssueStatus::Closed,
        ]
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IssueStatus::New => "New",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "Resolved",
            IssueStatus::Closed => "Closed",
        };
        write!(f, "{label}")
    }
}

/// Priority levels for issues.
///
/// Higher numeric value = higher priority.
/// Immediate (4) > Urgent (3) > Normal (2) > Low (1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Low priority (1).
    Low,
    /// Normal priority (2).
    #[default]
    Normal,
    /// Urgent priority (3).
    Urgent,
    /// Immediate priority (4).
    Immediate,
}

impl Priority {
    /// Returns the numeric value of this priority.
    /// Higher value = higher priority.
    pub fn as_value(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Normal => 2,
            Priority::Urgent => 3,
            Priority::Immediate => 4,
        }
    }

    /// All priorities from lowest to highest.
    pub fn all() -> [Priority; 4] {
        [
            Priority::Low,
            Priority::Normal,
            Priority::Urgent,
            Priority::Immediate,
        ]
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_value().cmp(&other.as_value())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Low => "Low",
            Priority::Normal => "Normal",
            Priority::Urgent => "Urgent",
            Priority::Immediate => "Immediate",
        };
        write!(f, "{label}")
    }
}

/// A tracker issue as seen by the worklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Unique identifier for the issue.
    pub id: IssueId,

    /// Short description of the issue.
    pub subject: String,

    /// User the issue is assigned to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<UserId>,

    /// Estimated hours to complete, if an estimate was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f32>,

    /// Completion percentage, 0-100.
    pub done_ratio: u32,

    /// Priority of the issue.
    pub priority: Priority,

    /// Workflow status of the issue.
    pub status: IssueStatus,

    /// When the issue was created.
    pub created_at: DateTime<Utc>,
}

impl Issue {
    /// Creates a new issue with the given ID and subject.
    pub fn new(id: impl Into<IssueId>, subject: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            assigned_to: None,
            estimated_hours: None,
            done_ratio: 0,
            priority: Priority::default(),
            status: IssueStatus::default(),
            created_at: Utc::now(),
        }
    }

    /// Builder: assigns the issue to a user.
    pub fn assigned_to(mut self, user: impl Into<UserId>) -> Self {
        self.assigned_to = Some(user.into());
        self
    }

    /// Builder: sets the estimated hours.
    pub fn with_estimate(mut self, hours: f32) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    /// Builder: sets the completion percentage.
    pub fn with_done_ratio(mut self, ratio: u32) -> Self {
        self.done_ratio = ratio;
        self
    }

    /// Builder: sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Builder: sets the status.
    pub fn with_status(mut self, status: IssueStatus) -> Self {
        self.status = status;
        self
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}: {}", self.id, self.subject)
    }
}

//! Core data models for Stuff To Do.
//!
//! This crate provides the fundamental data types used throughout the
//! worklist service: typed IDs, issues, users, and filter options.

pub mod filter;
pub mod ids;
pub mod issue;
pub mod user;

// Re-export main types
pub use filter::FilterOption;
pub use ids::{IssueId, UserId};
pub use issue::{Issue, IssueStatus, Priority};
pub use user::User;

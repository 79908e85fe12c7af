//! User types for the worklist service.
//!
//! Users are opaque principals owned by the surrounding tracker; the
//! worklist only needs an identity, a display name, and the admin flag.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::UserId;

/// A tracker user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: UserId,

    /// Login handle.
    pub login: String,

    /// Full display name.
    pub name: String,

    /// Whether the user is an administrator.
    #[serde(default)]
    pub admin: bool,
}

impl User {
    /// Creates a new non-admin user.
    pub fn new(id: impl Into<UserId>, login: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            login: login.into(),
            name: name.into(),
            admin: false,
        }
    }

    /// Builder: marks the user as an administrator.
    pub fn as_admin(mut self) -> Self {
        self.admin = true;
        self
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

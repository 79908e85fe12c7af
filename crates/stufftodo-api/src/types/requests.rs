//! Request DTOs for the API.

use serde::Deserialize;

/// Query parameters shared by the worklist actions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorklistQuery {
    /// Target user ID; only administrators may name one.
    pub user_id: Option<u32>,
    /// Response format; `js` asks reorder for the panes fragment instead
    /// of a redirect.
    pub format: Option<String>,
}

impl WorklistQuery {
    /// True when the caller asked for the partial (script) format.
    pub fn wants_partial(&self) -> bool {
        self.format.as_deref() == Some("js")
    }
}

/// Reorder request: the user's desired priority order, issue IDs in their
/// external string form.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderRequest {
    /// Ordered issue IDs, highest priority first.
    pub issue: Vec<String>,
}

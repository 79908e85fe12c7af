//! The ranking collaborator contract.

use stufftodo_models::{Issue, User};

use crate::error::Result;

/// Partitions a user's assigned issues into worklist segments and persists
/// a manually chosen priority order.
///
/// The HTTP layer only talks to this trait; how the ranking is stored and
/// computed is an implementation concern.
pub trait Worklist: Send + Sync {
    /// The issues the user should be working on right now (top of the
    /// ranked list).
    fn doing_now(&self, user: &User) -> Result<Vec<Issue>>;

    /// The issues recommended next (ranked list after the doing-now slice).
    fn recommended(&self, user: &User) -> Result<Vec<Issue>>;

    /// Assigned issues that are not in the ranked list at all.
    fn available(&self, user: &User) -> Result<Vec<Issue>>;

    /// Replaces the user's ranked list with `ordered_ids`, in exactly the
    /// order given. IDs arrive in their external string form.
    fn reorder_list(&self, user: &User, ordered_ids: &[String]) -> Result<()>;
}

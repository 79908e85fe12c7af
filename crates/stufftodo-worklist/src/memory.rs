//! In-memory worklist with manual ranking.
//!
//! Keeps, per user, the set of assigned issues and a ranked list of issue
//! IDs. The ranked list is what `reorder_list` rewrites; the partition
//! contract is:
//! - doing-now: the first [`DOING_NOW_LIMIT`] ranked issues
//! - recommended: the next [`RECOMMENDED_LIMIT`] ranked issues
//! - available: assigned issues absent from the ranked list

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use stufftodo_models::{Issue, IssueId, User, UserId};

use crate::error::{Result, WorklistError};
use crate::source::Worklist;

/// How many ranked issues count as "doing now".
pub const DOING_NOW_LIMIT: usize = 5;

/// How many ranked issues after the doing-now slice count as "recommended".
pub const RECOMMENDED_LIMIT: usize = 10;

/// Internal state, all maps keyed by user.
#[derive(Default)]
struct WorklistState {
    /// Issues assigned to each user, by ID.
    assigned: HashMap<UserId, HashMap<IssueId, Issue>>,
    /// Manually ranked issue IDs per user, highest priority first.
    ranked: HashMap<UserId, Vec<IssueId>>,
}

/// Thread-safe in-memory `Worklist`.
///
/// Uses `Mutex` for exclusive access because a reorder must atomically
/// replace the ranked list that the read paths slice.
#[derive(Default, Clone)]
pub struct InMemoryWorklist {
    state: Arc<Mutex<WorklistState>>,
}

impl InMemoryWorklist {
    /// Creates an empty worklist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns an issue to a user. Ranking is untouched; the issue shows up
    /// as "available" until a reorder places it.
    pub fn assign(&self, user: UserId, issue: Issue) {
        if let Ok(mut state) = self.state.lock() {
            state.assigned.entry(user).or_default().insert(issue.id, issue);
        }
    }

    /// Seeds a user's ranked list directly, bypassing ID parsing.
    pub fn set_order(&self, user: UserId, order: Vec<IssueId>) {
        if let Ok(mut state) = self.state.lock() {
            state.ranked.insert(user, order);
        }
    }

    fn ranked_slice(&self, user: &User, skip: usize, take: usize) -> Result<Vec<Issue>> {
        let state = self
            .state
            .lock()
            .map_err(|e| WorklistError::LockPoisoned(e.to_string()))?;

        let Some(order) = state.ranked.get(&user.id) else {
            return Ok(Vec::new());
        };
        let assigned = state.assigned.get(&user.id);

        Ok(order
            .iter()
            .skip(skip)
            .take(take)
            .filter_map(|id| assigned.and_then(|issues| issues.get(id)).cloned())
            .collect())
    }
}

impl Worklist for InMemoryWorklist {
    fn doing_now(&self, user: &User) -> Result<Vec<Issue>> {
        self.ranked_slice(user, 0, DOING_NOW_LIMIT)
    }

    fn recommended(&self, user: &User) -> Result<Vec<Issue>> {
        self.ranked_slice(user, DOING_NOW_LIMIT, RECOMMENDED_LIMIT)
    }

    fn available(&self, user: &User) -> Result<Vec<Issue>> {
        let state = self
            .state
            .lock()
            .map_err(|e| WorklistError::LockPoisoned(e.to_string()))?;

        let Some(assigned) = state.assigned.get(&user.id) else {
            return Ok(Vec::new());
        };
        let ranked = state.ranked.get(&user.id);

        let mut available: Vec<Issue> = assigned
            .values()
            .filter(|issue| ranked.map_or(true, |order| !order.contains(&issue.id)))
            .cloned()
            .collect();
        // Issue-ID order keeps the partition deterministic.
        available.sort_by_key(|issue| issue.id);
        Ok(available)
    }

    fn reorder_list(&self, user: &User, ordered_ids: &[String]) -> Result<()> {
        let order = ordered_ids
            .iter()
            .map(|raw| {
                raw.parse::<IssueId>()
                    .map_err(|_| WorklistError::InvalidIssueId(raw.clone()))
            })
            .collect::<Result<Vec<IssueId>>>()?;

        let mut state = self
            .state
            .lock()
            .map_err(|e| WorklistError::LockPoisoned(e.to_string()))?;
        state.ranked.insert(user.id, order);
        Ok(())
    }
}

//! Application state shared across handlers.

use std::sync::Arc;

use stufftodo_worklist::{UserDirectory, Worklist};

use crate::config::ApiConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: Arc<ApiConfig>,
    /// The ranking collaborator the worklist pages delegate to.
    pub worklist: Arc<dyn Worklist>,
    /// User lookup.
    pub users: Arc<dyn UserDirectory>,
}

impl AppState {
    /// Creates a new AppState with all components.
    pub fn new(config: ApiConfig, worklist: Arc<dyn Worklist>, users: Arc<dyn UserDirectory>) -> Self {
        Self {
            config: Arc::new(config),
            worklist,
            users,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stufftodo_models::{User, UserId};
    use stufftodo_worklist::{InMemoryUserDirectory, InMemoryWorklist};

    #[test]
    fn test_app_state_shares_components() {
        let directory = InMemoryUserDirectory::new();
        directory.insert(User::new(1, "jdoe", "Jane Doe"));

        let state = AppState::new(
            ApiConfig::default(),
            Arc::new(InMemoryWorklist::new()),
            Arc::new(directory),
        );

        let clone = state.clone();
        assert!(clone.users.find(UserId::new(1)).is_some());
        assert_eq!(state.config.host, clone.config.host);
    }
}

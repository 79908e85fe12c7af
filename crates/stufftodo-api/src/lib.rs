//! HTTP surface for the Stuff To Do worklist.
//!
//! This crate exposes the worklist over HTTP:
//! - Index page: a user's doing-now / recommended / available issues with
//!   aggregate progress and filter widgets
//! - Reorder: persist a manually chosen priority order
//! - Health check
//!
//! Authorization follows the tracker's rules: a user sees their own
//! worklist; only administrators may view or reorder someone else's.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use stufftodo_api::{ApiConfig, AppState, serve};
//! use stufftodo_worklist::{InMemoryUserDirectory, InMemoryWorklist};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), std::io::Error> {
//!     let state = AppState::new(
//!         ApiConfig::default(),
//!         Arc::new(InMemoryWorklist::new()),
//!         Arc::new(InMemoryUserDirectory::new()),
//!     );
//!     serve(state).await
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod types;
pub mod views;

pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use router::{create_router, serve};
pub use state::AppState;

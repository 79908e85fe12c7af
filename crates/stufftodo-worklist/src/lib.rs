//! Worklist ranking boundary for Stuff To Do.
//!
//! This crate defines the contracts the HTTP layer depends on:
//! - `Worklist`: partitions a user's issues into doing-now / recommended /
//!   available and persists a manual priority order
//! - `UserDirectory`: resolves user identities
//!
//! plus thread-safe in-memory implementations of both, suitable for the
//! server binary and for tests.
//!
//! # Example
//!
//! ```
//! use stufftodo_worklist::{InMemoryWorklist, Worklist};
//! use stufftodo_models::{Issue, User};
//!
//! let user = User::new(1, "jdoe", "Jane Doe");
//! let worklist = InMemoryWorklist::new();
//! worklist.assign(user.id, Issue::new(500, "Fix login").assigned_to(1));
//! worklist.reorder_list(&user, &["500".to_string()]).unwrap();
//!
//! let doing = worklist.doing_now(&user).unwrap();
//! assert_eq!(doing.len(), 1);
//! ```

pub mod directory;
pub mod error;
pub mod memory;
pub mod source;

pub use directory::{InMemoryUserDirectory, UserDirectory};
pub use error::{Result, WorklistError};
pub use memory::{InMemoryWorklist, DOING_NOW_LIMIT, RECOMMENDED_LIMIT};
pub use source::Worklist;

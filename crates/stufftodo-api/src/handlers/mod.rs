//! API request handlers.

pub mod health;
pub mod stuff_to_do;

pub use health::*;
pub use stuff_to_do::*;

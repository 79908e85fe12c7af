//! Type-safe ID wrappers for the worklist service.
//!
//! Issue trackers use numeric record IDs, so these wrap `u32` rather than
//! strings. The HTTP layer still exchanges them in their external string
//! form (`"500"`), hence the `FromStr`/`Display` pair.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate numeric ID newtypes with common functionality.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Creates an ID from a raw numeric value.
            pub fn new(value: u32) -> Self {
                Self(value)
            }

            /// Returns the inner numeric value.
            pub fn value(&self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<u32>().map(Self)
            }
        }
    };
}

define_id!(UserId);
define_id!(IssueId);

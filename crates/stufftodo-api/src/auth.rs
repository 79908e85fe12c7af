//! Request identity and worklist authorization.
//!
//! Identity is request-scoped: the caller arrives in the `X-User-Id`
//! header (established by the tracker's own authentication, which is out
//! of scope here) and is resolved through the `UserDirectory`. There is no
//! ambient current-user state.
//!
//! Authorization rules for both worklist actions:
//! 1. Unauthenticated caller → forbidden
//! 2. No target requested → the caller acts on their own worklist
//! 3. Target requested by a non-administrator → forbidden, even when the
//!    target is the caller themselves
//! 4. Target requested by an administrator → directory lookup

use axum::http::HeaderMap;

use stufftodo_models::{User, UserId};
use stufftodo_worklist::UserDirectory;

use crate::error::ApiError;

/// Header carrying the authenticated caller's user ID.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Resolves the calling user from request headers.
///
/// Returns `None` when the header is missing, unparsable, or names a user
/// the directory does not know — all of which mean "unauthenticated".
pub fn caller(headers: &HeaderMap, users: &dyn UserDirectory) -> Option<User> {
    let raw = headers.get(USER_ID_HEADER)?.to_str().ok()?;
    let id: UserId = raw.parse().ok()?;
    users.find(id)
}

/// Decides whose worklist the request operates on.
///
/// This is the authorization verdict for both `index` and `reorder`; the
/// HTTP layer only translates the error into a response.
pub fn resolve_target(
    caller: Option<&User>,
    requested: Option<UserId>,
    users: &dyn UserDirectory,
) -> Result<User, ApiError> {
    let caller = caller.ok_or(ApiError::Forbidden)?;

    match requested {
        None => Ok(caller.clone()),
        Some(_) if !caller.admin => Err(ApiError::Forbidden),
        Some(id) => users
            .find(id)
            .ok_or_else(|| ApiError::NotFound(format!("user {} not found", id))),
    }
}

//! Worklist handlers: the index page and manual reordering.

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use tracing::{debug, info};

use stufftodo_models::{FilterOption, IssueStatus, Priority, User, UserId};

use crate::auth;
use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::{ReorderRequest, WorklistQuery};
use crate::views;

/// Path of the index action; reorder redirects here in the default format.
pub const INDEX_PATH: &str = "/stuff-to-do";

/// GET /stuff-to-do - A user's worklist, partitioned into doing-now,
/// recommended, and available panes.
pub async fn index(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<WorklistQuery>,
) -> Result<Html<String>> {
    let target = resolve(&state, &headers, &query)?;

    let doing_now = state.worklist.doing_now(&target)?;
    let recommended = state.worklist.recommended(&target)?;
    let available = state.worklist.available(&target)?;
    debug!(
        user = %target.id,
        doing_now = doing_now.len(),
        recommended = recommended.len(),
        available = available.len(),
        "rendering worklist"
    );

    let filters = filter_groups(&state);
    Ok(Html(views::pages::index(
        &target,
        &doing_now,
        &recommended,
        &available,
        &filters,
    )))
}

/// POST /stuff-to-do/reorder - Persists a manually chosen priority order.
///
/// Default format redirects back to the index; `?format=js` returns the
/// refreshed doing-now and recommended panes instead.
pub async fn reorder(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<WorklistQuery>,
    body: Option<Json<ReorderRequest>>,
) -> Result<Response> {
    // Authorization comes first so a missing body cannot mask a 403.
    let target = resolve(&state, &headers, &query)?;

    let Some(Json(request)) = body else {
        return Err(ApiError::BadRequest("missing issue list".to_string()));
    };

    state.worklist.reorder_list(&target, &request.issue)?;
    info!(user = %target.id, issues = request.issue.len(), "worklist reordered");

    if query.wants_partial() {
        let doing_now = state.worklist.doing_now(&target)?;
        let recommended = state.worklist.recommended(&target)?;
        Ok(Html(views::pages::panes(&doing_now, &recommended)).into_response())
    } else {
        Ok(Redirect::to(INDEX_PATH).into_response())
    }
}

fn resolve(state: &AppState, headers: &HeaderMap, query: &WorklistQuery) -> Result<User> {
    let caller = auth::caller(headers, state.users.as_ref());
    auth::resolve_target(
        caller.as_ref(),
        query.user_id.map(UserId::new),
        state.users.as_ref(),
    )
}

fn filter_groups(state: &AppState) -> Vec<(String, Vec<FilterOption>)> {
    vec![
        (
            "users".to_string(),
            state.users.all().iter().map(FilterOption::from).collect(),
        ),
        (
            "priorities".to_string(),
            Priority::all().into_iter().map(FilterOption::from).collect(),
        ),
        (
            "statuses".to_string(),
            IssueStatus::all().into_iter().map(FilterOption::from).collect(),
        ),
    ]
}

//! Router configuration and server setup.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/api/health", get(handlers::health))
        // Worklist
        .route("/stuff-to-do", get(handlers::index))
        .route("/stuff-to-do/reorder", post(handlers::reorder))
        // Apply middleware
        .layer(cors)
        .with_state(state)
}

/// Starts the API server.
pub async fn serve(state: AppState) -> Result<(), std::io::Error> {
    let addr = state.config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Stuff To Do server listening on {}", addr);
    axum::serve(listener, create_router(state)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::USER_ID_HEADER;
    use crate::config::ApiConfig;
    use axum::http::{HeaderName, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use stufftodo_models::{Issue, User, UserId};
    use stufftodo_worklist::{
        InMemoryUserDirectory, InMemoryWorklist, Result as WorklistResult, Worklist,
    };

    /// Collaborator stub: fixed 5/10/6 partition for any user, records the
    /// users queried and the reorder calls received.
    #[derive(Default, Clone)]
    struct StubWorklist {
        queried: Arc<Mutex<Vec<UserId>>>,
        reorders: Arc<Mutex<Vec<(UserId, Vec<String>)>>>,
    }

    impl StubWorklist {
        fn issues(range: std::ops::RangeInclusive<u32>) -> Vec<Issue> {
            range.map(|id| Issue::new(id, format!("Issue {id}"))).collect()
        }

        fn last_reorder(&self) -> Option<(UserId, Vec<String>)> {
            self.reorders.lock().unwrap().last().cloned()
        }

        fn queried_users(&self) -> Vec<UserId> {
            self.queried.lock().unwrap().clone()
        }
    }

    impl Worklist for StubWorklist {
        fn doing_now(&self, user: &User) -> WorklistResult<Vec<Issue>> {
            self.queried.lock().unwrap().push(user.id);
            Ok(Self::issues(1..=5))
        }

        fn recommended(&self, user: &User) -> WorklistResult<Vec<Issue>> {
            self.queried.lock().unwrap().push(user.id);
            Ok(Self::issues(6..=15))
        }

        fn available(&self, user: &User) -> WorklistResult<Vec<Issue>> {
            self.queried.lock().unwrap().push(user.id);
            Ok(Self::issues(16..=21))
        }

        fn reorder_list(&self, user: &User, ordered_ids: &[String]) -> WorklistResult<()> {
            self.reorders
                .lock()
                .unwrap()
                .push((user.id, ordered_ids.to_vec()));
            Ok(())
        }
    }

    fn directory() -> InMemoryUserDirectory {
        let directory = InMemoryUserDirectory::new();
        directory.insert(User::new(1, "jdoe", "Jane Doe"));
        directory.insert(User::new(2, "root", "Ada Min").as_admin());
        directory.insert(User::new(3, "other", "Other User"));
        directory
    }

    fn make_test_server() -> (TestServer, StubWorklist) {
        let stub = StubWorklist::default();
        let state = AppState::new(
            ApiConfig::default(),
            Arc::new(stub.clone()),
            Arc::new(directory()),
        );
        (TestServer::new(create_router(state)).unwrap(), stub)
    }

    #[tokio::test]
    async fn test_index_renders_own_worklist() {
        let (server, _) = make_test_server();

        let response = server.get("/stuff-to-do").add_header(HeaderName::from_static(USER_ID_HEADER), HeaderValue::from_static("1")).await;
        response.assert_status_ok();

        let body = response.text();
        assert!(body.contains("Stuff To Do"));
        assert!(body.contains("Jane Doe"));
        assert!(body.contains("Doing Now (5)"));
        assert!(body.contains("Recommended (10)"));
        assert!(body.contains("Available (6)"));
    }

    #[tokio::test]
    async fn test_index_includes_filter_groups() {
        let (server, _) = make_test_server();

        let response = server.get("/stuff-to-do").add_header(HeaderName::from_static(USER_ID_HEADER), HeaderValue::from_static("1")).await;
        let body = response.text();

        assert!(body.contains("<optgroup label=\"Users\">"));
        assert!(body.contains("<optgroup label=\"Priorities\">"));
        assert!(body.contains("<optgroup label=\"Statuses\">"));
        assert!(body.contains("value=\"users-1\""));
    }

    #[tokio::test]
    async fn test_index_admin_views_another_user() {
        let (server, stub) = make_test_server();

        let response = server
            .get("/stuff-to-do")
            .add_header(HeaderName::from_static(USER_ID_HEADER), HeaderValue::from_static("2"))
            .add_query_param("user_id", "3")
            .await;
        response.assert_status_ok();

        let body = response.text();
        assert!(body.contains("Other User"));
        // The collaborator was asked about the target, not the caller.
        assert!(stub.queried_users().contains(&UserId::new(3)));
        assert!(!stub.queried_users().contains(&UserId::new(2)));
    }

    #[tokio::test]
    async fn test_index_non_admin_cannot_view_another_user() {
        let (server, stub) = make_test_server();

        let response = server
            .get("/stuff-to-do")
            .add_header(HeaderName::from_static(USER_ID_HEADER), HeaderValue::from_static("1"))
            .add_query_param("user_id", "3")
            .await;
        response.assert_status(StatusCode::FORBIDDEN);
        assert!(response.text().contains("not authorized"));
        assert!(stub.queried_users().is_empty());
    }

    #[tokio::test]
    async fn test_index_non_admin_cannot_even_name_themselves() {
        let (server, _) = make_test_server();

        let response = server
            .get("/stuff-to-do")
            .add_header(HeaderName::from_static(USER_ID_HEADER), HeaderValue::from_static("1"))
            .add_query_param("user_id", "1")
            .await;
        response.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_index_unauthenticated_is_forbidden() {
        let (server, _) = make_test_server();

        let response = server.get("/stuff-to-do").await;
        response.assert_status(StatusCode::FORBIDDEN);
        assert!(response.text().contains("not authorized"));
    }

    #[tokio::test]
    async fn test_index_admin_unknown_target_is_not_found() {
        let (server, _) = make_test_server();

        let response = server
            .get("/stuff-to-do")
            .add_header(HeaderName::from_static(USER_ID_HEADER), HeaderValue::from_static("2"))
            .add_query_param("user_id", "99")
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_reorder_passes_exact_order_and_redirects() {
        let (server, stub) = make_test_server();

        let response = server
            .post("/stuff-to-do/reorder")
            .add_header(HeaderName::from_static(USER_ID_HEADER), HeaderValue::from_static("1"))
            .json(&json!({"issue": ["500", "100", "300"]}))
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        let location = response.headers().get("location").unwrap().to_str().unwrap();
        assert_eq!(location, "/stuff-to-do");

        let (user, order) = stub.last_reorder().unwrap();
        assert_eq!(user, UserId::new(1));
        assert_eq!(order, vec!["500", "100", "300"]);
    }

    #[tokio::test]
    async fn test_reorder_js_format_renders_panes() {
        let (server, stub) = make_test_server();

        let response = server
            .post("/stuff-to-do/reorder")
            .add_header(HeaderName::from_static(USER_ID_HEADER), HeaderValue::from_static("1"))
            .add_query_param("format", "js")
            .json(&json!({"issue": ["500", "100", "300"]}))
            .await;

        response.assert_status_ok();
        let body = response.text();
        assert!(body.contains("id=\"panes\""));
        assert!(body.contains("Doing Now (5)"));
        assert!(body.contains("Recommended (10)"));
        // The partial refreshes doing-now and recommended, not available.
        assert!(!body.contains("Available"));
        assert!(stub.last_reorder().is_some());
    }

    #[tokio::test]
    async fn test_reorder_admin_for_another_user() {
        let (server, stub) = make_test_server();

        let response = server
            .post("/stuff-to-do/reorder")
            .add_header(HeaderName::from_static(USER_ID_HEADER), HeaderValue::from_static("2"))
            .add_query_param("user_id", "3")
            .json(&json!({"issue": ["500", "100", "300"]}))
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        let (user, order) = stub.last_reorder().unwrap();
        assert_eq!(user, UserId::new(3));
        assert_eq!(order, vec!["500", "100", "300"]);
    }

    #[tokio::test]
    async fn test_reorder_admin_js_format_for_another_user() {
        let (server, stub) = make_test_server();

        let response = server
            .post("/stuff-to-do/reorder")
            .add_header(HeaderName::from_static(USER_ID_HEADER), HeaderValue::from_static("2"))
            .add_query_param("user_id", "3")
            .add_query_param("format", "js")
            .json(&json!({"issue": ["500", "100", "300"]}))
            .await;

        response.assert_status_ok();
        assert!(response.text().contains("id=\"panes\""));
        assert_eq!(stub.last_reorder().unwrap().0, UserId::new(3));
    }

    #[tokio::test]
    async fn test_reorder_non_admin_for_another_user_is_forbidden() {
        let (server, stub) = make_test_server();

        // No body, like the original request; authorization still wins.
        let response = server
            .post("/stuff-to-do/reorder")
            .add_header(HeaderName::from_static(USER_ID_HEADER), HeaderValue::from_static("1"))
            .add_query_param("user_id", "3")
            .await;

        response.assert_status(StatusCode::FORBIDDEN);
        assert!(response.text().contains("not authorized"));
        assert!(stub.last_reorder().is_none());
    }

    #[tokio::test]
    async fn test_reorder_unauthenticated_is_forbidden() {
        let (server, stub) = make_test_server();

        let response = server.post("/stuff-to-do/reorder").await;
        response.assert_status(StatusCode::FORBIDDEN);
        assert!(response.text().contains("not authorized"));
        assert!(stub.last_reorder().is_none());
    }

    #[tokio::test]
    async fn test_reorder_forbidden_in_js_format_too() {
        let (server, _) = make_test_server();

        let response = server
            .post("/stuff-to-do/reorder")
            .add_query_param("format", "js")
            .await;
        response.assert_status(StatusCode::FORBIDDEN);
        assert!(response.text().contains("not authorized"));
    }

    #[tokio::test]
    async fn test_reorder_missing_body_is_bad_request() {
        let (server, _) = make_test_server();

        let response = server
            .post("/stuff-to-do/reorder")
            .add_header(HeaderName::from_static(USER_ID_HEADER), HeaderValue::from_static("1"))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_reorder_invalid_issue_id_is_bad_request() {
        // Real worklist so ID parsing runs.
        let state = AppState::new(
            ApiConfig::default(),
            Arc::new(InMemoryWorklist::new()),
            Arc::new(directory()),
        );
        let server = TestServer::new(create_router(state)).unwrap();

        let response = server
            .post("/stuff-to-do/reorder")
            .add_header(HeaderName::from_static(USER_ID_HEADER), HeaderValue::from_static("1"))
            .json(&json!({"issue": ["500", "oops"]}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (server, _) = make_test_server();

        let response = server.get("/api/health").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "ok");
        assert!(!body["version"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cors_headers() {
        let (server, _) = make_test_server();

        let response = server.get("/api/health").await;
        assert!(response.headers().contains_key("access-control-allow-origin"));
    }
}

use std::net::SocketAddr;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use crate::{analytics, auth, dashboard, posts, users};

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .nest(
            "/api/v1",
            Router::new()
                .merge(auth::router())
                .merge(dashboard::router())
                .merge(users::router())
                .merge(posts::router())
                .merge(analytics::router())
                .route("/health", get(|| async { "ok" })),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri, status = tracing::field::Empty)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        let latency_ms = latency.as_millis() as u64;
                        if status.is_server_error() {
                            tracing::error!(%status, latency_ms, "response");
                        } else {
                            tracing::info!(%status, latency_ms, "response");
                        }
                    },
                ),
        )
}

pub async fn serve(app: Router) -> anyhow::Result<()> {
    let addr: SocketAddr = format!(
        "{}:{}",
        std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
        std::env::var("APP_PORT").unwrap_or_else(|_| "8080".into())
    )
    .parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fake::FakeDirectory;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> (Arc<FakeDirectory>, Router) {
        let api = Arc::new(FakeDirectory::seeded());
        (api.clone(), build_app(AppState::fake(api)))
    }

    async fn call(
        app: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let req = match body {
            Some(body) => req
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => req.body(Body::empty()),
        }
        .unwrap();

        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn login(app: &Router, email: &str, password: &str) -> String {
        let (status, body) = call(
            app,
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": email, "password": password })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn health_is_open() {
        let (_, app) = app();
        let req = Request::get("/api/v1/health").body(Body::empty()).unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn pages_require_a_session() {
        let (api, app) = app();
        for uri in ["/api/v1/me", "/api/v1/users", "/api/v1/posts", "/api/v1/dashboard"] {
            let (status, body) = call(&app, Method::GET, uri, None, None).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
            assert_eq!(body["status"], 401);
        }
        let (status, _) = call(&app, Method::GET, "/api/v1/me", Some("garbage"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn bad_credentials_are_rejected() {
        let (_, app) = app();
        let (status, body) = call(
            &app,
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": "user1@example.com", "password": "wrong" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid email or password. Please try again.");
    }

    #[tokio::test]
    async fn member_flow() {
        let (_, app) = app();
        let token = login(&app, "user1@example.com", "user1").await;

        let (status, me) = call(&app, Method::GET, "/api/v1/me", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(me["user"]["id"], 1);
        assert_eq!(me["is_admin"], false);

        let (_, welcome) = call(&app, Method::GET, "/api/v1/dashboard", Some(&token), None).await;
        assert_eq!(welcome["cards"].as_array().unwrap().len(), 2);

        let (status, posts) = call(&app, Method::GET, "/api/v1/posts", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(posts["total"], 2);

        let (status, body) = call(&app, Method::GET, "/api/v1/posts/3", Some(&token), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "You don't have permission to view this post");

        let (status, _) = call(&app, Method::GET, "/api/v1/analytics", Some(&token), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (_, views) = call(&app, Method::GET, "/api/v1/dashboard/state", Some(&token), None).await;
        assert_eq!(views["posts"]["status"], "success");
        assert_eq!(views["post_detail"]["status"], "error");
        assert_eq!(views["analytics"]["data"], "You don't have permission to view this page");
        assert_eq!(views["users"]["status"], "idle");
    }

    #[tokio::test]
    async fn admin_sees_everything() {
        let (_, app) = app();
        let token = login(&app, "admin@admin.com", "admin123").await;

        let (_, posts) = call(&app, Method::GET, "/api/v1/posts", Some(&token), None).await;
        assert_eq!(posts["total"], 3);

        let (status, detail) = call(&app, Method::GET, "/api/v1/posts/3", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(detail["author"]["id"], 2);

        let (status, summary) = call(&app, Method::GET, "/api/v1/analytics", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(summary["comments"], 3);

        let (_, own) = call(&app, Method::GET, "/api/v1/users/0", Some(&token), None).await;
        assert_eq!(own["user"]["username"], "admin123");
    }

    #[tokio::test]
    async fn invalid_ids_do_not_reach_upstream() {
        let (api, app) = app();
        let token = login(&app, "admin@admin.com", "admin123").await;
        let before = api.call_count();

        let (status, body) = call(&app, Method::GET, "/api/v1/posts/abc", Some(&token), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid post ID");

        let (status, body) = call(&app, Method::GET, "/api/v1/users/x1", Some(&token), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid user ID");

        assert_eq!(api.call_count(), before);
    }

    #[tokio::test]
    async fn upstream_outage_is_a_bad_gateway() {
        let (api, app) = app();
        let token = login(&app, "admin@admin.com", "admin123").await;
        api.fail();

        let (status, body) = call(&app, Method::GET, "/api/v1/users", Some(&token), None).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "Failed to load users. Please try again later.");
    }

    #[tokio::test]
    async fn settings_update_the_session_user() {
        let (_, app) = app();
        let token = login(&app, "user2@example.com", "user2").await;

        let (status, saved) = call(
            &app,
            Method::PUT,
            "/api/v1/settings",
            Some(&token),
            Some(json!({ "name": "Renamed", "bio": "Hello" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["user"]["name"], "Renamed");

        let (_, me) = call(&app, Method::GET, "/api/v1/me", Some(&token), None).await;
        assert_eq!(me["user"]["name"], "Renamed");
        assert_eq!(me["user"]["bio"], "Hello");
    }

    #[tokio::test]
    async fn logout_ends_the_session() {
        let (_, app) = app();
        let token = login(&app, "user1@example.com", "user1").await;

        let (status, _) = call(&app, Method::POST, "/api/v1/auth/logout", Some(&token), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = call(&app, Method::GET, "/api/v1/me", Some(&token), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn registration_is_validated() {
        let (_, app) = app();
        let form = json!({
            "firstName": "Ada",
            "lastName": "Love Lace",
            "email": "ada@example.com",
            "phone": "0123456789",
            "password": "secret1",
            "confirmPassword": "secret1",
            "location": [10.0, 20.0]
        });
        let (status, body) =
            call(&app, Method::POST, "/api/v1/auth/register", None, Some(form.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "ada.lovelace");

        let mut mismatch = form;
        mismatch["confirmPassword"] = json!("other");
        let (status, _) =
            call(&app, Method::POST, "/api/v1/auth/register", None, Some(mismatch)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

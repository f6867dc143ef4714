mod analytics;
mod app;
mod auth;
mod catalog;
mod config;
mod dashboard;
mod enrich;
mod error;
mod posts;
mod remote;
mod session;
mod state;
mod users;
mod view;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "xrdash=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let app_state = state::AppState::init()?;
    tracing::info!(
        api_base_url = %app_state.config.api_base_url,
        admin_emails = app_state.config.admin_emails.len(),
        "directory configured"
    );

    app::serve(app::build_app(app_state)).await
}

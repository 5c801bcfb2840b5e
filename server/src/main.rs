mod config;
mod db;
mod routes;
mod services;
mod state;

use services::auth::{GoogleConfig, OAuthTuning, build_http_client};

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    match services::session::purge_expired_sessions(&pool).await {
        Ok(purged) => tracing::info!(purged, "expired sessions removed"),
        Err(e) => tracing::warn!(error = %e, "expired session purge failed"),
    }

    if config::env_bool("SEED_SAMPLE_LITERATURE").unwrap_or(false) {
        if let Err(e) = db::seed_sample_literature(&pool).await {
            tracing::warn!(error = %e, "sample literature seed failed");
        }
    }

    // Sign-in is optional: without Google credentials the API is read-only.
    let google = GoogleConfig::from_env();
    if google.is_none() {
        tracing::warn!("Google OAuth not configured; sign-in disabled");
    }
    let oauth = OAuthTuning::from_env();
    let http = build_http_client(&oauth).expect("http client init failed");

    let state = state::AppState::new(pool, google, http, oauth);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "bodymap listening");
    axum::serve(listener, app).await.expect("server failed");
}

mod config;
mod routes;
mod state;

use client::net::user_store::UserStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;
    let state = state::AppState::new(UserStore::new());

    let app = routes::app(state, &config)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, cors_any = config.cors_any, "authpad listening");
    axum::serve(listener, app).await?;
    Ok(())
}

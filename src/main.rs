mod model;
mod server;

use std::sync::Arc;

use crate::server::{
    config::Config, error::AppError, router, service::pricing::FlatRateDiscount, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let state = AppState::new(
        db,
        Arc::new(FlatRateDiscount::new(config.discount_rate)),
        config.admin_token.clone(),
    );

    if state.admin_token.is_none() {
        tracing::warn!("ADMIN_TOKEN is not set; admin endpoints will reject every request");
    }

    let app = router::router(config.request_timeout).with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}

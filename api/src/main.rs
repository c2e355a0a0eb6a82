use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;

use ivr_api::app::create_app;
use ivr_api::config::Config;
use ivr_api::routes::AppState;
use ivr_api::telemetry;
use ivr_core::{
    CallRateLimiter, IvrService, SmsServiceTrait, VerificationStore, VerificationSweeper,
};
use ivr_infra::sms::SmsServiceAdapter;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    telemetry::init_logging(&config.app.logging)?;

    tracing::info!(
        environment = ?config.app.environment,
        business = %config.app.business.name,
        "Starting Business IVR server"
    );

    let store = Arc::new(VerificationStore::new(config.store_config()));
    let rate_limiter = Arc::new(CallRateLimiter::from_seconds(
        config.app.verification.call_rate_limit_seconds,
    ));

    let sweeper = Arc::new(VerificationSweeper::new(
        Arc::clone(&store),
        Arc::clone(&rate_limiter),
        config.sweeper_config(),
    ));
    let sweeper_handle = sweeper.start_background_task();

    let sms_service = Arc::new(SmsServiceAdapter::from_config(&config.sms));
    if !sms_service.is_available().await {
        tracing::warn!(
            provider = sms_service.provider_name(),
            "SMS delivery is not configured; verification codes cannot be sent"
        );
    } else if config.is_production() && sms_service.provider_name() == "mock" {
        tracing::warn!("Mock SMS provider in use in production");
    }

    let ivr_service = IvrService::new(store, rate_limiter, sms_service, config.ivr_config())
        .context("invalid IVR configuration")?;
    let app_state = web::Data::new(AppState::new(Arc::new(ivr_service)));

    let bind_address = config.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(app_state.clone()))
        .keep_alive(Duration::from_secs(config.app.server.keep_alive));
    if config.app.server.workers > 0 {
        server = server.workers(config.app.server.workers);
    }

    let result = server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await;

    if let Some(handle) = sweeper_handle {
        handle.abort();
    }
    tracing::info!("Server stopped");

    result.context("server error")
}

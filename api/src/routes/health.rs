//! Health check endpoint

use actix_web::{web, HttpResponse};
use chrono::Utc;
use ivr_core::SmsServiceTrait;
use ivr_shared::types::{HealthResponse, HealthStatus};

use super::AppState;

pub const SERVICE_NAME: &str = "Professional Business IVR System";

const FEATURES: [&str; 5] = [
    "Identity verification",
    "Customer support routing",
    "Rate limiting",
    "Session management",
    "Security compliance",
];

/// Handler for GET /health
///
/// Reads only; reports `degraded` when no SMS provider is configured.
pub async fn health_check<S>(state: web::Data<AppState<S>>) -> HttpResponse
where
    S: SmsServiceTrait + 'static,
{
    let service = &state.ivr_service;
    let sms_provider = service.sms_provider().to_string();
    let status = if sms_provider == "unconfigured" {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    };

    HttpResponse::Ok().json(HealthResponse {
        status,
        service: SERVICE_NAME.to_string(),
        business_name: service.config().business_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        active_sessions: service.store().active_count(),
        sms_provider,
        features: FEATURES.iter().map(|f| f.to_string()).collect(),
    })
}

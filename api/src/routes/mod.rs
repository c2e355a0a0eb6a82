//! Route handlers
//!
//! - `voice` - call webhooks (greeting, menu choice, code entry)
//! - `sms` - inbound SMS webhook
//! - `health` - liveness and session count
//! - `home` - landing page

pub mod health;
pub mod home;
pub mod sms;
pub mod voice;

use std::fmt::Display;
use std::sync::Arc;

use actix_web::HttpResponse;
use ivr_core::{CallerId, IvrService, SmsServiceTrait};

use crate::handlers::ApiError;

/// Application state that holds shared services
pub struct AppState<S>
where
    S: SmsServiceTrait,
{
    pub ivr_service: Arc<IvrService<S>>,
}

impl<S: SmsServiceTrait> AppState<S> {
    pub fn new(ivr_service: Arc<IvrService<S>>) -> Self {
        Self { ivr_service }
    }
}

/// Wrap a TwiML document in an XML response
pub(crate) fn twiml_response(document: impl Display) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/xml; charset=utf-8")
        .body(document.to_string())
}

/// Parse the `From` field into a caller identifier
pub(crate) fn parse_caller(from: &str) -> Result<CallerId, ApiError> {
    CallerId::parse(from).map_err(|e| {
        tracing::warn!(error = %e, "Rejected webhook with invalid caller");
        ApiError::from(e)
    })
}

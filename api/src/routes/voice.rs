//! Voice webhooks
//!
//! Each handler answers the platform with the next TwiML document for the
//! call. Store outcomes are always rendered as speech; only a malformed
//! request yields a non-200 status.

use actix_web::{web, HttpResponse};
use ivr_core::SmsServiceTrait;
use validator::Validate;

use crate::dto::VoiceWebhookForm;
use crate::handlers::ApiError;

use super::{parse_caller, twiml_response, AppState};

/// Handler for POST /incoming-call
pub async fn incoming_call<S>(
    state: web::Data<AppState<S>>,
    form: web::Form<VoiceWebhookForm>,
) -> Result<HttpResponse, ApiError>
where
    S: SmsServiceTrait + 'static,
{
    form.validate()?;
    let caller = parse_caller(&form.from)?;

    tracing::info!(
        caller = %caller.masked(),
        call_sid = form.call_sid.as_deref().unwrap_or("-"),
        "Business verification call"
    );

    Ok(twiml_response(state.ivr_service.handle_incoming_call(&caller)))
}

/// Handler for POST /handle_verification_choice
pub async fn handle_verification_choice<S>(
    state: web::Data<AppState<S>>,
    form: web::Form<VoiceWebhookForm>,
) -> Result<HttpResponse, ApiError>
where
    S: SmsServiceTrait + 'static,
{
    form.validate()?;
    let caller = parse_caller(&form.from)?;

    let response = state
        .ivr_service
        .handle_menu_choice(&caller, &form.digits)
        .await;
    Ok(twiml_response(response))
}

/// Handler for POST /verify_code
pub async fn verify_code<S>(
    state: web::Data<AppState<S>>,
    form: web::Form<VoiceWebhookForm>,
) -> Result<HttpResponse, ApiError>
where
    S: SmsServiceTrait + 'static,
{
    form.validate()?;
    let caller = parse_caller(&form.from)?;

    tracing::info!(caller = %caller.masked(), "Identity verification attempt");

    Ok(twiml_response(
        state.ivr_service.handle_code_entry(&caller, &form.digits),
    ))
}

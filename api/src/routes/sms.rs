//! Inbound SMS webhook

use actix_web::{web, HttpResponse};
use ivr_core::SmsServiceTrait;
use validator::Validate;

use crate::dto::SmsWebhookForm;
use crate::handlers::ApiError;

use super::{parse_caller, twiml_response, AppState};

/// Handler for POST /incoming-sms
pub async fn incoming_sms<S>(
    state: web::Data<AppState<S>>,
    form: web::Form<SmsWebhookForm>,
) -> Result<HttpResponse, ApiError>
where
    S: SmsServiceTrait + 'static,
{
    form.validate()?;
    let sender = parse_caller(&form.from)?;

    Ok(twiml_response(
        state.ivr_service.handle_incoming_sms(&sender, &form.body),
    ))
}

//! Shared setup for HTTP tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use ivr_api::routes::AppState;
use ivr_core::{CallRateLimiter, IvrConfig, IvrService, VerificationStore};
use ivr_infra::sms::{MockSmsService, SmsService, SmsServiceAdapter};

pub const CALLER: &str = "+14155552671";

pub struct TestContext {
    pub state: web::Data<AppState<SmsServiceAdapter>>,
    pub outbox: MockSmsService,
}

pub fn context() -> TestContext {
    context_with(IvrConfig::default(), false)
}

pub fn context_with(config: IvrConfig, simulate_failure: bool) -> TestContext {
    let outbox = MockSmsService::with_options(false, simulate_failure);
    TestContext {
        state: state_with(Box::new(outbox.clone()), config),
        outbox,
    }
}

/// App state around an arbitrary SMS provider
pub fn state_with(
    provider: Box<dyn SmsService>,
    config: IvrConfig,
) -> web::Data<AppState<SmsServiceAdapter>> {
    let ivr_service = IvrService::new(
        Arc::new(VerificationStore::default()),
        Arc::new(CallRateLimiter::from_seconds(300)),
        Arc::new(SmsServiceAdapter::new(provider)),
        config,
    )
    .expect("valid IVR config");

    web::Data::new(AppState::new(Arc::new(ivr_service)))
}

/// Pull the code out of a delivered verification text
pub fn delivered_code(message: &str) -> String {
    message
        .split("code is ")
        .nth(1)
        .map(|rest| rest.chars().take_while(|c| c.is_ascii_digit()).collect())
        .expect("message carries a code")
}

//! Application factory
//!
//! Builds the Actix-web application around a shared [`AppState`]. The
//! server binary and the integration tests use the same factory.

use actix_web::{middleware::Logger, web, App};

use ivr_core::SmsServiceTrait;

use crate::handlers::not_found;
use crate::routes::{
    health::health_check,
    home::home,
    sms::incoming_sms,
    voice::{handle_verification_choice, incoming_call, verify_code},
    AppState,
};

/// Create and configure the application with all dependencies
pub fn create_app<S>(
    app_state: web::Data<AppState<S>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: SmsServiceTrait + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        // Voice webhooks
        .route("/incoming-call", web::post().to(incoming_call::<S>))
        .route(
            "/handle_verification_choice",
            web::post().to(handle_verification_choice::<S>),
        )
        .route("/verify_code", web::post().to(verify_code::<S>))
        // SMS webhook
        .route("/incoming-sms", web::post().to(incoming_sms::<S>))
        .route("/health", web::get().to(health_check::<S>))
        .route("/", web::get().to(home::<S>))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

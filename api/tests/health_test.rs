//! HTTP tests for the health check and landing page

mod common;

use actix_web::{http::StatusCode, test};
use ivr_api::app::create_app;
use ivr_core::IvrConfig;
use ivr_infra::sms::UnconfiguredSmsService;

use common::{context, context_with, state_with, CALLER};

#[actix_web::test]
async fn test_health_reports_service_state() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["active_sessions"], 0);
    assert_eq!(body["sms_provider"], "mock");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["features"].as_array().map_or(false, |f| !f.is_empty()));
}

#[actix_web::test]
async fn test_health_is_degraded_without_sms_provider() {
    let state = state_with(
        Box::new(UnconfiguredSmsService::new("TWILIO_ACCOUNT_SID not set")),
        IvrConfig::default(),
    );
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["sms_provider"], "unconfigured");
}

#[actix_web::test]
async fn test_health_counts_active_sessions_without_mutating() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/handle_verification_choice")
        .set_form([("From", CALLER), ("Digits", "1")])
        .to_request();
    test::call_service(&app, req).await;

    for _ in 0..2 {
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["active_sessions"], 1);
    }
    assert_eq!(ctx.state.ivr_service.store().active_count(), 1);
}

#[actix_web::test]
async fn test_home_page_escapes_business_name() {
    let config = IvrConfig {
        business_name: "A&B <Bank>".to_string(),
        ..IvrConfig::default()
    };
    let ctx = context_with(config, false);
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8_lossy(&test::read_body(resp).await).into_owned();
    assert!(body.contains("A&amp;B &lt;Bank&gt;"));
    assert!(body.contains("POST /incoming-call"));
    assert!(body.contains("GET /health"));
}

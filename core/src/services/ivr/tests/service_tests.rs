//! Unit tests for the IVR flow service

use std::sync::Arc;

use chrono::Duration;

use crate::domain::entities::CallerId;
use crate::domain::value_objects::VoiceVerb;
use crate::errors::DomainError;
use crate::services::clock::ManualClock;
use crate::services::ivr::{IvrConfig, IvrService};
use crate::services::rate_limit::CallRateLimiter;
use crate::services::verification::{VerificationStore, VerificationStoreConfig};

use super::mocks::MockSmsService;

const CALLER: &str = "+14155552671";

struct Fixture {
    service: IvrService<MockSmsService>,
    sms: Arc<MockSmsService>,
    store: Arc<VerificationStore>,
    clock: Arc<ManualClock>,
}

fn fixture_with(sms_fails: bool, config: IvrConfig) -> Fixture {
    let clock = Arc::new(ManualClock::default());
    let store = Arc::new(VerificationStore::with_clock(
        VerificationStoreConfig::default(),
        clock.clone(),
    ));
    let rate_limiter = Arc::new(CallRateLimiter::with_clock(
        Duration::seconds(300),
        clock.clone(),
    ));
    let sms = Arc::new(MockSmsService::new(sms_fails));
    let service = IvrService::new(store.clone(), rate_limiter, sms.clone(), config).unwrap();
    Fixture {
        service,
        sms,
        store,
        clock,
    }
}

fn fixture() -> Fixture {
    fixture_with(false, IvrConfig::default())
}

fn caller() -> CallerId {
    CallerId::parse(CALLER).unwrap()
}

fn spoken(response: &crate::domain::value_objects::VoiceResponse) -> String {
    response.spoken_text().join(" ")
}

#[test]
fn test_new_rejects_invalid_config() {
    let clock = Arc::new(ManualClock::default());
    let result = IvrService::new(
        Arc::new(VerificationStore::with_clock(Default::default(), clock.clone())),
        Arc::new(CallRateLimiter::with_clock(Duration::seconds(300), clock)),
        Arc::new(MockSmsService::new(false)),
        IvrConfig {
            support_number: Some("not-a-number".to_string()),
            ..Default::default()
        },
    );

    assert!(matches!(result, Err(DomainError::Configuration { .. })));
}

#[test]
fn test_incoming_call_offers_menu() {
    let f = fixture();
    let response = f.service.handle_incoming_call(&caller());

    let gather = response.find_gather().expect("menu gather");
    assert_eq!(gather.num_digits, 1);
    assert_eq!(gather.action, "/handle_verification_choice");
    assert_eq!(gather.timeout, 15);

    let text = spoken(&response);
    assert!(text.contains("Thank you for calling Business Verification Services"));
    assert!(text.contains("Press 1"));
    assert!(response.ends_with_hangup());
}

#[test]
fn test_repeat_call_within_window_is_rate_limited() {
    let f = fixture();
    f.service.handle_incoming_call(&caller());

    let response = f.service.handle_incoming_call(&caller());
    assert!(response.find_gather().is_none());
    assert!(spoken(&response).contains("high call volume"));
    assert!(response.ends_with_hangup());

    f.clock.advance(Duration::seconds(300));
    let response = f.service.handle_incoming_call(&caller());
    assert!(response.find_gather().is_some());
}

#[tokio::test]
async fn test_choice_one_sends_code_and_gathers() {
    let f = fixture();
    let response = f.service.handle_menu_choice(&caller(), "1").await;

    assert_eq!(f.sms.sent_count(), 1);
    let message = f.sms.last_message(CALLER).unwrap();
    assert!(message.starts_with("Business Verification Services: Your identity verification code is "));
    assert!(message.contains("This code expires in 10 minutes."));

    let gather = response.find_gather().expect("code gather");
    assert_eq!(gather.num_digits, 6);
    assert_eq!(gather.action, "/verify_code");
    assert_eq!(gather.timeout, 45);
    assert!(spoken(&response).contains("6-digit verification code"));
    assert!(f.store.has_active(&caller()));
}

#[tokio::test]
async fn test_sent_code_is_never_spoken() {
    let f = fixture();
    let response = f.service.handle_menu_choice(&caller(), "1").await;
    let code = f.sms.last_code(CALLER).unwrap();

    assert!(!response.to_xml().contains(&code));
}

#[tokio::test]
async fn test_sms_failure_invalidates_code() {
    let f = fixture_with(true, IvrConfig::default());
    let response = f.service.handle_menu_choice(&caller(), "1").await;

    assert!(spoken(&response).contains("technical difficulties"));
    assert!(response.find_gather().is_none());
    assert!(response.ends_with_hangup());
    assert!(!f.store.has_active(&caller()));
}

#[tokio::test]
async fn test_choice_two_without_support_number() {
    let f = fixture();
    f.store.generate(&caller());

    let response = f.service.handle_menu_choice(&caller(), "2").await;

    assert!(spoken(&response).contains("currently unavailable"));
    assert!(!response.verbs().iter().any(|v| matches!(v, VoiceVerb::Dial(_))));
    assert!(!f.store.has_active(&caller()));
}

#[tokio::test]
async fn test_choice_two_dials_support_number() {
    let f = fixture_with(
        false,
        IvrConfig {
            support_number: Some("+15005550006".to_string()),
            ..Default::default()
        },
    );

    let response = f.service.handle_menu_choice(&caller(), " 2 ").await;

    assert!(spoken(&response).contains("Please hold"));
    assert!(response.to_xml().contains(r#"<Dial timeout="30">+15005550006</Dial>"#));
}

#[tokio::test]
async fn test_invalid_choice() {
    let f = fixture();
    let response = f.service.handle_menu_choice(&caller(), "9").await;

    assert!(spoken(&response).contains("Invalid selection"));
    assert_eq!(f.sms.sent_count(), 0);
    assert!(response.ends_with_hangup());
}

#[tokio::test]
async fn test_correct_code_entry() {
    let f = fixture();
    f.service.handle_menu_choice(&caller(), "1").await;
    let code = f.sms.last_code(CALLER).unwrap();

    let response = f.service.handle_code_entry(&caller(), &format!("{}#", code));

    assert!(spoken(&response).contains("Identity verification successful"));
    assert!(!f.store.has_active(&caller()));
}

#[tokio::test]
async fn test_wrong_code_regathers_until_cap() {
    let f = fixture();
    let code = f.store.generate(&caller());
    let wrong = if code == "000000" { "111111" } else { "000000" };

    let response = f.service.handle_code_entry(&caller(), wrong);
    assert!(spoken(&response).contains("2 attempts remaining"));
    assert_eq!(response.find_gather().map(|g| g.num_digits), Some(6));

    let response = f.service.handle_code_entry(&caller(), wrong);
    assert!(spoken(&response).contains("1 attempt remaining"));

    let response = f.service.handle_code_entry(&caller(), wrong);
    assert!(spoken(&response).contains("Too many failed attempts"));
    assert!(response.find_gather().is_none());

    let response = f.service.handle_code_entry(&caller(), &code);
    assert!(spoken(&response).contains("No active verification session"));
}

#[test]
fn test_expired_code_entry() {
    let f = fixture();
    let code = f.store.generate(&caller());
    f.clock.advance(Duration::minutes(10));

    let response = f.service.handle_code_entry(&caller(), &code);
    assert!(spoken(&response).contains("session has expired"));
}

#[test]
fn test_empty_code_entry_keeps_session() {
    let f = fixture();
    f.store.generate(&caller());

    let response = f.service.handle_code_entry(&caller(), " # ");
    assert!(spoken(&response).contains("didn't receive the verification code"));
    assert!(f.store.has_active(&caller()));
}

#[test]
fn test_sms_help_keywords() {
    let f = fixture();
    for body in ["help", " SUPPORT "] {
        let response = f.service.handle_incoming_sms(&caller(), body);
        assert!(response.messages()[0].starts_with("Welcome to Business Verification Services!"));
    }
}

#[test]
fn test_sms_status() {
    let f = fixture();

    let response = f.service.handle_incoming_sms(&caller(), "Status");
    assert!(response.messages()[0].starts_with("No pending verification session"));

    f.store.generate(&caller());
    let response = f.service.handle_incoming_sms(&caller(), "status");
    assert!(response.messages()[0].starts_with("You have a pending"));
}

#[test]
fn test_sms_code_reply() {
    let f = fixture();
    let code = f.store.generate(&caller());

    let response = f.service.handle_incoming_sms(&caller(), &format!(" {} ", code));
    assert!(response.messages()[0].contains("Identity verification successful"));
    assert!(!f.store.has_active(&caller()));
}

#[test]
fn test_sms_wrong_code_reply() {
    let f = fixture();
    let code = f.store.generate(&caller());
    let wrong = if code == "000000" { "111111" } else { "000000" };

    let response = f.service.handle_incoming_sms(&caller(), wrong);
    assert!(response.messages()[0].contains("2 attempts remaining"));
}

#[test]
fn test_sms_default_reply() {
    let f = fixture();
    let response = f.service.handle_incoming_sms(&caller(), "hello there");

    assert!(response.messages()[0].starts_with("Thank you for contacting Business Verification Services."));
    assert_eq!(f.store.active_count(), 0);
}

#[test]
fn test_sms_provider_name() {
    let f = fixture();
    assert_eq!(f.service.sms_provider(), "mock");
}

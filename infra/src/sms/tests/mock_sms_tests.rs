//! Unit tests for mock SMS service

use crate::sms::{MockSmsService, SmsService};
use crate::InfrastructureError;

#[tokio::test]
async fn test_mock_sms_send_success() {
    let service = MockSmsService::with_options(false, false);
    let result = service.send_sms("+14155552671", "Test message").await;

    let message_id = result.unwrap();
    assert!(message_id.starts_with("mock_"));
    assert_eq!(service.get_message_count(), 1);
    assert_eq!(service.last_message("+14155552671").as_deref(), Some("Test message"));
}

#[tokio::test]
async fn test_mock_sms_keeps_last_message_per_recipient() {
    let service = MockSmsService::with_options(false, false);
    service.send_sms("+14155552671", "first").await.unwrap();
    service.send_sms("+14155552671", "second").await.unwrap();
    service.send_sms("+14155550000", "other").await.unwrap();

    assert_eq!(service.last_message("+14155552671").as_deref(), Some("second"));
    assert_eq!(service.last_message("+14155550000").as_deref(), Some("other"));
    assert_eq!(service.get_message_count(), 3);
}

#[tokio::test]
async fn test_mock_sms_invalid_phone() {
    let service = MockSmsService::with_options(false, false);
    let result = service.send_sms("4155552671", "Test message").await;

    if let Err(InfrastructureError::Sms(msg)) = result {
        assert!(msg.contains("Invalid phone number"));
    } else {
        panic!("Expected Sms error");
    }
}

#[tokio::test]
async fn test_mock_sms_simulate_failure() {
    let mut service = MockSmsService::with_options(false, false);
    service.set_simulate_failure(true);

    let result = service.send_sms("+14155552671", "Test message").await;
    assert!(result.is_err());
    assert!(!service.is_available().await);
    assert!(service.last_message("+14155552671").is_none());
}

#[test]
fn test_provider_name() {
    assert_eq!(MockSmsService::new().provider_name(), "mock");
}

#[test]
fn test_console_body_hides_code() {
    use crate::sms::mock_sms::redact_codes;

    let body = "Acme: Your identity verification code is 042917. This code expires in 10 minutes.";
    let shown = redact_codes(body);

    assert!(!shown.contains("042917"));
    assert!(shown.contains("code is ******."));
    assert!(shown.contains("expires in 10 minutes."));
    assert_eq!(redact_codes("1234"), "****");
    assert_eq!(redact_codes("no digits here"), "no digits here");
}

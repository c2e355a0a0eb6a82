//! Caller-facing wording for voice prompts and SMS replies

use chrono::Duration;

pub(super) const HIGH_CALL_VOLUME: &str =
    "We're experiencing high call volume. Please try again in a few minutes.";

pub(super) const MENU: &str = "Press 1 to receive an identity verification code via text message, \
     or press 2 to speak with a customer service representative.";

pub(super) const NO_SELECTION: &str =
    "We didn't receive your selection. Please call back and try again. Goodbye.";

pub(super) const CODE_SENT: &str = "An identity verification code has been sent to your registered phone number. \
     Please check your text messages and enter the code when prompted.";

pub(super) const NO_CODE_ENTERED: &str =
    "We didn't receive the verification code. Please call back and try again. Goodbye.";

pub(super) const TECHNICAL_DIFFICULTIES: &str = "We're experiencing technical difficulties. \
     Please try again later or contact our customer support team.";

pub(super) const HOLD_FOR_SUPPORT: &str =
    "Please hold while we connect you to a customer service representative.";

pub(super) const SUPPORT_UNAVAILABLE: &str = "Our customer service team is currently unavailable. \
     Please try again during business hours or use our online support portal.";

pub(super) const INVALID_SELECTION: &str =
    "Invalid selection. Please call back and try again. Goodbye.";

pub(super) const VERIFICATION_SUCCESS: &str = "Identity verification successful! You have been successfully verified. \
     Thank you for using our business verification service.";

pub(super) const TOO_MANY_ATTEMPTS: &str =
    "Too many failed attempts. Please call back to start a new verification process.";

pub(super) const SESSION_EXPIRED: &str =
    "Your verification session has expired. Please call back to start a new verification process.";

pub(super) const NO_ACTIVE_SESSION: &str =
    "No active verification session found. Please start a new verification process.";

pub(super) const SMS_PENDING: &str = "You have a pending identity verification session. \
     Please call our business verification line to complete the process.";

pub(super) const SMS_NOT_PENDING: &str = "No pending verification session found. \
     Call our business verification line to start the identity verification process.";

pub(super) const SMS_TOO_MANY_ATTEMPTS: &str = "Too many failed attempts. \
     Call our business verification line to start a new verification process.";

pub(super) const SMS_EXPIRED: &str = "Your verification code has expired. \
     Call our business verification line to start a new verification process.";

pub(super) fn welcome(business_name: &str) -> String {
    format!(
        "Thank you for calling {}. This is our automated identity verification system. \
         Please select from the following options.",
        business_name
    )
}

pub(super) fn enter_code(code_length: usize) -> String {
    format!(
        "Please enter the {}-digit verification code you received via text message.",
        code_length
    )
}

pub(super) fn incorrect_code(remaining_attempts: u32) -> String {
    format!(
        "The code you entered is incorrect. You have {} {} remaining.",
        remaining_attempts,
        attempts_word(remaining_attempts)
    )
}

pub(super) fn verification_sms(business_name: &str, code: &str, ttl: Duration) -> String {
    let minutes = ttl_minutes_rounded_up(ttl);
    format!(
        "{}: Your identity verification code is {}. This code expires in {} {}. \
         Do not share this code with anyone.",
        business_name,
        code,
        minutes,
        if minutes == 1 { "minute" } else { "minutes" }
    )
}

/// Whole minutes, rounded up so a short TTL is never announced as zero
fn ttl_minutes_rounded_up(ttl: Duration) -> i64 {
    let seconds = ttl.num_seconds().max(1);
    (seconds + 59) / 60
}

pub(super) fn sms_help(business_name: &str) -> String {
    format!(
        "Welcome to {}! Call our business verification line to start the identity verification process. \
         Reply with 'status' to check your verification status.",
        business_name
    )
}

pub(super) fn sms_default(business_name: &str) -> String {
    format!(
        "Thank you for contacting {}. For identity verification assistance, please call our business verification line. \
         Reply with 'help' for more options.",
        business_name
    )
}

pub(super) fn sms_verified(business_name: &str) -> String {
    format!(
        "{}: Identity verification successful. Thank you for using our business verification service.",
        business_name
    )
}

pub(super) fn sms_incorrect_code(remaining_attempts: u32) -> String {
    format!(
        "The code you sent is incorrect. You have {} {} remaining. Reply with the code to try again.",
        remaining_attempts,
        attempts_word(remaining_attempts)
    )
}

fn attempts_word(count: u32) -> &'static str {
    if count == 1 {
        "attempt"
    } else {
        "attempts"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_sms_wording() {
        assert_eq!(
            verification_sms("Acme", "004217", Duration::minutes(10)),
            "Acme: Your identity verification code is 004217. This code expires in 10 minutes. \
             Do not share this code with anyone."
        );
    }

    #[test]
    fn test_short_ttl_rounds_up() {
        assert!(verification_sms("Acme", "1234", Duration::seconds(30)).contains("expires in 1 minute."));
        assert!(verification_sms("Acme", "1234", Duration::seconds(61)).contains("expires in 2 minutes."));
        assert!(verification_sms("Acme", "1234", Duration::minutes(5)).contains("expires in 5 minutes."));
    }

    #[test]
    fn test_attempts_pluralization() {
        assert!(incorrect_code(1).ends_with("1 attempt remaining."));
        assert!(incorrect_code(2).ends_with("2 attempts remaining."));
    }
}

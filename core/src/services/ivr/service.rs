//! IVR flow service

use std::sync::Arc;

use crate::domain::entities::CallerId;
use crate::domain::value_objects::{Gather, MessagingResponse, Say, VerifyOutcome, VoiceResponse};
use crate::errors::DomainResult;
use crate::services::rate_limit::CallRateLimiter;
use crate::services::verification::VerificationStore;

use super::config::IvrConfig;
use super::prompts;
use super::traits::SmsServiceTrait;

/// Drives the caller through greeting, code delivery and code entry
///
/// Each handler maps one webhook event to the document the telephony
/// platform should execute next. Store outcomes never surface as errors.
pub struct IvrService<S: SmsServiceTrait> {
    store: Arc<VerificationStore>,
    rate_limiter: Arc<CallRateLimiter>,
    sms_service: Arc<S>,
    config: IvrConfig,
}

impl<S: SmsServiceTrait> IvrService<S> {
    /// Create a new IVR service
    ///
    /// Fails when `config` names an invalid support number or action path.
    pub fn new(
        store: Arc<VerificationStore>,
        rate_limiter: Arc<CallRateLimiter>,
        sms_service: Arc<S>,
        config: IvrConfig,
    ) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self {
            store,
            rate_limiter,
            sms_service,
            config,
        })
    }

    pub fn store(&self) -> &Arc<VerificationStore> {
        &self.store
    }

    pub fn config(&self) -> &IvrConfig {
        &self.config
    }

    /// Label of the SMS provider in use
    pub fn sms_provider(&self) -> &str {
        self.sms_service.provider_name()
    }

    /// Greet an inbound caller and offer the main menu
    pub fn handle_incoming_call(&self, caller: &CallerId) -> VoiceResponse {
        if !self.rate_limiter.check_and_record(caller) {
            return VoiceResponse::new()
                .say(self.say(prompts::HIGH_CALL_VOLUME))
                .hangup();
        }

        tracing::info!(
            caller = %caller.masked(),
            event = "call_started",
            "Business verification call received"
        );

        VoiceResponse::new()
            .say(self.say(prompts::welcome(&self.config.business_name)))
            .gather(
                Gather::new(1, &self.config.choice_action, self.config.menu_timeout_seconds)
                    .say(self.say(prompts::MENU)),
            )
            .say(self.say(prompts::NO_SELECTION))
            .hangup()
    }

    /// Act on the digit pressed at the main menu
    pub async fn handle_menu_choice(&self, caller: &CallerId, digits: &str) -> VoiceResponse {
        let choice = digits.trim();
        tracing::info!(
            caller = %caller.masked(),
            choice = choice,
            event = "menu_choice",
            "Verification menu choice received"
        );

        match choice {
            "1" => self.send_code(caller).await,
            "2" => self.route_to_support(caller),
            _ => VoiceResponse::new()
                .say(self.say(prompts::INVALID_SELECTION))
                .hangup(),
        }
    }

    /// Check the code entered on the keypad
    pub fn handle_code_entry(&self, caller: &CallerId, digits: &str) -> VoiceResponse {
        let entered = normalize_digits(digits);
        if entered.is_empty() {
            return VoiceResponse::new()
                .say(self.say(prompts::NO_CODE_ENTERED))
                .hangup();
        }

        let outcome = self.store.verify(caller, &entered);
        tracing::info!(
            caller = %caller.masked(),
            channel = "voice",
            outcome = outcome.as_str(),
            event = "code_checked",
            "Keypad verification attempt"
        );

        match outcome {
            VerifyOutcome::Accepted => VoiceResponse::new()
                .say(self.say(prompts::VERIFICATION_SUCCESS))
                .hangup(),
            VerifyOutcome::Rejected { remaining_attempts: 0 } => VoiceResponse::new()
                .say(self.say(prompts::TOO_MANY_ATTEMPTS))
                .hangup(),
            VerifyOutcome::Rejected { remaining_attempts } => VoiceResponse::new()
                .say(self.say(prompts::incorrect_code(remaining_attempts)))
                .gather(self.code_gather())
                .say(self.say(prompts::NO_CODE_ENTERED))
                .hangup(),
            VerifyOutcome::Expired => VoiceResponse::new()
                .say(self.say(prompts::SESSION_EXPIRED))
                .hangup(),
            VerifyOutcome::NotFound => VoiceResponse::new()
                .say(self.say(prompts::NO_ACTIVE_SESSION))
                .hangup(),
        }
    }

    /// Answer an inbound text message
    ///
    /// Keywords are matched case-insensitively. A body made of exactly
    /// `code_length` digits is treated as a code submission.
    pub fn handle_incoming_sms(&self, sender: &CallerId, body: &str) -> MessagingResponse {
        let text = body.trim().to_lowercase();
        tracing::info!(
            caller = %sender.masked(),
            body_length = text.len(),
            event = "sms_received",
            "Business SMS received"
        );

        let reply = match text.as_str() {
            "help" | "support" => prompts::sms_help(&self.config.business_name),
            "status" => {
                if self.store.has_active(sender) {
                    prompts::SMS_PENDING.to_string()
                } else {
                    prompts::SMS_NOT_PENDING.to_string()
                }
            }
            candidate if self.looks_like_code(candidate) => self.verify_by_sms(sender, candidate),
            _ => prompts::sms_default(&self.config.business_name),
        };

        MessagingResponse::new().message(reply)
    }

    async fn send_code(&self, caller: &CallerId) -> VoiceResponse {
        let code = self.store.generate(caller);
        let message =
            prompts::verification_sms(&self.config.business_name, &code, self.store.config().code_ttl);

        match self.sms_service.send_sms(caller.as_str(), &message).await {
            Ok(message_id) => {
                tracing::info!(
                    caller = %caller.masked(),
                    message_id = %message_id,
                    provider = self.sms_service.provider_name(),
                    event = "code_sent",
                    "Verification SMS sent"
                );
                VoiceResponse::new()
                    .say(self.say(prompts::CODE_SENT))
                    .gather(self.code_gather())
                    .say(self.say(prompts::NO_CODE_ENTERED))
                    .hangup()
            }
            Err(e) => {
                tracing::error!(
                    caller = %caller.masked(),
                    provider = self.sms_service.provider_name(),
                    error = %e,
                    event = "code_delivery_failed",
                    "Failed to send verification SMS"
                );
                // An undelivered code must not stay redeemable
                self.store.invalidate(caller);
                VoiceResponse::new()
                    .say(self.say(prompts::TECHNICAL_DIFFICULTIES))
                    .hangup()
            }
        }
    }

    fn route_to_support(&self, caller: &CallerId) -> VoiceResponse {
        self.store.invalidate(caller);

        let response = VoiceResponse::new().say(self.say(prompts::HOLD_FOR_SUPPORT));
        match &self.config.support_number {
            Some(number) => {
                tracing::info!(
                    caller = %caller.masked(),
                    event = "support_transfer",
                    "Transferring caller to support"
                );
                response
                    .dial(number.clone(), Some(self.config.dial_timeout_seconds))
                    .hangup()
            }
            None => response.say(self.say(prompts::SUPPORT_UNAVAILABLE)).hangup(),
        }
    }

    fn verify_by_sms(&self, sender: &CallerId, code: &str) -> String {
        let outcome = self.store.verify(sender, code);
        tracing::info!(
            caller = %sender.masked(),
            channel = "sms",
            outcome = outcome.as_str(),
            event = "code_checked",
            "SMS verification attempt"
        );

        match outcome {
            VerifyOutcome::Accepted => prompts::sms_verified(&self.config.business_name),
            VerifyOutcome::Rejected { remaining_attempts: 0 } => {
                prompts::SMS_TOO_MANY_ATTEMPTS.to_string()
            }
            VerifyOutcome::Rejected { remaining_attempts } => {
                prompts::sms_incorrect_code(remaining_attempts)
            }
            VerifyOutcome::Expired => prompts::SMS_EXPIRED.to_string(),
            VerifyOutcome::NotFound => prompts::SMS_NOT_PENDING.to_string(),
        }
    }

    fn looks_like_code(&self, text: &str) -> bool {
        text.len() == self.store.config().code_length && text.bytes().all(|b| b.is_ascii_digit())
    }

    fn code_gather(&self) -> Gather {
        let code_length = self.store.config().code_length;
        Gather::new(code_length, &self.config.code_action, self.config.code_timeout_seconds)
            .say(self.say(prompts::enter_code(code_length)))
    }

    fn say(&self, text: impl Into<String>) -> Say {
        Say::new(text, &self.config.voice, &self.config.language)
    }
}

/// Keypad input without whitespace or the `#` terminator
fn normalize_digits(digits: &str) -> String {
    digits
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '#')
        .collect()
}

//! Business branding and support routing configuration

use serde::{Deserialize, Serialize};

use super::{env_opt, env_or};

/// Default business name used in prompts and SMS bodies
pub const DEFAULT_BUSINESS_NAME: &str = "Business Verification Services";

/// Branding and caller-facing voice settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BusinessConfig {
    /// Name announced in greetings and prefixed to SMS messages
    pub name: String,

    /// E.164 number of the human support line; when unset the support
    /// option announces that no representative is available
    #[serde(default)]
    pub support_number: Option<String>,

    /// Text-to-speech voice
    #[serde(default = "default_voice")]
    pub voice: String,

    /// Text-to-speech language tag
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_BUSINESS_NAME.to_string(),
            support_number: None,
            voice: default_voice(),
            language: default_language(),
        }
    }
}

impl BusinessConfig {
    /// Load from `BUSINESS_NAME`, `SUPPORT_PHONE_NUMBER`, `IVR_VOICE` and `IVR_LANGUAGE`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            name: env_opt("BUSINESS_NAME").unwrap_or(defaults.name),
            support_number: env_opt("SUPPORT_PHONE_NUMBER"),
            voice: env_or("IVR_VOICE", defaults.voice),
            language: env_or("IVR_LANGUAGE", defaults.language),
        }
    }
}

fn default_voice() -> String {
    String::from("alice")
}

fn default_language() -> String {
    String::from("en-US")
}

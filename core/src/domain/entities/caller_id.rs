//! Caller identity used as the verification lookup key.

use std::fmt;

use ivr_shared::phone::mask_phone_number;

use crate::errors::ValidationError;

/// Longest identifier accepted from a webhook
pub const MAX_IDENTIFIER_LENGTH: usize = 64;

/// A validated, non-empty caller identifier (usually the E.164 `From` number)
///
/// Calls and SMS from the same handset share one identifier, so a code
/// requested over voice can be confirmed by text and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallerId(String);

impl CallerId {
    /// Parse a raw webhook value into a caller identifier
    ///
    /// Surrounding whitespace is trimmed. Empty values, values longer than
    /// [`MAX_IDENTIFIER_LENGTH`] and values containing control characters or
    /// inner whitespace are rejected.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "identifier".to_string(),
            });
        }
        if trimmed.len() > MAX_IDENTIFIER_LENGTH {
            return Err(ValidationError::InvalidLength {
                field: "identifier".to_string(),
                max: MAX_IDENTIFIER_LENGTH,
                actual: trimmed.len(),
            });
        }
        if trimmed.chars().any(|c| c.is_control() || c.is_whitespace()) {
            return Err(ValidationError::InvalidFormat {
                field: "identifier".to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The identifier as stored
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Log-safe rendering
    pub fn masked(&self) -> String {
        mask_phone_number(&self.0)
    }
}

impl AsRef<str> for CallerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for CallerId {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

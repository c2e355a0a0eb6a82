//! Result of checking a submitted verification code.

use serde::{Deserialize, Serialize};

/// Outcome of a verification attempt
///
/// Every store-level condition is reported as a value; the caller decides the
/// prompt to play or text to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum VerifyOutcome {
    /// The code matched and has been consumed
    Accepted,
    /// The code did not match; zero remaining means the code was revoked
    Rejected { remaining_attempts: u32 },
    /// The code existed but its lifetime elapsed; it has been removed
    Expired,
    /// No live code for this caller
    NotFound,
}

impl VerifyOutcome {
    /// Short label for structured logs
    pub fn as_str(&self) -> &'static str {
        match self {
            VerifyOutcome::Accepted => "accepted",
            VerifyOutcome::Rejected { .. } => "rejected",
            VerifyOutcome::Expired => "expired",
            VerifyOutcome::NotFound => "not_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_serialized_tag() {
        for outcome in [
            VerifyOutcome::Accepted,
            VerifyOutcome::Rejected { remaining_attempts: 1 },
            VerifyOutcome::Expired,
            VerifyOutcome::NotFound,
        ] {
            let json = serde_json::to_value(outcome).unwrap();
            assert_eq!(json["result"], outcome.as_str());
        }
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_value(VerifyOutcome::Rejected { remaining_attempts: 2 }).unwrap();
        assert_eq!(json["result"], "rejected");
        assert_eq!(json["remaining_attempts"], 2);

        let json = serde_json::to_value(VerifyOutcome::NotFound).unwrap();
        assert_eq!(json["result"], "not_found");
    }
}

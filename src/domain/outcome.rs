use serde::Serialize;

/// Abstract classification of a failed charge attempt, decoupled from the
/// gateway's own error vocabulary.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed parameters or a bad/missing credential.
    InvalidRequest,
    /// The gateway rejected the card itself (bad number, decline, expiry).
    CardError,
    /// A gateway failure outside the recognized categories (network error,
    /// server error, rate limit). Deliberately not folded into the other
    /// kinds; callers that care must match on it explicitly.
    Unknown,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::InvalidRequest => "invalid_request",
            Self::CardError => "card_error",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// The result of one charge attempt: a sequence of error kinds where the
/// empty sequence means success. Callers must treat any non-empty value as
/// a hard failure for that attempt.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Default)]
pub struct AttemptOutcome(Vec<ErrorKind>);

impl AttemptOutcome {
    pub fn success() -> Self {
        Self(Vec::new())
    }

    pub fn failure(kind: ErrorKind) -> Self {
        Self(vec![kind])
    }

    pub fn is_success(&self) -> bool {
        self.0.is_empty()
    }

    pub fn kinds(&self) -> &[ErrorKind] {
        &self.0
    }
}

impl std::fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return f.write_str("ok");
        }
        let kinds: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&kinds.join(","))
    }
}

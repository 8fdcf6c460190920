use serde::Deserialize;

/// Success payload returned by the gateway for a completed charge.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct ChargeReceipt {
    pub id: String,
    pub amount: Option<i64>,
    pub currency: Option<String>,
    #[serde(default)]
    pub paid: bool,
}

/// The typed failure surface of the payment gateway.
///
/// A gateway adapter reports every failed charge through one of these
/// variants; nothing else escapes it. The classifier collapses this into
/// an [`ErrorKind`](super::outcome::ErrorKind).
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum GatewayFailure {
    /// The credential was rejected (missing, empty, or invalid key).
    Authentication { message: String },
    /// The gateway judged the request malformed (missing amount, bad
    /// currency, and so on).
    InvalidRequest {
        param: Option<String>,
        message: String,
    },
    /// The card itself was rejected.
    Card {
        code: Option<String>,
        decline_code: Option<String>,
        message: String,
    },
    /// Any other non-success response from the gateway.
    Api { status: u16, message: String },
    /// The gateway could not be reached at all.
    Network { message: String },
}

impl std::fmt::Display for GatewayFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Authentication { message } => write!(f, "authentication failed: {message}"),
            Self::InvalidRequest { param, message } => match param {
                Some(param) => write!(f, "invalid request ({param}): {message}"),
                None => write!(f, "invalid request: {message}"),
            },
            Self::Card { code, message, .. } => match code {
                Some(code) => write!(f, "card rejected ({code}): {message}"),
                None => write!(f, "card rejected: {message}"),
            },
            Self::Api { status, message } => write!(f, "gateway error ({status}): {message}"),
            Self::Network { message } => write!(f, "gateway unreachable: {message}"),
        }
    }
}

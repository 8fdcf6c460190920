use super::gateway::GatewayFailure;
use super::outcome::ErrorKind;

/// Maps the gateway's failure surface onto the closed [`ErrorKind`] set.
///
/// Pure and total: credential and malformed-request failures become
/// `InvalidRequest`, card rejections become `CardError`, and anything the
/// gateway reports outside those categories (server errors, transport
/// failures) is surfaced as `Unknown` rather than guessed into a kind.
pub fn classify(failure: &GatewayFailure) -> ErrorKind {
    match failure {
        GatewayFailure::Authentication { .. } | GatewayFailure::InvalidRequest { .. } => {
            ErrorKind::InvalidRequest
        }
        GatewayFailure::Card { .. } => ErrorKind::CardError,
        GatewayFailure::Api { .. } | GatewayFailure::Network { .. } => ErrorKind::Unknown,
    }
}

use super::gateway::{ChargeReceipt, GatewayFailure};
use super::request::ChargeRequest;
use async_trait::async_trait;

/// The outbound port to the payment processor.
///
/// Implementations own transport, authentication, and the translation of
/// the processor's error surface into [`GatewayFailure`]. They must not
/// validate the request locally; the processor is the single source of
/// truth for what is acceptable.
#[async_trait]
pub trait ChargeGateway: Send + Sync {
    async fn charge(&self, request: &ChargeRequest) -> Result<ChargeReceipt, GatewayFailure>;
}

/// The outbound port for the post-charge confirmation notification.
///
/// Fire and forget: no return value is consumed, so a failing notifier is
/// unobservable to the charge flow.
#[async_trait]
pub trait ThankYouNotifier: Send + Sync {
    async fn send(&self, email: &str, name: &str);
}

pub type ChargeGatewayBox = Box<dyn ChargeGateway>;
pub type ThankYouNotifierBox = Box<dyn ThankYouNotifier>;

use crate::domain::classify::classify;
use crate::domain::outcome::AttemptOutcome;
use crate::domain::ports::{ChargeGatewayBox, ThankYouNotifierBox};
use crate::domain::request::ChargeRequest;

/// Orchestrates a single charge attempt.
///
/// `Payment` owns the gateway and notifier ports and normalizes every
/// possible outcome of a charge into an [`AttemptOutcome`]. It performs no
/// validation of its own: the request is forwarded as-is and the gateway's
/// verdict is final.
pub struct Payment {
    gateway: ChargeGatewayBox,
    notifier: ThankYouNotifierBox,
}

impl Payment {
    pub fn new(gateway: ChargeGatewayBox, notifier: ThankYouNotifierBox) -> Self {
        Self { gateway, notifier }
    }

    /// Attempts the charge exactly once.
    ///
    /// Never returns an error to the caller: gateway failures are
    /// classified into the outcome. On success the thank-you notification
    /// is sent, once, before this method returns; no notification is sent
    /// on any failure path.
    pub async fn attempt(&self, request: &ChargeRequest) -> AttemptOutcome {
        match self.gateway.charge(request).await {
            Ok(receipt) => {
                tracing::info!(charge_id = %receipt.id, "charge succeeded");
                self.notifier
                    .send(
                        request.email.as_deref().unwrap_or_default(),
                        request.name.as_deref().unwrap_or_default(),
                    )
                    .await;
                AttemptOutcome::success()
            }
            Err(failure) => {
                let kind = classify(&failure);
                tracing::warn!(%failure, %kind, "charge failed");
                AttemptOutcome::failure(kind)
            }
        }
    }
}

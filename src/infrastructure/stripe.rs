use crate::config::GatewayConfig;
use crate::domain::gateway::{ChargeReceipt, GatewayFailure};
use crate::domain::ports::ChargeGateway;
use crate::domain::request::ChargeRequest;
use crate::error::Result;
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;

/// Gateway adapter for the Stripe charges API.
///
/// Posts form-encoded charges to `{base_url}/v1/charges` with bearer auth
/// and translates Stripe's error envelope into [`GatewayFailure`]. The
/// credential is sent as configured, even when empty or malformed; Stripe
/// owns credential validation.
pub struct StripeGateway {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl StripeGateway {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    fn form_params(request: &ChargeRequest) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        let mut push = |key, value: &Option<String>| {
            if let Some(value) = value {
                params.push((key, value.clone()));
            }
        };
        push("amount", &request.amount);
        push("currency", &request.currency);
        push("card[number]", &request.card_number);
        push("card[cvc]", &request.cvc);
        push("card[exp_month]", &request.exp_month);
        push("card[exp_year]", &request.exp_year);
        params
    }
}

#[async_trait]
impl ChargeGateway for StripeGateway {
    async fn charge(&self, request: &ChargeRequest) -> std::result::Result<ChargeReceipt, GatewayFailure> {
        let url = self
            .config
            .base_url
            .join("v1/charges")
            .map_err(|e| GatewayFailure::Network {
                message: format!("invalid charge URL: {e}"),
            })?;

        let response = self
            .http
            .post(url)
            .bearer_auth(self.config.api_key.expose_secret())
            .form(&Self::form_params(request))
            .send()
            .await
            .map_err(|e| GatewayFailure::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(|e| GatewayFailure::Api {
                status: status.as_u16(),
                message: format!("unreadable charge response: {e}"),
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(failure_from_response(status.as_u16(), &body))
        }
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(rename = "type")]
    kind: Option<String>,
    code: Option<String>,
    decline_code: Option<String>,
    param: Option<String>,
    message: Option<String>,
}

/// Maps a non-success Stripe response onto the gateway failure surface.
///
/// Responses that do not carry a parseable error envelope (proxies, server
/// errors with plain-text bodies) fall through to `Api`.
fn failure_from_response(status: u16, body: &str) -> GatewayFailure {
    let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) else {
        return GatewayFailure::Api {
            status,
            message: body.chars().take(200).collect(),
        };
    };

    let error = envelope.error;
    let message = error.message.unwrap_or_default();
    match error.kind.as_deref() {
        Some("authentication_error") => GatewayFailure::Authentication { message },
        Some("invalid_request_error") => GatewayFailure::InvalidRequest {
            param: error.param,
            message,
        },
        Some("card_error") => GatewayFailure::Card {
            code: error.code,
            decline_code: error.decline_code,
            message,
        },
        _ => GatewayFailure::Api { status, message },
    }
}

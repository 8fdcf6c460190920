use crate::error::{ChargeError, Result};
use secrecy::SecretString;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";

/// Credentials and endpoint for the payment gateway.
///
/// The credential is injected explicitly at construction time rather than
/// read from ambient process state by the charge path; `from_env` is the
/// one place the environment is consulted. An empty or garbage key is a
/// valid config: it is still sent to the gateway, whose rejection is the
/// source of truth.
#[derive(Clone)]
pub struct GatewayConfig {
    pub api_key: SecretString,
    pub base_url: Url,
}

impl GatewayConfig {
    pub fn new(api_key: impl Into<String>, base_url: Url) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            base_url,
        }
    }

    /// Reads `STRIPE_API_KEY` (missing means empty, not an error) and an
    /// optional `STRIPE_API_BASE` override.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("STRIPE_API_KEY").unwrap_or_default();
        let base = std::env::var("STRIPE_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let base_url = Url::parse(&base)
            .map_err(|e| ChargeError::ConfigError(format!("invalid STRIPE_API_BASE: {e}")))?;
        Ok(Self::new(api_key, base_url))
    }
}

use serde::Deserialize;

/// A single charge to attempt against the payment gateway.
///
/// Every field is optional: the gateway owns validation, so a request is
/// constructible with any subset of fields (including none) and the
/// gateway's rejection is what surfaces missing data.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct ChargeRequest {
    /// Amount in the smallest currency unit, e.g. "1000" for $10.00.
    pub amount: Option<String>,
    /// ISO currency code, e.g. "usd".
    pub currency: Option<String>,
    pub card_number: Option<String>,
    pub cvc: Option<String>,
    /// 4-digit expiry year.
    pub exp_year: Option<String>,
    /// 2-digit expiry month.
    pub exp_month: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
}

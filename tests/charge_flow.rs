use onecharge::application::payment::Payment;
use onecharge::config::GatewayConfig;
use onecharge::domain::outcome::ErrorKind;
use onecharge::domain::request::ChargeRequest;
use onecharge::infrastructure::mailer::RecordingNotifier;
use onecharge::infrastructure::stripe::StripeGateway;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn payment_against(server_uri: &str, api_key: &str) -> (Payment, RecordingNotifier) {
    let config = GatewayConfig::new(api_key, Url::parse(server_uri).unwrap());
    let gateway = StripeGateway::new(config).unwrap();
    let notifier = RecordingNotifier::new();
    (
        Payment::new(Box::new(gateway), Box::new(notifier.clone())),
        notifier,
    )
}

fn valid_request() -> ChargeRequest {
    ChargeRequest {
        amount: Some("1000".to_string()),
        currency: Some("usd".to_string()),
        card_number: Some("4242424242424242".to_string()),
        cvc: Some("123".to_string()),
        exp_year: Some("2020".to_string()),
        exp_month: Some("01".to_string()),
        email: Some("user@example.com".to_string()),
        name: Some("Name".to_string()),
    }
}

fn authentication_error() -> ResponseTemplate {
    ResponseTemplate::new(401).set_body_json(json!({
        "error": {
            "type": "authentication_error",
            "message": "Invalid API Key provided"
        }
    }))
}

#[tokio::test]
async fn empty_api_key_yields_invalid_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/charges"))
        .respond_with(authentication_error())
        .expect(1)
        .mount(&server)
        .await;

    let (payment, notifier) = payment_against(&server.uri(), "");
    let outcome = payment.attempt(&ChargeRequest::default()).await;

    assert_eq!(outcome.kinds(), &[ErrorKind::InvalidRequest]);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn malformed_api_key_yields_invalid_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/charges"))
        .and(header("authorization", "Bearer aaaaa"))
        .respond_with(authentication_error())
        .expect(1)
        .mount(&server)
        .await;

    let (payment, _) = payment_against(&server.uri(), "aaaaa");
    let outcome = payment.attempt(&ChargeRequest::default()).await;

    assert_eq!(outcome.kinds(), &[ErrorKind::InvalidRequest]);
}

#[tokio::test]
async fn valid_key_without_parameters_yields_invalid_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/charges"))
        .and(header("authorization", "Bearer sk_test_valid"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "type": "invalid_request_error",
                "param": "amount",
                "message": "Missing required param: amount."
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (payment, notifier) = payment_against(&server.uri(), "sk_test_valid");
    let outcome = payment.attempt(&ChargeRequest::default()).await;

    assert_eq!(outcome.kinds(), &[ErrorKind::InvalidRequest]);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn invalid_card_number_yields_card_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/charges"))
        .and(body_string_contains("1235424242424242"))
        .respond_with(ResponseTemplate::new(402).set_body_json(json!({
            "error": {
                "type": "card_error",
                "code": "incorrect_number",
                "message": "Your card number is incorrect."
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = ChargeRequest {
        card_number: Some("1235424242424242".to_string()),
        email: Some("irrelevant".to_string()),
        name: Some("irrelevant".to_string()),
        ..valid_request()
    };
    let (payment, notifier) = payment_against(&server.uri(), "sk_test_valid");
    let outcome = payment.attempt(&request).await;

    assert_eq!(outcome.kinds(), &[ErrorKind::CardError]);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn valid_parameters_yield_empty_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/charges"))
        .and(header("authorization", "Bearer sk_test_valid"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("amount=1000"))
        .and(body_string_contains("currency=usd"))
        .and(body_string_contains("card%5Bnumber%5D=4242424242424242"))
        .and(body_string_contains("card%5Bexp_month%5D=01"))
        .and(body_string_contains("card%5Bexp_year%5D=2020"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ch_1",
            "amount": 1000,
            "currency": "usd",
            "paid": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (payment, _) = payment_against(&server.uri(), "sk_test_valid");
    let outcome = payment.attempt(&valid_request()).await;

    assert!(outcome.is_success());
}

#[tokio::test]
async fn successful_charge_sends_thank_you_exactly_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/charges"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ch_1",
            "paid": true
        })))
        .mount(&server)
        .await;

    let (payment, notifier) = payment_against(&server.uri(), "sk_test_valid");
    payment.attempt(&valid_request()).await;

    assert_eq!(
        notifier.sent(),
        vec![("user@example.com".to_string(), "Name".to_string())]
    );
}

#[tokio::test]
async fn repeated_attempts_are_not_deduplicated() {
    // Designed behavior: no idempotency, two attempts mean two charges.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/charges"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ch_1",
            "paid": true
        })))
        .expect(2)
        .mount(&server)
        .await;

    let (payment, notifier) = payment_against(&server.uri(), "sk_test_valid");
    let request = valid_request();
    assert!(payment.attempt(&request).await.is_success());
    assert!(payment.attempt(&request).await.is_success());

    assert_eq!(notifier.sent().len(), 2);
}

#[tokio::test]
async fn server_error_yields_unknown_not_a_panic() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/charges"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal server error"))
        .mount(&server)
        .await;

    let (payment, notifier) = payment_against(&server.uri(), "sk_test_valid");
    let outcome = payment.attempt(&valid_request()).await;

    assert_eq!(outcome.kinds(), &[ErrorKind::Unknown]);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn unreachable_gateway_yields_unknown() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let (payment, notifier) = payment_against(&uri, "sk_test_valid");
    let outcome = payment.attempt(&valid_request()).await;

    assert_eq!(outcome.kinds(), &[ErrorKind::Unknown]);
    assert!(notifier.sent().is_empty());
}

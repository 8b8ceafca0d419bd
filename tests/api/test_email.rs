use crate::helpers::{spawn_app, spawn_app_with, TEST_RECIPIENT};
use email_service::routes::{ErrorBody, TestEmailResponse};
use wiremock::matchers::any;
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_email_defaults_to_the_configured_recipient() {
    // arrange
    let app = spawn_app().await;
    app.provider_accepts("abc123").await;

    // act
    let response = app.post_test_email(&serde_json::json!({})).await;

    // assert
    assert_eq!(200, response.status().as_u16());
    let body: TestEmailResponse = response.json().await.unwrap();
    assert_eq!(body.message, format!("Test email sent to {}", TEST_RECIPIENT));
    assert_eq!(body.data.id, "abc123");

    let payloads = app.sent_payloads().await;
    assert_eq!(payloads[0]["to"], serde_json::json!([TEST_RECIPIENT]));
    assert!(payloads[0]["html"]
        .as_str()
        .unwrap()
        .contains("Hello Test User!"));
}

#[tokio::test]
async fn test_email_accepts_an_empty_body() {
    // arrange
    let app = spawn_app().await;
    app.provider_accepts("abc123").await;

    // act
    let response = app
        .api_client
        .post(&format!("{}/api/test-email", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    // assert
    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn test_email_goes_to_the_requested_address() {
    // arrange
    let app = spawn_app().await;
    app.provider_accepts("abc123").await;

    // act
    let response = app
        .post_test_email(&serde_json::json!({
            "email": "ursula_le_guin@gmail.com",
            "firstName": "Ursula"
        }))
        .await;

    // assert
    assert_eq!(200, response.status().as_u16());
    let payloads = app.sent_payloads().await;
    assert_eq!(payloads[0]["to"], serde_json::json!(["ursula_le_guin@gmail.com"]));
    assert!(payloads[0]["html"].as_str().unwrap().contains("Hello Ursula!"));
}

#[tokio::test]
async fn test_email_returns_a_400_without_any_recipient() {
    // arrange
    let app = spawn_app_with(|c| c.application.test_recipient = None).await;

    // act
    let response = app.post_test_email(&serde_json::json!({})).await;

    // assert
    assert_eq!(400, response.status().as_u16());
    let body: ErrorBody = response.json().await.unwrap();
    assert!(!body.success);
}

#[tokio::test]
async fn test_email_returns_a_500_when_the_provider_fails() {
    // arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // act
    let response = app.post_test_email(&serde_json::json!({})).await;

    // assert
    assert_eq!(500, response.status().as_u16());
}

#[tokio::test]
async fn test_email_returns_a_400_for_a_malformed_body_and_sends_nothing() {
    // arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;
    let test_cases = vec![
        (r#"{"email": "someone@else.com""#, "truncated JSON"),
        (r#"{"email": 5}"#, "a non-string email"),
        ("not json at all", "plain text"),
    ];

    for (invalid_body, description) in test_cases {
        // act
        let response = app
            .api_client
            .post(&format!("{}/api/test-email", &app.address))
            .header("Content-Type", "application/json")
            .body(invalid_body)
            .send()
            .await
            .expect("Failed to execute request.");

        // assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
        let body: ErrorBody = response.json().await.unwrap();
        assert!(!body.success);
    }
    assert!(app.sent_payloads().await.is_empty());
}

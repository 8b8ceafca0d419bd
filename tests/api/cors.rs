use crate::helpers::spawn_app;
use email_service::routes::ErrorBody;

#[tokio::test]
async fn responses_allow_any_origin() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app
        .api_client
        .get(&format!("{}/health", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    // assert
    assert_eq!(
        response
            .headers()
            .get("Access-Control-Allow-Origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn preflight_requests_are_answered() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app
        .api_client
        .request(
            reqwest::Method::OPTIONS,
            &format!("{}/api/send-email", &app.address),
        )
        .send()
        .await
        .expect("Failed to execute request.");

    // assert
    assert_eq!(204, response.status().as_u16());
    assert!(response
        .headers()
        .contains_key("Access-Control-Allow-Methods"));
}

#[tokio::test]
async fn unknown_endpoints_return_a_json_404() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app
        .api_client
        .get(&format!("{}/api/unknown", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    // assert
    assert_eq!(404, response.status().as_u16());
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.error, "Endpoint not found");
    assert!(!body.success);
}

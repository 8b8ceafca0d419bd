use crate::configuration::ApplicationSettings;
use crate::content::ContentGenerator;
use crate::domain::{EmailMessage, SendError};
use crate::email::DeliveryClient;
use crate::guards::JsonOrDefault;
use crate::routes::{error_response, send_error_status};
use crate::telemetry::error_chain_fmt;
use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use rocket::{Request, State};
use uuid::Uuid;

const TEST_DISPLAY_NAME: &str = "Test User";

#[derive(serde::Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TestEmailBody {
    email: Option<String>,
    first_name: Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct TestEmailId {
    pub id: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct TestEmailResponse {
    pub success: bool,
    pub message: String,
    pub data: TestEmailId,
}

#[derive(thiserror::Error)]
pub enum TestEmailError {
    #[error("No recipient given and no test recipient is configured")]
    NoRecipient,
    #[error(transparent)]
    SendFailed(#[from] SendError),
}

impl std::fmt::Debug for TestEmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl<'r> Responder<'r, 'static> for TestEmailError {
    fn respond_to(self, request: &'r Request<'_>) -> rocket::response::Result<'static> {
        tracing::warn!("TestEmailError: {:?}", self);
        let status = match &self {
            TestEmailError::NoRecipient => Status::BadRequest,
            TestEmailError::SendFailed(e) => send_error_status(e),
        };
        error_response(request, status, self.to_string())
    }
}

/// Sends a welcome email, to the configured test recipient unless the body names one.
///
/// An empty body uses every default; a malformed one is rejected.
#[tracing::instrument(
    name = "Sending a test email",
    skip(body, settings, content_generator, delivery_client),
    fields(request_id = %Uuid::new_v4())
)]
#[post("/api/test-email", data = "<body>")]
pub async fn send_test_email(
    body: JsonOrDefault<TestEmailBody>,
    settings: &State<ApplicationSettings>,
    content_generator: &State<ContentGenerator>,
    delivery_client: &State<DeliveryClient>,
) -> Result<Json<TestEmailResponse>, TestEmailError> {
    let JsonOrDefault(body) = body;
    let recipient = body
        .email
        .filter(|email| !email.trim().is_empty())
        .or_else(|| settings.test_recipient.clone())
        .ok_or(TestEmailError::NoRecipient)?;
    let display_name = body.first_name.as_deref().unwrap_or(TEST_DISPLAY_NAME);

    let content = content_generator.welcome_email(&recipient, Some(display_name));
    let message = EmailMessage::new(recipient.clone(), content.subject, content.html);
    let id = Result::<String, SendError>::from(delivery_client.send(message).await)?;

    Ok(Json(TestEmailResponse {
        success: true,
        message: format!("Test email sent to {}", recipient),
        data: TestEmailId { id },
    }))
}

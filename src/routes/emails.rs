use crate::content::{ContentGenerator, EmailContent};
use crate::domain::{EmailMessage, EmailRequest, EmailRequestError, SendEmailBody, SendError};
use crate::email::DeliveryClient;
use crate::routes::{error_response, send_error_status};
use crate::telemetry::error_chain_fmt;
use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use rocket::{Request, State};
use uuid::Uuid;

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct SentEmail {
    pub id: String,
    pub to: String,
    pub subject: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct SendEmailResponse {
    pub success: bool,
    pub data: SentEmail,
}

#[derive(thiserror::Error)]
pub enum SendEmailError {
    #[error(transparent)]
    InvalidRequest(#[from] EmailRequestError),
    #[error(transparent)]
    SendFailed(#[from] SendError),
}

impl std::fmt::Debug for SendEmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl<'r> Responder<'r, 'static> for SendEmailError {
    fn respond_to(self, request: &'r Request<'_>) -> rocket::response::Result<'static> {
        tracing::warn!("SendEmailError: {:?}", self);
        let status = match &self {
            SendEmailError::InvalidRequest(_) => Status::BadRequest,
            SendEmailError::SendFailed(e) => send_error_status(e),
        };
        error_response(request, status, self.to_string())
    }
}

#[tracing::instrument(
    name = "Sending an email on request",
    skip(body, content_generator, delivery_client),
    fields(
        request_id = %Uuid::new_v4(),
        email_type = ?body.kind(),
    )
)]
#[post("/api/send-email", data = "<body>")]
pub async fn send_email(
    body: Json<SendEmailBody>,
    content_generator: &State<ContentGenerator>,
    delivery_client: &State<DeliveryClient>,
) -> Result<Json<SendEmailResponse>, SendEmailError> {
    let request: EmailRequest = body.into_inner().try_into()?;
    let (recipient, content) = match request {
        EmailRequest::Welcome {
            recipient,
            first_name,
        } => {
            let content = content_generator.welcome_email(&recipient, first_name.as_deref());
            (recipient, content)
        }
        EmailRequest::Custom {
            recipient,
            subject,
            html,
        } => (recipient, EmailContent { subject, html }),
    };

    let message = EmailMessage::new(recipient.clone(), content.subject.clone(), content.html);
    let id = Result::<String, SendError>::from(delivery_client.send(message).await)?;

    Ok(Json(SendEmailResponse {
        success: true,
        data: SentEmail {
            id,
            to: recipient,
            subject: content.subject,
        },
    }))
}

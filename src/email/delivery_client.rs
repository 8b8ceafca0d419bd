use crate::content::strip_html_to_plain_text;
use crate::domain::{EmailMessage, Envelope, SendError, SendResult, SenderIdentity};
use crate::email::{EmailProvider, ProviderPayload};
use std::sync::Arc;

/// Validates messages and hands them to an [`EmailProvider`], one call per send.
///
/// No retries are attempted; callers needing them wrap `send` themselves.
#[derive(Clone)]
pub struct DeliveryClient {
    provider: Arc<dyn EmailProvider>,
    default_sender: SenderIdentity,
}

impl DeliveryClient {
    pub fn new(provider: Arc<dyn EmailProvider>, default_sender: SenderIdentity) -> Self {
        Self {
            provider,
            default_sender,
        }
    }

    pub fn default_sender(&self) -> &SenderIdentity {
        &self.default_sender
    }

    #[tracing::instrument(
        name = "Delivering an email",
        skip(self, message),
        fields(
            recipient = %message.recipient,
            provider = self.provider.name(),
        )
    )]
    pub async fn send(&self, message: EmailMessage) -> SendResult {
        let result = self.try_send(message).await;
        match &result {
            Ok(provider_message_id) => {
                tracing::info!(%provider_message_id, "Email accepted by the provider");
            }
            Err(SendError::Validation(e)) => {
                tracing::warn!(error.message = %e, "Refusing to send an incomplete email");
            }
            Err(e @ SendError::Delivery(_)) => {
                tracing::error!(error.cause_chain = ?e, error.message = %e, "Failed to deliver email");
            }
        }
        result.into()
    }

    async fn try_send(&self, message: EmailMessage) -> Result<String, SendError> {
        let envelope = Envelope::try_from(message)?;
        let payload = self.payload(&envelope);
        let response = self.provider.send(&payload).await?;
        Ok(response.id)
    }

    fn payload(&self, envelope: &Envelope) -> ProviderPayload {
        let from = envelope
            .sender_override()
            .map(str::to_string)
            .unwrap_or_else(|| self.default_sender.to_string());
        ProviderPayload {
            from,
            to: vec![envelope.recipient().to_string()],
            subject: envelope.subject().to_string(),
            html: envelope.html_body().to_string(),
            text: strip_html_to_plain_text(envelope.html_body()),
        }
    }
}

mod delivery_client;
mod resend_client;

pub use delivery_client::DeliveryClient;
pub use resend_client::ResendClient;

use async_trait::async_trait;

/// The body handed to a provider for a single send.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ProviderPayload {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// What a provider hands back on acceptance.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ProviderResponse {
    pub id: String,
}

#[derive(thiserror::Error, Debug)]
pub enum DeliveryError {
    /// The provider answered, but refused the message.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// A transactional email API.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, payload: &ProviderPayload) -> Result<ProviderResponse, DeliveryError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

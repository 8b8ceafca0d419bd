use crate::configuration::EmailClientSettings;
use crate::email::{DeliveryError, EmailProvider, ProviderPayload, ProviderResponse};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

/// Sends email through the Resend HTTP API.
pub struct ResendClient {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ResendClient {
    pub fn new(
        base_url: String,
        api_key: Secret<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http_client: builder.build()?,
            base_url,
            api_key,
        })
    }

    pub fn from_settings(settings: &EmailClientSettings) -> Result<Self, reqwest::Error> {
        Self::new(
            settings.base_url.clone(),
            settings.api_key.clone(),
            settings.timeout(),
        )
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl EmailProvider for ResendClient {
    #[tracing::instrument(name = "Calling the Resend API", skip(self, payload))]
    async fn send(&self, payload: &ProviderPayload) -> Result<ProviderResponse, DeliveryError> {
        let response = self
            .http_client
            .post(&self.emails_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(payload)
            .send()
            .await
            .context("Failed to send a request to the email provider.")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("The email provider responded with {}.", status));
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let accepted = response
            .json::<ProviderResponse>()
            .await
            .context("Failed to decode the email provider response.")?;
        Ok(accepted)
    }

    fn name(&self) -> &'static str {
        "resend"
    }
}

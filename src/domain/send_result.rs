use crate::domain::ValidationError;
use crate::email::DeliveryError;
use crate::telemetry::error_chain_fmt;

/// Outcome of a single delivery attempt. Failures are data, never panics.
#[derive(Debug)]
pub enum SendResult {
    Success { provider_message_id: String },
    Failure(SendError),
}

#[derive(thiserror::Error)]
pub enum SendError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

impl std::fmt::Debug for SendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl SendResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SendResult::Success { .. })
    }

    pub fn provider_message_id(&self) -> Option<&str> {
        match self {
            SendResult::Success {
                provider_message_id,
            } => Some(provider_message_id),
            SendResult::Failure(_) => None,
        }
    }

    /// Human-readable failure reason, safe to hand back to callers.
    pub fn error_message(&self) -> Option<String> {
        match self {
            SendResult::Success { .. } => None,
            SendResult::Failure(e) => Some(e.to_string()),
        }
    }
}

impl From<Result<String, SendError>> for SendResult {
    fn from(result: Result<String, SendError>) -> Self {
        match result {
            Ok(provider_message_id) => SendResult::Success {
                provider_message_id,
            },
            Err(e) => SendResult::Failure(e),
        }
    }
}

impl From<SendResult> for Result<String, SendError> {
    fn from(result: SendResult) -> Self {
        match result {
            SendResult::Success {
                provider_message_id,
            } => Ok(provider_message_id),
            SendResult::Failure(e) => Err(e),
        }
    }
}

/// One email a caller wants delivered.
///
/// Nothing is checked on construction; [`Envelope::try_from`] does the
/// validation right before a send.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub recipient: String,
    pub subject: String,
    pub html_body: String,
    pub sender_override: Option<String>,
}

impl EmailMessage {
    pub fn new(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        html_body: impl Into<String>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
            html_body: html_body.into(),
            sender_override: None,
        }
    }

    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender_override = Some(sender.into());
        self
    }
}

/// A message whose required fields are known to be present.
#[derive(Debug)]
pub struct Envelope {
    recipient: String,
    subject: String,
    html_body: String,
    sender_override: Option<String>,
}

impl Envelope {
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn html_body(&self) -> &str {
        &self.html_body
    }

    pub fn sender_override(&self) -> Option<&str> {
        self.sender_override.as_deref()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

impl TryFrom<EmailMessage> for Envelope {
    type Error = ValidationError;

    fn try_from(message: EmailMessage) -> Result<Self, Self::Error> {
        let missing: Vec<&'static str> = [
            ("recipient", &message.recipient),
            ("subject", &message.subject),
            ("html_body", &message.html_body),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        // An empty override means "use the default sender".
        let sender_override = message
            .sender_override
            .filter(|sender| !sender.trim().is_empty());

        Ok(Self {
            recipient: message.recipient,
            subject: message.subject,
            html_body: message.html_body,
            sender_override,
        })
    }
}

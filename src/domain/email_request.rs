use serde_json::Value;

/// JSON body accepted by `/api/send-email`.
///
/// Kept as a raw value so that any JSON shape reaches [`EmailRequest::try_from`]
/// and gets a specific error message.
#[derive(serde::Deserialize, Debug, Default)]
#[serde(transparent)]
pub struct SendEmailBody(pub Value);

impl SendEmailBody {
    /// The `type` field, if present.
    pub fn kind(&self) -> Option<&Value> {
        self.0.get("type")
    }
}

/// Which content to send, and to whom.
#[derive(Debug, PartialEq, Eq)]
pub enum EmailRequest {
    Welcome {
        recipient: String,
        first_name: Option<String>,
    },
    Custom {
        recipient: String,
        subject: String,
        html: String,
    },
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EmailRequestError {
    #[error("Missing required fields: type, data.to")]
    MissingFields,
    #[error("Custom emails require subject and html fields")]
    IncompleteCustomEmail,
    #[error("Invalid email type. Use \"welcome\" or \"custom\"")]
    UnknownKind(String),
}

/// A non-blank string field; any other JSON type counts as absent.
fn string_field(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

impl TryFrom<SendEmailBody> for EmailRequest {
    type Error = EmailRequestError;

    fn try_from(body: SendEmailBody) -> Result<Self, Self::Error> {
        let kind = body.kind();
        let data = body.0.get("data");
        let recipient = string_field(data.and_then(|data| data.get("to")));
        let recipient = match (is_present(kind), recipient) {
            (true, Some(recipient)) => recipient,
            _ => return Err(EmailRequestError::MissingFields),
        };
        let field = |name: &str| string_field(data.and_then(|data| data.get(name)));

        match kind.and_then(Value::as_str) {
            Some("welcome") => Ok(EmailRequest::Welcome {
                recipient,
                first_name: field("firstName"),
            }),
            Some("custom") => match (field("subject"), field("html")) {
                (Some(subject), Some(html)) => Ok(EmailRequest::Custom {
                    recipient,
                    subject,
                    html,
                }),
                _ => Err(EmailRequestError::IncompleteCustomEmail),
            },
            Some(other) => Err(EmailRequestError::UnknownKind(other.to_string())),
            None => Err(EmailRequestError::UnknownKind(
                kind.map(Value::to_string).unwrap_or_default(),
            )),
        }
    }
}

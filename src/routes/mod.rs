mod emails;
mod health_check;
mod test_emails;

pub use emails::*;
pub use health_check::*;
pub use test_emails::*;

use crate::domain::SendError;
use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use rocket::{Request, Response};

/// JSON body of every failed API call.
#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ErrorBody {
    pub fn json(error: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: false,
            error: error.into(),
        })
    }
}

/// Incomplete messages are the caller's fault, provider trouble is ours.
fn send_error_status(e: &SendError) -> Status {
    match e {
        SendError::Validation(_) => Status::BadRequest,
        SendError::Delivery(_) => Status::InternalServerError,
    }
}

fn error_response<'r>(
    request: &'r Request<'_>,
    status: Status,
    message: String,
) -> rocket::response::Result<'static> {
    Response::build_from(ErrorBody::json(message).respond_to(request)?)
        .status(status)
        .ok()
}

use crate::routes::ErrorBody;
use rocket::serde::json::Json;
use rocket::Request;

#[catch(500)]
pub fn internal_error_to_json(req: &Request) -> Json<ErrorBody> {
    tracing::error!(uri = %req.uri(), "Unhandled server error");
    ErrorBody::json("Internal server error")
}

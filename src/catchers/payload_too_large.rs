use crate::routes::ErrorBody;
use rocket::serde::json::Json;
use rocket::Request;

#[catch(413)]
pub fn payload_too_large_to_json(_req: &Request) -> Json<ErrorBody> {
    ErrorBody::json("Request body is too large")
}

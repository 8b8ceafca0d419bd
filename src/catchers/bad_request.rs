use crate::routes::ErrorBody;
use rocket::serde::json::Json;
use rocket::Request;

#[catch(400)]
pub fn bad_request_to_json(_req: &Request) -> Json<ErrorBody> {
    ErrorBody::json("Request body is not valid JSON")
}

use crate::routes::ErrorBody;
use rocket::serde::json::Json;
use rocket::Request;

#[catch(404)]
pub fn not_found_to_json(req: &Request) -> Json<ErrorBody> {
    tracing::debug!(uri = %req.uri(), "No route matched");
    ErrorBody::json("Endpoint not found")
}

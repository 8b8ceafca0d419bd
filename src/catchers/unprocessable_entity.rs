use crate::routes::ErrorBody;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::Request;

/// Bodies that parse as JSON but have the wrong shape are still bad requests.
#[catch(422)]
pub fn unprocessable_entity_to_bad_request(_req: &Request) -> status::Custom<Json<ErrorBody>> {
    status::Custom(
        Status::BadRequest,
        ErrorBody::json("Request body has an invalid shape"),
    )
}

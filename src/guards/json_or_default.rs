use rocket::data::{self, Data, FromData, Limits};
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::Request;
use serde::de::DeserializeOwned;

/// A JSON body where an empty body means `T::default()`.
///
/// Anything else that is not valid JSON for `T` is rejected, like `Json<T>` does.
#[derive(Debug)]
pub struct JsonOrDefault<T>(pub T);

#[derive(thiserror::Error, Debug)]
pub enum JsonBodyError {
    #[error("Failed to read the request body")]
    Io(#[from] std::io::Error),
    #[error("Request body is too large")]
    TooLarge,
    #[error("Request body is not valid JSON")]
    Parse(#[from] serde_json::Error),
}

#[rocket::async_trait]
impl<'r, T> FromData<'r> for JsonOrDefault<T>
where
    T: DeserializeOwned + Default + Send,
{
    type Error = JsonBodyError;

    async fn from_data(req: &'r Request<'_>, data: Data<'r>) -> data::Outcome<'r, Self> {
        match from_data_result(req, data).await {
            Ok(body) => Outcome::Success(JsonOrDefault(body)),
            Err(e @ JsonBodyError::TooLarge) => Outcome::Error((Status::PayloadTooLarge, e)),
            Err(e) => Outcome::Error((Status::BadRequest, e)),
        }
    }
}

async fn from_data_result<'r, T>(req: &'r Request<'_>, data: Data<'r>) -> Result<T, JsonBodyError>
where
    T: DeserializeOwned + Default,
{
    let limit = req.limits().get("json").unwrap_or(Limits::JSON);
    let body = data.open(limit).into_string().await?;
    if !body.is_complete() {
        return Err(JsonBodyError::TooLarge);
    }

    let body = body.into_inner();
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(serde_json::from_str(&body)?)
}

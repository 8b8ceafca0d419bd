use crate::email::DeliveryClient;
use chrono::{SecondsFormat, Utc};
use rocket::serde::json::Json;
use rocket::State;

const SERVICE_NAME: &str = "Resend Email Service";

#[derive(serde::Serialize)]
pub struct Health {
    status: &'static str,
    timestamp: String,
    service: &'static str,
    version: &'static str,
    domain: Option<String>,
}

#[get("/health")]
pub fn health(delivery_client: &State<DeliveryClient>) -> Json<Health> {
    Json(Health {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        domain: delivery_client
            .default_sender()
            .domain()
            .map(str::to_string),
    })
}

use crate::catchers::*;
use crate::configuration::Settings;
use crate::content::ContentGenerator;
use crate::cors::{preflight, Cors};
use crate::email::{DeliveryClient, EmailProvider};
use crate::port_saver;
use crate::port_saver::Port;
use crate::routes::*;
use rocket::data::{Limits, ToByteUnit};
use rocket::{Config, Ignite, Rocket};
use std::sync::Arc;

pub struct Application {
    pub server: Rocket<Ignite>,
    pub port: Port,
}

impl Application {
    /// Wires configuration and the provider into an ignited server.
    ///
    /// A missing `application.port` binds a random one, readable through `port`.
    pub async fn build(
        configuration: &Settings,
        provider: Arc<dyn EmailProvider>,
    ) -> Result<Self, rocket::Error> {
        let (port_saver, port) = port_saver::create_pair();
        let delivery_client = DeliveryClient::new(provider, configuration.email_client.sender());
        let content_generator = ContentGenerator::new(configuration.application.site_url.clone());

        let limits = match configuration.application.json_limit_kib {
            Some(kib) => Limits::default().limit("json", kib.kibibytes()),
            None => Limits::default(),
        };

        let server = rocket::custom(Config {
            address: configuration.application.host,
            port: configuration.application.port.unwrap_or(0),
            limits,
            ..Config::debug_default()
        })
        .attach(port_saver)
        .attach(Cors)
        .manage(configuration.application.clone())
        .manage(content_generator)
        .manage(delivery_client)
        .mount("/", routes![health, send_email, send_test_email, preflight])
        .register(
            "/",
            catchers![
                bad_request_to_json,
                not_found_to_json,
                payload_too_large_to_json,
                unprocessable_entity_to_bad_request,
                internal_error_to_json
            ],
        )
        .ignite()
        .await?;

        Ok(Self { server, port })
    }
}

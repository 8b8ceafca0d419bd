use anyhow::{anyhow, Context};
use email_service::configuration::get_configuration;
use email_service::email::ResendClient;
use email_service::startup::Application;
use email_service::telemetry::{get_subscriber, init_subscriber};
use std::sync::Arc;

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("email-service".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let provider = ResendClient::from_settings(&configuration.email_client)
        .context("Failed to build the email provider client.")?;

    // rocket::Error must be displayed before it is dropped.
    let application = Application::build(&configuration, Arc::new(provider))
        .await
        .map_err(|e| anyhow!("Failed to build the server: {}", e))?;
    application
        .server
        .launch()
        .await
        .map_err(|e| anyhow!("Server error: {}", e))?;
    Ok(())
}

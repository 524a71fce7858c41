//! main.rs

use anyhow::Context;
use leadsparks::configuration::get_configuration;
use leadsparks::startup::Application;
use leadsparks::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("leadsparks".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration file.")?;
    let application = Application::build(&configuration).await?;
    tracing::info!("Waitlist service listening on port {}", application.port());
    application.run_until_stopped().await?;
    Ok(())
}

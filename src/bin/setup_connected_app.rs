//! Create, inspect or remove the Fuse Connected App in a Salesforce org.
//!
//! ```sh
//! export SF_METADATA_URL='https://na1.salesforce.com/services/Soap/m/39.0/00D...'
//! export SF_SESSION_ID='00D...!AQ...'
//! cargo run --bin setup-connected-app            # setup (default)
//! cargo run --bin setup-connected-app -- status
//! cargo run --bin setup-connected-app -- delete
//! ```
//!
//! `SF_BRANDING_FILE` may point at a JSON document overriding the default
//! branding (`clientId`, `appName`, `contactEmail`, `description`,
//! `infoUrl`, `callbackUrl`).

use anyhow::{bail, Context};
use fuse_sf_metadata::Branding;
use fuse_sf_setup::Setup;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let command = std::env::args().nth(1).unwrap_or_else(|| "setup".to_string());

    let metadata_url = required_env("SF_METADATA_URL")?;
    let session_id = required_env("SF_SESSION_ID")?;
    let branding = load_branding()?;
    let app_name = branding.app_name.clone();

    let setup = Setup::with_branding(metadata_url, session_id, branding)
        .context("Failed to create Metadata client")?;

    match command.as_str() {
        "setup" => {
            println!("Setting up Connected App {app_name}...");
            let app = setup.setup().await.context("Connected App setup failed")?;
            println!("  consumer key:    {}", app.consumer_key);
            println!("  consumer secret: {}", app.consumer_secret);
        }
        "status" => {
            let exists = setup.is_setup().await.context("Failed to list Connected Apps")?;
            if exists {
                println!("Connected App {app_name} is set up");
            } else {
                println!("Connected App {app_name} is not set up");
            }
        }
        "delete" => {
            setup.teardown().await.context("Failed to delete Connected App")?;
            println!("Connected App {app_name} deleted");
        }
        other => bail!("unknown command '{other}' (expected setup, status or delete)"),
    }

    Ok(())
}

fn required_env(name: &str) -> anyhow::Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => bail!("{name} environment variable is not set"),
    }
}

fn load_branding() -> anyhow::Result<Branding> {
    let Ok(path) = std::env::var("SF_BRANDING_FILE") else {
        return Ok(Branding::default());
    };

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read branding file {path}"))?;
    serde_json::from_str(&contents).with_context(|| format!("Invalid branding file {path}"))
}

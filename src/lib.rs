//! # fuse-sf-setup
//!
//! Sets up the Fuse Connected App in a Salesforce org through the Metadata
//! SOAP API.
//!
//! The caller brings an authenticated session (the Metadata API SOAP
//! endpoint and a session id); this crate never refreshes or validates it.
//!
//! ## Security
//!
//! - Session ids and consumer secrets are redacted in Debug output
//! - Tracing spans skip credential parameters
//! - Every interpolated value is XML-escaped before it reaches the envelope
//!
//! ## Crates
//!
//! - **fuse-sf-client** - HTTP plumbing: configuration, one-shot SOAP POST, XML escaping
//! - **fuse-sf-metadata** - Credentials, envelopes, operation invoker, Connected App manager
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fuse_sf_setup::Setup;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let setup = Setup::new(metadata_url, session_id)?;
//!
//!     if !setup.is_setup().await? {
//!         let app = setup.setup().await?;
//!         println!("consumer key: {}", app.consumer_key);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub use fuse_sf_client as client;
pub use fuse_sf_metadata as metadata;

use fuse_sf_metadata::{
    Branding, ConnectedApp, ConnectedAppManager, ConnectedAppOptions, MetadataClient, Result,
};

/// Entry point used by hosting pages: perform the setup, or ask whether it
/// has been performed.
#[derive(Debug, Clone)]
pub struct Setup {
    manager: ConnectedAppManager,
}

impl Setup {
    /// Set up the default-branded app through the given session.
    pub fn new(metadata_url: impl Into<String>, session_id: impl Into<String>) -> Result<Self> {
        Self::with_branding(metadata_url, session_id, Branding::default())
    }

    /// Set up the app described by `branding`.
    pub fn with_branding(
        metadata_url: impl Into<String>,
        session_id: impl Into<String>,
        branding: Branding,
    ) -> Result<Self> {
        let client = MetadataClient::from_parts(metadata_url, session_id)?;
        Ok(Self {
            manager: ConnectedAppManager::with_branding(client, branding),
        })
    }

    /// Wrap an already configured manager.
    pub fn from_manager(manager: ConnectedAppManager) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &ConnectedAppManager {
        &self.manager
    }

    /// Create the Connected App with generated credentials.
    pub async fn setup(&self) -> Result<ConnectedApp> {
        self.manager
            .create_connected_app(ConnectedAppOptions::default())
            .await
    }

    /// Create the Connected App with caller-chosen credentials.
    pub async fn setup_with(&self, options: ConnectedAppOptions) -> Result<ConnectedApp> {
        self.manager.create_connected_app(options).await
    }

    /// Whether the Connected App exists.
    pub async fn is_setup(&self) -> Result<bool> {
        self.manager.connected_app_exists().await
    }

    /// Remove the Connected App.
    pub async fn teardown(&self) -> Result<()> {
        self.manager.delete_connected_app().await
    }
}

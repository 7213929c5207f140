//! # fuse-sf-metadata
//!
//! Salesforce Metadata SOAP API client for managing the Fuse Connected App.
//!
//! ## Features
//!
//! - **Credentials** - Consumer key and 20-digit secret from an injectable random source
//! - **Envelopes** - Session-authenticated SOAP envelopes and operation payloads
//! - **Invocation** - One POST per operation with transport and SOAP-level failure classification
//! - **Connected App** - Existence check, delete, and delete-then-create setup
//!
//! ## Example
//!
//! ```rust,ignore
//! use fuse_sf_metadata::{ConnectedAppManager, ConnectedAppOptions, MetadataClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), fuse_sf_metadata::Error> {
//!     let client = MetadataClient::from_parts(
//!         "https://na1.salesforce.com/services/Soap/m/39.0",
//!         session_id,
//!     )?;
//!     let manager = ConnectedAppManager::new(client);
//!
//!     if !manager.connected_app_exists().await? {
//!         let app = manager.create_connected_app(ConnectedAppOptions::default()).await?;
//!         println!("consumer key: {}", app.consumer_key);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod branding;
mod client;
mod connected_app;
mod credentials;
mod envelope;
mod error;
mod types;
mod xml_helpers;

pub use branding::Branding;
pub use client::{classify_response, MetadataClient};
pub use connected_app::{ConnectedAppManager, SetupState};
pub use credentials::{generate_key, generate_secret, OsRandom, RandomSource, CONSUMER_KEY_BYTES};
pub use envelope::{
    build_envelope, create_connected_app_body, delete_metadata_body, list_metadata_body,
};
pub use error::{Error, ErrorKind, Result};
pub use types::{
    ConnectedApp, ConnectedAppOptions, EnvelopeFault, SessionContext, SoapFault,
    CONNECTED_APP_TYPE, DEFAULT_API_VERSION, METADATA_NS, OAUTH_SCOPES, SOAP_ENVELOPE_NS,
};
pub use xml_helpers::extract_node_values;

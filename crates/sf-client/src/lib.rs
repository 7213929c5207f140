//! # fuse-sf-client
//!
//! HTTP plumbing shared by the Salesforce SOAP callers in this workspace.
//!
//! This crate provides:
//! - A configurable HTTP client ([`SfHttpClient`]) that performs exactly one
//!   POST per call, with no retry and no connection reuse
//! - Raw response capture ([`SoapResponse`]) so callers can classify status
//!   and body themselves
//! - XML escaping for values interpolated into SOAP envelopes
//!
//! ## Example
//!
//! ```rust,ignore
//! use fuse_sf_client::{ClientConfig, SfHttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), fuse_sf_client::Error> {
//!     let client = SfHttpClient::new(ClientConfig::default())?;
//!     let response = client
//!         .post_soap("https://na1.salesforce.com/services/Soap/m/39.0", "listMetadata", envelope)
//!         .await?;
//!
//!     println!("{} {}", response.status, response.status_text);
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod response;
pub mod security;

pub use client::SfHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use response::SoapResponse;

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("fuse-sf-setup/", env!("CARGO_PKG_VERSION"));

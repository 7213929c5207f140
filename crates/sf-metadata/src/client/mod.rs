//! Metadata API client.

use fuse_sf_client::SfHttpClient;

use crate::branding::CLIENT_ID;
use crate::error::Result;
use crate::types::SessionContext;

mod invoke;

pub use invoke::classify_response;

/// Salesforce Metadata API SOAP client bound to one session.
#[derive(Debug, Clone)]
pub struct MetadataClient {
    session: SessionContext,
    client_id: String,
    http_client: SfHttpClient,
}

impl MetadataClient {
    /// Create a new Metadata API client for a session.
    ///
    /// The endpoint must be an absolute URL; the session id is used as is.
    pub fn new(session: SessionContext) -> Result<Self> {
        url::Url::parse(&session.endpoint_url)?;

        Ok(Self {
            session,
            client_id: CLIENT_ID.to_string(),
            http_client: SfHttpClient::default_client()?,
        })
    }

    /// Create a new Metadata API client from the SOAP endpoint URL and session id.
    pub fn from_parts(endpoint_url: impl Into<String>, session_id: impl Into<String>) -> Result<Self> {
        Self::new(SessionContext::new(endpoint_url, session_id))
    }

    /// Set the client identifier sent in `CallOptions`.
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    /// Set a custom HTTP client.
    pub fn with_http_client(mut self, client: SfHttpClient) -> Self {
        self.http_client = client;
        self
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_client_creation() {
        let client = MetadataClient::from_parts("https://na1.salesforce.com/services/Soap/m/39.0", "token123").unwrap();
        assert_eq!(client.client_id(), "JBoss Fuse");
        assert_eq!(client.session().session_id, "token123");
    }

    #[test]
    fn test_client_with_client_id() {
        let client = MetadataClient::from_parts("https://metadata.url", "sessionId")
            .unwrap()
            .with_client_id("Acme Integration");
        assert_eq!(client.client_id(), "Acme Integration");
    }

    #[test]
    fn test_relative_endpoint_rejected() {
        let err = MetadataClient::from_parts("/services/Soap/m/39.0", "sessionId").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Config(_)));
    }

    #[test]
    fn test_debug_hides_session_id() {
        let client = MetadataClient::from_parts("https://metadata.url", "super-secret-session").unwrap();
        assert!(!format!("{client:?}").contains("super-secret-session"));
    }
}

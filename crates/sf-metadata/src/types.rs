//! Common types for the Metadata API.

use serde::{Deserialize, Serialize};

/// Metadata API version used for `listMetadata` queries.
pub const DEFAULT_API_VERSION: &str = "39.0";

/// SOAP 1.1 envelope namespace.
pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Salesforce Metadata API namespace.
pub const METADATA_NS: &str = "http://soap.sforce.com/2006/04/metadata";

/// XML Schema instance namespace, used for `xsi:type` on created metadata.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Metadata type name of a Connected App.
pub const CONNECTED_APP_TYPE: &str = "ConnectedApp";

/// OAuth scopes requested for the Connected App.
pub const OAUTH_SCOPES: &[&str] = &["Api", "RefreshToken", "OfflineAccess"];

/// Endpoint and session a client talks to.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub endpoint_url: String,
    pub session_id: String,
}

impl SessionContext {
    pub fn new(endpoint_url: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            session_id: session_id.into(),
        }
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("endpoint_url", &self.endpoint_url)
            .field("session_id", &"[REDACTED]")
            .finish()
    }
}

/// OAuth credentials of a created Connected App.
///
/// These are the values sent in `createMetadata`, not values echoed back
/// by the server.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedApp {
    pub consumer_key: String,
    pub consumer_secret: String,
}

impl std::fmt::Debug for ConnectedApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectedApp")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .finish()
    }
}

/// Caller overrides for Connected App creation.
///
/// A missing or empty value is generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedAppOptions {
    pub consumer_key: Option<String>,
    pub consumer_secret: Option<String>,
}

impl ConnectedAppOptions {
    pub fn with_consumer_key(mut self, key: impl Into<String>) -> Self {
        self.consumer_key = Some(key.into());
        self
    }

    pub fn with_consumer_secret(mut self, secret: impl Into<String>) -> Self {
        self.consumer_secret = Some(secret.into());
        self
    }

    pub(crate) fn consumer_key(&self) -> Option<&str> {
        self.consumer_key.as_deref().filter(|k| !k.is_empty())
    }

    pub(crate) fn consumer_secret(&self) -> Option<&str> {
        self.consumer_secret.as_deref().filter(|s| !s.is_empty())
    }
}

/// Failure reported inside a 2xx SOAP response (`success=false`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoapFault {
    pub status_code: String,
    pub message: String,
}

impl std::fmt::Display for SoapFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status_code, self.message)
    }
}

impl std::error::Error for SoapFault {}

/// Envelope-level fault (`faultcode`/`faultstring`) sent with an error status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeFault {
    pub fault_code: String,
    pub fault_string: String,
}

impl std::fmt::Display for EnvelopeFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SOAP Fault: {} - {}", self.fault_code, self.fault_string)
    }
}

impl std::error::Error for EnvelopeFault {}

//! Core HTTP client for one-shot SOAP calls.

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::response::SoapResponse;

/// SOAP Action header name.
const SOAP_ACTION_HEADER: &str = "SOAPAction";

/// Content type for SOAP 1.1 requests.
const SOAP_CONTENT_TYPE: &str = "text/xml";

/// HTTP client for Salesforce SOAP endpoints.
///
/// Every call is a single POST; there is no retry and idle connections
/// are not kept for reuse.
#[derive(Debug, Clone)]
pub struct SfHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl SfHttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(0)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// POST a SOAP envelope and read the whole response.
    ///
    /// Non-2xx statuses are returned as a normal [`SoapResponse`]; only
    /// failures to send the request or read the body are errors.
    #[instrument(skip(self, envelope), fields(url = %url))]
    pub async fn post_soap(&self, url: &str, action: &str, envelope: String) -> Result<SoapResponse> {
        if self.config.enable_tracing {
            debug!(action, body_len = envelope.len(), "Sending SOAP request");
        }

        let response = self
            .inner
            .post(url)
            .header(CONTENT_TYPE, SOAP_CONTENT_TYPE)
            .header(SOAP_ACTION_HEADER, action)
            .body(envelope)
            .send()
            .await?;

        let status = response.status();
        let status_text = reason_phrase(&response);
        let body = response.text().await?;

        if self.config.enable_tracing {
            if status.is_success() {
                debug!(status = status.as_u16(), body_len = body.len(), "Response received");
            } else {
                info!(status = status.as_u16(), body_len = body.len(), "Non-success response");
            }
        }

        Ok(SoapResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}

/// The reason phrase sent by the server, or the canonical one for the status.
fn reason_phrase(response: &reqwest::Response) -> String {
    match response.extensions().get::<hyper::ext::ReasonPhrase>() {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

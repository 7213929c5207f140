use fuse_sf_client::SoapResponse;
use tracing::{debug, instrument, warn};

use crate::envelope::build_envelope;
use crate::error::{Error, ErrorKind, Result};
use crate::types::SoapFault;
use crate::xml_helpers::{extract_node_values, parse_envelope_fault};

impl super::MetadataClient {
    /// Invoke a Metadata API SOAP operation.
    ///
    /// `body_xml` is the operation payload; it is wrapped in the session
    /// envelope and POSTed once with `SOAPAction: <action>`. Resolves with the
    /// raw response text when both the HTTP status and the SOAP result
    /// report success.
    #[instrument(skip(self, body_xml), fields(endpoint = %self.session.endpoint_url))]
    pub async fn invoke(&self, action: &str, body_xml: &str) -> Result<String> {
        let envelope = build_envelope(&self.session.session_id, &self.client_id, body_xml);

        let response = self
            .http_client
            .post_soap(&self.session.endpoint_url, action, envelope)
            .await?;

        classify_response(response)
    }
}

/// Decide whether a SOAP response is a success.
///
/// A status outside 200-299 is a transport failure. A 2xx response fails
/// when it has `<success>` elements and none of them is `true`; a response
/// with no `<success>` element at all counts as success, as does a body
/// that is not well-formed XML.
pub fn classify_response(response: SoapResponse) -> Result<String> {
    let success = response.is_success();
    let SoapResponse {
        status,
        status_text,
        body,
    } = response;

    if !success {
        let kind = ErrorKind::Transport {
            status,
            status_text,
        };
        return Err(match parse_envelope_fault(&body) {
            Some(fault) => {
                warn!(status, fault = %fault, "SOAP call rejected");
                Error::with_source(kind, fault)
            }
            None => {
                warn!(status, "SOAP call rejected");
                Error::new(kind)
            }
        });
    }

    let successes = match extract_node_values(&body, "success") {
        Ok(values) => values,
        Err(e) => {
            warn!(status, error = %e, "Response body is not well-formed XML");
            return Ok(body);
        }
    };
    if successes.is_empty() || successes.iter().any(|s| s.trim() == "true") {
        debug!(status, results = successes.len(), "SOAP call succeeded");
        return Ok(body);
    }

    let fault = SoapFault {
        status_code: join_or(extract_node_values(&body, "statusCode")?, "UNKNOWN"),
        message: join_or(extract_node_values(&body, "message")?, "Unknown error"),
    };
    warn!(status_code = %fault.status_code, "SOAP operation reported failure");

    Err(Error::new(ErrorKind::SoapFault(fault)))
}

fn join_or(values: Vec<String>, fallback: &str) -> String {
    let values: Vec<&str> = values.iter().map(|v| v.trim()).collect();
    if values.is_empty() {
        fallback.to_string()
    } else {
        values.join(", ")
    }
}

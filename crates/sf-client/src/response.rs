//! Raw HTTP response capture.

/// Status line and body of a SOAP call, read in full.
///
/// The status is not interpreted here; callers decide what counts as
/// success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapResponse {
    /// HTTP status code.
    pub status: u16,
    /// Reason phrase for the status code (empty when the code has none).
    pub status_text: String,
    /// Response body as text.
    pub body: String,
}

impl SoapResponse {
    /// Returns true for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

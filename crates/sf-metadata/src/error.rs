//! Error types for sf-metadata.

use crate::types::SoapFault;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    pub fn with_source(kind: ErrorKind, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self { kind, source: Some(Box::new(source)) }
    }

    /// Returns true if the endpoint answered with a non-2xx status.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport { .. })
    }

    /// Returns true if the endpoint answered 2xx but reported `success=false`.
    pub fn is_soap_fault(&self) -> bool {
        matches!(self.kind, ErrorKind::SoapFault(_))
    }

    /// The SOAP-level fault, if this is one.
    pub fn soap_fault(&self) -> Option<&SoapFault> {
        match &self.kind {
            ErrorKind::SoapFault(fault) => Some(fault),
            _ => None,
        }
    }

    /// The HTTP status of a transport failure.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("Unable to create Connected App: {status}: {status_text}")]
    Transport { status: u16, status_text: String },
    #[error("{0}")]
    SoapFault(SoapFault),
    #[error("Client error: {0}")]
    Client(String),
    #[error("XML parse error: {0}")]
    Parse(String),
    #[error("Random source error: {0}")]
    Random(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<fuse_sf_client::Error> for Error {
    fn from(err: fuse_sf_client::Error) -> Self {
        Error { kind: ErrorKind::Client(err.to_string()), source: Some(Box::new(err)) }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error { kind: ErrorKind::Parse(err.to_string()), source: Some(Box::new(err)) }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error { kind: ErrorKind::Config(format!("invalid endpoint URL: {err}")), source: Some(Box::new(err)) }
    }
}

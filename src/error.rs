//! Error types shared by all handlers.
//!
//! Every failure surfaces as a plain-text HTTP response carrying the
//! raw error string: client-input problems map to 400, everything
//! else to 500. There are no structured error codes and no retries.

use hyper::StatusCode;
use thiserror::Error;

/// Errors that can occur while serving a request or starting a server.
#[derive(Debug, Error)]
pub enum Error {
    /// Request used an HTTP method the handler does not accept.
    #[error("Bad Request")]
    MethodNotAllowed,

    /// Multipart body was malformed or could not be read.
    #[error("multipart error: {0}")]
    Multipart(#[from] multer::Error),

    /// Multipart submission did not contain a `file` part.
    #[error("missing file part in multipart form")]
    MissingFilePart,

    /// Request body was not a multipart form at all.
    #[error("expected a multipart/form-data request")]
    NotMultipart,

    /// Template load, parse, or render failure.
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    /// Urlencoded form body could not be decoded.
    #[error("form decode error: {0}")]
    FormDecode(#[from] serde_urlencoded::de::Error),

    /// Filesystem or network I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status this error maps to.
    ///
    /// Client-input errors (wrong method, bad multipart, missing
    /// required part) are 400; template, form-decode, and I/O
    /// failures are 500.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed | Self::Multipart(_) | Self::MissingFilePart | Self::NotMultipart => {
                StatusCode::BAD_REQUEST
            }
            Self::Template(_) | Self::FormDecode(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

//! Error types for the requests client.
//!
//! # Design
//! Every failure falls into one of three kinds: the request could not be
//! constructed, the transport failed, or the body could not be decoded.
//! `Error::kind` exposes that classification so callers can branch without
//! matching on individual variants. Nothing in this crate retries.

use std::io;

/// Boxed cause carried by option and transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by `Client`, `Request` and `Body` operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A request option rejected the request. `index` is the option's
    /// position in the list handed to `Request::apply`.
    #[error("request option #{index} failed: {source}")]
    RequestOption {
        index: usize,
        #[source]
        source: BoxError,
    },

    /// The request could not be turned into a transport request, e.g. a
    /// malformed URL or an invalid header name.
    #[error("building {method} {url}: {source}")]
    Build {
        method: String,
        url: String,
        #[source]
        source: http::Error,
    },

    /// The transport failed before a response was received.
    #[error("{method} {url}: {source}")]
    Transport {
        method: String,
        url: String,
        #[source]
        source: BoxError,
    },

    /// Reading the response body failed.
    #[error("reading body: {0}")]
    Io(#[from] io::Error),

    /// The response body was not valid JSON for the requested type.
    #[error("decoding JSON body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Coarse classification of an `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raised before any network I/O.
    Construction,
    /// Network or stream failure.
    Transport,
    /// JSON decode failure.
    Decode,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::RequestOption { .. } | Error::Build { .. } => ErrorKind::Construction,
            Error::Transport { .. } | Error::Io(_) => ErrorKind::Transport,
            // The stream failed underneath the decoder.
            Error::Decode(e) if e.is_io() => ErrorKind::Transport,
            Error::Decode(_) => ErrorKind::Decode,
        }
    }
}

//! Blocking HTTP client with functional request options.
//!
//! # Overview
//! `Client::get` and `Client::post` build a `Request`, apply the caller's
//! `RequestOption`s in order and send it through a `Transport`. The
//! resulting `Response` exposes the `Status`, the headers and a streaming
//! `Body` that can decode one JSON value at a time.
//!
//! ```no_run
//! use requests_core::{with_header, Client};
//!
//! let client = Client::new();
//! let mut resp = client.get(
//!     "https://httpbin.org/get",
//!     vec![with_header("Accept", "application/json")],
//! )?;
//! if resp.is_success() {
//!     let value: serde_json::Value = resp.json()?;
//!     println!("{value}");
//! }
//! # Ok::<(), requests_core::Error>(())
//! ```
//!
//! # Design
//! - Types are plain data with public fields; behavior lives in free
//!   functions and small delegating methods.
//! - The network is behind the `Transport` trait. The default transport uses
//!   `ureq` and does not follow redirects.
//! - Nothing retries. Every failure is returned as an `Error` whose `kind`
//!   says whether it happened while building, sending or decoding.

pub mod body;
pub mod client;
pub mod config;
pub mod error;
pub mod header;
pub mod request;
pub mod response;
pub mod status;
pub mod transport;

pub use body::{Body, ResponseBody};
pub use client::Client;
pub use config::ClientConfig;
pub use error::{BoxError, Error, ErrorKind, Result};
pub use header::{combined_value, to_mapping, Header};
pub use request::{with_header, Request, RequestBody, RequestOption};
pub use response::Response;
pub use status::{Band, Status};
pub use transport::{ReasonPhrase, Transport, UreqTransport};

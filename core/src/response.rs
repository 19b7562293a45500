//! Responses returned by `Client`.
//!
//! A `Response` keeps the `Request` that produced it (its body already sent),
//! the status, the headers and the unread body. Delegating methods cover the
//! common checks so callers rarely need to reach into the fields.

use serde::de::DeserializeOwned;

use crate::body::Body;
use crate::error::Result;
use crate::header::{combined_value, Header};
use crate::request::Request;
use crate::status::Status;

#[derive(Debug)]
pub struct Response {
    pub request: Request,
    pub status: Status,
    pub headers: Vec<Header>,
    pub body: Body,
}

impl Response {
    /// All values of header `key` joined with `,`, or an empty string when
    /// the response does not carry it.
    pub fn header(&self, key: &str) -> String {
        combined_value(&self.headers, key)
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn is_error(&self) -> bool {
        self.status.is_error()
    }

    /// Decodes the next JSON value from the body; see `Body::json`.
    pub fn json<T: DeserializeOwned>(&mut self) -> Result<T> {
        self.body.json()
    }

    /// Releases the body stream.
    pub fn close(&mut self) {
        self.body.close();
    }
}

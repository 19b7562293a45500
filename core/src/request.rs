//! Outbound requests and the functional options that customise them.
//!
//! # Design
//! A `Request` is plain data: `Client::get`/`Client::post` create the base
//! value, then every `RequestOption` mutates it in order. An option is a
//! boxed `FnOnce` so callers can write their own without implementing a
//! trait. Application is fail-fast: the first failing option aborts the
//! build and nothing is dispatched.

use std::fmt;
use std::io::Read;

use crate::error::{BoxError, Error, Result};
use crate::header::Header;

/// Byte stream sent as a request body.
pub type RequestBody = Box<dyn Read + Send>;

/// A mutator applied to a request before it is dispatched.
pub type RequestOption = Box<dyn FnOnce(&mut Request) -> Result<(), BoxError>>;

/// An HTTP request described as data.
pub struct Request {
    pub method: String,
    pub url: String,
    pub headers: Vec<Header>,
    /// Taken by the transport when the request is dispatched.
    pub body: Option<RequestBody>,
}

impl Request {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new("GET", url)
    }

    pub fn post(url: impl Into<String>, body: impl Read + Send + 'static) -> Self {
        Self {
            body: Some(Box::new(body)),
            ..Self::new("POST", url)
        }
    }

    /// Applies `options` in order, stopping at the first failure.
    ///
    /// Mutations made by options before the failing one are left in place.
    pub fn apply(&mut self, options: Vec<RequestOption>) -> Result<()> {
        for (index, option) in options.into_iter().enumerate() {
            log::trace!("applying option #{index} to {} {}", self.method, self.url);
            option(self).map_err(|source| Error::RequestOption { index, source })?;
        }
        Ok(())
    }

    /// Combined value of the request header `key`; see `header::combined_value`.
    pub fn header(&self, key: &str) -> String {
        crate::header::combined_value(&self.headers, key)
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &self.headers)
            .field("body", &self.body.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Appends a header entry with a single value.
///
/// Never merges with an existing entry of the same key; repeated calls add
/// repeated entries, which are folded together when the request is sent.
pub fn with_header(key: impl Into<String>, value: impl Into<String>) -> RequestOption {
    let header = Header::new(key, value);
    Box::new(move |request: &mut Request| {
        request.headers.push(header);
        Ok(())
    })
}

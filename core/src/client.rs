//! Blocking HTTP client built from functional options.
//!
//! # Design
//! `Client` owns no connection state of its own. Each call builds a
//! `Request`, applies the caller's options, converts the result into an
//! `http::Request` and hands it to a `Transport`. The response is adapted
//! back into plain data with the body left unread; the caller decides
//! whether to stream it, decode it or drop it.
//!
//! The transport is either injected or created on first use from
//! `ClientConfig`. A created transport belongs to that `Client` alone.

use std::io::Read;
use std::sync::{Arc, OnceLock};

use crate::body::{Body, ResponseBody};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::header::Header;
use crate::request::{Request, RequestBody, RequestOption};
use crate::response::Response;
use crate::status::Status;
use crate::transport::{ReasonPhrase, Transport, UreqTransport};

/// Synchronous HTTP client.
///
/// Cheap to share: wrap it in an `Arc` to use it from several threads.
#[derive(Default)]
pub struct Client {
    config: ClientConfig,
    transport: OnceLock<Arc<dyn Transport>>,
}

impl Client {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            config,
            transport: OnceLock::new(),
        }
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            config: ClientConfig::default(),
            transport: OnceLock::from(transport),
        }
    }

    /// Issues a GET to `url`.
    pub fn get(&self, url: &str, options: Vec<RequestOption>) -> Result<Response> {
        let mut request = Request::get(url);
        request.apply(options)?;
        self.execute(request)
    }

    /// Issues a POST to `url` with `body` as the request body.
    pub fn post(
        &self,
        url: &str,
        body: impl Read + Send + 'static,
        options: Vec<RequestOption>,
    ) -> Result<Response> {
        let mut request = Request::post(url, body);
        request.apply(options)?;
        self.execute(request)
    }

    /// Sends `request` and returns the response with its body unread.
    ///
    /// Non-2xx statuses are not errors; check `Response::is_success`.
    pub fn execute(&self, mut request: Request) -> Result<Response> {
        let native = native_request(&mut request)?;

        log::debug!("{} {}", request.method, request.url);
        let response = self
            .transport()
            .round_trip(native)
            .map_err(|source| Error::Transport {
                method: request.method.clone(),
                url: request.url.clone(),
                source,
            })?;

        let response = adapt(request, response);
        log::debug!(
            "{} {} -> {}",
            response.request.method,
            response.request.url,
            response.status
        );
        Ok(response)
    }

    fn transport(&self) -> &Arc<dyn Transport> {
        self.transport.get_or_init(|| {
            log::trace!("creating default transport: {:?}", self.config);
            Arc::new(UreqTransport::new(&self.config))
        })
    }
}

/// Converts `request` into the transport's request type, moving its body.
fn native_request(request: &mut Request) -> Result<http::Request<Option<RequestBody>>> {
    let mut builder = http::Request::builder()
        .method(request.method.as_str())
        .uri(request.url.as_str());

    // Appending in list order keeps repeated fields in the order the
    // options added them, including keys that differ only by case.
    for header in &request.headers {
        for value in &header.values {
            builder = builder.header(header.key.as_str(), value.as_str());
        }
    }

    let body = request.body.take();
    builder.body(body).map_err(|source| Error::Build {
        method: request.method.clone(),
        url: request.url.clone(),
        source,
    })
}

/// Header order follows the transport's map and is not meaningful.
fn adapt(request: Request, response: http::Response<ResponseBody>) -> Response {
    let (parts, body) = response.into_parts();
    let headers = parts
        .headers
        .keys()
        .map(|key| {
            let values = parts
                .headers
                .get_all(key)
                .iter()
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());
            Header::with_values(key.as_str(), values)
        })
        .collect();

    let status = match parts.extensions.get::<ReasonPhrase>() {
        Some(ReasonPhrase(reason)) => Status::new(parts.status.as_u16(), reason.as_str()),
        None => Status::from(parts.status),
    };

    Response {
        request,
        status,
        headers,
        body: Body::from_boxed(body),
    }
}

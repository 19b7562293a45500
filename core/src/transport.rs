//! The network collaborator.
//!
//! # Design
//! `Client` never touches sockets. It hands an `http::Request` to a
//! `Transport` and gets an `http::Response` back whose body is an unread
//! byte stream. Tests and embedders inject their own implementation; the
//! default is `UreqTransport`.
//!
//! `http::Response` has no slot for the reason phrase a server sent. A
//! transport that knows it stores a `ReasonPhrase` in the response
//! extensions; otherwise the canonical phrase for the code is used.

use ureq::SendBody;

use crate::body::ResponseBody;
use crate::config::ClientConfig;
use crate::error::BoxError;
use crate::request::RequestBody;

/// Performs one HTTP exchange.
///
/// Implementations are shared between threads by `Client` and must tolerate
/// concurrent calls. Redirect policy, timeouts, pooling and TLS are the
/// implementation's business.
pub trait Transport: Send + Sync {
    fn round_trip(
        &self,
        request: http::Request<Option<RequestBody>>,
    ) -> Result<http::Response<ResponseBody>, BoxError>;
}

/// Reason phrase from the server's status line, e.g. `Alright Then` in
/// `HTTP/1.1 200 Alright Then`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasonPhrase(pub String);

/// Blocking transport backed by a `ureq::Agent`.
///
/// Non-2xx statuses are returned as responses, not errors. ureq does not
/// expose the server's reason phrase, so responses carry the canonical one.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(config: &ClientConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .max_redirects(config.redirect_limit())
            .max_redirects_will_error(false)
            .timeout_global(config.timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

impl Transport for UreqTransport {
    fn round_trip(
        &self,
        request: http::Request<Option<RequestBody>>,
    ) -> Result<http::Response<ResponseBody>, BoxError> {
        let (parts, body) = request.into_parts();
        let response = match body {
            Some(mut reader) => {
                let body = SendBody::from_reader(&mut reader);
                self.agent.run(http::Request::from_parts(parts, body))?
            }
            None => self.agent.run(http::Request::from_parts(parts, ()))?,
        };
        Ok(response.map(|body| Box::new(body.into_reader()) as ResponseBody))
    }
}

//! HTTP status code and reason phrase.
//!
//! # Design
//! A `Status` is plain data: classification is derived from the hundreds
//! digit of `code` on every call, so nothing can drift out of sync. Codes
//! outside 100..=599 are not rejected; they classify as `Band::Unknown`.

use std::fmt;
use std::str::FromStr;

/// Numeric codes for common statuses.
pub mod code {
    pub const CONTINUE: u16 = 100;
    pub const SWITCHING_PROTOCOLS: u16 = 101;

    pub const OK: u16 = 200;
    pub const CREATED: u16 = 201;
    pub const ACCEPTED: u16 = 202;
    pub const NO_CONTENT: u16 = 204;

    pub const MULTIPLE_CHOICES: u16 = 300;
    pub const MOVED_PERMANENTLY: u16 = 301;
    pub const FOUND: u16 = 302;
    pub const SEE_OTHER: u16 = 303;
    pub const NOT_MODIFIED: u16 = 304;
    pub const TEMPORARY_REDIRECT: u16 = 307;
    pub const PERMANENT_REDIRECT: u16 = 308;

    pub const BAD_REQUEST: u16 = 400;
    pub const UNAUTHORIZED: u16 = 401;
    pub const FORBIDDEN: u16 = 403;
    pub const NOT_FOUND: u16 = 404;
    pub const METHOD_NOT_ALLOWED: u16 = 405;
    pub const IM_A_TEAPOT: u16 = 418;
    pub const UNPROCESSABLE_ENTITY: u16 = 422;
    pub const TOO_MANY_REQUESTS: u16 = 429;

    pub const INTERNAL_SERVER_ERROR: u16 = 500;
    pub const NOT_IMPLEMENTED: u16 = 501;
    pub const BAD_GATEWAY: u16 = 502;
    pub const SERVICE_UNAVAILABLE: u16 = 503;
    pub const GATEWAY_TIMEOUT: u16 = 504;
}

/// The class a status code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Informational,
    Success,
    Redirect,
    ClientError,
    ServerError,
    /// Outside 100..=599.
    Unknown,
}

/// Status code and reason phrase of a response, e.g. `200 OK`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub code: u16,
    pub reason: String,
}

impl Status {
    pub fn new(code: u16, reason: impl Into<String>) -> Self {
        Self {
            code,
            reason: reason.into(),
        }
    }

    pub fn band(&self) -> Band {
        match self.code / 100 {
            1 => Band::Informational,
            2 => Band::Success,
            3 => Band::Redirect,
            4 => Band::ClientError,
            5 => Band::ServerError,
            _ => Band::Unknown,
        }
    }

    pub fn is_informational(&self) -> bool {
        self.band() == Band::Informational
    }

    pub fn is_success(&self) -> bool {
        self.band() == Band::Success
    }

    pub fn is_redirect(&self) -> bool {
        self.band() == Band::Redirect
    }

    pub fn is_client_error(&self) -> bool {
        self.band() == Band::ClientError
    }

    pub fn is_server_error(&self) -> bool {
        self.band() == Band::ServerError
    }

    /// True for 4xx and 5xx.
    pub fn is_error(&self) -> bool {
        self.is_client_error() || self.is_server_error()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.reason)
    }
}

impl From<http::StatusCode> for Status {
    /// The reason phrase is the canonical one for the code, or empty for
    /// codes without one.
    fn from(status: http::StatusCode) -> Self {
        Self::new(status.as_u16(), status.canonical_reason().unwrap_or(""))
    }
}

/// Returned when a status line does not start with a three digit code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid status line {0:?}")]
pub struct InvalidStatusLine(pub String);

impl FromStr for Status {
    type Err = InvalidStatusLine;

    /// Parses `"<code> <reason>"`. The reason may be empty or contain spaces.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidStatusLine(line.to_string());
        let (code, reason) = line.split_once(' ').unwrap_or((line, ""));
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let code: u16 = code.parse().map_err(|_| invalid())?;
        if !(100..=999).contains(&code) {
            return Err(invalid());
        }
        Ok(Self::new(code, reason.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_code_and_reason() {
        assert_eq!(Status::new(200, "OK").to_string(), "200 OK");
        assert_eq!(Status::new(418, "I'm a teapot").to_string(), "418 I'm a teapot");
    }

    #[test]
    fn predicates_partition_the_bands() {
        // (code, informational, success, redirect, error, client, server)
        let cases = [
            (code::CONTINUE, true, false, false, false, false, false),
            (code::OK, false, true, false, false, false, false),
            (code::MULTIPLE_CHOICES, false, false, true, false, false, false),
            (code::BAD_REQUEST, false, false, false, true, true, false),
            (code::NOT_FOUND, false, false, false, true, true, false),
            (code::INTERNAL_SERVER_ERROR, false, false, false, true, false, true),
        ];
        for (c, info, success, redirect, error, client, server) in cases {
            let status = Status::new(c, "");
            assert_eq!(status.is_informational(), info, "{c}: informational");
            assert_eq!(status.is_success(), success, "{c}: success");
            assert_eq!(status.is_redirect(), redirect, "{c}: redirect");
            assert_eq!(status.is_error(), error, "{c}: error");
            assert_eq!(status.is_client_error(), client, "{c}: client error");
            assert_eq!(status.is_server_error(), server, "{c}: server error");
        }
    }

    #[test]
    fn band_edges() {
        assert_eq!(Status::new(199, "").band(), Band::Informational);
        assert_eq!(Status::new(299, "").band(), Band::Success);
        assert_eq!(Status::new(599, "").band(), Band::ServerError);
        assert_eq!(Status::new(600, "").band(), Band::Unknown);
        assert_eq!(Status::new(99, "").band(), Band::Unknown);
        assert!(!Status::new(600, "").is_error());
    }

    #[test]
    fn from_http_status_code() {
        let status = Status::from(http::StatusCode::NOT_FOUND);
        assert_eq!(status, Status::new(404, "Not Found"));

        let custom = http::StatusCode::from_u16(599).unwrap();
        assert_eq!(Status::from(custom), Status::new(599, ""));
    }

    #[test]
    fn parse_status_line() {
        assert_eq!("200 OK".parse::<Status>().unwrap(), Status::new(200, "OK"));
        assert_eq!(
            "404 Not Found".parse::<Status>().unwrap(),
            Status::new(404, "Not Found")
        );
        assert_eq!("204".parse::<Status>().unwrap(), Status::new(204, ""));
    }

    #[test]
    fn parse_rejects_malformed_lines() {
        for line in ["", "OK", "20 OK", "2000 OK", "abc OK", "099 Low"] {
            assert!(line.parse::<Status>().is_err(), "{line:?} should be rejected");
        }
    }
}

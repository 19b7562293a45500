//! Streaming response body.
//!
//! # Design
//! `Body` owns the transport's byte stream and never buffers it on its own.
//! Callers read raw bytes through `io::Read` (or drain them with `read_all`
//! and `text`), or decode JSON values with `Body::json`. The first `json`
//! call moves the stream into a `serde_json::Deserializer` that lives as
//! long as the body, so back-to-back JSON documents can be decoded one value
//! per call. Once JSON decoding has started the deserializer owns look-ahead
//! bytes, so raw reads are refused from then on.

use std::fmt;
use std::io::{self, Read};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::de::IoRead;

use crate::error::Result;

/// Byte stream produced by a transport.
pub type ResponseBody = Box<dyn Read + Send>;

type JsonDecoder = serde_json::Deserializer<IoRead<ResponseBody>>;

/// The body of a `Response`.
///
/// Single reader: all access goes through `&mut self`. Dropping the body
/// releases the underlying stream; `close` does the same eagerly.
pub struct Body {
    reader: Option<ResponseBody>,
    json: Option<JsonDecoder>,
}

impl Body {
    pub fn new(reader: impl Read + Send + 'static) -> Self {
        Self::from_boxed(Box::new(reader))
    }

    pub(crate) fn from_boxed(reader: ResponseBody) -> Self {
        Self {
            reader: Some(reader),
            json: None,
        }
    }

    /// Decodes the next JSON value from the stream.
    ///
    /// Values may follow each other without a separator or wrapping array;
    /// each call consumes exactly one. After an error the stream position is
    /// unspecified and the body should be discarded.
    pub fn json<T: DeserializeOwned>(&mut self) -> Result<T> {
        if self.json.is_none() {
            let reader = self.reader.take().ok_or_else(closed)?;
            self.json = Some(serde_json::Deserializer::from_reader(reader));
        }
        match self.json.as_mut() {
            Some(decoder) => Ok(<T as Deserialize>::deserialize(decoder)?),
            None => Err(closed().into()),
        }
    }

    /// Reads the rest of the stream.
    pub fn read_all(&mut self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Reads the rest of the stream as UTF-8.
    pub fn text(&mut self) -> Result<String> {
        let mut buf = String::new();
        self.read_to_string(&mut buf)?;
        Ok(buf)
    }

    /// Releases the stream. Further reads fail. Safe to call repeatedly.
    pub fn close(&mut self) {
        self.reader = None;
        self.json = None;
    }

    pub fn is_closed(&self) -> bool {
        self.reader.is_none() && self.json.is_none()
    }
}

impl Read for Body {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.reader.as_mut() {
            Some(reader) => reader.read(buf),
            None if self.json.is_some() => Err(io::Error::other(
                "body is being decoded as JSON, raw reads are not available",
            )),
            None => Err(closed()),
        }
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.json.is_some() {
            "json"
        } else if self.reader.is_some() {
            "open"
        } else {
            "closed"
        };
        f.debug_struct("Body").field("state", &state).finish()
    }
}

fn closed() -> io::Error {
    io::Error::new(io::ErrorKind::NotConnected, "body is closed")
}

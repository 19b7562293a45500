use std::collections::BTreeMap;

use axum::{
    body::Bytes,
    extract::Path,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Two JSON documents back to back, no separator.
pub const CONCATENATED_JSON: &str = r#"{"a":"first"}{"a":"second"}"#;

/// What the server saw for an echoed request.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub headers: BTreeMap<String, Vec<String>>,
    pub body: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/get", get(echo))
        .route("/post", post(echo))
        .route("/status/{code}", get(status))
        .route("/redirect", get(redirect))
        .route("/stream", get(stream))
        .route("/repeat", get(repeat))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo(method: Method, headers: HeaderMap, body: Bytes) -> Json<Echo> {
    let mut seen: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in &headers {
        seen.entry(name.to_string())
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    Json(Echo {
        method: method.to_string(),
        headers: seen,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

async fn status(Path(code): Path<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}

async fn redirect() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/get")])
}

async fn stream() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], CONCATENATED_JSON)
}

async fn repeat() -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    headers.append("x-repeat", HeaderValue::from_static("one"));
    headers.append("x-repeat", HeaderValue::from_static("two"));
    (headers, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_serializes_to_json() {
        let echo = Echo {
            method: "GET".to_string(),
            headers: BTreeMap::from([("accept".to_string(), vec!["*/*".to_string()])]),
            body: String::new(),
        };
        let json = serde_json::to_value(&echo).unwrap();
        assert_eq!(json["method"], "GET");
        assert_eq!(json["headers"]["accept"][0], "*/*");
        assert_eq!(json["body"], "");
    }

    #[test]
    fn echo_deserializes_from_json() {
        let echo: Echo = serde_json::from_str(r#"{"method":"POST","headers":{},"body":""}"#).unwrap();
        assert_eq!(echo.method, "POST");
        assert!(echo.headers.is_empty());
    }

    #[test]
    fn concatenated_json_is_two_documents() {
        let values: Vec<serde_json::Value> = serde_json::Deserializer::from_str(CONCATENATED_JSON)
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[1]["a"], "second");
    }
}

use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Echo, CONCATENATED_JSON};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- echo ---

#[tokio::test]
async fn get_echoes_headers() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/get")
                .header("x-trace", "a")
                .header("x-trace", "b")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "GET");
    assert_eq!(echo.headers["x-trace"], vec!["a", "b"]);
    assert!(echo.body.is_empty());
}

#[tokio::test]
async fn post_echoes_body() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/post")
                .header(http::header::CONTENT_TYPE, "text/plain")
                .body("Hello there!".to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "POST");
    assert_eq!(echo.body, "Hello there!");
    assert_eq!(echo.headers["content-type"], vec!["text/plain"]);
}

#[tokio::test]
async fn get_on_post_route_is_405() {
    let resp = app().oneshot(get("/post")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// --- status ---

#[tokio::test]
async fn status_returns_requested_code() {
    for code in [200u16, 204, 404, 418, 503] {
        let resp = app().oneshot(get(&format!("/status/{code}"))).await.unwrap();
        assert_eq!(resp.status().as_u16(), code);
    }
}

#[tokio::test]
async fn status_rejects_non_numeric_code() {
    let resp = app().oneshot(get("/status/teapot")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- redirect ---

#[tokio::test]
async fn redirect_points_at_get() {
    let resp = app().oneshot(get("/redirect")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers()[http::header::LOCATION], "/get");
}

// --- stream ---

#[tokio::test]
async fn stream_serves_concatenated_json() {
    let resp = app().oneshot(get("/stream")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[http::header::CONTENT_TYPE], "application/json");
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], CONCATENATED_JSON.as_bytes());
}

// --- repeat ---

#[tokio::test]
async fn repeat_sends_header_twice() {
    let resp = app().oneshot(get("/repeat")).await.unwrap();
    let values: Vec<_> = resp.headers().get_all("x-repeat").iter().collect();
    assert_eq!(values, vec!["one", "two"]);
}

use axum::body::Body;
use axum::response::Response;
use http::Request;
use http_body_util::BodyExt;

/// Builds a bodiless request for the given method and URI.
///
/// Query strings go in `uri` as-is, so callers percent-encode activity names
/// themselves (e.g. `Chess%20Club`).
pub fn create_test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn response_to_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn response_to_json(response: Response) -> serde_json::Value {
    let bytes = response_to_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

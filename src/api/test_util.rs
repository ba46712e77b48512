use axum::body;
use axum::response::Response;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Reads the whole response body and parses it as JSON into [T]. Panics, failing the test, if the
/// body can't be read or doesn't parse.
pub async fn deserialize_body<T: DeserializeOwned>(response_body: body::Body) -> T {
    let bytes = body::to_bytes(response_body, usize::MAX)
        .await
        .expect("Could not read data from response body!");

    serde_json::from_slice(&bytes).unwrap_or_else(|err| {
        panic!("Response body didn't parse: {err}, received body: {bytes:?}")
    })
}

/// Pulls the `error_code` out of an error response body
pub async fn error_code_of(response: Response) -> String {
    let body: Value = deserialize_body(response.into_body()).await;
    body["error_code"]
        .as_str()
        .expect("error response had no error code")
        .to_owned()
}

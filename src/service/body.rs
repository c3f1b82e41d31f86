use crate::utils::error::Result;
use serde_json::Value;
use std::io::Read;

pub fn read_as_bytes<R: Read>(mut body: R) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    body.read_to_end(&mut buf)?;
    Ok(buf)
}

pub fn read_as_string<R: Read>(body: R) -> Result<String> {
    let bytes = read_as_bytes(body)?;
    Ok(String::from_utf8(bytes)?)
}

/// An empty body is `Ok(None)`; malformed JSON is an error.
pub fn read_as_json<R: Read>(body: R) -> Result<Option<Value>> {
    let bytes = read_as_bytes(body)?;
    parse_body_json(&bytes)
}

pub async fn read_response_as_bytes(response: reqwest::Response) -> Result<Vec<u8>> {
    tracing::debug!("Reading response body, status: {}", response.status());
    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

pub async fn read_response_as_string(response: reqwest::Response) -> Result<String> {
    let bytes = read_response_as_bytes(response).await?;
    Ok(String::from_utf8(bytes)?)
}

pub async fn read_response_as_json(response: reqwest::Response) -> Result<Option<Value>> {
    let bytes = read_response_as_bytes(response).await?;
    parse_body_json(&bytes)
}

fn parse_body_json(bytes: &[u8]) -> Result<Option<Value>> {
    if bytes.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(bytes)?))
}

//! Request/response contract of the AI image and depth-map service.
//!
//! The transport lives in the web crate; this module owns the JSON shapes
//! and the status/field validation so both endpoints fail the same way.

use crate::error::BackendError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    GenerateImage,
    GenerateDepth,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::GenerateImage => "/generate-image",
            Endpoint::GenerateDepth => "/generate-depth",
        }
    }

    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

#[derive(Serialize, Debug)]
pub struct GenerateImageRequest<'a> {
    pub prompt: &'a str,
}

#[derive(Serialize, Debug)]
pub struct GenerateDepthRequest<'a> {
    pub image_url: &'a str,
}

#[derive(Deserialize, Debug)]
struct GenerateImageResponse {
    image_url: Option<String>,
}

#[derive(Deserialize, Debug)]
struct GenerateDepthResponse {
    depth_map_url: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Trimmed prompt, or `EmptyPrompt` before any request is made.
pub fn validate_prompt(prompt: &str) -> Result<&str, BackendError> {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return Err(BackendError::EmptyPrompt);
    }
    Ok(trimmed)
}

pub fn image_request_body(prompt: &str) -> Result<String, BackendError> {
    serde_json::to_string(&GenerateImageRequest { prompt })
        .map_err(|e| BackendError::MalformedJson(e.to_string()))
}

pub fn depth_request_body(image_url: &str) -> Result<String, BackendError> {
    serde_json::to_string(&GenerateDepthRequest { image_url })
        .map_err(|e| BackendError::MalformedJson(e.to_string()))
}

pub fn parse_image_response(status: u16, body: &str) -> Result<String, BackendError> {
    check_status(status, body)?;
    let parsed: GenerateImageResponse =
        serde_json::from_str(body).map_err(|e| BackendError::MalformedJson(e.to_string()))?;
    non_empty(parsed.image_url).ok_or(BackendError::MissingField("image_url"))
}

pub fn parse_depth_response(status: u16, body: &str) -> Result<String, BackendError> {
    check_status(status, body)?;
    let parsed: GenerateDepthResponse =
        serde_json::from_str(body).map_err(|e| BackendError::MalformedJson(e.to_string()))?;
    non_empty(parsed.depth_map_url).ok_or(BackendError::MissingField("depth_map_url"))
}

fn check_status(status: u16, body: &str) -> Result<(), BackendError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    Err(BackendError::Status {
        status,
        detail: error_detail(body),
    })
}

/// Server-supplied error text: the `detail` field when the body is a JSON
/// error object, otherwise the raw body.
pub fn error_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(s),
        }) => Some(s),
        Ok(ErrorBody { detail }) => Some(detail.to_string()),
        Err(_) => Some(body.to_string()),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

use thiserror::Error;

/// Depth-texture load failures. Always recovered locally by falling back
/// to an untextured surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TextureLoadError {
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: u16 },
    #[error("could not decode image: {0}")]
    Decode(String),
    #[error("image has zero size")]
    EmptyImage,
}

/// AI backend request failures, surfaced to the user as a notification.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BackendError {
    #[error("please enter a prompt for AI generation")]
    EmptyPrompt,
    #[error("request failed: {0}")]
    Network(String),
    #[error("server error ({status}){}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },
    #[error("malformed response: {0}")]
    MalformedJson(String),
    #[error("response is missing the `{0}` field")]
    MissingField(&'static str),
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(d) if !d.is_empty() => format!(": {d}"),
        _ => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("{0} export is not implemented yet")]
    Unimplemented(&'static str),
}

//! AI image + depth-map requests.
//!
//! Generating an image chains straight into the depth request; the returned
//! depth map URL goes to the texture loader. Failures are reported with a
//! blocking alert and never touch the preview.
use crate::constants::{
    AI_GENERATE_ID, AI_LABEL_DEPTH, AI_LABEL_IDLE, AI_LABEL_IMAGE, AI_PROMPT_ID, UPLOADED_IMAGE_ID,
};
use crate::state::{BusyFlags, SharedState};
use crate::{dom, texture};
use gloo_net::http::Request;
use relief_core::backend::{self, Endpoint};
use relief_core::BackendError;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

async fn post_json(url: &str, body: String) -> Result<(u16, String), BackendError> {
    let resp = Request::post(url)
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| BackendError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| BackendError::Network(e.to_string()))?;
    let status = resp.status();
    // An unreadable error body still reports the status.
    let text = resp.text().await.unwrap_or_default();
    Ok((status, text))
}

pub async fn generate_image(base_url: &str, prompt: &str) -> Result<String, BackendError> {
    let body = backend::image_request_body(prompt)?;
    let (status, text) = post_json(&Endpoint::GenerateImage.url(base_url), body).await?;
    backend::parse_image_response(status, &text)
}

pub async fn generate_depth(base_url: &str, image_url: &str) -> Result<String, BackendError> {
    let body = backend::depth_request_body(image_url)?;
    let (status, text) = post_json(&Endpoint::GenerateDepth.url(base_url), body).await?;
    backend::parse_depth_response(status, &text)
}

fn render_busy(document: &web::Document, busy: BusyFlags) {
    let label = if busy.depth_generating {
        AI_LABEL_DEPTH
    } else if busy.generating {
        AI_LABEL_IMAGE
    } else {
        AI_LABEL_IDLE
    };
    dom::set_text(document, AI_GENERATE_ID, label);
    dom::set_button_disabled(document, AI_GENERATE_ID, busy.any());
}

fn set_busy(state: &SharedState, update: impl FnOnce(&mut BusyFlags)) {
    let busy = {
        let mut s = state.borrow_mut();
        update(&mut s.busy);
        s.busy
    };
    if let Some(document) = dom::window_document() {
        render_busy(&document, busy);
    }
}

/// Click handler for the AI trigger.
pub fn start_ai_generation(state: &SharedState) {
    let Some(document) = dom::window_document() else {
        return;
    };
    if state.borrow().busy.any() {
        return;
    }
    let raw = dom::textarea_value(&document, AI_PROMPT_ID);
    let prompt = match backend::validate_prompt(&raw) {
        Ok(p) => p.to_string(),
        Err(e) => {
            dom::alert(&capitalize(&e.to_string()));
            return;
        }
    };
    set_busy(state, |b| {
        b.generating = true;
        b.depth_generating = false;
    });
    // back to the default depth map until the new one arrives
    texture::request_depth_map(state, None);
    let state = state.clone();
    spawn_local(async move {
        run_pipeline(&state, &prompt).await;
        set_busy(&state, |b| b.generating = false);
    });
}

async fn run_pipeline(state: &SharedState, prompt: &str) {
    let base_url = state.borrow().config.backend_base_url.clone();
    log::info!("[backend] generate-image ({} chars)", prompt.len());
    let image_url = match generate_image(&base_url, prompt).await {
        Ok(url) => url,
        Err(e) => {
            log::error!("[backend] image generation failed: {}", e);
            dom::alert(&format!("AI generation failed: {}", e));
            return;
        }
    };
    if let Some(document) = dom::window_document() {
        dom::set_image_src(&document, UPLOADED_IMAGE_ID, &image_url);
    }

    set_busy(state, |b| b.depth_generating = true);
    log::info!("[backend] generate-depth");
    match generate_depth(&base_url, &image_url).await {
        Ok(depth_url) => texture::request_depth_map(state, Some(&depth_url)),
        Err(e) => {
            log::error!("[backend] depth generation failed: {}", e);
            dom::alert(&format!("Depth map generation failed: {}", e));
        }
    }
    set_busy(state, |b| b.depth_generating = false);
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

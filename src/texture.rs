//! Depth-map fetching, decoding and GPU upload.
//!
//! Fetch + decode run on the microtask queue; results are parked in
//! `AppState::pending_loads` and installed by the next frame that has a GPU.
use crate::render;
use crate::state::{AppState, SharedState};
use gloo_net::http::Request;
use relief_core::{LoadTicket, LoadedTexture, TextureDims, TextureLoadError};
use wasm_bindgen_futures::spawn_local;

// Anything larger is downscaled before upload (default WebGPU limit is 8192).
const MAX_DEPTH_MAP_DIM: u32 = 4096;

/// GPU copy of a depth map. Released exactly once through [`DepthTexture::release`].
#[derive(Debug)]
pub struct DepthTexture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl DepthTexture {
    pub fn upload(device: &wgpu::Device, queue: &wgpu::Queue, image: &DecodedImage) -> Self {
        // Unorm, not sRGB: the shader reads raw luminance as height.
        let (texture, view) = render::create_texture_2d(
            device,
            "depth_map",
            image.width,
            image.height,
            wgpu::TextureFormat::Rgba8Unorm,
            wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        );
        render::write_rgba8(queue, &texture, image.width, image.height, &image.rgba);
        Self { texture, view }
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn release(self) {
        self.texture.destroy();
    }
}

pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub struct PendingLoad {
    pub ticket: LoadTicket,
    pub result: Result<DecodedImage, TextureLoadError>,
}

pub fn decode(bytes: &[u8]) -> Result<DecodedImage, TextureLoadError> {
    let mut img =
        image::load_from_memory(bytes).map_err(|e| TextureLoadError::Decode(e.to_string()))?;
    if img.width() == 0 || img.height() == 0 {
        return Err(TextureLoadError::EmptyImage);
    }
    if img.width() > MAX_DEPTH_MAP_DIM || img.height() > MAX_DEPTH_MAP_DIM {
        log::info!(
            "[texture] downscaling {}x{} to fit {}",
            img.width(),
            img.height(),
            MAX_DEPTH_MAP_DIM
        );
        img = img.resize(
            MAX_DEPTH_MAP_DIM,
            MAX_DEPTH_MAP_DIM,
            image::imageops::FilterType::Triangle,
        );
    }
    let rgba = img.to_rgba8();
    Ok(DecodedImage {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, TextureLoadError> {
    let fetch_err = |e: gloo_net::Error| TextureLoadError::Fetch {
        url: url.to_string(),
        reason: e.to_string(),
    };
    let resp = Request::get(url).send().await.map_err(fetch_err)?;
    if !resp.ok() {
        return Err(TextureLoadError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    resp.binary().await.map_err(fetch_err)
}

/// Start loading `url` (the configured default when `None`). Supersedes any
/// load still in flight.
pub fn request_depth_map(state: &SharedState, url: Option<&str>) {
    let ticket = {
        let mut s = state.borrow_mut();
        s.depth_map_url = url.map(str::to_string);
        s.textures.request(url)
    };
    let state = state.clone();
    spawn_local(async move {
        let started = js_sys::Date::now();
        let result = match fetch_bytes(ticket.url()).await {
            Ok(bytes) => decode(&bytes),
            Err(e) => Err(e),
        };
        log::debug!(
            "[texture] #{} settled in {:.0} ms",
            ticket.generation(),
            js_sys::Date::now() - started
        );
        state
            .borrow_mut()
            .pending_loads
            .push(PendingLoad { ticket, result });
    });
}

/// Upload settled loads and hand them to the slot. Stale results are
/// dropped before touching the GPU; every handle the slot gives back is
/// destroyed here.
pub fn install_pending(state: &mut AppState, gpu: &render::GpuState) {
    if state.pending_loads.is_empty() {
        return;
    }
    for load in std::mem::take(&mut state.pending_loads) {
        if !state.textures.is_current(&load.ticket) {
            log::debug!("[texture] skip stale result #{}", load.ticket.generation());
            continue;
        }
        let result = load.result.map(|image| LoadedTexture {
            dims: TextureDims::new(image.width, image.height),
            handle: DepthTexture::upload(gpu.device(), gpu.queue(), &image),
        });
        let completion = state.textures.finish(&load.ticket, result);
        if let Some(old) = completion.release {
            old.release();
        }
        log::debug!(
            "[texture] #{} -> {:?}",
            load.ticket.generation(),
            completion.outcome
        );
    }
}

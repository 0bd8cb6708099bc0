//! Depth-texture slot: the single active height-field texture and the
//! bookkeeping that keeps replacement leak-free.
//!
//! The slot is generic over the GPU handle so the lifecycle can be driven
//! on the host. Releasing is expressed through ownership: every handle that
//! leaves the slot is returned to the caller exactly once in a
//! [`Completion`] (or from [`TextureSlot::clear`]) and the caller destroys it.
//! A handle still installed is never returned.

use crate::constants::RELIEF_BASE_EXTENT;
use crate::error::TextureLoadError;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextureDims {
    pub width: u32,
    pub height: u32,
}

impl TextureDims {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width / height, or `None` for a degenerate image.
    pub fn aspect(&self) -> Option<f32> {
        (self.width > 0 && self.height > 0).then(|| self.width as f32 / self.height as f32)
    }
}

/// Unscaled relief plane size: fixed height, width following the image aspect.
/// Square when there is no texture.
pub fn base_plane_size(dims: Option<TextureDims>) -> Vec2 {
    match dims.and_then(|d| d.aspect()) {
        Some(aspect) => Vec2::new(RELIEF_BASE_EXTENT * aspect, RELIEF_BASE_EXTENT),
        None => Vec2::splat(RELIEF_BASE_EXTENT),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    url: String,
}

impl LoadTicket {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
pub struct LoadedTexture<T> {
    pub handle: T,
    pub dims: TextureDims,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The result became the active texture.
    Installed,
    /// The load failed; the slot now holds no texture.
    Failed,
    /// A newer request was issued; the result was dropped.
    Superseded,
}

#[derive(Debug)]
#[must_use = "a released handle must be destroyed by the caller"]
pub struct Completion<T> {
    pub outcome: LoadOutcome,
    /// Handle leaving the slot: the previous texture, or the late arrival itself.
    pub release: Option<T>,
}

#[derive(Debug)]
pub struct TextureSlot<T> {
    default_url: String,
    generation: u64,
    pending: Option<u64>,
    active: Option<LoadedTexture<T>>,
    version: u64,
}

impl<T> TextureSlot<T> {
    pub fn new(default_url: impl Into<String>) -> Self {
        Self {
            default_url: default_url.into(),
            generation: 0,
            pending: None,
            active: None,
            version: 0,
        }
    }

    pub fn default_url(&self) -> &str {
        &self.default_url
    }

    /// Issue a load for `url`, or the default asset when `None`/empty.
    /// Any in-flight load is superseded.
    pub fn request(&mut self, url: Option<&str>) -> LoadTicket {
        self.generation += 1;
        self.pending = Some(self.generation);
        let url = match url {
            Some(u) if !u.trim().is_empty() => u.to_string(),
            _ => self.default_url.clone(),
        };
        log::debug!(
            "[texture] request #{} {}",
            self.generation,
            abbreviate(&url)
        );
        LoadTicket {
            generation: self.generation,
            url,
        }
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.pending == Some(ticket.generation)
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn finish(
        &mut self,
        ticket: &LoadTicket,
        result: Result<LoadedTexture<T>, TextureLoadError>,
    ) -> Completion<T> {
        if !self.is_current(ticket) {
            log::debug!("[texture] drop superseded load #{}", ticket.generation);
            return Completion {
                outcome: LoadOutcome::Superseded,
                release: result.ok().map(|t| t.handle),
            };
        }
        self.pending = None;
        self.version += 1;
        match result {
            Ok(loaded) => {
                log::info!(
                    "[texture] loaded {}x{} from {}",
                    loaded.dims.width,
                    loaded.dims.height,
                    abbreviate(&ticket.url)
                );
                let previous = self.active.replace(loaded);
                Completion {
                    outcome: LoadOutcome::Installed,
                    release: previous.map(|t| t.handle),
                }
            }
            Err(e) => {
                log::warn!("[texture] load failed, using untextured surface: {}", e);
                Completion {
                    outcome: LoadOutcome::Failed,
                    release: self.active.take().map(|t| t.handle),
                }
            }
        }
    }

    pub fn active(&self) -> Option<&LoadedTexture<T>> {
        self.active.as_ref()
    }

    pub fn dims(&self) -> Option<TextureDims> {
        self.active.as_ref().map(|t| t.dims)
    }

    pub fn plane_size(&self) -> Vec2 {
        base_plane_size(self.dims())
    }

    /// Bumped whenever the active texture changes; lets consumers rebind lazily.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Drop everything (unmount / device loss). In-flight loads become stale.
    pub fn clear(&mut self) -> Option<T> {
        self.pending = None;
        self.generation += 1;
        self.version += 1;
        self.active.take().map(|t| t.handle)
    }
}

// data: URLs can be megabytes long
fn abbreviate(url: &str) -> &str {
    match url.char_indices().nth(64) {
        Some((i, _)) => &url[..i],
        None => url,
    }
}

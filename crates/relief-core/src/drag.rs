//! Drag-to-reposition on the invisible capture plane.
//!
//! Only lives while `adjust_mode && generated`. The plane is horizontal at
//! the relief's Y. A drag records the offset between the grab point and the
//! relief centre and preserves it while moving, so the relief does not
//! snap its centre to the cursor.

use crate::case::ReliefBounds;
use crate::picking::Ray;
use glam::Vec2;

/// Cursor the UI layer should show; the core never touches display state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorRequest {
    Default,
    Grab,
    Grabbing,
}

impl CursorRequest {
    pub fn css(self) -> &'static str {
        match self {
            CursorRequest::Default => "auto",
            CursorRequest::Grab => "grab",
            CursorRequest::Grabbing => "grabbing",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerCapture {
    #[default]
    Unchanged,
    Capture,
    Release,
}

/// Side effects requested by one pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DragResponse {
    pub position: Option<Vec2>,
    pub cursor: Option<CursorRequest>,
    pub capture: PointerCapture,
}

#[derive(Clone, Debug)]
pub struct InteractionPlane {
    plane_y: f32,
    bounds: Option<ReliefBounds>,
    offset: Option<Vec2>,
    hovering: bool,
}

impl InteractionPlane {
    /// `bounds` enables live clamping of emitted positions.
    pub fn new(plane_y: f32, bounds: Option<ReliefBounds>) -> Self {
        Self {
            plane_y,
            bounds,
            offset: None,
            hovering: false,
        }
    }

    pub fn plane_y(&self) -> f32 {
        self.plane_y
    }

    pub fn is_dragging(&self) -> bool {
        self.offset.is_some()
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// World XZ hit on the capture plane, if any.
    pub fn intersect(&self, ray: &Ray) -> Option<Vec2> {
        let hit = ray.intersect_plane_y(self.plane_y)?;
        Some(Vec2::new(hit.x, hit.z))
    }

    pub fn pointer_down(&mut self, ray: &Ray, relief_position: Vec2) -> DragResponse {
        match self.intersect(ray) {
            Some(hit) => self.grab(hit, relief_position),
            None => DragResponse::default(),
        }
    }

    pub fn pointer_move(&mut self, ray: &Ray) -> DragResponse {
        if !self.is_dragging() {
            return DragResponse::default();
        }
        match self.intersect(ray) {
            Some(hit) => self.drag_to(hit),
            None => DragResponse::default(),
        }
    }

    /// Start a drag with the pointer at world XZ `hit`.
    pub fn grab(&mut self, hit: Vec2, relief_position: Vec2) -> DragResponse {
        self.offset = Some(hit - relief_position);
        log::info!(
            "[drag] begin at ({:.3},{:.3}) relief=({:.3},{:.3})",
            hit.x,
            hit.y,
            relief_position.x,
            relief_position.y
        );
        DragResponse {
            position: None,
            cursor: Some(CursorRequest::Grabbing),
            capture: PointerCapture::Capture,
        }
    }

    /// Move an active drag to world XZ `hit`; no-op when idle.
    pub fn drag_to(&mut self, hit: Vec2) -> DragResponse {
        let Some(offset) = self.offset else {
            return DragResponse::default();
        };
        let mut position = hit - offset;
        if let Some(bounds) = &self.bounds {
            position = bounds.clamp(position);
        }
        log::debug!("[drag] move -> ({:.3},{:.3})", position.x, position.y);
        DragResponse {
            position: Some(position),
            cursor: None,
            capture: PointerCapture::Unchanged,
        }
    }

    pub fn pointer_up(&mut self) -> DragResponse {
        if self.offset.take().is_some() {
            log::info!("[drag] end");
        }
        DragResponse {
            position: None,
            cursor: Some(CursorRequest::Default),
            capture: PointerCapture::Release,
        }
    }

    pub fn pointer_over(&mut self) -> DragResponse {
        self.hovering = true;
        if self.is_dragging() {
            return DragResponse::default();
        }
        DragResponse {
            cursor: Some(CursorRequest::Grab),
            ..DragResponse::default()
        }
    }

    pub fn pointer_out(&mut self) -> DragResponse {
        self.hovering = false;
        DragResponse {
            cursor: Some(CursorRequest::Default),
            ..DragResponse::default()
        }
    }

    /// Abort any drag, e.g. when adjust mode is switched off mid-gesture.
    pub fn cancel(&mut self) -> DragResponse {
        let was_dragging = self.offset.take().is_some();
        self.hovering = false;
        DragResponse {
            position: None,
            cursor: Some(CursorRequest::Default),
            capture: if was_dragging {
                PointerCapture::Release
            } else {
                PointerCapture::Unchanged
            },
        }
    }
}

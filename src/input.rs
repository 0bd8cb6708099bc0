use glam::Vec2;
use relief_core::PointerCapture;
use web_sys as web;

/// Orbit gesture in progress on the canvas (adjust mode off).
#[derive(Default, Clone, Copy, Debug)]
pub struct OrbitDrag {
    pub active: bool,
    pub pointer_id: i32,
    pub last: Vec2,
}

impl OrbitDrag {
    pub fn begin(&mut self, pointer_id: i32, pos: Vec2) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last = pos;
    }

    /// Pixel delta since the previous sample; `None` when idle or for another pointer.
    pub fn move_to(&mut self, pointer_id: i32, pos: Vec2) -> Option<Vec2> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = pos - self.last;
        self.last = pos;
        Some(delta)
    }

    pub fn end(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }
}

/// Canvas pointer capture held on behalf of a relief drag.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragCapture {
    pointer_id: Option<i32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureCall {
    Set(i32),
    Release(i32),
}

impl DragCapture {
    /// DOM call for a capture request. `pointer_id` is the event's pointer,
    /// or `None` when the request does not come from a pointer event.
    pub fn request(
        &mut self,
        capture: PointerCapture,
        pointer_id: Option<i32>,
    ) -> Option<CaptureCall> {
        match capture {
            PointerCapture::Capture => {
                let id = pointer_id?;
                self.pointer_id = Some(id);
                Some(CaptureCall::Set(id))
            }
            PointerCapture::Release => {
                let id = self.pointer_id.take().or(pointer_id)?;
                Some(CaptureCall::Release(id))
            }
            PointerCapture::Unchanged => None,
        }
    }
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    css_to_canvas_px(
        Vec2::new(x_css, y_css),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

/// Map a CSS-pixel offset inside the element to backing-store pixels.
#[inline]
pub fn css_to_canvas_px(css: Vec2, css_size: Vec2, backing_size: Vec2) -> Vec2 {
    if css_size.x <= 0.0 || css_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    css / css_size * backing_size
}

/// Canvas pixels (origin top-left, +Y down) to NDC (`[-1, 1]`, +Y up).
#[inline]
pub fn canvas_px_to_ndc(px: Vec2, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new(2.0 * px.x / w - 1.0, 1.0 - 2.0 * px.y / h)
}

// ---------------- Form helpers ----------------
/// Parse a range input value, clamped to `[min, max]`.
#[inline]
pub fn parse_slider(value: &str, min: f32, max: f32) -> Option<f32> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(min, max))
}

pub fn height_label(height: f32) -> String {
    format!("{}mm", trim_number(height))
}

pub fn size_label(size: f32) -> String {
    format!("{}%", trim_number(size))
}

pub fn rotation_label(degrees: f32) -> String {
    format!("{}°", trim_number(degrees))
}

// 5.0 -> "5", 2.5 -> "2.5"
fn trim_number(v: f32) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{:.1}", v)
    }
}

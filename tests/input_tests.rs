// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn canvas_corners_map_to_ndc_corners() {
    assert_eq!(
        canvas_px_to_ndc(Vec2::ZERO, 800.0, 600.0),
        Vec2::new(-1.0, 1.0)
    );
    assert_eq!(
        canvas_px_to_ndc(Vec2::new(800.0, 600.0), 800.0, 600.0),
        Vec2::new(1.0, -1.0)
    );
    assert_eq!(
        canvas_px_to_ndc(Vec2::new(400.0, 300.0), 800.0, 600.0),
        Vec2::ZERO
    );
}

#[test]
fn ndc_survives_zero_sized_canvas() {
    let ndc = canvas_px_to_ndc(Vec2::ZERO, 0.0, 0.0);
    assert!(ndc.is_finite());
}

#[test]
fn css_offset_scales_to_backing_store() {
    // 2x device pixel ratio
    let px = css_to_canvas_px(
        Vec2::new(100.0, 50.0),
        Vec2::new(400.0, 300.0),
        Vec2::new(800.0, 600.0),
    );
    assert_eq!(px, Vec2::new(200.0, 100.0));
}

#[test]
fn css_offset_on_collapsed_element_is_zero() {
    let px = css_to_canvas_px(Vec2::new(10.0, 10.0), Vec2::ZERO, Vec2::new(800.0, 600.0));
    assert_eq!(px, Vec2::ZERO);
}

#[test]
fn slider_values_are_parsed_and_clamped() {
    assert_eq!(parse_slider("5", 1.0, 10.0), Some(5.0));
    assert_eq!(parse_slider(" 2.5 ", 1.0, 10.0), Some(2.5));
    assert_eq!(parse_slider("0", 1.0, 10.0), Some(1.0));
    assert_eq!(parse_slider("400", 20.0, 200.0), Some(200.0));
    assert_eq!(parse_slider("", 1.0, 10.0), None);
    assert_eq!(parse_slider("abc", 1.0, 10.0), None);
    assert_eq!(parse_slider("NaN", 1.0, 10.0), None);
}

#[test]
fn value_labels_carry_units() {
    assert_eq!(height_label(5.0), "5mm");
    assert_eq!(height_label(2.5), "2.5mm");
    assert_eq!(size_label(60.0), "60%");
    assert_eq!(rotation_label(90.0), "90°");
}

#[test]
fn orbit_drag_reports_deltas_for_its_pointer_only() {
    let mut drag = OrbitDrag::default();
    assert_eq!(drag.move_to(1, Vec2::new(5.0, 5.0)), None);

    drag.begin(1, Vec2::new(10.0, 10.0));
    assert_eq!(
        drag.move_to(1, Vec2::new(15.0, 7.0)),
        Some(Vec2::new(5.0, -3.0))
    );
    assert_eq!(drag.move_to(2, Vec2::new(100.0, 100.0)), None);
    assert_eq!(
        drag.move_to(1, Vec2::new(15.0, 8.0)),
        Some(Vec2::new(0.0, 1.0))
    );

    assert!(drag.end());
    assert!(!drag.end());
    assert_eq!(drag.move_to(1, Vec2::new(0.0, 0.0)), None);
}

#[test]
fn drag_capture_is_released_for_the_grabbing_pointer() {
    use relief_core::PointerCapture;

    let mut capture = DragCapture::default();
    assert_eq!(capture.request(PointerCapture::Unchanged, Some(7)), None);
    assert_eq!(
        capture.request(PointerCapture::Capture, Some(7)),
        Some(CaptureCall::Set(7))
    );

    // leaving adjust mode mid-drag has no pointer event of its own
    assert_eq!(
        capture.request(PointerCapture::Release, None),
        Some(CaptureCall::Release(7))
    );
    assert_eq!(capture.request(PointerCapture::Release, None), None);
}

#[test]
fn cancelled_drag_through_the_capture_plane_releases_capture() {
    use glam::Vec3;
    use relief_core::{InteractionPlane, PointerCapture, Ray};

    let mut plane = InteractionPlane::new(0.0, None);
    let ray = Ray::new(Vec3::new(1.0, 5.0, 2.0), Vec3::NEG_Y);
    let mut capture = DragCapture::default();

    let resp = plane.pointer_down(&ray, Vec2::ZERO);
    assert_eq!(resp.capture, PointerCapture::Capture);
    assert_eq!(
        capture.request(resp.capture, Some(3)),
        Some(CaptureCall::Set(3))
    );

    let resp = plane.cancel();
    assert!(!plane.is_dragging());
    assert_eq!(
        capture.request(resp.capture, None),
        Some(CaptureCall::Release(3))
    );
}

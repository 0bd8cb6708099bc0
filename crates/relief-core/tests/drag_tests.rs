use glam::{Vec2, Vec3};
use relief_core::*;

// Straight-down ray hitting the capture plane at world (x, z).
fn ray_down(x: f32, z: f32) -> Ray {
    Ray::new(Vec3::new(x, 10.0, z), Vec3::NEG_Y)
}

fn plane(clamp: bool) -> InteractionPlane {
    SceneComposer::new(SceneConfig {
        clamp_drag: clamp,
        ..SceneConfig::default()
    })
    .interaction_plane()
}

#[test]
fn drag_preserves_grab_offset() {
    let mut drag = plane(false);
    let relief = Vec2::new(0.5, -1.0);

    let down = drag.pointer_down(&ray_down(1.0, 2.0), relief);
    assert!(drag.is_dragging());
    assert_eq!(down.position, None, "grabbing must not move the relief");
    assert_eq!(down.cursor, Some(CursorRequest::Grabbing));
    assert_eq!(down.capture, PointerCapture::Capture);

    let moved = drag.pointer_move(&ray_down(3.0, 1.0));
    let pos = moved.position.expect("position while dragging");
    // R + (P' - P)
    let expected = relief + (Vec2::new(3.0, 1.0) - Vec2::new(1.0, 2.0));
    assert!((pos - expected).length() < 1e-4, "got {pos:?}");
}

#[test]
fn move_without_grab_is_ignored() {
    let mut drag = plane(false);
    let resp = drag.pointer_move(&ray_down(1.0, 1.0));
    assert_eq!(resp, DragResponse::default());
}

#[test]
fn release_ends_drag_and_frees_pointer() {
    let mut drag = plane(false);
    drag.pointer_down(&ray_down(0.0, 0.0), Vec2::ZERO);
    let up = drag.pointer_up();
    assert!(!drag.is_dragging());
    assert_eq!(up.capture, PointerCapture::Release);
    assert_eq!(up.cursor, Some(CursorRequest::Default));
    assert_eq!(drag.pointer_move(&ray_down(2.0, 2.0)).position, None);
}

#[test]
fn hover_cursor_cycle() {
    let mut drag = plane(false);
    assert_eq!(drag.pointer_over().cursor, Some(CursorRequest::Grab));
    assert!(drag.is_hovering());
    assert_eq!(drag.pointer_out().cursor, Some(CursorRequest::Default));
    assert!(!drag.is_hovering());
}

#[test]
fn clamp_keeps_relief_over_the_case() {
    let mut drag = plane(true);
    drag.pointer_down(&ray_down(0.0, 0.0), Vec2::ZERO);
    let pos = drag
        .pointer_move(&ray_down(10.0, -20.0))
        .position
        .expect("position");
    let bounds = CaseGeometry::default().relief_bounds(RELIEF_MARGIN);
    assert!(bounds.contains(pos));
    assert!((pos - Vec2::new(3.0, -6.5)).length() < 1e-4, "got {pos:?}");
}

#[test]
fn unclamped_drag_can_leave_the_footprint() {
    let mut drag = plane(false);
    drag.pointer_down(&ray_down(0.0, 0.0), Vec2::ZERO);
    let pos = drag
        .pointer_move(&ray_down(10.0, 0.0))
        .position
        .expect("position");
    assert!((pos.x - 10.0).abs() < 1e-4);
}

#[test]
fn ray_parallel_to_plane_misses() {
    let mut drag = plane(false);
    let ray = Ray::new(Vec3::new(0.0, 5.0, 10.0), Vec3::X);
    let resp = drag.pointer_down(&ray, Vec2::ZERO);
    assert_eq!(resp, DragResponse::default());
    assert!(!drag.is_dragging());
}

#[test]
fn cancel_mid_drag_releases_capture() {
    let mut drag = plane(false);
    drag.pointer_down(&ray_down(0.0, 0.0), Vec2::ZERO);
    let resp = drag.cancel();
    assert!(!drag.is_dragging());
    assert_eq!(resp.capture, PointerCapture::Release);

    let idle = drag.cancel();
    assert_eq!(idle.capture, PointerCapture::Unchanged);
}

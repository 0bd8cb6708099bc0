use glam::{Vec2, Vec3};
use relief_core::*;

fn params(generated: bool, adjust_mode: bool) -> ReliefParams {
    ReliefParams {
        generated,
        adjust_mode,
        ..ReliefParams::default()
    }
}

fn composer() -> SceneComposer {
    SceneComposer::new(SceneConfig::default())
}

#[test]
fn relief_hidden_until_generated() {
    let scene = composer().compose(&params(false, false), None, false);
    assert!(!scene.relief.visible);
    assert_eq!(scene.relief.variant, SurfaceVariant::Plain);

    let scene = composer().compose(&params(true, false), None, false);
    assert!(scene.relief.visible);
    assert_eq!(scene.relief.variant, SurfaceVariant::ClippedDiscard);
}

#[test]
fn adjust_mode_switches_hit_testing_to_capture_plane() {
    let scene = composer().compose(&params(true, true), None, true);
    let plane = scene
        .interaction_plane
        .expect("capture plane while adjusting");
    let relief_y = CaseGeometry::default().relief_y();
    assert!((plane.plane_y - relief_y).abs() < 1e-6);
    assert!(!scene.case.hit_test_enabled);
    assert!(!scene.relief.hit_test_enabled);
    assert!(!scene.orbit_enabled);
    assert_eq!(scene.relief.variant, SurfaceVariant::ClippedTinted);
    assert_eq!(scene.pick_targets().len(), 3);
}

#[test]
fn no_capture_plane_before_generation() {
    let scene = composer().compose(&params(false, true), None, false);
    assert!(scene.interaction_plane.is_none());
    assert!(!scene.orbit_enabled);
    assert_eq!(scene.pick_targets().len(), 2);
}

#[test]
fn orbit_enabled_outside_adjust_mode() {
    let scene = composer().compose(&params(true, false), None, true);
    assert!(scene.orbit_enabled);
    assert!(scene.case.hit_test_enabled);
    assert!(scene.interaction_plane.is_none());
}

#[test]
fn relief_size_follows_texture_aspect_and_scale() {
    let p = ReliefParams {
        size: 20.0,
        ..params(true, false)
    };
    let scene = composer().compose(&p, Some(TextureDims::new(1600, 900)), true);
    let size = scene.relief.world_size();
    assert!((size.x - 7.0 * 16.0 / 9.0 * 0.3).abs() < 1e-4);
    assert!((size.y - 7.0 * 0.3).abs() < 1e-4);

    let scene = composer().compose(&p, None, false);
    assert_eq!(scene.relief.base_size, Vec2::splat(7.0));
    assert!(!scene.relief.textured);
}

#[test]
fn displacement_tracks_height() {
    let p = ReliefParams {
        height: 10.0,
        ..params(true, false)
    };
    let scene = composer().compose(&p, None, true);
    assert!((scene.relief.displacement_scale - 0.5).abs() < 1e-6);
}

#[test]
fn relief_sits_on_the_case_top_at_its_position() {
    let p = ReliefParams {
        position: Vec2::new(1.0, -2.0),
        ..params(true, false)
    };
    let scene = composer().compose(&p, None, true);
    let centre = scene.relief.local_to_world(Vec2::ZERO);
    let y = CaseGeometry::default().relief_y();
    assert!((centre - Vec3::new(1.0, y, -2.0)).length() < 1e-5);
}

#[test]
fn relief_lies_flat_with_up_toward_negative_z() {
    let scene = composer().compose(&params(true, false), None, true);
    let half = scene.relief.world_size() * 0.5;
    let y = CaseGeometry::default().relief_y();
    let right = scene.relief.local_to_world(Vec2::new(0.5, 0.0));
    let top = scene.relief.local_to_world(Vec2::new(0.0, 0.5));
    assert!((right - Vec3::new(half.x, y, 0.0)).length() < 1e-4);
    assert!((top - Vec3::new(0.0, y, -half.y)).length() < 1e-4);
}

#[test]
fn in_plane_rotation_turns_about_world_y() {
    let p = ReliefParams {
        rotation_degrees: 90.0,
        ..params(true, false)
    };
    let scene = composer().compose(&p, None, true);
    let half = scene.relief.world_size() * 0.5;
    let right = scene.relief.local_to_world(Vec2::new(0.5, 0.0));
    assert!(right.x.abs() < 1e-4);
    assert!((right.z + half.x).abs() < 1e-4);
}

#[test]
fn sun_matrix_keeps_origin_inside_shadow_volume() {
    let lights = Lights::default();
    let clip = lights.sun_view_projection().project_point3(Vec3::ZERO);
    assert!(clip.x.abs() < 1e-4 && clip.y.abs() < 1e-4);
    assert!((0.0..=1.0).contains(&clip.z));
    assert!((lights.sun_direction().length() - 1.0).abs() < 1e-6);
}

#[test]
fn composer_config_deserializes_with_defaults() {
    let config: SceneConfig =
        serde_json::from_str(r#"{"clamp_drag": false}"#).expect("valid config");
    assert!(!config.clamp_drag);
    assert_eq!(config.default_depth_map_url, DEFAULT_DEPTH_MAP_URL);
    assert_eq!(config.case, CaseGeometry::default());
}

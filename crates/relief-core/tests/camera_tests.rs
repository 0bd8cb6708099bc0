use glam::Vec3;
use relief_core::*;

fn setup() -> (Camera, OrbitRig, CameraController) {
    let camera = Camera::default();
    let rig = OrbitRig::default();
    let controller = CameraController::new(&camera, &rig);
    (camera, rig, controller)
}

#[test]
fn enters_top_down_and_disables_orbit() {
    let (mut camera, mut rig, mut ctl) = setup();
    assert_eq!(ctl.mode(), CameraMode::Orbit);

    let changed = ctl.update(true, &mut camera, &mut rig);
    assert_eq!(changed, Some(CameraMode::TopDown));
    assert_eq!(camera.eye, TOP_DOWN_EYE);
    assert_eq!(camera.up, TOP_DOWN_UP);
    assert_eq!(camera.target, Vec3::ZERO);
    assert!(!rig.is_enabled());

    // steady state re-pins without reporting a transition
    camera.eye = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(ctl.update(true, &mut camera, &mut rig), None);
    assert_eq!(camera.eye, TOP_DOWN_EYE);
}

#[test]
fn leaving_top_down_restores_the_orbit_pose_exactly() {
    let (mut camera, mut rig, mut ctl) = setup();
    rig.rotate_by_pixels(120.0, -40.0, 800.0);
    for _ in 0..10 {
        ctl.update(false, &mut camera, &mut rig);
        rig.update(&mut camera);
    }
    let before = camera.eye;
    let before_target = rig.target();
    assert_ne!(before, CAMERA_START_EYE);

    ctl.update(true, &mut camera, &mut rig);
    let changed = ctl.update(false, &mut camera, &mut rig);
    assert_eq!(changed, Some(CameraMode::Orbit));
    assert_eq!(camera.eye, before);
    assert_eq!(camera.target, before_target);
    assert_eq!(rig.target(), before_target);
    assert_eq!(camera.up, Vec3::Y);
    assert!(rig.is_enabled());
}

#[test]
fn restore_then_idle_rig_leaves_camera_untouched() {
    let (mut camera, mut rig, mut ctl) = setup();
    ctl.update(true, &mut camera, &mut rig);
    ctl.update(false, &mut camera, &mut rig);
    assert!(!rig.update(&mut camera));
    assert_eq!(camera.eye, CAMERA_START_EYE);
}

#[test]
fn orbit_input_is_ignored_while_disabled() {
    let (mut camera, mut rig, mut ctl) = setup();
    ctl.update(true, &mut camera, &mut rig);
    rig.rotate_by_pixels(200.0, 0.0, 800.0);
    rig.zoom_by_wheel(100.0);
    assert!(rig.is_idle());
    assert!(!rig.update(&mut camera));
}

#[test]
fn orbit_keeps_distance_and_zoom_scales_it() {
    let mut camera = Camera::default();
    let mut rig = OrbitRig::default();
    rig.rotate_by_pixels(100.0, 0.0, 800.0);
    assert!(rig.update(&mut camera));
    assert!((camera.eye.length() - 15.0).abs() < 1e-3);
    assert_eq!(camera.target, Vec3::ZERO);

    rig.zoom_by_wheel(100.0);
    rig.update(&mut camera);
    assert!((camera.eye.length() - 15.0 / ORBIT_ZOOM_STEP).abs() < 1e-3);
}

#[test]
fn zoom_is_clamped_to_limits() {
    let mut camera = Camera::default();
    let mut rig = OrbitRig::default();
    for _ in 0..200 {
        rig.zoom_by_wheel(-100.0);
        rig.update(&mut camera);
    }
    assert!((camera.eye.length() - ORBIT_MIN_DISTANCE).abs() < 1e-3);
}

#[test]
fn polar_angle_stays_above_the_horizon() {
    let mut camera = Camera::default();
    let mut rig = OrbitRig::default();
    for _ in 0..50 {
        rig.rotate_by_pixels(0.0, -400.0, 800.0);
        rig.update(&mut camera);
    }
    assert!(camera.eye.y > 0.0);
}

#[test]
fn aspect_ignores_degenerate_sizes() {
    let mut camera = Camera::default();
    camera.set_aspect_from_size(1600, 900);
    assert!((camera.aspect - 16.0 / 9.0).abs() < 1e-6);
    camera.set_aspect_from_size(0, 900);
    assert!((camera.aspect - 16.0 / 9.0).abs() < 1e-6);
}

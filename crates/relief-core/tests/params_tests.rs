use relief_core::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn size_maps_linearly_onto_scale() {
    assert!(approx(size_to_scale(20.0), 0.3));
    assert!(approx(size_to_scale(200.0), 2.5));
    assert!(approx(size_to_scale(110.0), 1.4));
    let mut prev = size_to_scale(20.0);
    for size in (21..=200).map(|s| s as f32) {
        let next = size_to_scale(size);
        assert!(next > prev, "not increasing at {size}");
        assert!(approx(next - prev, 2.2 / 180.0));
        prev = next;
    }
}

#[test]
fn height_maps_onto_displacement() {
    assert!(approx(height_to_displacement(1.0), 0.05));
    assert!(approx(height_to_displacement(5.0), 0.25));
    assert!(approx(height_to_displacement(10.0), 0.5));
    assert_eq!(height_to_displacement(0.0), 0.0);
    for h in 1..10 {
        let h = h as f32;
        assert!(height_to_displacement(h + 1.0) > height_to_displacement(h));
        assert!(approx(height_to_displacement(h), h / 10.0 * 0.5));
    }
}

#[test]
fn defaults_are_centred_and_uncommitted() {
    let p = ReliefParams::default();
    assert_eq!(p.position, glam::Vec2::ZERO);
    assert_eq!(p.height, DEFAULT_HEIGHT);
    assert_eq!(p.size, DEFAULT_SIZE);
    assert!(!p.generated);
    assert!(!p.adjust_mode);
}

#[test]
fn drag_requires_generated_and_adjust_mode() {
    let mut p = ReliefParams::default();
    assert!(!p.drag_enabled());
    p.adjust_mode = true;
    assert!(!p.drag_enabled(), "adjust mode alone does not enable drag");
    p.generated = true;
    assert!(p.drag_enabled());
    p.adjust_mode = false;
    assert!(!p.drag_enabled());
}

#[test]
fn rotation_is_converted_to_radians() {
    let p = ReliefParams {
        rotation_degrees: 180.0,
        ..ReliefParams::default()
    };
    assert!(approx(p.rotation_radians(), std::f32::consts::PI));
}

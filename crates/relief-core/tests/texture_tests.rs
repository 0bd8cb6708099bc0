use relief_core::*;

const DEFAULT: &str = "/test-depth.jpg";

fn loaded(handle: u32, w: u32, h: u32) -> Result<LoadedTexture<u32>, TextureLoadError> {
    Ok(LoadedTexture {
        handle,
        dims: TextureDims::new(w, h),
    })
}

#[test]
fn missing_or_blank_url_loads_the_default() {
    let mut slot: TextureSlot<u32> = TextureSlot::new(DEFAULT);
    assert_eq!(slot.request(None).url(), DEFAULT);
    assert_eq!(slot.request(Some("  ")).url(), DEFAULT);
    assert_eq!(slot.request(Some("/a.png")).url(), "/a.png");
}

#[test]
fn first_load_installs_without_release() {
    let mut slot: TextureSlot<u32> = TextureSlot::new(DEFAULT);
    let t = slot.request(None);
    assert!(slot.is_loading());
    let done = slot.finish(&t, loaded(1, 512, 512));
    assert_eq!(done.outcome, LoadOutcome::Installed);
    assert_eq!(done.release, None);
    assert_eq!(slot.active().map(|t| t.handle), Some(1));
    assert!(!slot.is_loading());
}

#[test]
fn replacing_releases_the_previous_texture_once() {
    let mut slot: TextureSlot<u32> = TextureSlot::new(DEFAULT);
    let a = slot.request(Some("/a.png"));
    let _ = slot.finish(&a, loaded(1, 100, 100));

    let b = slot.request(Some("/b.png"));
    // A stays visible until B arrives
    assert_eq!(slot.active().map(|t| t.handle), Some(1));
    let done = slot.finish(&b, loaded(2, 100, 50));
    assert_eq!(done.release, Some(1));
    assert_eq!(slot.active().map(|t| t.handle), Some(2));
    assert_eq!(slot.dims(), Some(TextureDims::new(100, 50)));
}

#[test]
fn rapid_requests_leave_one_active_texture() {
    let mut slot: TextureSlot<u32> = TextureSlot::new(DEFAULT);
    let a = slot.request(Some("/a.png"));
    let b = slot.request(Some("/b.png"));
    assert!(!slot.is_current(&a));
    assert!(slot.is_current(&b));

    // B resolves first, then the stale A
    let done_b = slot.finish(&b, loaded(2, 64, 64));
    assert_eq!(done_b.outcome, LoadOutcome::Installed);
    assert_eq!(done_b.release, None);
    let done_a = slot.finish(&a, loaded(1, 64, 64));
    assert_eq!(done_a.outcome, LoadOutcome::Superseded);
    assert_eq!(done_a.release, Some(1));
    assert_eq!(slot.active().map(|t| t.handle), Some(2));
}

#[test]
fn stale_result_arriving_first_is_dropped() {
    let mut slot: TextureSlot<u32> = TextureSlot::new(DEFAULT);
    let a = slot.request(Some("/a.png"));
    let b = slot.request(Some("/b.png"));
    let done_a = slot.finish(&a, loaded(1, 64, 64));
    assert_eq!(done_a.outcome, LoadOutcome::Superseded);
    assert_eq!(done_a.release, Some(1));
    assert!(slot.active().is_none());
    assert!(slot.is_loading());

    let done_b = slot.finish(&b, loaded(2, 64, 64));
    assert_eq!(done_b.release, None);
    assert_eq!(slot.active().map(|t| t.handle), Some(2));
}

#[test]
fn failed_load_falls_back_to_untextured() {
    let mut slot: TextureSlot<u32> = TextureSlot::new(DEFAULT);
    let a = slot.request(None);
    let _ = slot.finish(&a, loaded(1, 64, 64));

    let b = slot.request(Some("/missing.png"));
    let err = TextureLoadError::Status {
        url: "/missing.png".into(),
        status: 404,
    };
    let done = slot.finish(&b, Err(err));
    assert_eq!(done.outcome, LoadOutcome::Failed);
    assert_eq!(done.release, Some(1));
    assert!(slot.active().is_none());
    assert_eq!(slot.dims(), None);
}

#[test]
fn version_bumps_on_every_change() {
    let mut slot: TextureSlot<u32> = TextureSlot::new(DEFAULT);
    let v0 = slot.version();
    let a = slot.request(None);
    assert_eq!(
        slot.version(),
        v0,
        "requesting alone changes nothing visible"
    );
    let _ = slot.finish(&a, loaded(1, 8, 8));
    let v1 = slot.version();
    assert!(v1 > v0);
    assert_eq!(slot.clear(), Some(1));
    assert!(slot.version() > v1);
}

#[test]
fn clear_invalidates_in_flight_loads() {
    let mut slot: TextureSlot<u32> = TextureSlot::new(DEFAULT);
    let a = slot.request(None);
    assert_eq!(slot.clear(), None);
    let done = slot.finish(&a, loaded(1, 8, 8));
    assert_eq!(done.outcome, LoadOutcome::Superseded);
    assert_eq!(done.release, Some(1));
    assert!(slot.active().is_none());
}

#[test]
fn plane_follows_image_aspect() {
    let wide = base_plane_size(Some(TextureDims::new(1920, 1080)));
    assert!((wide.x - 7.0 * 16.0 / 9.0).abs() < 1e-4);
    assert!((wide.x - 12.444).abs() < 1e-3);
    assert_eq!(wide.y, 7.0);

    assert_eq!(base_plane_size(None), glam::Vec2::splat(7.0));
    assert_eq!(
        base_plane_size(Some(TextureDims::new(0, 10))),
        glam::Vec2::splat(7.0)
    );
}

#[test]
fn load_errors_render_readably() {
    let e = TextureLoadError::Fetch {
        url: "/x.png".into(),
        reason: "offline".into(),
    };
    assert_eq!(e.to_string(), "fetch failed for /x.png: offline");
    assert_eq!(
        TextureLoadError::EmptyImage.to_string(),
        "image has zero size"
    );
}

//! Relief surface shading variants.
//!
//! Each variant is a complete fragment program in `shaders/scene.wgsl`; the
//! renderer builds one pipeline per variant and picks one per frame from
//! `(generated, adjust_mode)`. [`shade_fragment`] mirrors the WGSL fragment
//! logic on the CPU so the clip rules can be exercised without a GPU.
//! Relief fragments keep their alpha (alpha map and overflow tint) and are
//! composited over the already drawn case; the case itself is opaque.

use crate::case::CaseGeometry;
use crate::constants::{ALPHA_TEST, OVERFLOW_TINT, OVERFLOW_TINT_MIX};
use glam::{Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceVariant {
    /// No clipping; used before a relief is committed.
    Plain,
    /// Fragments outside the case footprint are discarded.
    ClippedDiscard,
    /// Fragments outside the case footprint are tinted toward the warning colour.
    ClippedTinted,
}

impl SurfaceVariant {
    pub const ALL: [SurfaceVariant; 3] = [
        SurfaceVariant::Plain,
        SurfaceVariant::ClippedDiscard,
        SurfaceVariant::ClippedTinted,
    ];

    pub fn select(generated: bool, adjust_mode: bool) -> Self {
        match (generated, adjust_mode) {
            (false, _) => SurfaceVariant::Plain,
            (true, false) => SurfaceVariant::ClippedDiscard,
            (true, true) => SurfaceVariant::ClippedTinted,
        }
    }

    /// Fragment entry point in `scene.wgsl`.
    pub fn fragment_entry(self) -> &'static str {
        match self {
            SurfaceVariant::Plain => "fs_relief_plain",
            SurfaceVariant::ClippedDiscard => "fs_relief_clip_discard",
            SurfaceVariant::ClippedTinted => "fs_relief_clip_tinted",
        }
    }

    pub fn index(self) -> usize {
        match self {
            SurfaceVariant::Plain => 0,
            SurfaceVariant::ClippedDiscard => 1,
            SurfaceVariant::ClippedTinted => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SurfaceVariant::Plain => "relief_plain",
            SurfaceVariant::ClippedDiscard => "relief_clip_discard",
            SurfaceVariant::ClippedTinted => "relief_clip_tinted",
        }
    }

    /// Every relief variant is drawn transparent.
    pub fn blend(self) -> SurfaceBlend {
        SurfaceBlend::Alpha
    }
}

/// How a pipeline writes its fragment colour into the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceBlend {
    /// Colour replaces the target; used for the case body.
    Opaque,
    /// Straight-alpha "over" compositing.
    Alpha,
}

impl SurfaceBlend {
    /// Resolve a fragment `src` drawn over the target colour `dst`.
    pub fn composite(self, src: Vec4, dst: Vec3) -> Vec3 {
        match self {
            SurfaceBlend::Opaque => src.truncate(),
            SurfaceBlend::Alpha => dst.lerp(src.truncate(), src.w),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FragmentInput {
    pub world_position: Vec3,
    pub base_color: Vec4,
    /// Alpha-map sample (texture green channel); `None` when untextured.
    pub mask: Option<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FragmentOutcome {
    Color(Vec4),
    Discard,
}

impl FragmentOutcome {
    pub fn is_discard(&self) -> bool {
        matches!(self, FragmentOutcome::Discard)
    }
}

/// Strictly-outside test against the case footprint; the boundary itself is inside.
#[inline]
pub fn outside_footprint(case: &CaseGeometry, world_position: Vec3) -> bool {
    let half = case.half_footprint();
    world_position.x.abs() > half.x || world_position.z.abs() > half.y
}

pub fn shade_fragment(
    variant: SurfaceVariant,
    case: &CaseGeometry,
    input: FragmentInput,
) -> FragmentOutcome {
    let mut color = input.base_color;
    if variant != SurfaceVariant::Plain && outside_footprint(case, input.world_position) {
        match variant {
            SurfaceVariant::ClippedTinted => {
                color = color.lerp(Vec4::from_array(OVERFLOW_TINT), OVERFLOW_TINT_MIX);
            }
            _ => return FragmentOutcome::Discard,
        }
    }
    if let Some(mask) = input.mask {
        color.w *= mask;
    }
    if color.w < ALPHA_TEST {
        return FragmentOutcome::Discard;
    }
    FragmentOutcome::Color(color)
}

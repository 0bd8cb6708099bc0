use glam::Vec3;

// Shared layout/shading/camera constants used by the core and the web frontend.

// Case body (case-local units; X = width, Y = thickness, Z = height)
pub const CASE_WIDTH: f32 = 7.0;
pub const CASE_THICKNESS: f32 = 0.5;
pub const CASE_HEIGHT: f32 = 14.0;

// Relief placement
pub const RELIEF_STANDOFF: f32 = 0.02; // lift above the top face to avoid z-fighting
pub const RELIEF_MARGIN: f32 = 0.5; // inset from the case edge used by the position clamp
pub const RELIEF_BASE_EXTENT: f32 = 7.0; // plane height in world units before size scaling
pub const RELIEF_SEGMENTS: u32 = 256;

// Parameter ranges (enforced by the form controls)
pub const HEIGHT_MIN: f32 = 1.0;
pub const HEIGHT_MAX: f32 = 10.0;
pub const SIZE_MIN: f32 = 20.0;
pub const SIZE_MAX: f32 = 200.0;
pub const ROTATION_MAX_DEGREES: f32 = 360.0;

pub const DEFAULT_HEIGHT: f32 = 5.0;
pub const DEFAULT_SIZE: f32 = 60.0;

// size -> scale: 0.3 at SIZE_MIN, 2.5 at SIZE_MAX
pub const SCALE_AT_SIZE_MIN: f32 = 0.3;
pub const SCALE_SPAN: f32 = 2.2;

// height (mm) -> displacement: height / 10 * 0.5
pub const DISPLACEMENT_HEIGHT_DIVISOR: f32 = 10.0;
pub const DISPLACEMENT_GAIN: f32 = 0.5;

// Shading
pub const ALPHA_TEST: f32 = 0.05;
pub const OVERFLOW_TINT: [f32; 4] = [1.0, 0.0, 0.0, 0.5];
pub const OVERFLOW_TINT_MIX: f32 = 0.6;
pub const RELIEF_COLOR: [f32; 3] = [0.658, 0.658, 0.658]; // #d4d4d4, linear
pub const RELIEF_ROUGHNESS: f32 = 0.4;
pub const RELIEF_METALNESS: f32 = 0.1;
pub const CASE_COLOR: [f32; 3] = [0.023, 0.023, 0.023]; // #2a2a2a, linear
pub const CASE_ROUGHNESS: f32 = 1.0;

// Camera
pub const CAMERA_START_EYE: Vec3 = Vec3::new(0.0, 0.0, 15.0);
pub const CAMERA_FOVY_DEGREES: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;
pub const TOP_DOWN_EYE: Vec3 = Vec3::new(0.0, 18.0, 0.0);
pub const TOP_DOWN_UP: Vec3 = Vec3::new(0.0, 0.0, -1.0); // screen-up = world -Z

// Orbit rig
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_MIN_DISTANCE: f32 = 5.0;
pub const ORBIT_MAX_DISTANCE: f32 = 30.0;
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::FRAC_PI_2 - 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95;
pub const ORBIT_EPSILON: f32 = 1e-6;

// Interaction
pub const CAPTURE_PLANE_EXTENT: f32 = 2000.0;
pub const PARALLEL_EPSILON: f32 = 1e-8;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const SUN_POSITION: Vec3 = Vec3::new(5.0, 10.0, 5.0);
pub const SUN_INTENSITY: f32 = 2.0;
pub const SHADOW_MAP_SIZE: u32 = 2048;
pub const SHADOW_HALF_EXTENT: f32 = 20.0;
pub const SHADOW_NEAR: f32 = 1.0;
pub const SHADOW_FAR: f32 = 60.0;

// Assets
pub const DEFAULT_DEPTH_MAP_URL: &str = "/test-depth.jpg";

//! DOM ids and frontend-only tuning values.
//!
//! Scene/camera/shading constants live in `relief_core::constants`; this file
//! only holds what the browser layer needs to find its elements and draw.

// Preview
pub const CANVAS_ID: &str = "app-canvas";
pub const PREVIEW_ERROR_ID: &str = "preview-error";
pub const PREVIEW_ERROR_MESSAGE_ID: &str = "preview-error-message";
pub const PREVIEW_RETRY_ID: &str = "preview-retry";

// Relief parameter inputs; each has a "<id>-value" label next to it
pub const HEIGHT_INPUT_ID: &str = "emboss-height";
pub const SIZE_INPUT_ID: &str = "emboss-size";
pub const ROTATION_INPUT_ID: &str = "relief-rotation";
pub const VALUE_LABEL_SUFFIX: &str = "-value";

// Action buttons
pub const GENERATE_RELIEF_ID: &str = "generate-relief";
pub const ADJUST_TOGGLE_ID: &str = "adjust-toggle";
pub const EXPORT_MODEL_ID: &str = "export-model";
pub const AI_GENERATE_ID: &str = "ai-generate";
pub const AI_PROMPT_ID: &str = "ai-prompt";
pub const UPLOADED_IMAGE_ID: &str = "uploaded-image";

pub const ADJUST_LABEL_IDLE: &str = "Adjust position";
pub const ADJUST_LABEL_ACTIVE: &str = "Done";
pub const AI_LABEL_IDLE: &str = "Generate with AI";
pub const AI_LABEL_IMAGE: &str = "Generating image...";
pub const AI_LABEL_DEPTH: &str = "Generating depth map...";

// Rendering
pub const CLEAR_COLOR: [f64; 3] = [0.012, 0.013, 0.016];
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
pub const SHADOW_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

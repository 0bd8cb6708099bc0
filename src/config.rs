use relief_core::SceneConfig;

pub const ATTR_DEFAULT_DEPTH_MAP: &str = "data-default-depth-map";
pub const ATTR_BACKEND_URL: &str = "data-backend-url";
pub const ATTR_CLAMP_DRAG: &str = "data-clamp-drag";

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Frontend configuration: the injected scene config plus the AI backend
/// location. Built once at startup from `data-*` attributes on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub scene: SceneConfig,
    pub backend_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scene: SceneConfig::default(),
            backend_base_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// `get` looks up an attribute by name; missing or blank values keep the default.
    pub fn from_attributes(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = non_blank(get(ATTR_DEFAULT_DEPTH_MAP)) {
            config.scene.default_depth_map_url = url;
        }
        if let Some(url) = non_blank(get(ATTR_BACKEND_URL)) {
            config.backend_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(flag) = get(ATTR_CLAMP_DRAG).and_then(|v| parse_flag(&v)) {
            config.scene.clamp_drag = flag;
        }
        config
    }
}

/// HTML-ish boolean: "", "true", "1", "on", "yes" are true; "false", "0",
/// "off", "no" are false; anything else is ignored.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

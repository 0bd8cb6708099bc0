// Host-side tests for startup configuration parsing.

#![allow(dead_code)]
mod config {
    include!("../src/config.rs");
}

use config::*;
use std::collections::HashMap;

fn from_map(pairs: &[(&str, &str)]) -> AppConfig {
    let attrs: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_attributes(|name| attrs.get(name).cloned())
}

#[test]
fn no_attributes_gives_defaults() {
    let config = from_map(&[]);
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.backend_base_url, DEFAULT_BACKEND_URL);
    assert_eq!(
        config.scene.default_depth_map_url,
        relief_core::DEFAULT_DEPTH_MAP_URL
    );
    assert!(config.scene.clamp_drag);
}

#[test]
fn attributes_override_defaults() {
    let config = from_map(&[
        (ATTR_DEFAULT_DEPTH_MAP, "/assets/logo-depth.png"),
        (ATTR_BACKEND_URL, "https://api.example.test/"),
        (ATTR_CLAMP_DRAG, "false"),
    ]);
    assert_eq!(config.scene.default_depth_map_url, "/assets/logo-depth.png");
    assert_eq!(config.backend_base_url, "https://api.example.test");
    assert!(!config.scene.clamp_drag);
}

#[test]
fn blank_attributes_are_ignored() {
    let config = from_map(&[(ATTR_DEFAULT_DEPTH_MAP, "  "), (ATTR_BACKEND_URL, "")]);
    assert_eq!(config, AppConfig::default());
}

#[test]
fn flag_parsing() {
    for on in ["", "true", "1", "ON", " yes "] {
        assert_eq!(parse_flag(on), Some(true), "{on:?}");
    }
    for off in ["false", "0", "Off", "no"] {
        assert_eq!(parse_flag(off), Some(false), "{off:?}");
    }
    assert_eq!(parse_flag("maybe"), None);
}

#[test]
fn unknown_flag_value_keeps_default() {
    let config = from_map(&[(ATTR_CLAMP_DRAG, "sometimes")]);
    assert!(config.scene.clamp_drag);
}

//! WASM bindings for dag-layout.
//!
//! Exposes `layoutGraph` and `layoutWithConfig` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::LayoutConfig;

/// Lay out a graph document and return the elements as a JSON string.
///
/// - `json`: bare graph or result document with a `graph` field
/// - `direction`: "TB", "BT", "LR" or "RL"
/// - `show_params`: keep parameter nodes
#[wasm_bindgen(js_name = "layoutGraph")]
pub fn layout_graph(json: &str, direction: &str, show_params: bool) -> Result<String, JsError> {
    let direction = direction
        .parse()
        .map_err(|e: crate::LayoutError| JsError::new(&e.to_string()))?;
    let config = LayoutConfig::new()
        .with_direction(direction)
        .with_show_params(show_params);
    crate::layout_json(json, &config).map_err(|e| JsError::new(&e.to_string()))
}

/// Same as `layoutGraph` with every option taken from a JSON config object.
#[wasm_bindgen(js_name = "layoutWithConfig")]
pub fn layout_with_config(json: &str, config: &str) -> Result<String, JsError> {
    let config = LayoutConfig::from_json(config).map_err(|e| JsError::new(&e.to_string()))?;
    crate::layout_json(json, &config).map_err(|e| JsError::new(&e.to_string()))
}

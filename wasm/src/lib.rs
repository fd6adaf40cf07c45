use enclosure_art::config::{Config, parse_config};
use enclosure_art::{Artwork, render_artwork};
use wasm_bindgen::prelude::*;

fn build_config(config_json: Option<String>) -> Result<Config, String> {
    match config_json {
        Some(raw) => parse_config(&raw).map_err(|error| error.to_string()),
        None => Ok(Config::default()),
    }
}

fn render_named(name: &str, config_json: Option<String>) -> Result<String, String> {
    let artwork =
        Artwork::from_name(name).ok_or_else(|| format!("unknown artwork '{name}'"))?;
    let config = build_config(config_json)?;
    Ok(render_artwork(artwork, &config))
}

/// Render one artwork (`dial`, `arm`, `reel` or `vent`) to SVG.
///
/// `config_json` uses the same format as the CLI config file.
#[wasm_bindgen]
pub fn render_artwork_svg(name: &str, config_json: Option<String>) -> Result<String, JsValue> {
    render_named(name, config_json).map_err(|error| JsValue::from_str(&error))
}

#[wasm_bindgen]
pub fn describe_arc(x: f64, y: f64, radius: f64, start_deg: f64, end_deg: f64) -> String {
    enclosure_art::describe_arc(x, y, radius, start_deg, end_deg)
}

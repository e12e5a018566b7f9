//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Painting snapshots into the DOM (`dom`, web only)
//! - Reading initial geometry and run parameters from the page
//! - A scripted headless run for native builds (`headless`)

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod headless;

/// Parse a CSS pixel length like `"120px"` the way `parseInt` would.
/// Anything unparseable is 0.
pub fn parse_px(value: &str) -> f32 {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number.parse::<f32>().map(f32::trunc).unwrap_or(0.0)
}

/// Format a coordinate as a whole-pixel CSS length
pub fn px(value: f32) -> String {
    format!("{}px", value.round() as i64)
}

/// Extract `seed=<u64>` from a URL query string (`?seed=42&...`)
pub fn seed_from_query(search: &str) -> Option<u64> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "seed")
        .and_then(|(_, value)| value.parse().ok())
}

use log::{debug, warn, Level};
use serde::Deserialize;
use thiserror::Error;
use web_sys::Document;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Id of the optional `<script type="application/json">` block carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed #site-config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Timings and offsets used by the page wiring.
///
/// Every field can be overridden by the page, missing fields keep their
/// defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub notification_ttl_ms: u32,
    pub modal_exit_ms: u32,
    pub submit_delay_ms: u32,
    /// Distance above a section's top at which its nav link becomes active.
    pub nav_lookahead_px: f64,
    /// Height of the fixed navbar subtracted from smooth-scroll targets.
    pub scroll_offset_px: f64,
    pub navbar_scrolled_px: f64,
    pub press_feedback_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            notification_ttl_ms: 5_000,
            modal_exit_ms: 300,
            submit_delay_ms: 2_000,
            nav_lookahead_px: 200.0,
            scroll_offset_px: 70.0,
            navbar_scrolled_px: 50.0,
            press_feedback_ms: 150,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads overrides from the page, falling back to defaults on any problem.
    pub fn load(document: &Document) -> Self {
        let raw = match document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(raw) => raw,
            None => return Self::default(),
        };

        match Self::from_json(&raw) {
            Ok(config) => {
                debug!("Loaded site config overrides: {:?}", config);
                config
            }
            Err(e) => {
                warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SiteConfig;

    #[test]
    fn empty_override_keeps_defaults() {
        assert_eq!(SiteConfig::from_json("  ").unwrap(), SiteConfig::default());
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_override_fills_remaining_fields() {
        let config = SiteConfig::from_json(r#"{"submit_delay_ms": 10, "nav_lookahead_px": 120}"#).unwrap();
        assert_eq!(config.submit_delay_ms, 10);
        assert_eq!(config.nav_lookahead_px, 120.0);
        assert_eq!(config.notification_ttl_ms, 5_000);
        assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(SiteConfig::from_json("{ submit_delay_ms: }").is_err());
        assert!(SiteConfig::from_json(r#"{"modal_exit_ms": "slow"}"#).is_err());
    }
}

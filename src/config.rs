//! Application Configuration
//!
//! Defaults can be overridden by an inline JSON block in `index.html`:
//! `<script id="app-config" type="application/json">{ "debounce_ms": 300 }</script>`

use serde::Deserialize;

use crate::search::DEFAULT_THRESHOLD;

/// Element id of the inline JSON override block
const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Search input debounce delay
    pub debounce_ms: u32,
    /// Maximum fuzzy score accepted (0.0 = exact only)
    pub search_threshold: f64,
    /// Alert shown when the list is completed
    pub celebration_message: String,
    /// Emojis for the themed confetti burst; empty disables it
    pub confetti_emojis: Vec<String>,
    pub confetti_pieces: u32,
    pub confetti_duration_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            search_threshold: DEFAULT_THRESHOLD,
            celebration_message: "Alışveriş Tamamlandı".to_string(),
            confetti_emojis: vec!["💸".to_string()],
            confetti_pieces: 120,
            confetti_duration_ms: 4000,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        if !(0.0..=1.0).contains(&config.search_threshold) {
            return Err(format!("search_threshold must be within 0..=1, got {}", config.search_threshold));
        }
        Ok(config)
    }

    /// Read overrides from the page, falling back to defaults
    pub fn load() -> Self {
        let Some(raw) = read_config_element() else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("invalid #{} block, using defaults: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

fn read_config_element() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "debounce_ms": 250 }"#).unwrap();
        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.search_threshold, 0.3);
        assert_eq!(config.celebration_message, "Alışveriş Tamamlandı");
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        assert!(AppConfig::from_json(r#"{ "search_threshold": 2.5 }"#).is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(AppConfig::from_json("{ debounce_ms: }").is_err());
    }

    #[test]
    fn test_level_filter_falls_back_to_info() {
        let mut config = AppConfig::default();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}

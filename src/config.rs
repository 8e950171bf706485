//! # Style Configuration
//!
//! Runtime knobs for the style engine, loadable from the environment or a
//! TOML file.
//!
//! ## Overview
//!
//! - **[StyleConfig]**: all tunable values with compiled-in defaults
//! - **Environment support**: `VELOUR_STYLE_CONFIG` points at a TOML file
//! - **Fallbacks**: every field defaults; a missing or broken file never
//!   prevents the style from starting
//!
//! ## Usage Examples
//!
//! ```rust
//! use velour::config::StyleConfig;
//!
//! // Environment-driven, with defaults as fallback.
//! let config = StyleConfig::from_env_or_default();
//! assert!(config.frame_radius > 0.0);
//! ```
//!
//! ```toml
//! # velour.toml
//! radius_ratio = 0.15
//! frame_radius = 9.0
//! blur_enabled = true
//! blur_coalesce_ms = 1000
//! transient_scroll_bars = true
//! menu_fill_alpha = 200
//! ```

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StyleError;

/// Environment variable naming a TOML config file.
pub const CONFIG_ENV: &str = "VELOUR_STYLE_CONFIG";

/// Tunable values of the style engine.
///
/// Every field has a compiled-in default so partial TOML files work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Corner radius of rounded controls as a fraction of their height.
    pub radius_ratio: f64,
    /// Radius of popup menu frames, in pixels.
    pub frame_radius: f64,
    /// Whether blur-behind regions are published at all.
    pub blur_enabled: bool,
    /// Quiet-period length of the blur scheduler, in milliseconds.
    pub blur_coalesce_ms: u64,
    /// Scrollbars render as overlay pills without step buttons.
    pub transient_scroll_bars: bool,
    /// Alpha of the popup menu fill (0..=255).
    pub menu_fill_alpha: u8,
    /// Splitter handle thickness, in pixels.
    pub splitter_width: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            radius_ratio: 0.15,
            frame_radius: 9.0,
            blur_enabled: true,
            blur_coalesce_ms: 1000,
            transient_scroll_bars: true,
            menu_fill_alpha: 200,
            splitter_width: 4.0,
        }
    }
}

impl StyleConfig {
    /// Load from the file named by [CONFIG_ENV], falling back to defaults.
    ///
    /// Load failures are logged, never surfaced; a style must come up even
    /// with a broken config.
    pub fn from_env_or_default() -> Self {
        match env::var(CONFIG_ENV) {
            Ok(path) => match Self::from_file(&path) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!("{CONFIG_ENV} set but unusable, using defaults: {err}");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Load from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StyleError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StyleError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path).map_err(|source| StyleError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|details| StyleError::ConfigParse {
            path: path.to_path_buf(),
            details,
        })
    }

    /// Parse from TOML content.
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Corner radius for a control of the given height.
    pub fn control_radius(&self, height: f64) -> f64 {
        self.radius_ratio * height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = StyleConfig::default();
        assert_eq!(config.radius_ratio, 0.15);
        assert_eq!(config.frame_radius, 9.0);
        assert!(config.blur_enabled);
        assert_eq!(config.blur_coalesce_ms, 1000);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = StyleConfig::from_toml_str("radius_ratio = 0.2").unwrap();
        assert_eq!(config.radius_ratio, 0.2);
        assert_eq!(config.frame_radius, 9.0);
        assert_eq!(config.menu_fill_alpha, 200);
    }

    #[test]
    fn bad_toml_reports_details() {
        assert!(StyleConfig::from_toml_str("radius_ratio = \"wide\"").is_err());
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = StyleConfig::from_file("/nonexistent/velour.toml").unwrap_err();
        assert!(matches!(err, StyleError::ConfigNotFound { .. }));
    }

    #[test]
    fn control_radius_scales_with_height() {
        let config = StyleConfig::default();
        assert_eq!(config.control_radius(20.0), 3.0);
    }
}

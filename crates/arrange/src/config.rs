//! Configuration types for the layout configuration registry.
//!
//! This module provides configuration structures that control how the
//! registry is built. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and label settings.
//! - [`LayoutConfig`] - Default [`Direction`] for direction-aware presets.
//! - [`LabelConfig`] - Display-string overrides keyed by label key.
//!
//! # Example
//!
//! ```
//! # use arrange::config::AppConfig;
//! # use arrange::direction::Direction;
//! let config: AppConfig = toml::from_str(r#"
//!     [layout]
//!     direction = "RIGHT"
//!
//!     [labels]
//!     nodeSpacing = "Abstand"
//! "#).unwrap();
//!
//! assert_eq!(config.layout().direction(), Direction::Right);
//! assert_eq!(config.labels().get("nodeSpacing"), Some("Abstand"));
//! ```

use std::collections::HashMap;

use serde::Deserialize;

use arrange_core::direction::Direction;

use crate::labels::{EnglishLabels, TableLabels};

/// Top-level configuration combining layout and label settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Label override section.
    #[serde(default)]
    labels: LabelConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and label configurations.
    ///
    /// # Arguments
    ///
    /// * `layout` - Registry layout settings.
    /// * `labels` - Display-string overrides.
    pub fn new(layout: LayoutConfig, labels: LabelConfig) -> Self {
        Self { layout, labels }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the label configuration.
    pub fn labels(&self) -> &LabelConfig {
        &self.labels
    }
}

/// Layout settings for the registry.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Direction handed to direction-aware presets when none is given explicitly.
    #[serde(default)]
    direction: Direction,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] with the specified default direction.
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    /// Returns the default [`Direction`].
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// Display-string overrides, keyed by label key (`nodeSpacing`, ...).
///
/// Keys that are not overridden resolve through [`EnglishLabels`].
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(transparent)]
pub struct LabelConfig(HashMap<String, String>);

impl LabelConfig {
    /// Creates a new [`LabelConfig`] from an override table.
    pub fn new(overrides: HashMap<String, String>) -> Self {
        Self(overrides)
    }

    /// Returns the override for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Builds the resolver used by the registry.
    pub fn resolver(&self) -> TableLabels<EnglishLabels> {
        TableLabels::new(self.0.clone(), EnglishLabels)
    }
}

#[cfg(test)]
mod tests {
    use crate::labels::LabelResolver;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.layout().direction(), Direction::Undefined);
        assert_eq!(config.labels().get("nodeSpacing"), None);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.layout().direction(), Direction::Undefined);
    }

    #[test]
    fn test_direction_is_case_insensitive() {
        let config: AppConfig = toml::from_str("[layout]\ndirection = \"down\"").unwrap();
        assert_eq!(config.layout().direction(), Direction::Down);
    }

    #[test]
    fn test_unknown_direction_is_rejected() {
        let result = toml::from_str::<AppConfig>("[layout]\ndirection = \"sideways\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_label_resolver_falls_back_to_english() {
        let labels = LabelConfig::new(HashMap::from([(
            "arrangeAllLayered".to_string(),
            "Hierarchisch".to_string(),
        )]));
        let resolver = labels.resolver();

        assert_eq!(resolver.resolve("arrangeAllLayered"), "Hierarchisch");
        assert_eq!(resolver.resolve("nodeSpacing"), "Node spacing");
    }
}

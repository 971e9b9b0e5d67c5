//! Arrange - A registry of auto-layout presets for diagram editors.
//!
//! Each preset bundles the ELK layout options for one algorithm (layered,
//! tree, force, ...) together with the subset of options a user may tune.
//! The registry is rebuilt from a layout direction on every call and never
//! fails.

pub mod config;
pub mod error;
pub mod labels;
pub mod registry;

mod presets;

pub use arrange_core::{configuration, direction, icon, options};

pub use error::{ArrangeError, RegistryError};
pub use registry::LayoutConfigurations;

use log::{debug, info};

use config::AppConfig;
use configuration::LayoutConfiguration;
use direction::Direction;
use labels::{EnglishLabels, TableLabels};

/// Builder for producing layout configuration registries.
///
/// Holds an [`AppConfig`] and the label resolver derived from it, so
/// repeated builds do not reload configuration.
///
/// # Examples
///
/// ```rust
/// use arrange::{RegistryBuilder, config::AppConfig, direction::Direction};
///
/// let builder = RegistryBuilder::new(AppConfig::default());
///
/// // Use the configured default direction
/// let configurations = builder.build();
/// assert_eq!(configurations.len(), 10);
///
/// // Or pick a direction explicitly
/// let configurations = builder.build_with_direction(Direction::Down);
/// let layered = configurations.get("elk-layered").unwrap();
/// assert_eq!(layered.option("elk.direction"), Some("DOWN"));
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    config: AppConfig,
    labels: TableLabels<EnglishLabels>,
}

impl RegistryBuilder {
    /// Create a new registry builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including direction and label overrides
    pub fn new(config: AppConfig) -> Self {
        let labels = config.labels().resolver();
        Self { config, labels }
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Build the registry using the configured default direction.
    pub fn build(&self) -> LayoutConfigurations {
        self.build_with_direction(self.config.layout().direction())
    }

    /// Build the registry for an explicit direction.
    pub fn build_with_direction(&self, direction: Direction) -> LayoutConfigurations {
        info!(direction:%; "Building layout configuration registry");
        registry::build(direction, &self.labels)
    }

    /// Look up one configuration using the configured default direction.
    ///
    /// # Errors
    ///
    /// Returns [`ArrangeError::UnknownConfiguration`] if no preset has this id.
    pub fn configuration(&self, id: &str) -> Result<LayoutConfiguration, ArrangeError> {
        self.configuration_with_direction(id, self.config.layout().direction())
    }

    /// Look up one configuration for an explicit direction.
    ///
    /// # Errors
    ///
    /// Returns [`ArrangeError::UnknownConfiguration`] if no preset has this id.
    pub fn configuration_with_direction(
        &self,
        id: &str,
        direction: Direction,
    ) -> Result<LayoutConfiguration, ArrangeError> {
        let configuration = self
            .build_with_direction(direction)
            .into_iter()
            .find(|configuration| configuration.id() == id)
            .ok_or_else(|| ArrangeError::UnknownConfiguration(id.to_string()))?;

        debug!(id; "Found layout configuration");
        Ok(configuration)
    }
}

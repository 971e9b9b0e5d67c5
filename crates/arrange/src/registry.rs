//! The layout configuration registry.
//!
//! [`build`] turns the static preset table into an ordered
//! [`LayoutConfigurations`] list for one layout direction. It is a pure
//! function: no I/O, no shared state, and every call returns a freshly
//! allocated list. Direction-aware presets (layered, tree) all receive the
//! same direction; every other preset is identical whatever the direction.
//!
//! # Example
//!
//! ```
//! use arrange::{direction::Direction, labels::EnglishLabels, registry};
//!
//! let configurations = registry::build(Direction::Right, &EnglishLabels);
//! assert_eq!(configurations.len(), 10);
//!
//! let tree = configurations.get("elk-tree").unwrap();
//! assert_eq!(tree.option("elk.direction"), Some("RIGHT"));
//! ```

use std::collections::HashSet;

use log::{debug, trace};

use arrange_core::{configuration::LayoutConfiguration, direction::Direction};

use crate::{error::RegistryError, labels::LabelResolver, presets::PRESETS};

/// Number of configurations in the registry.
pub const REGISTRY_SIZE: usize = 10;

/// Builds the registry for `direction`.
///
/// # Arguments
///
/// * `direction` - Direction threaded into every direction-aware preset.
/// * `labels` - Resolver for translatable labels.
pub fn build(direction: Direction, labels: &dyn LabelResolver) -> LayoutConfigurations {
    debug!(direction:?; "Building layout configurations");

    let configurations: Vec<_> = PRESETS
        .iter()
        .map(|preset| {
            let configuration = preset.instantiate(direction, labels);
            trace!(
                id = configuration.id(),
                direction_aware = preset.is_direction_aware();
                "Built layout configuration"
            );
            configuration
        })
        .collect();

    LayoutConfigurations { configurations }
}

/// Ordered list of layout configurations, in presentation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfigurations {
    configurations: Vec<LayoutConfiguration>,
}

impl LayoutConfigurations {
    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }

    /// Iterates over the configurations in presentation order.
    pub fn iter(&self) -> std::slice::Iter<'_, LayoutConfiguration> {
        self.configurations.iter()
    }

    pub fn as_slice(&self) -> &[LayoutConfiguration] {
        &self.configurations
    }

    pub fn into_vec(self) -> Vec<LayoutConfiguration> {
        self.configurations
    }

    /// Returns the configuration with the given `id`.
    pub fn get(&self, id: &str) -> Option<&LayoutConfiguration> {
        self.configurations
            .iter()
            .find(|configuration| configuration.id() == id)
    }

    /// Iterates over the configuration ids in presentation order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.configurations.iter().map(LayoutConfiguration::id)
    }

    /// Checks the static-data invariants of the registry.
    ///
    /// - ids are pairwise unique;
    /// - a declared configurable option list is not empty;
    /// - every configurable option key exists in the same configuration's
    ///   layout options, and is listed once.
    ///
    /// # Errors
    ///
    /// Returns the first [`RegistryError`] found.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut ids = HashSet::new();

        for configuration in &self.configurations {
            let id = configuration.id();
            if !ids.insert(id) {
                return Err(RegistryError::DuplicateId(id.to_string()));
            }

            if configuration
                .declared_configurable_options()
                .is_some_and(<[_]>::is_empty)
            {
                return Err(RegistryError::EmptyConfigurableOptions(id.to_string()));
            }

            let mut keys = HashSet::new();
            for option in configuration.configurable_options() {
                let key = option.key();
                if !configuration.layout_options().contains_key(key) {
                    return Err(RegistryError::UnknownConfigurableKey {
                        id: id.to_string(),
                        key: key.to_string(),
                    });
                }
                if !keys.insert(key) {
                    return Err(RegistryError::DuplicateConfigurableKey {
                        id: id.to_string(),
                        key: key.to_string(),
                    });
                }
            }
        }

        debug!(count = self.configurations.len(); "Layout configurations validated");
        Ok(())
    }
}

impl From<Vec<LayoutConfiguration>> for LayoutConfigurations {
    fn from(configurations: Vec<LayoutConfiguration>) -> Self {
        Self { configurations }
    }
}

impl IntoIterator for LayoutConfigurations {
    type Item = LayoutConfiguration;
    type IntoIter = std::vec::IntoIter<LayoutConfiguration>;

    fn into_iter(self) -> Self::IntoIter {
        self.configurations.into_iter()
    }
}

impl<'a> IntoIterator for &'a LayoutConfigurations {
    type Item = &'a LayoutConfiguration;
    type IntoIter = std::slice::Iter<'a, LayoutConfiguration>;

    fn into_iter(self) -> Self::IntoIter {
        self.configurations.iter()
    }
}

//! Layout configuration records.
//!
//! A [`LayoutConfiguration`] is one preset offered to the user: a stable
//! identifier, a display label, an [`Icon`], the [`LayoutOptions`] handed to
//! the layout engine, and optionally the subset of those options the user may
//! tune ([`ConfigurableOption`]).
//!
//! Every configurable option key is expected to exist in the preset's own
//! option map. The type does not enforce this; registry validation does.

use serde::{Deserialize, Serialize};

use crate::{
    icon::Icon,
    options::{LayoutOptions, keys},
};

/// A layout option exposed for interactive editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurableOption {
    /// ELK option name, present in the owning configuration's options.
    key: String,
    /// Display label for the editing control.
    label: String,
}

impl ConfigurableOption {
    /// Creates a new configurable option.
    ///
    /// # Arguments
    ///
    /// * `key` - ELK option name.
    /// * `label` - Display label shown next to the control.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    /// Returns the ELK option name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A named bundle of layout engine parameters.
///
/// # Examples
///
/// ```
/// use arrange_core::{
///     configuration::{ConfigurableOption, LayoutConfiguration},
///     icon::Icon,
///     options::{LayoutOptions, keys},
/// };
///
/// let options: LayoutOptions = [(keys::ALGORITHM, "random"), (keys::SPACING_NODE_NODE, "50")]
///     .into_iter()
///     .collect();
/// let configuration = LayoutConfiguration::new(
///     "elk-random",
///     "Random",
///     Icon::ViewComfy,
///     options,
///     Some(vec![ConfigurableOption::new(keys::SPACING_NODE_NODE, "Node spacing")]),
/// );
///
/// assert_eq!(configuration.algorithm(), Some("random"));
/// assert_eq!(configuration.configurable_options().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfiguration {
    id: String,
    label: String,
    icon: Icon,
    layout_options: LayoutOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    configurable_options: Option<Vec<ConfigurableOption>>,
}

impl LayoutConfiguration {
    /// Creates a new layout configuration.
    ///
    /// # Arguments
    ///
    /// * `id` - Stable identifier used as a selection key.
    /// * `label` - Display label.
    /// * `icon` - Presentation icon.
    /// * `layout_options` - Parameters passed verbatim to the layout engine.
    /// * `configurable_options` - Options the user may tune, `None` for none.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: Icon,
        layout_options: LayoutOptions,
        configurable_options: Option<Vec<ConfigurableOption>>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon,
            layout_options,
            configurable_options,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn icon(&self) -> Icon {
        self.icon
    }

    /// Returns the parameters handed to the layout engine.
    pub fn layout_options(&self) -> &LayoutOptions {
        &self.layout_options
    }

    /// Returns the user-tunable options, empty when the preset exposes none.
    pub fn configurable_options(&self) -> &[ConfigurableOption] {
        self.configurable_options.as_deref().unwrap_or_default()
    }

    /// Returns whether the preset declares configurable options at all.
    ///
    /// Distinguishes an absent list from an empty one.
    pub fn has_configurable_options(&self) -> bool {
        self.configurable_options.is_some()
    }

    /// Returns the raw configurable option list as declared.
    pub fn declared_configurable_options(&self) -> Option<&[ConfigurableOption]> {
        self.configurable_options.as_deref()
    }

    /// Shorthand for looking up a single layout option.
    pub fn option(&self, key: &str) -> Option<&str> {
        self.layout_options.get(key)
    }

    /// Returns the `elk.algorithm` value.
    pub fn algorithm(&self) -> Option<&str> {
        self.option(keys::ALGORITHM)
    }

    /// Returns whether the options carry an `elk.direction` entry.
    pub fn is_direction_aware(&self) -> bool {
        self.layout_options.contains_key(keys::DIRECTION)
    }
}

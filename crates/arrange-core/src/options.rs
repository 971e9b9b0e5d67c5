//! Ordered ELK option maps.
//!
//! [`LayoutOptions`] is the parameter bag handed verbatim to the layout
//! engine. Keys are unique; insertion order is kept so serialized output
//! reads the same way the presets are declared.
//!
//! The [`keys`] module names the ELK options used by the built-in presets.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Well-known ELK option keys.
pub mod keys {
    pub const ALGORITHM: &str = "elk.algorithm";
    pub const DIRECTION: &str = "elk.direction";
    pub const CONTENT_ALIGNMENT: &str = "elk.contentAlignment";

    pub const SPACING_NODE_NODE: &str = "elk.spacing.nodeNode";
    pub const SPACING_COMPONENT_COMPONENT: &str = "elk.spacing.componentComponent";

    pub const LAYERED_SPACING_EDGE_NODE_BETWEEN_LAYERS: &str =
        "elk.layered.spacing.edgeNodeBetweenLayers";
    pub const LAYERED_LAYERING_STRATEGY: &str = "elk.layered.layering.strategy";
    pub const LAYERED_NODE_PLACEMENT_STRATEGY: &str = "elk.layered.nodePlacement.strategy";

    pub const RECTPACKING_TRYBOX: &str = "elk.rectpacking.trybox";
    pub const RECTPACKING_TARGET_WIDTH: &str = "elk.rectpacking.widthApproximation.targetWidth";

    pub const MRTREE_WEIGHTING: &str = "elk.mrtree.weighting";
    pub const MRTREE_EDGE_ROUTING_MODE: &str = "elk.mrtree.edgeRoutingMode";

    pub const RADIAL_WEDGE_CRITERIA: &str = "elk.radial.wedgeCriteria";
    pub const RADIAL_COMPACTOR: &str = "elk.radial.compactor";

    pub const FORCE_MODEL: &str = "elk.force.model";
    pub const FORCE_ITERATIONS: &str = "elk.force.iterations";

    pub const OVERLAP_REMOVAL_MAX_ITERATIONS: &str = "elk.overlapRemoval.maxIterations";
    pub const SPANNING_TREE_COST_FUNCTION: &str = "elk.processingOrder.spanningTreeCostFunction";

    pub const BOX_PACKING_MODE: &str = "elk.box.packingMode";
}

/// Insertion-ordered map of ELK option names to values.
///
/// # Examples
///
/// ```
/// use arrange_core::options::{LayoutOptions, keys};
///
/// let mut options = LayoutOptions::new();
/// options.insert(keys::ALGORITHM, "layered");
/// options.insert(keys::SPACING_NODE_NODE, "80");
///
/// assert_eq!(options.get(keys::ALGORITHM), Some("layered"));
/// assert_eq!(options.keys().collect::<Vec<_>>(), ["elk.algorithm", "elk.spacing.nodeNode"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutOptions(IndexMap<String, String>);

impl LayoutOptions {
    /// Creates an empty option map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`.
    ///
    /// An existing key keeps its position and gets the new value; the old
    /// value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the option names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for LayoutOptions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

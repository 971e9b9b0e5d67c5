//! Display-string resolution for preset and option labels.
//!
//! The registry never hard-codes translated text. Labels that need
//! translating are looked up by key through a [`LabelResolver`] supplied by
//! the caller. Presets whose label is an editorial constant skip the lookup.
//!
//! # Resolvers
//!
//! - [`KeyLabels`] - Returns the key itself.
//! - [`EnglishLabels`] - Built-in English strings, falls back to the key.
//! - [`TableLabels`] - Caller overrides layered over another resolver.
//! - Any `Fn(&str) -> String` closure.

use std::collections::HashMap;

use log::trace;

/// Label keys used by the built-in presets.
pub mod keys {
    pub const ARRANGE_ALL_LAYERED: &str = "arrangeAllLayered";
    pub const ARRANGE_ALL_RECT_PACKING: &str = "arrangeAllRectPacking";

    pub const NODE_SPACING: &str = "nodeSpacing";
    pub const COMPONENT_COMPONENT_SPACING: &str = "componentComponentSpacing";
    pub const EDGE_NODE_BETWEEN_LAYERS_SPACING: &str = "edgeNodeBetweenLayersSpacing";
    pub const LAYERING_STRATEGY: &str = "layeringStrategy";
    pub const NODE_PLACEMENT_STRATEGY: &str = "nodePlacementStrategy";
    pub const CONTENT_ALIGNMENT: &str = "contentAlignment";
    pub const WEIGHTING: &str = "weighting";
    pub const WEDGE_CRITERIA: &str = "wedgeCriteria";
    pub const COMPACTOR: &str = "compactor";
    pub const MODEL: &str = "model";
    pub const ITERATIONS: &str = "iterations";
    pub const MAX_ITERATIONS: &str = "maxIterations";
    pub const SPANNING_TREE_COST_FUNCTION: &str = "spanningTreeCostFunction";
    pub const PACKING_MODE: &str = "packingMode";
}

/// Turns a label key into a display string.
pub trait LabelResolver {
    /// Resolve `key` to the text shown to the user.
    ///
    /// Resolution never fails; unknown keys should map to something
    /// displayable, usually the key itself.
    fn resolve(&self, key: &str) -> String;
}

impl<F> LabelResolver for F
where
    F: Fn(&str) -> String,
{
    fn resolve(&self, key: &str) -> String {
        self(key)
    }
}

/// Resolver that returns every key unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyLabels;

impl LabelResolver for KeyLabels {
    fn resolve(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Built-in English labels.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishLabels;

impl EnglishLabels {
    fn lookup(key: &str) -> Option<&'static str> {
        let text = match key {
            keys::ARRANGE_ALL_LAYERED => "Layered",
            keys::ARRANGE_ALL_RECT_PACKING => "Rect packing",
            keys::NODE_SPACING => "Node spacing",
            keys::COMPONENT_COMPONENT_SPACING => "Component spacing",
            keys::EDGE_NODE_BETWEEN_LAYERS_SPACING => "Edge-node spacing between layers",
            keys::LAYERING_STRATEGY => "Layering strategy",
            keys::NODE_PLACEMENT_STRATEGY => "Node placement strategy",
            keys::CONTENT_ALIGNMENT => "Content alignment",
            keys::WEIGHTING => "Weighting",
            keys::WEDGE_CRITERIA => "Wedge criteria",
            keys::COMPACTOR => "Compactor",
            keys::MODEL => "Model",
            keys::ITERATIONS => "Iterations",
            keys::MAX_ITERATIONS => "Max iterations",
            keys::SPANNING_TREE_COST_FUNCTION => "Spanning tree cost function",
            keys::PACKING_MODE => "Packing mode",
            _ => return None,
        };
        Some(text)
    }
}

impl LabelResolver for EnglishLabels {
    fn resolve(&self, key: &str) -> String {
        match Self::lookup(key) {
            Some(text) => text.to_string(),
            None => {
                trace!(key; "No English label, using key");
                key.to_string()
            }
        }
    }
}

/// Caller-supplied label overrides with a fallback resolver.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// use arrange::labels::{EnglishLabels, LabelResolver, TableLabels};
///
/// let overrides = HashMap::from([("nodeSpacing".to_string(), "Abstand".to_string())]);
/// let labels = TableLabels::new(overrides, EnglishLabels);
///
/// assert_eq!(labels.resolve("nodeSpacing"), "Abstand");
/// assert_eq!(labels.resolve("model"), "Model");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableLabels<R = EnglishLabels> {
    overrides: HashMap<String, String>,
    fallback: R,
}

impl<R: LabelResolver> TableLabels<R> {
    /// Creates a resolver that checks `overrides` before `fallback`.
    pub fn new(overrides: HashMap<String, String>, fallback: R) -> Self {
        Self {
            overrides,
            fallback,
        }
    }
}

impl<R: LabelResolver> LabelResolver for TableLabels<R> {
    fn resolve(&self, key: &str) -> String {
        match self.overrides.get(key) {
            Some(text) => text.clone(),
            None => self.fallback.resolve(key),
        }
    }
}

//! Built-in preset descriptors.
//!
//! Each [`Preset`] is a static description of one layout configuration. The
//! registry turns descriptors into [`LayoutConfiguration`]s through
//! [`Preset::instantiate`], which is the only place a direction or a label
//! resolver enters the picture.
//!
//! The order of [`PRESETS`] is the order presented to the user.

use arrange_core::{
    configuration::{ConfigurableOption, LayoutConfiguration},
    direction::Direction,
    icon::Icon,
    options::{LayoutOptions, keys},
};

use crate::{
    labels::{LabelResolver, keys as label},
    registry::REGISTRY_SIZE,
};

/// Where a preset's display label comes from.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Label {
    /// Looked up through the caller's resolver
    Resolved(&'static str),
    /// Editorially fixed text
    Fixed(&'static str),
}

/// Value slot of a preset option.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Value {
    Fixed(&'static str),
    /// Filled with the direction passed to the registry
    Direction,
}

/// Static description of one layout configuration.
#[derive(Debug)]
pub(crate) struct Preset {
    pub(crate) id: &'static str,
    pub(crate) label: Label,
    pub(crate) icon: Icon,
    pub(crate) options: &'static [(&'static str, Value)],
    /// `(option key, label key)` pairs, empty when nothing is tunable
    pub(crate) configurable: &'static [(&'static str, &'static str)],
}

impl Preset {
    /// Builds the layout configuration for `direction`.
    pub(crate) fn instantiate(
        &self,
        direction: Direction,
        labels: &dyn LabelResolver,
    ) -> LayoutConfiguration {
        let label = match self.label {
            Label::Resolved(key) => labels.resolve(key),
            Label::Fixed(text) => text.to_string(),
        };

        let layout_options: LayoutOptions = self
            .options
            .iter()
            .map(|&(key, value)| {
                let value = match value {
                    Value::Fixed(text) => text,
                    Value::Direction => direction.as_str(),
                };
                (key, value)
            })
            .collect();

        let configurable_options = (!self.configurable.is_empty()).then(|| {
            self.configurable
                .iter()
                .map(|&(key, label_key)| ConfigurableOption::new(key, labels.resolve(label_key)))
                .collect()
        });

        LayoutConfiguration::new(
            self.id,
            label,
            self.icon,
            layout_options,
            configurable_options,
        )
    }

    /// Returns whether the preset has a direction slot.
    pub(crate) fn is_direction_aware(&self) -> bool {
        self.options
            .iter()
            .any(|(_, value)| matches!(value, Value::Direction))
    }
}

pub(crate) static PRESETS: [Preset; REGISTRY_SIZE] = [
    Preset {
        id: "elk-layered",
        label: Label::Resolved(label::ARRANGE_ALL_LAYERED),
        icon: Icon::AccountTree,
        options: &[
            (keys::ALGORITHM, Value::Fixed("layered")),
            (keys::SPACING_NODE_NODE, Value::Fixed("80")),
            (keys::SPACING_COMPONENT_COMPONENT, Value::Fixed("60")),
            (keys::LAYERED_SPACING_EDGE_NODE_BETWEEN_LAYERS, Value::Fixed("80")),
            (keys::DIRECTION, Value::Direction),
            (keys::LAYERED_LAYERING_STRATEGY, Value::Fixed("NETWORK_SIMPLEX")),
            (keys::LAYERED_NODE_PLACEMENT_STRATEGY, Value::Fixed("NETWORK_SIMPLEX")),
        ],
        configurable: &[
            (keys::SPACING_NODE_NODE, label::NODE_SPACING),
            (keys::SPACING_COMPONENT_COMPONENT, label::COMPONENT_COMPONENT_SPACING),
            (
                keys::LAYERED_SPACING_EDGE_NODE_BETWEEN_LAYERS,
                label::EDGE_NODE_BETWEEN_LAYERS_SPACING,
            ),
            (keys::LAYERED_LAYERING_STRATEGY, label::LAYERING_STRATEGY),
            (keys::LAYERED_NODE_PLACEMENT_STRATEGY, label::NODE_PLACEMENT_STRATEGY),
        ],
    },
    Preset {
        id: "elk-rect-packing",
        label: Label::Resolved(label::ARRANGE_ALL_RECT_PACKING),
        icon: Icon::ViewComfy,
        options: &[
            (keys::ALGORITHM, Value::Fixed("rectpacking")),
            (keys::SPACING_NODE_NODE, Value::Fixed("50")),
            (keys::RECTPACKING_TRYBOX, Value::Fixed("true")),
            (keys::RECTPACKING_TARGET_WIDTH, Value::Fixed("1")),
            (keys::CONTENT_ALIGNMENT, Value::Fixed("V_TOP H_CENTER")),
        ],
        configurable: &[
            (keys::SPACING_NODE_NODE, label::NODE_SPACING),
            (keys::CONTENT_ALIGNMENT, label::CONTENT_ALIGNMENT),
        ],
    },
    Preset {
        id: "elk-stress",
        label: Label::Fixed("Stress"),
        icon: Icon::ViewComfy,
        options: &[(keys::ALGORITHM, Value::Fixed("stress"))],
        configurable: &[],
    },
    Preset {
        id: "elk-tree",
        label: Label::Fixed("MrTree"),
        icon: Icon::ViewComfy,
        options: &[
            (keys::ALGORITHM, Value::Fixed("mrtree")),
            (keys::SPACING_NODE_NODE, Value::Fixed("80")),
            (keys::DIRECTION, Value::Direction),
            (keys::MRTREE_WEIGHTING, Value::Fixed("MODEL_ORDER")),
            (keys::MRTREE_EDGE_ROUTING_MODE, Value::Fixed("AVOID_OVERLAP")),
        ],
        configurable: &[
            (keys::SPACING_NODE_NODE, label::NODE_SPACING),
            (keys::MRTREE_WEIGHTING, label::WEIGHTING),
        ],
    },
    Preset {
        id: "elk-radial",
        label: Label::Fixed("Radial"),
        icon: Icon::ViewComfy,
        options: &[
            (keys::ALGORITHM, Value::Fixed("radial")),
            (keys::SPACING_NODE_NODE, Value::Fixed("50")),
            (keys::RADIAL_WEDGE_CRITERIA, Value::Fixed("NODE_SIZE")),
            (keys::RADIAL_COMPACTOR, Value::Fixed("NONE")),
        ],
        configurable: &[
            (keys::SPACING_NODE_NODE, label::NODE_SPACING),
            (keys::RADIAL_WEDGE_CRITERIA, label::WEDGE_CRITERIA),
            (keys::RADIAL_COMPACTOR, label::COMPACTOR),
        ],
    },
    Preset {
        id: "elk-force",
        label: Label::Fixed("Force"),
        icon: Icon::ViewComfy,
        options: &[
            (keys::ALGORITHM, Value::Fixed("force")),
            (keys::SPACING_NODE_NODE, Value::Fixed("50")),
            (keys::FORCE_MODEL, Value::Fixed("FRUCHTERMAN_REINGOLD")),
            (keys::FORCE_ITERATIONS, Value::Fixed("300")),
        ],
        configurable: &[
            (keys::SPACING_NODE_NODE, label::NODE_SPACING),
            (keys::FORCE_MODEL, label::MODEL),
            (keys::FORCE_ITERATIONS, label::ITERATIONS),
        ],
    },
    Preset {
        id: "elk-spore-overlap",
        label: Label::Fixed("SporeOverlap"),
        icon: Icon::ViewComfy,
        options: &[
            (keys::ALGORITHM, Value::Fixed("sporeOverlap")),
            (keys::SPACING_NODE_NODE, Value::Fixed("50")),
            (keys::OVERLAP_REMOVAL_MAX_ITERATIONS, Value::Fixed("64")),
        ],
        configurable: &[
            (keys::SPACING_NODE_NODE, label::NODE_SPACING),
            (keys::OVERLAP_REMOVAL_MAX_ITERATIONS, label::MAX_ITERATIONS),
        ],
    },
    Preset {
        id: "elk-spore-compaction",
        label: Label::Fixed("SporeCompaction"),
        icon: Icon::ViewComfy,
        options: &[
            (keys::ALGORITHM, Value::Fixed("sporeCompaction")),
            (keys::SPACING_NODE_NODE, Value::Fixed("50")),
            (keys::SPANNING_TREE_COST_FUNCTION, Value::Fixed("CIRCLE_UNDERLAP")),
        ],
        configurable: &[
            (keys::SPACING_NODE_NODE, label::NODE_SPACING),
            (keys::SPANNING_TREE_COST_FUNCTION, label::SPANNING_TREE_COST_FUNCTION),
        ],
    },
    Preset {
        id: "elk-random",
        label: Label::Fixed("Random"),
        icon: Icon::ViewComfy,
        options: &[
            (keys::ALGORITHM, Value::Fixed("random")),
            (keys::SPACING_NODE_NODE, Value::Fixed("50")),
        ],
        configurable: &[(keys::SPACING_NODE_NODE, label::NODE_SPACING)],
    },
    Preset {
        id: "elk-box",
        label: Label::Fixed("Box"),
        icon: Icon::ViewComfy,
        options: &[
            (keys::ALGORITHM, Value::Fixed("box")),
            (keys::CONTENT_ALIGNMENT, Value::Fixed("V_CENTER H_CENTER")),
            (keys::SPACING_NODE_NODE, Value::Fixed("50")),
            (keys::BOX_PACKING_MODE, Value::Fixed("SIMPLE")),
        ],
        configurable: &[
            (keys::CONTENT_ALIGNMENT, label::CONTENT_ALIGNMENT),
            (keys::SPACING_NODE_NODE, label::NODE_SPACING),
            (keys::BOX_PACKING_MODE, label::PACKING_MODE),
        ],
    },
];

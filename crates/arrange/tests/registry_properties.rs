//! Integration tests for the observable behavior of the registry.

use std::collections::HashSet;

use proptest::prelude::*;

use arrange::{
    direction::Direction,
    icon::Icon,
    labels::{EnglishLabels, KeyLabels},
    options::keys,
    registry::{self, REGISTRY_SIZE},
};

const DIRECTION_AWARE: [&str; 2] = ["elk-layered", "elk-tree"];

fn direction_strategy() -> impl Strategy<Value = Direction> {
    proptest::sample::select(Direction::ALL.to_vec())
}

#[test]
fn test_layered_preset_for_down() {
    let configurations = registry::build(Direction::Down, &KeyLabels);
    let layered = configurations.get("elk-layered").expect("layered preset");

    assert_eq!(layered.icon(), Icon::AccountTree);
    assert_eq!(
        layered.layout_options().iter().collect::<Vec<_>>(),
        [
            ("elk.algorithm", "layered"),
            ("elk.spacing.nodeNode", "80"),
            ("elk.spacing.componentComponent", "60"),
            ("elk.layered.spacing.edgeNodeBetweenLayers", "80"),
            ("elk.direction", "DOWN"),
            ("elk.layered.layering.strategy", "NETWORK_SIMPLEX"),
            ("elk.layered.nodePlacement.strategy", "NETWORK_SIMPLEX"),
        ]
    );

    let configurable: Vec<_> = layered
        .configurable_options()
        .iter()
        .map(|option| (option.key(), option.label()))
        .collect();
    assert_eq!(
        configurable,
        [
            ("elk.spacing.nodeNode", "nodeSpacing"),
            ("elk.spacing.componentComponent", "componentComponentSpacing"),
            (
                "elk.layered.spacing.edgeNodeBetweenLayers",
                "edgeNodeBetweenLayersSpacing"
            ),
            ("elk.layered.layering.strategy", "layeringStrategy"),
            ("elk.layered.nodePlacement.strategy", "nodePlacementStrategy"),
        ]
    );
}

#[test]
fn test_box_configurable_options() {
    for direction in Direction::ALL {
        let configurations = registry::build(direction, &KeyLabels);
        let boxed = configurations.get("elk-box").expect("box preset");

        let option_keys: Vec<_> = boxed
            .configurable_options()
            .iter()
            .map(|option| option.key())
            .collect();
        assert_eq!(
            option_keys,
            [
                "elk.contentAlignment",
                "elk.spacing.nodeNode",
                "elk.box.packingMode"
            ]
        );
    }
}

#[test]
fn test_stress_has_no_configurable_options() {
    for direction in Direction::ALL {
        let configurations = registry::build(direction, &EnglishLabels);
        let stress = configurations.get("elk-stress").expect("stress preset");

        assert!(!stress.has_configurable_options());
        assert!(stress.configurable_options().is_empty());
        assert_eq!(stress.layout_options().len(), 1);
        assert_eq!(stress.algorithm(), Some("stress"));
    }
}

#[test]
fn test_icons_and_labels() {
    let configurations = registry::build(Direction::Down, &EnglishLabels);

    let labels: Vec<_> = configurations.iter().map(|c| c.label()).collect();
    assert_eq!(
        labels,
        [
            "Layered",
            "Rect packing",
            "Stress",
            "MrTree",
            "Radial",
            "Force",
            "SporeOverlap",
            "SporeCompaction",
            "Random",
            "Box",
        ]
    );

    let tree_icons = configurations
        .iter()
        .filter(|c| c.icon() == Icon::AccountTree)
        .count();
    assert_eq!(tree_icons, 1);
}

#[test]
fn test_algorithms() {
    let configurations = registry::build(Direction::Undefined, &KeyLabels);
    let algorithms: Vec<_> = configurations
        .iter()
        .map(|c| c.algorithm().expect("every preset names its algorithm"))
        .collect();
    assert_eq!(
        algorithms,
        [
            "layered",
            "rectpacking",
            "stress",
            "mrtree",
            "radial",
            "force",
            "sporeOverlap",
            "sporeCompaction",
            "random",
            "box",
        ]
    );
}

#[test]
fn test_only_expected_presets_are_direction_aware() {
    let configurations = registry::build(Direction::Right, &KeyLabels);
    let aware: Vec<_> = configurations
        .iter()
        .filter(|c| c.is_direction_aware())
        .map(|c| c.id())
        .collect();
    assert_eq!(aware, DIRECTION_AWARE);
}

// ===================
// Property Test Functions
// ===================

/// Every build has the fixed size, unique ids, and configurable keys that
/// exist in the preset's own options.
fn check_shape(direction: Direction) -> Result<(), TestCaseError> {
    let configurations = registry::build(direction, &EnglishLabels);

    prop_assert_eq!(configurations.len(), REGISTRY_SIZE);

    let ids: HashSet<_> = configurations.ids().collect();
    prop_assert_eq!(ids.len(), REGISTRY_SIZE);

    for configuration in &configurations {
        for option in configuration.configurable_options() {
            prop_assert!(
                configuration.layout_options().contains_key(option.key()),
                "{} exposes unknown key {}",
                configuration.id(),
                option.key()
            );
        }
    }

    prop_assert!(configurations.validate().is_ok());
    Ok(())
}

/// Changing the direction changes exactly the direction value of
/// direction-aware presets and nothing else.
fn check_direction_only_touches_direction(a: Direction, b: Direction) -> Result<(), TestCaseError> {
    let first = registry::build(a, &EnglishLabels);
    let second = registry::build(b, &EnglishLabels);

    for (x, y) in first.iter().zip(second.iter()) {
        prop_assert_eq!(x.id(), y.id());
        prop_assert_eq!(x.label(), y.label());
        prop_assert_eq!(x.icon(), y.icon());
        prop_assert_eq!(x.configurable_options(), y.configurable_options());

        if DIRECTION_AWARE.contains(&x.id()) {
            prop_assert_eq!(x.option(keys::DIRECTION), Some(a.as_str()));
            prop_assert_eq!(y.option(keys::DIRECTION), Some(b.as_str()));

            let x_keys: Vec<_> = x.layout_options().keys().collect();
            let y_keys: Vec<_> = y.layout_options().keys().collect();
            prop_assert_eq!(&x_keys, &y_keys);

            let changed: Vec<_> = x
                .layout_options()
                .iter()
                .zip(y.layout_options().iter())
                .filter(|(left, right)| left != right)
                .map(|((key, _), _)| key)
                .collect();
            let expected: Vec<&str> = if a == b { vec![] } else { vec![keys::DIRECTION] };
            prop_assert_eq!(changed, expected);
        } else {
            prop_assert_eq!(x, y);
        }
    }
    Ok(())
}

/// Two builds with the same input are structurally equal.
fn check_idempotent(direction: Direction) -> Result<(), TestCaseError> {
    let first = registry::build(direction, &EnglishLabels);
    let second = registry::build(direction, &EnglishLabels);
    prop_assert_eq!(first, second);
    Ok(())
}

// ===================
// Proptest Wrappers
// ===================

proptest! {
    #[test]
    fn registry_shape(direction in direction_strategy()) {
        check_shape(direction)?;
    }

    #[test]
    fn direction_only_touches_direction(a in direction_strategy(), b in direction_strategy()) {
        check_direction_only_touches_direction(a, b)?;
    }

    #[test]
    fn registry_is_idempotent(direction in direction_strategy()) {
        check_idempotent(direction)?;
    }
}

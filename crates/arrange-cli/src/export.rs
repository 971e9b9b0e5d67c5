//! TOML rendering of layout configurations.
//!
//! The full registry is rendered as a `[[configurations]]` array of tables;
//! a single preset as one `[configuration]` table. Option maps keep the
//! order in which the presets declare them.

use serde::Serialize;

use arrange::{ArrangeError, LayoutConfigurations, configuration::LayoutConfiguration};

#[derive(Serialize)]
struct Registry<'a> {
    configurations: &'a [LayoutConfiguration],
}

#[derive(Serialize)]
struct Single<'a> {
    configuration: &'a LayoutConfiguration,
}

/// Render every configuration.
///
/// # Errors
///
/// Returns [`ArrangeError::Export`] if serialization fails.
pub fn registry_to_toml(configurations: &LayoutConfigurations) -> Result<String, ArrangeError> {
    let document = Registry {
        configurations: configurations.as_slice(),
    };
    toml::to_string_pretty(&document).map_err(|err| ArrangeError::Export(err.to_string()))
}

/// Render one configuration.
///
/// # Errors
///
/// Returns [`ArrangeError::Export`] if serialization fails.
pub fn configuration_to_toml(configuration: &LayoutConfiguration) -> Result<String, ArrangeError> {
    toml::to_string_pretty(&Single { configuration })
        .map_err(|err| ArrangeError::Export(err.to_string()))
}

#[cfg(test)]
mod tests {
    use arrange::{direction::Direction, labels::KeyLabels, registry};

    use super::*;

    #[test]
    fn test_registry_contains_every_id() {
        let configurations = registry::build(Direction::Down, &KeyLabels);
        let text = registry_to_toml(&configurations).unwrap();

        assert_eq!(text.matches("[[configurations]]").count(), 10);
        for id in configurations.ids() {
            assert!(text.contains(&format!("id = \"{id}\"")), "Missing {id}");
        }
    }

    #[test]
    fn test_single_configuration() {
        let configurations = registry::build(Direction::Right, &KeyLabels);
        let tree = configurations.get("elk-tree").unwrap();
        let text = configuration_to_toml(tree).unwrap();

        assert!(text.contains("id = \"elk-tree\""));
        assert!(text.contains("icon = \"view_comfy\""));
        assert!(text.contains("elk.direction"));
        assert!(text.contains("\"RIGHT\""));
        assert!(!text.contains("[[configurations]]"));
    }

    #[test]
    fn test_stress_has_no_configurable_section() {
        let configurations = registry::build(Direction::Down, &KeyLabels);
        let stress = configurations.get("elk-stress").unwrap();
        let text = configuration_to_toml(stress).unwrap();

        assert!(!text.contains("configurable_options"));
    }

    #[test]
    fn test_output_parses_back() {
        let configurations = registry::build(Direction::Up, &KeyLabels);
        let box_preset = configurations.get("elk-box").unwrap();
        let text = configuration_to_toml(box_preset).unwrap();

        #[derive(serde::Deserialize)]
        struct Parsed {
            configuration: LayoutConfiguration,
        }
        let parsed: Parsed = toml::from_str(&text).unwrap();
        assert_eq!(&parsed.configuration, box_preset);
    }
}

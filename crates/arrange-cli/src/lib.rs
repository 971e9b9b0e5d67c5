//! CLI logic for the Arrange preset tool.
//!
//! This module contains the core CLI logic: loading configuration, building
//! the layout configuration registry, and writing it out as TOML.

pub mod error_adapter;
pub mod export;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::{debug, info};

use arrange::{ArrangeError, RegistryBuilder};

/// Produce the TOML text requested by `args`.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ArrangeError` for:
/// - Configuration loading errors
/// - An `--id` that names no configuration
/// - Registry validation errors
/// - Serialization errors
pub fn render(args: &Args) -> Result<String, ArrangeError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let direction = args
        .direction
        .unwrap_or_else(|| app_config.layout().direction());
    debug!(direction:%; "Resolved layout direction");

    let builder = RegistryBuilder::new(app_config);
    let configurations = builder.build_with_direction(direction);
    configurations.validate()?;

    match &args.id {
        Some(id) => {
            let configuration = configurations
                .get(id)
                .ok_or_else(|| ArrangeError::UnknownConfiguration(id.clone()))?;
            export::configuration_to_toml(configuration)
        }
        None => export::registry_to_toml(&configurations),
    }
}

/// Run the Arrange CLI application
///
/// Renders the registry and writes it to the output file, or to stdout when
/// no output path is given.
///
/// # Errors
///
/// Returns `ArrangeError` for everything [`render`] reports and for I/O
/// errors while writing the output.
pub fn run(args: &Args) -> Result<(), ArrangeError> {
    info!(
        direction:? = args.direction,
        id:? = args.id;
        "Rendering layout configurations"
    );

    let text = render(args)?;

    match &args.output {
        Some(path) => {
            fs::write(path, text)?;
            info!(output_file = path; "Layout configurations exported successfully");
        }
        None => io::stdout().lock().write_all(text.as_bytes())?,
    }

    Ok(())
}

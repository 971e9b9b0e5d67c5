//! Arrange Core Types and Definitions
//!
//! This crate provides the foundational types for describing layout presets
//! handed to the ELK layout engine. It includes:
//!
//! - **Directions**: Flow orientation for direction-aware algorithms ([`direction::Direction`])
//! - **Icons**: Presentation handles for preset pickers ([`icon::Icon`])
//! - **Options**: Ordered ELK parameter maps and well-known keys ([`options`] module)
//! - **Configurations**: The preset record itself ([`configuration::LayoutConfiguration`])

pub mod configuration;
pub mod direction;
pub mod icon;
pub mod options;

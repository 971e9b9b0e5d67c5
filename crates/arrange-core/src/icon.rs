//! Presentation icons for layout presets.
//!
//! The registry only picks an icon per preset; drawing it is left to the UI.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Icon shown next to a preset in a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    /// Hierarchical tree glyph
    AccountTree,
    /// Generic grid glyph
    ViewComfy,
}

impl From<Icon> for &'static str {
    fn from(val: Icon) -> Self {
        match val {
            Icon::AccountTree => "account_tree",
            Icon::ViewComfy => "view_comfy",
        }
    }
}

impl Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serde_name() {
        assert_eq!(Icon::AccountTree.to_string(), "account_tree");
        assert_eq!(Icon::ViewComfy.to_string(), "view_comfy");
    }
}

//! Error adapter for converting ArrangeError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use arrange::{ArrangeError, direction::Direction, labels::KeyLabels, registry};

/// Adapter wrapping an [`ArrangeError`] for miette rendering.
///
/// Adds a diagnostic code per error kind and, where the user can act on it,
/// a help line.
pub struct ErrorAdapter<'a>(pub &'a ArrangeError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ArrangeError::Io(_) => "arrange::io",
            ArrangeError::Config(_) => "arrange::config",
            ArrangeError::UnknownConfiguration(_) => "arrange::unknown_configuration",
            ArrangeError::Registry(_) => "arrange::registry",
            ArrangeError::Export(_) => "arrange::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            ArrangeError::UnknownConfiguration(_) => {
                let configurations = registry::build(Direction::default(), &KeyLabels);
                let ids = configurations.ids().collect::<Vec<_>>().join(", ");
                Some(Box::new(format!("available configurations: {ids}")))
            }
            ArrangeError::Config(_) => Some(Box::new(
                "check the [layout] and [labels] sections of the configuration file",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use arrange::RegistryError;

    use super::*;

    #[test]
    fn test_codes() {
        let err = ArrangeError::Export("boom".to_string());
        let adapter = ErrorAdapter(&err);
        assert_eq!(adapter.code().unwrap().to_string(), "arrange::export");

        let err = ArrangeError::Registry(RegistryError::DuplicateId("elk-box".to_string()));
        let adapter = ErrorAdapter(&err);
        assert_eq!(adapter.code().unwrap().to_string(), "arrange::registry");
    }

    #[test]
    fn test_unknown_configuration_help_lists_ids() {
        let err = ArrangeError::UnknownConfiguration("elk-disco".to_string());
        let adapter = ErrorAdapter(&err);

        assert_eq!(
            adapter.to_string(),
            "Unknown layout configuration `elk-disco`"
        );
        let help = adapter.help().unwrap().to_string();
        assert!(help.contains("elk-layered"));
        assert!(help.contains("elk-box"));
    }

    #[test]
    fn test_io_error_has_source() {
        let err = ArrangeError::Io(std::io::Error::other("disk on fire"));
        let adapter = ErrorAdapter(&err);

        assert!(adapter.help().is_none());
        assert!(std::error::Error::source(&adapter).is_some());
    }
}

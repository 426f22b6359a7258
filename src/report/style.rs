//! Named output styles.

use colored::Colorize;

/// Stateless set of named styles for the result stream.
///
/// With colour disabled every style is the identity, so output can be
/// compared byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    color: bool,
}

impl Style {
    /// Coloured styles when `color` is true, plain otherwise.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Styles that leave text unchanged.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Bold, for the per-domain header.
    pub fn header(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Green, for found records.
    pub fn found(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    /// Red, for missing records.
    pub fn not_found(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    /// Cyan, for the startup banner.
    pub fn banner(&self, text: &str) -> String {
        if self.color {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(true)
    }
}

//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a readmegen.toml, and if present we load settings from there.
//! This provides the output file name, editor wrapping width and the sections offered in the
//! wizard.

use facet::Facet;
use std::fs;
use std::path::Path;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "readmegen.toml";

/// Offered in the section list; chooses whether an outline is rendered.
pub const TABLE_OF_CONTENTS: &str = "Table of Contents";

/// Offered in the section list; enables the license step.
pub const LICENSE: &str = "License";

fn default_section_choices() -> Vec<String> {
    [
        TABLE_OF_CONTENTS,
        "Installation Instructions",
        "Dependencies",
        "Usage Information",
        "Contribution Guidelines",
        "Tests",
        "Contributing",
        LICENSE,
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from readmegen.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "README.md".to_string())]
    /// File the generated README is written to.
    pub output: String,
    #[facet(default = 100)]
    /// Guide width for section text; longer lines are reported on save, never rewrapped.
    pub wrap_width: usize,
    #[facet(default = default_section_choices())]
    /// Section names offered in the wizard, in display order.
    pub section_choices: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: "README.md".to_string(),
            wrap_width: 100,
            section_choices: default_section_choices(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from readmegen.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults when it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };

        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded configuration");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid configuration");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;

//! The answers a README is generated from.
//!
//! A request is collected by the wizard or loaded from an answers file, and is the only input the
//! document assembler sees. It serialises to JSON so a session can be saved and replayed.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// A user-authored top-level README section.
pub struct SectionEntry {
    /// Heading shown in the document and the table of contents.
    pub name: String,
    /// Markdown body, which may contain its own sub-headings.
    #[serde(default)]
    pub text: String,
}

impl SectionEntry {
    #[must_use]
    /// Creates a section from its heading and body.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// Everything needed to render a README in one pass.
pub struct DocumentRequest {
    /// Project title, rendered as the document's only level-1 heading.
    pub title: String,
    /// License identifier; unrecognised values render nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// Sections in the order they appear in the document.
    #[serde(default)]
    pub sections: Vec<SectionEntry>,
    /// GitHub username for the questions section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Contact email for the questions section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Whether to render a table of contents after the title.
    #[serde(default)]
    pub want_table_of_contents: bool,
}

impl DocumentRequest {
    /// Load a request from a JSON answers file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid request.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let request = serde_json::from_str(&contents).map_err(|source| Error::Answers {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded answers");
        Ok(request)
    }

    /// Save the request as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be encoded or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| Error::Answers {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json + "\n").map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "saved answers");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/request.rs"]
mod tests;

//! Document assembly: turns a [`DocumentRequest`] into the finished README text.
//!
//! The document is built from blocks in a fixed order and joined with blank lines:
//!
//! ```text
//! # Title
//! badge                  (when a known license was chosen)
//! ## Table of Contents   (when requested)
//! ## Section ...         (each user section, in order)
//! ## License             (when a known license was chosen)
//! ## Questions           (when contact details were given)
//! ```
//!
//! Assembly is pure, so the same request always renders byte-identical output.

use crate::license::{render_license_badge, render_license_section};
use crate::questions::render_questions_section;
use crate::request::{DocumentRequest, SectionEntry};
use crate::section::{Section, SectionTree};
use crate::toc::render_table_of_contents;

/// Heading level of user sections, one below the title.
pub const SECTION_LEVEL: usize = 2;

#[must_use]
/// Builds the outline the table of contents is rendered from.
///
/// Every user section becomes a root, with the headings found in its own body grafted beneath it.
pub fn build_outline(sections: &[SectionEntry]) -> SectionTree {
    let mut tree = SectionTree::new();
    for entry in sections {
        let section = Section::new(entry.name.trim(), SECTION_LEVEL);
        let root = tree.insert(section, None);
        tree.graft(root, SectionTree::parse(&entry.text));
    }
    tree
}

fn render_section(entry: &SectionEntry) -> String {
    let name = entry.name.trim();
    let body = entry.text.trim_end().trim_start_matches(['\r', '\n']);

    if body.is_empty() {
        format!("## {name}\n")
    } else {
        format!("## {name}\n\n{body}\n")
    }
}

#[must_use]
/// Renders the complete README for a request.
pub fn generate_markdown(request: &DocumentRequest) -> String {
    let license = request.license.as_deref();
    let mut blocks = vec![format!("# {}\n", request.title.trim())];

    let badge = render_license_badge(license);
    if !badge.is_empty() {
        blocks.push(badge + "\n");
    }

    if request.want_table_of_contents {
        blocks.push(render_table_of_contents(&build_outline(&request.sections)));
    }

    blocks.extend(request.sections.iter().map(render_section));
    blocks.push(render_license_section(license));
    blocks.push(render_questions_section(
        request.username.as_deref(),
        request.email.as_deref(),
    ));

    blocks.retain(|block| !block.is_empty());
    blocks.join("\n")
}

#[cfg(test)]
#[path = "tests/markdown.rs"]
mod tests;

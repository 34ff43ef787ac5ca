//! Table of contents rendering over a reconstructed section tree.
//!
//! Top-level entries are numbered straight through the document while every nested list starts
//! again at 1, and each nesting step indents the entry by one list level:
//!
//! ```text
//! ## Table of Contents
//!
//! 1. [Installation](#Installation)
//!     1. [Linux](#Linux)
//!     2. [macOS](#macOS)
//! 2. [Usage](#Usage)
//! ```

use crate::section::SectionTree;
use std::fmt::Write;

/// Heading line opening the outline.
pub const TOC_HEADING: &str = "## Table of Contents";

/// Indentation added per nesting step, wide enough for markdown to nest ordered lists.
const INDENT: &str = "    ";

#[must_use]
/// Derives the in-document link target for a section name.
///
/// Surrounding whitespace is dropped and each internal space becomes a hyphen. Case and
/// punctuation pass through unchanged.
pub fn anchor(name: &str) -> String {
    name.trim().replace(' ', "-")
}

#[must_use]
/// Renders the outline heading followed by a numbered, indented list of anchor links.
pub fn render_table_of_contents(tree: &SectionTree) -> String {
    let mut out = format!("{TOC_HEADING}\n\n");
    for (n, &root) in tree.roots().iter().enumerate() {
        walk(tree, root, n + 1, 0, &mut out);
    }
    out
}

fn walk(tree: &SectionTree, index: usize, number: usize, depth: usize, out: &mut String) {
    let Some(section) = tree.get(index) else {
        return;
    };

    let _ = writeln!(
        out,
        "{}{number}. [{}](#{})",
        INDENT.repeat(depth),
        section.name,
        anchor(&section.name)
    );

    for (n, &child) in section.children_indices.iter().enumerate() {
        walk(tree, child, n + 1, depth + 1, out);
    }
}

#[cfg(test)]
#[path = "tests/toc.rs"]
mod tests;

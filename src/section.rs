//! Section representation and tree reconstruction for free-form markdown text.
//!
//! A section represents a hierarchical division of a document, corresponding to an ATX-style
//! heading. Headings are picked out line by line and nested purely by the length of their `#`
//! run, so the tree mirrors the outline a reader infers from the markers alone. Sections live in
//! an arena and refer to one another by index, which keeps the parent back-reference free of
//! ownership cycles.

use regex::Regex;
use std::sync::LazyLock;

/// Leading whitespace, a run of markers, optional padding, then the heading name.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\t ]*(?P<markers>#+)[\t ]*(?P<name>.*)$").unwrap());

/// Deepest heading level recognised as a section.
pub const MAX_LEVEL: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Hierarchical document division reconstructed from a heading line.
pub struct Section {
    /// Section heading text without markup symbols.
    pub name: String,
    /// Nesting depth in the document hierarchy (1 for top-level).
    pub level: usize,
    /// Body content of the section. Outlines are built from headings alone and leave it empty.
    pub text: String,
    /// Index of the containing section in the hierarchy.
    pub parent_index: Option<usize>,
    /// Indices of directly nested subsections, in document order.
    pub children_indices: Vec<usize>,
}

impl Section {
    #[must_use]
    /// Creates a detached section with no body, parent or children.
    pub fn new(name: impl Into<String>, level: usize) -> Self {
        Self {
            name: name.into(),
            level,
            text: String::new(),
            parent_index: None,
            children_indices: Vec::new(),
        }
    }

}

#[must_use]
/// Recognises a heading line, returning its level and trimmed name.
///
/// Runs longer than [`MAX_LEVEL`] markers and headings with nothing after the markers are
/// treated as body text.
pub fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let captures = HEADING_RE.captures(line)?;
    let level = captures.name("markers")?.as_str().len();
    let name = captures.name("name")?.as_str().trim();

    if level > MAX_LEVEL || name.is_empty() {
        return None;
    }
    Some((level, name))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Arena of sections plus the ordered indices of its top-level entries.
pub struct SectionTree {
    sections: Vec<Section>,
    roots: Vec<usize>,
}

impl SectionTree {
    #[must_use]
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Reconstructs the heading hierarchy of a block of text.
    ///
    /// Keeps a stack of open sections. Each heading closes every open section at the same or a
    /// deeper level, then nests under whatever remains on top of the stack, or becomes a new root
    /// when nothing does. This gives:
    ///
    /// ```text
    /// # A          root
    /// ## B         child of A
    /// #### C       child of B (skipped levels nest under the nearest shallower heading)
    /// ### D        child of B (closes C)
    /// ## E         child of A (ties B, so becomes its sibling)
    /// # F          root
    /// ```
    ///
    /// Lines that are not headings are ignored, and inconsistent nesting (such as a document that
    /// opens at level 3) never fails.
    pub fn parse(text: &str) -> Self {
        let mut tree = Self::new();
        let mut open: Vec<usize> = Vec::new();

        for line in text.lines() {
            let Some((level, name)) = parse_heading(line) else {
                continue;
            };

            while open
                .last()
                .is_some_and(|&index| tree.sections[index].level >= level)
            {
                open.pop();
            }

            let index = tree.insert(Section::new(name, level), open.last().copied());
            open.push(index);
        }

        tree
    }

    /// Adds a section, either as a root or as the last child of `parent`.
    ///
    /// Returns the index of the new section. A `parent` that is not in the arena is ignored and
    /// the section becomes a root.
    pub fn insert(&mut self, mut section: Section, parent: Option<usize>) -> usize {
        let index = self.sections.len();
        let parent = parent.filter(|&p| p < index);

        section.parent_index = parent;
        section.children_indices.clear();
        self.sections.push(section);

        match parent {
            Some(p) => self.sections[p].children_indices.push(index),
            None => self.roots.push(index),
        }
        index
    }

    /// Hangs every root of `subtree` beneath `parent`, preserving the subtree's shape.
    ///
    /// Levels are shifted down just far enough that each grafted root sits deeper than `parent`;
    /// subtrees that already do are left as they are. Grafting onto an index outside the arena
    /// does nothing.
    pub fn graft(&mut self, parent: usize, subtree: SectionTree) {
        let Some(parent_level) = self.sections.get(parent).map(|s| s.level) else {
            return;
        };
        let Some(shallowest) = subtree
            .roots
            .iter()
            .map(|&root| subtree.sections[root].level)
            .min()
        else {
            return;
        };

        let base = self.sections.len();
        let shift = (parent_level + 1).saturating_sub(shallowest);

        for mut section in subtree.sections {
            section.level += shift;
            section.parent_index = Some(section.parent_index.map_or(parent, |p| p + base));
            for child in &mut section.children_indices {
                *child += base;
            }
            self.sections.push(section);
        }

        self.sections[parent]
            .children_indices
            .extend(subtree.roots.iter().map(|root| root + base));
    }

    #[must_use]
    /// Indices of top-level sections, in document order.
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    #[must_use]
    /// Looks up a section by arena index.
    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    #[must_use]
    /// Top-level sections, in document order.
    pub fn root_sections(&self) -> Vec<&Section> {
        self.roots.iter().map(|&i| &self.sections[i]).collect()
    }

    #[must_use]
    /// Direct subsections of the section at `index`, in document order.
    pub fn children(&self, index: usize) -> Vec<&Section> {
        self.sections.get(index).map_or_else(Vec::new, |section| {
            section
                .children_indices
                .iter()
                .map(|&i| &self.sections[i])
                .collect()
        })
    }

    #[must_use]
    /// Names of the enclosing sections from the root down to `index` inclusive.
    pub fn breadcrumb(&self, index: usize) -> Vec<&str> {
        let mut parts = Vec::new();
        let mut current = Some(index);

        while let Some(idx) = current {
            let Some(section) = self.sections.get(idx) else {
                break;
            };
            parts.push(section.name.as_str());
            current = section.parent_index;
        }

        parts.reverse();
        parts
    }

    #[must_use]
    /// Number of sections at every depth.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    /// Whether no headings were found.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;

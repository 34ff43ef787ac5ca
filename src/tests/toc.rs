use super::{anchor, render_table_of_contents, TOC_HEADING};
use crate::section::{Section, SectionTree};

#[test]
fn test_numbering_restarts_per_parent() {
    let tree = SectionTree::parse("# A\n## B\n## C\n# D");
    let toc = render_table_of_contents(&tree);
    let lines: Vec<&str> = toc.lines().collect();

    assert_eq!(lines[0], TOC_HEADING);
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "1. [A](#A)");
    assert_eq!(lines[3], "    1. [B](#B)");
    assert_eq!(lines[4], "    2. [C](#C)");
    assert_eq!(lines[5], "2. [D](#D)");
    assert_eq!(lines.len(), 6);
}

#[test]
fn test_roots_numbered_across_document() {
    let tree = SectionTree::parse("# One\n## Inner\n# Two\n# Three");
    let toc = render_table_of_contents(&tree);

    assert!(toc.contains("\n1. [One](#One)\n"));
    assert!(toc.contains("\n2. [Two](#Two)\n"));
    assert!(toc.contains("\n3. [Three](#Three)\n"));
}

#[test]
fn test_indent_follows_depth_not_level() {
    // `###` directly under `#` is one step deep, not two
    let tree = SectionTree::parse("# Top\n### Skipped\n###### Deepest");
    let toc = render_table_of_contents(&tree);
    let lines: Vec<&str> = toc.lines().skip(2).collect();

    assert_eq!(
        lines,
        vec![
            "1. [Top](#Top)",
            "    1. [Skipped](#Skipped)",
            "        1. [Deepest](#Deepest)",
        ]
    );
}

#[test]
fn test_anchor_generation() {
    assert_eq!(anchor("Installation Instructions"), "Installation-Instructions");
    assert_eq!(anchor("  Usage  "), "Usage");
    assert_eq!(anchor("What's New?"), "What's-New?");
    assert_eq!(anchor("Two  Spaces"), "Two--Spaces");
}

#[test]
fn test_link_uses_anchor_and_verbatim_name() {
    let mut tree = SectionTree::new();
    tree.insert(Section::new("Installation Instructions", 2), None);
    let toc = render_table_of_contents(&tree);

    assert!(toc.contains("1. [Installation Instructions](#Installation-Instructions)"));
}

#[test]
fn test_empty_tree_renders_heading_only() {
    let toc = render_table_of_contents(&SectionTree::new());
    assert_eq!(toc, format!("{TOC_HEADING}\n\n"));
}

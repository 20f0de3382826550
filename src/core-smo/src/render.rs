//! Renders a path tree as an indented, heading-annotated outline.

use crate::options::OutlineOptions;
use crate::tree::PathTree;

/// Renders the tree as bulleted markdown outline text.
///
/// Each node becomes one line: the indent unit repeated per depth level, the
/// bullet, a heading whose level grows with depth starting at
/// `heading_base`, the segment name, and a trailing slash. Children follow
/// their parent in sorted order, so with default options
/// `example.com/docs/guide` renders as:
///
/// ```text
/// - ## example.com/
/// 	- ### docs/
/// 		- #### guide/
/// ```
pub fn render_outline(tree: &PathTree, options: &OutlineOptions) -> String {
    let mut out = String::new();
    render_level(tree, options, 0, &mut out);
    out
}

fn render_level(node: &PathTree, options: &OutlineOptions, level: usize, out: &mut String) {
    for (segment, child) in node.children() {
        out.push_str(&options.indent.repeat(level));
        out.push_str(&options.bullet);
        out.push_str(&"#".repeat(level + options.heading_base));
        out.push(' ');
        out.push_str(segment);
        out.push_str("/\n");
        render_level(child, options, level + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(urls: &[&str]) -> PathTree {
        let mut tree = PathTree::new();
        for url in urls {
            tree.insert_url(url);
        }
        tree
    }

    #[test]
    fn test_render_empty_tree() {
        let tree = PathTree::new();
        assert_eq!(render_outline(&tree, &OutlineOptions::default()), "");
    }

    #[test]
    fn test_render_single_page() {
        let tree = tree_of(&["https://example.com/docs/guide"]);
        let text = render_outline(&tree, &OutlineOptions::default());

        assert_eq!(
            text,
            "- ## example.com/\n\t- ### docs/\n\t\t- #### guide/\n"
        );
    }

    #[test]
    fn test_render_sorted_siblings() {
        let tree = tree_of(&[
            "https://example.com/zebra",
            "https://example.com/apple",
            "https://example.com/mango",
        ]);
        let text = render_outline(&tree, &OutlineOptions::default());

        assert_eq!(
            text,
            "- ## example.com/\n\t- ### apple/\n\t- ### mango/\n\t- ### zebra/\n"
        );
    }

    #[test]
    fn test_render_custom_options() {
        let tree = tree_of(&["https://example.com/docs"]);
        let options = OutlineOptions::builder()
            .heading_base(1)
            .bullet("* ".to_string())
            .indent("  ".to_string())
            .build();
        let text = render_outline(&tree, &options);

        assert_eq!(text, "* # example.com/\n  * ## docs/\n");
    }
}

//! Column alignment and styling of rendered tree lines.
//!
//! Tree lines arrive with a label zone (indentation, connector, branch name) of
//! varying width. The widest label zone fixes a shared column; every label zone is
//! padded to one past it so commit ids line up. When color is on, the style escape
//! is placed in front of the connector so the indentation stays uncolored, and a
//! reset ends every line. Escapes take up no columns, so they never shift alignment.

use crate::core::colors::{Palette, RESET};
use crate::core::formatter::FormattedLine;
use crate::core::tree::{TreeLine, CONNECTOR};

#[derive(Debug, Clone)]
pub struct TreeLayout {
    palette: Palette,
    color: bool,
}

impl Default for TreeLayout {
    fn default() -> Self {
        Self::new(Palette::default(), true)
    }
}

impl TreeLayout {
    pub fn new(palette: Palette, color: bool) -> Self {
        Self { palette, color }
    }

    /// Lay out the tree lines. Lines without a label (the super-root) are dropped.
    pub fn apply(&self, lines: &[TreeLine<'_, Option<FormattedLine>>]) -> Vec<String> {
        let labelled: Vec<(&TreeLine<'_, Option<FormattedLine>>, &FormattedLine)> = lines
            .iter()
            .filter_map(|line| line.value.as_ref().map(|formatted| (line, formatted)))
            .collect();

        let Some(max_index) = labelled
            .iter()
            .map(|(line, formatted)| label_zone_width(line, formatted))
            .max()
        else {
            return Vec::new();
        };
        log::debug!("Aligning {} tree lines at column {}", labelled.len(), max_index + 1);

        labelled
            .into_iter()
            .map(|(line, formatted)| self.layout_line(line, formatted, max_index + 1))
            .collect()
    }

    fn layout_line(
        &self,
        line: &TreeLine<'_, Option<FormattedLine>>,
        formatted: &FormattedLine,
        column: usize,
    ) -> String {
        let escape = match formatted.style {
            Some(style) if self.color => self.palette.escape(style),
            _ => String::new(),
        };
        let padding = column.saturating_sub(label_zone_width(line, formatted));

        let mut out = String::with_capacity(column + escape.len() + formatted.content.len() + RESET.len());
        if line.has_connector {
            out.push_str(&line.indent);
            out.push_str(&escape);
            out.push_str(CONNECTOR);
        } else {
            out.push_str(&escape);
            out.push_str(&line.indent);
        }
        out.push_str(&formatted.label);
        out.extend(std::iter::repeat(' ').take(padding));
        out.push_str(&formatted.content);
        if self.color {
            out.push_str(RESET);
        }
        out
    }
}

fn label_zone_width(line: &TreeLine<'_, Option<FormattedLine>>, formatted: &FormattedLine) -> usize {
    line.prefix().chars().count() + formatted.label.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colors::BranchStyle;
    use crate::core::tree::{render, TreeNode};

    fn formatted(label: &str, style: Option<BranchStyle>, content: &str) -> Option<FormattedLine> {
        Some(FormattedLine {
            label: label.to_string(),
            style,
            content: content.to_string(),
        })
    }

    fn example_tree() -> TreeNode<Option<FormattedLine>> {
        TreeNode::new(
            None,
            vec![TreeNode::new(
                formatted("origin/main", Some(BranchStyle::Remote), ""),
                vec![
                    TreeNode::leaf(formatted(
                        "main *",
                        Some(BranchStyle::Active),
                        "abc1234 Initial commit",
                    )),
                    TreeNode::leaf(formatted("feature", None, "def5678 WIP [ahead 2]")),
                ],
            )],
        )
    }

    #[test]
    fn test_colored_layout() {
        let tree = example_tree();
        let lines = TreeLayout::default().apply(&render(&tree));

        assert_eq!(
            lines,
            vec![
                "  \x1b[0;34m+--origin/main \x1b[0m".to_string(),
                "     \x1b[0;32m+--main *   abc1234 Initial commit\x1b[0m".to_string(),
                "     +--feature  def5678 WIP [ahead 2]\x1b[0m".to_string(),
            ]
        );
    }

    #[test]
    fn test_plain_layout_has_no_escapes() {
        let tree = example_tree();
        let lines = TreeLayout::new(Palette::default(), false).apply(&render(&tree));

        assert_eq!(
            lines,
            vec![
                "  +--origin/main ".to_string(),
                "     +--main *   abc1234 Initial commit".to_string(),
                "     +--feature  def5678 WIP [ahead 2]".to_string(),
            ]
        );
        assert!(lines.iter().all(|line| !line.contains('\x1b')));
    }

    #[test]
    fn test_content_column_is_shared() {
        let tree = TreeNode::new(
            None,
            vec![
                TreeNode::new(
                    formatted("a", None, "1111111 one"),
                    vec![TreeNode::new(
                        formatted("deeply-nested-branch", Some(BranchStyle::Active), "2222222 two"),
                        vec![TreeNode::leaf(formatted("x", Some(BranchStyle::Gone), "3333333 three"))],
                    )],
                ),
                TreeNode::leaf(formatted("b", Some(BranchStyle::Remote), "4444444 four")),
            ],
        );
        let lines = TreeLayout::new(Palette::default(), false).apply(&render(&tree));

        let sha_columns: Vec<usize> = lines
            .iter()
            .filter_map(|line| line.find(|c: char| c.is_ascii_digit()))
            .collect();
        assert_eq!(sha_columns.len(), 4);
        assert!(sha_columns.iter().all(|&column| column == sha_columns[0]));
    }

    #[test]
    fn test_escape_does_not_color_indentation() {
        let tree = example_tree();
        let lines = TreeLayout::default().apply(&render(&tree));
        assert!(lines[1].starts_with("     \x1b[0;32m+--"));
    }

    #[test]
    fn test_connectorless_line_is_prefixed_with_style() {
        let root = TreeNode::leaf(formatted("solo", Some(BranchStyle::Remote), "5555555 msg"));
        let lines = TreeLayout::default().apply(&render(&root));
        assert_eq!(lines, vec!["\x1b[0;34msolo 5555555 msg\x1b[0m".to_string()]);
    }

    #[test]
    fn test_empty_tree_renders_nothing() {
        let tree: TreeNode<Option<FormattedLine>> = TreeNode::leaf(None);
        assert!(TreeLayout::default().apply(&render(&tree)).is_empty());
    }
}

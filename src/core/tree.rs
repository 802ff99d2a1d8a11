//! Left-aligned ASCII tree drawing.
//!
//! [`render`] walks a [`TreeNode`] and produces one [`TreeLine`] per node, in
//! depth-first order. The root's own line carries no connector; every child line
//! gets a `+--` connector, and indentation grows by three columns per level:
//!
//! ```text
//! root
//!   +--child
//!   |  +--grandchild
//!   +--last child
//!      +--grandchild
//! ```
//!
//! Lines keep a reference to the node value instead of flattening it to text, so
//! the layout stage can still tell the label apart from the rest of the line.

pub const CONNECTOR: &str = "+--";

const CHILD_INDENT: &str = "  ";
const CHILD_TAIL: &str = "  |";
const LAST_CHILD_TAIL: &str = "   ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    pub value: T,
    pub children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    pub fn new(value: T, children: Vec<TreeNode<T>>) -> Self {
        Self { value, children }
    }

    pub fn leaf(value: T) -> Self {
        Self::new(value, Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine<'a, T> {
    /// Depth indentation, including any `|` rails of open siblings
    pub indent: String,
    /// `false` only for the root line
    pub has_connector: bool,
    pub value: &'a T,
}

impl<T> TreeLine<'_, T> {
    /// Indentation plus connector, i.e. everything drawn left of the label
    pub fn prefix(&self) -> String {
        if self.has_connector {
            format!("{}{CONNECTOR}", self.indent)
        } else {
            self.indent.clone()
        }
    }
}

pub fn render<T>(root: &TreeNode<T>) -> Vec<TreeLine<'_, T>> {
    let mut lines = vec![TreeLine {
        indent: String::new(),
        has_connector: false,
        value: &root.value,
    }];

    let count = root.children.len();
    for (n, child) in root.children.iter().enumerate() {
        let tail = if n + 1 == count {
            LAST_CHILD_TAIL
        } else {
            CHILD_TAIL
        };

        for (i, mut line) in render(child).into_iter().enumerate() {
            if i == 0 {
                line.indent = CHILD_INDENT.to_string();
                line.has_connector = true;
            } else {
                line.indent.insert_str(0, tail);
            }
            lines.push(line);
        }
    }

    lines
}

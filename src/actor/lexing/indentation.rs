//! Indentation grouping
//!
//! Turns source text into a [LineTree] in two steps:
//!
//!     1. [collect_lines]: split into lines, drop right padding and lines left empty, and record
//!        the 1-based source line number and indentation width of each survivor.
//!     2. [build_tree]: one forward scan over the survivors, nesting by indentation width.
//!
//! Nesting Rules
//!
//!     The scan keeps a stack of open levels, the bottom one being the indentation of the first
//!     line. For every line:
//!         - same width as the current level: appended as a sibling at this level.
//!         - wider: opens a new level whose lines become children of the previous sibling.
//!         - narrower: closes the current level and the line is looked at again one level up.
//!
//!     Closing lands on the enclosing level even if the widths do not line up exactly, so a line
//!     at width 4 after levels 0 and 8 opens a new level under the last width-0 line, next to the
//!     width-8 lines already there. A line narrower than the first line of the document becomes a
//!     top-level sibling and lowers the bottom level to its width.
//!
//!     Widths are raw character counts: a tab and a space both count as one.

use super::line_tree::{LineNode, LineTree, NodeId};

/// A non-blank source line before nesting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub line: usize,
    pub indent: usize,
    pub content: String,
}

pub fn collect_lines(source: &str) -> Vec<RawLine> {
    source
        .lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let text = raw.trim_end();
            if text.is_empty() {
                return None;
            }
            let content = text.trim_start_matches([' ', '\t']);
            Some(RawLine {
                line: index + 1,
                indent: text.len() - content.len(),
                content: content.to_string(),
            })
        })
        .collect()
}

struct Level {
    indent: usize,
    parent: Option<NodeId>,
    last: Option<NodeId>,
}

pub fn build_tree(lines: Vec<RawLine>) -> LineTree {
    let mut tree = LineTree::new();
    let Some(first) = lines.first() else {
        return tree;
    };

    let mut levels = vec![Level {
        indent: first.indent,
        parent: None,
        last: None,
    }];

    for raw in lines {
        loop {
            let depth = levels.len();
            let current = &mut levels[depth - 1];

            if raw.indent == current.indent || (depth == 1 && raw.indent < current.indent) {
                current.indent = raw.indent;
                let node = LineNode::new(raw.line, raw.indent, raw.content);
                current.last = Some(tree.push(current.parent, node));
                break;
            }

            if raw.indent > current.indent {
                // The first line of every level sits at that level's width, so a wider line
                // always has a previous sibling to hang under.
                let parent = current.last;
                levels.push(Level {
                    indent: raw.indent,
                    parent,
                    last: None,
                });
                continue;
            }

            levels.pop();
        }
    }

    tree
}

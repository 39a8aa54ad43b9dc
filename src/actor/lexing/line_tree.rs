//! Line Tree
//!
//! Arena holding the indentation tree produced by the lexer. Nodes live in a single vector and
//! refer to their children by [NodeId], so the tree has no owning pointers between nodes and can
//! be walked by index.
//!
//! [LineRef] is the borrowed view callers use to read a node together with its children.

use crate::actor::ast::Position;

/// Index of a node inside a [LineTree]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One surviving input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineNode {
    /// 1-based line number in the original source, blank lines included
    pub line: usize,
    /// Width of the leading whitespace, tabs and spaces counting one each
    pub column: usize,
    /// The line with surrounding whitespace removed
    pub content: String,
    pub children: Vec<NodeId>,
}

impl LineNode {
    pub fn new(line: usize, column: usize, content: impl Into<String>) -> Self {
        Self {
            line,
            column,
            content: content.into(),
            children: Vec::new(),
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineTree {
    nodes: Vec<LineNode>,
    roots: Vec<NodeId>,
}

impl LineTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, either at the top level or as the last child of `parent`.
    pub fn push(&mut self, parent: Option<NodeId>, node: LineNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        match parent {
            Some(parent) => self.nodes[parent.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    pub fn node(&self, id: NodeId) -> &LineNode {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> LineRef<'_> {
        LineRef { tree: self, id }
    }

    /// Top-level lines, in source order
    pub fn roots(&self) -> impl ExactSizeIterator<Item = LineRef<'_>> + '_ {
        self.roots.iter().map(move |&id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Deepest nesting level, top-level lines being level 1
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(NodeId, usize)> = self.roots.iter().map(|&id| (id, 1)).collect();
        while let Some((id, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(self.nodes[id.0].children.iter().map(|&c| (c, level + 1)));
        }
        deepest
    }
}

/// Borrowed view of a node and its subtree
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    tree: &'a LineTree,
    id: NodeId,
}

impl<'a> LineRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn line(&self) -> usize {
        self.node().line
    }

    pub fn column(&self) -> usize {
        self.node().column
    }

    pub fn content(&self) -> &'a str {
        &self.node().content
    }

    pub fn position(&self) -> Position {
        self.node().position()
    }

    pub fn children(&self) -> impl ExactSizeIterator<Item = LineRef<'a>> + 'a {
        let tree = self.tree;
        self.node()
            .children
            .iter()
            .map(move |&id| LineRef { tree, id })
    }

    pub fn has_children(&self) -> bool {
        !self.node().children.is_empty()
    }

    fn node(&self) -> &'a LineNode {
        self.tree.node(self.id)
    }
}

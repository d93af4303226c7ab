//! Arena-backed syntax tree
//!
//! Nodes live in one `Vec` and refer to each other through [`NodeId`]s. Every
//! node records its parent, so sibling and ancestor queries never need
//! borrowed back-references. The tree is mutable so the formatter's patch pass
//! can splice synthetic nodes in; attaching a node is refused when it already
//! has a parent or is an ancestor of the new parent, which keeps the structure
//! acyclic.

use std::collections::VecDeque;
use std::fmt;

use super::{SyntaxKind, Token};
use crate::{Result, ThriftFmtError};

/// Stable index of a node inside a [`SyntaxTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Payload of a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// Grammar rule with ordered children
    Rule {
        kind: SyntaxKind,
        children: Vec<NodeId>,
    },
    /// Leaf holding one token
    Token(Token),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    parent: Option<NodeId>,
    data: NodeData,
}

/// Syntax tree stored as an arena of nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl SyntaxTree {
    /// Create a tree holding only a root node of `kind`
    pub fn new(kind: SyntaxKind) -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                data: NodeData::Rule {
                    kind,
                    children: Vec::new(),
                },
            }],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the arena, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    fn checked(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(id.index())
            .ok_or(ThriftFmtError::UnknownNode(id))
    }

    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.node(id).data
    }

    /// Grammar kind; leaves report [`SyntaxKind::Terminal`]
    pub fn kind(&self, id: NodeId) -> SyntaxKind {
        match &self.node(id).data {
            NodeData::Rule { kind, .. } => *kind,
            NodeData::Token(_) => SyntaxKind::Terminal,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn parent_kind(&self, id: NodeId) -> Option<SyntaxKind> {
        self.parent(id).map(|parent| self.kind(parent))
    }

    /// Ordered children; empty for leaves
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match &self.node(id).data {
            NodeData::Rule { children, .. } => children,
            NodeData::Token(_) => &[],
        }
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).last().copied()
    }

    pub fn token(&self, id: NodeId) -> Option<&Token> {
        match &self.node(id).data {
            NodeData::Token(token) => Some(token),
            NodeData::Rule { .. } => None,
        }
    }

    pub fn token_mut(&mut self, id: NodeId) -> Option<&mut Token> {
        match &mut self.nodes.get_mut(id.index())?.data {
            NodeData::Token(token) => Some(token),
            NodeData::Rule { .. } => None,
        }
    }

    pub fn is_token(&self, id: NodeId) -> bool {
        matches!(self.node(id).data, NodeData::Token(_))
    }

    /// Leaf whose token text equals `text`
    pub fn is_token_text(&self, id: NodeId, text: &str) -> bool {
        self.token(id).is_some_and(|token| token.text == text)
    }

    /// Position of `id` among its parent's children
    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|&child| child == id)
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let index = self.index_in_parent(id)?;
        self.children(parent).get(index + 1).copied()
    }

    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let index = self.index_in_parent(id)?;
        index
            .checked_sub(1)
            .and_then(|prev| self.children(parent).get(prev).copied())
    }

    /// Whether `ancestor` is `id` or lies on its parent chain
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Breadth-first order starting at `start`
    pub fn walk(&self, start: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut queue = VecDeque::from([start]);
        while let Some(id) = queue.pop_front() {
            order.push(id);
            queue.extend(self.children(id).iter().copied());
        }
        order
    }

    /// Code-token text under `id`, space separated
    pub fn text(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        self.collect_text(id, &mut parts);
        parts.join(" ")
    }

    fn collect_text<'a>(&'a self, id: NodeId, parts: &mut Vec<&'a str>) {
        match &self.node(id).data {
            NodeData::Token(token) if !token.is_eof() => parts.push(&token.text),
            NodeData::Token(_) => {}
            NodeData::Rule { children, .. } => {
                for &child in children {
                    self.collect_text(child, parts);
                }
            }
        }
    }

    /// Allocate a detached rule node
    pub fn alloc_rule(&mut self, kind: SyntaxKind) -> NodeId {
        self.alloc(NodeData::Rule {
            kind,
            children: Vec::new(),
        })
    }

    /// Allocate a detached leaf
    pub fn alloc_token(&mut self, token: Token) -> NodeId {
        self.alloc(NodeData::Token(token))
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node { parent: None, data });
        id
    }

    /// Attach `child` as the last child of `parent`
    pub fn push_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.checked(parent)?;
        let len = self.children(parent).len();
        self.insert_child(parent, len, child)
    }

    /// Attach the detached node `child` at position `index` under `parent`
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> Result<()> {
        self.checked(parent)?;
        let child_node = self.checked(child)?;
        if child_node.parent.is_some() || child == self.root {
            return Err(ThriftFmtError::AlreadyAttached(child));
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(ThriftFmtError::WouldCreateCycle { parent, child });
        }

        match &mut self.nodes[parent.index()].data {
            NodeData::Rule { children, .. } => {
                if index > children.len() {
                    return Err(ThriftFmtError::ChildIndexOutOfBounds {
                        parent,
                        index,
                        len: children.len(),
                    });
                }
                children.insert(index, child);
            }
            NodeData::Token(_) => return Err(ThriftFmtError::NotARule(parent)),
        }
        self.nodes[child.index()].parent = Some(parent);
        Ok(())
    }

    /// Detach and return the child at `index`
    pub fn remove_child(&mut self, parent: NodeId, index: usize) -> Result<NodeId> {
        self.checked(parent)?;
        let removed = match &mut self.nodes[parent.index()].data {
            NodeData::Rule { children, .. } => {
                if index >= children.len() {
                    return Err(ThriftFmtError::ChildIndexOutOfBounds {
                        parent,
                        index,
                        len: children.len(),
                    });
                }
                children.remove(index)
            }
            NodeData::Token(_) => return Err(ThriftFmtError::NotARule(parent)),
        };
        self.nodes[removed.index()].parent = None;
        Ok(removed)
    }

    /// Allocate a rule node that owns a single synthetic leaf
    pub fn alloc_synthetic(&mut self, kind: SyntaxKind, text: &str) -> Result<NodeId> {
        let rule = self.alloc_rule(kind);
        let leaf = self.alloc_token(Token::synthetic(text));
        self.push_child(rule, leaf)?;
        Ok(rule)
    }
}

//! Incremental construction of a [`ParserResult`]
//!
//! The builder mirrors rowan's `GreenNodeBuilder`: rules are opened with
//! [`TreeBuilder::start_node`], filled with tokens and closed with
//! [`TreeBuilder::finish_node`]. On top of the tree it records the flat token
//! stream a lexer would produce, including comment tokens, with line numbers
//! driven by [`TreeBuilder::newline`].
//!
//! ```rust
//! use thriftfmt_core::syntax::{SyntaxKind, TreeBuilder};
//!
//! let mut builder = TreeBuilder::new();
//! builder.start_node(SyntaxKind::Document);
//! builder.node(SyntaxKind::Header, |b| {
//!     b.node(SyntaxKind::Include, |b| {
//!         b.token("include");
//!         b.token("\"shared.thrift\"");
//!     });
//! });
//! builder.eof();
//! builder.finish_node();
//!
//! let result = builder.finish().unwrap();
//! assert_eq!(result.tokens.len(), 3);
//! ```

use super::{NodeId, ParserResult, SyntaxKind, SyntaxTree, Token};
use crate::{Result, ThriftFmtError};

/// Builder for syntax trees and their token stream
#[derive(Debug)]
pub struct TreeBuilder {
    tree: Option<SyntaxTree>,
    stack: Vec<NodeId>,
    tokens: Vec<Token>,
    line: u32,
    success: bool,
    error: Option<ThriftFmtError>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            tree: None,
            stack: Vec::new(),
            tokens: Vec::new(),
            line: 1,
            success: true,
            error: None,
        }
    }

    /// Current source line
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Move to the next source line
    pub fn newline(&mut self) {
        self.line += 1;
    }

    /// Move forward `count` source lines
    pub fn newlines(&mut self, count: u32) {
        self.line += count;
    }

    /// Record the parser outcome carried by the result
    pub fn set_success(&mut self, success: bool) {
        self.success = success;
    }

    fn fail(&mut self, message: &str) {
        if self.error.is_none() {
            self.error = Some(ThriftFmtError::builder(message));
        }
    }

    fn attach(&mut self, child: NodeId) {
        let Some(parent) = self.stack.last().copied() else {
            self.fail("no open node to attach to");
            return;
        };
        let attached = match self.tree.as_mut() {
            Some(tree) => tree.push_child(parent, child),
            None => Err(ThriftFmtError::builder("no root node")),
        };
        if let Err(err) = attached {
            if self.error.is_none() {
                self.error = Some(err);
            }
        }
    }

    /// Open a rule node; the first one becomes the root
    pub fn start_node(&mut self, kind: SyntaxKind) {
        if let Some(tree) = self.tree.as_mut() {
            if self.stack.is_empty() {
                self.fail("second root node");
                return;
            }
            let id = tree.alloc_rule(kind);
            self.attach(id);
            self.stack.push(id);
        } else {
            let tree = SyntaxTree::new(kind);
            self.stack.push(tree.root());
            self.tree = Some(tree);
        }
    }

    /// Close the innermost open rule
    pub fn finish_node(&mut self) {
        if self.stack.pop().is_none() {
            self.fail("finish_node without matching start_node");
        }
    }

    /// Open `kind`, run `build` inside it and close it again
    pub fn node(&mut self, kind: SyntaxKind, build: impl FnOnce(&mut Self)) {
        self.start_node(kind);
        build(self);
        self.finish_node();
    }

    fn next_index(&self) -> usize {
        self.tokens.len()
    }

    /// Add a code token on the current line under the open rule
    pub fn token(&mut self, text: &str) {
        let token = Token::code(text, self.line, self.next_index());
        self.push_leaf(token);
    }

    /// Add the end-of-input token under the open rule
    pub fn eof(&mut self) {
        let token = Token::eof(self.line, self.next_index());
        self.push_leaf(token);
    }

    fn push_leaf(&mut self, token: Token) {
        if self.tree.is_none() {
            self.fail("token outside of any node");
            return;
        }
        self.line = token.last_line();
        self.tokens.push(token.clone());
        if let Some(tree) = self.tree.as_mut() {
            let id = tree.alloc_token(token);
            self.attach(id);
        }
    }

    /// Record a comment in the token stream; comments never join the tree
    pub fn comment(&mut self, text: &str) {
        let token = Token::comment(text, self.line, self.next_index());
        self.line = token.last_line();
        self.tokens.push(token);
    }

    /// Finish building
    pub fn finish(self) -> Result<ParserResult> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if !self.stack.is_empty() {
            return Err(ThriftFmtError::builder(format!(
                "{} node(s) left open",
                self.stack.len()
            )));
        }
        let tree = self
            .tree
            .ok_or_else(|| ThriftFmtError::builder("no root node"))?;

        Ok(ParserResult {
            tree,
            tokens: self.tokens,
            success: self.success,
        })
    }
}

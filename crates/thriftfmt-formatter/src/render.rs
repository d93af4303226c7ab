//! Tree renderer
//!
//! One walker serves two purposes. In [`Mode::Decorated`] it produces the final
//! text: comments are reattached and columns aligned. In [`Mode::Plain`] it
//! renders nodes bare, which is what alignment uses to measure widths.

use thriftfmt_core::{NodeId, SyntaxKind, SyntaxTree, Token};
use tracing::{trace, warn};

use crate::layout::{RenderState, width};
use crate::options::FormatOptions;
use crate::strategy::{Join, Strategy, dispatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Bare rendering, no comments and no padding
    Plain,
    /// Full rendering
    Decorated,
}

pub(crate) struct Renderer<'a> {
    pub(crate) tree: &'a SyntaxTree,
    pub(crate) tokens: &'a [Token],
    pub(crate) options: &'a FormatOptions,
    pub(crate) mode: Mode,
    pub(crate) state: RenderState,
}

impl<'a> Renderer<'a> {
    pub(crate) fn plain(tree: &'a SyntaxTree, options: &'a FormatOptions) -> Self {
        Self {
            tree,
            tokens: &[],
            options,
            mode: Mode::Plain,
            state: RenderState::new(),
        }
    }

    pub(crate) fn decorated(
        tree: &'a SyntaxTree,
        tokens: &'a [Token],
        options: &'a FormatOptions,
    ) -> Self {
        Self {
            tree,
            tokens,
            options,
            mode: Mode::Decorated,
            state: RenderState::new(),
        }
    }

    /// Render `id` and return the text
    pub(crate) fn render(mut self, id: NodeId) -> String {
        self.render_node(id);
        self.state.finish()
    }

    pub(crate) fn render_node(&mut self, id: NodeId) {
        if self.mode == Mode::Decorated {
            self.apply_alignment(id);
        }

        let tree = self.tree;
        if self.mode == Mode::Decorated {
            trace!(node = %id, kind = %tree.kind(id), "render");
        }
        match dispatch(tree, id) {
            Strategy::Terminal => self.render_terminal(id),
            Strategy::Unwrap => {
                if let Some(child) = tree.first_child(id) {
                    self.render_node(child);
                }
            }
            Strategy::Block => self.render_block(tree.children(id), ""),
            Strategy::Inline(join) => self.render_inline(tree.children(id), join),
            Strategy::Subblocks { start, repeated } => self.render_subblocks(id, start, repeated),
            Strategy::Skip => {
                warn!(node = %id, text = %tree.text(id), "skipping error node");
            }
        }
    }

    /// Render `nodes` on one line, joined per `join`
    pub(crate) fn render_inline(&mut self, nodes: &[NodeId], join: Join) {
        for (i, &node) in nodes.iter().enumerate() {
            if i > 0 && join.joins(self.tree, nodes[i - 1], node) {
                self.state.append(join.sep);
            }
            self.render_node(node);
        }
    }

    /// Render `nodes` one per line at `indent`
    ///
    /// Consecutive nodes of the same kind sit on adjacent lines; a change of
    /// kind, or a kind that is always set apart, gets a blank line.
    pub(crate) fn render_block(&mut self, nodes: &[NodeId], indent: &str) {
        let mut last: Option<SyntaxKind> = None;
        for &node in nodes {
            let node = self.unwrap_wrapper(node);
            let kind = self.tree.kind(node);

            if let Some(prev) = last {
                let blank = prev != kind || kind.is_always_blank_line_separated();
                self.state.request_newline(if blank { 2 } else { 1 });
            }

            self.state.set_indent(indent);
            self.render_node(node);
            if self.mode == Mode::Decorated {
                self.trailing_comment();
            }
            last = Some(kind);
        }
    }

    fn unwrap_wrapper(&self, node: NodeId) -> NodeId {
        if self.tree.kind(node).is_wrapper() {
            self.tree.first_child(node).unwrap_or(node)
        } else {
            node
        }
    }

    /// Header inline, body of `repeated` children as an indented block, tail inline
    pub(crate) fn render_subblocks(&mut self, id: NodeId, start: usize, repeated: SyntaxKind) {
        let tree = self.tree;
        let children = tree.children(id);
        let start = start.min(children.len());
        let end = children[start..]
            .iter()
            .position(|&child| tree.kind(child) != repeated)
            .map_or(children.len(), |offset| start + offset);

        let (header, rest) = children.split_at(start);
        let (body, tail) = rest.split_at(end - start);

        self.render_inline(header, Join::INLINE);
        if self.mode == Mode::Decorated {
            self.trailing_comment();
        }
        if !body.is_empty() {
            self.before_subblock(body);
            self.state.request_newline(1);
            let indent = self.options.indent_string();
            self.render_block(body, &indent);
            self.after_subblock();
        }
        self.state.request_newline(1);
        self.state.set_indent("");
        self.render_inline(tail, Join::INLINE);
    }

    fn render_terminal(&mut self, id: NodeId) {
        let tree = self.tree;
        let Some(token) = tree.token(id) else {
            return;
        };

        if self.mode == Mode::Decorated && self.options.keep_comment {
            if self.state.has_pending_newline() {
                self.trailing_comment();
            }
            self.leading_comments(token);
        }

        if token.is_eof() {
            return;
        }
        self.state.push_indent();
        self.state.append(&token.text);
    }
}

/// Render `id` without comments or alignment
pub fn render_plain(tree: &SyntaxTree, id: NodeId) -> String {
    let options = FormatOptions::plain();
    Renderer::plain(tree, &options).render(id)
}

fn widest_line(text: &str) -> usize {
    text.lines().map(width).max().unwrap_or(0)
}

/// Display width of the plain rendering of `id`
pub(crate) fn measure_node(tree: &SyntaxTree, id: NodeId) -> usize {
    widest_line(&render_plain(tree, id))
}

/// Display width of the plain rendering of `nodes` joined per `join`
pub(crate) fn measure_inline(tree: &SyntaxTree, nodes: &[NodeId], join: Join) -> usize {
    let options = FormatOptions::plain();
    let mut renderer = Renderer::plain(tree, &options);
    renderer.render_inline(nodes, join);
    widest_line(&renderer.state.finish())
}

//! Column alignment inside subblock bodies
//!
//! Before a body of sibling fields is rendered, its padding tables are computed
//! from plain (undecorated) renderings of the fields. Two modes exist:
//!
//! - assign mode pads every `=` to one shared column;
//! - field mode gives every child role (id, requiredness, type, name, `=`,
//!   value, separator) its own column.
//!
//! Both produce a column for trailing comments. All columns are absolute and
//! include the body indent; a column of 0 means "no padding".

use std::fmt;

use indexmap::IndexMap;
use thriftfmt_core::{NodeId, SyntaxKind, SyntaxTree, Token};
use tracing::debug;

use crate::render::{Mode, Renderer, measure_inline, measure_node};
use crate::strategy::join_for;

/// Column role of a field child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Role {
    /// The `=` token
    Assign,
    /// Any other child, keyed by its kind
    Kind(SyntaxKind),
}

impl Role {
    pub(crate) fn of(tree: &SyntaxTree, id: NodeId) -> Self {
        if tree.is_token_text(id, "=") {
            Role::Assign
        } else {
            Role::Kind(tree.kind(id))
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Assign => f.write_str("="),
            Role::Kind(kind) => f.write_str(kind.name()),
        }
    }
}

/// Padding tables for the body being rendered
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Alignment {
    /// Column of `=` in assign mode
    pub(crate) assign: usize,
    /// Column of each role in field mode
    pub(crate) fields: IndexMap<Role, usize>,
    /// Column of trailing comments
    pub(crate) comment: usize,
}

impl Alignment {
    pub(crate) fn is_empty(&self) -> bool {
        self.assign == 0 && self.fields.is_empty() && self.comment == 0
    }
}

fn is_field_body(tree: &SyntaxTree, fields: &[NodeId]) -> bool {
    fields
        .first()
        .is_some_and(|&field| tree.kind(field).is_field_like())
}

/// Children of `field` before and from its first `=` or list separator
pub(crate) fn split_by_assign(tree: &SyntaxTree, field: NodeId) -> (&[NodeId], &[NodeId]) {
    let children = tree.children(field);
    let split = children
        .iter()
        .position(|&child| {
            tree.is_token_text(child, "=") || tree.kind(child) == SyntaxKind::ListSeparator
        })
        .unwrap_or(children.len());
    children.split_at(split)
}

/// Assign column and comment column, relative to the body indent
pub(crate) fn assign_padding(tree: &SyntaxTree, fields: &[NodeId]) -> Option<(usize, usize)> {
    if !is_field_body(tree, fields) {
        return None;
    }

    let mut left_max = 0;
    let mut right_max = 0;
    for &field in fields {
        let kind = tree.kind(field);
        if !kind.is_field_like() {
            break;
        }
        let (left, right) = split_by_assign(tree, field);
        let join = join_for(kind);
        left_max = left_max.max(measure_inline(tree, left, join));
        right_max = right_max.max(measure_inline(tree, right, join));
    }

    let assign = left_max + 1;
    let mut comment = assign + right_max + 1;
    if right_max <= 1 {
        comment -= 1;
    }
    Some((assign, comment))
}

/// Level of every role, or `None` when the roles cannot form columns
fn role_levels(tree: &SyntaxTree, fields: &[NodeId]) -> Option<IndexMap<Role, usize>> {
    let mut levels: IndexMap<Role, usize> = IndexMap::new();
    for &field in fields {
        let children = tree.children(field);
        if let Some(&first) = children.first() {
            levels.entry(Role::of(tree, first)).or_insert(0);
        }
        for pair in children.windows(2) {
            let before = levels
                .get(&Role::of(tree, pair[0]))
                .copied()
                .unwrap_or(0);
            let level = levels.entry(Role::of(tree, pair[1])).or_insert(0);
            *level = (*level).max(before + 1);
        }
    }

    let max = levels.values().copied().max()?;
    if max + 1 != levels.len() {
        debug!(
            roles = levels.len(),
            max_level = max,
            "field columns are not contiguous, skipping field alignment"
        );
        return None;
    }
    Some(levels)
}

/// Column of every role and the comment column, relative to the body indent
pub(crate) fn field_padding(
    tree: &SyntaxTree,
    fields: &[NodeId],
) -> Option<(IndexMap<Role, usize>, usize)> {
    if !is_field_body(tree, fields) {
        return None;
    }
    let levels = role_levels(tree, fields)?;

    let mut widths = vec![0; levels.len()];
    for &field in fields {
        for &child in tree.children(field) {
            if let Some(&level) = levels.get(&Role::of(tree, child)) {
                widths[level] = widths[level].max(measure_node(tree, child));
            }
        }
    }

    let separator = levels
        .get(&Role::Kind(SyntaxKind::ListSeparator))
        .copied();
    let columns: Vec<usize> = (0..widths.len())
        .map(|level| {
            let column = level + widths[..level].iter().sum::<usize>();
            if Some(level) == separator {
                column.saturating_sub(1)
            } else {
                column
            }
        })
        .collect();

    let padding = levels
        .into_iter()
        .map(|(role, level)| (role, columns[level]))
        .collect();

    let mut comment = widths.len() + widths.iter().sum::<usize>();
    if separator.is_some() {
        comment = comment.saturating_sub(1);
    }
    Some((padding, comment))
}

/// First token under `id` that came from the source
fn first_source_token(tree: &SyntaxTree, id: NodeId) -> Option<&Token> {
    match tree.token(id) {
        Some(token) => (!token.is_synthetic()).then_some(token),
        None => tree
            .children(id)
            .iter()
            .find_map(|&child| first_source_token(tree, child)),
    }
}

/// Comment column when neither alignment mode produced one
pub(crate) fn comment_fallback(tree: &SyntaxTree, nodes: &[NodeId]) -> usize {
    let max = nodes
        .iter()
        .map(|&node| measure_node(tree, node))
        .max()
        .unwrap_or(0);
    if max > 0 { max + 1 } else { 0 }
}

impl Renderer<'_> {
    /// Compute the padding tables for the body `nodes`
    pub(crate) fn before_subblock(&mut self, nodes: &[NodeId]) {
        if self.mode != Mode::Decorated {
            return;
        }
        let indent = self.options.indent_width();
        let shift = |column: usize| if column > 0 { column + indent } else { 0 };

        let mut alignment = Alignment::default();
        if self.options.field_alignment() {
            if let Some((fields, comment)) = field_padding(self.tree, nodes) {
                alignment.fields = fields
                    .into_iter()
                    .map(|(role, column)| (role, shift(column)))
                    .collect();
                alignment.comment = shift(comment);
            }
        } else if self.options.align_by_assign {
            if let Some((assign, comment)) = assign_padding(self.tree, nodes) {
                alignment.assign = shift(assign);
                alignment.comment = shift(comment);
            }
        }

        if self.options.keep_comment && alignment.comment == 0 {
            alignment.comment = shift(comment_fallback(self.tree, nodes));
        }

        if !alignment.is_empty() {
            debug!(
                assign = alignment.assign,
                comment = alignment.comment,
                fields = %alignment
                    .fields
                    .iter()
                    .map(|(role, column)| format!("{role}:{column}"))
                    .collect::<Vec<_>>()
                    .join(" "),
                "computed body alignment"
            );
        }
        self.state.alignment = alignment;
    }

    pub(crate) fn after_subblock(&mut self) {
        self.state.alignment = Alignment::default();
    }

    /// Open the line of a row whose first column is not at the indent
    ///
    /// Comments ahead of the row go out first so the padding lands on the
    /// row's own line.
    fn start_row(&mut self, id: NodeId) {
        let tree = self.tree;
        if let Some(token) = first_source_token(tree, id) {
            self.trailing_comment();
            self.leading_comments(token);
        }
        self.state.append("");
        self.state.push_indent();
    }

    /// Pad before `id` when it starts a column of a field row
    pub(crate) fn apply_alignment(&mut self, id: NodeId) {
        let field_row = self
            .tree
            .parent_kind(id)
            .is_some_and(SyntaxKind::is_field_like);
        if !field_row {
            return;
        }

        if self.options.field_alignment() && !self.state.alignment.fields.is_empty() {
            let column = self
                .state
                .alignment
                .fields
                .get(&Role::of(self.tree, id))
                .copied()
                .unwrap_or(0);
            if column > 0 && self.state.has_pending_newline() {
                self.start_row(id);
            }
            self.state.pad_to(column);
        } else if self.options.align_by_assign && self.tree.is_token_text(id, "=") {
            let column = self.state.alignment.assign;
            self.state.pad_to(column);
        }
    }
}

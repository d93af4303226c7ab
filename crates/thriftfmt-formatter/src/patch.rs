//! Tree normalization ahead of rendering
//!
//! Three breadth-first passes rewrite the tree in place:
//!
//! 1. struct-like fields without requiredness get a synthetic `required`;
//! 2. fields, enum fields and functions end with a `,` separator, except
//!    the last field of a parameter or throws list;
//! 3. that last field, and the last type annotation, lose any trailing
//!    separator they came with.
//!
//! Synthetic tokens carry no stream position, so comment reattachment never
//! anchors on them. Running the passes twice changes nothing the second time.

use std::collections::VecDeque;

use thriftfmt_core::{NodeId, Result, SyntaxKind, SyntaxTree};
use tracing::debug;

use crate::options::{DEFAULT_SEPARATOR, FormatOptions};

/// What a patch run changed
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PatchStats {
    pub required_inserted: usize,
    pub separators_normalized: usize,
    pub separators_inserted: usize,
    pub separators_removed: usize,
}

impl PatchStats {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Apply the passes enabled in `options` to `tree`
pub fn patch(tree: &mut SyntaxTree, options: &FormatOptions) -> Result<PatchStats> {
    let mut stats = PatchStats::default();

    if options.patch_required {
        walk(tree, |tree, id| patch_field_required(tree, id, &mut stats))?;
    }
    if options.patch_separator {
        walk(tree, |tree, id| patch_field_separator(tree, id, &mut stats))?;
        walk(tree, |tree, id| strip_last_separator(tree, id, &mut stats))?;
    }

    if !stats.is_empty() {
        debug!(
            required = stats.required_inserted,
            normalized = stats.separators_normalized,
            inserted = stats.separators_inserted,
            removed = stats.separators_removed,
            "patched tree"
        );
    }
    Ok(stats)
}

/// Visit every node reachable from the root, parents before children
fn walk(
    tree: &mut SyntaxTree,
    mut visit: impl FnMut(&mut SyntaxTree, NodeId) -> Result<()>,
) -> Result<()> {
    let mut queue = VecDeque::from([tree.root()]);
    while let Some(id) = queue.pop_front() {
        visit(tree, id)?;
        queue.extend(tree.children(id).iter().copied());
    }
    Ok(())
}

fn patch_field_required(tree: &mut SyntaxTree, id: NodeId, stats: &mut PatchStats) -> Result<()> {
    if tree.kind(id) != SyntaxKind::Field {
        return Ok(());
    }
    match tree.parent_kind(id) {
        Some(parent) if !parent.is_inline_field_list() => {}
        _ => return Ok(()),
    }

    let mut position = tree.children(id).len();
    for (i, &child) in tree.children(id).iter().enumerate() {
        match tree.kind(child) {
            SyntaxKind::FieldReq => return Ok(()),
            SyntaxKind::FieldType => {
                position = i;
                break;
            }
            _ => {}
        }
    }

    let required = tree.alloc_synthetic(SyntaxKind::FieldReq, "required")?;
    tree.insert_child(id, position, required)?;
    stats.required_inserted += 1;
    Ok(())
}

fn patch_field_separator(tree: &mut SyntaxTree, id: NodeId, stats: &mut PatchStats) -> Result<()> {
    if !matches!(
        tree.kind(id),
        SyntaxKind::Field | SyntaxKind::EnumField | SyntaxKind::Function
    ) {
        return Ok(());
    }

    if is_last_inline_field(tree, id) {
        return Ok(());
    }

    if let Some(last) = tree.last_child(id) {
        if tree.kind(last) == SyntaxKind::ListSeparator {
            let leaf = tree.first_child(last);
            if let Some(token) = leaf.and_then(|leaf| tree.token_mut(leaf)) {
                if token.text != DEFAULT_SEPARATOR {
                    token.text = DEFAULT_SEPARATOR.to_string();
                    stats.separators_normalized += 1;
                }
            }
            return Ok(());
        }
    }

    let separator = tree.alloc_synthetic(SyntaxKind::ListSeparator, DEFAULT_SEPARATOR)?;
    tree.push_child(id, separator)?;
    stats.separators_inserted += 1;
    Ok(())
}

/// Whether `id` is the last of its kind among its siblings
fn is_last_of_kind(tree: &SyntaxTree, id: NodeId) -> bool {
    let kind = tree.kind(id);
    tree.next_sibling(id).is_none_or(|next| tree.kind(next) != kind)
}

/// Last field of a parameter or throws list
fn is_last_inline_field(tree: &SyntaxTree, id: NodeId) -> bool {
    tree.kind(id) == SyntaxKind::Field
        && tree
            .parent_kind(id)
            .is_some_and(SyntaxKind::is_inline_field_list)
        && is_last_of_kind(tree, id)
}

fn strip_last_separator(tree: &mut SyntaxTree, id: NodeId, stats: &mut PatchStats) -> Result<()> {
    let last_annotation =
        tree.kind(id) == SyntaxKind::TypeAnnotation && is_last_of_kind(tree, id);
    if !(last_annotation || is_last_inline_field(tree, id)) {
        return Ok(());
    }

    let len = tree.children(id).len();
    let ends_with_separator = tree
        .last_child(id)
        .is_some_and(|last| tree.kind(last) == SyntaxKind::ListSeparator);
    if ends_with_separator {
        tree.remove_child(id, len - 1)?;
        stats.separators_removed += 1;
    }
    Ok(())
}

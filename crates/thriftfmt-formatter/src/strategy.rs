//! Per-kind rendering strategies
//!
//! Every grammar kind maps to exactly one [`Strategy`]. Most kinds are inline
//! joins that differ only in which neighbours hug each other; the braced
//! declarations render their repeated body as an indented subblock.

use thriftfmt_core::{NodeId, SyntaxKind, SyntaxTree};

/// Decides whether `child` is written directly after `prev`, with no join
pub(crate) type TightFn = fn(&SyntaxTree, NodeId, NodeId) -> bool;

/// Join policy for inline rendering
#[derive(Clone, Copy)]
pub(crate) struct Join {
    pub(crate) sep: &'static str,
    pub(crate) tight: Option<TightFn>,
}

impl Join {
    /// Children separated by single spaces
    pub(crate) const INLINE: Join = Join {
        sep: " ",
        tight: None,
    };

    /// Children written back to back
    pub(crate) const TIGHT: Join = Join {
        sep: "",
        tight: None,
    };

    /// Spaces, except before a list separator
    pub(crate) const SEPARATED: Join = Join {
        sep: " ",
        tight: Some(separator_tight),
    };

    /// Parenthesized lists whose opening paren hugs the preceding name
    pub(crate) const TUPLE: Join = Join {
        sep: " ",
        tight: Some(tuple_tight),
    };

    /// Parenthesized lists that keep a space before the opening paren
    pub(crate) const PARENS: Join = Join {
        sep: " ",
        tight: Some(paren_inner_tight),
    };

    /// `map<K, V>`, `set<T>`, `list<T>`
    pub(crate) const ANGLE: Join = Join {
        sep: " ",
        tight: Some(angle_tight),
    };

    /// `[1, 2]` and `{"k": v}`
    pub(crate) const BRACKET: Join = Join {
        sep: " ",
        tight: Some(bracket_tight),
    };

    /// `key: value`
    pub(crate) const MAP_ENTRY: Join = Join {
        sep: " ",
        tight: Some(map_entry_tight),
    };

    /// Whether a join string goes between `prev` and `child`
    pub(crate) fn joins(&self, tree: &SyntaxTree, prev: NodeId, child: NodeId) -> bool {
        if self.sep.is_empty() {
            return false;
        }
        !self.tight.is_some_and(|tight| tight(tree, prev, child))
    }
}

fn is_separator(tree: &SyntaxTree, id: NodeId) -> bool {
    tree.kind(id) == SyntaxKind::ListSeparator
}

fn is_any_token(tree: &SyntaxTree, id: NodeId, texts: &[&str]) -> bool {
    tree.token(id)
        .is_some_and(|token| texts.contains(&token.text.as_str()))
}

fn separator_tight(tree: &SyntaxTree, _prev: NodeId, child: NodeId) -> bool {
    is_separator(tree, child)
}

fn tuple_tight(tree: &SyntaxTree, prev: NodeId, child: NodeId) -> bool {
    is_any_token(tree, child, &["(", ")"])
        || tree.is_token_text(prev, "(")
        || is_separator(tree, child)
}

fn paren_inner_tight(tree: &SyntaxTree, prev: NodeId, child: NodeId) -> bool {
    tree.is_token_text(child, ")") || tree.is_token_text(prev, "(") || is_separator(tree, child)
}

fn angle_tight(tree: &SyntaxTree, prev: NodeId, child: NodeId) -> bool {
    is_any_token(tree, child, &["<", ",", ">"]) || tree.is_token_text(prev, "<")
}

fn bracket_tight(tree: &SyntaxTree, prev: NodeId, child: NodeId) -> bool {
    is_any_token(tree, child, &["]", "}"])
        || is_any_token(tree, prev, &["[", "{"])
        || is_separator(tree, child)
}

fn map_entry_tight(tree: &SyntaxTree, _prev: NodeId, child: NodeId) -> bool {
    tree.is_token_text(child, ":") || is_separator(tree, child)
}

/// How a node is rendered
#[derive(Clone, Copy)]
pub(crate) enum Strategy {
    /// Leaf token, with comment reattachment
    Terminal,
    /// Render the only child
    Unwrap,
    /// Top-level block of declarations
    Block,
    /// Children on one line
    Inline(Join),
    /// Header of `start` children, indented body of `repeated`, then the rest
    Subblocks { start: usize, repeated: SyntaxKind },
    /// Nothing to render
    Skip,
}

/// Inline join used for the children of `kind`
pub(crate) fn join_for(kind: SyntaxKind) -> Join {
    match kind {
        SyntaxKind::Const
        | SyntaxKind::Typedef
        | SyntaxKind::Field
        | SyntaxKind::EnumField
        | SyntaxKind::TypeAnnotation
        | SyntaxKind::Senum => Join::SEPARATED,

        SyntaxKind::FieldId | SyntaxKind::ListSeparator => Join::TIGHT,

        SyntaxKind::MapType | SyntaxKind::SetType | SyntaxKind::ListType => Join::ANGLE,
        SyntaxKind::ConstList | SyntaxKind::ConstMap => Join::BRACKET,
        SyntaxKind::ConstMapEntry => Join::MAP_ENTRY,

        SyntaxKind::Function | SyntaxKind::TypeAnnotations => Join::TUPLE,
        SyntaxKind::ThrowsList => Join::PARENS,

        _ => Join::INLINE,
    }
}

/// Strategy for node `id`
pub(crate) fn dispatch(tree: &SyntaxTree, id: NodeId) -> Strategy {
    let kind = tree.kind(id);
    match kind {
        SyntaxKind::Terminal => Strategy::Terminal,
        SyntaxKind::Document => Strategy::Block,
        SyntaxKind::Header | SyntaxKind::Definition => Strategy::Unwrap,

        SyntaxKind::Enum => Strategy::Subblocks {
            start: 3,
            repeated: SyntaxKind::EnumField,
        },
        SyntaxKind::Struct | SyntaxKind::Union | SyntaxKind::Exception => Strategy::Subblocks {
            start: 3,
            repeated: SyntaxKind::Field,
        },
        SyntaxKind::Service => {
            let extends = tree
                .children(id)
                .iter()
                .any(|&child| tree.is_token_text(child, "extends"));
            Strategy::Subblocks {
                start: if extends { 5 } else { 3 },
                repeated: SyntaxKind::Function,
            }
        }

        SyntaxKind::Include
        | SyntaxKind::CppInclude
        | SyntaxKind::Namespace
        | SyntaxKind::Const
        | SyntaxKind::Typedef
        | SyntaxKind::EnumField
        | SyntaxKind::Senum
        | SyntaxKind::Function
        | SyntaxKind::Oneway
        | SyntaxKind::FunctionType
        | SyntaxKind::ThrowsList
        | SyntaxKind::Field
        | SyntaxKind::FieldId
        | SyntaxKind::FieldReq
        | SyntaxKind::FieldType
        | SyntaxKind::BaseType
        | SyntaxKind::RealBaseType
        | SyntaxKind::ContainerType
        | SyntaxKind::MapType
        | SyntaxKind::SetType
        | SyntaxKind::ListType
        | SyntaxKind::CppType
        | SyntaxKind::ConstValue
        | SyntaxKind::Integer
        | SyntaxKind::ConstList
        | SyntaxKind::ConstMap
        | SyntaxKind::ConstMapEntry
        | SyntaxKind::TypeAnnotations
        | SyntaxKind::TypeAnnotation
        | SyntaxKind::AnnotationValue
        | SyntaxKind::ListSeparator => Strategy::Inline(join_for(kind)),

        // Error-recovery nodes have no layout rule; they render as nothing.
        SyntaxKind::Error => Strategy::Skip,
    }
}

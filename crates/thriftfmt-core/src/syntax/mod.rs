//! Syntax tree and token stream for Thrift IDL
//!
//! This is the read/write view the formatter consumes. A grammar front end
//! produces a [`ParserResult`]: the root node of a [`SyntaxTree`], the full
//! index-ordered token stream (code and comment tokens interleaved), and the
//! parser's success flag.
//!
//! ## Architecture
//!
//! - **Tree**: an arena of nodes addressed by [`NodeId`]. Rule nodes own an
//!   ordered child list; leaves own exactly one [`Token`].
//! - **Token stream**: every token the lexer produced, in source order.
//!   Comment tokens are only reachable through the stream.
//! - **Builder**: [`TreeBuilder`] assembles both at once, which is how tests
//!   and front ends hand trees to the formatter.

mod builder;
mod kind;
mod token;
mod tree;

pub use builder::TreeBuilder;
pub use kind::SyntaxKind;
pub use token::{Channel, EOF_TEXT, SYNTHETIC_INDEX, SYNTHETIC_LINE, Token, TokenKind};
pub use tree::{NodeData, NodeId, SyntaxTree};

/// Output of the external grammar front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserResult {
    /// Tree rooted at a `Document` node
    pub tree: SyntaxTree,
    /// Full token stream; `tokens[i].index == i`
    pub tokens: Vec<Token>,
    /// Whether the parser accepted the input
    pub success: bool,
}

impl ParserResult {
    pub fn new(tree: SyntaxTree, tokens: Vec<Token>, success: bool) -> Self {
        Self {
            tree,
            tokens,
            success,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// Comment-channel tokens in stream order
    pub fn comments(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| token.is_comment())
    }
}

//! Error types for tree construction and formatting

use thiserror::Error;

use crate::syntax::NodeId;

/// Main error type for thriftfmt operations
#[derive(Debug, Error)]
pub enum ThriftFmtError {
    /// A node id that does not belong to the tree
    #[error("Unknown node {0}")]
    UnknownNode(NodeId),

    /// Child operations on a terminal node
    #[error("Node {0} is a terminal and cannot own children")]
    NotARule(NodeId),

    /// Attaching a node that already has a parent
    #[error("Node {0} is already attached to a parent")]
    AlreadyAttached(NodeId),

    /// Attaching a node below itself
    #[error("Attaching node {child} under {parent} would create a cycle")]
    WouldCreateCycle { parent: NodeId, child: NodeId },

    #[error("Child index {index} out of bounds for node {parent} with {len} children")]
    ChildIndexOutOfBounds {
        parent: NodeId,
        index: usize,
        len: usize,
    },

    /// Misuse of the tree builder
    #[error("Builder error: {message}")]
    Builder { message: String },

    /// The upstream parser reported failure
    #[error("Parse failed: {reason}")]
    ParseFailed { reason: String },

    /// Invalid formatter configuration
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Tree,
    Builder,
    Parse,
    Config,
}

impl ThriftFmtError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ThriftFmtError::UnknownNode(_)
            | ThriftFmtError::NotARule(_)
            | ThriftFmtError::AlreadyAttached(_)
            | ThriftFmtError::WouldCreateCycle { .. }
            | ThriftFmtError::ChildIndexOutOfBounds { .. } => ErrorKind::Tree,
            ThriftFmtError::Builder { .. } => ErrorKind::Builder,
            ThriftFmtError::ParseFailed { .. } => ErrorKind::Parse,
            ThriftFmtError::Config { .. } => ErrorKind::Config,
        }
    }

    /// Whether a batch run can continue with the next document
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Parse | ErrorKind::Builder)
    }

    /// Create a builder error
    pub fn builder(message: impl Into<String>) -> Self {
        Self::Builder {
            message: message.into(),
        }
    }

    /// Create a parse failure error
    pub fn parse_failed(reason: impl Into<String>) -> Self {
        Self::ParseFailed {
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

//! thriftfmt core
//!
//! Syntax tree, token stream and shared error types for the Thrift IDL
//! formatter. The grammar front end produces a [`ParserResult`]; the
//! formatter crate patches and renders it.

pub mod error;
pub mod result;
pub mod syntax;

pub use error::{ErrorKind, ThriftFmtError};
pub use result::{Result, ResultExt};
pub use syntax::{
    Channel, NodeData, NodeId, ParserResult, SyntaxKind, SyntaxTree, Token, TokenKind, TreeBuilder,
};

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("thriftfmt=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

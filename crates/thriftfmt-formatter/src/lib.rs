//! thriftfmt formatter
//!
//! Pretty-printer for Thrift IDL syntax trees. A [`ParserResult`] is patched
//! (requiredness and list separators) and rendered with canonical whitespace,
//! aligned field columns and its comments reattached.
//!
//! ```rust
//! use thriftfmt_core::{SyntaxKind, TreeBuilder};
//! use thriftfmt_formatter::ThriftFormatter;
//!
//! let mut builder = TreeBuilder::new();
//! builder.node(SyntaxKind::Document, |b| {
//!     b.node(SyntaxKind::Header, |b| {
//!         b.node(SyntaxKind::Include, |b| {
//!             b.token("include");
//!             b.token("\"shared.thrift\"");
//!         });
//!     });
//!     b.eof();
//! });
//!
//! let mut formatter = ThriftFormatter::new(builder.finish().unwrap());
//! assert_eq!(formatter.format().unwrap(), "include \"shared.thrift\"");
//! ```

mod align;
mod comments;
mod formatter;
mod layout;
pub mod options;
pub mod patch;
mod render;
mod strategy;

pub use formatter::{ThriftFormatter, format_batch, format_parser_result};
pub use options::FormatOptions;
pub use patch::{PatchStats, patch};
pub use render::render_plain;
pub use thriftfmt_core::{ParserResult, Result, ThriftFmtError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use super::{FormatOptions, ThriftFormatter, format_batch, render_plain};
}

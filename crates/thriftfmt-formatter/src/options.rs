//! Formatter options

use serde::{Deserialize, Serialize};
use thriftfmt_core::{Result, ThriftFmtError};

/// Indent used when the configured one is not positive
pub const DEFAULT_INDENT: usize = 4;

/// Separator written by the patch pass
pub const DEFAULT_SEPARATOR: &str = ",";

/// Formatting options
///
/// Field names serialize in camelCase, and missing keys take their default:
///
/// ```json
/// { "indent": 2, "alignByAssign": false, "alignByField": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    /// Spaces per indentation level; non-positive means [`DEFAULT_INDENT`]
    pub indent: i32,

    /// Insert `required` on struct fields without a requiredness qualifier
    pub patch_required: bool,

    /// Normalize, add and strip trailing list separators
    pub patch_separator: bool,

    /// Reattach comments from the token stream
    pub keep_comment: bool,

    /// Align `=` signs across sibling fields
    pub align_by_assign: bool,

    /// Align every field column; ignored while `align_by_assign` is set
    pub align_by_field: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT as i32,
            patch_required: true,
            patch_separator: true,
            keep_comment: true,
            align_by_assign: true,
            align_by_field: false,
        }
    }
}

impl FormatOptions {
    /// Build options with both normalization rules applied up front
    pub fn new(
        indent: i32,
        patch_required: bool,
        patch_separator: bool,
        keep_comment: bool,
        align_by_assign: bool,
        align_by_field: bool,
    ) -> Self {
        Self {
            indent: if indent > 0 {
                indent
            } else {
                DEFAULT_INDENT as i32
            },
            patch_required,
            patch_separator,
            keep_comment,
            align_by_assign,
            align_by_field: !align_by_assign && align_by_field,
        }
    }

    /// Options that only re-indent: no patching, comments or alignment
    pub fn plain() -> Self {
        Self::new(DEFAULT_INDENT as i32, false, false, false, false, false)
    }

    /// Parse options from a JSON document
    pub fn from_json_str(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|err| ThriftFmtError::config(err.to_string()))
    }

    /// Effective indent width
    pub fn indent_width(&self) -> usize {
        if self.indent > 0 {
            self.indent as usize
        } else {
            DEFAULT_INDENT
        }
    }

    /// One level of indentation
    pub fn indent_string(&self) -> String {
        " ".repeat(self.indent_width())
    }

    /// Whether field-level alignment is in effect
    pub fn field_alignment(&self) -> bool {
        self.align_by_field && !self.align_by_assign
    }
}

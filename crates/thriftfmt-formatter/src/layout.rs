//! Layout engine: output buffer, coalesced newlines and one-shot indentation
//!
//! Newlines are requested rather than written. Requests coalesce to their
//! maximum and are flushed right before the next real emission, so "at least
//! one blank line here" and "at least a line break here" combine into a single
//! blank line instead of stacking.

use unicode_width::UnicodeWidthStr;

use crate::align::Alignment;

/// Display width of `text` in columns
pub(crate) fn width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Mutable state of one render
#[derive(Debug, Default)]
pub(crate) struct RenderState {
    out: String,
    pending_newlines: usize,
    indent: String,
    /// Stream index of the last token consumed by comment reattachment
    pub(crate) last_token: Option<usize>,
    /// Padding tables of the subblock being rendered
    pub(crate) alignment: Alignment,
}

impl RenderState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Flush pending newlines, then write `text`
    pub(crate) fn append(&mut self, text: &str) {
        if self.pending_newlines > 0 {
            for _ in 0..self.pending_newlines {
                self.out.push('\n');
            }
            self.pending_newlines = 0;
        }
        self.out.push_str(text);
    }

    /// Write `text` to the already committed line, ignoring pending newlines
    pub(crate) fn append_current_line(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Ask for at least `count` newlines before the next emission
    pub(crate) fn request_newline(&mut self, count: usize) {
        self.pending_newlines = self.pending_newlines.max(count);
    }

    pub(crate) fn has_pending_newline(&self) -> bool {
        self.pending_newlines > 0
    }

    pub(crate) fn set_indent(&mut self, indent: &str) {
        self.indent.clear();
        self.indent.push_str(indent);
    }

    /// Emit the current indent without consuming it
    pub(crate) fn emit_indent(&mut self) {
        if !self.indent.is_empty() {
            let indent = self.indent.clone();
            self.append(&indent);
        }
    }

    /// Emit the current indent once, before the first content of a line
    pub(crate) fn push_indent(&mut self) {
        if !self.indent.is_empty() {
            let indent = std::mem::take(&mut self.indent);
            self.append(&indent);
        }
    }

    /// Text of the line in progress; empty while a newline is pending
    pub(crate) fn current_line(&self) -> &str {
        if self.pending_newlines > 0 {
            return "";
        }
        self.committed_line()
    }

    /// Text after the last written newline, pending ones notwithstanding
    pub(crate) fn committed_line(&self) -> &str {
        match self.out.rfind('\n') {
            Some(pos) => &self.out[pos + 1..],
            None => &self.out,
        }
    }

    /// Fill the line in progress with spaces up to column `target`
    pub(crate) fn pad_to(&mut self, target: usize) {
        if target == 0 {
            return;
        }
        let missing = target.saturating_sub(width(self.current_line()));
        if missing > 0 {
            self.append_current_line(&" ".repeat(missing));
        }
    }

    /// Fill the committed line with spaces up to column `target`
    pub(crate) fn pad_committed_to(&mut self, target: usize) {
        let missing = target.saturating_sub(width(self.committed_line()));
        if missing > 0 {
            self.append_current_line(&" ".repeat(missing));
        }
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &str {
        &self.out
    }

    /// Rendered text; newlines still pending are dropped
    pub(crate) fn finish(self) -> String {
        self.out
    }
}

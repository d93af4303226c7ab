//! Formatter entry points

use rayon::prelude::*;
use thriftfmt_core::{ParserResult, Result, ThriftFmtError};
use tracing::{debug, debug_span, warn};

use crate::options::FormatOptions;
use crate::patch::patch;
use crate::render::Renderer;

/// Formats one parsed document
///
/// The formatter owns the parse result because the patch pass rewrites the
/// tree in place. Formatting twice yields the same text.
#[derive(Debug)]
pub struct ThriftFormatter {
    data: ParserResult,
    options: FormatOptions,
}

impl ThriftFormatter {
    pub fn new(data: ParserResult) -> Self {
        Self::with_options(data, FormatOptions::default())
    }

    pub fn with_options(data: ParserResult, options: FormatOptions) -> Self {
        Self { data, options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: FormatOptions) {
        self.options = options;
    }

    pub fn parser_result(&self) -> &ParserResult {
        &self.data
    }

    pub fn into_parser_result(self) -> ParserResult {
        self.data
    }

    /// Patch the tree and render it
    ///
    /// Trees from a failed parse are formatted anyway; use
    /// [`ThriftFormatter::format_checked`] to refuse them.
    pub fn format(&mut self) -> Result<String> {
        let span = debug_span!(
            "format",
            nodes = self.data.tree.len(),
            tokens = self.data.tokens.len()
        );
        let _enter = span.enter();

        if !self.data.is_success() {
            warn!("formatting a tree from a failed parse");
        }

        patch(&mut self.data.tree, &self.options)?;
        let root = self.data.root();
        let output =
            Renderer::decorated(&self.data.tree, &self.data.tokens, &self.options).render(root);

        debug!(bytes = output.len(), "formatted document");
        Ok(output)
    }

    /// Like [`ThriftFormatter::format`], but fails on a tree from a failed parse
    pub fn format_checked(&mut self) -> Result<String> {
        if !self.data.is_success() {
            return Err(ThriftFmtError::parse_failed(
                "parser reported errors, refusing to format",
            ));
        }
        self.format()
    }
}

/// Format `data` with `options`
pub fn format_parser_result(data: ParserResult, options: &FormatOptions) -> Result<String> {
    ThriftFormatter::with_options(data, options.clone()).format()
}

/// Format independent documents in parallel, keeping input order
pub fn format_batch(batch: Vec<ParserResult>, options: &FormatOptions) -> Vec<Result<String>> {
    debug!(documents = batch.len(), "formatting batch");
    batch
        .into_par_iter()
        .map(|data| format_parser_result(data, options))
        .collect()
}

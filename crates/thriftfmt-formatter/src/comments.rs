//! Comment reattachment
//!
//! Comments live only in the token stream. The renderer remembers the stream
//! index of the last token it consumed; comments between that index and the
//! next rendered token are written as leading comments, and a comment on the
//! same source line as the last token becomes a trailing comment.

use thriftfmt_core::{Token, TokenKind};

use crate::render::Renderer;

impl Renderer<'_> {
    /// Write the comment that trails the last consumed token on its line
    pub(crate) fn trailing_comment(&mut self) {
        if !self.options.keep_comment {
            return;
        }
        let Some(last) = self.state.last_token else {
            return;
        };
        let tokens = self.tokens;
        let Some(last_token) = tokens.get(last) else {
            return;
        };

        let comment = tokens
            .iter()
            .skip(last + 1)
            .take_while(|token| token.line == last_token.line)
            .find(|token| token.is_comment());
        let Some(comment) = comment else {
            return;
        };

        let column = self.state.alignment.comment;
        if column > 0 {
            self.state.pad_committed_to(column);
        } else {
            self.state.append_current_line(" ");
        }
        self.state.append_current_line(comment.text.trim());
        self.state.last_token = Some(comment.index);
    }

    /// Write the comments between the last consumed token and `token`
    pub(crate) fn leading_comments(&mut self, token: &Token) {
        if !self.options.keep_comment || token.is_synthetic() {
            return;
        }

        let tokens = self.tokens;
        let from = self.state.last_token.map_or(0, |last| last + 1);
        let pending = tokens
            .iter()
            .skip(from)
            .take_while(|candidate| candidate.index < token.index)
            .filter(|candidate| candidate.is_comment());

        for comment in pending {
            if comment.index > 0 && comment.kind == TokenKind::BlockComment {
                self.state.request_newline(2);
            }

            self.state.emit_indent();
            self.state.append(comment.text.trim());

            let line_gap = i64::from(token.line) - i64::from(comment.last_line());
            let tight =
                comment.kind == TokenKind::LineComment || token.is_eof() || line_gap == 1;
            self.state.request_newline(if tight { 1 } else { 2 });
        }

        self.state.last_token = Some(token.index);
    }
}

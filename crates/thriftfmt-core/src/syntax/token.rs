//! Tokens of the lexer output stream
//!
//! Code and comment tokens share one index-ordered stream. Comments live on
//! their own channel: they are addressable by index but never appear as
//! children in the syntax tree.

/// Line value stamped on tokens inserted by the formatter (lines are 1-based)
pub const SYNTHETIC_LINE: u32 = 0;

/// Stream index stamped on tokens inserted by the formatter
pub const SYNTHETIC_INDEX: usize = usize::MAX;

/// Text carried by the end-of-input token
pub const EOF_TEXT: &str = "<EOF>";

/// Channel a token was emitted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Code,
    Comment,
}

/// Lexical class of a token, as far as the formatter cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Default,
    Eof,
    /// `// ...` or `# ...`
    LineComment,
    /// `/* ... */`
    BlockComment,
}

/// A single lexer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Raw source text
    pub text: String,
    /// 1-based source line, or [`SYNTHETIC_LINE`]
    pub line: u32,
    /// Position in the full token stream, or [`SYNTHETIC_INDEX`]
    pub index: usize,
    pub channel: Channel,
    pub kind: TokenKind,
}

impl Token {
    /// Create a code token
    pub fn code(text: impl Into<String>, line: u32, index: usize) -> Self {
        Self {
            text: text.into(),
            line,
            index,
            channel: Channel::Code,
            kind: TokenKind::Default,
        }
    }

    /// Create a comment token, classifying it by its opening characters
    pub fn comment(text: impl Into<String>, line: u32, index: usize) -> Self {
        let text = text.into();
        let kind = if text.starts_with("/*") {
            TokenKind::BlockComment
        } else {
            TokenKind::LineComment
        };
        Self {
            text,
            line,
            index,
            channel: Channel::Comment,
            kind,
        }
    }

    /// Create the end-of-input token
    pub fn eof(line: u32, index: usize) -> Self {
        Self {
            text: EOF_TEXT.to_string(),
            line,
            index,
            channel: Channel::Code,
            kind: TokenKind::Eof,
        }
    }

    /// Create a token that does not come from the source
    pub fn synthetic(text: impl Into<String>) -> Self {
        Self::code(text, SYNTHETIC_LINE, SYNTHETIC_INDEX)
    }

    pub fn is_comment(&self) -> bool {
        self.channel == Channel::Comment
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn is_synthetic(&self) -> bool {
        self.line == SYNTHETIC_LINE
    }

    /// Line of the last physical line this token covers
    pub fn last_line(&self) -> u32 {
        let extra = self.text.matches('\n').count() as u32;
        self.line + extra
    }
}

use std::sync::Arc;

/// Where a [`Source`] begins relative to the file it was extracted from.
///
/// Both values are 1-based, matching how editors report positions. A
/// source that was not embedded in a larger file starts at `1:1`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocationOffset {
    pub line: usize,
    pub column: usize,
}
impl Default for LocationOffset {
    fn default() -> Self {
        Self {
            line: 1,
            column: 1,
        }
    }
}

/// The text of a GraphQL document together with a human-readable name
/// (usually a file path).
///
/// Every [`Location`] produced while parsing one document points at the
/// same `Arc<Source>`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Source {
    pub body: String,
    pub name: String,
    pub location_offset: LocationOffset,
}
impl Source {
    pub fn new(body: impl Into<String>) -> Self {
        Self::with_name(body, "GraphQL request")
    }

    pub fn with_name(
        body: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            body: body.into(),
            name: name.into(),
            location_offset: LocationOffset::default(),
        }
    }
}

/// Lexical category of a [`Token`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    Amp,
    At,
    Bang,
    BlockString,
    BraceL,
    BraceR,
    BracketL,
    BracketR,
    Colon,
    Comment,
    Dollar,
    Eof,
    Equals,
    Float,
    Int,
    Name,
    ParenL,
    ParenR,
    Pipe,
    Sof,
    Spread,
    String,
}
impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amp => "&",
            Self::At => "@",
            Self::Bang => "!",
            Self::BlockString => "BlockString",
            Self::BraceL => "{",
            Self::BraceR => "}",
            Self::BracketL => "[",
            Self::BracketR => "]",
            Self::Colon => ":",
            Self::Comment => "Comment",
            Self::Dollar => "$",
            Self::Eof => "<EOF>",
            Self::Equals => "=",
            Self::Float => "Float",
            Self::Int => "Int",
            Self::Name => "Name",
            Self::ParenL => "(",
            Self::ParenR => ")",
            Self::Pipe => "|",
            Self::Sof => "<SOF>",
            Self::Spread => "...",
            Self::String => "String",
        }
    }
}

/// A single lexical token as produced by the tokenizer.
///
/// `start`/`end` are byte offsets into [`Source::body`]; `line` and
/// `column` are 1-based.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
    pub value: Option<String>,
}

/// Source-location metadata attached to a node.
///
/// Tokens and the source are reference-counted: cloning a node (or a
/// whole tree) shares them with the original rather than copying them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Location {
    pub start: usize,
    pub end: usize,
    pub start_token: Option<Arc<Token>>,
    pub end_token: Option<Arc<Token>>,
    pub source: Option<Arc<Source>>,
}
impl Location {
    /// A location that only knows its byte range.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            start_token: None,
            end_token: None,
            source: None,
        }
    }

    /// A location spanning from the start of `start_token` to the end of
    /// `end_token`.
    pub fn from_tokens(
        start_token: Arc<Token>,
        end_token: Arc<Token>,
        source: Option<Arc<Source>>,
    ) -> Self {
        Self {
            start: start_token.start,
            end: end_token.end,
            start_token: Some(start_token),
            end_token: Some(end_token),
            source,
        }
    }

    /// Compact `{start, end}` view used by the tree dumps.
    pub fn span(&self) -> LocSpan {
        LocSpan {
            start: self.start,
            end: self.end,
        }
    }
}

/// Byte range of a [`Location`] without its token/source references.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct LocSpan {
    pub start: usize,
    pub end: usize,
}

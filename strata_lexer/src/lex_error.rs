//! Lexical error kinds.
//!
//! Errors are not a separate channel: they surface as `Invalid` tokens
//! flowing through the ordinary token stream, and the lexer always resumes
//! after one. The kind rides on [`TokenKind::Invalid`] so consumers match
//! on it instead of parsing message text; the fixed message doubles as the
//! `Invalid` token's text for anything that just wants to print it.
//!
//! [`TokenKind::Invalid`]: crate::token::TokenKind::Invalid

use thiserror::Error;

mod msg {
    pub(super) const TABS_IN_INDENT: &str = "tabs are not supported for indentation";
    pub(super) const STRAY_DOT: &str =
        "a dot must either form '...' to end a document or appear inside a string";
    pub(super) const STRAY_HYPHEN: &str =
        "a dash must either be a '- ' sequence marker or start a '---' document marker";
    pub(super) const UNTERMINATED_STRING: &str =
        "unterminated quoted string: end of input before the closing quote";
}

/// What kind of lexical error occurred.
///
/// Every kind is local and recoverable: the tokenizer keeps producing
/// tokens from the position just past the offending bytes, and only a real
/// end of input terminates the stream.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexErrorKind {
    /// A tab character where indentation was being measured.
    /// Only spaces may indent a line.
    #[error("{}", msg::TABS_IN_INDENT)]
    TabsInIndent,
    /// A `.` that does not start a `...` end-of-document marker.
    #[error("{}", msg::STRAY_DOT)]
    StrayDot,
    /// A `-` that is neither a `- ` sequence marker nor part of a `---`
    /// document-start marker.
    #[error("{}", msg::STRAY_HYPHEN)]
    StrayHyphen,
    /// End of input reached before a quoted scalar's closing quote.
    #[error("{}", msg::UNTERMINATED_STRING)]
    UnterminatedString,
}

impl LexErrorKind {
    /// Fixed diagnostic message for this kind.
    ///
    /// The lexer places this in the `Invalid` token's text field, so
    /// consumers that only look at text still see the diagnostic.
    pub const fn message(self) -> &'static str {
        match self {
            LexErrorKind::TabsInIndent => msg::TABS_IN_INDENT,
            LexErrorKind::StrayDot => msg::STRAY_DOT,
            LexErrorKind::StrayHyphen => msg::STRAY_HYPHEN,
            LexErrorKind::UnterminatedString => msg::UNTERMINATED_STRING,
        }
    }
}

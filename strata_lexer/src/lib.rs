//! Tokenizer for the Strata document notation.
//!
//! Strata is a human-readable, indentation-structured, line-oriented data
//! serialization format. This crate is its lexical front end: it turns
//! document text into a flat, ordered stream of classified [`Token`]s that
//! a downstream parser composes into a tree, using the per-token
//! indentation the lexer reports for its nesting decisions.
//!
//! The stream is lossless enough for tooling: comments, single spaces, and
//! blank lines are emitted as tokens, never silently dropped; filtering
//! them is the consumer's job. Malformed input flows through the same
//! channel as [`TokenKind::Invalid`] tokens carrying a [`LexErrorKind`];
//! the stream only ends at real end of input.
//!
//! ```
//! use strata_lexer::{Lexer, SourceBuffer, TokenKind};
//!
//! let buffer = SourceBuffer::new("key: val\n");
//! let mut lexer = Lexer::new(&buffer);
//!
//! let key = lexer.next_token();
//! assert_eq!(key.kind, TokenKind::MapKey);
//! assert_eq!(key.text, "key");
//! ```

pub mod lex_error;
pub mod lexer;
pub mod token;

pub use lex_error::LexErrorKind;
pub use lexer::Lexer;
pub use strata_lexer_core::{Cursor, SourceBuffer};
pub use token::{Token, TokenKind};

/// Tokenize a whole buffer, collecting every token up to and excluding the
/// terminal [`TokenKind::EndOfFile`].
///
/// For streaming access, construct a [`Lexer`] and pull tokens directly.
pub fn tokenize(buffer: &SourceBuffer) -> Vec<Token<'_>> {
    Lexer::new(buffer).collect()
}

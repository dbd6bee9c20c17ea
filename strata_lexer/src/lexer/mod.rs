//! The Strata tokenizer.
//!
//! A pull-based scanner: every [`Lexer::next_token`] call is one state
//! transition that classifies exactly one lexical unit and advances past
//! it. The stream ends with a terminal [`TokenKind::EndOfFile`]; calls
//! after that keep returning `EndOfFile`.
//!
//! # Line and indentation bookkeeping
//!
//! The lexer tracks a 1-based line counter and an indent latch. The latch
//! is set at construction and whenever a line boundary is crossed; while it
//! is set, the next call measures the run of leading spaces before
//! classifying anything. Blank lines and tabs short-circuit measurement
//! with their own token, leaving the latch set so the following call
//! resumes measuring. Line breaks are `\n`, `\r`, or a two-byte pair in
//! either order, always consumed as a single boundary.
//!
//! # Errors
//!
//! Malformed input never aborts the stream. It becomes a
//! [`TokenKind::Invalid`] token carrying a [`LexErrorKind`], and lexing
//! continues from just past the offending bytes.

use strata_lexer_core::{Cursor, SourceBuffer};

use crate::lex_error::LexErrorKind;
use crate::token::{Token, TokenKind};

/// Pull-based tokenizer over a [`SourceBuffer`].
///
/// The buffer must outlive the lexer; token text borrows from it. The
/// lexer never mutates or copies the source. One consumer drives one
/// instance to completion; the type is deliberately not `Sync`-shared
/// state, just a cursor plus two counters.
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    /// 1-based line of the byte at the cursor.
    line: u32,
    /// Set when a line boundary was just crossed and leading spaces have
    /// not been measured yet. Set at construction: the first line needs
    /// measuring too.
    measure_indent: bool,
}

impl<'src> Lexer<'src> {
    /// Create a lexer positioned at the start of the buffer.
    pub fn new(buffer: &'src SourceBuffer) -> Self {
        Self {
            cursor: buffer.cursor(),
            line: 1,
            measure_indent: true,
        }
    }

    /// Produce the next token.
    ///
    /// Returns `EndOfFile` once the input is exhausted; calling again after
    /// that idempotently returns `EndOfFile`.
    pub fn next_token(&mut self) -> Token<'src> {
        // A line break at the cursor ends the previous line, unless the
        // indent latch is still set: then the break is a blank line and
        // belongs to measurement below. Without that distinction a run of
        // N blank lines would surface as fewer than N EmptyLine tokens.
        if !self.measure_indent && self.at_line_break() {
            self.consume_line_break();
            self.measure_indent = true;
        }

        let mut indent = 0u32;
        if self.measure_indent {
            if let Some(token) = self.measure_indentation(&mut indent) {
                return token;
            }
        }

        let line = self.line;
        match self.cursor.current() {
            0 if self.cursor.is_eof() => Token {
                kind: TokenKind::EndOfFile,
                text: "",
                indent,
                line,
            },
            b'{' => self.single(TokenKind::OpenBrace, indent, line),
            b'}' => self.single(TokenKind::CloseBrace, indent, line),
            b'[' => self.single(TokenKind::OpenBracket, indent, line),
            b']' => self.single(TokenKind::CloseBraket, indent, line),
            b' ' => self.single(TokenKind::Space, indent, line),
            b',' => self.single(TokenKind::Comma, indent, line),
            b'#' if self.cursor.peek() == b' ' => self.comment(indent, line),
            b'-' => self.seq_or_start_doc(indent, line),
            b'.' => self.end_doc_or_invalid(indent, line),
            b'"' | b'\'' => self.quoted_scalar(indent, line),
            // Everything else, including `#` without a trailing space,
            // starts a plain scalar.
            _ => self.scalar_or_map_key(indent, line),
        }
    }

    // ─── Line bookkeeping ────────────────────────────────────────────────

    /// Returns `true` when the cursor sits on a line-break byte.
    fn at_line_break(&self) -> bool {
        matches!(self.cursor.current(), b'\n' | b'\r')
    }

    /// Consume one line-break sequence and bump the line counter.
    ///
    /// `\n\r` and `\r\n` pairs count as a single boundary.
    fn consume_line_break(&mut self) {
        let first = self.cursor.current();
        self.cursor.advance();
        let second = self.cursor.current();
        if (first == b'\n' && second == b'\r') || (first == b'\r' && second == b'\n') {
            self.cursor.advance();
        }
        self.line += 1;
    }

    /// Walk the run of spaces (and blank lines) at the start of a line.
    ///
    /// Returns a token when measurement short-circuits: an `EmptyLine` for
    /// a line with no content, or an `Invalid` for a tab. Both leave the
    /// latch set, so the following call resumes measuring from the
    /// advanced position. Otherwise clears the latch and returns `None`
    /// with `indent` holding the leading-space count.
    fn measure_indentation(&mut self, indent: &mut u32) -> Option<Token<'src>> {
        loop {
            match self.cursor.current() {
                b' ' => {
                    self.cursor.advance();
                    *indent += 1;
                }
                b'\t' => {
                    self.cursor.advance();
                    return Some(self.invalid(LexErrorKind::TabsInIndent, *indent, self.line));
                }
                b'\n' | b'\r' => {
                    let line = self.line;
                    self.consume_line_break();
                    return Some(Token {
                        kind: TokenKind::EmptyLine,
                        text: "",
                        indent: *indent,
                        line,
                    });
                }
                _ => {
                    self.measure_indent = false;
                    return None;
                }
            }
        }
    }

    // ─── Token constructors ──────────────────────────────────────────────

    /// Single-byte structural token with empty text.
    fn single(&mut self, kind: TokenKind, indent: u32, line: u32) -> Token<'src> {
        self.cursor.advance();
        Token {
            kind,
            text: "",
            indent,
            line,
        }
    }

    fn invalid(&self, kind: LexErrorKind, indent: u32, line: u32) -> Token<'src> {
        Token {
            kind: TokenKind::Invalid(kind),
            text: kind.message(),
            indent,
            line,
        }
    }

    // ─── Classification ──────────────────────────────────────────────────

    /// `# ` comment. The text spans from the `#` up to (excluding) the
    /// line break, which is left for the next call's boundary handling.
    fn comment(&mut self, indent: u32, line: u32) -> Token<'src> {
        let start = self.cursor.pos();
        self.cursor.eat_until_line_break_or_eof();
        Token {
            kind: TokenKind::Comment,
            text: self.cursor.slice_from(start),
            indent,
            line,
        }
    }

    /// `-` lookahead: `- ` is a sequence-entry marker, `---` starts a
    /// document, anything else is an error.
    fn seq_or_start_doc(&mut self, indent: u32, line: u32) -> Token<'src> {
        match (self.cursor.peek(), self.cursor.peek2()) {
            // Only the hyphen is consumed; the following space becomes the
            // next call's Space token.
            (b' ', _) => self.single(TokenKind::Seq, indent, line),
            (b'-', b'-') => {
                // Consume `---`, then discard whatever trails on the
                // marker line. The two extra hyphens count toward indent.
                self.cursor.advance_n(3);
                self.cursor.eat_until_line_break_or_eof();
                Token {
                    kind: TokenKind::StartDoc,
                    text: "",
                    indent: indent + 2,
                    line,
                }
            }
            _ => {
                self.cursor.advance();
                self.invalid(LexErrorKind::StrayHyphen, indent, line)
            }
        }
    }

    /// `.` lookahead: three dots end a document, anything else is an error.
    fn end_doc_or_invalid(&mut self, indent: u32, line: u32) -> Token<'src> {
        if self.cursor.peek() == b'.' && self.cursor.peek2() == b'.' {
            self.cursor.advance_n(3);
            Token {
                kind: TokenKind::EndDoc,
                text: "",
                indent,
                line,
            }
        } else {
            self.cursor.advance();
            self.invalid(LexErrorKind::StrayDot, indent, line)
        }
    }

    /// Quoted scalar. The text is everything between the quotes; `\X`
    /// pairs are skipped as a unit and preserved verbatim, escapes being
    /// the parser's to interpret. Line breaks inside the scalar are
    /// counted so line numbers stay exact, but they do not start
    /// indentation measurement: the continuation is part of the token,
    /// not a new line of content.
    fn quoted_scalar(&mut self, indent: u32, line: u32) -> Token<'src> {
        let quote = self.cursor.current();
        self.cursor.advance();
        let start = self.cursor.pos();
        loop {
            match self.cursor.skip_to_quote_delim(quote) {
                b if b == quote => {
                    let text = self.cursor.slice_from(start);
                    self.cursor.advance();
                    return Token {
                        kind: TokenKind::String,
                        text,
                        indent,
                        line,
                    };
                }
                b'\\' => {
                    self.cursor.advance();
                    if self.at_line_break() {
                        // An escaped line break is still a line boundary.
                        self.consume_line_break();
                    } else if !self.cursor.is_eof() {
                        self.cursor.advance();
                    }
                }
                b'\n' | b'\r' => self.consume_line_break(),
                _ => {
                    // End of input before the closing quote.
                    return self.invalid(LexErrorKind::UnterminatedString, indent, line);
                }
            }
        }
    }

    /// Plain scalar / mapping key. Runs until end of input, a line break
    /// (left for the next call), or a `: ` pair, which reclassifies the
    /// run as a mapping key. A `:` not followed by a space is ordinary
    /// scalar content.
    fn scalar_or_map_key(&mut self, indent: u32, line: u32) -> Token<'src> {
        let start = self.cursor.pos();
        loop {
            match self.cursor.skip_to_scalar_delim() {
                b':' => {
                    if self.cursor.peek() == b' ' {
                        let text = self.cursor.slice_from(start);
                        // Consume the colon; the space is the next token.
                        self.cursor.advance();
                        return Token {
                            kind: TokenKind::MapKey,
                            text,
                            indent,
                            line,
                        };
                    }
                    self.cursor.advance();
                }
                _ => {
                    return Token {
                        kind: TokenKind::String,
                        text: self.cursor.slice_from(start),
                        indent,
                        line,
                    };
                }
            }
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    /// Yields tokens up to and excluding the terminal `EndOfFile`.
    fn next(&mut self) -> Option<Token<'src>> {
        let token = self.next_token();
        if token.kind == TokenKind::EndOfFile {
            None
        } else {
            Some(token)
        }
    }
}

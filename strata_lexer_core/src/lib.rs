//! Low-level scanning substrate for the Strata tokenizer.
//!
//! This crate knows nothing about Strata token kinds. It provides a
//! sentinel-terminated [`SourceBuffer`] and a bounds-safe [`Cursor`] that
//! higher layers drive one byte (or one memchr-accelerated run) at a time.
//!
//! The split mirrors the shape of the tokenizer stack: the buffer owns the
//! bytes, the cursor is a cheap [`Copy`] view that can never be advanced
//! past the end of the allocation, and everything that assigns *meaning*
//! to bytes lives upstream in `strata_lexer`.

pub mod cursor;
pub mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;

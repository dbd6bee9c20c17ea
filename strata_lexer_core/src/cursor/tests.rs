use crate::SourceBuffer;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_moves_multiple() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance_n(3);
    assert_eq!(cursor.current(), b'd');
    assert_eq!(cursor.pos(), 3);
}

// === Peek ===

#[test]
fn peek_returns_next_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek(), b'b');
    assert_eq!(cursor.peek2(), b'c');
}

#[test]
fn peek_near_end_returns_sentinel() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    cursor.advance(); // at 'b'
    assert_eq!(cursor.peek(), 0); // sentinel
    assert_eq!(cursor.peek2(), 0); // padding
}

// === EOF Detection ===

#[test]
fn is_eof_at_sentinel() {
    let buf = SourceBuffer::new("x");
    let mut cursor = buf.cursor();
    assert!(!cursor.is_eof());
    cursor.advance(); // past 'x', at sentinel
    assert!(cursor.is_eof());
}

#[test]
fn is_eof_on_empty_source() {
    let buf = SourceBuffer::new("");
    let cursor = buf.cursor();
    assert!(cursor.is_eof());
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance(); // at '\0' (interior null)
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof()); // pos=1 < source_len=3
    cursor.advance(); // at 'b'
    assert_eq!(cursor.current(), b'b');
}

// === Slice ===

#[test]
fn slice_extracts_substring() {
    let buf = SourceBuffer::new("hello world");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 5), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
}

#[test]
fn slice_from_extracts_to_current() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance_n(3); // pos = 3
    assert_eq!(cursor.slice_from(0), "abc");
    assert_eq!(cursor.slice_from(1), "bc");
}

#[test]
fn slice_preserves_multibyte_content() {
    let buf = SourceBuffer::new("héllo");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, buf.len()), "héllo");
}

// === Bulk Skips ===

#[test]
fn eat_until_line_break_stops_at_lf() {
    let buf = SourceBuffer::new("abc\ndef");
    let mut cursor = buf.cursor();
    cursor.eat_until_line_break_or_eof();
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_until_line_break_stops_at_cr() {
    let buf = SourceBuffer::new("abc\rdef");
    let mut cursor = buf.cursor();
    cursor.eat_until_line_break_or_eof();
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), b'\r');
}

#[test]
fn eat_until_line_break_runs_to_eof() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.eat_until_line_break_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_scalar_delim_stops_at_colon() {
    let buf = SourceBuffer::new("key: val");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_scalar_delim(), b':');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn skip_to_scalar_delim_stops_at_newline() {
    let buf = SourceBuffer::new("plain scalar\nnext");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_scalar_delim(), b'\n');
    assert_eq!(cursor.pos(), 12);
}

#[test]
fn skip_to_scalar_delim_returns_zero_at_eof() {
    let buf = SourceBuffer::new("plain scalar");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_scalar_delim(), 0);
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_quote_delim_finds_closing_quote() {
    let buf = SourceBuffer::new("abc\"rest");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_quote_delim(b'"'), b'"');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn skip_to_quote_delim_stops_at_backslash() {
    let buf = SourceBuffer::new("ab\\\"cd\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_quote_delim(b'"'), b'\\');
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn skip_to_quote_delim_stops_at_cr() {
    let buf = SourceBuffer::new("ab\rcd'");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_quote_delim(b'\''), b'\r');
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn skip_to_quote_delim_respects_quote_kind() {
    // Scanning a single-quoted scalar must run straight past `"`.
    let buf = SourceBuffer::new("a\"b'");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_quote_delim(b'\''), b'\'');
    assert_eq!(cursor.pos(), 3);
}

// === Properties ===

mod properties {
    use crate::SourceBuffer;
    use proptest::prelude::*;

    /// Reference implementation: first position of any byte in `stops`.
    fn naive_find(bytes: &[u8], stops: &[u8]) -> Option<usize> {
        bytes.iter().position(|b| stops.contains(b))
    }

    proptest! {
        #[test]
        fn scalar_delim_matches_naive_scan(s in "[ -~\\n\\r\\t]{0,64}") {
            let buf = SourceBuffer::new(&s);
            let mut cursor = buf.cursor();
            let found = cursor.skip_to_scalar_delim();
            match naive_find(s.as_bytes(), &[b':', b'\n', b'\r']) {
                Some(pos) => {
                    prop_assert_eq!(cursor.pos() as usize, pos);
                    prop_assert_eq!(found, s.as_bytes()[pos]);
                }
                None => {
                    prop_assert!(cursor.is_eof());
                    prop_assert_eq!(found, 0);
                }
            }
        }

        #[test]
        fn quote_delim_matches_naive_scan(s in "[ -~\\n\\r\\\\]{0,64}") {
            let buf = SourceBuffer::new(&s);
            let mut cursor = buf.cursor();
            let found = cursor.skip_to_quote_delim(b'"');
            match naive_find(s.as_bytes(), &[b'"', b'\\', b'\n', b'\r']) {
                Some(pos) => {
                    prop_assert_eq!(cursor.pos() as usize, pos);
                    prop_assert_eq!(found, s.as_bytes()[pos]);
                }
                None => {
                    prop_assert!(cursor.is_eof());
                    prop_assert_eq!(found, 0);
                }
            }
        }
    }
}

use pretty_assertions::assert_eq;

use crate::SourceBuffer;

#[test]
fn sentinel_follows_source_content() {
    let buf = SourceBuffer::new("abc");
    assert_eq!(buf.as_sentinel_bytes()[3], 0);
}

#[test]
fn padding_is_zero_filled() {
    let buf = SourceBuffer::new("abc");
    let bytes = buf.as_sentinel_bytes();
    assert!(bytes[3..].iter().all(|&b| b == 0));
}

#[test]
fn buffer_is_cache_line_padded() {
    // 3 bytes + sentinel rounds up to one cache line.
    let buf = SourceBuffer::new("abc");
    assert_eq!(buf.as_sentinel_bytes().len(), 64);

    // 63 bytes + sentinel fills exactly one cache line.
    let buf = SourceBuffer::new(&"x".repeat(63));
    assert_eq!(buf.as_sentinel_bytes().len(), 64);

    // 64 bytes + sentinel spills into a second cache line.
    let buf = SourceBuffer::new(&"x".repeat(64));
    assert_eq!(buf.as_sentinel_bytes().len(), 128);
}

#[test]
fn as_bytes_excludes_sentinel() {
    let buf = SourceBuffer::new("abc");
    assert_eq!(buf.as_bytes(), b"abc");
}

#[test]
fn len_and_is_empty() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());

    let buf = SourceBuffer::new("xy");
    assert_eq!(buf.len(), 2);
    assert!(!buf.is_empty());
}

#[test]
fn empty_source_still_has_sentinel() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.as_sentinel_bytes().len(), 64);
    assert_eq!(buf.as_sentinel_bytes()[0], 0);
}

#[test]
fn cursor_starts_at_zero() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.source_len(), 3);
}

#[test]
fn interior_null_preserved_in_content() {
    let buf = SourceBuffer::new("a\0b");
    assert_eq!(buf.as_bytes(), b"a\0b");
    assert_eq!(buf.len(), 3);
}

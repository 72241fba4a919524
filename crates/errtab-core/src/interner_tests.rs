use crate::{EncodeError, Interner};

#[test]
fn intern_deduplicates() {
    let mut interner = Interner::new();

    let a = interner.intern("foo").unwrap();
    let b = interner.intern("foo").unwrap();
    let c = interner.intern("bar").unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.len(), 2);
}

#[test]
fn second_intern_does_not_grow_blob() {
    let mut interner = Interner::new();
    interner.intern("bad padding").unwrap();
    let before = interner.blob_len();

    interner.intern("bad padding").unwrap();

    assert_eq!(interner.blob_len(), before);
}

#[test]
fn offsets_follow_first_occurrence() {
    let mut interner = Interner::new();

    assert_eq!(interner.intern("id").unwrap(), 0);
    assert_eq!(interner.intern("foo").unwrap(), 3);
    assert_eq!(interner.intern("id").unwrap(), 0);
    assert_eq!(interner.intern("").unwrap(), 7);
    assert_eq!(interner.intern("z").unwrap(), 8);

    assert_eq!(interner.blob(), b"id\0foo\0\0z\0");
}

#[test]
fn offset_32767_is_accepted() {
    let mut interner = Interner::new();
    // 32766 bytes of text plus its NUL put the next string at 32767.
    interner.intern(&"a".repeat(32766)).unwrap();

    assert_eq!(interner.intern("last").unwrap(), 32767);
    assert_eq!(interner.blob_len(), 32767 + 5);
}

#[test]
fn offset_32768_overflows() {
    let mut interner = Interner::new();
    interner.intern(&"a".repeat(32767)).unwrap();
    assert_eq!(interner.blob_len(), 32768);

    let err = interner.intern("one too many").unwrap_err();

    assert_eq!(err, EncodeError::OffsetOverflow(32768));
    assert_eq!(interner.blob_len(), 32768);
}

#[test]
fn known_strings_still_intern_after_overflow() {
    let mut interner = Interner::new();
    interner.intern("first").unwrap();
    interner.intern(&"a".repeat(40000)).unwrap();

    assert_eq!(interner.intern("first").unwrap(), 0);
    assert!(interner.intern("second").is_err());
}

#[test]
fn into_blob_empty() {
    let interner = Interner::new();

    assert!(interner.is_empty());
    assert!(interner.into_blob().is_empty());
}

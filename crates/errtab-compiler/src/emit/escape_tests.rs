use super::escape_c_string;

#[test]
fn plain_ascii_passes_through() {
    assert_eq!(escape_c_string(b"value too large"), "value too large");
}

#[test]
fn quotes_and_backslashes() {
    assert_eq!(escape_c_string(br#"a"b\c"#), r#"a\"b\\c"#);
}

#[test]
fn control_and_non_ascii_bytes_use_octal() {
    assert_eq!(escape_c_string(b"tab\there"), "tab\\011here");
    assert_eq!(escape_c_string("é1".as_bytes()), "\\303\\2511");
}

#[test]
fn trigraph_sequences_are_broken_up() {
    assert_eq!(escape_c_string(b"what??!"), "what?\\?!");
    assert_eq!(escape_c_string(b"???"), "?\\?\\?");
    assert_eq!(escape_c_string(b"a?b?c"), "a?b?c");
}

use errtab_core::{EncodeError, LibraryId, Registry};
use indoc::indoc;

use crate::builder::{TableBuilder, build};
use crate::emit::{CEmitter, EmitConfig};
use crate::test_utils::{compile, expect_error, expect_table, sources, test_registry};
use crate::{InputError, Source};

#[test]
fn scenario_different_libraries_same_reason() {
    let table = expect_table(indoc! {"
        RSA,5,padding check failed
        BN,5,value too large
    "});

    assert_eq!(table.len(), 2);
    assert_eq!(table.string_data(), b"padding check failed\0value too large\0");

    let libraries: Vec<u8> = table.iter().map(|row| row.library.get()).collect();
    assert_eq!(libraries, vec![3, 4]);
}

#[test]
fn scenario_repeated_line_interns_once_but_is_duplicate() {
    let err = expect_error(indoc! {"
        RSA,5,bad padding
        RSA,5,bad padding
    "});

    assert!(matches!(err.kind(), Some(InputError::DuplicateKey { .. })));
    assert_eq!(err.location().unwrap().line, 2);
}

#[test]
fn scenario_unknown_library_names_file_and_line() {
    let err = compile(&[
        ("a.errordata", "RSA,1,fine"),
        ("b.errordata", "BN,1,fine\n\nUNKNOWN_LIB,1,x"),
    ])
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "b.errordata:3: unknown library `UNKNOWN_LIB`"
    );
}

#[test]
fn scenario_two_files_merge_sorted() {
    let table = compile(&[
        ("rsa.errordata", "RSA,7,rsa seven\nBN,9,bn nine"),
        ("bn.errordata", "BN,2,bn two\nRSA,1,rsa one"),
    ])
    .unwrap();

    let keys: Vec<(u8, u16)> = table
        .iter()
        .map(|row| (row.library.get(), row.reason))
        .collect();
    assert_eq!(keys, vec![(3, 2), (3, 9), (4, 1), (4, 7)]);

    // bn.errordata sorts first, so its strings come first in the blob.
    assert_eq!(table.find(LibraryId::new(3), 2), Some("bn two"));
    assert!(table.string_data().starts_with(b"bn two\0rsa one\0"));
}

#[test]
fn output_is_independent_of_argument_order() {
    let a = ("a.errordata", "RSA,3,three\nBN,1,one");
    let b = ("b.errordata", "RSA,1,one\nSYS,8,eight");
    let c = ("c.errordata", "NONE,0,zero\nBN,2,three");

    let registry = test_registry();
    let render = |files: &[(&str, &str)]| {
        let table = build(&registry, &sources(files)).unwrap();
        CEmitter::new(&table, &registry, EmitConfig::new()).render()
    };

    let expected = render(&[a, b, c]);
    assert_eq!(render(&[c, b, a]), expected);
    assert_eq!(render(&[b, a, c]), expected);
    assert_eq!(render(&[a, b, c]), expected);
}

#[test]
fn table_is_strictly_sorted_by_key() {
    let table = expect_table(indoc! {"
        RSA,2047,z
        NONE,0,a
        SYS,10,m
        RSA,0,y
        SYS,9,m
        BN,1024,q
    "});

    let keys: Vec<_> = table.entries().iter().map(|e| e.key()).collect();
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(table.len(), 6);
}

#[test]
fn sort_ignores_offset() {
    // Later keys get smaller offsets; ordering must follow the key alone.
    let table = expect_table(indoc! {"
        RSA,9,shared
        RSA,1,unique message
        RSA,5,shared
    "});

    let reasons: Vec<u16> = table.iter().map(|row| row.reason).collect();
    assert_eq!(reasons, vec![1, 5, 9]);
}

#[test]
fn first_error_aborts_build() {
    let err = expect_error(indoc! {"
        RSA,1,ok
        RSA,two,broken
        RSA,2048,too large
    "});

    assert!(err.kind().unwrap().is_parse_error());
    assert_eq!(err.location().unwrap().line, 2);
}

#[test]
fn offset_overflow_aborts_build() {
    let filler = "x".repeat(1000);
    let text: String = (0..40)
        .map(|i| format!("RSA,{i},{i:02}{filler}\n"))
        .collect();

    let err = compile(&[("big.errordata", text.as_str())]).unwrap_err();

    // 33 strings of 1003 bytes fill 33099 bytes; the 34th cannot be addressed.
    assert_eq!(
        err.kind(),
        Some(&InputError::Encode(EncodeError::OffsetOverflow(33_099)))
    );
    assert_eq!(err.location().unwrap().line, 34);
}

#[test]
fn builder_counts_records_per_source() {
    let registry = test_registry();
    let mut builder = TableBuilder::new(&registry);

    let added = builder
        .add_source(&Source::new("x.errordata", "RSA,1,a\n\n  \nBN,1,b\n"))
        .unwrap();

    assert_eq!(added, 2);
    assert_eq!(builder.len(), 2);
    assert_eq!(builder.finish().len(), 2);
}

#[test]
fn builtin_registry_build() {
    let registry = Registry::boringssl();
    let table = build(
        &registry,
        &[Source::new("ssl.errordata", "SSL,100,APP_DATA_IN_HANDSHAKE")],
    )
    .unwrap();

    let ssl = registry.id("SSL").unwrap();
    assert_eq!(table.find(ssl, 100), Some("APP_DATA_IN_HANDSHAKE"));
    assert_eq!(table.entries()[0].raw(), (16 << 26) | (100 << 15));
}

use errtab_core::{ErrorTable, Registry};
use indoc::indoc;

use crate::emit::{CEmitter, EmitConfig};
use crate::test_utils::{expect_c, expect_table, test_registry};

#[test]
fn two_libraries_same_reason() {
    let input = indoc! {"
        RSA,5,padding check failed
        BN,5,value too large
    "};

    let res = expect_c(input);

    insta::assert_snapshot!(res, @r#"
    #include <openssl/base.h>
    #include <openssl/err.h>
    #include <openssl/type_check.h>


    OPENSSL_COMPILE_ASSERT(ERR_LIB_NONE == 1, library_values_changed_1);
    OPENSSL_COMPILE_ASSERT(ERR_LIB_SYS == 2, library_values_changed_2);
    OPENSSL_COMPILE_ASSERT(ERR_LIB_BN == 3, library_values_changed_3);
    OPENSSL_COMPILE_ASSERT(ERR_LIB_RSA == 4, library_values_changed_4);
    OPENSSL_COMPILE_ASSERT(ERR_NUM_LIBS == 5, library_values_changed_num);

    const uint32_t kOpenSSLReasonValues[] = {
        0xc028015,
        0x10028000,
    };

    const size_t kOpenSSLReasonValuesLen = sizeof(kOpenSSLReasonValues) / sizeof(kOpenSSLReasonValues[0]);

    const char kOpenSSLReasonStringData[] =
        "padding check failed\0"
        "value too large\0"
        "";
    "#);
}

#[test]
fn shared_message_is_emitted_once() {
    let input = indoc! {"
        RSA,100,bad encoding
        RSA,5,bad encoding
    "};

    let res = expect_c(input);

    assert!(res.contains("    0x10028000,\n    0x10320000,\n"));
    assert_eq!(res.matches("bad encoding").count(), 1);
}

#[test]
fn custom_table_name() {
    let table = expect_table("NONE,0,x");
    let config = EmitConfig::new().name("Function").preamble(false);

    let res = CEmitter::new(&table, &test_registry(), config).render();

    assert!(res.contains("const uint32_t kOpenSSLFunctionValues[] = {\n    0x4000000,\n};"));
    assert!(res.contains(
        "const size_t kOpenSSLFunctionValuesLen = sizeof(kOpenSSLFunctionValues) / sizeof(kOpenSSLFunctionValues[0]);"
    ));
    assert!(res.contains("const char kOpenSSLFunctionStringData[] =\n    \"x\\0\"\n    \"\";"));
}

#[test]
fn preamble_precedes_includes() {
    let table = expect_table("");

    let res = CEmitter::new(&table, &test_registry(), EmitConfig::new()).render();

    assert!(res.starts_with("/* Copyright (c) 2015, Google Inc."));
    assert!(res.contains("/* This file was generated by errtab. Do not edit. */\n\n#include"));
}

#[test]
fn empty_table() {
    let res = expect_c("");

    assert!(res.contains("const uint32_t kOpenSSLReasonValues[] = {\n};"));
    assert!(res.ends_with("const char kOpenSSLReasonStringData[] =\n    \"\";\n\n"));
}

#[test]
fn asserts_cover_whole_builtin_registry() {
    let registry = Registry::boringssl();
    let table = ErrorTable::new(Vec::new(), Vec::new());

    let res = CEmitter::new(&table, &registry, EmitConfig::new()).render();

    assert_eq!(res.matches("OPENSSL_COMPILE_ASSERT(ERR_LIB_").count(), 32);
    assert!(res.contains("OPENSSL_COMPILE_ASSERT(ERR_LIB_USER == 32, library_values_changed_32);"));
    assert!(res.contains("OPENSSL_COMPILE_ASSERT(ERR_NUM_LIBS == 33, library_values_changed_num);"));
}

#[test]
fn messages_are_escaped() {
    let res = expect_c(r#"BN,1,say "hi" \ bye"#);

    assert!(res.contains(r#"    "say \"hi\" \\ bye\0""#));
}

//! TOML Integration Tests
//!
//! TOML documents flatten to the same assignments as the equivalent YAML.

#![cfg(all(feature = "toml", feature = "yaml"))]

mod common;

use common::{TestFlags, pair, sorted, testdata};
use nestcfg::{ConfigParser, TomlFormat, Value};

fn toml_parser() -> ConfigParser<TomlFormat> {
    ConfigParser::builder().with_format::<TomlFormat>().build()
}

#[test]
fn test_toml_matches_yaml() {
    let from_toml = toml_parser()
        .collect(std::fs::File::open(testdata("nested.toml")).unwrap())
        .unwrap();
    let from_yaml = ConfigParser::new()
        .collect(std::fs::File::open(testdata("nested.yaml")).unwrap())
        .unwrap();

    assert_eq!(sorted(from_toml), sorted(from_yaml));
}

#[test]
fn test_toml_nested_into_flags() {
    let parser = ConfigParser::builder()
        .delimiter("-")
        .with_format::<TomlFormat>()
        .build();
    let mut flags = TestFlags::new()
        .string("hyphenated-key", "")
        .string("string-key", "")
        .float("float-nested-key", 0.0)
        .list("strings-nested-key");

    parser
        .parse_file(testdata("nested.toml"), |name: &str, value: &str| {
            flags.set(name, value)
        })
        .unwrap();

    assert_eq!(flags.get_str("hyphenated-key"), "valid");
    assert_eq!(flags.get_str("string-key"), "a string");
    assert_eq!(flags.get_float("float-nested-key"), 1.23);
    assert_eq!(flags.get_list("strings-nested-key"), ["one", "two", "three"]);
}

#[test]
fn test_toml_scalars() {
    let pairs = toml_parser()
        .collect("i = -5\nf = 3.14\nb = true\nbig = 1e6\n".as_bytes())
        .unwrap();

    assert_eq!(
        sorted(pairs),
        [
            pair("b", "true"),
            pair("big", "1e+06"),
            pair("f", "3.14"),
            pair("i", "-5"),
        ]
    );
}

#[test]
fn test_toml_datetime_is_unsupported() {
    let err = toml_parser()
        .collect("[release]\ndate = 1979-05-27\n".as_bytes())
        .unwrap_err();

    assert!(err.is_unsupported_type());
    assert_eq!(err.inner().name(), Some("release.date"));
    match err.into_inner() {
        nestcfg::Error::UnsupportedValue { source, .. } => {
            assert!(matches!(source.value(), Value::Other { kind: "datetime", .. }));
        }
        other => panic!("expected UnsupportedValue, got {other:?}"),
    }
}

#[test]
fn test_toml_empty_document() {
    let pairs = toml_parser().collect(std::io::empty()).unwrap();
    assert!(pairs.is_empty());
}

#[test]
fn test_toml_array_of_tables_is_unsupported() {
    let err = toml_parser()
        .collect("[[servers]]\nname = \"a\"\n".as_bytes())
        .unwrap_err();

    assert!(err.is_unsupported_type());
    assert_eq!(err.inner().name(), Some("servers"));
}

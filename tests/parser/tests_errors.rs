//! Syntax errors and their offsets.

use argtree::{Error, TextSize, parse, parse_one};
use rstest::rstest;

#[rstest]
#[case("a {b", 2)]
#[case("{a {b}", 0)]
#[case("x y {z {w}", 4)]
fn test_unterminated_group(#[case] source: &str, #[case] offset: u32) {
    let err = parse(source).unwrap_err();
    assert_eq!(
        err,
        Error::UnterminatedGroup {
            offset: TextSize::new(offset)
        }
    );
    assert!(err.is_syntax_error());
}

#[rstest]
#[case("`abc", 0)]
#[case("a.`b c", 2)]
#[case("a {b.`c}", 5)]
fn test_unterminated_quote(#[case] source: &str, #[case] offset: u32) {
    let err = parse(source).unwrap_err();
    assert_eq!(
        err,
        Error::UnterminatedQuote {
            offset: TextSize::new(offset)
        }
    );
}

#[rstest]
#[case("a#b", 1)]
#[case("x a!c", 3)]
#[case("  q {r s=t}", 8)]
fn test_missing_delimiter(#[case] source: &str, #[case] offset: u32) {
    let err = parse(source).unwrap_err();
    assert_eq!(err.offset(), Some(TextSize::new(offset)));
    assert!(matches!(err, Error::MissingDelimiter { .. }));
}

#[test]
fn test_error_messages() {
    let err = parse("a {b").unwrap_err();
    assert_eq!(err.to_string(), "group opened at offset 2 is never closed");
    let err = parse_one("a b").unwrap_err();
    assert!(err.to_string().contains("`a b`"));
}

#[test]
fn test_stray_close_bracket_is_leaf_text() {
    let err = parse("a}").unwrap_err();
    assert!(matches!(err, Error::MissingDelimiter { .. }));
}

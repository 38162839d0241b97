//! Parse and serialize back without loss.

#![allow(clippy::unwrap_used)]

use rstest::rstest;

use crate::helpers::source_fixtures::*;
use crate::helpers::tree_assertions::{arg_names, assert_round_trip, parse_ok};

#[rstest]
#[case(SINGLE_ARG, "single argument")]
#[case(UTILITY_CLASSES, "several delimiters")]
#[case(NESTED_GROUPS, "nested groups")]
#[case(DEEPLY_NESTED, "groups wrapping groups")]
#[case(QUOTED_PARTS, "quoted names and values")]
#[case("a..b", "empty value")]
#[case(".x", "empty name")]
#[case("{} a", "empty group")]
#[case("a.x`y z`", "quoted span inside a bare value")]
#[case("a.x`{`", "quoted open bracket inside a bare value")]
#[case("a.x`}`", "quoted close bracket inside a bare value")]
fn test_round_trip(#[case] source: &str, #[case] desc: &str) {
    assert_round_trip(source, desc);
}

#[rstest]
#[case("  a   b\t{c}  ", "a b {c}")]
#[case("{ a  b }", "{a b}")]
#[case("a.`b`", "a.b")]
#[case("`plain`", "plain")]
fn test_normalizing_round_trip(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(parse_ok(source).to_text(), expected);
}

#[test]
fn test_depth_first_order() {
    let node = parse_ok(NESTED_GROUPS);
    assert_eq!(arg_names(&node), vec!["a", "b", "d", "e", "g"]);
}

#[test]
fn test_parse_one_keeps_whole_text() {
    let node = argtree::parse_one("p-2.hover:md").unwrap();
    assert!(node.is_leaf());
    assert_eq!(node.to_text(), "p-2.hover:md");
}

#[test]
fn test_display_matches_to_text() {
    let node = parse_ok(UTILITY_CLASSES);
    assert_eq!(format!("{}", node), node.to_text());
    let arg = node.first_arg().unwrap();
    assert_eq!(arg.to_string(), "p-2.hover:md");
}

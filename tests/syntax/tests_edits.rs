//! Structural edits over parsed trees.

#![allow(clippy::unwrap_used)]

use argtree::{Arg, GrammarConfig, Item, Node, Pattern, concat, parse};
use regex::Regex;
use rstest::rstest;

use crate::helpers::tree_assertions::parse_ok;

#[rstest]
#[case("a b c", "b", "x {y}", "a x {y} c")]
#[case("a b c", "a", "", "b c")]
#[case("a b c", "c", "c d e", "a b c d e")]
fn test_replace_direct_child(
    #[case] source: &str,
    #[case] target: &str,
    #[case] with: &str,
    #[case] expected: &str,
) {
    let mut root = parse_ok(source);
    let id = root.args().find(|a| a.name() == target).unwrap().id();
    assert!(root.replace(id, [with]).unwrap());
    assert_eq!(root.to_text(), expected);
}

#[rstest]
#[case("a", vec!["b"], "a b")]
#[case("a", vec!["b c", "{d}"], "a b c {d}")]
#[case("", vec!["a"], "a")]
fn test_push(#[case] source: &str, #[case] items: Vec<&str>, #[case] expected: &str) {
    let mut root = parse_ok(source);
    root.push(items).unwrap();
    assert_eq!(root.to_text(), expected);
}

#[test]
fn test_unshift_keeps_item_order() {
    let mut root = parse_ok("c");
    let b = Arg::parse("b", GrammarConfig::default()).unwrap();
    root.unshift([Item::from("a"), Item::from(Node::leaf(b))])
        .unwrap();
    assert_eq!(root.to_text(), "a b c");
}

#[test]
fn test_rename_utility_classes() {
    let mut root = parse_ok("text-lg.hover {text-sm p-2}");
    let text = Regex::new(r"^text-(\w+)$").unwrap();
    root.apply_all(|arg| {
        arg.transform_name(&text, "font-$1");
    });
    assert_eq!(root.to_text(), "font-lg.hover {font-sm p-2}");
}

#[test]
fn test_variant_expansion() {
    let mut root = parse_ok("p-2.hv m-1.hv.fc");
    root.apply(|arg| arg.replace("hv", ["hover", "focus"], "."));
    assert_eq!(root.to_text(), "p-2.hover.focus m-1.hover.focus.fc");
}

#[test]
fn test_pop_and_move_parameter() {
    let mut root = parse_ok("a.x:md b:md");
    root.apply(|arg| {
        if let Some(media) = arg.pop(Pattern::from("md"), ":") {
            arg.add(media, "@");
        }
    });
    assert_eq!(root.to_text(), "a.x@md b@md");
}

#[test]
fn test_split_then_concat_restores_text() {
    let source = "{a b} c {d}";
    let (first, rest) = parse_ok(source).split().unwrap();
    let joined = concat([Node::group(vec![first], GrammarConfig::default()), rest]).unwrap();
    assert_eq!(joined.to_text(), source);
}

#[test]
fn test_clone_edits_are_independent() {
    let original = parse_ok("a.x {b}");
    let mut copy = original.clone();
    copy.apply_all(|arg| arg.add("y", ":"));
    assert_eq!(original.to_text(), "a.x {b}");
    assert_eq!(copy.to_text(), "a.x:y {b:y}");
}

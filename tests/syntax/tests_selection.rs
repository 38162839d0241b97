//! Removal and selection over parsed trees.

#![allow(clippy::unwrap_used)]

use argtree::{Arg, GrammarConfig, Selector};
use rstest::rstest;

use crate::helpers::tree_assertions::{arg_names, parse_ok};

fn pattern(text: &str) -> Arg {
    Arg::parse(text, GrammarConfig::default()).unwrap()
}

#[rstest]
#[case("a b a", "a", 2, "b")]
#[case("a {a b} {b a}", "a", 2, "{b} {b a}")]
#[case("a.x a", "a", 1, "a.x")]
fn test_remove_by_name(
    #[case] source: &str,
    #[case] name: &str,
    #[case] removed: usize,
    #[case] expected: &str,
) {
    let mut root = parse_ok(source);
    assert_eq!(root.remove([name]), removed);
    assert_eq!(root.to_text(), expected);
}

#[rstest]
#[case("a b a", "a", 2, "b")]
#[case("a {a {b a}}", "a", 3, "{{b}}")]
#[case("a.x a.x.x a.y", "a.x", 2, "a.y")]
fn test_remove_all(
    #[case] source: &str,
    #[case] selector: &str,
    #[case] removed: usize,
    #[case] expected: &str,
) {
    let mut root = parse_ok(source);
    assert_eq!(root.remove_all([pattern(selector)]), removed);
    assert_eq!(root.to_text(), expected);
}

#[test]
fn test_remove_runs_each_selector() {
    let mut root = parse_ok("a b c");
    assert_eq!(root.remove(["a", "c", "z"]), 2);
    assert_eq!(root.to_text(), "b");
}

#[rstest]
#[case("a.x b a.x.y {a}", "a.x", vec!["a", "a"])]
#[case("a.x b a.x.y {a}", "a", vec!["a", "a", "a"])]
#[case("p-2.hover m-1", "p-2.hover", vec!["p-2"])]
fn test_select_all_contains(
    #[case] source: &str,
    #[case] selector: &str,
    #[case] expected: Vec<&str>,
) {
    let mut root = parse_ok(source);
    let selection = root.select_all(pattern(selector));
    let names: Vec<_> = selection.args().map(Arg::name).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_selection_edits_reach_the_tree() {
    let mut root = parse_ok("a.x {b a:y} c");
    {
        let mut selection = root.select_all(Selector::predicate(|arg| arg.name() != "b"));
        assert_eq!(selection.len(), 3);
        selection.apply(|arg| arg.set_name("z"));
    }
    assert_eq!(arg_names(&root), vec!["z", "b", "z", "z"]);
    assert_eq!(root.to_text(), "z.x {b z:y} z");
}

#[test]
fn test_selection_to_node_is_a_copy() {
    let mut root = parse_ok("a.x b {a}");
    let copy = root.select_all("a").to_node();
    assert_eq!(copy.to_text(), "a.x a");
    assert!(copy.args().all(|arg| root.path_of(arg.id()).is_none()));
}

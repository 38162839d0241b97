//! Assertion helpers over parsed trees.

use argtree::{Node, parse};

/// Parse `source`, panicking with the error on failure.
pub fn parse_ok(source: &str) -> Node {
    match parse(source) {
        Ok(node) => node,
        Err(err) => panic!("Parse of '{}' failed: {}", source, err),
    }
}

/// Assert that `source` serializes back to itself.
pub fn assert_round_trip(source: &str, desc: &str) {
    let node = parse_ok(source);
    assert_eq!(node.to_text(), source, "Round trip of {} '{}'", desc, source);
}

/// Names of every argument, depth-first.
pub fn arg_names(node: &Node) -> Vec<String> {
    node.args().map(|arg| arg.name().to_string()).collect()
}

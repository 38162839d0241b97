//! Custom grammars: markers, quotes and delimiter priority.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use argtree::{Error, GrammarConfig, parse_with};
use rstest::rstest;

fn custom() -> Arc<GrammarConfig> {
    Arc::new(
        GrammarConfig::default()
            .with_brackets("[", "]")
            .with_quotes("<", ">")
            .with_delimiters(["/", "="]),
    )
}

#[rstest]
#[case("a/b [c=d e]")]
#[case("<x y>/<1/2> [[z]]")]
#[case("/=")]
fn test_custom_grammar_round_trip(#[case] source: &str) {
    let node = parse_with(source, custom()).unwrap();
    assert_eq!(node.to_text(), source);
}

#[test]
fn test_default_markers_are_plain_text_under_custom_grammar() {
    let node = parse_with("a/{b}", custom()).unwrap();
    let arg = node.first_arg().unwrap();
    assert_eq!(arg.all("/"), vec!["{b}"]);
    assert!(matches!(
        parse_with("a.b", custom()),
        Err(Error::MissingDelimiter { .. })
    ));
}

#[test]
fn test_nodes_share_one_grammar() {
    let config = custom();
    let node = parse_with("a [b]", Arc::clone(&config)).unwrap();
    assert!(node.args().all(|arg| Arc::ptr_eq(arg.config(), &config)));
    assert!(Arc::ptr_eq(node.children().unwrap()[1].config(), &config));
}

#[rstest]
#[case(GrammarConfig::default().with_brackets("", "}"))]
#[case(GrammarConfig::default().with_quotes("`", ""))]
#[case(GrammarConfig::default().with_delimiters(["."; 0]))]
#[case(GrammarConfig::default().with_delimiters([".", ""]))]
fn test_invalid_grammar_rejected(#[case] config: GrammarConfig) {
    assert!(config.validate().is_err());
    assert!(matches!(
        parse_with("a", config),
        Err(Error::InvalidConfig(_))
    ));
}

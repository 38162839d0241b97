//! Tree construction from text.

use std::sync::Arc;

use text_size::TextSize;
use tracing::debug;

use super::arg_lexer::{tokenize_arg, tokenize_arg_at};
use super::lexer::{TokenKind, tokenize_at};
use crate::base::{GrammarConfig, Result};
use crate::syntax::Node;

/// Parse `text` with the default grammar. The result is always a group.
pub fn parse(text: &str) -> Result<Node> {
    parse_with(text, GrammarConfig::default())
}

/// Parse `text` with the given grammar. The result is always a group.
pub fn parse_with(text: &str, config: impl Into<Arc<GrammarConfig>>) -> Result<Node> {
    let config = config.into();
    debug!(len = text.len(), "parsing argument tree");
    build_group(text, &config)
}

/// Parse `text` as a single leaf with the default grammar.
///
/// Brackets and whitespace are not interpreted at the top level.
pub fn parse_one(text: &str) -> Result<Node> {
    parse_one_with(text, GrammarConfig::default())
}

/// Parse `text` as a single leaf with the given grammar.
pub fn parse_one_with(text: &str, config: impl Into<Arc<GrammarConfig>>) -> Result<Node> {
    Ok(Node::leaf(tokenize_arg(text, &config.into())?))
}

/// Parse `text` into a group sharing `config`.
pub(crate) fn build_group(text: &str, config: &Arc<GrammarConfig>) -> Result<Node> {
    config.validate()?;
    build_group_at(text, config, TextSize::new(0))
}

fn build_group_at(text: &str, config: &Arc<GrammarConfig>, base: TextSize) -> Result<Node> {
    let children = tokenize_at(text, config, base)?
        .into_iter()
        .map(|token| match token.kind {
            TokenKind::Leaf => {
                tokenize_arg_at(token.text, config, token.range.start()).map(Node::leaf)
            }
            TokenKind::Group => build_group_at(token.text, config, token.range.start()),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Node::group(children, Arc::clone(config)))
}

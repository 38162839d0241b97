//! Matchers and rewrite targets used by [`Arg`] and [`Node`](super::Node) edits.

use std::fmt;

use regex::Regex;

use super::arg::Arg;

/// Matches a name or a parameter value.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Whole-string equality.
    Literal(String),
    /// Regular expression search.
    Regex(Regex),
}

impl Pattern {
    pub fn is_match(&self, value: &str) -> bool {
        match self {
            Self::Literal(literal) => value == literal.as_str(),
            Self::Regex(regex) => regex.is_match(value),
        }
    }

    /// Replace the first match in `value` with `to`.
    ///
    /// For a regex, `to` may refer to capture groups (`$1`, `${name}`).
    pub(crate) fn substitute(&self, value: &str, to: &str) -> String {
        match self {
            Self::Literal(literal) => value.replacen(literal.as_str(), to, 1),
            Self::Regex(regex) => regex.replacen(value, 1, to).into_owned(),
        }
    }
}

impl From<&str> for Pattern {
    fn from(literal: &str) -> Self {
        Self::Literal(literal.to_string())
    }
}

impl From<String> for Pattern {
    fn from(literal: String) -> Self {
        Self::Literal(literal)
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self::Regex(regex)
    }
}

impl From<&Regex> for Pattern {
    fn from(regex: &Regex) -> Self {
        Self::Regex(regex.clone())
    }
}

/// What a matching parameter is rewritten to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// Substituted for the first match inside the value.
    One(String),
    /// Each element becomes its own parameter, in order, on the same delimiter.
    Many(Vec<String>),
}

impl From<&str> for Replacement {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for Replacement {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for Replacement {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<&str>> for Replacement {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Replacement {
    fn from(values: [&str; N]) -> Self {
        Self::Many(values.into_iter().map(str::to_string).collect())
    }
}

/// Target of [`Arg::replace`]: fixed, or computed from each matched value.
pub enum Replacer<'a> {
    Fixed(Replacement),
    With(Box<dyn FnMut(&str) -> Replacement + 'a>),
}

impl<'a> Replacer<'a> {
    /// Compute the replacement from the matched value.
    pub fn with(f: impl FnMut(&str) -> Replacement + 'a) -> Self {
        Self::With(Box::new(f))
    }

    pub(crate) fn resolve(&mut self, value: &str) -> Replacement {
        match self {
            Self::Fixed(replacement) => replacement.clone(),
            Self::With(f) => f(value),
        }
    }
}

impl fmt::Debug for Replacer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(replacement) => f.debug_tuple("Fixed").field(replacement).finish(),
            Self::With(_) => f.write_str("With(..)"),
        }
    }
}

impl From<Replacement> for Replacer<'_> {
    fn from(replacement: Replacement) -> Self {
        Self::Fixed(replacement)
    }
}

impl From<&str> for Replacer<'_> {
    fn from(value: &str) -> Self {
        Self::Fixed(value.into())
    }
}

impl From<String> for Replacer<'_> {
    fn from(value: String) -> Self {
        Self::Fixed(value.into())
    }
}

impl From<Vec<String>> for Replacer<'_> {
    fn from(values: Vec<String>) -> Self {
        Self::Fixed(values.into())
    }
}

impl From<Vec<&str>> for Replacer<'_> {
    fn from(values: Vec<&str>) -> Self {
        Self::Fixed(values.into())
    }
}

impl<const N: usize> From<[&str; N]> for Replacer<'_> {
    fn from(values: [&str; N]) -> Self {
        Self::Fixed(values.into())
    }
}

/// Target of [`Arg::transform_name`].
pub enum NameReplacer<'a> {
    Text(String),
    With(Box<dyn Fn(&str) -> String + 'a>),
}

impl<'a> NameReplacer<'a> {
    /// Compute the replacement from the current name.
    pub fn with(f: impl Fn(&str) -> String + 'a) -> Self {
        Self::With(Box::new(f))
    }

    pub(crate) fn resolve(&self, name: &str) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::With(f) => f(name),
        }
    }
}

impl fmt::Debug for NameReplacer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::With(_) => f.write_str("With(..)"),
        }
    }
}

impl From<&str> for NameReplacer<'_> {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for NameReplacer<'_> {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Chooses leaves for removal and selection.
pub enum Selector<'a> {
    /// A bare name: equal to a same-named argument without parameters.
    Name(String),
    /// A full argument pattern, compared leniently.
    Arg(Arg),
    /// An arbitrary test over the argument.
    Predicate(Box<dyn Fn(&Arg) -> bool + 'a>),
}

impl<'a> Selector<'a> {
    pub fn predicate(f: impl Fn(&Arg) -> bool + 'a) -> Self {
        Self::Predicate(Box::new(f))
    }

    /// Matching used by removal: lenient equality.
    pub(crate) fn selects_equal(&self, arg: &Arg) -> bool {
        match self {
            Self::Name(name) => arg.name() == name.as_str() && arg.parameters().is_empty(),
            Self::Arg(pattern) => arg.equals(pattern),
            Self::Predicate(f) => f(arg),
        }
    }

    /// Matching used by selection: containment.
    pub(crate) fn selects_contained(&self, arg: &Arg) -> bool {
        match self {
            Self::Name(name) => arg.name() == name.as_str(),
            Self::Arg(pattern) => arg.contains(pattern),
            Self::Predicate(f) => f(arg),
        }
    }
}

impl fmt::Debug for Selector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.debug_tuple("Name").field(name).finish(),
            Self::Arg(arg) => f.debug_tuple("Arg").field(&arg.to_text()).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<&str> for Selector<'_> {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Selector<'_> {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Arg> for Selector<'_> {
    fn from(arg: Arg) -> Self {
        Self::Arg(arg)
    }
}

//! Structured representation of one argument token.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

use super::pattern::{NameReplacer, Pattern, Replacement, Replacer};
use crate::base::{Error, GrammarConfig, Result};
use crate::parser::{is_plain_name, tokenize_arg};

static NEXT_ARG_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of an [`Arg`] instance.
///
/// Every constructed or cloned `Arg` receives a fresh id, so two args with
/// equal content still have distinct ids. Tree edits that target "this
/// argument" locate it by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArgId(u64);

impl ArgId {
    fn next() -> Self {
        Self(NEXT_ARG_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A delimiter-tagged parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub delimiter: SmolStr,
    pub value: String,
}

impl Parameter {
    pub fn new(delimiter: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            value: value.into(),
        }
    }
}

/// One argument token: a name and an ordered list of parameters.
///
/// ```text
/// text-lg.hover:md
/// ^^^^^^^ name
///        ^^^^^^ (".", "hover")
///              ^^^ (":", "md")
/// ```
#[derive(Debug)]
pub struct Arg {
    id: ArgId,
    name: String,
    parameters: Vec<Parameter>,
    config: Arc<GrammarConfig>,
}

impl Clone for Arg {
    fn clone(&self) -> Self {
        Self {
            id: ArgId::next(),
            name: self.name.clone(),
            parameters: self.parameters.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl Arg {
    /// Create an argument without parameters.
    pub fn new(name: impl Into<String>, config: impl Into<Arc<GrammarConfig>>) -> Self {
        Self::with_parameters(name, Vec::new(), config)
    }

    pub fn with_parameters(
        name: impl Into<String>,
        parameters: impl IntoIterator<Item = Parameter>,
        config: impl Into<Arc<GrammarConfig>>,
    ) -> Self {
        Self {
            id: ArgId::next(),
            name: name.into(),
            parameters: parameters.into_iter().collect(),
            config: config.into(),
        }
    }

    /// Tokenize the text of a single argument.
    pub fn parse(text: &str, config: impl Into<Arc<GrammarConfig>>) -> Result<Self> {
        tokenize_arg(text, &config.into())
    }

    pub fn id(&self) -> ArgId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut Vec<Parameter> {
        &mut self.parameters
    }

    pub fn config(&self) -> &Arc<GrammarConfig> {
        &self.config
    }

    /// Replace name and parameters with those tokenized from `text`.
    ///
    /// The argument keeps its identity.
    pub fn rewrite(&mut self, text: &str) -> Result<()> {
        let parsed = tokenize_arg(text, &self.config)?;
        self.name = parsed.name;
        self.parameters = parsed.parameters;
        Ok(())
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    pub fn add(&mut self, value: impl Into<String>, delimiter: &str) {
        debug_assert!(self.config.is_delimiter(delimiter), "unknown delimiter `{delimiter}`");
        self.parameters.push(Parameter::new(delimiter, value));
    }

    /// Append unless the exact `(delimiter, value)` pair is already present.
    ///
    /// Returns whether the parameter was added.
    pub fn add_if_not_exists(&mut self, value: impl Into<String>, delimiter: &str) -> bool {
        let value = value.into();
        let exists = self
            .parameters
            .iter()
            .any(|p| p.delimiter == delimiter && p.value == value);
        if !exists {
            self.add(value, delimiter);
        }
        !exists
    }

    /// Set the name only if it is currently empty.
    pub fn set_name_if_not_exists(&mut self, name: impl Into<String>) -> bool {
        if !self.name.is_empty() {
            return false;
        }
        self.name = name.into();
        true
    }

    /// Rewrite the name if `pattern` matches it.
    ///
    /// The replacement is substituted for the first match, so a literal
    /// pattern replaces the whole name.
    pub fn transform_name<'r>(
        &mut self,
        pattern: impl Into<Pattern>,
        to: impl Into<NameReplacer<'r>>,
    ) -> bool {
        let pattern = pattern.into();
        if !pattern.is_match(&self.name) {
            return false;
        }
        let to = to.into().resolve(&self.name);
        self.name = pattern.substitute(&self.name, &to);
        true
    }

    /// Apply the first rule whose pattern matches the name; later rules are
    /// not evaluated.
    pub fn transform_name_rules<'r>(
        &mut self,
        rules: impl IntoIterator<Item = (Pattern, NameReplacer<'r>)>,
    ) -> bool {
        for (pattern, to) in rules {
            if self.transform_name(pattern, to) {
                return true;
            }
        }
        false
    }

    /// Remove and return the first value on `delimiter` matching `pattern`.
    pub fn pop(&mut self, pattern: impl Into<Pattern>, delimiter: &str) -> Option<String> {
        let pattern = pattern.into();
        let index = self
            .parameters
            .iter()
            .position(|p| p.delimiter == delimiter && pattern.is_match(&p.value))?;
        Some(self.parameters.remove(index).value)
    }

    /// Pop, and hand the popped value to `f`.
    pub fn pop_apply(
        &mut self,
        pattern: impl Into<Pattern>,
        delimiter: &str,
        f: impl FnOnce(String),
    ) {
        if let Some(value) = self.pop(pattern, delimiter) {
            f(value);
        }
    }

    /// Remove and return every value on `delimiter` matching `pattern`.
    pub fn pop_many(&mut self, pattern: impl Into<Pattern>, delimiter: &str) -> Vec<String> {
        let pattern = pattern.into();
        let (popped, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.parameters)
            .into_iter()
            .partition(|p| p.delimiter == delimiter && pattern.is_match(&p.value));
        self.parameters = kept;
        popped.into_iter().map(|p| p.value).collect()
    }

    /// Rewrite every value on `delimiter` matching `pattern`.
    ///
    /// A single replacement is substituted for the first match inside the
    /// value. A list replacement expands the parameter into one parameter per
    /// element at the same position.
    pub fn replace<'r>(
        &mut self,
        pattern: impl Into<Pattern>,
        to: impl Into<Replacer<'r>>,
        delimiter: &str,
    ) {
        let pattern = pattern.into();
        let mut to = to.into();
        let mut rewritten = Vec::with_capacity(self.parameters.len());

        for parameter in std::mem::take(&mut self.parameters) {
            if parameter.delimiter != delimiter || !pattern.is_match(&parameter.value) {
                rewritten.push(parameter);
                continue;
            }
            match to.resolve(&parameter.value) {
                Replacement::One(target) => {
                    let value = pattern.substitute(&parameter.value, &target);
                    rewritten.push(Parameter {
                        delimiter: parameter.delimiter,
                        value,
                    });
                }
                Replacement::Many(values) => rewritten.extend(
                    values
                        .into_iter()
                        .map(|value| Parameter::new(parameter.delimiter.clone(), value)),
                ),
            }
        }

        self.parameters = rewritten;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Values tagged with `delimiter`, in order.
    pub fn values<'a, 'd>(
        &'a self,
        delimiter: &'d str,
    ) -> impl Iterator<Item = &'a str> + use<'a, 'd> {
        self.parameters
            .iter()
            .filter(move |p| p.delimiter == delimiter)
            .map(|p| p.value.as_str())
    }

    /// All values tagged with `delimiter`, duplicates included.
    pub fn all(&self, delimiter: &str) -> Vec<&str> {
        self.values(delimiter).collect()
    }

    /// The single value tagged with `delimiter`, if any.
    pub fn one(&self, delimiter: &str) -> Result<Option<&str>> {
        let mut values = self.values(delimiter);
        let first = values.next();
        if values.next().is_some() {
            return Err(Error::MultipleValues {
                arg: self.to_text(),
                delimiter: delimiter.to_string(),
            });
        }
        Ok(first)
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// Values grouped by delimiter, duplicates collapsed.
    fn value_sets(&self) -> FxHashMap<&str, FxHashSet<&str>> {
        let mut sets: FxHashMap<&str, FxHashSet<&str>> = FxHashMap::default();
        for p in &self.parameters {
            sets.entry(p.delimiter.as_str()).or_default().insert(p.value.as_str());
        }
        sets
    }

    /// Lenient equality: same name, and per delimiter the same set of values.
    ///
    /// Order and duplicate counts are ignored, so `a.x` equals `a.x.x`.
    pub fn equals(&self, other: &Arg) -> bool {
        self.name == other.name && self.value_sets() == other.value_sets()
    }

    /// Strict equality: same name and identical parameters in the same order.
    pub fn equals_strict(&self, other: &Arg) -> bool {
        self.name == other.name && self.parameters == other.parameters
    }

    /// Lenient equality against text tokenized with this argument's grammar.
    pub fn equals_text(&self, text: &str) -> Result<bool> {
        Ok(self.equals(&tokenize_arg(text, &self.config)?))
    }

    /// Same name, and per delimiter every value of `other` is present here.
    pub fn contains(&self, other: &Arg) -> bool {
        if self.name != other.name {
            return false;
        }
        let mine = self.value_sets();
        other.value_sets().iter().all(|(delimiter, values)| {
            mine.get(delimiter)
                .is_some_and(|present| values.is_subset(present))
        })
    }

    /// Containment against text tokenized with this argument's grammar.
    pub fn contains_text(&self, text: &str) -> Result<bool> {
        Ok(self.contains(&tokenize_arg(text, &self.config)?))
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    /// Serialize back to grammar-valid text.
    pub fn to_text(&self) -> String {
        let config = &self.config;
        let mut text = String::new();
        if is_plain_name(&self.name) {
            text.push_str(&self.name);
        } else {
            push_quoted(&mut text, config, &self.name);
        }
        for p in &self.parameters {
            text.push_str(&p.delimiter);
            if needs_quotes(config, &p.value) {
                push_quoted(&mut text, config, &p.value);
            } else {
                text.push_str(&p.value);
            }
        }
        text
    }
}

/// Whether a value would be split or misread if written bare.
///
/// A value holding the close marker came from bare text and is written back
/// as it was; quoting it would end the quoted span early.
fn needs_quotes(config: &GrammarConfig, value: &str) -> bool {
    if value.contains(config.quote_close.as_str()) {
        return false;
    }
    config.contains_delimiter(value)
        || value.contains([' ', '\t'])
        || value.starts_with(config.quote_open.as_str())
        || value.contains(config.bracket_open.as_str())
        || value.contains(config.bracket_close.as_str())
}

fn push_quoted(text: &mut String, config: &GrammarConfig, value: &str) {
    text.push_str(&config.quote_open);
    text.push_str(value);
    text.push_str(&config.quote_close);
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

//! Borrowed view over selected leaves of a tree.

use std::sync::Arc;

use super::arg::{Arg, ArgId};
use super::node::Node;
use crate::base::GrammarConfig;

/// Leaves selected by [`Node::select_all`], in traversal order.
///
/// The leaves belong to the source tree. Edits made through the selection
/// are visible in that tree, and the tree cannot be used while the
/// selection is alive.
#[derive(Debug)]
pub struct Selection<'a> {
    leaves: Vec<&'a mut Node>,
    config: Arc<GrammarConfig>,
}

impl<'a> Selection<'a> {
    pub(crate) fn new(leaves: Vec<&'a mut Node>, config: Arc<GrammarConfig>) -> Self {
        Self { leaves, config }
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.leaves.get(index).map(|leaf| &**leaf)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.leaves.iter().map(|leaf| &**leaf)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.leaves.iter_mut().map(|leaf| &mut **leaf)
    }

    pub fn args(&self) -> impl Iterator<Item = &Arg> {
        self.iter().filter_map(Node::as_arg)
    }

    pub fn ids(&self) -> Vec<ArgId> {
        self.args().map(Arg::id).collect()
    }

    /// Run `f` on every selected argument.
    pub fn apply(&mut self, mut f: impl FnMut(&mut Arg)) -> &mut Self {
        for leaf in &mut self.leaves {
            if let Some(arg) = leaf.as_arg_mut() {
                f(arg);
            }
        }
        self
    }

    /// Copy the selected leaves into an independent group.
    pub fn to_node(&self) -> Node {
        Node::group(self.iter().cloned().collect(), Arc::clone(&self.config))
    }

    /// Serialize the selected leaves as one group.
    pub fn to_text(&self) -> String {
        self.iter()
            .map(Node::to_text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

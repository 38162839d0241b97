//! Argument tree and its structural-edit algebra
//!
//! A [`Node`] is either a leaf wrapping one [`Arg`] or a group holding an
//! ordered list of children. Groups own their children exclusively.
//!
//! There is no stored parent pointer: the leaf owning an argument is found
//! by walking from a root ([`Node::path_of`], [`Node::parent_of`]), so the
//! link is always consistent with the current tree shape.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::arg::{Arg, ArgId};
use super::pattern::Selector;
use super::selection::Selection;
use crate::base::{Error, GrammarConfig, NodeVariant, Result};
use crate::parser::build_group;

/// The two shapes of a [`Node`].
#[derive(Debug, Clone)]
pub enum NodeKind {
    Leaf(Arg),
    Group(Vec<Node>),
}

/// A node of an argument tree.
///
/// Cloning is deep: every argument in the copy gets a fresh [`ArgId`].
#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    config: Arc<GrammarConfig>,
}

/// Input accepted by tree edits: text to parse, or a ready node.
#[derive(Debug, Clone)]
pub enum Item {
    Text(String),
    Node(Node),
}

impl From<&str> for Item {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Item {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Node> for Item {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Arg> for Item {
    fn from(arg: Arg) -> Self {
        Self::Node(Node::leaf(arg))
    }
}

/// Child indices leading from a root to a descendant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Path of the owning group, `None` for the root.
    pub fn parent(&self) -> Option<NodePath> {
        let (_, parent) = self.0.split_last()?;
        Some(NodePath(parent.to_vec()))
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl Node {
    // =========================================================================
    // Construction and access
    // =========================================================================

    /// Wrap an argument. The leaf uses the argument's grammar.
    pub fn leaf(arg: Arg) -> Self {
        let config = Arc::clone(arg.config());
        Self {
            kind: NodeKind::Leaf(arg),
            config,
        }
    }

    pub fn group(children: Vec<Node>, config: impl Into<Arc<GrammarConfig>>) -> Self {
        Self {
            kind: NodeKind::Group(children),
            config: config.into(),
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut NodeKind {
        &mut self.kind
    }

    pub fn into_kind(self) -> NodeKind {
        self.kind
    }

    pub fn config(&self) -> &Arc<GrammarConfig> {
        &self.config
    }

    pub fn variant(&self) -> NodeVariant {
        match self.kind {
            NodeKind::Leaf(_) => NodeVariant::Leaf,
            NodeKind::Group(_) => NodeVariant::Group,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, NodeKind::Group(_))
    }

    pub fn as_arg(&self) -> Option<&Arg> {
        match &self.kind {
            NodeKind::Leaf(arg) => Some(arg),
            NodeKind::Group(_) => None,
        }
    }

    pub fn as_arg_mut(&mut self) -> Option<&mut Arg> {
        match &mut self.kind {
            NodeKind::Leaf(arg) => Some(arg),
            NodeKind::Group(_) => None,
        }
    }

    pub fn as_children(&self) -> Option<&[Node]> {
        match &self.kind {
            NodeKind::Leaf(_) => None,
            NodeKind::Group(children) => Some(children),
        }
    }

    pub fn as_children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match &mut self.kind {
            NodeKind::Leaf(_) => None,
            NodeKind::Group(children) => Some(children),
        }
    }

    /// The wrapped argument; fails on a group.
    pub fn arg(&self) -> Result<&Arg> {
        let found = self.variant();
        self.as_arg()
            .ok_or_else(|| Error::wrong_variant(NodeVariant::Leaf, found))
    }

    pub fn arg_mut(&mut self) -> Result<&mut Arg> {
        let found = self.variant();
        self.as_arg_mut()
            .ok_or_else(|| Error::wrong_variant(NodeVariant::Leaf, found))
    }

    /// The children; fails on a leaf.
    pub fn children(&self) -> Result<&[Node]> {
        let found = self.variant();
        self.as_children()
            .ok_or_else(|| Error::wrong_variant(NodeVariant::Group, found))
    }

    pub fn children_mut(&mut self) -> Result<&mut Vec<Node>> {
        let found = self.variant();
        self.as_children_mut()
            .ok_or_else(|| Error::wrong_variant(NodeVariant::Group, found))
    }

    /// The argument at the end of the first-child chain.
    pub fn first_arg(&self) -> Option<&Arg> {
        let mut node = self;
        loop {
            match &node.kind {
                NodeKind::Leaf(arg) => return Some(arg),
                NodeKind::Group(children) => node = children.first()?,
            }
        }
    }

    pub fn first_arg_mut(&mut self) -> Option<&mut Arg> {
        let mut node = self;
        loop {
            match &mut node.kind {
                NodeKind::Leaf(arg) => return Some(arg),
                NodeKind::Group(children) => node = children.first_mut()?,
            }
        }
    }

    /// Name of the leftmost leaf.
    pub fn name(&self) -> Option<&str> {
        self.first_arg().map(Arg::name)
    }

    /// Every leaf, depth-first, left to right.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }

    pub fn args(&self) -> impl Iterator<Item = &Arg> {
        self.leaves().filter_map(Node::as_arg)
    }

    // =========================================================================
    // Locating arguments
    // =========================================================================

    /// Path from this node to the leaf wrapping the argument `id`.
    pub fn path_of(&self, id: ArgId) -> Option<NodePath> {
        let mut indices = Vec::new();
        self.find_path(id, &mut indices).then(|| NodePath(indices))
    }

    fn find_path(&self, id: ArgId, indices: &mut Vec<usize>) -> bool {
        match &self.kind {
            NodeKind::Leaf(arg) => arg.id() == id,
            NodeKind::Group(children) => {
                for (index, child) in children.iter().enumerate() {
                    indices.push(index);
                    if child.find_path(id, indices) {
                        return true;
                    }
                    indices.pop();
                }
                false
            }
        }
    }

    pub fn get(&self, path: &NodePath) -> Option<&Node> {
        let mut node = self;
        for &index in path.indices() {
            node = node.as_children()?.get(index)?;
        }
        Some(node)
    }

    pub fn get_mut(&mut self, path: &NodePath) -> Option<&mut Node> {
        let mut node = self;
        for &index in path.indices() {
            node = node.as_children_mut()?.get_mut(index)?;
        }
        Some(node)
    }

    /// The leaf wrapping the argument `id`.
    pub fn find(&self, id: ArgId) -> Option<&Node> {
        self.get(&self.path_of(id)?)
    }

    pub fn find_mut(&mut self, id: ArgId) -> Option<&mut Node> {
        let path = self.path_of(id)?;
        self.get_mut(&path)
    }

    /// The group directly owning the leaf of argument `id`.
    pub fn parent_of(&self, id: ArgId) -> Option<&Node> {
        self.get(&self.path_of(id)?.parent()?)
    }

    // =========================================================================
    // Apply
    // =========================================================================

    /// Run `f` once per direct child, on that child's leftmost argument.
    /// On a leaf, run it on the leaf's argument.
    pub fn apply(&mut self, mut f: impl FnMut(&mut Arg)) -> &mut Self {
        match &mut self.kind {
            NodeKind::Leaf(arg) => f(arg),
            NodeKind::Group(children) => {
                for child in children.iter_mut() {
                    if let Some(arg) = child.first_arg_mut() {
                        f(arg);
                    }
                }
            }
        }
        self
    }

    /// Run `f` on every argument in the subtree, depth-first, left to right.
    pub fn apply_all(&mut self, mut f: impl FnMut(&mut Arg)) -> &mut Self {
        self.visit_args(&mut f);
        self
    }

    fn visit_args(&mut self, f: &mut dyn FnMut(&mut Arg)) {
        match &mut self.kind {
            NodeKind::Leaf(arg) => f(arg),
            NodeKind::Group(children) => {
                for child in children.iter_mut() {
                    child.visit_args(f);
                }
            }
        }
    }

    /// Run `f` on the leftmost argument only.
    pub fn apply_first(&mut self, f: impl FnOnce(&mut Arg)) -> &mut Self {
        if let Some(arg) = self.first_arg_mut() {
            f(arg);
        }
        self
    }

    /// Like [`apply`](Self::apply), skipping the first direct child.
    pub fn apply_rest(&mut self, mut f: impl FnMut(&mut Arg)) -> &mut Self {
        if let NodeKind::Group(children) = &mut self.kind {
            for child in children.iter_mut().skip(1) {
                if let Some(arg) = child.first_arg_mut() {
                    f(arg);
                }
            }
        }
        self
    }

    // =========================================================================
    // Splicing
    // =========================================================================

    /// Parse text items with this node's grammar and flatten them into nodes.
    fn expand_items<I, T>(&self, items: I) -> Result<Vec<Node>>
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        let mut nodes = Vec::new();
        for item in items {
            match item.into() {
                Item::Text(text) => nodes.extend(build_group(&text, &self.config)?.into_children()),
                Item::Node(node) => nodes.push(node),
            }
        }
        Ok(nodes)
    }

    fn into_children(self) -> Vec<Node> {
        match self.kind {
            NodeKind::Leaf(_) => vec![self],
            NodeKind::Group(children) => children,
        }
    }

    /// Replace the direct child wrapping argument `target` with `items`.
    ///
    /// Text items are parsed and their top-level nodes spliced in; node items
    /// are inserted as they are. Returns `false`, leaving the tree unchanged,
    /// when no direct child wraps `target`.
    pub fn replace<I, T>(&mut self, target: ArgId, items: I) -> Result<bool>
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        let nodes = self.expand_items(items)?;
        let Some(children) = self.as_children_mut() else {
            debug!(?target, "replace on a leaf");
            return Ok(false);
        };
        let Some(index) = children
            .iter()
            .position(|child| child.as_arg().is_some_and(|arg| arg.id() == target))
        else {
            debug!(?target, "replace target is not a direct child");
            return Ok(false);
        };
        children.splice(index..=index, nodes);
        Ok(true)
    }

    /// Append items to the children.
    pub fn push<I, T>(&mut self, items: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        let nodes = self.expand_items(items)?;
        self.children_mut()?.extend(nodes);
        Ok(self)
    }

    /// Prepend items to the children, keeping their given order.
    pub fn unshift<I, T>(&mut self, items: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        let nodes = self.expand_items(items)?;
        self.children_mut()?.splice(0..0, nodes);
        Ok(self)
    }

    // =========================================================================
    // Removal and selection
    // =========================================================================

    /// Remove, per direct child, the leftmost leaf if a selector equals it.
    ///
    /// Selectors run one after another. Returns the number of removed leaves.
    pub fn remove<'s, I, S>(&mut self, selectors: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<Selector<'s>>,
    {
        selectors
            .into_iter()
            .map(|selector| self.remove_first_leaves(&selector.into()))
            .sum()
    }

    fn remove_first_leaves(&mut self, selector: &Selector<'_>) -> usize {
        let NodeKind::Group(children) = &mut self.kind else {
            return 0;
        };
        let mut removed = 0;
        let mut index = 0;
        while index < children.len() {
            let hit = match &children[index].kind {
                NodeKind::Leaf(arg) => Some(selector.selects_equal(arg)),
                NodeKind::Group(_) => None,
            };
            match hit {
                Some(true) => {
                    children.remove(index);
                    removed += 1;
                }
                Some(false) => index += 1,
                None => {
                    removed += usize::from(children[index].remove_leftmost_leaf(selector));
                    index += 1;
                }
            }
        }
        removed
    }

    /// Remove the leftmost leaf from its owning group if the selector equals it.
    fn remove_leftmost_leaf(&mut self, selector: &Selector<'_>) -> bool {
        let NodeKind::Group(children) = &mut self.kind else {
            return false;
        };
        let Some(first) = children.first() else {
            return false;
        };
        if first.is_group() {
            return children[0].remove_leftmost_leaf(selector);
        }
        let hit = first.as_arg().is_some_and(|arg| selector.selects_equal(arg));
        if hit {
            children.remove(0);
        }
        hit
    }

    /// Remove every leaf in the subtree that a selector equals.
    ///
    /// Returns the number of removed leaves. Emptied groups are kept.
    pub fn remove_all<'s, I, S>(&mut self, selectors: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<Selector<'s>>,
    {
        selectors
            .into_iter()
            .map(|selector| self.remove_matching_leaves(&selector.into()))
            .sum()
    }

    fn remove_matching_leaves(&mut self, selector: &Selector<'_>) -> usize {
        let NodeKind::Group(children) = &mut self.kind else {
            return 0;
        };
        let mut removed = 0;
        children.retain_mut(|child| match child.kind {
            NodeKind::Leaf(ref arg) => {
                let hit = selector.selects_equal(arg);
                removed += usize::from(hit);
                !hit
            }
            NodeKind::Group(_) => {
                removed += child.remove_matching_leaves(selector);
                true
            }
        });
        removed
    }

    /// Borrow every leaf whose argument contains `selector`, in traversal order.
    ///
    /// The returned view aliases this tree: editing a selected argument edits
    /// the tree. Use [`Selection::to_node`] for an independent copy.
    pub fn select_all<'s>(&mut self, selector: impl Into<Selector<'s>>) -> Selection<'_> {
        let selector = selector.into();
        let config = Arc::clone(&self.config);
        let mut leaves = Vec::new();
        collect_leaves(self, &selector, &mut leaves);
        Selection::new(leaves, config)
    }

    // =========================================================================
    // Split and serialization
    // =========================================================================

    /// Split a group into its first child and a group of the remaining ones.
    ///
    /// Consumes the group, so neither half shares anything with it.
    pub fn split(self) -> Result<(Node, Node)> {
        let NodeKind::Group(children) = self.kind else {
            debug!("split on a leaf");
            return Err(Error::wrong_variant(NodeVariant::Group, NodeVariant::Leaf));
        };
        let mut children = children.into_iter();
        let Some(first) = children.next() else {
            debug!("split on an empty group");
            return Err(Error::EmptyGroup);
        };
        Ok((first, Node::group(children.collect(), self.config)))
    }

    /// Serialize back to text.
    ///
    /// Children are joined by one space and nested groups are wrapped in the
    /// bracket markers; the node itself is never wrapped.
    pub fn to_text(&self) -> String {
        match &self.kind {
            NodeKind::Leaf(arg) => arg.to_text(),
            NodeKind::Group(children) => children
                .iter()
                .map(|child| match child.kind {
                    NodeKind::Leaf(_) => child.to_text(),
                    NodeKind::Group(_) => format!(
                        "{}{}{}",
                        self.config.bracket_open,
                        child.to_text(),
                        self.config.bracket_close
                    ),
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

fn collect_leaves<'a>(node: &'a mut Node, selector: &Selector<'_>, out: &mut Vec<&'a mut Node>) {
    let selected = match &node.kind {
        NodeKind::Leaf(arg) => Some(selector.selects_contained(arg)),
        NodeKind::Group(_) => None,
    };
    match selected {
        Some(true) => out.push(node),
        Some(false) => {}
        None => {
            if let NodeKind::Group(children) = &mut node.kind {
                for child in children.iter_mut() {
                    collect_leaves(child, selector, out);
                }
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Concatenate items into a new group.
///
/// The grammar comes from the first node item, or the default. Text items
/// are parsed with it; groups are flattened and leaves inserted as they are.
pub fn concat<I, T>(items: I) -> Result<Node>
where
    I: IntoIterator<Item = T>,
    T: Into<Item>,
{
    let items: Vec<Item> = items.into_iter().map(Into::into).collect();
    let config = items
        .iter()
        .find_map(|item| match item {
            Item::Node(node) => Some(Arc::clone(&node.config)),
            Item::Text(_) => None,
        })
        .unwrap_or_default();

    let mut children = Vec::new();
    for item in items {
        match item {
            Item::Text(text) => children.extend(build_group(&text, &config)?.into_children()),
            Item::Node(node) => children.extend(node.into_children()),
        }
    }
    Ok(Node::group(children, config))
}

/// Depth-first iterator over the leaves of a tree.
pub struct Leaves<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match &node.kind {
                NodeKind::Leaf(_) => return Some(node),
                NodeKind::Group(children) => self.stack.extend(children.iter().rev()),
            }
        }
        None
    }
}

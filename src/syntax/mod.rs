// Argument values, the tree built from them, and the edits defined over both
mod arg;
mod node;
mod pattern;
mod selection;

pub use arg::{Arg, ArgId, Parameter};
pub use node::{Item, Leaves, Node, NodeKind, NodePath, concat};
pub use pattern::{NameReplacer, Pattern, Replacement, Replacer, Selector};
pub use selection::Selection;

// Re-export NodeVariant from base, it names the shapes of a Node
pub use crate::base::NodeVariant;

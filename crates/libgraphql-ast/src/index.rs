use crate::Node;
use crate::document::OperationType;
use rustc_hash::FxHashMap;

/// Name → node lookup for the type-system definitions of a
/// [`Document`](crate::Document).
///
/// Buckets are keyed by name and may hold several nodes: a base definition
/// and its not-yet-merged extensions share a name.
/// The Index also records the root operation type names, and the extensions
/// that have already been folded into their base definition.
#[derive(Clone, Debug, Default)]
pub struct Index {
    nodes: FxHashMap<Box<str>, Vec<Node>>,
    pub query_type_name: Option<String>,
    pub mutation_type_name: Option<String>,
    pub subscription_type_name: Option<String>,
    /// Extensions whose members have been merged into a base definition and
    /// which printers and later passes should treat as consumed.
    pub merged_type_extensions: Vec<Node>,
}

impl Index {
    pub fn add_node(&mut self, name: &str, node: Node) {
        match self.nodes.get_mut(name) {
            Some(nodes) => nodes.push(node),
            None => {
                self.nodes.insert(name.into(), vec![node]);
            },
        }
    }

    pub fn first_node_by_name(&self, name: &str) -> Option<Node> {
        self.nodes_by_name(name)
            .and_then(|nodes| nodes.first().copied())
    }

    /// Returns the first node for `name` that is not a type extension.
    pub fn first_non_extension_node_by_name(&self, name: &str) -> Option<Node> {
        self.nodes_by_name(name)?
            .iter()
            .find(|node| !node.is_type_extension())
            .copied()
    }

    pub fn nodes_by_name(&self, name: &str) -> Option<&[Node]> {
        self.nodes
            .get(name)
            .map(Vec::as_slice)
            .filter(|nodes| !nodes.is_empty())
    }

    /// Drops the whole bucket for `name`.
    pub fn remove_node_by_name(&mut self, name: &str) {
        self.nodes.remove(name);
    }

    /// Drops a single node from the bucket for `name`, keeping its siblings.
    pub fn remove_node(&mut self, name: &str, node: Node) {
        if let Some(nodes) = self.nodes.get_mut(name) {
            nodes.retain(|existing| *existing != node);
            if nodes.is_empty() {
                self.nodes.remove(name);
            }
        }
    }

    /// Replaces `old` with `new` in the bucket for `name`. Returns `false`
    /// if `old` was not indexed under that name.
    pub fn replace_node(&mut self, name: &str, old: Node, new: Node) -> bool {
        let Some(nodes) = self.nodes.get_mut(name) else {
            return false;
        };
        match nodes.iter_mut().find(|existing| **existing == old) {
            Some(slot) => {
                *slot = new;
                true
            },
            None => false,
        }
    }

    pub fn is_merged_type_extension(&self, node: Node) -> bool {
        self.merged_type_extensions.contains(&node)
    }

    pub fn root_operation_type_name(&self, operation_type: OperationType) -> Option<&str> {
        match operation_type {
            OperationType::Query => self.query_type_name.as_deref(),
            OperationType::Mutation => self.mutation_type_name.as_deref(),
            OperationType::Subscription => self.subscription_type_name.as_deref(),
        }
    }

    pub fn set_root_operation_type_name(
        &mut self,
        operation_type: OperationType,
        name: impl Into<String>,
    ) {
        let name = Some(name.into());
        match operation_type {
            OperationType::Query => self.query_type_name = name,
            OperationType::Mutation => self.mutation_type_name = name,
            OperationType::Subscription => self.subscription_type_name = name,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clears every bucket and the root type names. Bucket storage of the map
    /// itself is retained.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.query_type_name = None;
        self.mutation_type_name = None;
        self.subscription_type_name = None;
        self.merged_type_extensions.clear();
    }
}

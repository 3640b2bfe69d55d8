//! Scene graph - owns every renderable object by handle

use crate::components::{Billboard, LayerSolid};
use std::collections::BTreeMap;

/// Handle to a scene node for removal/lookup
pub type NodeHandle = u64;

/// A renderable object in the scene
#[derive(Debug, Clone)]
pub enum SceneNode {
    /// Colored layer box
    Solid(LayerSolid),
    /// Camera-facing label
    Billboard(Billboard),
}

impl SceneNode {
    pub fn as_solid(&self) -> Option<&LayerSolid> {
        match self {
            Self::Solid(solid) => Some(solid),
            Self::Billboard(_) => None,
        }
    }

    pub fn as_billboard(&self) -> Option<&Billboard> {
        match self {
            Self::Billboard(billboard) => Some(billboard),
            Self::Solid(_) => None,
        }
    }
}

/// Batch of removals and additions applied as one step.
///
/// Everything is built before the graph is touched, so readers see either the
/// graph before the transaction or after it.
#[derive(Debug, Default)]
pub struct SceneTransaction {
    remove: Vec<NodeHandle>,
    add: Vec<SceneNode>,
}

impl SceneTransaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue removal of `handle`.
    pub fn remove(&mut self, handle: NodeHandle) {
        self.remove.push(handle);
    }

    /// Queue `node` for insertion; returns its slot in the handles [`SceneGraph::apply`] returns.
    pub fn add(&mut self, node: SceneNode) -> usize {
        self.add.push(node);
        self.add.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.remove.is_empty() && self.add.is_empty()
    }
}

/// Owns all scene nodes; objects are only ever added or removed whole.
#[derive(Debug)]
pub struct SceneGraph {
    nodes: BTreeMap<NodeHandle, SceneNode>,
    next_handle: NodeHandle,
    revision: u64,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            next_handle: 1,
            revision: 0,
        }
    }

    /// Apply all removals, then all additions, as a single revision.
    ///
    /// Unknown handles in the removal list are ignored.
    ///
    /// Returns the new handles in the order the nodes were queued.
    pub fn apply(&mut self, transaction: SceneTransaction) -> Vec<NodeHandle> {
        if transaction.is_empty() {
            return Vec::new();
        }
        for handle in transaction.remove {
            self.nodes.remove(&handle);
        }
        let handles = transaction
            .add
            .into_iter()
            .map(|node| self.insert(node))
            .collect();
        self.revision += 1;
        handles
    }

    fn insert(&mut self, node: SceneNode) -> NodeHandle {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.nodes.insert(handle, node);
        handle
    }

    pub fn get(&self, handle: NodeHandle) -> Option<&SceneNode> {
        self.nodes.get(&handle)
    }

    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.nodes.contains_key(&handle)
    }

    /// Nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeHandle, &SceneNode)> {
        self.nodes.iter().map(|(handle, node)| (*handle, node))
    }

    /// Get the number of nodes in the scene
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Counter bumped once per non-empty transaction.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

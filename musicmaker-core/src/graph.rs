//! Directed graph with integer edge weights.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]; a payload index
//! maps each distinct value to its node. Neighbour lists are reported in
//! payload order so indexed selection over them is reproducible.

use std::collections::HashMap;
use std::hash::Hash;

/// Handle to a node in one [`WeightedDigraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    adj: HashMap<NodeId, u32>,
}

#[derive(Debug, Clone)]
pub struct WeightedDigraph<T> {
    nodes: Vec<Node<T>>,
    index: HashMap<T, NodeId>,
}

impl<T> Default for WeightedDigraph<T> {
    fn default() -> Self {
        WeightedDigraph {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Clone + Eq + Hash + Ord> WeightedDigraph<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the node holding `value`, inserting it with no edges if absent
    pub fn get_or_add(&mut self, value: T) -> NodeId {
        if let Some(&id) = self.index.get(&value) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.index.insert(value.clone(), id);
        self.nodes.push(Node {
            value,
            adj: HashMap::new(),
        });
        id
    }

    pub fn get(&self, value: &T) -> Option<NodeId> {
        self.index.get(value).copied()
    }

    pub fn value(&self, node: NodeId) -> &T {
        &self.nodes[node.0].value
    }

    /// Set the weight of `head -> tail`, adding either endpoint as needed.
    /// A repeated edge keeps only the latest weight.
    pub fn add_edge(&mut self, head: T, tail: T, weight: u32) -> (NodeId, NodeId) {
        let head = self.get_or_add(head);
        let tail = self.get_or_add(tail);
        self.nodes[head.0].adj.insert(tail, weight);
        (head, tail)
    }

    pub fn weight(&self, head: NodeId, tail: NodeId) -> Option<u32> {
        self.nodes[head.0].adj.get(&tail).copied()
    }

    /// Outgoing neighbours ordered by payload
    pub fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        self.weighted_neighbors(node)
            .into_iter()
            .map(|(id, _)| id)
            .collect()
    }

    /// Outgoing neighbours with their edge weights, ordered by payload
    pub fn weighted_neighbors(&self, node: NodeId) -> Vec<(NodeId, u32)> {
        let mut out: Vec<(NodeId, u32)> = self.nodes[node.0]
            .adj
            .iter()
            .map(|(&id, &weight)| (id, weight))
            .collect();
        out.sort_by(|(a, _), (b, _)| self.value(*a).cmp(self.value(*b)));
        out
    }

    pub fn out_degree(&self, node: NodeId) -> usize {
        self.nodes[node.0].adj.len()
    }

    /// All nodes ordered by payload
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = (0..self.nodes.len()).map(NodeId).collect();
        ids.sort_by(|a, b| self.value(*a).cmp(self.value(*b)));
        ids
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.adj.len()).sum()
    }
}

//! Export of a planning graph to [petgraph](petgraph), e.g. to render the graph with DOT.

use std::collections::HashMap;

use petgraph::{
    dot::Dot,
    graph::{Graph, NodeIndex},
};

use crate::{
    graph::PlanningGraph,
    level::LevelIndex,
    problem::Problem,
    structures::node::GraphNode,
};

/// A member of some level, paired with the index of the level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportNode {
    pub level: LevelIndex,
    pub node: GraphNode,
}

impl std::fmt::Display for ExportNode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}: {}", self.level, self.node)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    /// From a member of a level to a member of the next level.
    Successor,

    /// Between members of the same level, once for each pair.
    Mutex,
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Successor => write!(f, ""),
            Self::Mutex => write!(f, "mutex"),
        }
    }
}

impl<P: Problem> PlanningGraph<P> {
    /// The graph as a petgraph graph.
    ///
    /// Successor edges to a level which has not been built are omitted.
    pub fn to_petgraph(&self) -> Graph<ExportNode, EdgeKind> {
        let mut graph = Graph::new();
        let mut indicies: Vec<HashMap<&GraphNode, NodeIndex>> = Vec::with_capacity(self.levels.len());

        for level in &self.levels {
            let mut level_indicies = HashMap::with_capacity(level.objects().len());
            for node in level.objects() {
                let index = graph.add_node(ExportNode {
                    level: level.index(),
                    node: node.clone(),
                });
                level_indicies.insert(node, index);
            }

            for (a, b) in level.mutex_pairs() {
                if let (Some(&a_index), Some(&b_index)) = (level_indicies.get(a), level_indicies.get(b)) {
                    graph.add_edge(a_index, b_index, EdgeKind::Mutex);
                }
            }

            indicies.push(level_indicies);
        }

        let pairs = indicies.iter().zip(indicies.iter().skip(1));
        for (level, (current, next)) in self.levels.iter().zip(pairs) {
            for node in level.objects() {
                let (Some(&from), Ok(successors)) = (current.get(node), level.successors_of(node)) else {
                    continue;
                };
                for successor in successors {
                    if let Some(&to) = next.get(successor) {
                        graph.add_edge(from, to, EdgeKind::Successor);
                    }
                }
            }
        }

        graph
    }

    /// The graph in DOT format.
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::new(&self.to_petgraph()))
    }
}


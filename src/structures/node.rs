/*!
Nodes of a planning graph, and the kinds of levels nodes belong to.

A [GraphNode] is either a [Literal] or an [ActionSchema].
Every level holds nodes of a single kind, and the kind of a level is fixed when the level is built, rather than inferred from its members (an empty level has no members to inspect).

- Proposition levels hold literals.
- Action levels hold action schemas.
*/

use crate::structures::{action::ActionSchema, literal::Literal};

/// A member of some level.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(untagged)]
pub enum GraphNode {
    Literal(Literal),
    Action(ActionSchema),
}

/// The kind of a [GraphNode].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Literal,
    Action,
}

/// The kind of a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum LevelKind {
    Proposition,
    Action,
}

impl GraphNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Literal(_) => NodeKind::Literal,
            Self::Action(_) => NodeKind::Action,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(literal) => Some(literal),
            Self::Action(_) => None,
        }
    }

    pub fn as_action(&self) -> Option<&ActionSchema> {
        match self {
            Self::Literal(_) => None,
            Self::Action(action) => Some(action),
        }
    }
}

impl From<Literal> for GraphNode {
    fn from(literal: Literal) -> Self {
        GraphNode::Literal(literal)
    }
}

impl From<ActionSchema> for GraphNode {
    fn from(action: ActionSchema) -> Self {
        GraphNode::Action(action)
    }
}

impl std::fmt::Display for GraphNode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Literal(literal) => write!(f, "{literal}"),
            Self::Action(action) => write!(f, "{action}"),
        }
    }
}

impl LevelKind {
    /// The kind of level built from a level of this kind.
    pub fn next(&self) -> Self {
        match self {
            Self::Proposition => Self::Action,
            Self::Action => Self::Proposition,
        }
    }

    /// The kind of node held by levels of this kind.
    pub fn node_kind(&self) -> NodeKind {
        match self {
            Self::Proposition => NodeKind::Literal,
            Self::Action => NodeKind::Action,
        }
    }

    /// True if the node may be a member of a level of this kind.
    pub fn admits(&self, node: &GraphNode) -> bool {
        self.node_kind() == node.kind()
    }
}

impl std::fmt::Display for LevelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Proposition => write!(f, "Proposition"),
            Self::Action => write!(f, "Action"),
        }
    }
}

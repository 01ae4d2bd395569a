/*!
Levels of a planning graph.

A level is either a *proposition* level, whose members are [literals](crate::structures::literal), or an *action* level, whose members are [action schemas](crate::structures::action).
Levels alternate, beginning with a proposition level built from the initial state of a [problem](crate::problem::Problem).

Each level holds:
- Its members, in order of first appearance.
- A successor relation, from each member to the members of the next level the member enables.
- A predecessor relation, from each member to the members of the previous level which produced it.
- A mutex relation, from each member to the members of the same level it is mutually exclusive with.

And, a level records the index of the level it was built from (if any).
The level itself is not owned, and is instead supplied whenever the level needs to be (re)computed.

The details of construction are found in [build], of mutual exclusion in [mutex], and of adding literals to a built level in [extra].

# Invariants
- Members are pairwise distinct, and all of the kind of the level.
- Each member has an entry in each relation, possibly empty.
- The values of a relation contain no duplicates, and so may be read as sets.
- The mutex relation is symmetric.
- The mutex relation is irreflexive, with the exception of a literal recorded as mutex with itself by the negation rule (see [mutex]).

# Example

```rust
# use graphplan::config::Config;
# use graphplan::level::Level;
# use graphplan::problem::StripsProblem;
# use graphplan::structures::{action::ActionSchema, literal::Literal, node::GraphNode};
let at_a: Literal = "At(A)".parse().unwrap();
let at_b: Literal = "At(B)".parse().unwrap();
let move_a_b = ActionSchema::new("Move(A, B)", vec![at_a.clone()], vec![at_b.clone(), at_a.negate()]);
let problem = StripsProblem::new(vec![at_a.clone()], vec![move_a_b.clone()], vec![]);
let config = Config::default();

let zero = Level::root(&problem, &config).unwrap();
let one = Level::from_previous(&zero, &problem, &config).unwrap();

let no_op = ActionSchema::persistence(at_a.clone());
assert_eq!(one.objects(), &[GraphNode::from(move_a_b.clone()), GraphNode::from(no_op.clone())]);
assert_eq!(one.is_mutex(&move_a_b.into(), &no_op.into()), Ok(true));
```
*/

pub mod build;
pub mod extra;
pub mod mutex;

use std::collections::HashMap;

use crate::{
    structures::{
        action::ActionSchema,
        literal::Literal,
        node::{GraphNode, LevelKind},
    },
    types::err::{self},
};

/// The index of a level within a graph.
pub type LevelIndex = usize;

/// A relation between graph nodes, as a map from a node to the nodes it is related to.
pub type Relation = HashMap<GraphNode, Vec<GraphNode>>;

/// A level of a planning graph.
#[derive(Clone, Debug)]
pub struct Level {
    /// The index of the level, counting from the root level at zero.
    index: LevelIndex,

    kind: LevelKind,

    /// Members of the level, in order of first appearance.
    objects: Vec<GraphNode>,

    successors: Relation,

    /// Always contains an entry for each member, and so is used to test membership.
    predecessors: Relation,

    mutexes: Relation,

    /// The index of the level this level was built from.
    previous: Option<LevelIndex>,
}

/// Relates `from` to `to`, unless the two are already related.
pub(crate) fn relate(relation: &mut Relation, from: &GraphNode, to: GraphNode) {
    match relation.get_mut(from) {
        Some(related) => {
            if !related.contains(&to) {
                related.push(to)
            }
        }
        None => {
            relation.insert(from.clone(), vec![to]);
        }
    }
}

/// True if the relations agree, reading related nodes as sets.
fn same_relation(a: &Relation, b: &Relation) -> bool {
    a.len() == b.len()
        && a.iter().all(|(node, a_related)| match b.get(node) {
            Some(b_related) => {
                a_related.len() == b_related.len()
                    && a_related.iter().all(|related| b_related.contains(related))
            }
            None => false,
        })
}

impl Level {
    pub fn index(&self) -> LevelIndex {
        self.index
    }

    pub fn kind(&self) -> LevelKind {
        self.kind
    }

    /// The index of the level this level was built from, if any.
    pub fn previous_index(&self) -> Option<LevelIndex> {
        self.previous
    }

    pub fn objects(&self) -> &[GraphNode] {
        &self.objects
    }

    pub fn successors(&self) -> &Relation {
        &self.successors
    }

    pub fn predecessors(&self) -> &Relation {
        &self.predecessors
    }

    pub fn mutexes(&self) -> &Relation {
        &self.mutexes
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn contains(&self, node: &GraphNode) -> bool {
        self.predecessors.contains_key(node)
    }

    /// True if the literal is a member of the level.
    pub fn contains_literal(&self, literal: &Literal) -> bool {
        self.kind == LevelKind::Proposition && self.contains(&GraphNode::Literal(literal.clone()))
    }

    /// The literals of the level, empty for an action level.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.objects.iter().filter_map(GraphNode::as_literal)
    }

    /// The action schemas of the level, empty for a proposition level.
    pub fn actions(&self) -> impl Iterator<Item = &ActionSchema> {
        self.objects.iter().filter_map(GraphNode::as_action)
    }

    /// The members of the next level enabled by a member of this level.
    pub fn successors_of(&self, node: &GraphNode) -> Result<&[GraphNode], err::LevelError> {
        Self::related(&self.successors, node)
    }

    /// The members of the previous level which produced a member of this level.
    pub fn predecessors_of(&self, node: &GraphNode) -> Result<&[GraphNode], err::LevelError> {
        Self::related(&self.predecessors, node)
    }

    /// The members of this level which are mutex with a member of this level.
    pub fn mutexes_of(&self, node: &GraphNode) -> Result<&[GraphNode], err::LevelError> {
        Self::related(&self.mutexes, node)
    }

    /// True if `b` is mutex with `a`, and an error if either is not a member of the level.
    pub fn is_mutex(&self, a: &GraphNode, b: &GraphNode) -> Result<bool, err::LevelError> {
        let related = self.mutexes_of(a)?;
        match self.contains(b) {
            true => Ok(related.contains(b)),
            false => Err(err::LevelError::NotAMember),
        }
    }

    /// Each mutex pair of the level, once, ordered by first appearance of the members.
    ///
    /// Includes pairs of a member with itself.
    pub fn mutex_pairs(&self) -> Vec<(&GraphNode, &GraphNode)> {
        let mut pairs = Vec::default();
        for (i, first) in self.objects.iter().enumerate() {
            let Some(related) = self.mutexes.get(first) else {
                continue;
            };
            for second in &self.objects[i..] {
                if related.contains(second) {
                    pairs.push((first, second));
                }
            }
        }
        pairs
    }

    fn related<'r>(relation: &'r Relation, node: &GraphNode) -> Result<&'r [GraphNode], err::LevelError> {
        match relation.get(node) {
            Some(related) => Ok(related),
            None => Err(err::LevelError::NotAMember),
        }
    }
}

impl PartialEq for Level {
    /// Levels are equal when members agree as sets, and each relation agrees.
    ///
    /// The index of a level and of the level it was built from are ignored, as equality of levels at different indicies is used to detect a graph has leveled off.
    fn eq(&self, other: &Self) -> bool {
        self.objects.len() == other.objects.len()
            && self.objects.iter().all(|node| other.contains(node))
            && same_relation(&self.mutexes, &other.mutexes)
            && same_relation(&self.successors, &other.successors)
            && same_relation(&self.predecessors, &other.predecessors)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} level {}", self.kind, self.index)?;
        for node in &self.objects {
            writeln!(f, "  {node}")?;
        }
        for (a, b) in self.mutex_pairs() {
            writeln!(f, "  {a} # {b}")?;
        }
        Ok(())
    }
}

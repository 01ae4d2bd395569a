/*!
Construction of a level.

# The root level

The root level is a proposition level whose members are the fluents of the initial state of the problem.
No member of the root level has a predecessor, and no members of the root level are mutex.

# Derived levels

A derived level is built from the successor relation of the previous level.
For each member *s* of the previous level (in order), and for each *t* that *s* is a successor of:
- If *t* is not (yet) a member, *t* is added as a member with *s* as its only predecessor.
- Otherwise, *s* is added to the predecessors of *t*.

So, a single pass fixes both the members and the predecessor relation of the level.

In addition, each action without preconditions is a member of every action level.
Such an action is added with no predecessors if no literal of the previous level (e.g. of an empty level) enabled it.

The kind of a derived level is the opposite of the kind of the previous level.
Note, a previous level with no successors gives an empty level, which is a dead end rather than an error.

# Relations

Once members are fixed, the successor relation and the [mutex relation](super::mutex) are computed.

For a proposition level, an action is a successor of each of its preconditions, if every precondition is a member.
An action without preconditions is a successor of every literal.
For an action level, the successors of an action are its effects.

Finally, for a proposition level, the persistence action of each literal is added as a successor of the literal.
*/

use crate::{
    config::Config,
    level::{relate, Level, LevelIndex, Relation},
    misc::log::targets::{self},
    problem::Problem,
    structures::{
        action::ActionSchema,
        node::{GraphNode, LevelKind},
    },
    types::err::{self},
};

impl Level {
    /// The root level, from the initial state of the problem.
    pub fn root<P: Problem + ?Sized>(problem: &P, config: &Config) -> Result<Self, err::ErrorKind> {
        let mut the_level = Level::empty(0, LevelKind::Proposition, None);

        for fluent in problem.initial_state() {
            the_level.insert_object(GraphNode::Literal(fluent.clone()))?;
        }

        the_level.compute_relations(None, problem, config)?;
        log::debug!(target: targets::LEVEL, "Built root level with {} fluents", the_level.objects.len());
        Ok(the_level)
    }

    /// The level following `previous`.
    pub fn from_previous<P: Problem + ?Sized>(
        previous: &Level,
        problem: &P,
        config: &Config,
    ) -> Result<Self, err::ErrorKind> {
        let mut the_level = Level::empty(previous.index + 1, previous.kind.next(), Some(previous.index));

        for source in &previous.objects {
            for target in previous.successors_of(source)? {
                match the_level.predecessors.get_mut(target) {
                    Some(sources) => {
                        if !sources.contains(source) {
                            sources.push(source.clone())
                        }
                    }
                    None => {
                        the_level.insert_object(target.clone())?;
                        relate(&mut the_level.predecessors, target, source.clone());
                    }
                }
            }
        }

        if the_level.kind == LevelKind::Action {
            for action in problem.action_schemas() {
                if !action.preconditions().is_empty() {
                    continue;
                }
                if the_level.insert_object(GraphNode::Action(action.clone()))? {
                    log::trace!(target: targets::LEVEL, "{action} unsupported at level {}", the_level.index);
                }
            }
        }

        the_level.compute_relations(Some(previous), problem, config)?;
        log::debug!(target: targets::LEVEL,
            "Built {} level {} with {} members and {} mutex pairs",
            the_level.kind,
            the_level.index,
            the_level.objects.len(),
            the_level.mutex_pairs().len()
        );
        Ok(the_level)
    }

    /// The root level if `previous` is none, and otherwise the level following `previous`.
    pub fn build<P: Problem + ?Sized>(
        previous: Option<&Level>,
        problem: &P,
        config: &Config,
    ) -> Result<Self, err::ErrorKind> {
        match previous {
            None => Level::root(problem, config),
            Some(level) => Level::from_previous(level, problem, config),
        }
    }

    fn empty(index: LevelIndex, kind: LevelKind, previous: Option<LevelIndex>) -> Self {
        Level {
            index,
            kind,
            objects: Vec::default(),
            successors: Relation::default(),
            predecessors: Relation::default(),
            mutexes: Relation::default(),
            previous,
        }
    }

    /// Adds a node as a member, with no predecessors, unless already a member.
    ///
    /// Returns whether the node was added, and an error if the node is of the wrong kind for the level.
    pub(super) fn insert_object(&mut self, node: GraphNode) -> Result<bool, err::LevelError> {
        if !self.kind.admits(&node) {
            return Err(err::LevelError::KindMismatch {
                expected: self.kind,
                found: node.kind(),
            });
        }

        if self.contains(&node) {
            return Ok(false);
        }

        self.predecessors.insert(node.clone(), Vec::default());
        self.objects.push(node);
        Ok(true)
    }

    /// Checks `previous` is the level this level was built from.
    pub(super) fn check_previous(&self, previous: Option<&Level>) -> Result<(), err::LevelError> {
        let found = previous.map(|level| level.index);
        match found == self.previous && previous.map_or(true, |level| level.kind.next() == self.kind) {
            true => Ok(()),
            false => Err(err::LevelError::PreviousMismatch {
                expected: self.previous,
                found,
            }),
        }
    }

    /// (Re)computes the successor and mutex relations of the level, from scratch.
    pub(super) fn compute_relations<P: Problem + ?Sized>(
        &mut self,
        previous: Option<&Level>,
        problem: &P,
        config: &Config,
    ) -> Result<(), err::ErrorKind> {
        self.check_previous(previous)?;

        self.successors = self.successor_relation(problem);
        self.mutexes = self.mutex_relation(previous, config)?;

        if self.kind == LevelKind::Proposition {
            self.add_persistence_actions();
        }

        Ok(())
    }

    fn successor_relation<P: Problem + ?Sized>(&self, problem: &P) -> Relation {
        let mut successors: Relation = self
            .objects
            .iter()
            .map(|node| (node.clone(), Vec::default()))
            .collect();

        match self.kind {
            LevelKind::Proposition => {
                for action in problem.action_schemas() {
                    if !action.is_applicable_in(|literal| self.contains_literal(literal)) {
                        continue;
                    }

                    let enabled = GraphNode::Action(action.clone());
                    match action.preconditions().is_empty() {
                        true => {
                            for literal in &self.objects {
                                relate(&mut successors, literal, enabled.clone());
                            }
                        }
                        false => {
                            for precondition in action.preconditions() {
                                let literal = GraphNode::Literal(precondition.clone());
                                relate(&mut successors, &literal, enabled.clone());
                            }
                        }
                    }
                    log::trace!(target: targets::LEVEL, "{action} applicable at level {}", self.index);
                }
            }

            LevelKind::Action => {
                for node in &self.objects {
                    if let GraphNode::Action(action) = node {
                        for effect in action.effects() {
                            relate(&mut successors, node, GraphNode::Literal(effect.clone()));
                        }
                    }
                }
            }
        }

        successors
    }

    /// Adds the persistence action of each literal as a successor of the literal.
    fn add_persistence_actions(&mut self) {
        for node in &self.objects {
            if let GraphNode::Literal(literal) = node {
                let no_op = ActionSchema::persistence(literal.clone());
                log::trace!(target: targets::PERSISTENCE, "Persisting {literal} from level {}", self.index);
                relate(&mut self.successors, node, GraphNode::Action(no_op));
            }
        }
    }
}

/*!
A planning graph, the sequence of levels built from a problem.

The graph owns its levels, and each level records only the index of the level it was built from.
Levels are built strictly in sequence, alternating between proposition and action levels.

# Leveling off

A graph has *leveled off* when the last level is equal to the level two before it (and so of the same kind).
No further level can differ, and so if the goal is not reachable at a leveled off graph, the goal is not reachable at all.

# Goal reachability

The goal of the problem is reachable at a proposition level if each goal literal is a member of the level, and no two distinct goal literals are mutex.
Reachability is necessary for a plan to exist, but (as mutex is only pairwise) is not sufficient.

# Example

```rust
# use graphplan::config::Config;
# use graphplan::graph::{Expansion, PlanningGraph};
# use graphplan::problem::StripsProblem;
# use graphplan::structures::{action::ActionSchema, literal::Literal};
let have_cake: Literal = "Have(Cake)".parse().unwrap();
let eaten_cake: Literal = "Eaten(Cake)".parse().unwrap();

let eat = ActionSchema::new("Eat(Cake)", vec![have_cake.clone()], vec![eaten_cake.clone(), have_cake.negate()]);
let bake = ActionSchema::new("Bake(Cake)", vec![have_cake.negate()], vec![have_cake.clone()]);

let problem = StripsProblem::new(vec![have_cake.clone()], vec![eat, bake], vec![have_cake, eaten_cake]);
let mut graph = PlanningGraph::new(problem, Config::default()).unwrap();

// Both goals are present at level two, though only as a mutex pair.
graph.expand().unwrap();
graph.expand().unwrap();
assert!(!graph.goals_reachable());

assert_eq!(graph.expand_until_stable(), Ok(Expansion::GoalsReachable(4)));
```
*/

mod export;
pub use export::{EdgeKind, ExportNode};

use crate::{
    builder::parse_literals,
    config::Config,
    level::{Level, LevelIndex},
    misc::log::targets::{self},
    problem::Problem,
    structures::{
        literal::Literal,
        node::{GraphNode, LevelKind},
    },
    types::err::{self},
};

/// The result of expanding a graph until stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expansion {
    /// The goal is reachable at the proposition level with the given index.
    GoalsReachable(LevelIndex),

    /// The graph leveled off at the given index, without the goal being reachable.
    LeveledOff(LevelIndex),

    /// The configured limit on levels was reached, at the given index.
    LimitReached(LevelIndex),
}

/// A planning graph.
pub struct PlanningGraph<P: Problem> {
    problem: P,
    config: Config,

    /// The levels of the graph, where the index of a level is its position.
    levels: Vec<Level>,
}

impl<P: Problem> PlanningGraph<P> {
    /// A graph with only the root level.
    pub fn new(problem: P, config: Config) -> Result<Self, err::ErrorKind> {
        let root = Level::root(&problem, &config)?;
        Ok(PlanningGraph {
            problem,
            config,
            levels: vec![root],
        })
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level(&self, index: LevelIndex) -> Result<&Level, err::GraphError> {
        match self.levels.get(index) {
            Some(level) => Ok(level),
            None => Err(err::GraphError::MissingLevel(index)),
        }
    }

    pub fn last_level(&self) -> &Level {
        // There is always a root level.
        &self.levels[self.levels.len() - 1]
    }

    /// The last proposition level of the graph.
    pub fn last_proposition_level(&self) -> &Level {
        let last = self.last_level();
        match last.kind() {
            LevelKind::Proposition => last,
            LevelKind::Action => &self.levels[last.index() - 1],
        }
    }

    /// Builds the next level of the graph.
    pub fn expand(&mut self) -> Result<&Level, err::ErrorKind> {
        let next = Level::from_previous(self.last_level(), &self.problem, &self.config)?;
        log::info!(target: targets::GRAPH, "Expanded to {} level {}", next.kind(), next.index());
        self.levels.push(next);
        Ok(self.last_level())
    }

    /// True if the last level is equal to the level two before it.
    pub fn leveled_off(&self) -> bool {
        let count = self.levels.len();
        count >= 3 && self.levels[count - 1] == self.levels[count - 3]
    }

    /// True if each goal literal is a member of the last proposition level, and no two distinct goal literals are mutex there.
    pub fn goals_reachable(&self) -> bool {
        self.literals_reachable_at(self.last_proposition_level(), self.problem.goal())
    }

    /// True if each literal is a member of the level, and no two distinct literals are mutex at the level.
    pub fn literals_reachable_at(&self, level: &Level, literals: &[Literal]) -> bool {
        let nodes = literals
            .iter()
            .map(|literal| GraphNode::Literal(literal.clone()))
            .collect::<Vec<_>>();

        for (i, node) in nodes.iter().enumerate() {
            let Ok(mutexes) = level.mutexes_of(node) else {
                return false;
            };
            if nodes[i + 1..].iter().any(|other| other != node && mutexes.contains(other)) {
                return false;
            }
        }

        true
    }

    /// Expands the graph until the goal is reachable, the graph levels off, or the configured limit on levels is reached.
    pub fn expand_until_stable(&mut self) -> Result<Expansion, err::ErrorKind> {
        loop {
            let index = self.last_level().index();

            if self.last_level().kind() == LevelKind::Proposition && self.goals_reachable() {
                log::info!(target: targets::GRAPH, "Goal reachable at level {index}");
                return Ok(Expansion::GoalsReachable(index));
            }

            if self.leveled_off() {
                log::info!(target: targets::GRAPH, "Leveled off at level {index}");
                return Ok(Expansion::LeveledOff(index));
            }

            if self.levels.len() >= self.config.level_limit.value {
                log::info!(target: targets::GRAPH, "Level limit reached at level {index}");
                return Ok(Expansion::LimitReached(index));
            }

            self.expand()?;
        }
    }

    /// Adds literals to the proposition level at `index`.
    ///
    /// Levels after `index` were built from the level before the addition, and so are dropped.
    ///
    /// See [Level::add_literals].
    pub fn add_literals(
        &mut self,
        index: LevelIndex,
        literals: impl IntoIterator<Item = Literal>,
    ) -> Result<usize, err::ErrorKind> {
        if index >= self.levels.len() {
            return Err(err::ErrorKind::from(err::GraphError::MissingLevel(index)));
        }

        let (before, from) = self.levels.split_at_mut(index);
        let previous = before.last();
        let added = from[0].add_literals(literals, previous, &self.problem, &self.config)?;

        if self.levels.len() > index + 1 {
            log::info!(target: targets::GRAPH, "Dropping levels after {index}");
            self.levels.truncate(index + 1);
        }
        Ok(added)
    }

    /// Adds literals, read from a comma separated list, to the proposition level at `index`.
    pub fn add_literals_str(&mut self, index: LevelIndex, literals: &str) -> Result<usize, err::ErrorKind> {
        let literals = parse_literals(literals)?;
        self.add_literals(index, literals)
    }
}

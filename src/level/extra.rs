/*!
Adding literals to a built proposition level.

Extra literals are typically goal literals, added to check whether the goal literals are mutex with (or reachable from) the existing level without building further levels.

Literals already present are skipped, and then the successor relation, mutex relation, and persistence actions of the level are recomputed from scratch.
Existing members are never removed.
So, adding literals which are already present leaves the level unchanged.

```rust
# use graphplan::config::Config;
# use graphplan::level::Level;
# use graphplan::problem::StripsProblem;
let problem = StripsProblem::new(vec!["At(A)".parse().unwrap()], vec![], vec![]);
let config = Config::default();

let mut root = Level::root(&problem, &config).unwrap();
assert_eq!(root.add_literals_str("At(A), At(B)", None, &problem, &config), Ok(1));
assert_eq!(root.objects().len(), 2);
```
*/

use crate::{
    builder::parse_literals,
    config::Config,
    level::Level,
    misc::log::targets::{self},
    problem::Problem,
    structures::{
        literal::Literal,
        node::{GraphNode, LevelKind, NodeKind},
    },
    types::err::{self},
};

impl Level {
    /// Adds literals to the level, and recomputes relations.
    ///
    /// `previous` must be the level this level was built from (none, for the root level).
    ///
    /// Returns the count of literals added, and an error if the level is an action level.
    pub fn add_literals<P: Problem + ?Sized>(
        &mut self,
        literals: impl IntoIterator<Item = Literal>,
        previous: Option<&Level>,
        problem: &P,
        config: &Config,
    ) -> Result<usize, err::ErrorKind> {
        if self.kind != LevelKind::Proposition {
            return Err(err::ErrorKind::from(err::LevelError::KindMismatch {
                expected: self.kind,
                found: NodeKind::Literal,
            }));
        }
        self.check_previous(previous)?;

        let mut added = 0;
        for literal in literals {
            if self.insert_object(GraphNode::Literal(literal))? {
                added += 1;
            }
        }

        self.compute_relations(previous, problem, config)?;
        log::debug!(target: targets::LEVEL, "Added {added} literals to level {}", self.index);
        Ok(added)
    }

    /// Adds literals, read from a comma separated list, to the level.
    ///
    /// See [add_literals](Level::add_literals).
    pub fn add_literals_str<P: Problem + ?Sized>(
        &mut self,
        literals: &str,
        previous: Option<&Level>,
        problem: &P,
        config: &Config,
    ) -> Result<usize, err::ErrorKind> {
        let literals = parse_literals(literals)?;
        self.add_literals(literals, previous, problem, config)
    }
}

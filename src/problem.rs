/*!
Problems, the supply of an initial state and a catalog of (ground) action schemas.

A planning graph only reads a problem, and so any structure which can supply the parts may be used through the [Problem] trait.
The canonical implementation is [StripsProblem], which may be built directly or read from JSON.

# JSON

```json
{
  "initial_state": ["At(A)"],
  "actions": [
    { "name": "Move(A, B)", "preconditions": ["At(A)"], "effects": ["At(B)", "~At(A)"] }
  ],
  "goal": ["At(B)"]
}
```

Literals are written as text, following the syntax of the [parser](crate::builder).

```rust
# use graphplan::problem::{Problem, StripsProblem};
let json = br#"{ "initial_state": ["At(A)"],
  "actions": [{ "name": "Move", "preconditions": ["At(A)"], "effects": ["At(B)", "~At(A)"] }],
  "goal": ["At(B)"] }"#;

let problem = StripsProblem::from_json_reader(json.as_slice()).unwrap();
assert_eq!(problem.action_schemas()[0].negative_effects().len(), 1);
```
*/

use crate::{
    misc::log::targets::{self},
    structures::{action::ActionSchema, literal::Literal},
    types::err::{self},
};

/// Something which supplies an initial state, a catalog of action schemas, and a goal.
pub trait Problem {
    /// The fluents of the initial state.
    fn initial_state(&self) -> &[Literal];

    /// The catalog of ground action schemas.
    fn action_schemas(&self) -> &[ActionSchema];

    /// The literals to be achieved.
    ///
    /// Construction of levels does not use the goal.
    fn goal(&self) -> &[Literal];
}

/// The canonical problem.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StripsProblem {
    initial_state: Vec<Literal>,

    #[serde(default)]
    actions: Vec<ActionSchema>,

    #[serde(default)]
    goal: Vec<Literal>,
}

impl StripsProblem {
    /// A problem, with duplicate initial fluents dropped.
    pub fn new(initial_state: Vec<Literal>, actions: Vec<ActionSchema>, goal: Vec<Literal>) -> Self {
        let mut the_problem = StripsProblem {
            initial_state: Vec::with_capacity(initial_state.len()),
            actions,
            goal,
        };
        for fluent in initial_state {
            if !the_problem.initial_state.contains(&fluent) {
                the_problem.initial_state.push(fluent);
            }
        }
        the_problem
    }

    /// Reads a problem from JSON.
    ///
    /// ```rust,ignore
    /// let problem = StripsProblem::from_json_reader(BufReader::new(&file))?;
    /// ```
    pub fn from_json_reader(reader: impl std::io::Read) -> Result<Self, err::ErrorKind> {
        let read: StripsProblem = match serde_json::from_reader(reader) {
            Ok(problem) => problem,
            Err(e) => {
                log::error!(target: targets::PARSE, "Failed to read problem: {e}");
                return Err(err::ErrorKind::from(err::ParseError::Json(e.to_string())));
            }
        };

        let the_problem = StripsProblem::new(read.initial_state, read.actions, read.goal);
        log::info!(target: targets::PARSE,
            "Read problem with {} initial fluents, {} actions, and {} goals",
            the_problem.initial_state.len(),
            the_problem.actions.len(),
            the_problem.goal.len()
        );
        Ok(the_problem)
    }
}

impl Problem for StripsProblem {
    fn initial_state(&self) -> &[Literal] {
        &self.initial_state
    }

    fn action_schemas(&self) -> &[ActionSchema] {
        &self.actions
    }

    fn goal(&self) -> &[Literal] {
        &self.goal
    }
}

impl<P: Problem + ?Sized> Problem for &P {
    fn initial_state(&self) -> &[Literal] {
        (**self).initial_state()
    }

    fn action_schemas(&self) -> &[ActionSchema] {
        (**self).action_schemas()
    }

    fn goal(&self) -> &[Literal] {
        (**self).goal()
    }
}

//! A library for building planning graphs over STRIPS problems.
//!
//! A planning graph is a leveled, bipartite structure, alternating between levels of propositions (literals) and levels of ground actions.
//! Each level records which objects of the next level it enables, which objects of the previous level produced it, and which of its own objects are mutually exclusive.
//!
//! Planning graphs are the core data structure of GraphPlan style planners:
//! - A literal absent from every proposition level can never be achieved.
//! - Mutex relations prune candidate plans during (backward) plan extraction.
//!
//! # Orientation
//!
//! The library is designed around a [PlanningGraph](graph::PlanningGraph), which owns a sequence of [levels](level::Level) built from some [problem].
//!
//! - Objects of a level are [graph nodes](structures::node::GraphNode), either [literals](structures::literal) or [action schemas](structures::action).
//! - Each level is fully computed when built, and is thereafter fixed, except through the addition of [extra literals](level::Level::add_literals).
//! - The rules used to determine mutual exclusion are documented in [level::mutex].
//!
//! Useful starting points, then, may be:
//! - The [level] module, to inspect how a level is derived from the previous level.
//! - The [graph] module, to see how levels are chained and when a graph has leveled off.
//! - The [configuration](crate::config) to see which variations are supported.
//!
//! # Example
//!
//! ```rust
//! # use graphplan::config::Config;
//! # use graphplan::graph::{Expansion, PlanningGraph};
//! # use graphplan::problem::StripsProblem;
//! # use graphplan::structures::{action::ActionSchema, literal::Literal};
//! let at_a: Literal = "At(A)".parse().unwrap();
//! let at_b: Literal = "At(B)".parse().unwrap();
//!
//! let move_a_b = ActionSchema::new("Move(A, B)", vec![at_a.clone()], vec![at_b.clone(), at_a.negate()]);
//! let problem = StripsProblem::new(vec![at_a], vec![move_a_b], vec![at_b]);
//!
//! let mut graph = PlanningGraph::new(problem, Config::default()).unwrap();
//! assert_eq!(graph.expand_until_stable(), Ok(Expansion::GoalsReachable(2)));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//!
//! For example, with a logger which respects `RUST_LOG`-style filters:
//! - Logs related to level construction can be filtered with `level`.
//! - Each mutex found, together with the rule which found it, is logged at trace level under `mutex`.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod config;
pub mod graph;
pub mod level;
pub mod problem;
pub mod structures;
pub mod types;

pub mod misc;

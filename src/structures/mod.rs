//! Key structures, such as literals and action schemas.
//!
//! # Other structures without an implementation.
//!
//! ## States
//!
//! A state is a set of [literals](literal), interpreted as the conjunction of those literals.
//! The initial state of a [problem](crate::problem::Problem) is a state, as is (the literal part of) every proposition [level](crate::level).
//!
//! ## Fluents
//!
//! A fluent is a literal whose truth may change as actions are applied.
//! Every literal in the graph is treated as a fluent, and so the two terms are used interchangeably.

pub mod action;
pub mod atom;
pub mod literal;
pub mod node;

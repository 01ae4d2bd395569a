//! Error types used in the library.
//!
//! - Most of these signal a programming error, e.g. asking a level about an object which is not a member of the level.
//! - Some are external --- e.g. a [ParseError] when reading a literal or a problem.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::{
    level::LevelIndex,
    structures::node::{LevelKind, NodeKind},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Graph(GraphError),
    Level(LevelError),
    Parse(ParseError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Config: {e:?}"),
            Self::Graph(e) => write!(f, "Graph: {e:?}"),
            Self::Level(e) => write!(f, "Level: {e:?}"),
            Self::Parse(e) => write!(f, "Parse: {e:?}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors when setting a configuration option.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A value outside the bounds of the named option.
    OutOfRange(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors from the planning graph driver.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphError {
    /// No level has been built at the index.
    MissingLevel(LevelIndex),
}

impl From<GraphError> for ErrorKind {
    fn from(e: GraphError) -> Self {
        ErrorKind::Graph(e)
    }
}

/// Errors within a level.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LevelError {
    /// Some object was looked up in a relation of a level, though the object is not a member of the level.
    ///
    /// Returning an empty relation instead would mask reachability issues.
    NotAMember,

    /// An object of one kind was offered to a level of the other kind.
    KindMismatch { expected: LevelKind, found: NodeKind },

    /// An attempt to (re)compute a level against some level other than the level it was built from.
    PreviousMismatch {
        expected: Option<LevelIndex>,
        found: Option<LevelIndex>,
    },
}

impl From<LevelError> for ErrorKind {
    fn from(e: LevelError) -> Self {
        ErrorKind::Level(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some non-empty string was required.
    Empty,

    /// A negation character was read, but no candidate for negation was found.
    Negation,

    /// An opening parenthesis without a matching close, or vice versa.
    UnbalancedTerms,

    /// A predicate which is not a (non-empty) identifier.
    Predicate(String),

    /// An empty term within a term list.
    Term(String),

    /// Some issue reading a problem file.
    Json(String),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

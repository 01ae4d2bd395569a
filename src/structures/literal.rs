//! Literals are atoms paired with a (boolean) polarity.
//!
//! A literal with true polarity asserts its atom, and a literal with false polarity asserts the negation of its atom.
//!
//! An example:
//!
//! ```rust
//! # use graphplan::structures::{atom::Atom, literal::Literal};
//! let at_a = Literal::new(Atom::new("At", vec!["A".to_string()]), true);
//!
//! assert!(at_a.polarity());
//! assert_eq!(at_a.predicate(), "At");
//! assert!(!at_a.negate().polarity());
//! assert!(at_a.is_complement_of(&at_a.negate()));
//!
//! assert_eq!(at_a.negate().to_string(), "~At(A)");
//! ```
//!
//! Literals are compared structurally, and are hashable in order to allow for straightforward use of literals as keys of the relations of a level.
//!
//! With serde, literals are (de)serialized through their textual representation, e.g. `"~At(A)"`.
//! The syntax is documented with the [parser](crate::builder).

use crate::{
    config::PropositionComparison,
    structures::atom::{Atom, Term},
};

/// The representation of a literal as an atom paired with a boolean.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

impl Literal {
    /// A literal, specified by pairing an atom with a boolean.
    pub fn new(atom: Atom, polarity: bool) -> Self {
        Literal { atom, polarity }
    }

    /// A positive literal from a predicate and terms.
    pub fn positive(predicate: impl Into<String>, terms: Vec<Term>) -> Self {
        Literal::new(Atom::new(predicate, terms), true)
    }

    /// A negative literal from a predicate and terms.
    pub fn negative(predicate: impl Into<String>, terms: Vec<Term>) -> Self {
        Literal::new(Atom::new(predicate, terms), false)
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            atom: self.atom.clone(),
            polarity: !self.polarity,
        }
    }

    pub fn atom(&self) -> &Atom {
        &self.atom
    }

    pub fn polarity(&self) -> bool {
        self.polarity
    }

    pub fn predicate(&self) -> &str {
        self.atom.predicate()
    }

    /// True if the literals have the same atom and opposite polarity.
    pub fn is_complement_of(&self, other: &Literal) -> bool {
        self.polarity != other.polarity && self.atom == other.atom
    }

    /// True if the literals have opposite polarity and are the same proposition, with respect to the given comparison.
    pub fn opposes(&self, other: &Literal, comparison: PropositionComparison) -> bool {
        self.polarity != other.polarity && comparison.same_proposition(&self.atom, &other.atom)
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "~{}", self.atom),
        }
    }
}

impl serde::Serialize for Literal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Literal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse()
            .map_err(|e| serde::de::Error::custom(format!("{e:?} in literal '{text}'")))
    }
}

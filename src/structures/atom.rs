/*!
An atom, aka. a (ground) proposition.

Atoms are a predicate applied to a sequence of terms, e.g. `At(A)` or `On(B, Table)`.
An atom with no terms is written without parentheses, e.g. `HandEmpty`.

Two atoms are the same atom exactly when their predicates and terms agree, in order.

```rust
# use graphplan::structures::atom::Atom;
let on = Atom::new("On", vec!["B".to_string(), "Table".to_string()]);
assert_eq!(on.to_string(), "On(B, Table)");
assert_eq!(Atom::new("HandEmpty", vec![]).to_string(), "HandEmpty");
```

# Notes
- All terms are constants, as action schemas in a planning graph are ground.
*/

/// A term of an atom.
pub type Term = String;

/// A predicate applied to terms.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom {
    predicate: String,
    terms: Vec<Term>,
}

impl Atom {
    pub fn new(predicate: impl Into<String>, terms: Vec<Term>) -> Self {
        Atom {
            predicate: predicate.into(),
            terms,
        }
    }

    /// The (symbolic) name of the predicate.
    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.terms.is_empty() {
            true => write!(f, "{}", self.predicate),
            false => write!(f, "{}({})", self.predicate, self.terms.join(", ")),
        }
    }
}

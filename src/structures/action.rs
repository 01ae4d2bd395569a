/*!
Ground action schemas, aka. operators.

An action schema has a name, an ordered collection of precondition literals, and an ordered collection of effect literals.
The polarity of an effect partitions effects into *positive* effects (adds) and *negative* effects (deletes).

```rust
# use graphplan::structures::{action::ActionSchema, literal::Literal};
let at_a: Literal = "At(A)".parse().unwrap();
let at_b: Literal = "At(B)".parse().unwrap();

let move_a_b = ActionSchema::new("Move(A, B)", vec![at_a.clone()], vec![at_b.clone(), at_a.negate()]);

assert_eq!(move_a_b.positive_effects(), &[at_b.clone()]);
assert_eq!(move_a_b.negative_effects(), &[at_a.negate()]);
assert_eq!(move_a_b.effects().count(), 2);
```

# Persistence

For each literal *L* at a proposition level there is a persistence (no-op) action, with *L* as its only precondition and *L* as its only effect.
Persistence actions are never supplied by a problem, and are instead synthesised by a [level](crate::level).
*/

use crate::structures::literal::Literal;

/// The name given to each persistence action.
pub const NO_OP: &str = "No-op";

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "SchemaRepr", into = "SchemaRepr")]
pub struct ActionSchema {
    name: String,
    preconditions: Vec<Literal>,
    positive_effects: Vec<Literal>,
    negative_effects: Vec<Literal>,
}

impl ActionSchema {
    /// An action schema, with effects partitioned by polarity.
    ///
    /// Duplicate preconditions (and duplicate effects) are dropped, keeping the first occurrence.
    pub fn new(name: impl Into<String>, preconditions: Vec<Literal>, effects: Vec<Literal>) -> Self {
        let mut the_schema = ActionSchema {
            name: name.into(),
            preconditions: Vec::with_capacity(preconditions.len()),
            positive_effects: Vec::default(),
            negative_effects: Vec::default(),
        };

        for precondition in preconditions {
            if !the_schema.preconditions.contains(&precondition) {
                the_schema.preconditions.push(precondition);
            }
        }

        for effect in effects {
            let partition = match effect.polarity() {
                true => &mut the_schema.positive_effects,
                false => &mut the_schema.negative_effects,
            };
            if !partition.contains(&effect) {
                partition.push(effect);
            }
        }

        the_schema
    }

    /// The persistence action for a literal.
    pub fn persistence(literal: Literal) -> Self {
        ActionSchema::new(NO_OP, vec![literal.clone()], vec![literal])
    }

    pub fn is_persistence(&self) -> bool {
        self.name == NO_OP
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn preconditions(&self) -> &[Literal] {
        &self.preconditions
    }

    pub fn positive_effects(&self) -> &[Literal] {
        &self.positive_effects
    }

    pub fn negative_effects(&self) -> &[Literal] {
        &self.negative_effects
    }

    /// The positive effects followed by the negative effects.
    pub fn effects(&self) -> impl Iterator<Item = &Literal> {
        self.positive_effects.iter().chain(self.negative_effects.iter())
    }

    /// True if every precondition of the action satisfies `is_present`.
    ///
    /// An action without preconditions is always applicable.
    pub fn is_applicable_in(&self, is_present: impl Fn(&Literal) -> bool) -> bool {
        self.preconditions.iter().all(|precondition| is_present(precondition))
    }
}

impl std::fmt::Display for ActionSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.is_persistence() {
            true => match self.preconditions.first() {
                Some(literal) => write!(f, "{NO_OP}[{literal}]"),
                None => write!(f, "{NO_OP}"),
            },
            false => write!(f, "{}", self.name),
        }
    }
}

/// The (de)serialized form of a schema, where effects are a single list.
#[derive(serde::Serialize, serde::Deserialize)]
struct SchemaRepr {
    name: String,
    #[serde(default)]
    preconditions: Vec<Literal>,
    #[serde(default)]
    effects: Vec<Literal>,
}

impl From<SchemaRepr> for ActionSchema {
    fn from(repr: SchemaRepr) -> Self {
        ActionSchema::new(repr.name, repr.preconditions, repr.effects)
    }
}

impl From<ActionSchema> for SchemaRepr {
    fn from(schema: ActionSchema) -> Self {
        let effects = schema.effects().cloned().collect();
        SchemaRepr {
            name: schema.name,
            preconditions: schema.preconditions,
            effects,
        }
    }
}

#[cfg(test)]
mod action_tests {
    use super::*;

    fn lit(text: &str) -> Literal {
        text.parse().expect("bad literal")
    }

    #[test]
    fn partition_and_order() {
        let action = ActionSchema::new(
            "Paint",
            vec![lit("Has(Brush)"), lit("Has(Brush)")],
            vec![lit("~Clean(Brush)"), lit("Painted(Wall)"), lit("Wet(Wall)")],
        );

        assert_eq!(action.preconditions(), &[lit("Has(Brush)")]);
        assert_eq!(
            action.effects().cloned().collect::<Vec<_>>(),
            vec![lit("Painted(Wall)"), lit("Wet(Wall)"), lit("~Clean(Brush)")]
        );
    }

    #[test]
    fn persistence() {
        let no_op = ActionSchema::persistence(lit("At(A)"));
        assert!(no_op.is_persistence());
        assert_eq!(no_op.preconditions(), &[lit("At(A)")]);
        assert_eq!(no_op.positive_effects(), &[lit("At(A)")]);
        assert_eq!(no_op.to_string(), "No-op[At(A)]");

        assert_ne!(no_op, ActionSchema::persistence(lit("At(B)")));
    }

    #[test]
    fn applicability() {
        let action = ActionSchema::new("Go", vec![lit("At(A)"), lit("Fuel")], vec![lit("At(B)")]);
        let some = [lit("At(A)")];
        let all = [lit("Fuel"), lit("At(A)")];

        assert!(!action.is_applicable_in(|l| some.contains(l)));
        assert!(action.is_applicable_in(|l| all.contains(l)));

        let free = ActionSchema::new("Wait", vec![], vec![]);
        assert!(free.is_applicable_in(|_| false));
    }
}

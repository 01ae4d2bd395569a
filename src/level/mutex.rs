/*!
Mutual exclusion (mutex) between members of a level.

Mutex is computed once for each unordered pair of distinct members of a level, and is recorded in both directions.
Mutex is never inherited by a level, though mutex at the previous level is used to determine mutex at a level.

The root level has no previous level, and so has no mutex pairs.

# Proposition levels

Two literals *P* and *Q* are mutex if:
1. [Negation](MutexRule::Negation): *P* and *Q* are the same proposition, with opposite polarity.\
   In addition, when [configured](crate::config::Config::negation_self_mutex), *Q* is recorded as mutex with itself.
2. [Inconsistent support](MutexRule::InconsistentSupport): each action which produced *P* is mutex with each action which produced *Q*.\
   That is, there is no way to achieve both *P* and *Q* with a pair of actions which are not mutex.
   A literal with no producing action (e.g. an [extra literal](super::extra)) is vacuously mutex with every other literal by this rule.

# Action levels

Two actions *A* and *B* are mutex if:
1. [Inconsistent effects](MutexRule::InconsistentEffects): some positive effect of one is the same proposition as some negative effect of the other.
2. [Interference](MutexRule::Interference): some effect of one is the negation of some precondition of the other.
3. [Competing needs](MutexRule::CompetingNeeds): some precondition of *A* is mutex with some precondition of *B* at the previous level.

Rules are checked in order, and only the first rule to apply is noted in the logs.

Whether two literals are 'the same proposition' depends on the [comparison](crate::config::PropositionComparison) configured.
By default only predicates are compared, so `At(B)` and `~At(A)` are mutex by negation.
*/

use crate::{
    config::{Config, PropositionComparison},
    level::{relate, Level, Relation},
    misc::log::targets::{self},
    structures::{
        action::ActionSchema,
        node::{GraphNode, LevelKind, NodeKind},
    },
    types::err::{self},
};

/// The rule by which a pair of members was found to be mutex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutexRule {
    Negation,
    InconsistentSupport,
    InconsistentEffects,
    Interference,
    CompetingNeeds,
}

impl std::fmt::Display for MutexRule {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Negation => write!(f, "negation"),
            Self::InconsistentSupport => write!(f, "inconsistent support"),
            Self::InconsistentEffects => write!(f, "inconsistent effects"),
            Self::Interference => write!(f, "interference"),
            Self::CompetingNeeds => write!(f, "competing needs"),
        }
    }
}

/// Records `a` and `b` as mutex, in both directions.
fn mark(mutexes: &mut Relation, a: &GraphNode, b: &GraphNode) {
    relate(mutexes, a, b.clone());
    relate(mutexes, b, a.clone());
}

/// True if some positive effect of `a` is the same proposition as some negative effect of `b`.
pub fn inconsistent_effects(a: &ActionSchema, b: &ActionSchema, comparison: PropositionComparison) -> bool {
    a.positive_effects().iter().any(|positive| {
        b.negative_effects()
            .iter()
            .any(|negative| positive.opposes(negative, comparison))
    })
}

/// True if some effect of `a` is the negation of some precondition of `b`.
pub fn interferes(a: &ActionSchema, b: &ActionSchema, comparison: PropositionComparison) -> bool {
    a.effects().any(|effect| {
        b.preconditions()
            .iter()
            .any(|precondition| effect.opposes(precondition, comparison))
    })
}

impl Level {
    /// The mutex relation of the level, given the level it was built from.
    pub(super) fn mutex_relation(
        &self,
        previous: Option<&Level>,
        config: &Config,
    ) -> Result<Relation, err::ErrorKind> {
        let mut mutexes: Relation = self
            .objects
            .iter()
            .map(|node| (node.clone(), Vec::default()))
            .collect();

        let Some(previous) = previous else {
            return Ok(mutexes);
        };

        for (i, first) in self.objects.iter().enumerate() {
            for second in &self.objects[i + 1..] {
                let rule = match (first, second) {
                    (GraphNode::Literal(p), GraphNode::Literal(q)) => {
                        if p.opposes(q, config.comparison.value) {
                            if config.negation_self_mutex.value {
                                relate(&mut mutexes, second, second.clone());
                            }
                            Some(MutexRule::Negation)
                        } else if self.inconsistent_support(first, second, previous)? {
                            Some(MutexRule::InconsistentSupport)
                        } else {
                            None
                        }
                    }

                    (GraphNode::Action(a), GraphNode::Action(b)) => {
                        let comparison = config.comparison.value;
                        if inconsistent_effects(a, b, comparison) || inconsistent_effects(b, a, comparison) {
                            Some(MutexRule::InconsistentEffects)
                        } else if interferes(a, b, comparison) || interferes(b, a, comparison) {
                            Some(MutexRule::Interference)
                        } else if competing_needs(a, b, previous)? {
                            Some(MutexRule::CompetingNeeds)
                        } else {
                            None
                        }
                    }

                    (GraphNode::Literal(_), GraphNode::Action(_)) | (GraphNode::Action(_), GraphNode::Literal(_)) => {
                        return Err(err::ErrorKind::from(err::LevelError::KindMismatch {
                            expected: self.kind,
                            found: match self.kind {
                                LevelKind::Proposition => NodeKind::Action,
                                LevelKind::Action => NodeKind::Literal,
                            },
                        }));
                    }
                };

                if let Some(rule) = rule {
                    log::trace!(target: targets::MUTEX, "Level {}: {first} # {second} by {rule}", self.index);
                    mark(&mut mutexes, first, second);
                }
            }
        }

        Ok(mutexes)
    }

    /// True if every action producing `first` is mutex with every action producing `second`, at the previous level.
    fn inconsistent_support(
        &self,
        first: &GraphNode,
        second: &GraphNode,
        previous: &Level,
    ) -> Result<bool, err::LevelError> {
        let second_support = self.predecessors_of(second)?;

        for first_action in self.predecessors_of(first)? {
            let first_mutexes = previous.mutexes_of(first_action)?;
            if second_support.iter().any(|second_action| !first_mutexes.contains(second_action)) {
                return Ok(false);
            }
        }

        Ok(true)
    }
}

/// True if some precondition of `a` is mutex with some precondition of `b`, at the previous level.
fn competing_needs(a: &ActionSchema, b: &ActionSchema, previous: &Level) -> Result<bool, err::LevelError> {
    for a_precondition in a.preconditions() {
        let a_mutexes = previous.mutexes_of(&GraphNode::Literal(a_precondition.clone()))?;
        if a_mutexes.is_empty() {
            continue;
        }

        for b_precondition in b.preconditions() {
            if a_mutexes.contains(&GraphNode::Literal(b_precondition.clone())) {
                return Ok(true);
            }
        }
    }

    Ok(false)
}

#[cfg(test)]
mod rule_tests {
    use crate::structures::literal::Literal;

    use super::*;

    fn lit(text: &str) -> Literal {
        text.parse().expect("bad literal")
    }

    #[test]
    fn effects_one_way() {
        let paint = ActionSchema::new("Paint", vec![], vec![lit("Painted")]);
        let strip = ActionSchema::new("Strip", vec![], vec![lit("~Painted")]);

        assert!(inconsistent_effects(&paint, &strip, PropositionComparison::Atom));
        assert!(!inconsistent_effects(&strip, &paint, PropositionComparison::Atom));
    }

    #[test]
    fn effects_by_predicate() {
        let at_b = ActionSchema::new("ToB", vec![], vec![lit("At(B)")]);
        let leave_a = ActionSchema::new("LeaveA", vec![], vec![lit("~At(A)")]);

        assert!(!inconsistent_effects(&at_b, &leave_a, PropositionComparison::Atom));
        assert!(inconsistent_effects(&at_b, &leave_a, PropositionComparison::Predicate));
    }

    #[test]
    fn interference() {
        let move_a_b = ActionSchema::new("Move", vec![lit("At(A)")], vec![lit("At(B)"), lit("~At(A)")]);
        let no_op = ActionSchema::persistence(lit("At(A)"));

        assert!(interferes(&move_a_b, &no_op, PropositionComparison::Atom));
        assert!(!interferes(&no_op, &move_a_b, PropositionComparison::Atom));
    }
}

use crate::structures::atom::Atom;

/// How two atoms are judged to be the same proposition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PropositionComparison {
    /// Same predicate and same terms
    Atom,
    #[default]
    /// Same predicate, regardless of terms
    Predicate,
}

impl PropositionComparison {
    pub const MIN: PropositionComparison = PropositionComparison::Atom;
    pub const MAX: PropositionComparison = PropositionComparison::Predicate;

    pub fn same_proposition(&self, a: &Atom, b: &Atom) -> bool {
        match self {
            Self::Atom => a == b,
            Self::Predicate => a.predicate() == b.predicate(),
        }
    }
}

impl std::fmt::Display for PropositionComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom => write!(f, "atom"),
            Self::Predicate => write!(f, "predicate"),
        }
    }
}

#[cfg(test)]
mod comparison_tests {
    use super::*;

    #[test]
    fn predicate_by_default() {
        let at_a = Atom::new("At", vec!["A".to_string()]);
        let at_b = Atom::new("At", vec!["B".to_string()]);

        assert_eq!(crate::config::Config::default().comparison.value, PropositionComparison::Predicate);
        assert!(PropositionComparison::default().same_proposition(&at_a, &at_b));
        assert!(!PropositionComparison::Atom.same_proposition(&at_a, &at_b));
    }
}

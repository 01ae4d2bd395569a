use crate::{config::PropositionComparison, level::LevelIndex};

pub const COMPARISON: PropositionComparison = PropositionComparison::Predicate;
pub const NEGATION_SELF_MUTEX: bool = true;
pub const LEVEL_LIMIT: LevelIndex = 64;

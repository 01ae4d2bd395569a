/*!
Configuration of a planning graph.

All configuration for a [graph](crate::graph::PlanningGraph) is contained within [Config].
Levels read the configuration when built, and when [extra literals](crate::level::Level::add_literals) are added.

Each option is a [ConfigOption], which pairs a value with the bounds it may be set within.
Defaults are found in [defaults].
*/

pub mod defaults;

mod config_option;
pub use config_option::ConfigOption;

mod comparison;
pub use comparison::PropositionComparison;

use crate::level::LevelIndex;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// How literals are judged to be of the same proposition when checking for negation, inconsistent effects, and interference.
    pub comparison: ConfigOption<PropositionComparison>,

    /// Whether a negation mutex also records the second literal as mutex with itself.
    ///
    /// A literal which is mutex with itself makes any two actions requiring the literal competing needs mutex at the next level.
    pub negation_self_mutex: ConfigOption<bool>,

    /// The most levels a graph will build when expanding until stable.
    pub level_limit: ConfigOption<LevelIndex>,
}

impl Default for Config {
    fn default() -> Self {
        use defaults::*;
        Config {
            comparison: ConfigOption {
                name: "comparison",
                min: PropositionComparison::MIN,
                max: PropositionComparison::MAX,
                value: COMPARISON,
            },

            negation_self_mutex: ConfigOption {
                name: "negation_self_mutex",
                min: false,
                max: true,
                value: NEGATION_SELF_MUTEX,
            },

            level_limit: ConfigOption {
                name: "level_limit",
                min: 1,
                max: LevelIndex::MAX,
                value: LEVEL_LIMIT,
            },
        }
    }
}

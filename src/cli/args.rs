use clap::Parser;

use graphplan::{
    config::{Config, PropositionComparison},
    level::LevelIndex,
    types::err::{self},
};

/// Builds the planning graph of a STRIPS problem
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The JSON problem file to read
    #[arg(required_unless_present = "markdown_help")]
    pub problem: Option<std::path::PathBuf>,

    /// The most levels to build
    #[arg(short, long, default_value_t = graphplan::config::defaults::LEVEL_LIMIT)]
    pub levels: LevelIndex,

    /// How literals are judged to be the same proposition
    #[arg(short, long, default_value_t, value_enum)]
    pub comparison: PropositionComparison,

    /// Do not record a literal as mutex with itself when found mutex by negation
    #[arg(long, default_value_t = false)]
    pub no_self_mutex: bool,

    /// Extra literals to add to the last proposition level, e.g. "At(A), ~At(B)"
    #[arg(short, long)]
    pub extra: Option<String>,

    /// Display the graph in DOT format
    #[arg(long, default_value_t = false)]
    pub dot: bool,

    /// Display levels as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Print help as markdown
    #[arg(long, hide = true, default_value_t = false)]
    pub markdown_help: bool,
}

impl Args {
    pub fn config(&self) -> Result<Config, err::ErrorKind> {
        let mut the_config = Config::default();
        the_config.level_limit.set(self.levels)?;
        the_config.comparison.set(self.comparison)?;
        the_config.negation_self_mutex.set(!self.no_self_mutex)?;
        Ok(the_config)
    }
}

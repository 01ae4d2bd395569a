use graphplan::{
    graph::{Expansion, PlanningGraph},
    problem::Problem,
    types::err::{self},
};

/// Expands the graph until stable, and if given, adds extra literals to the last proposition level.
///
/// Levels after the level with extra literals are dropped, and so the graph is expanded until stable once more.
pub fn expand_with_extra<P: Problem>(
    graph: &mut PlanningGraph<P>,
    extra: Option<&str>,
) -> Result<Expansion, err::ErrorKind> {
    let expansion = graph.expand_until_stable()?;

    let Some(extra) = extra else {
        return Ok(expansion);
    };

    let index = graph.last_proposition_level().index();
    graph.add_literals_str(index, extra)?;
    graph.expand_until_stable()
}

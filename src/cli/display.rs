use crossterm::style::Stylize;

use graphplan::{
    graph::{Expansion, PlanningGraph},
    level::{Level, LevelIndex},
    problem::Problem,
    structures::node::LevelKind,
};

/// A level, as displayed with `--json`.
#[derive(serde::Serialize)]
pub struct LevelRecord {
    index: LevelIndex,
    kind: LevelKind,
    objects: Vec<String>,
    mutexes: Vec<(String, String)>,
}

impl From<&Level> for LevelRecord {
    fn from(level: &Level) -> Self {
        LevelRecord {
            index: level.index(),
            kind: level.kind(),
            objects: level.objects().iter().map(|node| node.to_string()).collect(),
            mutexes: level
                .mutex_pairs()
                .into_iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        }
    }
}

pub fn summary(expansion: Expansion) -> String {
    match expansion {
        Expansion::GoalsReachable(index) => format!("s GOAL REACHABLE AT LEVEL {index}"),
        Expansion::LeveledOff(index) => format!("s LEVELED OFF AT LEVEL {index}"),
        Expansion::LimitReached(index) => format!("s LEVEL LIMIT REACHED AT LEVEL {index}"),
    }
}

pub fn print_levels<P: Problem>(graph: &PlanningGraph<P>) {
    for level in graph.levels() {
        let header = format!("c {} level {}", level.kind(), level.index());
        println!("{}", header.bold());

        for node in level.objects() {
            match level.kind() {
                LevelKind::Proposition => println!("c   {}", node.to_string().cyan()),
                LevelKind::Action => println!("c   {}", node.to_string().yellow()),
            }
        }

        for (a, b) in level.mutex_pairs() {
            println!("c   {} {} {}", a, "#".red(), b);
        }
    }
}

pub fn print_json<P: Problem>(graph: &PlanningGraph<P>) -> Result<(), serde_json::Error> {
    let records = graph.levels().iter().map(LevelRecord::from).collect::<Vec<_>>();
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

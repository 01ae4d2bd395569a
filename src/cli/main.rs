#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::{fs::File, io::BufReader};

use clap::Parser;

use graphplan::{
    graph::{Expansion, PlanningGraph},
    problem::StripsProblem,
};

mod args;
mod display;
mod expand;

use args::Args;

/// Exit code when the goal is reachable.
const REACHABLE: i32 = 0;
/// Exit code when the goal is not (yet) reachable.
const UNREACHABLE: i32 = 20;
/// Exit code on bad input.
const INPUT: i32 = 1;

#[cfg(feature = "log")]
fn init_logging() {
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Root},
        encode::pattern::PatternEncoder,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();

    let config = match log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(log::LevelFilter::Trace))
    {
        Ok(config) => config,
        Err(e) => {
            println!("c Failed to configure logging: {e}");
            return;
        }
    };

    if let Err(e) = log4rs::init_config(config) {
        println!("c Failed to start logging: {e}");
    }
}

fn main() {
    #[cfg(feature = "log")]
    init_logging();

    let args = Args::parse();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Args>();
        return;
    }

    let config = match args.config() {
        Ok(config) => config,
        Err(e) => {
            println!("c {e}");
            std::process::exit(INPUT);
        }
    };

    let Some(path) = &args.problem else {
        println!("c Path to problem required");
        std::process::exit(INPUT);
    };

    println!("c Reading problem from {path:?}");

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            println!("c Failed to open problem file: {e}");
            std::process::exit(INPUT);
        }
    };

    let problem = match StripsProblem::from_json_reader(BufReader::new(file)) {
        Ok(problem) => problem,
        Err(e) => {
            println!("c {e}");
            std::process::exit(INPUT);
        }
    };

    let mut graph = match PlanningGraph::new(problem, config) {
        Ok(graph) => graph,
        Err(e) => {
            println!("c Graph error: {e}");
            std::process::exit(INPUT);
        }
    };

    let expansion = match expand::expand_with_extra(&mut graph, args.extra.as_deref()) {
        Ok(expansion) => expansion,
        Err(e) => {
            println!("c {e}");
            std::process::exit(INPUT);
        }
    };

    if args.json {
        if let Err(e) = display::print_json(&graph) {
            println!("c Failed to write JSON: {e}");
        }
    } else if args.dot {
        println!("{}", graph.to_dot());
    } else {
        display::print_levels(&graph);
    }

    println!("{}", display::summary(expansion));

    match expansion {
        Expansion::GoalsReachable(_) => std::process::exit(REACHABLE),
        Expansion::LeveledOff(_) | Expansion::LimitReached(_) => std::process::exit(UNREACHABLE),
    }
}

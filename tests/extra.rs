use graphplan::{
    config::Config,
    graph::PlanningGraph,
    level::Level,
    problem::StripsProblem,
    structures::{action::ActionSchema, literal::Literal, node::GraphNode, node::LevelKind, node::NodeKind},
    types::err,
};

fn lit(text: &str) -> Literal {
    text.parse().expect("bad literal")
}

fn node(text: &str) -> GraphNode {
    GraphNode::Literal(lit(text))
}

fn move_problem() -> StripsProblem {
    let move_a_b = ActionSchema::new("Move(A, B)", vec![lit("At(A)")], vec![lit("At(B)"), lit("~At(A)")]);
    StripsProblem::new(vec![lit("At(A)")], vec![move_a_b], vec![lit("At(B)")])
}

fn first_levels(problem: &StripsProblem, config: &Config) -> (Level, Level, Level) {
    let zero = Level::root(problem, config).unwrap();
    let one = Level::from_previous(&zero, problem, config).unwrap();
    let two = Level::from_previous(&one, problem, config).unwrap();
    (zero, one, two)
}

mod on_level {
    use super::*;

    #[test]
    fn idempotent() {
        let problem = move_problem();
        let config = Config::default();
        let (_, one, mut two) = first_levels(&problem, &config);

        let before = two.clone();
        let present = vec![lit("At(B)"), lit("At(A)")];
        assert_eq!(two.add_literals(present, Some(&one), &problem, &config), Ok(0));

        assert_eq!(two, before);
        assert_eq!(two.objects(), before.objects());
    }

    #[test]
    fn unsupported_literal() {
        let problem = move_problem();
        let config = Config::default();
        let (_, one, mut two) = first_levels(&problem, &config);
        let before = two.clone();

        assert_eq!(two.add_literals(vec![lit("At(C)")], Some(&one), &problem, &config), Ok(1));
        assert!(two.predecessors_of(&node("At(C)")).unwrap().is_empty());

        for other in ["At(B)", "~At(A)", "At(A)"] {
            assert_eq!(two.is_mutex(&node("At(C)"), &node(other)), Ok(true));
        }

        for a in before.objects() {
            for b in before.objects() {
                assert_eq!(two.is_mutex(a, b), before.is_mutex(a, b), "{a} # {b}");
            }
        }
    }

    #[test]
    fn enables_actions() {
        let leave = ActionSchema::new("Leave(C)", vec![lit("At(C)")], vec![lit("~At(C)")]);
        let problem = StripsProblem::new(vec![lit("At(A)")], vec![leave.clone()], vec![]);
        let config = Config::default();

        let mut zero = Level::root(&problem, &config).unwrap();
        assert_eq!(zero.add_literals_str("At(C)", None, &problem, &config), Ok(1));
        assert!(zero.successors_of(&node("At(C)")).unwrap().contains(&GraphNode::from(leave)));
        // Without a previous level there is no mutex.
        assert!(zero.mutex_pairs().is_empty());
    }

    #[test]
    fn action_level() {
        let problem = move_problem();
        let config = Config::default();
        let (zero, mut one, _) = first_levels(&problem, &config);

        assert_eq!(
            one.add_literals(vec![lit("At(C)")], Some(&zero), &problem, &config),
            Err(err::ErrorKind::Level(err::LevelError::KindMismatch {
                expected: LevelKind::Action,
                found: NodeKind::Literal
            }))
        );
        assert_eq!(one.objects().len(), 2);
    }

    #[test]
    fn wrong_previous() {
        let problem = move_problem();
        let config = Config::default();
        let (zero, _, mut two) = first_levels(&problem, &config);

        assert_eq!(
            two.add_literals(vec![lit("At(C)")], Some(&zero), &problem, &config),
            Err(err::ErrorKind::Level(err::LevelError::PreviousMismatch {
                expected: Some(1),
                found: Some(0)
            }))
        );
        assert!(!two.contains(&node("At(C)")));
    }

    #[test]
    fn bad_text() {
        let problem = move_problem();
        let config = Config::default();
        let mut zero = Level::root(&problem, &config).unwrap();

        assert!(matches!(
            zero.add_literals_str("At(C", None, &problem, &config),
            Err(err::ErrorKind::Parse(_))
        ));
        assert_eq!(zero.objects().len(), 1);
    }
}

mod on_graph {
    use super::*;

    #[test]
    fn drops_later_levels() {
        let mut graph = PlanningGraph::new(move_problem(), Config::default()).unwrap();
        for _ in 0..4 {
            graph.expand().unwrap();
        }

        assert_eq!(graph.add_literals_str(2, "At(C)"), Ok(1));
        assert_eq!(graph.levels().len(), 3);
        assert!(graph.last_level().contains(&node("At(C)")));

        graph.expand().unwrap();
        let no_op = GraphNode::from(ActionSchema::persistence(lit("At(C)")));
        assert!(graph.last_level().contains(&no_op));
    }

    #[test]
    fn missing_level() {
        let mut graph = PlanningGraph::new(move_problem(), Config::default()).unwrap();
        assert_eq!(
            graph.add_literals(4, vec![lit("At(C)")]),
            Err(err::ErrorKind::Graph(err::GraphError::MissingLevel(4)))
        );
    }

    #[test]
    fn root() {
        let mut graph = PlanningGraph::new(move_problem(), Config::default()).unwrap();
        assert_eq!(graph.add_literals(0, vec![lit("At(B)")]), Ok(1));
        assert!(graph.goals_reachable());
    }
}

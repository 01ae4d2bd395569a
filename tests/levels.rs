use graphplan::{
    config::{Config, PropositionComparison},
    level::Level,
    problem::StripsProblem,
    structures::{action::ActionSchema, literal::Literal, node::GraphNode, node::LevelKind},
};

fn lit(text: &str) -> Literal {
    text.parse().expect("bad literal")
}

fn node(text: &str) -> GraphNode {
    GraphNode::Literal(lit(text))
}

fn move_a_b() -> ActionSchema {
    ActionSchema::new("Move(A, B)", vec![lit("At(A)")], vec![lit("At(B)"), lit("~At(A)")])
}

fn move_problem() -> StripsProblem {
    StripsProblem::new(vec![lit("At(A)")], vec![move_a_b()], vec![lit("At(B)")])
}

mod root {
    use super::*;

    #[test]
    fn initial_state() {
        let problem = move_problem();
        let zero = Level::root(&problem, &Config::default()).unwrap();

        assert_eq!(zero.index(), 0);
        assert_eq!(zero.kind(), LevelKind::Proposition);
        assert_eq!(zero.previous_index(), None);
        assert_eq!(zero.objects(), &[node("At(A)")]);
        assert!(zero.predecessors_of(&node("At(A)")).unwrap().is_empty());
        assert!(zero.mutex_pairs().is_empty());
    }

    #[test]
    fn successors_and_persistence() {
        let problem = move_problem();
        let zero = Level::root(&problem, &Config::default()).unwrap();

        let no_op = ActionSchema::persistence(lit("At(A)"));
        assert_eq!(
            zero.successors_of(&node("At(A)")).unwrap(),
            &[GraphNode::from(move_a_b()), GraphNode::from(no_op)]
        );
    }

    #[test]
    fn inapplicable_actions() {
        let fly = ActionSchema::new("Fly", vec![lit("Wings")], vec![lit("Airborne")]);
        let problem = StripsProblem::new(vec![lit("At(A)")], vec![fly], vec![]);
        let zero = Level::root(&problem, &Config::default()).unwrap();

        assert_eq!(zero.successors_of(&node("At(A)")).unwrap().len(), 1);
        let one = Level::from_previous(&zero, &problem, &Config::default()).unwrap();
        assert_eq!(one.actions().count(), 1);
        assert!(one.actions().all(ActionSchema::is_persistence));
    }

    #[test]
    fn no_preconditions() {
        let wave = ActionSchema::new("Wave", vec![], vec![lit("Waved")]);
        let problem = StripsProblem::new(vec![lit("P"), lit("Q")], vec![wave.clone()], vec![]);
        let zero = Level::root(&problem, &Config::default()).unwrap();

        for literal in zero.objects() {
            assert!(zero.successors_of(literal).unwrap().contains(&GraphNode::from(wave.clone())));
        }

        let one = Level::from_previous(&zero, &problem, &Config::default()).unwrap();
        let wave = GraphNode::from(wave);
        assert_eq!(one.predecessors_of(&wave).unwrap(), &[node("P"), node("Q")]);
    }

    #[test]
    fn no_preconditions_from_empty_state() {
        let wave = ActionSchema::new("Wave", vec![], vec![lit("Waved")]);
        let problem = StripsProblem::new(vec![], vec![wave.clone()], vec![]);
        let config = Config::default();

        let zero = Level::root(&problem, &config).unwrap();
        assert!(zero.is_empty());

        let one = Level::from_previous(&zero, &problem, &config).unwrap();
        let wave = GraphNode::from(wave);
        assert_eq!(one.objects(), &[wave.clone()]);
        assert!(one.predecessors_of(&wave).unwrap().is_empty());
        assert_eq!(one.successors_of(&wave).unwrap(), &[node("Waved")]);

        let two = Level::from_previous(&one, &problem, &config).unwrap();
        assert_eq!(two.objects(), &[node("Waved")]);
        assert_eq!(two.predecessors_of(&node("Waved")).unwrap(), &[wave]);
    }
}

mod derived {
    use super::*;

    #[test]
    fn move_scenario() {
        let problem = move_problem();
        let config = Config::default();

        let zero = Level::root(&problem, &config).unwrap();
        let one = Level::from_previous(&zero, &problem, &config).unwrap();
        let two = Level::from_previous(&one, &problem, &config).unwrap();

        let move_node = GraphNode::from(move_a_b());
        let no_op = GraphNode::from(ActionSchema::persistence(lit("At(A)")));

        assert_eq!(one.kind(), LevelKind::Action);
        assert_eq!(one.previous_index(), Some(0));
        assert_eq!(one.objects(), &[move_node.clone(), no_op.clone()]);
        assert_eq!(one.is_mutex(&move_node, &no_op), Ok(true));
        assert_eq!(one.is_mutex(&no_op, &move_node), Ok(true));

        assert_eq!(two.kind(), LevelKind::Proposition);
        assert_eq!(two.objects(), &[node("At(B)"), node("~At(A)"), node("At(A)")]);
        assert_eq!(two.predecessors_of(&node("At(B)")).unwrap(), &[move_node.clone()]);
        assert_eq!(two.predecessors_of(&node("At(A)")).unwrap(), &[no_op]);

        assert_eq!(two.is_mutex(&node("At(A)"), &node("At(B)")), Ok(true));
        assert_eq!(two.is_mutex(&node("At(A)"), &node("~At(A)")), Ok(true));
        // Both are of the predicate `At`, with opposite polarity.
        assert_eq!(two.is_mutex(&node("At(B)"), &node("~At(A)")), Ok(true));
    }

    #[test]
    fn move_scenario_by_atom() {
        let problem = move_problem();
        let mut config = Config::default();
        config.comparison.set(PropositionComparison::Atom).unwrap();

        let zero = Level::root(&problem, &config).unwrap();
        let one = Level::from_previous(&zero, &problem, &config).unwrap();
        let two = Level::from_previous(&one, &problem, &config).unwrap();

        assert_eq!(two.is_mutex(&node("At(A)"), &node("At(B)")), Ok(true));
        assert_eq!(two.is_mutex(&node("At(A)"), &node("~At(A)")), Ok(true));
        assert_eq!(two.is_mutex(&node("At(B)"), &node("~At(A)")), Ok(false));
    }

    #[test]
    fn shared_supporter() {
        let cook = ActionSchema::new("Cook", vec![lit("Ready")], vec![lit("Fed"), lit("Warm")]);
        let problem = StripsProblem::new(vec![lit("Ready")], vec![cook], vec![]);
        let config = Config::default();

        let zero = Level::root(&problem, &config).unwrap();
        let one = Level::from_previous(&zero, &problem, &config).unwrap();
        let two = Level::from_previous(&one, &problem, &config).unwrap();

        assert!(one.mutex_pairs().is_empty());
        assert_eq!(two.is_mutex(&node("Fed"), &node("Warm")), Ok(false));
        assert_eq!(two.is_mutex(&node("Fed"), &node("Ready")), Ok(false));
        assert!(two.mutex_pairs().is_empty());
    }

    #[test]
    fn build_from_option() {
        let problem = move_problem();
        let config = Config::default();

        let zero = Level::build(None, &problem, &config).unwrap();
        let one = Level::build(Some(&zero), &problem, &config).unwrap();
        assert_eq!(zero, Level::root(&problem, &config).unwrap());
        assert_eq!(one.index(), 1);
    }

    #[test]
    fn dead_end() {
        let problem = StripsProblem::default();
        let config = Config::default();

        let zero = Level::root(&problem, &config).unwrap();
        let one = Level::from_previous(&zero, &problem, &config).unwrap();
        let two = Level::from_previous(&one, &problem, &config).unwrap();

        assert!(zero.is_empty() && one.is_empty() && two.is_empty());
        assert_eq!(one.kind(), LevelKind::Action);
        assert_eq!(two.kind(), LevelKind::Proposition);
    }

    #[test]
    fn equality_ignores_index() {
        let problem = StripsProblem::new(vec![lit("P")], vec![], vec![]);
        let config = Config::default();

        let zero = Level::root(&problem, &config).unwrap();
        let one = Level::from_previous(&zero, &problem, &config).unwrap();
        let two = Level::from_previous(&one, &problem, &config).unwrap();
        let three = Level::from_previous(&two, &problem, &config).unwrap();

        // The root has no predecessors, unlike level two.
        assert_ne!(zero, two);
        assert_eq!(one, three);
    }
}

mod lookup {
    use graphplan::types::err;

    use super::*;

    #[test]
    fn not_a_member() {
        let problem = move_problem();
        let zero = Level::root(&problem, &Config::default()).unwrap();

        let absent = node("At(C)");
        assert_eq!(zero.successors_of(&absent), Err(err::LevelError::NotAMember));
        assert_eq!(zero.predecessors_of(&absent), Err(err::LevelError::NotAMember));
        assert_eq!(zero.mutexes_of(&absent), Err(err::LevelError::NotAMember));
        assert_eq!(zero.is_mutex(&absent, &node("At(A)")), Err(err::LevelError::NotAMember));
        assert_eq!(zero.is_mutex(&node("At(A)"), &absent), Err(err::LevelError::NotAMember));
        assert!(!zero.contains(&absent));
    }

    #[test]
    fn wrong_kind() {
        let problem = move_problem();
        let zero = Level::root(&problem, &Config::default()).unwrap();

        assert!(zero.contains_literal(&lit("At(A)")));
        assert_eq!(zero.actions().count(), 0);
        assert_eq!(
            zero.mutexes_of(&GraphNode::from(move_a_b())),
            Err(err::LevelError::NotAMember)
        );
    }
}

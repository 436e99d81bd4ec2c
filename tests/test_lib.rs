use goap_planner::{
    Action, Beliefs, Condition, ExtractionStrategy, GoapError, Goal, Plan, Planner,
    PlannerConfig, Rejection,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn make_action(name: &str, cost: f32, pre: &[&str], eff: &[&str]) -> Action {
        let mut action = Action::new(name, cost).unwrap();
        for c in pre {
            action = action.with_precondition(*c);
        }
        for c in eff {
            action = action.with_effect(*c);
        }
        action
    }

    fn make_goal(name: &str, priority: f32, desired: &[&str]) -> Goal {
        let mut goal = Goal::new(name, priority).unwrap();
        for c in desired {
            goal = goal.with_desired_effect(*c);
        }
        goal
    }

    /// Replays the plan, checking each action's preconditions against what is
    /// true so far, and returns the final state.
    fn replay(plan: &Plan<'_>, beliefs: &Beliefs) -> Beliefs {
        let mut state = beliefs.clone();
        for action in plan.actions() {
            assert!(
                state.satisfies(&action.preconditions),
                "Precondition not met for action {}",
                action.name
            );
            state.apply_effects(action);
        }
        state
    }

    fn assert_well_formed(plan: &Plan<'_>, beliefs: &Beliefs) {
        let after = replay(plan, beliefs);
        assert!(
            after.satisfies(&plan.goal().desired_effects),
            "Goal {} not achieved by {}",
            plan.goal().name,
            plan
        );

        let mut names = plan.action_names();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), plan.len(), "Action repeated in {}", plan);

        let sum: f32 = plan.actions().iter().map(|a| a.cost).sum();
        assert_eq!(plan.total_cost(), sum);
    }

    /// Dropping the final action must leave the goal unmet.
    fn assert_last_action_needed(plan: &Plan<'_>, beliefs: &Beliefs) {
        let mut prefix = beliefs.clone();
        for action in &plan.actions()[..plan.len() - 1] {
            prefix.apply_effects(action);
        }
        assert!(
            !prefix.satisfies(&plan.goal().desired_effects),
            "Last action of {} is redundant",
            plan
        );
    }

    fn planners() -> Vec<Planner> {
        [ExtractionStrategy::Greedy, ExtractionStrategy::CheapestPath]
            .into_iter()
            .map(|extraction| {
                Planner::with_config(PlannerConfig {
                    extraction,
                    ..PlannerConfig::default()
                })
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_gather_then_eat() {
        let actions = vec![
            make_action("EatMeal", 1.0, &["HasFood"], &["Fed"]),
            make_action("GatherFood", 2.0, &[], &["HasFood"]),
        ];
        let goals = vec![make_goal("Survive", 10.0, &["Fed"])];
        let beliefs = Beliefs::new();

        let plan = Planner::new().plan(&goals, &actions, None, &beliefs).unwrap();
        assert_eq!(plan.action_names(), ["GatherFood", "EatMeal"]);
        assert_eq!(plan.total_cost(), 3.0);
        assert_well_formed(&plan, &beliefs);
    }

    #[test]
    fn test_higher_priority_goal_wins() {
        let actions = vec![
            make_action("Eat", 1.0, &[], &["Fed"]),
            make_action("Walk", 1.0, &[], &["Explored"]),
        ];
        let goals = vec![
            make_goal("ExploreGoal", 5.0, &["Explored"]),
            make_goal("SurviveGoal", 10.0, &["Fed"]),
        ];
        let beliefs = Beliefs::new();

        let plan = Planner::new().plan(&goals, &actions, None, &beliefs).unwrap();
        assert_eq!(plan.goal().name, "SurviveGoal");
        assert_well_formed(&plan, &beliefs);
    }

    #[test]
    fn test_satisfied_goal_is_skipped_for_next_candidate() {
        let actions = vec![
            make_action("Eat", 1.0, &[], &["Fed"]),
            make_action("Walk", 1.0, &[], &["Explored"]),
        ];
        let goals = vec![
            make_goal("SurviveGoal", 10.0, &["Fed"]),
            make_goal("ExploreGoal", 5.0, &["Explored"]),
        ];
        let beliefs: Beliefs = [("Fed", true)].into_iter().collect();

        let plan = Planner::new().plan(&goals, &actions, None, &beliefs).unwrap();
        assert_eq!(plan.goal().name, "ExploreGoal");
        assert_eq!(plan.action_names(), ["Walk"]);
    }

    #[test]
    fn test_satisfied_goal_never_yields_empty_plan() {
        let actions = vec![make_action("Eat", 1.0, &[], &["Fed"])];
        let goals = vec![make_goal("SurviveGoal", 10.0, &["Fed"])];
        let beliefs: Beliefs = [("Fed", true)].into_iter().collect();

        match Planner::new().plan(&goals, &actions, None, &beliefs) {
            Err(GoapError::NoPlanFound(report)) => assert!(report.no_candidates()),
            other => panic!("expected NoPlanFound, got {:?}", other),
        }
    }

    #[test]
    fn test_unreachable_goal_falls_through_to_next() {
        let actions = vec![make_action("Walk", 1.0, &[], &["Explored"])];
        let goals = vec![
            make_goal("SurviveGoal", 10.0, &["Fed"]),
            make_goal("ExploreGoal", 5.0, &["Explored"]),
        ];
        let beliefs = Beliefs::new();

        let plan = Planner::new().plan(&goals, &actions, None, &beliefs).unwrap();
        assert_eq!(plan.goal().name, "ExploreGoal");
    }

    #[test]
    fn test_unreachable_goal_reports_search_failure() {
        let actions = vec![make_action("Walk", 1.0, &[], &["Explored"])];
        let goals = vec![make_goal("SurviveGoal", 10.0, &["Fed"])];

        let err = Planner::new()
            .plan(&goals, &actions, None, &Beliefs::new())
            .unwrap_err();
        match &err {
            GoapError::NoPlanFound(report) => {
                assert_eq!(
                    report.rejection_for("SurviveGoal"),
                    Some(Rejection::SearchFailed)
                );
            }
            other => panic!("expected NoPlanFound, got {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "No valid plan found: tried SurviveGoal (search failed)"
        );
    }

    #[test]
    fn test_cheaper_alternative_is_chosen() {
        let actions = vec![
            make_action("Expensive", 5.0, &[], &["Fed"]),
            make_action("Cheap", 1.0, &[], &["Fed"]),
        ];
        let goals = vec![make_goal("SurviveGoal", 10.0, &["Fed"])];
        let beliefs = Beliefs::new();

        let plan = Planner::new().plan(&goals, &actions, None, &beliefs).unwrap();
        assert_eq!(plan.action_names(), ["Cheap"]);
        assert_eq!(plan.total_cost(), 1.0);
    }

    #[test]
    fn test_equal_priority_prefers_the_other_goal() {
        let actions = vec![
            make_action("Eat", 1.0, &[], &["Fed"]),
            make_action("Sleep", 1.0, &[], &["Rested"]),
        ];
        let goals = vec![
            make_goal("Hunger", 5.0, &["Fed"]),
            make_goal("Fatigue", 5.0, &["Rested"]),
        ];
        let beliefs = Beliefs::new();
        let planner = Planner::new();

        let plan = planner
            .plan(&goals, &actions, Some(&goals[0]), &beliefs)
            .unwrap();
        assert_eq!(plan.goal().name, "Fatigue");

        let plan = planner
            .plan(&goals, &actions, Some(&goals[1]), &beliefs)
            .unwrap();
        assert_eq!(plan.goal().name, "Hunger");
    }

    #[test]
    fn test_last_action_is_not_prunable() {
        let actions = vec![
            make_action("EatMeal", 1.0, &["HasFood"], &["Fed"]),
            make_action("GatherFood", 2.0, &[], &["HasFood"]),
            make_action("Rest", 1.0, &[], &["Rested"]),
        ];
        let goals = vec![make_goal("Survive", 10.0, &["Fed"])];
        let beliefs = Beliefs::new();

        let plan = Planner::new().plan(&goals, &actions, None, &beliefs).unwrap();
        assert!(!plan.action_names().contains(&"Rest"));
        assert_last_action_needed(&plan, &beliefs);
    }

    #[test]
    fn test_overlapping_effects_keep_last_action_needed() {
        let actions = vec![
            make_action("FetchWater", 1.0, &["HasBucket"], &["HasWater"]),
            make_action("Resupply", 3.0, &[], &["HasWater", "HasFood"]),
            make_action("Forage", 5.0, &[], &["HasFood"]),
            make_action("CraftBucket", 10.0, &[], &["HasBucket"]),
        ];
        let goals = vec![make_goal("Stock", 1.0, &["HasWater", "HasFood"])];
        let beliefs = Beliefs::new();

        for planner in planners() {
            let plan = planner.plan(&goals, &actions, None, &beliefs).unwrap();
            assert_well_formed(&plan, &beliefs);
            assert_last_action_needed(&plan, &beliefs);
        }
    }

    #[test]
    fn test_shared_supplier_below_partial_cover() {
        // Camp's only route to water runs through Resupply, which also
        // brings the wood Camp was picked for
        let actions = vec![
            make_action("ChopWood", 1.0, &["HasWater"], &["HasWood"]),
            make_action("Resupply", 2.0, &[], &["HasWater", "HasWood"]),
            make_action("Camp", 1.0, &["HasWood"], &["Camped"]),
        ];
        let goals = vec![make_goal("Night", 1.0, &["Camped", "HasWood"])];
        let beliefs = Beliefs::new();

        for planner in planners() {
            let plan = planner.plan(&goals, &actions, None, &beliefs).unwrap();
            assert_well_formed(&plan, &beliefs);
            assert_last_action_needed(&plan, &beliefs);
        }
    }

    #[test]
    fn test_preconditions_already_true_shorten_the_plan() {
        let actions = vec![
            make_action("EatMeal", 1.0, &["HasFood"], &["Fed"]),
            make_action("GatherFood", 2.0, &[], &["HasFood"]),
        ];
        let goals = vec![make_goal("Survive", 10.0, &["Fed"])];
        let beliefs: Beliefs = [("HasFood", true)].into_iter().collect();

        let plan = Planner::new().plan(&goals, &actions, None, &beliefs).unwrap();
        assert_eq!(plan.action_names(), ["EatMeal"]);
        assert_eq!(plan.total_cost(), 1.0);
    }

    #[test]
    fn test_closure_oracle() {
        let actions = vec![
            make_action("ChopWood", 2.0, &["HasAxe"], &["HasWood"]),
            make_action("BuildHouse", 3.0, &["HasWood"], &["HasHouse"]),
        ];
        let goals = vec![make_goal("Shelter", 1.0, &["HasHouse"])];
        let oracle = |c: &Condition| c.name() == "HasAxe";

        let plan = Planner::new().plan(&goals, &actions, None, &oracle).unwrap();
        assert_eq!(plan.action_names(), ["ChopWood", "BuildHouse"]);
        assert_eq!(plan.total_cost(), 5.0);
    }

    #[test]
    fn test_multi_condition_goal() {
        let actions = vec![
            make_action("GetWater", 1.0, &[], &["HasWater"]),
            make_action("GetFood", 2.0, &[], &["HasFood"]),
            make_action("Camp", 1.0, &["HasWater", "HasFood"], &["Camped"]),
        ];
        let goals = vec![make_goal("Rest", 1.0, &["Camped", "HasWater"])];
        let beliefs = Beliefs::new();

        for extraction in [ExtractionStrategy::Greedy, ExtractionStrategy::CheapestPath] {
            let planner = Planner::with_config(PlannerConfig {
                extraction,
                ..PlannerConfig::default()
            })
            .unwrap();
            let plan = planner.plan(&goals, &actions, None, &beliefs).unwrap();
            assert_eq!(plan.action_names().last(), Some(&"Camp"));
            assert_well_formed(&plan, &beliefs);
        }
    }

    #[test]
    fn test_complex_building_scenario() {
        let actions = vec![
            make_action(
                "gather_resources",
                1.0,
                &["has_tools", "has_energy"],
                &["has_wood", "has_stone"],
            ),
            make_action(
                "process_materials",
                2.0,
                &["has_wood", "has_stone", "has_workshop"],
                &["has_planks", "has_bricks"],
            ),
            make_action(
                "build_foundation",
                3.0,
                &["has_bricks", "has_blueprint"],
                &["has_foundation"],
            ),
            make_action(
                "build_walls",
                4.0,
                &["has_foundation", "has_planks"],
                &["has_walls"],
            ),
            make_action("install_roof", 5.0, &["has_walls", "has_planks"], &["has_roof"]),
            make_action(
                "final_inspection",
                1.0,
                &["has_roof", "has_walls"],
                &["has_completed_house"],
            ),
            make_action("buy_house", 100.0, &["has_fortune"], &["has_completed_house"]),
        ];
        let goals = vec![make_goal("home", 1.0, &["has_completed_house"])];
        let beliefs: Beliefs = [
            ("has_tools", true),
            ("has_energy", true),
            ("has_workshop", true),
            ("has_blueprint", true),
        ]
        .into_iter()
        .collect();

        let plan = Planner::new().plan(&goals, &actions, None, &beliefs).unwrap();
        assert_eq!(plan.action_names().last(), Some(&"final_inspection"));
        assert!(!plan.action_names().contains(&"buy_house"));
        for step in [
            "gather_resources",
            "process_materials",
            "build_foundation",
            "build_walls",
            "install_roof",
        ] {
            assert!(plan.action_names().contains(&step), "missing {}", step);
        }
        assert_well_formed(&plan, &beliefs);
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        assert!(matches!(
            Action::new("invalid_action", -1.0),
            Err(GoapError::InvalidActionCost(_))
        ));
        assert!(matches!(
            Goal::new("invalid_goal", f32::NAN),
            Err(GoapError::InvalidGoalPriority(_))
        ));
    }
}

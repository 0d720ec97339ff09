//! Property-based tests for the filtered board view.
//!
//! Uses proptest to verify the structural invariants of
//! `filter_projects`: purity, subset behavior, case-insensitivity, and
//! that every surviving task actually matches the filter.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;
use taskboard::store::filter_projects;
use taskboard_api::project::Project;
use taskboard_api::task::{Task, TaskStatus};

// --- Strategies ---

/// Strategy for generating tasks with short alphanumeric text fields,
/// so that filters drawn from the same alphabet sometimes match.
fn arb_task() -> impl Strategy<Value = Task> {
    ("[a-z0-9-]{1,12}", "[a-zA-Z ]{1,24}", "[a-zA-Z ]{0,24}").prop_map(
        |(id, title, description)| Task {
            id,
            title,
            description,
            status: TaskStatus::Todo,
            project_id: None,
            assigned_user_id: None,
        },
    )
}

/// Strategy for generating projects with up to a few tasks each.
fn arb_project() -> impl Strategy<Value = Project> {
    (
        "[a-z0-9-]{1,12}",
        "[a-zA-Z ]{1,16}",
        prop::collection::vec(arb_task(), 0..4),
    )
        .prop_map(|(id, name, tasks)| Project {
            id,
            name,
            description: String::new(),
            tasks,
        })
}

/// Strategy for generating a whole board.
fn arb_board() -> impl Strategy<Value = Vec<Project>> {
    prop::collection::vec(arb_project(), 0..6)
}

/// Case-insensitive substring check mirroring the view's match rule.
fn matches(task: &Task, filter: &str) -> bool {
    let needle = filter.to_lowercase();
    task.title.to_lowercase().contains(&needle)
        || task.description.to_lowercase().contains(&needle)
}

// --- Property tests ---

proptest! {
    /// The empty filter is the identity: the full board comes back.
    #[test]
    fn empty_filter_is_identity(board in arb_board()) {
        prop_assert_eq!(filter_projects(&board, ""), board);
    }

    /// The source board is never mutated by computing a view.
    #[test]
    fn source_board_is_never_mutated(board in arb_board(), filter in "[a-zA-Z]{1,8}") {
        let before = board.clone();
        let _view = filter_projects(&board, &filter);
        prop_assert_eq!(board, before);
    }

    /// Every project in the view exists in the source, in source order,
    /// and carries only tasks that match the filter.
    #[test]
    fn view_is_an_ordered_subset_of_matching_tasks(
        board in arb_board(),
        filter in "[a-zA-Z]{1,8}",
    ) {
        let view = filter_projects(&board, &filter);

        let source_ids: Vec<&str> = board.iter().map(|p| p.id.as_str()).collect();
        let mut last_index = 0;
        for project in &view {
            let index = source_ids
                .iter()
                .position(|id| *id == project.id)
                .expect("view project must come from the source");
            prop_assert!(index >= last_index);
            last_index = index;

            prop_assert!(!project.tasks.is_empty());
            for task in &project.tasks {
                prop_assert!(matches(task, &filter));
            }
        }
    }

    /// No matching task is dropped: every source task that matches the
    /// filter appears in the view.
    #[test]
    fn no_matching_task_is_dropped(board in arb_board(), filter in "[a-zA-Z]{1,8}") {
        let view = filter_projects(&board, &filter);
        for project in &board {
            for task in &project.tasks {
                if matches(task, &filter) {
                    let found = view
                        .iter()
                        .find(|p| p.id == project.id)
                        .is_some_and(|p| p.tasks.iter().any(|t| t.id == task.id));
                    prop_assert!(found);
                }
            }
        }
    }

    /// Filtering is case-insensitive: any casing of the filter yields
    /// the same view.
    #[test]
    fn filter_casing_is_irrelevant(board in arb_board(), filter in "[a-zA-Z]{1,8}") {
        let lower = filter_projects(&board, &filter.to_lowercase());
        let upper = filter_projects(&board, &filter.to_uppercase());
        prop_assert_eq!(lower, upper);
    }

    /// A filter drawn from a task's own title always keeps that task's
    /// project in the view.
    #[test]
    fn own_title_always_matches(board in arb_board()) {
        for project in &board {
            for task in &project.tasks {
                let view = filter_projects(&board, &task.title);
                prop_assert!(view.iter().any(|p| p.id == project.id));
            }
        }
    }
}

//! Derived filtered view over the cached project list.

use taskboard_api::project::Project;
use taskboard_api::task::Task;

/// Computes the filtered view: per project, keep only tasks whose title
/// or description contains `filter` as a case-insensitive substring, and
/// drop projects left with no matching tasks.
///
/// Pure function of its inputs; the source slice is never mutated. An
/// empty filter matches everything and returns the full project list,
/// including projects with no tasks at all.
#[must_use]
pub fn filter_projects(projects: &[Project], filter: &str) -> Vec<Project> {
    if filter.is_empty() {
        return projects.to_vec();
    }

    let needle = filter.to_lowercase();
    projects
        .iter()
        .filter_map(|project| {
            let tasks: Vec<Task> = project
                .tasks
                .iter()
                .filter(|task| task_matches(task, &needle))
                .cloned()
                .collect();
            if tasks.is_empty() {
                None
            } else {
                Some(Project {
                    tasks,
                    ..project.clone()
                })
            }
        })
        .collect()
}

/// Case-insensitive substring match on title or description.
/// `needle` must already be lowercased.
fn task_matches(task: &Task, needle: &str) -> bool {
    task.title.to_lowercase().contains(needle)
        || task.description.to_lowercase().contains(needle)
}

//! Pure state transitions. Each function borrows the current state and
//! returns the next one; the input is never touched.

use super::models::{AppState, Task, TaskId};

/// Selects `id`, or clears the selection when `id` is already selected.
/// Clearing the selection also leaves edit mode.
pub fn select_task(state: &AppState, id: TaskId) -> AppState {
    if state.is_selected(id) {
        AppState {
            selected: None,
            editing: false,
            ..state.clone()
        }
    } else {
        AppState {
            selected: Some(id),
            ..state.clone()
        }
    }
}

pub fn add_task(state: &AppState, task: Task) -> AppState {
    let mut tasks = state.tasks.clone();
    tasks.push(task);
    AppState {
        tasks,
        ..state.clone()
    }
}

pub fn delete_selected(state: &AppState) -> AppState {
    match state.selected {
        Some(selected) => AppState {
            tasks: state
                .tasks
                .iter()
                .filter(|task| task.id != selected)
                .cloned()
                .collect(),
            selected: None,
            editing: false,
        },
        None => state.clone(),
    }
}

pub fn delete_all(_state: &AppState) -> AppState {
    AppState::default()
}

pub fn delete_completed(state: &AppState) -> AppState {
    AppState {
        tasks: state
            .tasks
            .iter()
            .filter(|task| !task.completed)
            .cloned()
            .collect(),
        selected: None,
        editing: false,
    }
}

/// Flips edit mode and points the selection at `id`. Unlike `select_task`
/// this never clears the selection.
pub fn toggle_edit(state: &AppState, id: TaskId) -> AppState {
    AppState {
        editing: !state.editing,
        selected: Some(id),
        ..state.clone()
    }
}

pub fn cancel_edit(state: &AppState) -> AppState {
    AppState {
        selected: None,
        editing: false,
        ..state.clone()
    }
}

/// Form submission while editing: rewrites the selected task and leaves edit mode.
pub fn update_selected_description(state: &AppState, description: String) -> AppState {
    let Some(selected) = state.selected else {
        return state.clone();
    };

    let tasks = state
        .tasks
        .iter()
        .map(|task| {
            if task.id == selected {
                Task {
                    description: description.clone(),
                    ..task.clone()
                }
            } else {
                task.clone()
            }
        })
        .collect();

    AppState {
        tasks,
        editing: false,
        ..state.clone()
    }
}

/// Marks the selected task as completed. Order and selection are kept.
pub fn finish_selected(state: &AppState) -> AppState {
    let Some(selected) = state.selected else {
        return state.clone();
    };

    let tasks = state
        .tasks
        .iter()
        .map(|task| {
            if task.id == selected {
                Task {
                    completed: true,
                    ..task.clone()
                }
            } else {
                task.clone()
            }
        })
        .collect();

    AppState {
        tasks,
        ..state.clone()
    }
}

//! Projection of the application state onto what the screen shows.
//! Drawing only reads a `ViewModel`, so everything about which row is
//! complete, active or editable is decided here.

use crate::todo::models::AppState;
use crate::tui::state::FormState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub description: String,
    pub complete: bool,
    pub active: bool,
    pub edit_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub label: &'static str,
    pub editing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub active_label: Option<String>,
    pub rows: Vec<TaskRow>,
    pub form: Option<FormView>,
    pub total: usize,
    pub completed: usize,
}

impl ViewModel {
    pub fn build(state: &AppState, form: &FormState) -> Self {
        let rows = state
            .tasks
            .iter()
            .map(|task| {
                let active = state.is_selected(task.id) && !task.completed;
                TaskRow {
                    description: task.description.clone(),
                    complete: task.completed,
                    active,
                    // Only the active row's affordance is wired up
                    edit_enabled: active,
                }
            })
            .collect();

        Self {
            active_label: state.active_task().map(|task| task.description.clone()),
            rows,
            form: form.visible.then(|| FormView {
                label: form.mode.label(),
                editing: form.is_editing(),
            }),
            total: state.total_tasks(),
            completed: state.completed_tasks(),
        }
    }
}

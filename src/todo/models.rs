use std::fmt;
use uuid::Uuid;

/// Stable identity of a task, assigned once when the task is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The first group is plenty to tell tasks apart in a log line
        let simple = self.0.simple().to_string();
        write!(f, "{}", &simple[..8])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub completed: bool,
}

impl Task {
    pub fn new(description: String) -> Self {
        Self {
            id: TaskId::new(),
            description,
            completed: false,
        }
    }

    pub fn new_completed(description: String) -> Self {
        Self {
            completed: true,
            ..Self::new(description)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub tasks: Vec<Task>,
    pub selected: Option<TaskId>,
    pub editing: bool,
}

impl AppState {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            selected: None,
            editing: false,
        }
    }

    pub fn with_sample_tasks() -> Self {
        Self::new(vec![
            Task::new_completed("Completed task".to_string()),
            Task::new("Pending task 1".to_string()),
            Task::new("Pending task 2".to_string()),
        ])
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.selected.and_then(|id| self.task(id))
    }

    pub fn is_selected(&self, id: TaskId) -> bool {
        self.selected == Some(id)
    }

    /// The selected task, as long as it is still pending.
    pub fn active_task(&self) -> Option<&Task> {
        self.selected_task().filter(|task| !task.completed)
    }

    pub fn total_tasks(&self) -> usize {
        self.tasks.len()
    }

    pub fn completed_tasks(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }
}

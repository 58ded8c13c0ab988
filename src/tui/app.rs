use crate::todo::models::{AppState, Task};
use crate::todo::reducer;
use crate::tui::handlers::{FormAction, HelpModeAction, KeyHandler, NormalModeAction};
use crate::tui::state::FormState;
use crate::tui::view::ViewModel;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::{debug, info};

/// Width of the edit affordance at the right edge of every task row.
pub const EDIT_AFFORDANCE_WIDTH: u16 = 3;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// A focus session ended somewhere else; completes the selected task.
    TaskFinished,
}

#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub form: FormState,
    pub cursor: usize,
    pub should_quit: bool,
    pub help_mode: bool,
    /// Inner area of the task list as of the last draw, used to map clicks to rows.
    pub list_area: Option<Rect>,
    pub list_offset: usize,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut app = Self {
            state,
            form: FormState::new(),
            cursor: 0,
            should_quit: false,
            help_mode: false,
            list_area: None,
            list_offset: 0,
        };
        app.refresh();
        app
    }

    pub fn view(&self) -> ViewModel {
        ViewModel::build(&self.state, &self.form)
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Key(key) => self.handle_key_event(key),
            AppEvent::Mouse(mouse) => {
                self.handle_mouse_event(mouse);
                Ok(())
            }
            AppEvent::TaskFinished => {
                self.finish_task();
                Ok(())
            }
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if self.help_mode {
            if KeyHandler::handle_help_mode_key(key_event) == HelpModeAction::ExitHelpMode {
                self.help_mode = false;
            }
        } else if self.form.visible {
            self.handle_form_key(key_event);
        } else {
            self.handle_normal_mode_key(key_event)?;
        }
        Ok(())
    }

    fn handle_normal_mode_key(&mut self, key_event: KeyEvent) -> Result<()> {
        match KeyHandler::handle_normal_mode_key(key_event) {
            NormalModeAction::Quit => self.should_quit = true,
            NormalModeAction::MoveCursorUp => self.move_cursor_up(),
            NormalModeAction::MoveCursorDown => self.move_cursor_down(),
            NormalModeAction::ToggleSelection => self.toggle_selection_at_cursor(),
            NormalModeAction::ToggleForm => self.toggle_form(),
            NormalModeAction::EditSelected => self.edit_selected(),
            NormalModeAction::DeleteSelected => self.delete_selected(),
            NormalModeAction::DeleteAll => self.delete_all(),
            NormalModeAction::DeleteCompleted => self.delete_completed(),
            NormalModeAction::FinishTask => self.handle_event(AppEvent::TaskFinished)?,
            NormalModeAction::ToggleHelpMode => self.help_mode = true,
            NormalModeAction::None => {}
        }
        Ok(())
    }

    fn handle_form_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_form_key(key_event) {
            FormAction::Submit => self.submit_form(),
            FormAction::Cancel => self.cancel_form(),
            FormAction::Backspace => self.form.input.backspace(),
            FormAction::Delete => self.form.input.delete(),
            FormAction::MoveCursorLeft => self.form.input.move_cursor_left(),
            FormAction::MoveCursorRight => self.form.input.move_cursor_right(),
            FormAction::MoveCursorHome => self.form.input.move_cursor_home(),
            FormAction::MoveCursorEnd => self.form.input.move_cursor_end(),
            FormAction::DeleteWordBackward => self.form.input.delete_word_backward(),
            FormAction::DeleteSelected => self.delete_from_form(),
            FormAction::InsertChar(c) => self.form.input.insert_char(c),
            FormAction::None => {}
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        // The help overlay covers the list
        if self.help_mode {
            return;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.click(mouse.column, mouse.row),
            MouseEventKind::ScrollUp => self.move_cursor_up(),
            MouseEventKind::ScrollDown => self.move_cursor_down(),
            _ => {}
        }
    }

    fn click(&mut self, column: u16, row: u16) {
        let Some(area) = self.list_area else {
            return;
        };
        if column < area.x || column >= area.right() || row < area.y || row >= area.bottom() {
            return;
        }

        let index = self.list_offset + (row - area.y) as usize;
        let Some(task) = self.state.tasks.get(index) else {
            return;
        };
        let id = task.id;
        let on_affordance = column >= area.right().saturating_sub(EDIT_AFFORDANCE_WIDTH);
        let is_active = self.state.active_task().map(|t| t.id) == Some(id);

        self.cursor = index;
        if on_affordance && is_active {
            // Handled by the affordance alone, the row never sees this click
            self.dispatch("toggle_edit", reducer::toggle_edit(&self.state, id));
        } else {
            self.dispatch("select_task", reducer::select_task(&self.state, id));
        }
    }

    /// Replaces the state with the result of a transition and re-syncs the view.
    fn dispatch(&mut self, action: &str, next: AppState) {
        self.state = next;
        info!(
            action,
            tasks = self.state.total_tasks(),
            completed = self.state.completed_tasks(),
            selected = ?self.state.selected.map(|id| id.to_string()),
            editing = self.state.editing,
            "state updated"
        );
        self.refresh();
    }

    /// Brings the cursor and the form back in line with the current state.
    pub fn refresh(&mut self) {
        if self.cursor >= self.state.tasks.len() {
            self.cursor = self.state.tasks.len().saturating_sub(1);
        }

        let editing_description = if self.state.editing {
            self.state.active_task().map(|task| task.description.clone())
        } else {
            None
        };

        match editing_description {
            Some(description) => self.form.open_for_edit(&description),
            None => self.form.reset(),
        }
    }

    fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.state.tasks.len() {
            self.cursor += 1;
        }
    }

    fn toggle_selection_at_cursor(&mut self) {
        if let Some(task) = self.state.tasks.get(self.cursor) {
            let id = task.id;
            self.dispatch("select_task", reducer::select_task(&self.state, id));
        }
    }

    /// The add button: shows or hides the form without touching the state.
    fn toggle_form(&mut self) {
        self.form.toggle();
        debug!(visible = self.form.visible, "add task form toggled");
    }

    fn edit_selected(&mut self) {
        // Completed tasks have no edit affordance
        if let Some(task) = self.state.active_task() {
            let id = task.id;
            self.dispatch("toggle_edit", reducer::toggle_edit(&self.state, id));
        }
    }

    fn delete_selected(&mut self) {
        self.dispatch("delete_selected", reducer::delete_selected(&self.state));
    }

    /// The form's delete button: drops the selected task and closes the form.
    fn delete_from_form(&mut self) {
        self.dispatch("delete_selected", reducer::delete_selected(&self.state));
        self.form.reset();
    }

    fn delete_all(&mut self) {
        self.dispatch("delete_all", reducer::delete_all(&self.state));
    }

    fn delete_completed(&mut self) {
        self.dispatch("delete_completed", reducer::delete_completed(&self.state));
    }

    fn finish_task(&mut self) {
        if self.state.selected.is_none() {
            debug!("task finished signal ignored, nothing selected");
            return;
        }
        self.dispatch("finish_selected", reducer::finish_selected(&self.state));
    }

    fn submit_form(&mut self) {
        let description = self.form.input.value().to_string();
        if self.form.is_editing() {
            self.dispatch(
                "update_selected_description",
                reducer::update_selected_description(&self.state, description),
            );
        } else {
            let task = Task::new(description);
            debug!(id = %task.id, "adding task");
            self.dispatch("add_task", reducer::add_task(&self.state, task));
        }
        self.form.input.clear();
    }

    fn cancel_form(&mut self) {
        if self.form.is_editing() {
            self.dispatch("cancel_edit", reducer::cancel_edit(&self.state));
        } else {
            self.form.reset();
        }
    }
}

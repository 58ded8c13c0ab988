use crate::tui::edit::TextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Adding,
    Editing,
}

impl FormMode {
    pub fn label(&self) -> &'static str {
        match self {
            FormMode::Adding => "Adding task",
            FormMode::Editing => "Editing task",
        }
    }
}

/// The add/edit task form: visibility, mode and the text being typed.
#[derive(Debug, Clone)]
pub struct FormState {
    pub visible: bool,
    pub mode: FormMode,
    pub input: TextInput,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            visible: false,
            mode: FormMode::Adding,
            input: TextInput::new(),
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Shows the form filled with `description`, ready to overwrite it.
    pub fn open_for_edit(&mut self, description: &str) {
        self.visible = true;
        self.mode = FormMode::Editing;
        self.input.set(description);
    }

    /// Empty "adding" form, hidden until the add button toggles it.
    pub fn reset(&mut self) {
        self.visible = false;
        self.mode = FormMode::Adding;
        self.input.clear();
    }

    pub fn is_editing(&self) -> bool {
        self.mode == FormMode::Editing
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_starts_hidden_in_adding_mode() {
        let form = FormState::new();
        assert!(!form.visible);
        assert_eq!(form.mode, FormMode::Adding);
        assert_eq!(form.mode.label(), "Adding task");
    }

    #[test]
    fn test_open_for_edit_then_reset() {
        let mut form = FormState::new();
        form.open_for_edit("Pending task 1");
        assert!(form.visible);
        assert!(form.is_editing());
        assert_eq!(form.mode.label(), "Editing task");
        assert_eq!(form.input.value(), "Pending task 1");

        form.reset();
        assert!(!form.visible);
        assert!(!form.is_editing());
        assert!(form.input.value().is_empty());
    }

    #[test]
    fn test_toggle_visibility() {
        let mut form = FormState::new();
        form.toggle();
        assert!(form.visible);
        form.toggle();
        assert!(!form.visible);
    }
}

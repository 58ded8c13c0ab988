use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_normal_mode_key(key_event: KeyEvent) -> NormalModeAction {
        match key_event.code {
            KeyCode::Char('q') => NormalModeAction::Quit,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                NormalModeAction::Quit
            }
            KeyCode::Up | KeyCode::Char('k') => NormalModeAction::MoveCursorUp,
            KeyCode::Down | KeyCode::Char('j') => NormalModeAction::MoveCursorDown,
            KeyCode::Enter | KeyCode::Char(' ') => NormalModeAction::ToggleSelection,
            KeyCode::Char('a') => NormalModeAction::ToggleForm,
            KeyCode::Char('e') => NormalModeAction::EditSelected,
            KeyCode::Char('d') => NormalModeAction::DeleteSelected,
            KeyCode::Char('D') => NormalModeAction::DeleteAll,
            KeyCode::Char('c') => NormalModeAction::DeleteCompleted,
            KeyCode::Char('f') => NormalModeAction::FinishTask,
            KeyCode::Char('?') => NormalModeAction::ToggleHelpMode,
            _ => NormalModeAction::None,
        }
    }

    pub fn handle_help_mode_key(key_event: KeyEvent) -> HelpModeAction {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
                HelpModeAction::ExitHelpMode
            }
            _ => HelpModeAction::None,
        }
    }

    pub fn handle_form_key(key_event: KeyEvent) -> FormAction {
        match key_event.code {
            KeyCode::Esc => FormAction::Cancel,
            KeyCode::Enter => FormAction::Submit,
            KeyCode::Backspace => FormAction::Backspace,
            KeyCode::Delete => FormAction::Delete,
            KeyCode::Left => FormAction::MoveCursorLeft,
            KeyCode::Right => FormAction::MoveCursorRight,
            KeyCode::Home => FormAction::MoveCursorHome,
            KeyCode::End => FormAction::MoveCursorEnd,
            KeyCode::Char('w') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                FormAction::DeleteWordBackward
            }
            KeyCode::Char('d') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                FormAction::DeleteSelected
            }
            KeyCode::Char(c) => FormAction::InsertChar(c),
            _ => FormAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum NormalModeAction {
    None,
    Quit,
    MoveCursorUp,
    MoveCursorDown,
    ToggleSelection,
    ToggleForm,
    EditSelected,
    DeleteSelected,
    DeleteAll,
    DeleteCompleted,
    FinishTask,
    ToggleHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum HelpModeAction {
    None,
    ExitHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum FormAction {
    None,
    Cancel,
    Submit,
    Backspace,
    Delete,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    DeleteWordBackward,
    DeleteSelected,
    InsertChar(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_mode_basic_keys() {
        let key_event = KeyEvent::from(KeyCode::Char('q'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::Quit);

        let key_event = KeyEvent::from(KeyCode::Enter);
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::ToggleSelection);

        let key_event = KeyEvent::from(KeyCode::Char(' '));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::ToggleSelection);

        let key_event = KeyEvent::from(KeyCode::Char('a'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::ToggleForm);

        let key_event = KeyEvent::from(KeyCode::Char('e'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::EditSelected);
    }

    #[test]
    fn test_normal_mode_navigation_keys() {
        let key_event = KeyEvent::from(KeyCode::Up);
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::MoveCursorUp);

        let key_event = KeyEvent::from(KeyCode::Char('j'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::MoveCursorDown);

        let key_event = KeyEvent::from(KeyCode::Char('k'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::MoveCursorUp);
    }

    #[test]
    fn test_normal_mode_delete_keys() {
        let key_event = KeyEvent::from(KeyCode::Char('d'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::DeleteSelected);

        let key_event = KeyEvent::from(KeyCode::Char('D'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::DeleteAll);

        let key_event = KeyEvent::from(KeyCode::Char('c'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::DeleteCompleted);
    }

    #[test]
    fn test_normal_mode_ctrl_keys() {
        let mut key_event = KeyEvent::from(KeyCode::Char('c'));
        key_event.modifiers = KeyModifiers::CONTROL;
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::Quit);
    }

    #[test]
    fn test_finish_key() {
        let key_event = KeyEvent::from(KeyCode::Char('f'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::FinishTask);
    }

    #[test]
    fn test_help_mode_keys() {
        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::ExitHelpMode);

        let key_event = KeyEvent::from(KeyCode::Char('?'));
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::ExitHelpMode);

        let key_event = KeyEvent::from(KeyCode::Char('x'));
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::None);
    }

    #[test]
    fn test_form_keys() {
        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_form_key(key_event), FormAction::Cancel);

        let key_event = KeyEvent::from(KeyCode::Enter);
        assert_eq!(KeyHandler::handle_form_key(key_event), FormAction::Submit);

        let key_event = KeyEvent::from(KeyCode::Backspace);
        assert_eq!(KeyHandler::handle_form_key(key_event), FormAction::Backspace);

        let key_event = KeyEvent::from(KeyCode::Home);
        assert_eq!(KeyHandler::handle_form_key(key_event), FormAction::MoveCursorHome);

        // Plain letters are text, even the ones bound in normal mode
        let key_event = KeyEvent::from(KeyCode::Char('d'));
        assert_eq!(KeyHandler::handle_form_key(key_event), FormAction::InsertChar('d'));

        let mut key_event = KeyEvent::from(KeyCode::Char('w'));
        key_event.modifiers = KeyModifiers::CONTROL;
        assert_eq!(KeyHandler::handle_form_key(key_event), FormAction::DeleteWordBackward);
    }

    #[test]
    fn test_form_delete_key() {
        let mut key_event = KeyEvent::from(KeyCode::Char('d'));
        key_event.modifiers = KeyModifiers::CONTROL;
        assert_eq!(KeyHandler::handle_form_key(key_event), FormAction::DeleteSelected);
    }
}

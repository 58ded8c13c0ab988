use crate::tui::app::{App, EDIT_AFFORDANCE_WIDTH};
use crate::tui::view::{TaskRow, ViewModel};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use std::fmt;

const HEADER_HEIGHT: u16 = 3;
const FORM_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;
const LIST_MIN_HEIGHT: u16 = 3;
const MIN_WIDTH: u16 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    MissingAnchor(&'static str),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::MissingAnchor(name) => {
                write!(f, "No room for the {} on screen; enlarge the terminal", name)
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Screen regions the render pass draws into. Only the footer, which hosts the
/// add-task button, is mandatory; the rest are skipped when they do not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchors {
    pub active_label: Option<Rect>,
    pub task_list: Option<Rect>,
    pub form: Option<Rect>,
    pub footer: Rect,
}

impl Anchors {
    pub fn locate(area: Rect, form_visible: bool) -> Result<Self, RenderError> {
        if area.width < MIN_WIDTH + 2 || area.height < FOOTER_HEIGHT + 2 {
            return Err(RenderError::MissingAnchor("add-task button"));
        }

        let x = area.x + 1;
        let width = area.width - 2;
        let top = area.y + 1;
        let bottom = area.bottom() - 1;

        let footer = Rect::new(x, bottom - FOOTER_HEIGHT, width, FOOTER_HEIGHT);
        let mut remaining = Rect::new(x, top, width, footer.y - top);

        let active_label = if remaining.height >= HEADER_HEIGHT + LIST_MIN_HEIGHT {
            let label = Rect::new(x, remaining.y, width, HEADER_HEIGHT);
            remaining.y += HEADER_HEIGHT;
            remaining.height -= HEADER_HEIGHT;
            Some(label)
        } else {
            None
        };

        let form = if form_visible && remaining.height >= FORM_HEIGHT + LIST_MIN_HEIGHT {
            remaining.height -= FORM_HEIGHT;
            Some(Rect::new(x, remaining.bottom(), width, FORM_HEIGHT))
        } else {
            None
        };

        let task_list = (remaining.height >= LIST_MIN_HEIGHT).then_some(remaining);

        Ok(Self {
            active_label,
            task_list,
            form,
            footer,
        })
    }
}

pub fn draw(frame: &mut Frame, app: &mut App, anchors: &Anchors) {
    let view = app.view();

    if let Some(area) = anchors.active_label {
        draw_active_label(frame, area, &view);
    }
    match anchors.task_list {
        Some(area) => draw_task_list(frame, area, app, &view),
        None => app.list_area = None,
    }
    if let Some(area) = anchors.form {
        draw_form(frame, area, app, &view);
    }
    draw_footer(frame, anchors.footer, app, &view);

    if app.help_mode {
        draw_help_window(frame);
    }
}

fn draw_active_label(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let text = view.active_label.clone().unwrap_or_default();
    let label = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Active task"))
        .style(Style::default().fg(Color::Cyan));

    frame.render_widget(label, area);
}

fn draw_task_list(frame: &mut Frame, area: Rect, app: &mut App, view: &ViewModel) {
    let block = Block::default().borders(Borders::ALL).title("Tasks");
    let inner = block.inner(area);

    let items: Vec<ListItem> = view
        .rows
        .iter()
        .map(|row| ListItem::new(task_line(row, inner.width)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut list_state = ListState::default();
    if !view.rows.is_empty() {
        list_state.select(Some(app.cursor));
    }

    frame.render_stateful_widget(list, area, &mut list_state);

    app.list_area = Some(inner);
    app.list_offset = list_state.offset();
}

/// Status icon, description and the edit affordance pinned to the right edge.
fn task_line(row: &TaskRow, width: u16) -> Line<'static> {
    let icon = if row.complete { "☑ " } else { "☐ " };

    let description_width = (width as usize)
        .saturating_sub(2)
        .saturating_sub(EDIT_AFFORDANCE_WIDTH as usize + 1);
    let mut description: String = row.description.chars().take(description_width).collect();
    let padding = description_width.saturating_sub(description.chars().count());
    description.push_str(&" ".repeat(padding + 1));

    let row_style = if row.complete {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if row.active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let affordance_style = if row.edit_enabled {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Line::from(vec![
        Span::styled(icon, row_style),
        Span::styled(description, row_style),
        Span::styled("[e]", affordance_style),
    ])
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App, view: &ViewModel) {
    let Some(form) = &view.form else {
        return;
    };

    let (before_cursor, after_cursor) = app.form.input.split_at_cursor();
    let text = format!("{}█{}", before_cursor, after_cursor);

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(form.label))
        .style(if form.editing {
            Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        });

    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App, view: &ViewModel) {
    let footer_text = if app.form.visible {
        "Enter: save | Esc: cancel | Ctrl+D: delete task | ←→: cursor | Ctrl+W: delete word".to_string()
    } else {
        format!(
            "Tasks: {} | Completed: {} | a: add task | e: edit | d: delete | c: delete completed | D: delete all | ?: help",
            view.total, view.completed
        )
    };

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(footer, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = vec![
        "Task List - Keyboard Commands",
        "",
        "NAVIGATION:",
        "  ↑↓ / j/k          Move the cursor",
        "  Enter / Space     Select or deselect the task under the cursor",
        "  Mouse click       Select or deselect a task",
        "",
        "TASKS:",
        "  a                 Show or hide the add task form",
        "  e / click [e]     Edit the active task",
        "  f                 Finish the selected task",
        "",
        "DELETING:",
        "  d                 Delete the selected task",
        "  c                 Delete completed tasks",
        "  D                 Delete all tasks",
        "",
        "FORM:",
        "  Enter             Save",
        "  Esc               Cancel",
        "  Ctrl+D            Delete the selected task",
        "",
        "OTHER:",
        "  ?                 Show this help (press ? or Esc to close)",
        "  q / Ctrl+C        Quit application",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Keyboard Commands ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(ratatui::widgets::Wrap { trim: true });

    let area = centered_rect(80, 70, frame.size());

    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::models::AppState;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn render(app: &mut App, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let anchors = Anchors::locate(Rect::new(0, 0, width, height), app.form.visible).unwrap();
        terminal.draw(|f| draw(f, app, &anchors)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_locate_requires_add_button_room() {
        assert_eq!(
            Anchors::locate(Rect::new(0, 0, 80, 4), false),
            Err(RenderError::MissingAnchor("add-task button"))
        );
        assert!(Anchors::locate(Rect::new(0, 0, 10, 24), false).is_err());
    }

    #[test]
    fn test_locate_skips_optional_anchors_when_short() {
        let anchors = Anchors::locate(Rect::new(0, 0, 80, 5), true).unwrap();
        assert_eq!(anchors.footer, Rect::new(1, 1, 78, 3));
        assert!(anchors.active_label.is_none());
        assert!(anchors.task_list.is_none());
        assert!(anchors.form.is_none());
    }

    #[test]
    fn test_locate_full_layout() {
        let anchors = Anchors::locate(Rect::new(0, 0, 80, 24), true).unwrap();
        assert_eq!(anchors.active_label, Some(Rect::new(1, 1, 78, 3)));
        assert_eq!(anchors.footer, Rect::new(1, 20, 78, 3));
        assert_eq!(anchors.form, Some(Rect::new(1, 17, 78, 3)));
        assert_eq!(anchors.task_list, Some(Rect::new(1, 4, 78, 13)));

        let hidden = Anchors::locate(Rect::new(0, 0, 80, 24), false).unwrap();
        assert!(hidden.form.is_none());
        assert_eq!(hidden.task_list, Some(Rect::new(1, 4, 78, 16)));
    }

    #[test]
    fn test_draw_lists_tasks_and_records_list_area() {
        let mut app = App::new(AppState::with_sample_tasks());
        let buffer = render(&mut app, 80, 24);
        let text = screen_text(&buffer);

        assert!(text.contains("Completed task"));
        assert!(text.contains("Pending task 1"));
        assert!(text.contains("Pending task 2"));
        assert!(text.contains("Tasks: 3 | Completed: 1"));
        assert!(!text.contains("Adding task"));
        assert_eq!(app.list_area, Some(Rect::new(2, 5, 76, 14)));
        assert_eq!(app.list_offset, 0);
    }

    #[test]
    fn test_draw_active_label_and_edit_form() {
        let mut app = App::new(AppState::with_sample_tasks());
        app.cursor = 1;
        app.handle_key_event(crossterm::event::KeyEvent::from(
            crossterm::event::KeyCode::Enter,
        ))
        .unwrap();
        app.handle_key_event(crossterm::event::KeyEvent::from(
            crossterm::event::KeyCode::Char('e'),
        ))
        .unwrap();

        let buffer = render(&mut app, 80, 24);
        let text = screen_text(&buffer);

        assert!(text.contains("Active task"));
        assert!(text.contains("Editing task"));
        assert!(text.contains("Enter: save"));
        assert!(text.contains("Ctrl+D: delete task"));
    }

    #[test]
    fn test_task_line_pins_affordance_right() {
        let row = TaskRow {
            description: "A fairly long description that will not fit".to_string(),
            complete: false,
            active: true,
            edit_enabled: true,
        };
        let line = task_line(&row, 30);
        assert_eq!(line.width(), 30);
        assert_eq!(line.spans[2].content, "[e]");
    }
}

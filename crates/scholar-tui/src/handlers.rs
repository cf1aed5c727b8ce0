use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::App;
use crate::constants::MOUSE_SCROLL_STEP;
use crate::types::{Focus, ScrollDirection};
use crate::ui::layout::{contains, LayoutManager};

pub struct InputHandler;

impl InputHandler {
    /// Dispatch one terminal event. Returns true when the user asked to quit.
    pub fn handle_event(app: &mut App, event: Event) -> bool {
        match event {
            Event::Key(key) => Self::handle_key(app, key),
            Event::Mouse(mouse) => {
                Self::handle_mouse(app, mouse);
                false
            }
            Event::Paste(text) => {
                if app.focus == Focus::Input {
                    app.insert_str(&text);
                }
                false
            }
            _ => false,
        }
    }

    pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
        if !Self::is_valid_event(key) {
            return false;
        }

        if Self::is_quit(key) {
            return true; // Quit signal
        }

        Self::handle_key_press(app, key);
        false
    }

    fn is_valid_event(key: KeyEvent) -> bool {
        matches!(key.kind, KeyEventKind::Press)
    }

    fn is_quit(key: KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    }

    fn is_generate(key: KeyEvent) -> bool {
        let submit_mods = KeyModifiers::CONTROL | KeyModifiers::SUPER;
        match key.code {
            KeyCode::Enter => key.modifiers.intersects(submit_mods),
            // Ctrl+Enter arrives as Ctrl+J on terminals without keyboard enhancement
            KeyCode::Char('j') | KeyCode::Char('g') => key.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
    }

    fn handle_key_press(app: &mut App, key: KeyEvent) {
        if Self::is_generate(key) {
            app.generate();
            return;
        }

        // Global controls
        match (key.code, key.modifiers) {
            (KeyCode::Char('y'), KeyModifiers::CONTROL) => {
                app.copy_result();
                return;
            }
            (KeyCode::Tab, _) | (KeyCode::BackTab, _) => {
                app.toggle_focus();
                return;
            }
            (KeyCode::PageUp, _) => {
                app.scroll_output(ScrollDirection::PageUp, 0);
                return;
            }
            (KeyCode::PageDown, _) => {
                app.scroll_output(ScrollDirection::PageDown, 0);
                return;
            }
            (KeyCode::Up, KeyModifiers::CONTROL) => {
                app.scroll_output(ScrollDirection::Up, 1);
                return;
            }
            (KeyCode::Down, KeyModifiers::CONTROL) => {
                app.scroll_output(ScrollDirection::Down, 1);
                return;
            }
            _ => {}
        }

        match app.focus {
            Focus::Input => Self::handle_editor_key(app, key),
            Focus::Output => Self::handle_output_key(app, key),
        }
    }

    fn handle_editor_key(app: &mut App, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                app.clear_idea();
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                app.insert_char(c);
            }
            (KeyCode::Enter, KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                app.insert_char('\n');
            }
            (KeyCode::Backspace, _) => {
                app.backspace();
            }
            (KeyCode::Esc, _) => app.focus = Focus::Output,
            _ => {}
        }
    }

    fn handle_output_key(app: &mut App, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.scroll_output(ScrollDirection::Up, 1),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_output(ScrollDirection::Down, 1),
            KeyCode::Home => app.scroll_output(ScrollDirection::Home, 0),
            KeyCode::End => app.scroll_output(ScrollDirection::End, 0),
            KeyCode::Char('c') => {
                app.copy_result();
            }
            KeyCode::Esc => app.focus = Focus::Input,
            _ => {}
        }
    }

    fn handle_mouse(app: &mut App, mouse: MouseEvent) {
        let main = LayoutManager::create_main_layout(app.viewport, app.state().error());
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let (col, row) = (mouse.column, mouse.row);
                if contains(main.input, col, row) {
                    app.focus = Focus::Input;
                    let input = LayoutManager::input_layout(main.input);
                    if contains(input.generate_button, col, row) {
                        app.generate();
                    }
                } else if contains(main.output, col, row) {
                    app.focus = Focus::Output;
                    let output = LayoutManager::output_layout(main.output);
                    if app.can_copy() && contains(output.copy_button, col, row) {
                        app.copy_result();
                    }
                }
            }
            MouseEventKind::ScrollUp if contains(main.output, mouse.column, mouse.row) => {
                app.scroll_output(ScrollDirection::Up, MOUSE_SCROLL_STEP);
            }
            MouseEventKind::ScrollDown if contains(main.output, mouse.column, mouse.row) => {
                app.scroll_output(ScrollDirection::Down, MOUSE_SCROLL_STEP);
            }
            _ => {}
        }
    }
}

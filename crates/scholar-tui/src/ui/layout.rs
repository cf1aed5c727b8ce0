use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{Block, Borders};

use super::components::ErrorBanner;
use crate::constants::labels;

pub const HEADER_HEIGHT: u16 = 3;

/// "[ label ]"
pub fn button_width(label: &str) -> u16 {
    label.chars().count() as u16 + 4
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn panel_inner(panel: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(panel)
}

pub struct MainLayout {
    pub header: Rect,
    /// Zero-height when there is no error; otherwise tall enough for the
    /// wrapped message.
    pub banner: Rect,
    pub input: Rect,
    pub output: Rect,
    pub footer: Rect,
}

pub struct InputLayout {
    pub description: Rect,
    pub editor: Rect,
    pub char_count: Rect,
    pub generate_button: Rect,
    pub tip: Rect,
}

pub struct OutputLayout {
    pub copy_button: Rect,
    pub body: Rect,
}

pub struct LayoutManager;

impl LayoutManager {
    pub fn create_main_layout(area: Rect, error: Option<&str>) -> MainLayout {
        let banner_height = error.map_or(0, |message| ErrorBanner::height(message, area));
        let rows = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(banner_height),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

        let columns = Layout::horizontal([
            Constraint::Percentage(35), // input panel (left)
            Constraint::Percentage(65), // output panel (right)
        ])
        .split(rows[2]);

        MainLayout {
            header: rows[0],
            banner: rows[1],
            input: columns[0],
            output: columns[1],
            footer: rows[3],
        }
    }

    pub fn input_layout(panel: Rect) -> InputLayout {
        let rows = Layout::vertical([
            Constraint::Length(2), // description
            Constraint::Min(3),    // editor
            Constraint::Length(1), // count + button
            Constraint::Length(1), // tip
        ])
        .split(panel_inner(panel));

        let status = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(button_width(labels::GENERATE)),
        ])
        .split(rows[2]);

        InputLayout {
            description: rows[0],
            editor: rows[1],
            char_count: status[0],
            generate_button: status[1],
            tip: rows[3],
        }
    }

    pub fn output_layout(panel: Rect) -> OutputLayout {
        let rows = Layout::vertical([
            Constraint::Length(1), // toolbar
            Constraint::Length(1), // spacing
            Constraint::Min(1),    // document
        ])
        .split(panel_inner(panel));

        let toolbar = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(button_width(labels::COPY)),
        ])
        .split(rows[0]);

        OutputLayout {
            copy_button: toolbar[1],
            body: rows[2],
        }
    }
}

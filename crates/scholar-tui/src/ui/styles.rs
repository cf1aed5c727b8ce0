use ratatui::style::{Color, Modifier, Style};
use scholar_core::SectionKind;

pub struct Styles;

impl Styles {
    pub fn default() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn placeholder() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn app_title() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn app_subtitle() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn version_tag() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn panel_border(focused: bool) -> Style {
        if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub fn panel_title() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button(enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub fn button_busy() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_done() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_banner() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn spinner() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_title() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn section_title() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn bullet() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn separator() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn help_key() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn help_desc() -> Style {
        Style::default().fg(Color::Gray)
    }

    /// Glyph and color standing in for a section's icon.
    pub fn section_marker(kind: SectionKind) -> (&'static str, Style) {
        let (glyph, color) = match kind {
            SectionKind::Phenomenon => ("◉", Color::Blue),
            SectionKind::Questions => ("◎", Color::Red),
            SectionKind::Model => ("▣", Color::Magenta),
            SectionKind::Results => ("✦", Color::Yellow),
            SectionKind::Contribution => ("✺", Color::Green),
            SectionKind::Other => ("■", Color::Gray),
        };
        (glyph, Style::default().fg(color).add_modifier(Modifier::BOLD))
    }
}

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::constants::{labels, messages, APP_NAME, APP_SUBTITLE, APP_VERSION, SPINNER_FRAMES};
use crate::types::Focus;
use super::document;
use super::layout::LayoutManager;
use super::styles::Styles;

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: &Rect, app: &App) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Styles::separator());
        let inner = block.inner(*area);
        frame.render_widget(block, *area);

        let title = Line::from(vec![
            Span::styled(" ◆ ", Styles::version_tag()),
            Span::styled(APP_NAME, Styles::app_title()),
            Span::raw("  "),
            Span::styled(APP_SUBTITLE, Styles::app_subtitle()),
        ]);
        frame.render_widget(Paragraph::new(title), inner);

        let tag = Line::from(vec![
            Span::styled(app.generator_name().to_string(), Styles::dimmed()),
            Span::raw("  "),
            Span::styled(format!("v{APP_VERSION} "), Styles::version_tag()),
        ]);
        frame.render_widget(Paragraph::new(tag).alignment(Alignment::Right), inner);
    }
}

pub struct ErrorBanner;

impl ErrorBanner {
    pub fn render(frame: &mut Frame, area: &Rect, message: &str) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::error_banner());
        let inner = block.inner(*area);
        frame.render_widget(block, *area);
        frame.render_widget(Self::text(message), inner);
    }

    /// Rows needed to show `message` in full across `screen`, borders
    /// included. Never more than a third of the screen.
    pub fn height(message: &str, screen: Rect) -> u16 {
        let rows = Self::text(message).line_count(screen.width.saturating_sub(2));
        let rows = rows.min(u16::MAX as usize) as u16;
        rows.max(1).saturating_add(2).min((screen.height / 3).max(3))
    }

    fn text(message: &str) -> Paragraph<'static> {
        Paragraph::new(Line::from(vec![
            Span::styled("⚠ ", Styles::error_banner()),
            Span::styled(message.to_string(), Styles::error_banner()),
        ]))
        .wrap(Wrap { trim: true })
    }
}

/// A clickable "[ label ]".
pub struct Button;

impl Button {
    pub fn render(frame: &mut Frame, area: &Rect, label: &str, style: ratatui::style::Style) {
        let widget = Paragraph::new(format!("[ {label} ]"))
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(widget, *area);
    }
}

pub struct InputPanel;

impl InputPanel {
    pub fn render(frame: &mut Frame, area: &Rect, app: &App) {
        let focused = app.focus == Focus::Input;
        let block = Block::default()
            .title(Span::styled(labels::INPUT_TITLE, Styles::panel_title()))
            .borders(Borders::ALL)
            .border_style(Styles::panel_border(focused));
        frame.render_widget(block, *area);

        let layout = LayoutManager::input_layout(*area);

        let description = Paragraph::new(messages::INPUT_DESCRIPTION)
            .style(Styles::dimmed())
            .wrap(Wrap { trim: true });
        frame.render_widget(description, layout.description);

        Self::render_editor(frame, &layout.editor, app, focused);

        let count = Paragraph::new(format!("{} chars", app.state().idea_char_count())).style(Styles::dimmed());
        frame.render_widget(count, layout.char_count);

        Self::render_button(frame, &layout.generate_button, app);

        frame.render_widget(Paragraph::new(messages::PRO_TIP).style(Styles::dimmed()), layout.tip);
    }

    fn render_editor(frame: &mut Frame, area: &Rect, app: &App, focused: bool) {
        let state = app.state();
        let editing = focused && state.can_edit();

        let mut lines: Vec<Line<'static>> = Vec::new();
        if state.idea().is_empty() {
            if editing {
                lines.push(Line::from(Span::styled("▏", Styles::version_tag())));
            }
            lines.push(Line::styled(messages::PLACEHOLDER, Styles::placeholder()));
        } else {
            let text_style = if state.can_edit() { Styles::default() } else { Styles::dimmed() };
            for line in state.idea().split('\n') {
                lines.push(Line::styled(line.to_string(), text_style));
            }
            if editing {
                if let Some(last) = lines.last_mut() {
                    last.push_span(Span::styled("▏", Styles::version_tag()));
                }
            }
        }
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });

        // keep the end of the idea in view
        let overflow = paragraph.line_count(area.width).saturating_sub(area.height as usize);
        frame.render_widget(paragraph.scroll((overflow as u16, 0)), *area);
    }

    fn render_button(frame: &mut Frame, area: &Rect, app: &App) {
        let state = app.state();
        if state.is_loading() {
            Button::render(frame, area, labels::GENERATING, Styles::button_busy());
        } else {
            Button::render(frame, area, labels::GENERATE, Styles::button(state.can_generate()));
        }
    }
}

pub struct OutputPanel;

impl OutputPanel {
    pub fn render(frame: &mut Frame, area: &Rect, app: &App) {
        let focused = app.focus == Focus::Output;
        let state = app.state();

        if state.is_loading() {
            Self::render_loading(frame, area, app);
            return;
        }
        let Some(result) = state.result() else {
            Self::render_empty(frame, area);
            return;
        };

        let block = Block::default()
            .title(Span::styled(labels::OUTPUT_TITLE, Styles::panel_title()))
            .borders(Borders::ALL)
            .border_style(Styles::panel_border(focused));
        frame.render_widget(block, *area);

        let layout = LayoutManager::output_layout(*area);
        if app.copy_feedback.is_shown() {
            Button::render(frame, &layout.copy_button, labels::COPIED, Styles::button_done());
        } else {
            Button::render(frame, &layout.copy_button, labels::COPY, Styles::button(true));
        }

        let paragraph = Self::document(result, layout.body.width);
        let max = paragraph.line_count(layout.body.width).saturating_sub(layout.body.height as usize);
        let offset = app.scroll.offset.min(max as u16);
        frame.render_widget(paragraph.scroll((offset, 0)), layout.body);
    }

    fn document(result: &str, width: u16) -> Paragraph<'static> {
        Paragraph::new(document::framework_lines(result, width)).wrap(Wrap { trim: false })
    }

    /// Furthest the document can scroll in the last drawn viewport.
    pub fn max_scroll(app: &App) -> u16 {
        let state = app.state();
        let Some(result) = state.result().filter(|_| !state.is_loading()) else {
            return 0;
        };
        let main = LayoutManager::create_main_layout(app.viewport, state.error());
        let body = LayoutManager::output_layout(main.output).body;
        let lines = Self::document(result, body.width).line_count(body.width);
        lines.saturating_sub(body.height as usize).min(u16::MAX as usize) as u16
    }

    fn render_loading(frame: &mut Frame, area: &Rect, app: &App) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::panel_border(false));
        let inner = block.inner(*area);
        frame.render_widget(block, *area);

        let spinner = SPINNER_FRAMES[app.spinner_frame()];
        let lines = vec![
            Line::styled(spinner, Styles::spinner()),
            Line::default(),
            Line::styled(messages::LOADING_TITLE, Styles::status_title()),
            Line::styled(messages::LOADING_DETAIL, Styles::dimmed()),
        ];
        Self::render_centered(frame, inner, lines);
    }

    fn render_empty(frame: &mut Frame, area: &Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(Styles::dimmed());
        let inner = block.inner(*area);
        frame.render_widget(block, *area);

        let lines = vec![
            Line::styled("▤", Styles::dimmed()),
            Line::default(),
            Line::styled(messages::EMPTY_TITLE, Styles::status_title()),
            Line::styled(messages::EMPTY_DETAIL, Styles::dimmed()),
        ];
        Self::render_centered(frame, inner, lines);
    }

    fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        let height = (paragraph.line_count(area.width) as u16).min(area.height);
        let top = area.y + (area.height - height) / 2;
        frame.render_widget(paragraph, Rect::new(area.x, top, area.width, height));
    }
}

pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: &Rect) {
        let mut spans = Vec::new();
        for (key, desc) in [
            ("Ctrl+Enter", "Generate"),
            ("Ctrl+Y", "Copy"),
            ("Tab", "Focus"),
            ("PgUp/PgDn", "Scroll"),
            ("Ctrl+C", "Quit"),
        ] {
            spans.push(Span::styled(format!(" {key} "), Styles::help_key()));
            spans.push(Span::styled(format!("{desc} "), Styles::help_desc()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), *area);
    }
}

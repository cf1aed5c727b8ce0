pub mod components;
pub mod document;
pub mod layout;
pub mod styles;

use ratatui::Frame;

use crate::app::App;
use components::{ErrorBanner, Footer, Header, InputPanel};
pub use components::OutputPanel;
use layout::LayoutManager;

pub struct UI;

impl UI {
    pub fn draw(frame: &mut Frame, app: &App) {
        let error = app.state().error();
        let layout = LayoutManager::create_main_layout(frame.area(), error);

        Header::render(frame, &layout.header, app);
        if let Some(message) = error {
            ErrorBanner::render(frame, &layout.banner, message);
        }
        InputPanel::render(frame, &layout.input, app);
        OutputPanel::render(frame, &layout.output, app);
        Footer::render(frame, &layout.footer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryClipboard;
    use framework_generator::MockGenerator;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn app() -> App {
        App::new(Arc::new(MockGenerator::echo()), Box::new(MemoryClipboard::new()))
    }

    fn render(app: &App) -> String {
        render_at(app, 120, 40)
    }

    fn render_at(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| UI::draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn empty_state_shows_placeholder_and_disabled_button() {
        let screen = render(&app());
        assert!(screen.contains("ScholarFrame"));
        assert!(screen.contains("0 chars"));
        assert!(screen.contains("[ Generate Framework ]"));
        assert!(screen.contains("No Framework Generated Yet"));
        assert!(!screen.contains("Copy Markdown"));
        assert!(!screen.contains("⚠"));
    }

    #[test]
    fn typed_idea_updates_char_count() {
        let mut app = app();
        app.set_idea("Remote work");
        let screen = render(&app);
        assert!(screen.contains("Remote work"));
        assert!(screen.contains("11 chars"));
    }

    #[tokio::test]
    async fn result_renders_sections_and_copy_button() {
        let mut app = app();
        app.set_idea("pricing");
        assert!(app.generate());
        app.wait_for_generation().await;

        let screen = render(&app);
        assert!(screen.contains("Copy Markdown"));
        assert!(screen.contains("◉ 1. Phenomenon & Context"));
        assert!(screen.contains("• Simulated notes on: pricing"));
    }

    #[tokio::test]
    async fn loading_state_replaces_output_and_disables_button() {
        let generator = MockGenerator::echo().with_delay(std::time::Duration::from_millis(20));
        let mut app = App::new(Arc::new(generator), Box::new(MemoryClipboard::new()));
        app.set_idea("pricing");
        app.generate();

        let screen = render(&app);
        assert!(screen.contains("Designing Framework"));
        assert!(screen.contains("[ Generating... ]"));
        assert!(!screen.contains("No Framework Generated Yet"));
        app.wait_for_generation().await;
    }

    #[tokio::test]
    async fn failure_shows_banner_over_empty_output() {
        let mut app = App::new(Arc::new(MockGenerator::failing("401")), Box::new(MemoryClipboard::new()));
        app.set_idea("pricing");
        app.generate();
        app.wait_for_generation().await;

        let screen = render(&app);
        assert!(screen.contains("⚠ Failed to generate research framework."));
        assert!(screen.contains("No Framework Generated Yet"));
        assert!(!screen.contains("401"));
    }

    #[tokio::test]
    async fn banner_shows_whole_message_on_small_terminal() {
        let mut app = App::new(Arc::new(MockGenerator::failing("quota")), Box::new(MemoryClipboard::new()));
        app.set_idea("pricing");
        app.generate();
        app.wait_for_generation().await;

        let screen = render_at(&app, 80, 24);
        assert!(screen.contains("⚠ Failed to generate research framework."));
        assert!(screen.contains("again."), "banner cut short:\n{screen}");
        assert!(screen.contains("No Framework Generated Yet"));
    }

    #[tokio::test]
    async fn unstructured_result_is_shown_raw() {
        let mut app = App::new(
            Arc::new(MockGenerator::responding("Plain prose without headings")),
            Box::new(MemoryClipboard::new()),
        );
        app.set_idea("pricing");
        app.generate();
        app.wait_for_generation().await;

        let screen = render(&app);
        assert!(screen.contains("Plain prose without headings"));
        assert!(screen.contains("Copy Markdown"));
    }
}

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};

use scholar_tui::backend::build_generator;
use scholar_tui::config::{self, GenerationConfig};
use scholar_tui::constants::POLL_INTERVAL_MS;
use scholar_tui::handlers::InputHandler;
use scholar_tui::logger;
use scholar_tui::services::SystemClipboardService;
use scholar_tui::settings::AppSettings;
use scholar_tui::ui::UI;
use scholar_tui::App;

#[tokio::main]
async fn main() -> Result<()> {
    // .env first so it can set SCHOLARFRAME_LOG
    let dotenv = config::load_dotenv();
    let log_file = logger::init_logging()?;
    if let Some(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let settings = match AppSettings::load() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Ignoring settings file: {:#}", e);
            eprintln!("Warning: {e:#}; using default settings");
            AppSettings::default()
        }
    };
    let generation = match GenerationConfig::resolve(&settings) {
        Ok(generation) => generation,
        Err(e) => {
            tracing::error!("Invalid configuration: {:#}", e);
            eprintln!("Error: {e:#}");
            return Ok(());
        }
    };

    // Fail before touching the terminal when no credentials are available
    let generator = match build_generator(&generation) {
        Ok(generator) => generator,
        Err(e) => {
            tracing::error!("Cannot build generator: {:#}", e);
            eprintln!("Error: {e:#}");
            eprintln!("Set GEMINI_API_KEY (or GROQ_API_KEY with SCHOLARFRAME_PROVIDER=groq) in your environment or .env file");
            return Ok(());
        }
    };

    tracing::info!(
        provider = generator.name(),
        model = %generation.model,
        "Starting with log file {}",
        log_file.display()
    );

    let app = App::new(generator, Box::new(SystemClipboardService::new()));

    let (mut terminal, enhanced_keys) = setup_terminal()?;
    let result = run_application(&mut terminal, app).await;
    restore_terminal(&mut terminal, enhanced_keys)?;

    if let Err(e) = result {
        tracing::error!("Application error: {:#}", e);
        eprintln!("Error: {e:#}");
    }

    tracing::info!("Exiting");
    Ok(())
}

fn setup_terminal() -> Result<(Terminal<CrosstermBackend<io::Stdout>>, bool)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;

    // Lets Ctrl+Enter arrive as its own key where the terminal supports it
    let enhanced_keys = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced_keys {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }

    let backend = CrosstermBackend::new(stdout);
    Ok((Terminal::new(backend)?, enhanced_keys))
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    enhanced_keys: bool,
) -> Result<()> {
    if enhanced_keys {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_application<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()> {
    loop {
        app.on_tick();
        app.poll_generation();

        let frame = terminal.draw(|frame| UI::draw(frame, &app))?;
        app.set_viewport(frame.area);

        if should_quit(&mut app).await? {
            break;
        }
    }
    Ok(())
}

async fn should_quit(app: &mut App) -> Result<bool> {
    if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
        return Ok(InputHandler::handle_event(app, event::read()?));
    }
    Ok(false)
}

use hrbuddie::app::App;
use hrbuddie::cli::{parse_args, run_cli_command};
use hrbuddie::config::ShellConfig;
use hrbuddie::logging::{default_log_path, init_file_logging};
use hrbuddie::terminal::{setup_panic_hook, TerminalManager};
use hrbuddie::theme::{EnvDarkModeSignal, ThemeProvider};

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;

/// Redraw at least this often so the header date rolls over.
const CLOCK_TICK: Duration = Duration::from_secs(60);

fn init_logging() {
    let result = default_log_path().and_then(|path| init_file_logging(&path));
    if let Err(e) = result {
        eprintln!("Warning: logging disabled: {}", e);
    }
}

fn build_app(config: ShellConfig) -> Result<App> {
    let tree = config.load_navigation()?;
    let store = config.preference_store()?;
    let theme = ThemeProvider::new(
        config.default_theme,
        Box::new(store),
        Box::new(EnvDarkModeSignal),
    );
    let mut app = App::new(config, tree, theme);
    app.mount();
    Ok(app)
}

async fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut events = EventStream::new();
    let mut clock = tokio::time::interval(CLOCK_TICK);

    loop {
        if app.dirty {
            let mut rendered = Ok(());
            terminal.draw(|f| rendered = app.render(f))?;
            rendered?;
        }

        tokio::select! {
            _ = clock.tick() => app.mark_dirty(),
            event = events.next() => match event {
                Some(Ok(event)) => app.handle_event(&event)?,
                Some(Err(e)) => {
                    tracing::error!("Terminal event stream failed: {}", e);
                    return Err(e.into());
                }
                None => break,
            },
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Informational flags exit here, before the terminal is touched.
    let config = run_cli_command(parse_args(std::env::args())?);

    init_logging();
    setup_panic_hook();

    let mut app = build_app(config)?;
    tracing::info!("Starting HrBuddie {}", hrbuddie::cli::VERSION);

    let mut manager = TerminalManager::new()?;
    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore();

    if let Err(ref e) = result {
        tracing::error!("Shell exited with error: {}", e);
    } else {
        tracing::info!("Shell exited");
    }
    result
}

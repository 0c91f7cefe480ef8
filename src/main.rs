use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use mediasuggest::app::App;
use mediasuggest::autocomplete::AutocompleteSettings;
use mediasuggest::config::{self, Config};
use mediasuggest::provider::catalog::builtin_catalog;
use mediasuggest::provider::{CatalogSuggester, load_catalog, spawn_worker};
use mediasuggest::suggestion::Suggestion;

/// How long to wait for terminal input before ticking timers
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Search box with debounced autocomplete over a media catalog
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (default: ~/.config/mediasuggest/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog file (.toml or .json); the built-in catalog is used otherwise
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Quiet period in milliseconds before suggestions are fetched
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print suggestions for one query and exit
    #[arg(long)]
    query: Option<String>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let mut config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config()?,
    };
    if let Some(debounce_ms) = args.debounce_ms {
        config.suggest.debounce_ms = debounce_ms;
    }

    let catalog_path = args.catalog.clone().or_else(|| config.catalog.path.clone());
    let entries = match &catalog_path {
        Some(path) => load_catalog(path)?,
        None => builtin_catalog(),
    };
    log::info!("Loaded {} catalog entries", entries.len());

    if let Some(query) = &args.query {
        let suggester = CatalogSuggester::new(entries, config.suggest.max_results);
        return print_suggestions(&suggester.matches(query));
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture, EnableFocusChange)?;

    // Run the application
    let result = run(terminal, &config, entries);

    // Restore terminal (automatic cleanup)
    let _ = execute!(std::io::stdout(), DisableFocusChange, DisableMouseCapture);
    ratatui::restore();

    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn print_suggestions(suggestions: &[Suggestion]) -> Result<()> {
    let mut out = std::io::stdout().lock();
    for suggestion in suggestions {
        let icon = suggestion.icon().unwrap_or(" ");
        if suggestion.kind.is_empty() {
            writeln!(out, "{} {}", icon, suggestion.value)?;
        } else {
            writeln!(out, "{} {} [{}]", icon, suggestion.value, suggestion.kind)?;
        }
    }
    Ok(())
}

fn run(mut terminal: DefaultTerminal, config: &Config, entries: Vec<Suggestion>) -> Result<()> {
    let suggester = CatalogSuggester::new(entries, config.suggest.max_results);
    let catalog_size = suggester.len();
    if suggester.is_empty() {
        log::warn!("Catalog is empty; no suggestions will be shown");
    }
    let provider = spawn_worker(suggester, Duration::from_millis(config.catalog.latency_ms));

    let mut app = App::new(AutocompleteSettings::from(&config.suggest));
    app.set_suggester(provider, catalog_size);
    app.relayout(terminal.get_frame().area());

    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events
        if event::poll(POLL_INTERVAL)? {
            app.handle_event(event::read()?, Instant::now());
        }
        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

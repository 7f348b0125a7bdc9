use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

use projectdeck::cli::CliArgs;
use projectdeck::config::Config;
use projectdeck::store;
use projectdeck::tui::{AppModel, TuiUpdate, TuiView};

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    // --log beats RUST_LOG beats the "info" default
    let filter = match &cli_args.log {
        Some(filter) => EnvFilter::new(filter),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config_path = cli_args.config.clone();
    let config = Config::from_cli_and_file(cli_args, config_path)?;
    info!(data_file = %config.data_file.display(), "starting projectdeck");

    let projects = store::load_projects(&config.data_file)?;
    let mut model = AppModel::new(&config, projects);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut model, &mut terminal);

    // Terminal teardown, even on error
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if config.ui.autosave_on_exit {
        store::save_projects(&config.data_file, &model.projects)?;
        info!("catalog saved");
    }

    result
}

fn run<B: Backend>(model: &mut AppModel, terminal: &mut Terminal<B>) -> Result<()> {
    loop {
        terminal.draw(|frame| TuiView::render(model, frame))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                TuiUpdate::handle_key(model, key.code, key.modifiers)?;
            }
        }

        if model.should_quit {
            info!("quit requested by user");
            break;
        }
    }
    Ok(())
}

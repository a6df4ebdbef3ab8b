use std::fs::{self, File};
use std::io;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::EnvFilter;

use dirscope::cli::Cli;
use dirscope::input::map_key_to_intent;
use dirscope::report;
use dirscope::scanner::{IncrementalScheduler, IndicatifProgress, JsonStore};
use dirscope::view::{render_files, render_folders, render_types};
use dirscope::viewmodel::{Action, AppViewModel, ViewMode};

/// Pass-driving budget per frame; keeps the UI at a comfortable rate
/// while scans make visible progress.
const TICK_BUDGET: Duration = Duration::from_millis(8);

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.report)?;

    let mut scheduler = IncrementalScheduler::new(cli.scan_config());
    if !cli.no_cache {
        scheduler = scheduler.with_store(Box::new(JsonStore::in_user_cache()?));
    }
    scheduler.start();
    scheduler.set_root(&cli.root)?;

    if cli.report {
        return report::run(
            &mut scheduler,
            cli.sort.into(),
            &IndicatifProgress,
            &mut io::stdout().lock(),
        );
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppViewModel::new(scheduler, cli.sort.into());
    let result = run_app(&mut terminal, &mut app);
    app.shutdown();

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppViewModel,
) -> Result<()> {
    loop {
        // Render
        terminal.draw(|f| {
            let area = f.area();
            match app.view_mode() {
                ViewMode::Folders => render_folders(f, &app.folders_vm, area),
                ViewMode::ByType => render_types(f, &app.types_vm, area),
                ViewMode::LargestFiles => render_files(f, &app.files_vm, area),
            }
        })?;

        // Advance in-flight passes between frames
        app.tick(TICK_BUDGET);

        // Poll briefly while scanning so passes keep advancing; block
        // longer when idle
        let timeout = if app.is_scanning() {
            Duration::from_millis(15)
        } else {
            Duration::from_millis(250)
        };
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && let Some(intent) =
                    map_key_to_intent(&key, app.input_view_mode(), app.can_go_back())
            {
                match app.handle_intent(intent) {
                    Action::Quit => break,
                    Action::Redraw => {}
                }
            }
        }
    }

    Ok(())
}

fn init_logging(report_mode: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dirscope=warn"));

    if report_mode {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else {
        // The TUI owns the terminal; warnings go to a log file instead
        let dir = dirs::cache_dir()
            .context("could not determine cache directory")?
            .join("dirscope");
        fs::create_dir_all(&dir)
            .with_context(|| format!("could not create {}", dir.display()))?;
        let log_file = File::create(dir.join("dirscope.log"))
            .with_context(|| format!("could not open log file in {}", dir.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(log_file))
            .with_ansi(false)
            .init();
    }
    Ok(())
}

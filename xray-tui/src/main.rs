//! xray TUI — browse the stat groups of an analysis result.

use std::fs::File;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::warn;

use xray_core::{AnalysisResult, Layout};
use xray_tui::{app::AppState, input, persistence, ui};

#[derive(Parser)]
#[command(name = "xray-tui", about = "Terminal viewer for xray analysis results")]
struct Args {
    /// Path to the xray JSON document.
    xray: PathBuf,

    /// Layout TOML. Defaults to the last layout used, then the built-in one.
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Start with statistic descriptions shown.
    #[arg(long, default_value_t = false)]
    descriptions: bool,

    /// Write logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let state_path = persistence::default_path();
    let persisted = persistence::load(&state_path);

    let xray = AnalysisResult::from_json_file(&args.xray)
        .with_context(|| format!("loading {}", args.xray.display()))?;

    let layout_path = args.layout.clone().or_else(|| persisted.layout_path.clone());
    let (layout, layout_path, fallback) = resolve_layout(layout_path, args.layout.is_some())?;

    let mut app = AppState::new(xray, layout, args.xray.clone(), layout_path);
    persistence::apply(&mut app, &persisted);
    if args.descriptions {
        app.show_descriptions = true;
    }
    if let Some(msg) = fallback {
        app.set_warning(msg);
    }

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    if let Err(e) = persistence::save(&state_path, &persistence::extract(&app)) {
        warn!(error = %e, "failed to save viewer state");
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// An explicit `--layout` must load; a remembered one falls back to the
/// built-in layout with a warning.
fn resolve_layout(
    path: Option<PathBuf>,
    explicit: bool,
) -> Result<(Layout, Option<PathBuf>, Option<String>)> {
    let Some(path) = path else {
        return Ok((Layout::default(), None, None));
    };
    match Layout::from_file(&path) {
        Ok(layout) => Ok((layout, Some(path), None)),
        Err(e) if !explicit => {
            warn!(path = %path.display(), error = %e, "saved layout unusable, using built-in");
            Ok((
                Layout::default(),
                None,
                Some(format!("Layout {} unusable, using built-in", path.display())),
            ))
        }
        Err(e) => Err(e).with_context(|| format!("loading layout {}", path.display())),
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}

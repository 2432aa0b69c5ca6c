use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::{Write, stdout};
use std::path::PathBuf;

use batstats::App;
use batstats::config::{self, Config, ConfigResult};
use batstats::error::StatsError;
use batstats::input::discover;
use batstats::pipeline::{self, Settings};
use batstats::render::{self, OutputFormat};
use batstats::stats::SortKey;

/// Batting statistics from folders of match JSON files
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Aggregate per-player batting statistics from cricket match JSON files"
)]
struct Args {
    /// Folders of *.json files, individual JSON files, or `-` for stdin
    paths: Vec<PathBuf>,

    /// Column holding the player identifier (nested keys joined with '.')
    #[arg(long)]
    player_column: Option<String>,

    /// Column holding runs scored
    #[arg(long)]
    runs_column: Option<String>,

    /// Column holding balls faced
    #[arg(long)]
    balls_column: Option<String>,

    /// Loader threads; 0 uses every core
    #[arg(long)]
    threads: Option<usize>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Decimals for average and strike rate
    #[arg(long)]
    precision: Option<usize>,

    /// Order rows by this column
    #[arg(long, value_enum)]
    sort_by: Option<SortKey>,

    /// Open the terminal UI instead of printing
    #[arg(short, long)]
    interactive: bool,

    /// Config file to use instead of ~/.config/batstats/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// How the final table is presented
struct OutputOptions {
    format: OutputFormat,
    precision: usize,
    sort_key: SortKey,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.interactive);
    color_eyre::install()?;

    let config_result = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };

    let settings = resolve_settings(&args, &config_result.config);
    let output = resolve_output(&args, &config_result.config);

    if args.interactive {
        return run_interactive(&args, settings, output, config_result);
    }

    if let Some(warning) = &config_result.warning {
        eprintln!("warning: {}", warning);
    }

    if args.paths.is_empty() {
        return Err(StatsError::NoInput.into());
    }

    let report = pipeline::run_discovered(discover(&args.paths), &settings);
    for diagnostic in &report.diagnostics {
        eprintln!("error: {}", diagnostic);
    }

    let mut table = report.outcome?;
    table.sort_by(output.sort_key);
    render::write_table(stdout().lock(), &table, output.format, output.precision)?;

    Ok(())
}

/// Config values with command-line overrides applied
fn resolve_settings(args: &Args, config: &Config) -> Settings {
    let mut settings = Settings::from(config);
    if let Some(player) = &args.player_column {
        settings.columns.player = player.clone();
    }
    if let Some(runs) = &args.runs_column {
        settings.columns.runs = runs.clone();
    }
    if let Some(balls) = &args.balls_column {
        settings.columns.balls = balls.clone();
    }
    if let Some(threads) = args.threads {
        settings.threads = threads;
    }
    settings
}

fn resolve_output(args: &Args, config: &Config) -> OutputOptions {
    OutputOptions {
        format: args.format.unwrap_or(config.output.format),
        precision: args
            .precision
            .unwrap_or(config.output.precision)
            .min(render::MAX_PRECISION),
        sort_key: args.sort_by.unwrap_or_default(),
    }
}

/// env_logger with a timestamped line format. In interactive mode the log
/// goes to `<tmp>/batstats-debug.log` so it cannot tear the UI.
fn init_logging(verbose: u8, interactive: bool) {
    let default_level = match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));

    builder.format(|buf, record| {
        let datetime: chrono::DateTime<chrono::Local> = std::time::SystemTime::now().into();
        writeln!(
            buf,
            "[{}] [{}] {}",
            datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
            record.level(),
            record.args()
        )
    });

    if interactive {
        let path = std::env::temp_dir().join("batstats-debug.log");
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(_) => {
                builder.filter_level(log::LevelFilter::Off);
            }
        }
    }

    builder.init();
}

fn run_interactive(
    args: &Args,
    settings: Settings,
    output: OutputOptions,
    config_result: ConfigResult,
) -> Result<()> {
    let folder = args
        .paths
        .first()
        .map(|p| p.display().to_string())
        .or(config_result.config.ui.folder)
        .unwrap_or_default();

    log::debug!("=== BATSTATS SESSION STARTED ===");

    let terminal = init_terminal()?;

    let mut app = App::new(&folder, settings, output.precision, output.sort_key);
    if let Some(warning) = &config_result.warning {
        app.notification.show_warning(warning);
    }

    let result = run(terminal, app);

    restore_terminal()?;
    result?;

    log::debug!("=== BATSTATS SESSION ENDED ===");
    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}

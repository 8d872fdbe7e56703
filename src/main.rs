use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::{IsTerminal, stdout};
use std::path::PathBuf;
use std::time::Duration;

use toast::app::{App, ToastRequest};
use toast::config::{self, ConfigResult};
use toast::error::ToastError;
use toast::notification::Severity;

/// Show a transient notification in the terminal
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Transient terminal notifications that hide themselves"
)]
struct Args {
    /// Message to show
    message: String,

    /// info, success, error or warning (anything else is treated as info)
    #[arg(short, long)]
    severity: Option<String>,

    /// Milliseconds before the toast hides itself
    #[arg(short, long, value_name = "MS")]
    duration: Option<u64>,

    /// Config file to use instead of ~/.config/toast/config.toml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Keep running after the toast hides
    #[arg(long)]
    stay: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/toast-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    let args = Args::parse();

    let config_result = match &args.config {
        Some(path) => ConfigResult {
            config: config::load_config_from(path)?,
            warning: None,
        },
        None => config::load_config(),
    };

    if !stdout().is_terminal() {
        return Err(ToastError::NotATerminal.into());
    }

    let request = build_request(&args, &config_result.config);
    let app = App::new(request, &config_result.config, args.stay)
        .with_startup_warning(config_result.warning);

    let terminal = init_terminal()?;
    let result = run(terminal, app);
    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== TOAST DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/toast-debug.log")
    else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== TOAST DEBUG SESSION STARTED ===");
}

/// Merge CLI overrides into the configured defaults
fn build_request(args: &Args, config: &config::Config) -> ToastRequest {
    let mut request = ToastRequest::new(args.message.as_str(), config);

    if let Some(name) = &args.severity {
        #[cfg(debug_assertions)]
        if Severity::parse(name).is_none() {
            log::warn!("Unknown severity {:?}, using info", name);
        }
        request.severity = Severity::from(name.as_str());
    }
    if let Some(ms) = args.duration {
        request.duration = Duration::from_millis(ms);
    }

    request
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    app.start();

    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

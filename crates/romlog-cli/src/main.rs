//! Romlog - terminal UI for browsing ROM build changelogs
//!
//! Renders a changelog document as a scrollable page with:
//! - A navigation sidebar over the device sections
//! - A header title that follows the section being read
//! - A pointer marker with trailing dots on mouse-capable terminals
//! - Share-to-clipboard for individual build cards

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use romlog_core::{paths, Changelog, Preferences};

mod tui;

/// Romlog - build changelog browser
#[derive(Parser)]
#[command(name = "romlog")]
#[command(about = "Browse ROM build changelogs in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Changelog file to open (defaults to ./changelog.toml)
    file: Option<PathBuf>,

    /// Theme name
    #[arg(short, long)]
    theme: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a sample changelog file to stdout
    Sample,

    /// List available themes
    Themes,
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    // Initialize logging to file (not stdout/stderr which would mess up the TUI)
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    #[cfg(unix)]
    let null_device = "/dev/null";
    #[cfg(windows)]
    let null_device = "NUL";

    let log_file = std::fs::File::create(log_dir.join("romlog.log"))
        .unwrap_or_else(|_| std::fs::File::create(null_device).unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Sample) => {
            print!("{}", romlog_core::changelog::SAMPLE);
        }
        Some(Commands::Themes) => {
            println!("Available themes ({}):", tui::THEME_REGISTRY.count());
            for theme in tui::THEME_REGISTRY.list() {
                println!("  {} - {}", theme.name, theme.display_name);
            }
        }
        None => {
            let prefs = Preferences::load();
            let theme_name = cli.theme.as_deref().unwrap_or(&prefs.theme);
            let theme = tui::THEME_REGISTRY.get_or_default(theme_name);
            tracing::info!("Using theme: {}", theme.name);

            let path = cli.file.unwrap_or_else(|| PathBuf::from("changelog.toml"));
            let changelog = Changelog::load(&path).with_context(|| {
                format!(
                    "could not open {} (run `romlog sample > changelog.toml` to start one)",
                    path.display()
                )
            })?;
            tracing::info!(
                file = %path.display(),
                devices = changelog.devices.len(),
                "loaded changelog"
            );

            let file_name = path.display().to_string();
            let mut app = tui::App::new(changelog, prefs, theme.clone(), file_name);
            app.run().await?;
        }
    }

    Ok(())
}

//! boton CLI
//!
//! Interactive terminal button with a click counter, plus a headless
//! render command for scripting.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;

use boton::button::Button;
use boton::logging::{default_log_dir, init_logging};
use boton::report::format_report;
use boton::types::{OutputFormat, RenderReport, TuiConfig};

#[derive(Parser)]
#[command(name = "boton")]
#[command(about = "A terminal button that counts its clicks")]
#[command(version)]
struct Cli {
    /// Directory for log files (default: platform data dir)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive button (default)
    Run {
        /// Don't capture the mouse; activate with Enter/Space only
        #[arg(long)]
        no_mouse: bool,
    },

    /// Mount a button, activate it N times, print what it shows
    Render {
        /// Number of activations
        #[arg(long, default_value_t = 0)]
        clicks: u64,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Held until exit so buffered log lines are flushed.
    let log_dir = match cli.log_dir {
        Some(dir) => Ok(dir),
        None => default_log_dir(),
    };
    let _log_guard = match log_dir.and_then(|dir| init_logging(&dir)) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: file logging disabled: {}", e);
            None
        }
    };

    let result = match cli.command.unwrap_or(Commands::Run { no_mouse: false }) {
        Commands::Run { no_mouse } => cmd_run(no_mouse),
        Commands::Render { clicks, format } => cmd_render(clicks, format.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMANDS
// ============================================================================

fn cmd_run(no_mouse: bool) -> Result<(), String> {
    let config = TuiConfig { mouse: !no_mouse };
    boton::tui::run(config).map_err(|e| format!("Terminal error: {}", e))
}

fn cmd_render(clicks: u64, format: OutputFormat) -> Result<(), String> {
    let mut button = Button::mount();
    for _ in 0..clicks {
        button.activate();
    }
    info!(clicks, "headless render");

    let report = RenderReport::from_button(&button);
    let output = format_report(&report, format).map_err(|e| e.to_string())?;
    print!("{}", output);
    Ok(())
}

//! CLI entry point for trimnames

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::Level;
use trimnames::{ConsoleFormatter, Renamer, RenamerConfig};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "trimnames")]
#[command(
    about = "Trim leading/trailing whitespace from file and directory names (skips node_modules)"
)]
#[command(version)]
struct Args {
    /// Root directory
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Apply changes (without this flag only planned renames are printed)
    #[arg(short, long)]
    apply: bool,

    /// Also skip paths with a segment matching NAME or glob pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log more detail to stderr (-v for a summary, -vv for every skip decision)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = RenamerConfig {
        dry_run: !args.apply,
        ignore_patterns: args.ignore,
    };
    // The root is used as given so reported paths keep its form, e.g. a leading "./"
    let mut output = ConsoleFormatter::new(should_use_color(args.color));

    if let Err(e) = Renamer::new(config).process(&args.root, &mut output) {
        eprintln!("trimnames: error: {}", e);
        process::exit(1);
    }
}

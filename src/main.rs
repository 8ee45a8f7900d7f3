//! Chlorophyll - CLI

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chlorophyll::frontend::lexer::Lexer;
use chlorophyll::repl::{self, LineRepl};
use chlorophyll::util::config::{self, ReplMode, UserConfig};
use chlorophyll::util::logger::{self, LogLevel};
use chlorophyll::{parse_file, ParseError, NAME, VERSION};
use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use tracing::warn;

/// Tokenizer and Pratt parser front-end for a small educational language
#[derive(Parser, Debug)]
#[command(name = "chlorophyll")]
#[command(author = "Chlorophyll Team")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to ~/.config/chlorophyll/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive shell (default)
    Repl {
        /// What to print for each line
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// Print the tokens of a code string
    Tokens {
        /// Code to tokenize
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Parse a source file and print the tree
    Parse {
        /// Source file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a source file for parse errors
    Check {
        /// Source file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print version information
    Version,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Tokens,
    Parse,
}

impl From<ModeArg> for ReplMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Tokens => ReplMode::Tokens,
            ModeArg::Parse => ReplMode::Parse,
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => config::load_user_config().unwrap_or_else(|e| {
            eprintln!("ignoring user config: {}", e);
            UserConfig::default()
        }),
    };

    if args.verbose {
        logger::init_debug();
        eprintln!("{} version: {}", NAME, VERSION);
        eprintln!("Host: {}", std::env::consts::OS);
    } else {
        match config.log.level.parse::<LogLevel>() {
            Ok(level) => logger::init_with_level(level),
            Err(e) => {
                logger::init();
                warn!("{}, using warn", e);
            }
        }
    }

    match args.command.unwrap_or(Commands::Repl { mode: None }) {
        Commands::Repl { mode } => {
            let mut repl_config = config.repl.clone();
            if let Some(mode) = mode {
                repl_config.mode = mode.into();
            }
            if io::stdin().is_terminal() {
                LineRepl::with_config(repl_config)?.run()?;
            } else {
                println!("{}", repl::greeting());
                repl::run_with_io(io::stdin().lock(), io::stdout().lock(), &repl_config)
                    .context("Failed to run shell")?;
            }
        }
        Commands::Tokens { code } => {
            for token in Lexer::new(&code) {
                println!("{}", token);
            }
        }
        Commands::Parse { file, json } => {
            let output = parse_file(&file)?;
            if json {
                let text = serde_json::to_string_pretty(&output.program)
                    .context("Failed to serialize tree")?;
                println!("{}", text);
            } else if !output.program.is_empty() {
                println!("{}", output.program);
            }
            report(&file, &output.errors, config.repl.colors);
            if !output.is_clean() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Check { file } => {
            let output = parse_file(&file)?;
            report(&file, &output.errors, config.repl.colors);
            if !output.is_clean() {
                return Ok(ExitCode::FAILURE);
            }
            eprintln!("Check passed!");
        }
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Print diagnostics to stderr as `file:line:col: error: message`
fn report(
    file: &Path,
    errors: &[ParseError],
    colors: bool,
) {
    for error in errors {
        let span = error.span();
        let label = if colors {
            "error".red().to_string()
        } else {
            "error".to_string()
        };
        eprintln!(
            "{}:{}:{}: {}: {}",
            file.display(),
            span.start.line,
            span.start.column,
            label,
            error
        );
    }
}

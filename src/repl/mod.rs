//! Interactive shell
//!
//! Reads one line at a time, runs it through a fresh lexer and prints the
//! tokens (or, in parse mode, the tree and its diagnostics). It is a
//! debugging aid; nothing here feeds back into the parser.
//!
//! [`run_with_io`] drives the shell over arbitrary streams, [`LineRepl`]
//! adds rustyline editing and history for terminals.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use rustyline::config::Config;
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::Editor;
use tracing::debug;

use crate::frontend::lexer::Lexer;
use crate::frontend::parse_source;
use crate::util::config::{ReplConfig, ReplMode};

const HELP: &str = "\
Commands:
  :tokens   print the tokens of each line
  :parse    print the parsed program and its errors
  :help     show this message
  :quit     leave the shell";

/// Greeting printed when the shell starts
pub fn greeting() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "friend".to_string());
    format!("Hello {}. Welcome to Chlorophyll.\nType commands here", user)
}

/// What to do after a line was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Leave the shell
    Exit,
    /// Print this text (may be empty) and read the next line
    Output(String),
}

/// Per-shell state: current mode and output styling
#[derive(Debug, Clone)]
pub struct Session {
    mode: ReplMode,
    colors: bool,
}

impl Session {
    pub fn new(config: &ReplConfig) -> Self {
        Self {
            mode: config.mode,
            colors: config.colors,
        }
    }

    #[inline]
    pub fn mode(&self) -> ReplMode {
        self.mode
    }

    /// Handle one input line
    pub fn handle_line(
        &mut self,
        line: &str,
    ) -> CommandResult {
        let trimmed = line.trim();
        if let Some(command) = trimmed.strip_prefix(':') {
            return self.handle_command(command);
        }

        let output = match self.mode {
            ReplMode::Tokens => render_tokens(line),
            ReplMode::Parse => self.render_parse(line),
        };
        CommandResult::Output(output)
    }

    fn handle_command(
        &mut self,
        command: &str,
    ) -> CommandResult {
        debug!("shell command :{}", command);
        match command {
            "q" | "quit" | "exit" => CommandResult::Exit,
            "tokens" => {
                self.mode = ReplMode::Tokens;
                CommandResult::Output("mode: tokens".to_string())
            }
            "parse" => {
                self.mode = ReplMode::Parse;
                CommandResult::Output("mode: parse".to_string())
            }
            "help" | "h" => CommandResult::Output(HELP.to_string()),
            other => CommandResult::Output(format!(
                "unknown command :{} (try :help)",
                other
            )),
        }
    }

    fn render_parse(
        &self,
        line: &str,
    ) -> String {
        let output = parse_source(line);
        let mut lines = Vec::new();

        let rendered = output.program.to_string();
        if !rendered.is_empty() {
            lines.push(rendered);
        }
        for error in &output.errors {
            let message = format!("error: {}", error);
            if self.colors {
                lines.push(message.red().to_string());
            } else {
                lines.push(message);
            }
        }
        lines.join("\n")
    }
}

/// One token per line, stopping before end-of-input
pub fn render_tokens(line: &str) -> String {
    Lexer::new(line)
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the shell over arbitrary streams until end of input or `:quit`
///
/// The prompt is written before every read.
pub fn run_with_io<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: &ReplConfig,
) -> io::Result<()> {
    let mut session = Session::new(config);
    let mut line = String::new();

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match session.handle_line(line.trim_end_matches(['\n', '\r'])) {
            CommandResult::Exit => break,
            CommandResult::Output(text) => {
                if !text.is_empty() {
                    writeln!(output, "{}", text)?;
                }
            }
        }
    }

    Ok(())
}

/// Line REPL
///
/// A line-based REPL with rustyline support for editing and history.
pub struct LineRepl {
    /// Configuration
    config: ReplConfig,
    /// rustyline editor
    editor: Editor<(), FileHistory>,
    session: Session,
}

impl LineRepl {
    /// Create with custom config
    pub fn with_config(config: ReplConfig) -> Result<Self> {
        let rl_config = Config::builder()
            .history_ignore_space(true)
            .max_history_size(config.history_size)
            .context("invalid history size")?
            .build();

        let mut editor =
            Editor::with_config(rl_config).context("failed to initialize line editor")?;

        // Load history if file exists
        if let Some(ref history_file) = config.history_file {
            if history_file.exists() {
                let _ = editor.load_history(history_file);
            }
        }

        let session = Session::new(&config);
        Ok(Self {
            config,
            editor,
            session,
        })
    }

    /// Run the REPL
    pub fn run(&mut self) -> Result<()> {
        println!("{}", greeting());

        loop {
            match self.editor.readline(&self.config.prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = self.editor.add_history_entry(line.as_str());
                    }
                    match self.session.handle_line(&line) {
                        CommandResult::Exit => break,
                        CommandResult::Output(text) => {
                            if !text.is_empty() {
                                println!("{}", text);
                            }
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl-C pressed
                    println!("(Interrupted)");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl-D pressed
                    break;
                }
                Err(e) => return Err(e).context("failed to read line"),
            }
        }

        // Save history
        if let Some(ref history_file) = self.config.history_file {
            let _ = self.editor.save_history(history_file);
        }

        Ok(())
    }
}

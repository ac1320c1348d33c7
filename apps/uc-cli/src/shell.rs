//! Interactive form over stdin/stdout.
//!
//! Each line is one user action against the session. The session queues
//! state changes; after every action the loop drains them and re-renders
//! the form when anything changed.

use std::io::{BufRead, Write};

use uc_app::{AppResult, Session, failure_message, needs_render};
use uc_core::{Category, UcError};

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Category(Category),
    From(String),
    To(String),
    Swap,
    Value(String),
    Precision(i64),
    Convert(Option<String>),
    Units,
    History { all: bool },
    Export,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParseError {
    #[error("Unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{command}' needs an argument")]
    MissingArgument { command: &'static str },

    #[error(transparent)]
    Category(#[from] UcError),

    #[error("Precision must be a whole number, got '{0}'")]
    Precision(String),
}

impl ShellCommand {
    /// Parse one input line; blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let arg = |command: &'static str| {
            if rest.is_empty() {
                Err(ParseError::MissingArgument { command })
            } else {
                Ok(rest.to_string())
            }
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "category" | "cat" => Self::Category(arg("category")?.parse()?),
            // Unit names may contain spaces, e.g. "t (metric tonne)"
            "from" => Self::From(arg("from")?),
            "to" => Self::To(arg("to")?),
            "swap" => Self::Swap,
            "value" => Self::Value(arg("value")?),
            "precision" => {
                let raw = arg("precision")?;
                let value = raw.parse().map_err(|_| ParseError::Precision(raw))?;
                Self::Precision(value)
            }
            "convert" | "c" => Self::Convert((!rest.is_empty()).then(|| rest.to_string())),
            "units" => Self::Units,
            "history" => Self::History { all: rest == "all" },
            "export" => Self::Export,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

const HELP: &str = "\
Commands:
  category <name>    switch category (Length, Mass, Volume, Temperature)
  from <unit>        pick the source unit
  to <unit>          pick the target unit
  swap               exchange source and target units
  value <number>     set the value to convert
  precision <0-10>   decimal places shown in results
  convert [number]   convert (optionally setting the value first)
  units              list units for the current category
  history [all]      show recent conversions (or every one)
  export             print the full history as JSON
  quit               leave the shell";

/// Run the interactive loop until `quit` or end of input.
pub fn run_shell<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
) -> AppResult<()> {
    writeln!(out, "Unit Converter: type 'help' for commands")?;
    render_form(session, out)?;
    session.take_changes();

    for line in input.lines() {
        let line = line?;
        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "✗ {}", e)?;
                continue;
            }
        };

        if command == ShellCommand::Quit {
            break;
        }
        apply(session, command, out)?;

        if needs_render(&session.take_changes()) {
            render_form(session, out)?;
        }
    }
    Ok(())
}

fn apply<W: Write>(session: &mut Session, command: ShellCommand, out: &mut W) -> AppResult<()> {
    match command {
        ShellCommand::Category(category) => session.select_category(category),
        ShellCommand::From(unit) => report(out, session.set_from(&unit))?,
        ShellCommand::To(unit) => report(out, session.set_to(&unit))?,
        ShellCommand::Swap => {
            session.swap();
        }
        ShellCommand::Value(text) => session.set_value_text(text),
        ShellCommand::Precision(value) => report(out, session.set_precision(value))?,
        ShellCommand::Convert(value) => {
            if let Some(text) = value {
                session.set_value_text(text);
            }
            match session.submit() {
                Ok(conversion) => writeln!(out, "✓ {}", conversion.display)?,
                Err(e) => writeln!(out, "✗ {}", failure_message(&e))?,
            }
        }
        ShellCommand::Units => {
            writeln!(out, "{} units:", session.category())?;
            for unit in session.units() {
                writeln!(out, "  {}", unit)?;
            }
        }
        ShellCommand::History { all } => render_history(session, all, out)?,
        ShellCommand::Export => writeln!(out, "{}", session.history().to_json()?)?,
        ShellCommand::Help => writeln!(out, "{}", HELP)?,
        ShellCommand::Quit => {}
    }
    Ok(())
}

fn report<W: Write>(out: &mut W, result: AppResult<()>) -> AppResult<()> {
    if let Err(e) = result {
        writeln!(out, "✗ {}", e)?;
    }
    Ok(())
}

fn render_form<W: Write>(session: &Session, out: &mut W) -> AppResult<()> {
    let pair = session.pair();
    writeln!(
        out,
        "[{}] {} -> {}  value={}  precision={}",
        session.category(),
        pair.from,
        pair.to,
        session.value_text(),
        session.precision().get()
    )?;
    Ok(())
}

fn render_history<W: Write>(session: &Session, all: bool, out: &mut W) -> AppResult<()> {
    let history = session.history();
    if history.is_empty() {
        writeln!(out, "No conversions yet. Try one above!")?;
        return Ok(());
    }

    writeln!(out, "Recent conversions:")?;
    if all {
        for (i, entry) in history.iter().enumerate() {
            writeln!(
                out,
                "{}. {}  ({})",
                i + 1,
                entry.text(),
                entry.recorded_at().format("%H:%M:%S")
            )?;
        }
    } else {
        for (i, entry) in history.recent().enumerate() {
            writeln!(out, "{}. {}", i + 1, entry.text())?;
        }
    }
    Ok(())
}

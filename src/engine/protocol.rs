//! Line protocol spoken with the game coordinator.
//!
//! ```text
//! engine: READY
//! coord:  4            (variant code or name)
//! engine: 4
//! coord:  <position line>
//! engine: b2-b3        (or LOSS!)
//! ...
//! coord:  QUIT
//! ```

use std::io::{self, BufRead, Write};

use log::{debug, trace};
use thiserror::Error;

use super::controller::{Engine, EngineOptions};
use crate::board::{UnknownVariant, Variant};

/// Greeting written before the variant is chosen.
pub const READY_TOKEN: &str = "READY";

/// Command ending the session.
pub const QUIT_TOKEN: &str = "QUIT";

/// Result of processing one protocol line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Line processed, with optional output
    Ok(Option<String>),
    /// Session should end
    Quit,
}

/// Session-level failures.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("coordinator closed the stream before choosing a variant")]
    NoVariant,
    #[error(transparent)]
    UnknownVariant(#[from] UnknownVariant),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// A move-exchange session over any reader/writer pair.
pub struct MoveExchange<R: BufRead, W: Write> {
    input: R,
    output: W,
    options: EngineOptions,
    engine: Option<Engine>,
}

impl<R: BufRead, W: Write> MoveExchange<R, W> {
    #[must_use]
    pub fn new(input: R, output: W, options: EngineOptions) -> Self {
        MoveExchange {
            input,
            output,
            options,
            engine: None,
        }
    }

    /// Start with `variant` already chosen, skipping the handshake.
    #[must_use]
    pub fn with_variant(input: R, output: W, options: EngineOptions, variant: Variant) -> Self {
        let engine = Engine::new(variant, options.clone());
        MoveExchange {
            input,
            output,
            options,
            engine: Some(engine),
        }
    }

    #[must_use]
    pub fn engine(&self) -> Option<&Engine> {
        self.engine.as_ref()
    }

    /// Write `READY`, read the variant and echo its code.
    ///
    /// # Errors
    /// [`ProtocolError::NoVariant`] when input ends first,
    /// [`ProtocolError::UnknownVariant`] for an unrecognized token.
    pub fn handshake(&mut self) -> Result<Variant, ProtocolError> {
        self.send(READY_TOKEN)?;
        let line = loop {
            match self.read_line()? {
                None => return Err(ProtocolError::NoVariant),
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => break line,
            }
        };
        let variant: Variant = line.parse()?;
        debug!("variant {variant} selected");
        self.send(&variant.code().to_string())?;
        self.engine = Some(Engine::new(variant, self.options.clone()));
        Ok(variant)
    }

    /// Process one line after the handshake.
    pub fn process_line(&mut self, line: &str) -> CommandResult {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return CommandResult::Ok(None);
        }
        if trimmed.eq_ignore_ascii_case(QUIT_TOKEN) {
            return CommandResult::Quit;
        }
        let engine = self
            .engine
            .get_or_insert_with(|| Engine::new(Variant::Random, self.options.clone()));
        CommandResult::Ok(Some(engine.respond(trimmed)))
    }

    /// Answer position lines until `QUIT` or end of input.
    ///
    /// # Errors
    /// I/O failures on either stream.
    pub fn run(&mut self) -> Result<(), ProtocolError> {
        while let Some(line) = self.read_line()? {
            match self.process_line(&line) {
                CommandResult::Ok(Some(reply)) => self.send(&reply)?,
                CommandResult::Ok(None) => {}
                CommandResult::Quit => {
                    debug!("coordinator ended the session");
                    break;
                }
            }
        }
        Ok(())
    }

    /// Handshake, then the exchange loop.
    ///
    /// # Errors
    /// See [`MoveExchange::handshake`] and [`MoveExchange::run`].
    pub fn run_session(&mut self) -> Result<(), ProtocolError> {
        if self.engine.is_none() {
            self.handshake()?;
        }
        self.run()
    }

    /// Consume the session, returning its streams.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_line(&mut self) -> Result<Option<String>, ProtocolError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        trace!("<< {}", line.trim_end());
        Ok(Some(line))
    }

    fn send(&mut self, line: &str) -> Result<(), ProtocolError> {
        trace!(">> {line}");
        writeln!(self.output, "{line}")?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;
    use crate::engine::FAILURE_TOKEN;
    use std::io::Cursor;

    fn options() -> EngineOptions {
        EngineOptions {
            seed: Some(3),
            ..EngineOptions::default()
        }
    }

    fn session(input: &str) -> (Result<(), ProtocolError>, Vec<String>) {
        let mut exchange = MoveExchange::new(Cursor::new(input.to_string()), Vec::new(), options());
        let result = exchange.run_session();
        let (_, out) = exchange.into_parts();
        let text = String::from_utf8(out).unwrap();
        (result, text.lines().map(str::to_string).collect())
    }

    #[test]
    fn handshake_echoes_variant_code() {
        let (result, lines) = session("3\nQUIT\n");
        assert!(result.is_ok());
        assert_eq!(lines, vec!["READY", "3"]);
    }

    #[test]
    fn handshake_accepts_names() {
        let (result, lines) = session("\nnegamax\n");
        assert!(result.is_ok());
        assert_eq!(lines, vec!["READY", "2"]);
    }

    #[test]
    fn one_reply_per_position_line() {
        let line = Position::initial().to_line();
        let input = format!("2\n{line}\n\nnot a position\n{line}\nQUIT\n{line}\n");
        let (result, lines) = session(&input);
        assert!(result.is_ok());
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "READY");
        assert_eq!(lines[1], "2");
        assert!(Position::initial().find_move(&lines[2]).is_some());
        assert_eq!(lines[3], FAILURE_TOKEN);
        assert!(Position::initial().find_move(&lines[4]).is_some());
    }

    #[test]
    fn unknown_variant_is_an_error() {
        let (result, lines) = session("chess\n");
        assert!(matches!(result, Err(ProtocolError::UnknownVariant(_))));
        assert_eq!(lines, vec!["READY"]);
    }

    #[test]
    fn closed_input_before_variant() {
        let (result, _) = session("");
        assert!(matches!(result, Err(ProtocolError::NoVariant)));
    }

    #[test]
    fn skipped_handshake_answers_immediately() {
        let line = Position::initial().to_line();
        let mut exchange = MoveExchange::with_variant(
            Cursor::new(format!("{line}\n")),
            Vec::new(),
            options(),
            Variant::Random,
        );
        exchange.run_session().unwrap();
        assert_eq!(exchange.engine().map(Engine::moves_played), Some(1));
        let (_, out) = exchange.into_parts();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}

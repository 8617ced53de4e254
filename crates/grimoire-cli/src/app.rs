//! The REPL: reads commands, drives the session, renders, saves.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use console::style;
use grimoire_core::{ActionResult, Events, Randomness, Session, Store};

use crate::command::Command;
use crate::render;

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A live game bound to its save location.
pub struct App<R: Randomness, S: Store> {
    session: Session<R>,
    store: S,
}

impl<R: Randomness, S: Store> App<R, S> {
    pub fn new(session: Session<R>, store: S) -> Self {
        Self { session, store }
    }

    /// Runs until `quit` or end of input. Both save before returning.
    pub fn run<I: BufRead, W: Write>(&mut self, input: I, out: &mut W) -> Result<()> {
        let mut lines = input.lines();
        render::hud(out, self.session.state())?;

        loop {
            write!(out, "{} ", style(">").cyan().bold())?;
            out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(out)?;
                self.save(out)?;
                writeln!(out, "Game saved. Goodbye.")?;
                return Ok(());
            };
            let line = line.context("failed to read command")?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    writeln!(out, "{}", style(err).yellow())?;
                    continue;
                }
            };
            tracing::debug!(?command, "command");

            let flow = if command == Command::Reset {
                writeln!(
                    out,
                    "This erases your progress. Type {} to confirm:",
                    style("yes").bold()
                )?;
                let answer = lines.next().transpose().context("failed to read confirmation")?;
                self.reset(answer.as_deref(), out)?
            } else {
                self.execute(command, out)?
            };

            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        if command.mutates() {
            let result = match &command {
                Command::Explore => self.session.explore(),
                Command::Hunt(extra) => self.session.hunt(*extra),
                Command::Rest(sp) => self.session.rest(*sp),
                Command::Use(id) => self.session.use_item(id),
                _ => return Ok(Flow::Continue),
            };
            self.report(result, out)?;
            return Ok(Flow::Continue);
        }

        match command {
            Command::Help => render::help(out)?,
            Command::Status => render::hud(out, self.session.state())?,
            Command::Save => {
                if self.save(out)? {
                    writeln!(out, "Game saved.")?;
                }
            }
            Command::Quit => {
                self.save(out)?;
                writeln!(out, "Game saved. Goodbye.")?;
                return Ok(Flow::Quit);
            }
            _ => {}
        }
        Ok(Flow::Continue)
    }

    /// Renders a handler result. Successful actions are saved; failures
    /// changed nothing, so there is nothing to save.
    fn report<W: Write>(&mut self, result: ActionResult<Events>, out: &mut W) -> Result<()> {
        match result {
            Ok(events) => {
                for event in &events {
                    render::event(out, event)?;
                }
                render::hud(out, self.session.state())?;
                self.save(out)?;
            }
            Err(err) => writeln!(out, "{} {err}", style("Error:").red().bold())?,
        }
        Ok(())
    }

    fn reset<W: Write>(&mut self, answer: Option<&str>, out: &mut W) -> Result<Flow> {
        match answer {
            Some(answer) if answer.trim().eq_ignore_ascii_case("yes") => {
                self.session.reset();
                self.save(out)?;
                writeln!(out, "A new adventure begins.")?;
                render::hud(out, self.session.state())?;
                Ok(Flow::Continue)
            }
            Some(_) => {
                writeln!(out, "Reset cancelled.")?;
                Ok(Flow::Continue)
            }
            None => {
                self.save(out)?;
                Ok(Flow::Quit)
            }
        }
    }

    /// Saves, reporting a failure without ending the game.
    fn save<W: Write>(&self, out: &mut W) -> Result<bool> {
        match self.store.save(self.session.state()) {
            Ok(()) => Ok(true),
            Err(err) => {
                tracing::error!(%err, "save failed");
                writeln!(out, "{} {err}", style("Save failed:").red().bold())?;
                Ok(false)
            }
        }
    }

    #[cfg(test)]
    fn state(&self) -> &grimoire_core::State {
        self.session.state()
    }
}

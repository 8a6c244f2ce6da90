//! Line-oriented front end over a [`Lottery`].

use std::io::{BufRead, Write};

use draw_core::{DrawError, Lottery};

use crate::commands::{self, Command, CommandError, HELP};
use crate::render;

/// Text to show for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn say(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }
}

pub struct Console {
    lottery: Lottery,
    offset_minutes: i32,
}

impl Console {
    pub fn new(lottery: Lottery, offset_minutes: i32) -> Self {
        Self {
            lottery,
            offset_minutes,
        }
    }

    pub fn lottery(&self) -> &Lottery {
        &self.lottery
    }

    /// Parse and run one line. Errors become reply text; the console keeps going.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let result = commands::parse(line).and_then(|cmd| match cmd {
            Some(cmd) => self.execute(cmd).map(Some),
            None => Ok(None),
        });
        match result {
            Ok(reply) => reply,
            Err(e) => {
                tracing::debug!(line, error = %e, "Command failed");
                Some(Reply::say(format!("error: {e}")))
            }
        }
    }

    pub fn execute(&mut self, cmd: Command) -> Result<Reply, CommandError> {
        let text = match cmd {
            Command::AddPrize { name, capacity } => {
                let prize = self.lottery.add_prize(&name, capacity)?;
                format!(
                    "added {} ({}) with capacity {}",
                    prize.name, prize.id, prize.capacity
                )
            }
            Command::RenamePrize { prize, name } => {
                let id = self.resolve(&prize)?;
                self.lottery.rename_prize(&id, &name)?;
                format!("renamed {prize} to {}", name.trim())
            }
            Command::SetCapacity { prize, capacity } => {
                let id = self.resolve(&prize)?;
                self.lottery.set_prize_capacity(&id, capacity)?;
                format!("capacity of {prize} set to {capacity}")
            }
            Command::RemovePrize { prize } => {
                let id = self.resolve(&prize)?;
                self.lottery.remove_prize(&id)?;
                format!("removed {prize}")
            }
            Command::Select { prize } => {
                let selected = self.lottery.select_prize(&prize)?.clone();
                let standing = self.lottery.session().prize_standing(&selected);
                format!("selected {} ({} left)", selected.name, standing.remaining)
            }
            Command::ApplyLimit(limit) => {
                self.lottery.apply_global_limit(limit);
                match limit {
                    Some(l) => format!("global limit set to {}", l.get()),
                    None => "global limit cleared".to_string(),
                }
            }
            Command::Draw => match self.lottery.draw() {
                Ok(record) => format!(
                    "drew {} for {}",
                    record.value,
                    record.prize_name.as_deref().unwrap_or("-")
                ),
                Err(e) => self.blocked_text(e)?,
            },
            Command::DrawOpen => match self.lottery.draw_open() {
                Ok(record) => format!("drew {}", record.value),
                Err(e) => self.blocked_text(e)?,
            },
            Command::Roll => format!("rolled {}", self.lottery.roll()?),
            Command::History => render::history(self.lottery.session(), self.offset_minutes),
            Command::Prizes => render::prizes(self.lottery.session()),
            Command::Status => render::status(self.lottery.session()),
            Command::Export => serde_json::to_string_pretty(self.lottery.session())
                .unwrap_or_else(|e| format!("error: export failed: {e}")),
            Command::Clear => {
                self.lottery.clear();
                "history cleared".to_string()
            }
            Command::Help => HELP.to_string(),
            Command::Quit => {
                return Ok(Reply {
                    text: "bye".to_string(),
                    quit: true,
                });
            }
        };
        Ok(Reply::say(text))
    }

    /// Read commands until EOF or `quit`, writing one reply per command.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        writeln!(output, "{}", render::status(self.lottery.session()))?;
        for line in input.lines() {
            let line = line?;
            let Some(reply) = self.handle_line(&line) else {
                continue;
            };
            writeln!(output, "{}", reply.text)?;
            output.flush()?;
            if reply.quit {
                break;
            }
        }
        Ok(())
    }

    fn resolve(&self, prize: &str) -> Result<String, CommandError> {
        self.lottery
            .session()
            .prizes()
            .resolve(prize)
            .map(|p| p.id.clone())
            .ok_or_else(|| DrawError::PrizeNotFound(prize.to_string()).into())
    }

    /// Blocked draws are reported as a message; other failures propagate.
    fn blocked_text(&self, e: DrawError) -> Result<String, CommandError> {
        if !e.is_recoverable() {
            return Err(e.into());
        }
        let message = self
            .lottery
            .last_message()
            .map(str::to_string)
            .unwrap_or_else(|| e.to_string());
        Ok(format!("cannot draw: {message}"))
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;

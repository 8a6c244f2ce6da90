//! Console command parsing.

use draw_core::{DrawError, GlobalLimit, normalize_capacity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddPrize { name: String, capacity: u32 },
    RenamePrize { prize: String, name: String },
    SetCapacity { prize: String, capacity: u32 },
    RemovePrize { prize: String },
    Select { prize: String },
    ApplyLimit(Option<GlobalLimit>),
    Draw,
    DrawOpen,
    Roll,
    History,
    Prizes,
    Status,
    Export,
    Clear,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0} (try 'help')")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error(transparent)]
    Draw(#[from] DrawError),
}

pub const HELP: &str = "\
commands:
  add <name> [capacity]     add a prize (capacity defaults to 1);
                            a name ending in a number needs the capacity too
  rename <prize> <name>     rename a prize (by id or name)
  capacity <prize> <n>      change a prize's capacity
  remove <prize>            remove a prize
  select <prize>            choose the prize to draw for
  limit [n]                 set the global limit; no value clears it
  draw                      draw for the selected prize
  open                      draw from the shared pool without a prize
  roll                      one-off number from the range, not recorded
  history | prizes | status views
  export                    print the session as JSON
  clear                     clear history and result
  help | quit";

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    let Some((word, rest)) = split_word(line) else {
        return Ok(None);
    };

    let cmd = match word.to_ascii_lowercase().as_str() {
        "add" => {
            // A trailing number is the capacity, so "add Prize 2 1" names "Prize 2".
            let (name, capacity) = match rest.rsplit_once(char::is_whitespace) {
                Some((name, last)) if last.parse::<f64>().is_ok() => {
                    (name.trim(), parse_capacity(last)?)
                }
                _ => (rest, 1),
            };
            if name.is_empty() {
                return Err(CommandError::Usage("add <name> [capacity]"));
            }
            Command::AddPrize {
                name: name.to_string(),
                capacity,
            }
        }
        "rename" => {
            let (prize, name) = split_word(rest).ok_or(CommandError::Usage("rename <prize> <name>"))?;
            if name.is_empty() {
                return Err(CommandError::Usage("rename <prize> <name>"));
            }
            Command::RenamePrize {
                prize: prize.to_string(),
                name: name.to_string(),
            }
        }
        "capacity" | "cap" => {
            let (prize, n) = rest
                .rsplit_once(char::is_whitespace)
                .ok_or(CommandError::Usage("capacity <prize> <n>"))?;
            Command::SetCapacity {
                prize: prize.trim().to_string(),
                capacity: parse_capacity(n)?,
            }
        }
        "remove" | "rm" => Command::RemovePrize {
            prize: required(rest, "remove <prize>")?,
        },
        "select" | "use" => Command::Select {
            prize: required(rest, "select <prize>")?,
        },
        "limit" => Command::ApplyLimit(
            GlobalLimit::parse_applied(rest)
                .map_err(|_| CommandError::InvalidNumber(rest.to_string()))?,
        ),
        "draw" => Command::Draw,
        "open" => Command::DrawOpen,
        "roll" => Command::Roll,
        "history" | "hist" => Command::History,
        "prizes" => Command::Prizes,
        "status" => Command::Status,
        "export" => Command::Export,
        "clear" => Command::Clear,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(cmd))
}

fn split_word(s: &str) -> Option<(&str, &str)> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    Some(match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (s, ""),
    })
}

fn required(rest: &str, usage: &'static str) -> Result<String, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    Ok(rest.to_string())
}

fn parse_capacity(s: &str) -> Result<u32, CommandError> {
    let s = s.trim();
    match s.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(normalize_capacity(n)),
        _ => Err(CommandError::InvalidNumber(s.to_string())),
    }
}

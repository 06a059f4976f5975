//! Script-driven command line host
//!
//! Reads one command per line and feeds it to a [`GameRegistry`], printing the
//! resulting events. The world is a [`Recorder`], so a script is a dry run of
//! what a real host would see.
//!
//! ```text
//! join 1 alice
//! join 2 bob
//! tap 1 4 1        # select the pawn on (4,1)
//! tap 1 4 2        # push it
//! hover 2 3 6
//! piece 2 12
//! board 0
//! ```

use crate::core::settings::TableSettings;
use crate::game::events::{GameEvent, Target};
use crate::game::presentation::Recorder;
use crate::game::registry::GameRegistry;
use crate::game::types::{Coord, PieceId, PlayerId, TableId};
use anyhow::Context;
use clap::Parser;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "tilechess", version, about = "Tile-board chess rules engine")]
pub struct Args {
    /// Settings file (defaults to the platform config directory)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Command script; stdin when omitted
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Print events as JSON lines
    #[arg(long)]
    pub json: bool,
}

/// One parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Join {
        player: PlayerId,
        name: Option<String>,
    },
    Interact {
        player: PlayerId,
        target: Target,
    },
    Hover {
        player: PlayerId,
        at: Option<Coord>,
    },
    Board {
        table: TableId,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command {command:?}")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: usage: {usage}")]
    Usage { line: usize, usage: &'static str },

    #[error("line {line}: {value:?} is not a number")]
    BadNumber { line: usize, value: String },
}

/// Parse one line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Command>, ScriptError> {
    let line = line.split('#').next().unwrap_or_default().trim();
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&command, rest)) = words.split_first() else {
        return Ok(None);
    };

    let number = |value: &str| parse_number::<i64>(line_no, value);
    let player = |value: &str| parse_number::<u64>(line_no, value).map(PlayerId);
    let usage = |usage: &'static str| ScriptError::Usage {
        line: line_no,
        usage,
    };

    let parsed = match (command, rest) {
        ("join", [id]) => Command::Join {
            player: player(*id)?,
            name: None,
        },
        ("join", [id, name @ ..]) if !name.is_empty() => Command::Join {
            player: player(*id)?,
            name: Some(name.join(" ")),
        },
        ("join", _) => return Err(usage("join <player> [name]")),
        ("tap", [id, file, rank]) => Command::Interact {
            player: player(*id)?,
            target: Target::Square(coord(number(*file)?, number(*rank)?)),
        },
        ("tap", _) => return Err(usage("tap <player> <file> <rank>")),
        ("piece", [id, piece]) => Command::Interact {
            player: player(*id)?,
            target: Target::Piece(PieceId(parse_number(line_no, *piece)?)),
        },
        ("piece", _) => return Err(usage("piece <player> <piece-id>")),
        ("hover", [id, "none"]) => Command::Hover {
            player: player(*id)?,
            at: None,
        },
        ("hover", [id, file, rank]) => Command::Hover {
            player: player(*id)?,
            at: Some(coord(number(*file)?, number(*rank)?)),
        },
        ("hover", _) => return Err(usage("hover <player> <file> <rank>|none")),
        ("board", [table]) => Command::Board {
            table: TableId(parse_number(line_no, *table)?),
        },
        ("board", _) => return Err(usage("board <table>")),
        (other, _) => {
            return Err(ScriptError::UnknownCommand {
                line: line_no,
                command: other.to_string(),
            })
        }
    };
    Ok(Some(parsed))
}

/// Ids are unsigned, so `-1` is refused rather than wrapped
fn parse_number<T: FromStr>(line: usize, value: &str) -> Result<T, ScriptError> {
    value.parse().map_err(|_| ScriptError::BadNumber {
        line,
        value: value.to_string(),
    })
}

/// Saturate into `i8`; anything outside the board resolves to nothing later
fn coord(file: i64, rank: i64) -> Coord {
    let clamp = |v: i64| v.clamp(i8::MIN as i64, i8::MAX as i64) as i8;
    Coord::new(clamp(file), clamp(rank))
}

/// Registry plus the recording world it draws into
pub struct Session {
    pub registry: GameRegistry,
    pub world: Recorder,
    names: BTreeMap<PlayerId, String>,
    json: bool,
}

impl Session {
    pub fn new(settings: TableSettings, json: bool) -> Self {
        Session {
            registry: GameRegistry::new(settings),
            world: Recorder::new(),
            names: BTreeMap::new(),
            json,
        }
    }

    /// Run one command, writing its output to `out`
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> anyhow::Result<()> {
        let events = match command {
            Command::Join { player, name } => {
                if let Some(name) = name {
                    self.names.insert(player, name);
                }
                self.registry
                    .join_queue(player, &mut self.world, &self.names)?
                    .events
            }
            Command::Interact { player, target } => {
                self.registry
                    .interact(player, target, &mut self.world, &self.names)?
            }
            Command::Hover { player, at } => {
                self.registry.notify_hover(player, at, &mut self.world)?
            }
            Command::Board { table } => {
                match self.registry.table(table) {
                    Ok(table) => writeln!(out, "{}", table.board())?,
                    Err(e) => writeln!(out, "{}", e)?,
                }
                return Ok(());
            }
        };

        for event in &events {
            if self.json {
                writeln!(out, "{}", serde_json::to_string(event)?)?;
            } else {
                writeln!(out, "{}", describe(event))?;
            }
        }
        Ok(())
    }

    /// Run a whole script. Parse errors stop the run; rejections do not.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
        for (index, line) in input.lines().enumerate() {
            let line = line.context("failed to read script")?;
            if let Some(command) = parse_line(index + 1, &line)? {
                self.execute(command, out)
                    .with_context(|| format!("line {}: {}", index + 1, line.trim()))?;
            }
        }
        Ok(())
    }
}

/// Single-line plain-text rendering of an event
pub fn describe(event: &GameEvent) -> String {
    match event {
        GameEvent::Status { text } => text.clone(),
        GameEvent::TableCreated { table, location } => {
            format!("[table {}] created at {}", table.0, location)
        }
        GameEvent::PlayerSeated {
            table,
            player,
            seat,
            side,
        } => format!("[table {}] player {} takes seat {} ({})", table.0, player.0, seat, side),
        GameEvent::GameStarted { table, .. } => format!("[table {}] game started", table.0),
        GameEvent::PieceSelected { piece, from, moves } => {
            let squares: Vec<String> = moves.iter().map(|m| format!("({})", m.to)).collect();
            format!("selected {} at {}: {}", piece, from, squares.join(" "))
        }
        GameEvent::SelectionCancelled { piece } => format!("selection of {} cancelled", piece),
        GameEvent::PieceMoved { piece, from, to } => format!("{} moved {} -> {}", piece, from, to),
        GameEvent::PieceCaptured { at, kind, side } => {
            format!("{} {} captured at {}", side, kind, at)
        }
        GameEvent::TurnChanged { side } => format!("{} to move", side),
        GameEvent::KingStatus {
            side,
            state,
            escapes,
        } => format!("{} king: {} ({} escapes)", side, state, escapes),
        GameEvent::GameOver { winner } => format!("game over, {} wins", winner),
    }
}

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::player::Color;

/// How a checker moved.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    /// Point to point
    Ordinary,
    /// Bar to point
    Enter,
    /// Point to the bear-off tray
    BearOff,
}

/// One applied checker move. Points use the external numbering; bar entries
/// start at the mover's bar sentinel and bear-offs end at its off sentinel.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number the move was made in
    pub turn: u32,
    /// Color of the mover
    pub color: Color,
    /// Kind of move
    pub kind: MoveKind,
    /// Origin point
    pub from: u8,
    /// Destination point
    pub to: u8,
    /// Die value consumed
    pub die: u8,
    /// Whether an opposing blot was sent to the bar
    pub hit: bool,
}

/// Complete record of a game: players, every move, and the outcome.
/// Serialized to JSONL format for game history storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier for this game (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// RNG seed of the dice (enables deterministic replay)
    pub seed: Option<u64>,
    /// Name of the white player
    pub white: String,
    /// Name of the black player
    pub black: String,
    /// Chronological list of all moves
    pub moves: Vec<MoveRecord>,
    /// Winner, if the game was decided by bearing off
    pub winner: Option<Color>,
    /// Doubling cube value at the end of the record
    pub cube_value: u32,
    /// Turn counter at the end of the record
    pub turns: u32,
    /// Timestamp when the game was logged (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`GameRecord`]s to a JSON Lines file, one LF-terminated line each.
pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Opens the log named by `log_path`; `None` when logging is not configured.
    pub fn from_config(cfg: &EngineConfig) -> std::io::Result<Option<Self>> {
        cfg.log_path.as_deref().map(Self::create).transpose()
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        tracing::debug!(game_id = %rec.game_id, moves = rec.moves.len(), "game record written");
        Ok(())
    }
}

//! Journal of committed moves.
//!
//! Every commit on a `TileBoard` appends one `MoveRecord`. Records double as
//! the crate's diagnostics: `info_line` renders a single `info string` line
//! and `MoveJournal::to_text` dumps the whole game with a dated header.

use chrono::{DateTime, Utc};

use crate::game_state::chess_types::{BoardLocation, PieceClass, PieceId, Team};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// Zero-based half-move number on this board.
    pub ply: usize,
    pub piece: PieceId,
    pub class: PieceClass,
    pub team: Team,
    pub from: BoardLocation,
    pub to: BoardLocation,
    /// Pieces removed by this commit, destination occupant first.
    pub captured: Vec<PieceId>,
    /// A piece was removed through the en-passant callback.
    pub en_passant: bool,
    pub committed_at: DateTime<Utc>,
}

impl MoveRecord {
    pub fn info_line(&self) -> String {
        let mut line = format!(
            "info string ply {} {} {} {} {}-{}",
            self.ply, self.team, self.class, self.piece, self.from, self.to
        );
        if !self.captured.is_empty() {
            let victims: Vec<String> = self.captured.iter().map(|id| id.to_string()).collect();
            line.push_str(&format!(" captures {}", victims.join(",")));
        }
        if self.en_passant {
            line.push_str(" en_passant");
        }
        line
    }
}

#[derive(Debug, Clone, Default)]
pub struct MoveJournal {
    records: Vec<MoveRecord>,
}

impl MoveJournal {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    /// Header lines followed by one info line per record. The date is taken
    /// from the first record, or `????.??.??` for an empty journal.
    pub fn to_text(&self) -> String {
        let date = self
            .records
            .first()
            .map(|first| first.committed_at.format("%Y.%m.%d").to_string())
            .unwrap_or_else(|| "????.??.??".to_owned());

        let mut out = String::new();
        out.push_str(&format!("[Date \"{date}\"]\n"));
        out.push_str(&format!("[Plies \"{}\"]\n", self.records.len()));
        for record in &self.records {
            out.push_str(&record.info_line());
            out.push('\n');
        }
        out
    }
}

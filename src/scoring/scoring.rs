use crate::game::board::Board;
use crate::scoring::hand::{classify, HandCategory};
use crate::scoring::lines::{extract_line, LineId};
use serde::{Deserialize, Serialize};

/// Shown for a line that still has empty cells.
pub const UNSCORED_MARKER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineScore {
    pub line: LineId,
    pub category: HandCategory,
    pub base_score: u32,
    /// `base_score` times the line multiplier; this is what the total adds up.
    pub display_score: u32,
    pub complete: bool,
}

impl LineScore {
    /// Text for the line's score box: the marker while in progress, the
    /// number (possibly 0) once complete.
    pub fn display_text(&self) -> String {
        if self.complete {
            self.display_score.to_string()
        } else {
            UNSCORED_MARKER.to_string()
        }
    }
}

/// Full breakdown of a board, lines in `LineId::all()` order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    pub total: u32,
    pub lines: Vec<LineScore>,
}

impl ScoreSheet {
    pub fn line(&self, id: LineId) -> Option<&LineScore> {
        self.lines.iter().find(|l| l.line == id)
    }

    /// Lines that earned points, for the running details list.
    pub fn details(&self) -> impl Iterator<Item = &LineScore> {
        self.lines.iter().filter(|l| l.display_score > 0)
    }
}

pub fn score_line(board: &Board, line: LineId) -> LineScore {
    let cells = extract_line(board, line);
    let (category, base_score) = classify(&cells);
    LineScore {
        line,
        category,
        base_score,
        display_score: base_score * line.multiplier(),
        complete: cells.iter().all(Option::is_some),
    }
}

/// Score every line from scratch. Pure: the board is only read.
pub fn score_board(board: &Board) -> ScoreSheet {
    let lines: Vec<LineScore> = LineId::all().map(|id| score_line(board, id)).collect();
    let total = lines.iter().map(|l| l.display_score).sum();
    ScoreSheet { total, lines }
}

pub fn result(board: &Board) -> u32 {
    score_board(board).total
}

//! Board reachability checks

use super::{
    Action, Player,
    board::{Board, PieceCount},
    lines::LineAnalyzer,
};

impl Board {
    /// Check if the board can arise from X-first alternating play.
    pub fn is_reachable(&self) -> bool {
        self.reachability_error().is_none()
    }

    /// Reason the board cannot arise in play, if any.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnreachableBoard`] describing the first
    /// violated rule.
    pub fn ensure_reachable(&self) -> Result<(), crate::Error> {
        match self.reachability_error() {
            Some(reason) => Err(crate::Error::UnreachableBoard { reason }),
            None => Ok(()),
        }
    }

    fn reachability_error(&self) -> Option<String> {
        let PieceCount { x, o } = self.count_pieces();

        // X moves first, so X has the same number of marks as O or one more
        if !(x == o || x == o + 1) {
            return Some(format!(
                "piece counts X={x}, O={o} (X must equal O or lead by one)"
            ));
        }

        let x_lines = LineAnalyzer::winning_lines(self, Player::X);
        let o_lines = LineAnalyzer::winning_lines(self, Player::O);

        if !x_lines.is_empty() && !o_lines.is_empty() {
            return Some("both players have a winning line".to_string());
        }

        // The winner must have made the last move
        if !x_lines.is_empty() && x != o + 1 {
            return Some("X has won but O moved after the win".to_string());
        }
        if !o_lines.is_empty() && x != o {
            return Some("O has won but X moved after the win".to_string());
        }

        // Several lines can only be completed at once through a shared cell
        for lines in [&x_lines, &o_lines] {
            if lines.len() >= 2
                && !Action::all()
                    .any(|cell| lines.iter().all(|line| line.contains(&cell)))
            {
                return Some("winning lines do not share a cell".to_string());
            }
        }

        None
    }
}

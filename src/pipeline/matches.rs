//! Match runner: two agents alternate until the game ends

use tracing::{debug, info};

use crate::{
    Result,
    ports::Agent,
    tictactoe::{Board, Game, GameOutcome, Player, apply_action, current_player},
};

/// Result of one finished match
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub x_name: String,
    pub o_name: String,
    pub game: Game,
    pub outcome: GameOutcome,
}

impl MatchResult {
    /// Name of the winning agent, `None` for a draw
    pub fn winner_name(&self) -> Option<&str> {
        match self.outcome {
            GameOutcome::Win(Player::X) => Some(&self.x_name),
            GameOutcome::Win(Player::O) => Some(&self.o_name),
            GameOutcome::Draw => None,
        }
    }
}

/// Play `x` against `o` starting from `start` until the game is over.
///
/// Turn order follows [`current_player`], so a mid-game `start` board hands
/// the first turn to whichever side is due.
///
/// # Errors
///
/// Returns [`crate::Error::GameOver`] if `start` is already terminal, and
/// propagates any agent error, including an illegal action.
pub fn play_match(x: &mut dyn Agent, o: &mut dyn Agent, start: Board) -> Result<MatchResult> {
    let mut game = Game::from_board(start);
    let mut board = start;

    if game.is_over() {
        return Err(crate::Error::GameOver);
    }

    let outcome = loop {
        if let Some(outcome) = game.outcome {
            break outcome;
        }

        let player = current_player(&board);
        let agent: &mut dyn Agent = match player {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };

        let action = agent.select_action(&board)?;
        game.play(action)?;
        board = apply_action(&board, action)?;
        debug!(agent = agent.name(), %player, %action, "move played");
    };

    info!(
        x = x.name(),
        o = o.name(),
        %outcome,
        moves = game.moves.len(),
        "match finished"
    );

    Ok(MatchResult {
        x_name: x.name().to_string(),
        o_name: o.name().to_string(),
        game,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Error,
        pipeline::{MinimaxAgent, RandomAgent},
        tictactoe::Action,
    };

    /// Agent that replays a fixed list of actions
    struct ScriptedAgent {
        actions: std::vec::IntoIter<Action>,
    }

    impl ScriptedAgent {
        fn new(indices: &[usize]) -> Self {
            let actions: Vec<Action> = indices
                .iter()
                .map(|&i| Action::from_index(i).unwrap())
                .collect();
            Self {
                actions: actions.into_iter(),
            }
        }
    }

    impl Agent for ScriptedAgent {
        fn select_action(&mut self, _board: &Board) -> Result<Action> {
            self.actions.next().ok_or(Error::GameOver)
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    #[test]
    fn scripted_match_records_history() {
        let mut x = ScriptedAgent::new(&[0, 1, 2]);
        let mut o = ScriptedAgent::new(&[3, 4]);
        let result = play_match(&mut x, &mut o, Board::new()).unwrap();

        assert_eq!(result.outcome, GameOutcome::Win(Player::X));
        assert_eq!(result.game.moves.len(), 5);
        assert_eq!(result.winner_name(), Some("Scripted"));
    }

    #[test]
    fn illegal_agent_action_is_an_error() {
        let mut x = ScriptedAgent::new(&[0, 1]);
        let mut o = ScriptedAgent::new(&[0]);
        let err = play_match(&mut x, &mut o, Board::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidMove { row: 0, col: 0 }));
    }

    #[test]
    fn terminal_start_is_rejected() {
        let mut x = MinimaxAgent::new("X");
        let mut o = MinimaxAgent::new("O");
        let start = Board::from_string("XXX/OO./...").unwrap();
        assert!(matches!(
            play_match(&mut x, &mut o, start),
            Err(Error::GameOver)
        ));
    }

    #[test]
    fn minimax_never_loses_to_random() {
        for seed in 0..3 {
            let mut minimax = MinimaxAgent::new("Minimax");
            let mut random = RandomAgent::with_seed("Random", seed);

            let as_x = play_match(&mut minimax, &mut random, Board::new()).unwrap();
            assert_ne!(as_x.outcome, GameOutcome::Win(Player::O), "seed {seed}");

            let as_o = play_match(&mut random, &mut minimax, Board::new()).unwrap();
            assert_ne!(as_o.outcome, GameOutcome::Win(Player::X), "seed {seed}");
        }
    }
}

//! Human player reading moves from a terminal

use std::io::{self, BufRead, Write};

use crate::{
    Error, Result,
    cli::output::format_board,
    ports::Agent,
    tictactoe::{Action, Board, apply_action, current_player, is_terminal},
};

/// Agent that asks a person for each move.
///
/// Illegal or unparsable input is reported and the prompt repeats, so an
/// invalid move never ends the game. End of input is an error.
pub struct HumanAgent<R, W> {
    name: String,
    input: R,
    output: W,
}

impl HumanAgent<io::StdinLock<'static>, io::Stdout> {
    /// Human playing on the process's stdin and stdout
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    fn prompt(&mut self, board: &Board) -> Result<Option<String>> {
        write!(
            self.output,
            "\n{}{} to move, enter row col: ",
            format_board(board),
            current_player(board)
        )?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn select_action(&mut self, board: &Board) -> Result<Action> {
        if is_terminal(board) {
            return Err(Error::GameOver);
        }

        loop {
            let Some(line) = self.prompt(board)? else {
                return Err(Error::Io {
                    operation: "read a move".to_string(),
                    source: io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"),
                });
            };

            let checked = line
                .parse::<Action>()
                .and_then(|action| apply_action(board, action).map(|_| action));

            match checked {
                Ok(action) => return Ok(action),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reprompts_until_legal() {
        let board = Board::from_string("X........").unwrap();
        let input = b"nonsense\n0 0\n5 5\n1,1\n".as_slice();
        let mut output = Vec::new();
        let mut human = HumanAgent::new("Human", input, &mut output);

        let action = human.select_action(&board).unwrap();
        assert_eq!(action, Action::new(1, 1));

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("O to move").count(), 4);
        assert!(text.contains("invalid action 'nonsense'"));
        assert!(text.contains("(0, 0) is out of range or already occupied"));
        assert!(text.contains("(5, 5) is out of range or already occupied"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let board = Board::new();
        let mut human = HumanAgent::new("Human", b"".as_slice(), Vec::new());
        assert!(matches!(
            human.select_action(&board),
            Err(Error::Io { .. })
        ));
    }
}

use std::io::{BufRead, Write};

use common::games::tictactoe::{
    Board, GameBroadcaster, GameOutcome, HumanInput, Mark, MoveError, winning_line,
};

/// Line-oriented questions and answers over any reader/writer pair.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn say(&mut self, message: &str) -> Result<(), String> {
        writeln!(self.writer, "{}", message).map_err(|e| format!("Failed to write output: {}", e))
    }

    /// Prints `question` and reads one line. `Ok(None)` at end of input.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>, String> {
        write!(self.writer, "{}", question)
            .and_then(|_| self.writer.flush())
            .map_err(|e| format!("Failed to write output: {}", e))?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read input: {}", e))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    #[cfg(test)]
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<R: BufRead, W: Write> HumanInput for Prompter<R, W> {
    fn read_coordinates(&mut self, _mark: Mark) -> Result<Option<String>, String> {
        self.ask("Enter the coordinates: ")
    }
}

pub struct ConsoleBroadcaster<W> {
    writer: W,
    last_board: Option<Board>,
}

impl<W: Write> ConsoleBroadcaster<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_board: None,
        }
    }

    fn print(&mut self, text: &str) {
        // A closed stdout leaves nobody to tell.
        let _ = writeln!(self.writer, "{}", text);
    }

    #[cfg(test)]
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W: Write> GameBroadcaster for ConsoleBroadcaster<W> {
    fn render_board(&mut self, board: &Board) {
        let _ = write!(self.writer, "{}", board);
        self.last_board = Some(board.clone());
    }

    fn announce_first_player(&mut self, mark: Mark) {
        self.print(&format!("{} starts the game!", mark));
    }

    fn announce_turn(&mut self, mark: Mark) {
        self.print(&format!("{}'s turn", mark));
    }

    fn announce_result(&mut self, outcome: GameOutcome) {
        let line = match (outcome, self.last_board.as_ref()) {
            (GameOutcome::Winner(mark), Some(board)) => winning_line(board, mark),
            _ => None,
        };
        match line {
            Some(line) => {
                let (start_row, start_col) = line.start();
                let (end_row, end_col) = line.end();
                self.print(&format!(
                    "{} ({} {} to {} {})",
                    outcome,
                    start_row + 1,
                    start_col + 1,
                    end_row + 1,
                    end_col + 1
                ));
            }
            None => self.print(&outcome.to_string()),
        }
    }

    fn report_invalid_move(&mut self, error: MoveError) {
        self.print(&error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_ask_strips_line_ending() {
        let mut prompter = Prompter::new(Cursor::new("2 3\r\n"), Vec::new());

        let answer = prompter.ask("Enter the coordinates: ").unwrap();

        assert_eq!(answer, Some("2 3".to_string()));
        assert_eq!(prompter.writer().as_slice(), b"Enter the coordinates: ");
    }

    #[test]
    fn test_ask_at_end_of_input() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());

        assert_eq!(prompter.read_coordinates(Mark::X).unwrap(), None);
    }

    #[test]
    fn test_broadcaster_output() {
        let mut broadcaster = ConsoleBroadcaster::new(Vec::new());
        let board = Board::from_rows([
            [Mark::O, Mark::X, Mark::Empty],
            [Mark::X, Mark::O, Mark::Empty],
            [Mark::Empty, Mark::Empty, Mark::O],
        ]);

        broadcaster.announce_first_player(Mark::O);
        broadcaster.announce_turn(Mark::X);
        broadcaster.report_invalid_move(MoveError::Occupied);
        broadcaster.render_board(&board);
        broadcaster.announce_result(GameOutcome::Winner(Mark::O));

        let text = String::from_utf8(broadcaster.writer().clone()).unwrap();
        assert_eq!(
            text,
            "O starts the game!\n\
             X's turn\n\
             This cell is occupied! Choose another one!\n  \
             1 2 3 \n1 O X _ \n2 X O _ \n3 _ _ O \n\
             O wins (1 1 to 3 3)\n"
        );
    }

    #[test]
    fn test_draw_announcement() {
        let mut broadcaster = ConsoleBroadcaster::new(Vec::new());

        broadcaster.announce_result(GameOutcome::Draw);

        assert_eq!(broadcaster.writer().as_slice(), b"Draw\n");
    }
}

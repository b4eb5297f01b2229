use super::mark::Mark;
use super::square::Square;
use super::Board;
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                let cell = match self.get(Square::new(row, col)) {
                    Some(Mark::X) => 'X',
                    Some(Mark::O) => 'O',
                    None => '.',
                };
                write!(f, " {} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[macro_export]
macro_rules! tictactoe_position {
    ($($cell:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<_> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 9 cells
        assert_eq!(cells.len(), 9, "Invalid number of cells. Expected 9, got {}", cells.len());
        // The macro input reads top-down in row-major order, matching the
        // flat cell indexing, so no transposition is needed.
        for (i, &c) in cells.iter().enumerate() {
            if c != '.' {
                let mark = match c {
                    'X' => $crate::board::mark::Mark::X,
                    'O' => $crate::board::mark::Mark::O,
                    _ => panic!("Invalid character in tictactoe position"),
                };
                board.put($crate::board::square::Square::from_index(i), mark).unwrap();
            }
        }
        board
    }};
}

//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Board width and height
pub const SIZE: usize = 3;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A move target: a (row, col) coordinate pair, each in [0, 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }

    /// Check whether both coordinates lie on the board
    pub fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 board position.
///
/// The side to move is not stored: X always moves first, so it is derived
/// from the piece counts (X to move iff the counts are equal). This type
/// implements `Copy` since it is only 9 bytes; moves always produce a new
/// value and callers never observe mutation of a board they already hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
    empty: usize,
}

impl Board {
    /// Create a new empty board (X to move)
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Helper: Count pieces on the board.
    fn count_pieces(cells: &[[Cell; SIZE]; SIZE]) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for row in cells {
            for cell in row {
                match cell {
                    Cell::X => count.x += 1,
                    Cell::O => count.o += 1,
                    Cell::Empty => count.empty += 1,
                }
            }
        }
        count
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 cell characters in row-major order.
    /// Whitespace is filtered out, so grid-shaped strings work too.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Fewer than 9 non-whitespace characters are present
    /// - Any character is not a valid cell representation
    /// - The piece counts are unreachable (X must equal O or lead by 1)
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < SIZE * SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: SIZE * SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (i, &c) in chars.iter().take(SIZE * SIZE).enumerate() {
            cells[i / SIZE][i % SIZE] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        let count = Self::count_pieces(&cells);
        if count.x != count.o && count.x != count.o + 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(Board { cells })
    }

    /// Get the player who has the next turn (X moves first)
    pub fn side_to_move(&self) -> Player {
        let count = Self::count_pieces(&self.cells);
        if count.x <= count.o {
            Player::X
        } else {
            Player::O
        }
    }

    /// Borrow the underlying grid
    pub fn grid(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Get cell at a coordinate (must be in bounds)
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a cell is empty
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == Cell::Empty
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = Self::count_pieces(&self.cells);
        count.x + count.o
    }

    /// Get all empty coordinates in row-major order
    pub fn empty_cells(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.cells[row][col] == Cell::Empty {
                    actions.push(Action::new(row, col));
                }
            }
        }
        actions
    }

    /// Apply an action and return the resulting board.
    ///
    /// The mark placed belongs to [`side_to_move`](Self::side_to_move); the
    /// turn flips implicitly through the piece-count invariant.
    ///
    /// # Errors
    ///
    /// Returns error if the coordinates are out of bounds or the cell is
    /// already occupied.
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, action: Action) -> Result<Board, crate::Error> {
        if !action.in_bounds() {
            return Err(crate::Error::ActionOutOfBounds {
                row: action.row,
                col: action.col,
            });
        }

        if !self.is_empty_at(action.row, action.col) {
            return Err(crate::Error::CellOccupied {
                row: action.row,
                col: action.col,
            });
        }

        let mut next = *self;
        next.cells[action.row][action.col] = self.side_to_move().to_cell();
        Ok(next)
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one.
    ///
    /// Lines are scanned rows first, then columns, then diagonals. At most
    /// one player can hold a completed line in a reachable position, so the
    /// scan order only fixes a deterministic answer for malformed boards.
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.empty_cells().is_empty()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_terminal() && self.winner().is_none() && self.occupied_count() == SIZE * SIZE
    }

    /// Zero-sum score of a finished game from X's perspective.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotTerminal`](crate::Error::NotTerminal) if the game
    /// is still in progress; the utility of an unfinished game is undefined.
    pub fn utility(&self) -> Result<i32, crate::Error> {
        if !self.is_terminal() {
            return Err(crate::Error::NotTerminal);
        }
        Ok(match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for &cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i + 1 < SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

use crate::error::MoveError;

use super::player::Marker;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of same-marker cells in a line needed to win.
pub const CONNECT: usize = 4;

const REACH: usize = CONNECT - 1;
const MAX_DIAGONAL: usize = 2 * REACH + 1;

/// `(row, column)`, both 0-based. Row 0 is the top of the board.
pub type Position = (usize, usize);

/// The board used by the game: six rows, seven columns, colored markers.
pub type StandardBoard = Board<Marker, ROWS, COLS>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell<M> {
    Empty,
    Occupied(M),
}

impl<M: Copy> Cell<M> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn marker(&self) -> Option<M> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(*marker),
        }
    }
}

/// Terminal result of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<M> {
    Win(M),
    Draw,
}

/// A gravity board of `R` rows and `C` columns holding markers of type `M`.
///
/// Each column keeps the stack of its free rows, topmost first, so a drop pops
/// the bottom-most free row without scanning the column. Win detection only
/// looks at lines through the most recently placed piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<M, const R: usize = ROWS, const C: usize = COLS> {
    cells: [[Cell<M>; C]; R],
    free_rows: [Vec<usize>; C],
    last_move: Option<Position>,
}

impl<M: Copy + Eq, const R: usize, const C: usize> Board<M, R, C> {
    const DIMENSIONS_OK: () = assert!(
        R >= CONNECT && C >= CONNECT,
        "board needs at least 4 rows and 4 columns"
    );

    /// Create a new empty board
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::DIMENSIONS_OK;

        Board {
            cells: [[Cell::Empty; C]; R],
            free_rows: std::array::from_fn(|_| (0..R).collect()),
            last_move: None,
        }
    }

    pub fn rows(&self) -> usize {
        R
    }

    pub fn cols(&self) -> usize {
        C
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `R - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell<M> {
        self.cells[row][col]
    }

    /// Read-only view of the whole grid, row by row.
    pub fn grid(&self) -> &[[Cell<M>; C]; R] {
        &self.cells
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Free rows of a column, topmost first. Empty for a full or unknown column.
    pub fn free_rows(&self, col: usize) -> &[usize] {
        self.free_rows.get(col).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.free_rows(col).is_empty()
    }

    /// 0-based indices of the columns that can still take a piece.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..C).filter(|&col| !self.is_column_full(col)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.last_move.is_none()
    }

    /// Check that a 0-based column exists and can take a piece.
    pub fn check_column(&self, col: usize) -> Result<(), MoveError> {
        if col >= C {
            return Err(MoveError::OutOfRange {
                column: col + 1,
                max: C,
            });
        }
        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull(col + 1));
        }
        Ok(())
    }

    /// Parse a raw move token, a 1-based column number, into a playable 0-based
    /// column.
    ///
    /// The token must be plain decimal: digits only, no sign, no surrounding
    /// whitespace, no leading zero and no more digits than `C` has.
    pub fn parse_move(&self, token: &str) -> Result<usize, MoveError> {
        let well_formed = !token.is_empty()
            && token.len() <= decimal_digits(C)
            && token.bytes().all(|b| b.is_ascii_digit())
            && !(token.len() > 1 && token.starts_with('0'));
        if !well_formed {
            return Err(MoveError::Malformed(token.to_string()));
        }

        let column: usize = token
            .parse()
            .map_err(|_| MoveError::Malformed(token.to_string()))?;
        if column == 0 {
            return Err(MoveError::OutOfRange { column, max: C });
        }

        self.check_column(column - 1)?;
        Ok(column - 1)
    }

    pub fn is_valid_move(&self, token: &str) -> bool {
        self.parse_move(token).is_ok()
    }

    /// Drop `marker` into a 0-based column and return where it landed.
    ///
    /// A full or unknown column leaves the board untouched and returns `None`;
    /// callers are expected to validate first.
    pub fn apply_move(&mut self, col: usize, marker: M) -> Option<Position> {
        let row = self.free_rows.get_mut(col)?.pop()?;
        self.cells[row][col] = Cell::Occupied(marker);
        self.last_move = Some((row, col));
        Some((row, col))
    }

    pub fn is_game_over(&self) -> bool {
        self.has_win() || self.is_draw()
    }

    /// Check if the last move completed four in a row
    pub fn has_win(&self) -> bool {
        self.winning_marker().is_some()
    }

    /// Check if the board is completely full. Says nothing about a win.
    pub fn is_draw(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// `Win` takes precedence over `Draw`: a final move that both connects
    /// four and fills the board is a win.
    pub fn result(&self) -> Option<Outcome<M>> {
        if let Some(marker) = self.winning_marker() {
            return Some(Outcome::Win(marker));
        }
        if self.is_draw() {
            return Some(Outcome::Draw);
        }
        None
    }

    fn winning_marker(&self) -> Option<M> {
        let anchor @ (row, col) = self.last_move?;
        let marker = self.cells[row][col].marker()?;

        let won = four_in_a_row(&self.cells[row], marker)
            || four_in_a_row(&self.column(col), marker)
            || four_in_a_row(self.diagonal(anchor, (1, 1)).as_slice(), marker)
            || four_in_a_row(self.diagonal(anchor, (1, -1)).as_slice(), marker);

        won.then_some(marker)
    }

    fn column(&self, col: usize) -> [Cell<M>; R] {
        std::array::from_fn(|row| self.cells[row][col])
    }

    /// Cells on the line through `anchor` with slope `step`, at most `REACH`
    /// cells on either side, clipped to the board and in board order.
    ///
    /// `(1, 1)` walks the "\" diagonal, `(1, -1)` the "/" diagonal.
    fn diagonal(&self, anchor: Position, step: (isize, isize)) -> Line<M> {
        let mut line = Line::new();

        // Near side, farthest cell first.
        for k in (1..=REACH as isize).rev() {
            if let Some((row, col)) = self.offset(anchor, step, -k) {
                line.push(self.cells[row][col]);
            }
        }

        line.push(self.cells[anchor.0][anchor.1]);

        for k in 1..=REACH as isize {
            if let Some((row, col)) = self.offset(anchor, step, k) {
                line.push(self.cells[row][col]);
            }
        }

        line
    }

    fn offset(&self, (row, col): Position, (dr, dc): (isize, isize), k: isize) -> Option<Position> {
        let row = row.checked_add_signed(dr * k)?;
        let col = col.checked_add_signed(dc * k)?;
        (row < R && col < C).then_some((row, col))
    }
}

impl<M: Copy + Eq, const R: usize, const C: usize> Default for Board<M, R, C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Slide a window of `CONNECT` cells over `line` from index 0 upward.
fn four_in_a_row<M: Copy + Eq>(line: &[Cell<M>], marker: M) -> bool {
    let target = Cell::Occupied(marker);
    line.windows(CONNECT)
        .any(|window| window.iter().all(|cell| *cell == target))
}

fn decimal_digits(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Fixed-capacity buffer for a diagonal; a diagonal never exceeds
/// `MAX_DIAGONAL` cells.
#[derive(Debug, Clone, Copy)]
struct Line<M> {
    cells: [Cell<M>; MAX_DIAGONAL],
    len: usize,
}

impl<M: Copy> Line<M> {
    fn new() -> Self {
        Line {
            cells: [Cell::Empty; MAX_DIAGONAL],
            len: 0,
        }
    }

    fn push(&mut self, cell: Cell<M>) {
        self.cells[self.len] = cell;
        self.len += 1;
    }

    fn as_slice(&self) -> &[Cell<M>] {
        &self.cells[..self.len]
    }
}

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// The 6x7 grid. Row 0 is the top, row 5 is the bottom. Within any column,
/// occupied cells are contiguous from the bottom upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column is out of range")]
    InvalidColumn,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Lowest empty row of a column, scanning from the bottom up.
    /// Calling this on a full column is a contract violation by the caller,
    /// surfaced as an explicit error rather than a silent wrong row.
    pub fn lowest_empty_row(&self, col: usize) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }
        (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(MoveError::ColumnFull)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        let row = self.lowest_empty_row(col)?;
        self.cells[row][col] = cell;
        Ok(row)
    }

    /// Copy of this board with one piece dropped in `col`. The search engine
    /// builds children with this so parents are never aliased.
    pub fn with_piece(&self, col: usize, cell: Cell) -> Result<Board, MoveError> {
        let mut child = *self;
        child.drop_piece(col, cell)?;
        Ok(child)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

use super::settings::BoardDimensions;
use super::types::{Cell, PlaceOutcome, Position, Slot};
use super::win_detector::find_win;
use crate::InvalidMove;

/// Gravity grid with per-column drop pointers. Row 0 is the top row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dimensions: BoardDimensions,
    cells: Vec<Cell>,
    next_free: Vec<Option<usize>>,
    move_count: usize,
    winning_cells: Vec<Position>,
}

impl Board {
    pub fn new(dimensions: BoardDimensions) -> Self {
        let bottom = dimensions.rows.checked_sub(1);
        Self {
            dimensions,
            cells: vec![Cell::Empty; dimensions.cell_count()],
            next_free: vec![bottom; dimensions.columns],
            move_count: 0,
            winning_cells: Vec::new(),
        }
    }

    pub fn dimensions(&self) -> BoardDimensions {
        self.dimensions
    }

    pub fn rows(&self) -> usize {
        self.dimensions.rows
    }

    pub fn columns(&self) -> usize {
        self.dimensions.columns
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn is_full(&self) -> bool {
        self.move_count == self.dimensions.cell_count()
    }

    pub fn cell(&self, position: Position) -> Option<Cell> {
        if position.row >= self.rows() || position.column >= self.columns() {
            return None;
        }
        self.cells.get(self.index(position)).copied()
    }

    /// Row a chip dropped into 1-based `column` would land in, `None` when
    /// the column is full or does not exist.
    pub fn next_free_row(&self, column: usize) -> Option<usize> {
        let index = column.checked_sub(1)?;
        self.next_free.get(index).copied().flatten()
    }

    pub fn is_winning_cell(&self, position: Position) -> bool {
        self.winning_cells.contains(&position)
    }

    pub fn winning_cells(&self) -> &[Position] {
        &self.winning_cells
    }

    /// Drops a chip for `owner` into 1-based `column`.
    ///
    /// Rejected moves leave the board untouched. A move that both wins and
    /// fills the board reports the win.
    pub fn place_chip(&mut self, owner: Slot, column: usize) -> Result<PlaceOutcome, InvalidMove> {
        let columns = self.columns();
        if column == 0 || column > columns {
            return Err(InvalidMove::ColumnOutOfRange { column, columns });
        }

        let column_index = column - 1;
        let Some(row) = self.next_free[column_index] else {
            return Err(InvalidMove::ColumnFull { column });
        };

        let position = Position::new(row, column_index);
        let index = self.index(position);
        if self.cells[index] != Cell::Empty {
            return Err(InvalidMove::CellOccupied { row, column });
        }

        self.cells[index] = Cell::Chip(owner);
        self.next_free[column_index] = row.checked_sub(1);
        self.move_count += 1;

        if let Some(run) = find_win(self, position, owner) {
            self.winning_cells = run.cells;
            return Ok(PlaceOutcome::Won(run.axis));
        }

        if self.is_full() {
            Ok(PlaceOutcome::Tied)
        } else {
            Ok(PlaceOutcome::Placed)
        }
    }

    pub fn reset(&mut self) {
        *self = Board::new(self.dimensions);
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns().max(1))
    }

    fn index(&self, position: Position) -> usize {
        position.row * self.columns() + position.column
    }

    /// Builds a board from text rows ('.', '1', '2'), top row first, run
    /// length 4. Chips are assumed to already obey gravity.
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let columns = rows.first().map_or(0, |row| row.len());
        let dimensions = BoardDimensions {
            rows: rows.len(),
            columns,
            run_length: 4,
        };
        let mut board = Board::new(dimensions);

        for (row, line) in rows.iter().enumerate() {
            for (column, symbol) in line.chars().enumerate() {
                let cell = match symbol {
                    '1' => Cell::Chip(Slot::First),
                    '2' => Cell::Chip(Slot::Second),
                    _ => continue,
                };
                let index = board.index(Position::new(row, column));
                board.cells[index] = cell;
                board.move_count += 1;
                let free = &mut board.next_free[column];
                if free.is_some_and(|top| row <= top) {
                    *free = row.checked_sub(1);
                }
            }
        }
        board
    }
}

use std::fmt;

/// One of the two fixed player positions in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::First, Slot::Second];

    pub fn other(self) -> Slot {
        match self {
            Slot::First => Slot::Second,
            Slot::Second => Slot::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }

    /// 1-based number used in chat commands and messages.
    pub fn number(self) -> usize {
        self.index() + 1
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Chip(Slot),
}

impl Cell {
    pub fn owner(self) -> Option<Slot> {
        match self {
            Cell::Empty => None,
            Cell::Chip(slot) => Some(slot),
        }
    }
}

/// Zero-based board coordinate, row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    fn offset(self, row_step: isize, column_step: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(row_step)?,
            column: self.column.checked_add_signed(column_step)?,
        })
    }

    pub(crate) fn step(self, direction: (isize, isize)) -> Option<Position> {
        self.offset(direction.0, direction.1)
    }
}

/// Line orientation checked for a winning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    DiagonalRising,
    Horizontal,
    DiagonalFalling,
    Vertical,
}

impl Axis {
    /// Order in which axes are probed; the first satisfied one is reported.
    pub const PRIORITY: [Axis; 4] = [
        Axis::DiagonalRising,
        Axis::Horizontal,
        Axis::DiagonalFalling,
        Axis::Vertical,
    ];

    /// (row step, column step) walked away from the anchor.
    ///
    /// Vertical only walks down: nothing can sit above the chip just dropped.
    pub fn directions(self) -> &'static [(isize, isize)] {
        match self {
            Axis::DiagonalRising => &[(1, -1), (-1, 1)],
            Axis::Horizontal => &[(0, -1), (0, 1)],
            Axis::DiagonalFalling => &[(-1, -1), (1, 1)],
            Axis::Vertical => &[(1, 0)],
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::DiagonalRising => "rising diagonal",
            Axis::Horizontal => "horizontal",
            Axis::DiagonalFalling => "falling diagonal",
            Axis::Vertical => "vertical",
        };
        write!(f, "{}", name)
    }
}

/// Result of an accepted placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    Placed,
    Won(Axis),
    Tied,
}

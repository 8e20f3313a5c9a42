use super::board::Board;
use super::types::{Axis, Position, Slot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningRun {
    pub axis: Axis,
    /// Anchor first, then each walked direction in order.
    pub cells: Vec<Position>,
}

/// Checks the axes through `anchor` in priority order and returns the first
/// one holding `run_length` chips of `owner`.
pub fn find_win(board: &Board, anchor: Position, owner: Slot) -> Option<WinningRun> {
    let run_length = board.dimensions().run_length;
    let max_steps = run_length.saturating_sub(1);

    Axis::PRIORITY.into_iter().find_map(|axis| {
        let mut cells = vec![anchor];
        for &direction in axis.directions() {
            cells.extend(walk(board, anchor, owner, direction, max_steps));
        }
        (cells.len() >= run_length).then_some(WinningRun { axis, cells })
    })
}

fn walk(
    board: &Board,
    anchor: Position,
    owner: Slot,
    direction: (isize, isize),
    max_steps: usize,
) -> Vec<Position> {
    let mut cells = Vec::new();
    let mut position = anchor;
    for _ in 0..max_steps {
        let Some(next) = position.step(direction) else {
            break;
        };
        if board.cell(next).and_then(|cell| cell.owner()) != Some(owner) {
            break;
        }
        cells.push(next);
        position = next;
    }
    cells
}

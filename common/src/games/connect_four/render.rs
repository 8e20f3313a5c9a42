use super::board::Board;
use super::types::{Cell, Position, Slot};

const COLUMN_HEADERS: [&str; 10] = [
    "1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣", "9️⃣", "🔟",
];

const EMPTY: &str = "⚪";
const FIRST: &str = "🔴";
const SECOND: &str = "🔵";
const FIRST_WINNING: &str = "🟥";
const SECOND_WINNING: &str = "🟦";

/// Board as chat text: column headers, one line per row, headers again.
pub fn render_board(board: &Board) -> String {
    let headers = render_headers(board.columns());
    let mut lines = Vec::with_capacity(board.rows() + 2);
    lines.push(headers.clone());

    for (row, cells) in board.rows_iter().enumerate() {
        let line: Vec<&str> = cells
            .iter()
            .enumerate()
            .map(|(column, &cell)| glyph(cell, board.is_winning_cell(Position::new(row, column))))
            .collect();
        lines.push(line.join(" "));
    }

    lines.push(headers);
    lines.join("\n")
}

fn render_headers(columns: usize) -> String {
    (1..=columns)
        .map(|column| match COLUMN_HEADERS.get(column - 1) {
            Some(header) => header.to_string(),
            None => column.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn glyph(cell: Cell, winning: bool) -> &'static str {
    match (cell, winning) {
        (Cell::Empty, _) => EMPTY,
        (Cell::Chip(Slot::First), false) => FIRST,
        (Cell::Chip(Slot::Second), false) => SECOND,
        (Cell::Chip(Slot::First), true) => FIRST_WINNING,
        (Cell::Chip(Slot::Second), true) => SECOND_WINNING,
    }
}

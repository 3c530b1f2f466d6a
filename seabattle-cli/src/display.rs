// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Text rendering of boards.

use seabattle::board::{CellView, RenderedBoard};

/// Symbol drawn for a cell.
fn symbol(cell: CellView) -> char {
    match cell {
        CellView::Water => 'O',
        CellView::Ship => '■',
        CellView::Hit => 'X',
        CellView::Miss => 'T',
    }
}

/// Lay out the board as text: the label, a header of 1-based column numbers, and one
/// numbered line per row with a spacer line under each.
pub fn format_board(board: &RenderedBoard) -> String {
    let width = board.rows().first().map_or(0, Vec::len);
    let header = (1..=width)
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("  ");
    let rows: String = board
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let cells: String = row.iter().map(|&cell| format!("  {}", symbol(cell))).collect();
            format!(" {} |{}\n   |\n", i + 1, cells)
        })
        .collect();
    format!(
        "{}\n      {}\n    {}\n   |\n{}",
        board.label(),
        header,
        "_".repeat(width * 3 + 1),
        rows,
    )
}

/// Print the board followed by a blank line.
pub fn show_board(board: &RenderedBoard) {
    println!("{}", format_board(board));
}

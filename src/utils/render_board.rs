//! Text view of a `Board` for the console.

use crate::board::board::Board;
use crate::pieces::piece::Piece;
use crate::position::column::Column;

/// Draws the board with row 8 on top, framed by column letters and row
/// numbers. Blank squares print as `·`.
pub fn render_board(board: &Board) -> String {
    let squares = board.show_board();
    let letters = column_letters();

    let rows = squares
        .chunks(8)
        .zip(1..=8)
        .rev()
        .map(|(row, number)| row_line(number, row));

    std::iter::once(letters.clone())
        .chain(rows)
        .chain(std::iter::once(letters))
        .collect::<Vec<_>>()
        .join("\n")
}

fn column_letters() -> String {
    let letters: Vec<String> = Column::ALL.iter().map(|c| c.to_char().to_string()).collect();
    format!("  {}", letters.join(" "))
}

fn row_line(number: u8, row: &[Piece]) -> String {
    let glyphs: Vec<String> = row.iter().map(|p| p.symbol().to_string()).collect();
    format!("{number} {} {number}", glyphs.join(" "))
}

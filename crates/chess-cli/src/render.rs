//! Text rendering of the board.

use std::fmt::Write;

use chess_core::{Coordinate, Side, BOARD_SIZE};
use chess_engine::Piece;

const RESET: &str = "\x1b[0m";

fn ansi_color(side: Side) -> &'static str {
    match side {
        Side::White => "\x1b[37m",
        Side::Black => "\x1b[30m",
    }
}

/// Renders the pieces as an 8x8 grid indexed 0-7 on both axes.
///
/// The first line lists the file indices; each following line is one rank,
/// prefixed with its index, with cells separated by `|`. Empty cells are two
/// spaces.
pub fn render(pieces: &[Piece], color: bool) -> String {
    let mut out = String::new();

    for file in 0..BOARD_SIZE {
        let _ = write!(out, "  {}", file);
    }
    out.push('\n');

    for rank in 0..BOARD_SIZE {
        let _ = write!(out, "{}|", rank);
        for file in 0..BOARD_SIZE {
            let square = Coordinate::new(file, rank);
            match pieces.iter().find(|p| p.position() == square) {
                Some(piece) if color => {
                    let _ = write!(out, "{}{}{}", ansi_color(piece.side()), piece, RESET);
                }
                Some(piece) => {
                    let _ = write!(out, "{}", piece);
                }
                None => out.push_str("  "),
            }
            out.push('|');
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::PieceKind;
    use chess_engine::{Board, PieceId};

    #[test]
    fn header_and_row_layout() {
        let board = Board::standard();
        let text = render(board.pieces(), false);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "  0  1  2  3  4  5  6  7");
        assert_eq!(lines[1], "0|Ro|Kn|Bi|Qu|Ki|Bi|Kn|Ro|");
        assert_eq!(lines[2], "1|Pa|Pa|Pa|Pa|Pa|Pa|Pa|Pa|");
        assert_eq!(lines[3], "2|  |  |  |  |  |  |  |  |");
        assert_eq!(lines[8], "7|Ro|Kn|Bi|Qu|Ki|Bi|Kn|Ro|");
    }

    #[test]
    fn colors_depend_on_side() {
        let pieces = vec![
            Piece::new(PieceId(0), Side::White, PieceKind::King, Coordinate::new(0, 0)),
            Piece::new(PieceId(1), Side::Black, PieceKind::King, Coordinate::new(1, 0)),
        ];
        let text = render(&pieces, true);
        let row = text.lines().nth(1).unwrap();
        assert_eq!(row, "0|\x1b[37mKi\x1b[0m|\x1b[30mKi\x1b[0m|  |  |  |  |  |  |");
    }

    #[test]
    fn empty_board() {
        let text = render(&[], true);
        assert!(!text.contains('\x1b'));
        assert!(text.lines().skip(1).all(|l| l.ends_with("  |  |  |  |  |  |  |  |")));
    }
}

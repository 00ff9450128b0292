//! Output formatting for the CLI

use std::io::{self, Write};

use crate::tictactoe::{Board, Cell};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print statistics table
pub fn print_stats_table(stats: &[(&str, &str)]) {
    for (key, value) in stats {
        print_kv(key, value);
    }
}

/// Cell number as shown to the player
pub fn display_index(position: usize, one_based: bool) -> usize {
    if one_based { position + 1 } else { position }
}

/// Render the board as a grid; empty cells show the number that selects them.
///
/// ```text
///  X | 1 | 2
/// ---+---+---
///  3 | O | 5
/// ---+---+---
///  6 | 7 | 8
/// ```
pub fn render_board(board: &Board, one_based: bool) -> String {
    let mut rows = Vec::with_capacity(3);
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let position = row * 3 + col;
                match board.cells[position] {
                    Cell::Empty => display_index(position, one_based).to_string(),
                    mark => mark.to_char().to_string(),
                }
            })
            .collect();
        rows.push(format!(" {} ", cells.join(" | ")));
    }
    rows.join("\n---+---+---\n")
}

/// Write a board grid followed by a blank line
pub fn write_board<W: Write>(out: &mut W, board: &Board, one_based: bool) -> io::Result<()> {
    writeln!(out, "{}\n", render_board(board, one_based))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cells_show_their_numbers() {
        let board = Board::from_string("X...O....").unwrap();
        let zero_based = render_board(&board, false);
        assert!(zero_based.starts_with(" X | 1 | 2 "));
        assert!(zero_based.contains(" 3 | O | 5 "));
        assert!(zero_based.ends_with(" 6 | 7 | 8 "));

        let one_based = render_board(&board, true);
        assert!(one_based.starts_with(" X | 2 | 3 "));
        assert!(one_based.ends_with(" 7 | 8 | 9 "));
    }
}

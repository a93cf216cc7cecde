//! Win detection: line scanning over square boards.
//!
//! Both shipped variants win by aligning 3 marks, but the scan is
//! written for any board size N and win length L. Every run of L
//! consecutive cells that fits the grid is enumerated along four
//! direction families, anchored at each cell where the run fits:
//!
//! 1. rows, left to right
//! 2. columns, top to bottom
//! 3. diagonals, down-right
//! 4. anti-diagonals, down-left
//!
//! The first run fully occupied by the scanned player is returned. The
//! family order decides which line is reported when several complete on
//! the same move; callers re-run the scan after every placement or
//! slide, scoped to the player who just moved.

use crate::core::{Board, Coord, LineCells};

/// Find a winning run of `win_len` marks for `mark`, if any.
#[must_use]
pub fn find_line<M: Copy + Eq>(board: &Board<M>, mark: M, win_len: usize) -> Option<LineCells> {
    let n = board.size();
    assert!(
        win_len > 0 && win_len <= n,
        "Win length {win_len} does not fit a {n}x{n} board",
    );

    // Inclusive bound for anchors along the stepped axis.
    let span = n - win_len;

    for row in 0..n {
        for col in 0..=span {
            if let Some(line) = run(board, mark, Coord::new(row, col), (0, 1), win_len) {
                return Some(line);
            }
        }
    }

    for col in 0..n {
        for row in 0..=span {
            if let Some(line) = run(board, mark, Coord::new(row, col), (1, 0), win_len) {
                return Some(line);
            }
        }
    }

    for row in 0..=span {
        for col in 0..=span {
            if let Some(line) = run(board, mark, Coord::new(row, col), (1, 1), win_len) {
                return Some(line);
            }
        }
    }

    for row in 0..=span {
        for col in (win_len - 1)..n {
            if let Some(line) = run(board, mark, Coord::new(row, col), (1, -1), win_len) {
                return Some(line);
            }
        }
    }

    None
}

/// Check one anchored run. The anchor loops above guarantee every
/// stepped cell stays on the board.
fn run<M: Copy + Eq>(
    board: &Board<M>,
    mark: M,
    anchor: Coord,
    step: (isize, isize),
    win_len: usize,
) -> Option<LineCells> {
    let mut cells = LineCells::new();

    for i in 0..win_len as isize {
        let at = Coord::new(
            (anchor.row as isize + step.0 * i) as usize,
            (anchor.col as isize + step.1 * i) as usize,
        );
        if board.mark_at(at) != Some(mark) {
            return None;
        }
        cells.push(at);
    }

    Some(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with<M: Copy + Eq>(size: usize, marks: &[(usize, usize, M)]) -> Board<M> {
        let mut board = Board::new(size);
        for &(row, col, mark) in marks {
            board.set(Coord::new(row, col), mark);
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_line() {
        let board: Board<char> = Board::new(4);
        assert_eq!(find_line(&board, 'X', 3), None);
    }

    #[test]
    fn test_row_win() {
        let board = board_with(3, &[(1, 0, 'X'), (1, 1, 'X'), (1, 2, 'X')]);

        let line = find_line(&board, 'X', 3).unwrap();
        assert_eq!(
            line.as_slice(),
            &[Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)]
        );
    }

    #[test]
    fn test_column_win() {
        let board = board_with(3, &[(0, 2, 'O'), (1, 2, 'O'), (2, 2, 'O')]);

        let line = find_line(&board, 'O', 3).unwrap();
        assert_eq!(
            line.as_slice(),
            &[Coord::new(0, 2), Coord::new(1, 2), Coord::new(2, 2)]
        );
    }

    #[test]
    fn test_diagonal_win() {
        let board = board_with(4, &[(1, 1, 'I'), (2, 2, 'I'), (3, 3, 'I')]);

        let line = find_line(&board, 'I', 3).unwrap();
        assert_eq!(
            line.as_slice(),
            &[Coord::new(1, 1), Coord::new(2, 2), Coord::new(3, 3)]
        );
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_with(4, &[(0, 3, 'X'), (1, 2, 'X'), (2, 1, 'X')]);

        let line = find_line(&board, 'X', 3).unwrap();
        assert_eq!(
            line.as_slice(),
            &[Coord::new(0, 3), Coord::new(1, 2), Coord::new(2, 1)]
        );
    }

    #[test]
    fn test_interior_run_on_larger_board() {
        // A run that touches neither edge of a 4x4 board.
        let board = board_with(4, &[(2, 1, 'O'), (2, 2, 'O'), (2, 3, 'O')]);

        assert!(find_line(&board, 'O', 3).is_some());
    }

    #[test]
    fn test_scan_is_scoped_to_one_mark() {
        let board = board_with(3, &[(0, 0, 'O'), (0, 1, 'O'), (0, 2, 'O')]);

        assert!(find_line(&board, 'O', 3).is_some());
        assert_eq!(find_line(&board, 'X', 3), None);
    }

    #[test]
    fn test_broken_run_does_not_win() {
        let board = board_with(4, &[(0, 0, 'X'), (0, 1, 'X'), (0, 3, 'X')]);

        assert_eq!(find_line(&board, 'X', 3), None);
    }

    #[test]
    fn test_rows_reported_before_columns() {
        // Both a row and a column complete; the row family is scanned
        // first, so the row is the reported line.
        let board = board_with(
            3,
            &[
                (0, 0, 'X'),
                (0, 1, 'X'),
                (0, 2, 'X'),
                (1, 0, 'X'),
                (2, 0, 'X'),
            ],
        );

        let line = find_line(&board, 'X', 3).unwrap();
        assert_eq!(
            line.as_slice(),
            &[Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
        );
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn test_oversized_win_length_panics() {
        let board: Board<char> = Board::new(3);
        find_line(&board, 'X', 4);
    }
}

use super::board::{Board, Cell};

/// Shortest run of same-player discs that wins.
pub const WIN_LENGTH: usize = 4;

/// Axis pairs through the last placement: horizontal, vertical, diagonal /
/// and diagonal \. Checked in that order; the first winning axis is the one
/// reported.
const AXES: [(i64, i64); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Check whether the disc just placed at (`last_row`, `last_col`) completed
/// a run of four or more.
///
/// On a win, returns the full contiguous run of cells along the winning
/// axis, ordered ascending along it, for highlighting. Detection is
/// anchored at the last placement and only walks same-player neighbors, so
/// its cost is independent of board size. Only the player who just moved
/// can win on this check.
pub fn check_win(board: &Board, last_row: usize, last_col: usize) -> Option<Vec<(usize, usize)>> {
    let cell = board.get(last_row, last_col);
    if cell == Cell::Empty {
        return None;
    }

    AXES.iter()
        .map(|&(dr, dc)| run_through(board, last_row, last_col, dr, dc, cell))
        .find(|run| run.len() >= WIN_LENGTH)
}

/// True iff the board is full. Callers check this only after `check_win`
/// came back empty for the filling move, so the move that fills the last
/// cell and wins reports the win.
pub fn check_draw(board: &Board) -> bool {
    board.is_full()
}

/// The contiguous run of `cell`-colored discs along axis (`dr`, `dc`)
/// passing through (`row`, `col`), ordered from the negative end.
fn run_through(board: &Board, row: usize, col: usize, dr: i64, dc: i64, cell: Cell) -> Vec<(usize, usize)> {
    let (mut r, mut c) = (row as i64, col as i64);
    while matches_cell(board, r - dr, c - dc, cell) {
        r -= dr;
        c -= dc;
    }

    let mut run = Vec::new();
    while matches_cell(board, r, c, cell) {
        run.push((r as usize, c as usize));
        r += dr;
        c += dc;
    }
    run
}

fn matches_cell(board: &Board, r: i64, c: i64, cell: Cell) -> bool {
    r >= 0
        && c >= 0
        && (r as usize) < board.rows()
        && (c as usize) < board.cols()
        && board.get(r as usize, c as usize) == cell
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop(board: &mut Board, col: usize, cell: Cell) -> usize {
        let row = board.lowest_empty_row(col).unwrap().unwrap();
        board.place(row, col, cell).unwrap();
        row
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::default();
        for col in 0..4 {
            drop(&mut board, col, Cell::Red);
        }
        let cells = check_win(&board, 0, 2).expect("horizontal win");
        assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::default();
        for _ in 0..4 {
            drop(&mut board, 3, Cell::Yellow);
        }
        let cells = check_win(&board, 3, 3).expect("vertical win");
        assert_eq!(cells, vec![(0, 3), (1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::default();
        // Staircase for a / diagonal: Red at (0,0),(1,1),(2,2),(3,3).
        drop(&mut board, 0, Cell::Red);
        drop(&mut board, 1, Cell::Yellow);
        drop(&mut board, 1, Cell::Red);
        drop(&mut board, 2, Cell::Yellow);
        drop(&mut board, 2, Cell::Yellow);
        drop(&mut board, 2, Cell::Red);
        drop(&mut board, 3, Cell::Yellow);
        drop(&mut board, 3, Cell::Yellow);
        drop(&mut board, 3, Cell::Yellow);
        let row = drop(&mut board, 3, Cell::Red);

        let cells = check_win(&board, row, 3).expect("diagonal / win");
        assert_eq!(cells, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::default();
        // Mirror staircase for a \ diagonal: Red at (3,3),(2,4),(1,5),(0,6).
        drop(&mut board, 6, Cell::Red);
        drop(&mut board, 5, Cell::Yellow);
        drop(&mut board, 5, Cell::Red);
        drop(&mut board, 4, Cell::Yellow);
        drop(&mut board, 4, Cell::Yellow);
        drop(&mut board, 4, Cell::Red);
        drop(&mut board, 3, Cell::Yellow);
        drop(&mut board, 3, Cell::Yellow);
        drop(&mut board, 3, Cell::Yellow);
        let row = drop(&mut board, 3, Cell::Red);

        let cells = check_win(&board, row, 3).expect("diagonal \\ win");
        assert_eq!(cells, vec![(0, 6), (1, 5), (2, 4), (3, 3)]);
    }

    #[test]
    fn test_detection_is_symmetric_in_completion_order() {
        // Same horizontal line, completed from the left end, the right end,
        // and the middle: all three anchors detect it.
        for gap in [0, 2, 3] {
            let mut board = Board::default();
            for col in 0..4 {
                if col != gap {
                    drop(&mut board, col, Cell::Red);
                }
            }
            let row = drop(&mut board, gap, Cell::Red);
            let cells = check_win(&board, row, gap).expect("win from any end");
            assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
        }
    }

    #[test]
    fn test_run_longer_than_four_is_reported_whole() {
        let mut board = Board::default();
        for col in [0, 1, 2, 4, 3] {
            drop(&mut board, col, Cell::Red);
        }
        let cells = check_win(&board, 0, 3).expect("five in a row");
        assert_eq!(cells.len(), 5);
    }

    #[test]
    fn test_no_false_positive_from_alternating_discs() {
        let mut board = Board::default();
        let mut last = (0, 0);
        for col in 0..7 {
            let cell = if col % 2 == 0 { Cell::Red } else { Cell::Yellow };
            let row = drop(&mut board, col, cell);
            last = (row, col);
        }
        assert!(check_win(&board, last.0, last.1).is_none());
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let mut board = Board::default();
        for col in 0..3 {
            drop(&mut board, col, Cell::Red);
        }
        assert!(check_win(&board, 0, 1).is_none());
    }

    #[test]
    fn test_draw_requires_full_board() {
        let mut board = Board::default();
        assert!(!check_draw(&board));
        for col in 0..board.cols() {
            for _ in 0..board.rows() {
                drop(&mut board, col, Cell::Red);
            }
        }
        assert!(check_draw(&board));
    }
}

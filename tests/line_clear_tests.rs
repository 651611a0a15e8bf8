//! Line clear and line-clear scoring tests

use fallblock::core::{line_clear_points, scan_and_clear, Board, ScoreClock};
use fallblock::types::{Cell, PieceColor};

const R: Cell = Some(PieceColor::Red);
const G: Cell = Some(PieceColor::Green);

#[test]
fn test_two_separated_full_rows() {
    // rows=4, cols=2: rows 1 and 3 full, rows 0 and 2 empty.
    let mut board = Board::from_rows(vec![
        vec![None, None],
        vec![R, G],
        vec![None, None],
        vec![G, R],
    ]);
    let mut clock = ScoreClock::new();

    let cleared = scan_and_clear(&mut board);
    let points = clock.award_lines(cleared);

    assert_eq!(cleared, 2);
    assert_eq!(board.rows(), 4);
    assert_eq!(board.filled_count(), 0);
    assert_eq!(points, 20);
    assert_eq!(clock.score(), 20);
}

#[test]
fn test_survivors_keep_their_order() {
    let mut board = Board::from_rows(vec![
        vec![R, None],
        vec![R, G],
        vec![None, G],
        vec![G, R],
    ]);

    assert_eq!(scan_and_clear(&mut board), 2);
    assert_eq!(
        board.to_rows(),
        vec![
            vec![None, None],
            vec![None, None],
            vec![R, None],
            vec![None, G],
        ]
    );
}

#[test]
fn test_adjacent_full_rows_are_all_cleared() {
    let mut board = Board::from_rows(vec![
        vec![None, R, None],
        vec![R, R, R],
        vec![G, G, G],
        vec![R, G, R],
    ]);

    assert_eq!(scan_and_clear(&mut board), 3);
    assert_eq!(
        board.to_rows(),
        vec![
            vec![None, None, None],
            vec![None, None, None],
            vec![None, None, None],
            vec![None, R, None],
        ]
    );
}

#[test]
fn test_no_full_rows_is_a_no_op() {
    let rows = vec![vec![R, None], vec![None, G]];
    let mut board = Board::from_rows(rows.clone());
    let mut clock = ScoreClock::new();

    assert_eq!(scan_and_clear(&mut board), 0);
    assert_eq!(board.to_rows(), rows);
    assert_eq!(clock.award_lines(0), 0);
    assert_eq!(clock.score(), 0);
}

#[test]
fn test_points_double_per_extra_line() {
    assert_eq!(line_clear_points(10, 0), 0);
    assert_eq!(line_clear_points(10, 1), 10);
    assert_eq!(line_clear_points(10, 2), 20);
    assert_eq!(line_clear_points(10, 3), 40);
    assert_eq!(line_clear_points(10, 4), 80);
    assert_eq!(line_clear_points(20, 4), 160);
}

#[test]
fn test_points_saturate() {
    assert_eq!(line_clear_points(10, 80), u64::MAX);
    assert_eq!(line_clear_points(u64::MAX, 2), u64::MAX);
}

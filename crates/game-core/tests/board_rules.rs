// crates/game-core/tests/board_rules.rs
use game_core::{Board, GameError, Symbol};

#[test]
fn new_board_is_all_empty_for_every_size() {
    for size in 3..=9 {
        let board = Board::new(size).unwrap();
        let flat = board.to_flat_string();

        assert_eq!(flat.len(), size * size);
        assert!(flat.chars().all(|c| c == '.'));
        for pos in 1..=size * size {
            assert!(board.is_move_valid(pos), "size {} pos {}", size, pos);
        }
    }
}

#[test]
fn board_smaller_than_three_is_rejected() {
    assert_eq!(Board::new(2), Err(GameError::InvalidSize(2)));
    assert_eq!(Board::new(0), Err(GameError::InvalidSize(0)));
}

#[test]
fn out_of_range_positions_are_invalid_not_errors() {
    let board = Board::new(3).unwrap();
    assert!(!board.is_move_valid(0));
    assert!(!board.is_move_valid(10));
    assert!(!board.is_move_valid(usize::MAX));
}

#[test]
fn position_maps_row_major() {
    let board = Board::new(4).unwrap();
    assert_eq!(board.coordinates(1), Some((0, 0)));
    assert_eq!(board.coordinates(4), Some((0, 3)));
    assert_eq!(board.coordinates(5), Some((1, 0)));
    assert_eq!(board.coordinates(16), Some((3, 3)));
    assert_eq!(board.coordinates(17), None);
}

#[test]
fn place_then_clear_round_trips_validity() {
    let mut board = Board::new(3).unwrap();

    board.place_move(5, Symbol::X).unwrap();
    assert!(!board.is_move_valid(5));
    assert_eq!(board.cell(1, 1), Some(Symbol::X));

    board.clear_cell(1, 1);
    assert!(board.is_move_valid(5));
    assert_eq!(board.cell(1, 1), None);
}

#[test]
fn placing_on_occupied_cell_is_refused_and_keeps_board() {
    let mut board = Board::new(3).unwrap();
    board.place_move(1, Symbol::X).unwrap();

    assert_eq!(board.place_move(1, Symbol::O), Err(GameError::IllegalMove(1)));
    assert_eq!(board.cell(0, 0), Some(Symbol::X));
}

#[test]
fn flat_string_reflects_symbols() {
    let mut board = Board::new(3).unwrap();
    board.place_move(1, Symbol::X).unwrap();
    board.place_move(9, Symbol::O).unwrap();

    assert_eq!(board.to_flat_string(), "X.......O");
}

#[test]
fn no_win_on_empty_board_or_with_two_in_a_row() {
    let mut board = Board::new(3).unwrap();
    assert!(!board.check_win(Symbol::X));
    assert!(!board.check_win(Symbol::O));

    board.place_move(1, Symbol::X).unwrap();
    board.place_move(2, Symbol::X).unwrap();
    assert!(!board.check_win(Symbol::X));
}

#[test]
fn every_line_on_a_three_board_wins() {
    let lines = [
        [1, 2, 3],
        [4, 5, 6],
        [7, 8, 9],
        [1, 4, 7],
        [2, 5, 8],
        [3, 6, 9],
        [1, 5, 9],
        [3, 5, 7],
    ];

    for line in lines {
        let mut board = Board::new(3).unwrap();
        for pos in line {
            board.place_move(pos, Symbol::X).unwrap();
        }
        assert!(board.check_win(Symbol::X), "line {:?}", line);
        assert!(!board.check_win(Symbol::O), "line {:?}", line);
    }
}

#[test]
fn three_in_a_row_wins_anywhere_on_larger_boards() {
    // 5x5, horizontal run at the right edge of the bottom row: 23, 24, 25.
    let mut board = Board::new(5).unwrap();
    for pos in [23, 24, 25] {
        board.place_move(pos, Symbol::O).unwrap();
    }
    assert!(board.check_win(Symbol::O));

    // 5x5, vertical run in the last column starting at row 2: 15, 20, 25.
    let mut board = Board::new(5).unwrap();
    for pos in [15, 20, 25] {
        board.place_move(pos, Symbol::X).unwrap();
    }
    assert!(board.check_win(Symbol::X));

    // 5x5, down-right diagonal from (2,2): 13, 19, 25.
    let mut board = Board::new(5).unwrap();
    for pos in [13, 19, 25] {
        board.place_move(pos, Symbol::X).unwrap();
    }
    assert!(board.check_win(Symbol::X));

    // 5x5, down-left diagonal from (2,4): 15, 19, 23.
    let mut board = Board::new(5).unwrap();
    for pos in [15, 19, 23] {
        board.place_move(pos, Symbol::X).unwrap();
    }
    assert!(board.check_win(Symbol::X));
}

#[test]
fn broken_runs_do_not_win() {
    // 4x4 row with a gap: 1, 2, _, 4.
    let mut board = Board::new(4).unwrap();
    for pos in [1, 2, 4] {
        board.place_move(pos, Symbol::X).unwrap();
    }
    assert!(!board.check_win(Symbol::X));

    // Wrapping across rows is not a line: 3, 4, 5 on a 4x4 board.
    let mut board = Board::new(4).unwrap();
    for pos in [3, 4, 5] {
        board.place_move(pos, Symbol::X).unwrap();
    }
    assert!(!board.check_win(Symbol::X));
}

#[test]
fn full_board_without_line_is_draw() {
    // X O X
    // X O O
    // O X X
    let mut board = Board::new(3).unwrap();
    let layout = [
        Symbol::X, Symbol::O, Symbol::X,
        Symbol::X, Symbol::O, Symbol::O,
        Symbol::O, Symbol::X, Symbol::X,
    ];
    for (idx, symbol) in layout.iter().enumerate() {
        board.place_move(idx + 1, *symbol).unwrap();
    }

    assert!(board.is_draw());
    assert!(!board.check_win(Symbol::X));
    assert!(!board.check_win(Symbol::O));
}

#[test]
fn board_not_full_is_not_draw() {
    let mut board = Board::new(3).unwrap();
    assert!(!board.is_draw());
    for pos in 1..=8 {
        board.place_move(pos, Symbol::X).unwrap();
    }
    assert!(!board.is_draw());
}

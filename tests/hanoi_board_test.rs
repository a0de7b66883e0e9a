//! Tests for the Hanoi board model.

use hanoi_server::{Board, BoardError, Move, MoveError, Peg};

#[test]
fn test_with_size_stacks_everything_on_a() {
    let board = Board::with_size(3).expect("Valid size");

    assert_eq!(board.peg(Peg::A), &[2, 1, 0]);
    assert!(board.peg(Peg::B).is_empty());
    assert!(board.peg(Peg::C).is_empty());
    assert_eq!(board.disk_count(), 3);
    assert!(!board.is_solved());
}

#[test]
fn test_with_size_rejects_zero_disks() {
    assert_eq!(Board::with_size(0), Err(BoardError::NoDisks));
    assert_eq!(Board::random_with_size(0), Err(BoardError::NoDisks));
}

#[test]
fn test_from_pegs_accepts_valid_distribution() {
    let board = Board::from_pegs([vec![2], vec![1, 0], vec![]]).expect("Valid board");
    assert_eq!(board.disk_count(), 3);
}

#[test]
fn test_misordered_peg_is_unconstructible() {
    let result = Board::from_pegs([vec![0, 1], vec![], vec![]]);
    assert_eq!(result, Err(BoardError::MisorderedPeg(Peg::A)));

    // A repeated size within one peg is an ordering violation too.
    let result = Board::from_pegs([vec![1, 1], vec![0], vec![]]);
    assert_eq!(result, Err(BoardError::MisorderedPeg(Peg::A)));
}

#[test]
fn test_duplicate_disk_is_unconstructible() {
    let result = Board::from_pegs([vec![1], vec![1], vec![0]]);
    assert_eq!(result, Err(BoardError::DuplicateDisk(1)));
}

#[test]
fn test_gapped_disk_sizes_are_unconstructible() {
    // Two disks whose sizes are {0, 2}: size 1 is missing.
    let result = Board::from_pegs([vec![2], vec![0], vec![]]);
    assert_eq!(result, Err(BoardError::DiskOutOfRange { disk: 2, count: 2 }));
}

#[test]
fn test_move_transfers_top_disk() {
    let mut board = Board::with_size(3).unwrap();

    board
        .make_move(Move::new(Peg::A, Peg::C).unwrap())
        .expect("Top disk moves freely");

    assert_eq!(board.peg(Peg::A), &[2, 1]);
    assert_eq!(board.peg(Peg::C), &[0]);
    assert_eq!(board.disk_count(), 3);
}

#[test]
fn test_larger_disk_cannot_rest_on_smaller() {
    let mut board = Board::with_size(3).unwrap();
    board.make_move(Move::new(Peg::A, Peg::C).unwrap()).unwrap();

    // Top of A is now disk 1; top of C is disk 0.
    let result = board.make_move(Move::new(Peg::A, Peg::C).unwrap());
    assert_eq!(result, Err(MoveError::LargerOnSmaller { disk: 1, onto: 0 }));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Invalid move: cannot place larger disk 1 on smaller disk 0"
    );

    // The rejected move left the board untouched.
    assert_eq!(board.peg(Peg::A), &[2, 1]);
    assert_eq!(board.peg(Peg::C), &[0]);
}

#[test]
fn test_move_from_empty_peg_rejected() {
    let mut board = Board::with_size(3).unwrap();

    let result = board.make_move(Move::new(Peg::B, Peg::C).unwrap());
    assert_eq!(result, Err(MoveError::EmptyPeg(Peg::B)));
}

#[test]
fn test_move_to_self_rejected_at_construction() {
    assert_eq!(Move::new(Peg::A, Peg::A), Err(MoveError::SamePeg(Peg::A)));
}

#[test]
fn test_classic_seven_move_solution() {
    let mut board = Board::with_size(3).unwrap();
    let moves = [
        (Peg::A, Peg::C),
        (Peg::A, Peg::B),
        (Peg::C, Peg::B),
        (Peg::A, Peg::C),
        (Peg::B, Peg::A),
        (Peg::B, Peg::C),
        (Peg::A, Peg::C),
    ];

    for (from, to) in moves {
        board
            .make_move(Move::new(from, to).unwrap())
            .expect("Classic solution step");
    }

    assert!(board.is_solved());
    assert_eq!(board.peg(Peg::C), &[2, 1, 0]);
}

#[test]
fn test_peg_of_disk() {
    let mut board = Board::with_size(3).unwrap();
    board.make_move(Move::new(Peg::A, Peg::B).unwrap()).unwrap();

    assert_eq!(board.peg_of_disk(0), Ok(Peg::B));
    assert_eq!(board.peg_of_disk(2), Ok(Peg::A));
    assert_eq!(board.peg_of_disk(7), Err(BoardError::DiskNotFound(7)));
}

#[test]
fn test_clone_does_not_alias() {
    let mut board = Board::with_size(3).unwrap();
    let copy = board.clone();

    board.make_move(Move::new(Peg::A, Peg::C).unwrap()).unwrap();

    assert_eq!(copy.peg(Peg::A), &[2, 1, 0]);
    assert!(copy.peg(Peg::C).is_empty());
}

#[test]
fn test_random_boards_are_always_valid() {
    for _ in 0..64 {
        let board = Board::random_with_size(5).expect("Nonzero size");
        assert_eq!(board.disk_count(), 5);

        let stacks = [
            board.peg(Peg::A).to_vec(),
            board.peg(Peg::B).to_vec(),
            board.peg(Peg::C).to_vec(),
        ];
        Board::from_pegs(stacks).expect("Random distribution keeps the invariants");
    }
}

#[test]
fn test_serialization_uses_peg_names() {
    let board = Board::with_size(2).unwrap();
    let value = serde_json::to_value(&board).unwrap();

    assert_eq!(value, serde_json::json!({ "pegA": [1, 0], "pegB": [], "pegC": [] }));
}

#[test]
fn test_deserialization_validates_invariants() {
    let board: Board = serde_json::from_value(
        serde_json::json!({ "pegA": [2], "pegB": [1, 0], "pegC": [] }),
    )
    .expect("Valid board deserializes");
    assert_eq!(board.peg(Peg::B), &[1, 0]);

    let result: Result<Board, _> = serde_json::from_value(
        serde_json::json!({ "pegA": [0, 1], "pegB": [], "pegC": [] }),
    );
    assert!(result.is_err());
}

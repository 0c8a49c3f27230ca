//! Session tests - turn engine behavior through the public API

use tui_chroma::core::{ActionError, Board, GameSession};
use tui_chroma::types::{Cell, Coord, BOARD_SIZE, SEED_TILE_COUNT};

fn colored_coords(session: &GameSession) -> Vec<Coord> {
    let mut out = Vec::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let coord = Coord::new(row, col);
            if session.board().get(coord).is_some_and(|c| c.is_color()) {
                out.push(coord);
            }
        }
    }
    out
}

#[test]
fn test_started_board_has_goals_and_five_tiles() {
    let mut session = GameSession::new(20240817);
    assert!(!session.started());
    session.start();
    assert!(session.started());

    let mut goals = 0;
    let mut colored = 0;
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let coord = Coord::new(row, col);
            match session.board().get(coord).unwrap() {
                Cell::Goal => {
                    goals += 1;
                    assert!(Board::is_goal_coord(coord));
                }
                Cell::Color(_) => colored += 1,
                Cell::Empty => {}
            }
        }
    }
    assert_eq!(goals, 16);
    assert_eq!(colored, SEED_TILE_COUNT);
    assert_eq!(session.score(), 0);
    assert!(session.selection().is_empty());
    assert!(!session.is_game_over());
}

#[test]
fn test_selection_toggles_and_preserves_order() {
    let mut session = GameSession::new(1);
    session.start();

    let a = Coord::new(6, 3);
    let b = Coord::new(0, 5);
    let c = Coord::new(7, 7);

    session.toggle_select(a);
    session.toggle_select(b);
    session.toggle_select(c);
    assert_eq!(session.selection(), &[a, b, c]);

    session.toggle_select(b);
    assert_eq!(session.selection(), &[a, c]);
}

#[test]
fn test_swap_rejections_leave_state_unchanged() {
    let mut session = GameSession::new(99);
    session.start();
    let board_before = session.board().clone();
    let score_before = session.score();

    // Wrong count.
    assert_eq!(session.swap(), Err(ActionError::SwapSelectionCount));
    assert_eq!(session.board(), &board_before);

    // Goal + empty targets.
    session.toggle_select(Coord::new(2, 0));
    let empty = (0..BOARD_SIZE)
        .flat_map(|r| (0..BOARD_SIZE).map(move |c| Coord::new(r, c)))
        .find(|&coord| session.board().get(coord) == Some(Cell::Empty))
        .unwrap();
    session.toggle_select(empty);
    assert_eq!(session.swap(), Err(ActionError::SwapTarget));

    assert_eq!(session.board(), &board_before);
    assert_eq!(session.score(), score_before);
    assert_eq!(session.selection().len(), 2, "selection kept on rejection");
    assert!(!session.is_game_over());
}

#[test]
fn test_swap_moves_colors_and_adds_at_most_five_tiles() {
    let mut session = GameSession::new(7);
    session.start();

    let colored = colored_coords(&session);
    let (a, b) = (colored[0], colored[1]);
    let (cell_a, cell_b) = (
        session.board().get(a).unwrap(),
        session.board().get(b).unwrap(),
    );
    let before = session.board().colored_count();

    session.toggle_select(a);
    session.toggle_select(b);
    assert_eq!(session.swap(), Ok(()));

    assert_eq!(session.board().get(a), Some(cell_b));
    assert_eq!(session.board().get(b), Some(cell_a));
    assert!(session.selection().is_empty());

    let added = session.board().colored_count() - before;
    assert!(added <= 5);
    assert_eq!(added, 5, "48 free cells leave room for a full refill");
}

#[test]
fn test_score_rejects_goal_cell_selection() {
    let mut session = GameSession::new(11);
    session.start();

    session.toggle_select(Coord::new(3, 6));
    assert_eq!(
        session.score_selection(),
        Err(ActionError::RegionTooSmall { len: 0 })
    );
    assert_eq!(session.score(), 0);
}

#[test]
fn test_score_selection_count_checked_before_region() {
    let mut session = GameSession::new(11);
    session.start();

    assert_eq!(
        session.score_selection(),
        Err(ActionError::ScoreSelectionCount)
    );

    let colored = colored_coords(&session);
    session.toggle_select(colored[0]);
    session.toggle_select(colored[1]);
    assert_eq!(
        session.score_selection(),
        Err(ActionError::ScoreSelectionCount)
    );
}

#[test]
fn test_game_over_latch_is_monotonic() {
    let mut session = GameSession::new(5);
    session.start();

    // Swap repeatedly; each success injects 5 tiles, so the board fills.
    let mut latched_at_full = false;
    for _ in 0..64 {
        let colored = colored_coords(&session);
        session.toggle_select(colored[0]);
        session.toggle_select(colored[1]);
        match session.swap() {
            Ok(()) => {}
            Err(ActionError::GameOver) => {
                latched_at_full = true;
                break;
            }
            Err(err) => panic!("unexpected rejection: {err}"),
        }
    }

    assert!(latched_at_full, "board must eventually fill and latch");
    assert!(session.is_game_over());

    // The latch survives further attempts.
    for _ in 0..3 {
        assert_eq!(session.swap(), Err(ActionError::GameOver));
        assert!(session.is_game_over());
    }
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let mut a = GameSession::new(31337);
    let mut b = GameSession::new(31337);
    a.start();
    b.start();
    assert_eq!(a.board(), b.board());

    for _ in 0..3 {
        let colored = colored_coords(&a);
        for session in [&mut a, &mut b] {
            session.toggle_select(colored[0]);
            session.toggle_select(colored[1]);
            assert_eq!(session.swap(), Ok(()));
        }
        assert_eq!(a.board(), b.board());
    }
}

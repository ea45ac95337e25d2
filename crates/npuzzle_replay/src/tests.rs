use npuzzle_core::{BoardLayout, BoardState, PuzzleSequence, TileId};
use pretty_assertions::assert_eq;
use web_time::Duration;

use crate::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn seq(order: usize, states: &[&[TileId]]) -> PuzzleSequence {
    let states = states.iter().map(|s| BoardState::new(s.to_vec())).collect();
    PuzzleSequence::new(order, states).unwrap()
}

fn timed() -> Box<dyn AdvancePolicy> {
    Box::new(TimedAdvance {
        step_duration: ms(250),
        pause_duration: ms(500),
    })
}

fn two_puzzles() -> Vec<PuzzleSequence> {
    vec![
        seq(2, &[&[1, 2, 0, 3], &[1, 2, 3, 0]]),
        seq(3, &[&[1, 2, 3, 4, 5, 6, 7, 8, 0]]),
    ]
}

fn cursor(puzzle: usize, step: usize) -> Cursor {
    Cursor { puzzle, step }
}

#[test]
fn test_nothing_to_replay() {
    let layout = BoardLayout::new(1200.0);
    assert_eq!(
        Replay::new(vec![], timed(), layout).unwrap_err(),
        ReplayError::NoSequences,
    );
    let empty = PuzzleSequence::new(3, vec![]).unwrap();
    assert_eq!(
        Replay::new(vec![empty], timed(), layout).unwrap_err(),
        ReplayError::NoSequences,
    );
}

#[test]
fn test_timed_replay() {
    let mut replay = Replay::new(two_puzzles(), timed(), BoardLayout::new(1200.0)).unwrap();
    assert_eq!(replay.phase(), Phase::AdvancingStep);
    assert_eq!(replay.cursor(), cursor(0, 0));

    assert!(!replay.step(ms(100)));
    assert_eq!(replay.time_until_next_step(), Some(ms(150)));
    assert!(replay.step(ms(150)));
    assert_eq!(replay.cursor(), cursor(0, 1));

    // Last state of the first puzzle stays on screen during the pause.
    assert!(replay.step(ms(250)));
    assert_eq!(replay.phase(), Phase::WaitingAfterPuzzle);
    assert_eq!(replay.cursor(), cursor(0, 1));
    assert_eq!(replay.current_state().map(|s| s.cells()), Some(&[1, 2, 3, 0][..]));

    assert!(!replay.step(ms(499)));
    assert!(replay.step(ms(1)));
    assert_eq!(replay.phase(), Phase::AdvancingStep);
    assert_eq!(replay.cursor(), cursor(1, 0));
    assert_eq!(replay.frame().map(|f| f.order), Some(3));

    assert!(replay.step(ms(250)));
    assert_eq!(replay.phase(), Phase::WaitingAfterPuzzle);
    assert!(replay.step(ms(500)));
    assert!(replay.is_done());
    assert_eq!(replay.frame(), None);
    assert_eq!(replay.time_until_next_step(), None);
    assert!(!replay.step(ms(10_000)));
}

#[test]
fn test_one_transition_per_step() {
    let mut replay = Replay::new(two_puzzles(), timed(), BoardLayout::new(1200.0)).unwrap();
    assert!(replay.step(ms(10_000)));
    assert_eq!(replay.cursor(), cursor(0, 1));
    assert_eq!(replay.phase(), Phase::AdvancingStep);
    assert_eq!(replay.time_until_next_step(), Some(ms(250)));
}

#[test]
fn test_timed_replay_ignores_clicks() {
    let mut replay = Replay::new(two_puzzles(), timed(), BoardLayout::new(1200.0)).unwrap();
    assert!(!replay.handle_input(ReplayInput::Advance));
    assert_eq!(replay.cursor(), cursor(0, 0));
}

#[test]
fn test_interactive_replay() {
    let policy = Box::new(InteractiveAdvance);
    let mut replay = Replay::new(two_puzzles(), policy, BoardLayout::new(1200.0)).unwrap();

    assert!(!replay.step(ms(3_600_000)));
    assert_eq!(replay.time_until_next_step(), None);
    assert_eq!(replay.cursor(), cursor(0, 0));

    let mut visited = vec![(replay.phase(), replay.cursor())];
    while !replay.is_done() {
        assert!(replay.handle_input(ReplayInput::Advance));
        visited.push((replay.phase(), replay.cursor()));
    }
    assert_eq!(
        visited,
        vec![
            (Phase::AdvancingStep, cursor(0, 0)),
            (Phase::AdvancingStep, cursor(0, 1)),
            (Phase::WaitingAfterPuzzle, cursor(0, 1)),
            (Phase::AdvancingStep, cursor(1, 0)),
            (Phase::WaitingAfterPuzzle, cursor(1, 0)),
            (Phase::Done, cursor(1, 0)),
        ],
    );
    assert!(!replay.handle_input(ReplayInput::Advance));
}

#[test]
fn test_close_mid_animation() {
    let mut replay = Replay::new(two_puzzles(), timed(), BoardLayout::new(1200.0)).unwrap();
    assert!(replay.step(ms(250)));

    assert!(replay.handle_input(ReplayInput::Close));
    assert!(replay.is_done());
    assert_eq!(replay.frame(), None);
    assert_eq!(replay.current_sequence(), None);
    assert!(!replay.step(ms(10_000)));
    assert!(!replay.handle_input(ReplayInput::Advance));
    assert!(!replay.handle_input(ReplayInput::Close));
    assert_eq!(replay.cursor(), cursor(0, 1));
}

#[test]
fn test_frame_tiles() {
    let sequences = vec![seq(3, &[&[1, 2, 3, 4, 0, 5, 7, 8, 6]])];
    let replay = Replay::new(sequences, timed(), BoardLayout::new(1200.0)).unwrap();
    let frame = replay.frame().unwrap();

    assert_eq!(frame.cursor, cursor(0, 0));
    assert_eq!(frame.step_count, 1);
    assert_eq!(frame.tiles.len(), 8);
    let five = frame.tiles.iter().find(|t| t.tile == 5).unwrap();
    assert_eq!((five.rect.column, five.rect.row), (2, 1));
    assert_eq!((five.rect.x, five.rect.y, five.rect.size), (800.0, 400.0, 400.0));
}

#[test]
fn test_out_of_range_tiles_are_not_drawn() {
    let sequences = vec![seq(2, &[&[1, 7, 0, 3]])];
    let replay = Replay::new(sequences, timed(), BoardLayout::new(100.0)).unwrap();
    let tiles: Vec<TileId> = replay.frame().unwrap().tiles.iter().map(|t| t.tile).collect();
    assert_eq!(tiles, vec![1, 3]);
}

#[test]
fn test_atlas_falls_back_to_placeholder() {
    let mut atlas = TileAtlas::new();
    assert_eq!(atlas.background(), None);
    atlas.insert(0, "bg");
    atlas.insert(1, "one");

    assert_eq!(atlas.background(), Some(&"bg"));
    assert_eq!(atlas.get(1), TileVisual::Texture(&"one"));
    assert_eq!(atlas.get(2), TileVisual::Placeholder);
    assert_eq!(atlas.get(TileId::MAX), TileVisual::Placeholder);

    let lengths = atlas.map(|_, name| name.len());
    assert_eq!(lengths.len(), 2);
    assert_eq!(lengths.get(1), TileVisual::Texture(&3));
}

#[test]
fn test_advance_mode() {
    assert_eq!("interactive".parse(), Ok(AdvanceMode::Interactive));
    assert_eq!(AdvanceMode::default(), AdvanceMode::Timed);

    let policy = AdvanceMode::Timed.policy(ms(100), ms(200));
    assert_eq!(policy.hold_duration(Phase::AdvancingStep), Some(ms(100)));
    assert_eq!(policy.hold_duration(Phase::WaitingAfterPuzzle), Some(ms(200)));
    assert_eq!(policy.hold_duration(Phase::Done), None);
    assert!(!policy.accepts_input(Phase::AdvancingStep));

    let policy = AdvanceMode::Interactive.policy(ms(100), ms(200));
    assert_eq!(policy.hold_duration(Phase::AdvancingStep), None);
    assert!(policy.accepts_input(Phase::WaitingAfterPuzzle));
    assert!(!policy.accepts_input(Phase::Done));
}

#[test]
fn test_frame_clock() {
    let mut clock = FrameClock::new();
    let first = clock.tick();
    assert!(first > Duration::ZERO);
    clock.pause();
    assert_eq!(clock.tick(), first);
}

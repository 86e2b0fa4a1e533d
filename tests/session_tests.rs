//! Session and match integration tests.

use std::sync::{Arc, Mutex};

use rust_gametree::core::{GameRng, GameState, OperatorId, PlayerId};
use rust_gametree::error::Error;
use rust_gametree::games::{FoxAndHounds, RingSum, TicTacToe, TwentyOne};
use rust_gametree::search::{FixedDepthSearch, SearchStrategy};
use rust_gametree::session::{play_match, EnginePlayer, RandomPlayer, Session};

// =============================================================================
// Live Session Tests
// =============================================================================

#[test]
fn test_engine_and_human_alternate() {
    let mut session = Session::new(TicTacToe::new());
    let mut search = FixedDepthSearch::with_depth(2);

    session.play(OperatorId::new(4)).unwrap();
    let rec = session.play_engine(&mut search).unwrap();

    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history()[1].player, PlayerId::SECOND);
    assert_eq!(session.history()[1].operator, rec.operator);
    assert_eq!(session.to_move(), PlayerId::FIRST);
}

#[test]
fn test_rejected_moves_report_errors() {
    let mut session = Session::new(TicTacToe::new());
    session.play(OperatorId::new(0)).unwrap();

    assert_eq!(
        session.play(OperatorId::new(0)),
        Err(Error::IllegalOperator {
            operator: OperatorId::new(0)
        })
    );
    assert_eq!(
        session.play(OperatorId::new(42)),
        Err(Error::IllegalOperator {
            operator: OperatorId::new(42)
        })
    );
    assert_eq!(session.to_move(), PlayerId::SECOND);
}

#[test]
fn test_operator_parsed_from_text() {
    let mut session = Session::new(TwentyOne::new());
    let op: OperatorId = " 2 ".parse().unwrap();
    session.play(op).unwrap();
    assert_eq!(session.state().total(), 3);

    let bad = "three".parse::<OperatorId>();
    assert!(matches!(bad, Err(Error::ParseOperator { .. })));
}

// =============================================================================
// Match Tests
// =============================================================================

#[test]
fn test_engine_never_loses_to_random_tictactoe() {
    let mut rng = GameRng::new(2024);
    for seed in 0..10 {
        let mut engine = EnginePlayer::new(9);
        let mut random = RandomPlayer::from_rng(rng.fork());

        let as_x = play_match(TicTacToe::new(), &mut engine, &mut random);
        assert_ne!(as_x.winner(), Some(PlayerId::SECOND), "seed {seed}");

        let as_o = play_match(TicTacToe::new(), &mut random, &mut engine);
        assert_ne!(as_o.winner(), Some(PlayerId::FIRST), "seed {seed}");
    }
}

#[test]
fn test_engine_self_play_draws_tictactoe() {
    let mut x = EnginePlayer::new(9);
    let mut o = EnginePlayer::new(9);

    let record = play_match(TicTacToe::new(), &mut x, &mut o);

    assert!(record.final_state.is_terminal());
    assert_eq!(record.plies(), 9);
    assert_eq!(record.winner(), None);
}

#[test]
fn test_random_matches_are_reproducible() {
    let play = |seed| {
        let mut a = RandomPlayer::new(seed);
        let mut b = RandomPlayer::new(seed + 1);
        play_match(FoxAndHounds::new(), &mut a, &mut b).moves
    };
    assert_eq!(play(3), play(3));
}

#[test]
fn test_fox_and_hounds_always_decided() {
    for seed in 0..20 {
        let mut fox = RandomPlayer::new(seed);
        let mut hounds = RandomPlayer::new(seed + 100);

        let record = play_match(FoxAndHounds::new(), &mut fox, &mut hounds);

        assert!(record.final_state.is_terminal(), "seed {seed}");
        assert!(record.winner().is_some(), "seed {seed}");
    }
}

#[test]
fn test_ring_sum_tallies_follow_tokens() {
    let mut engine = EnginePlayer::new(4);
    let mut random = RandomPlayer::new(9);
    let session = Session::new(RingSum::new())
        .with_scorer(|state: &RingSum, op| state.token_value(op).map_or(0, i64::from));

    let record = session.play_out(&mut engine, &mut random);

    assert_eq!(record.plies(), 12);
    assert!(record.final_state.is_terminal());
    for player in PlayerId::all() {
        assert_eq!(
            record.tallies[player],
            i64::from(record.final_state.tally(player))
        );
    }
    assert_eq!(record.tallies[PlayerId::FIRST] + record.tallies[PlayerId::SECOND], 50);
}

// =============================================================================
// Tracing Tests
// =============================================================================

/// Subscriber that only records the names of opened spans.
#[derive(Clone, Default)]
struct SpanNames(Arc<Mutex<Vec<&'static str>>>);

impl SpanNames {
    fn names(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}

impl tracing::Subscriber for SpanNames {
    fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, span: &tracing::span::Attributes<'_>) -> tracing::span::Id {
        let mut names = self.0.lock().unwrap();
        names.push(span.metadata().name());
        tracing::span::Id::from_u64(names.len() as u64)
    }

    fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}

    fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}

    fn event(&self, _: &tracing::Event<'_>) {}

    fn enter(&self, _: &tracing::span::Id) {}

    fn exit(&self, _: &tracing::span::Id) {}
}

#[test]
fn test_recommend_opens_span() {
    let spans = SpanNames::default();
    tracing::subscriber::with_default(spans.clone(), || {
        FixedDepthSearch::with_depth(2).recommend(&TwentyOne::new())
    })
    .unwrap();

    assert!(spans.names().contains(&"recommend"), "{:?}", spans.names());
}

#[test]
fn test_play_engine_opens_span() {
    let spans = SpanNames::default();
    let mut session = Session::new(TwentyOne::new());
    tracing::subscriber::with_default(spans.clone(), || {
        session.play_engine(&mut FixedDepthSearch::with_depth(2))
    })
    .unwrap();

    let names = spans.names();
    assert!(names.contains(&"play_engine"), "{names:?}");
    assert!(names.contains(&"recommend"), "{names:?}");
}

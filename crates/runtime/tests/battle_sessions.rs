use std::time::Duration;

use arena_core::{
    Attributes, BattleConfig, BattleEngine, BattleError, ElementalType, MonsterId, MonsterRecord,
    PcgRandom, ScriptedRandom, Side, TerminationReason,
};
use arena_runtime::{
    BattleEvent, ImmediateScheduler, Runtime, RuntimeError, SessionOutcome, Topic,
};
use tokio::sync::broadcast;

fn monster(id: i64, name: &str, ty: ElementalType, attrs: Attributes, level: u32) -> MonsterRecord {
    MonsterRecord {
        id: MonsterId(id),
        name: name.into(),
        level,
        dna: ty.index(),
        elemental_type: ty,
        attributes: attrs,
        owner: "0xplayer".into(),
    }
}

fn breeze(id: i64) -> MonsterRecord {
    monster(id, "Breeze", ElementalType::Air, Attributes::new(10, 10, 10, 10), 1)
}

fn drain(rx: &mut broadcast::Receiver<BattleEvent>) -> Vec<BattleEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test(start_paused = true)]
async fn short_budget_ends_on_remaining_health() {
    let runtime = Runtime::builder()
        .battle_config(BattleConfig::default().with_time_budget_secs(3))
        .build();
    let mut battle_rx = runtime.subscribe(Topic::Battle);
    let mut clock_rx = runtime.subscribe(Topic::Clock);

    let started = tokio::time::Instant::now();
    let session = runtime
        .start_battle(breeze(1), breeze(-4), ScriptedRandom::constant(0.0))
        .unwrap();
    let report = session.wait().await.unwrap().into_report().unwrap();

    // Turns at 0.5s, 1.5s and 2.5s; the budget runs out at 3s.
    assert_eq!(started.elapsed(), Duration::from_secs(3));
    assert_eq!(report.reason, TerminationReason::TimeExpired);
    assert_eq!(report.turns.len(), 3);
    assert_eq!(report.final_health, [91, 82]);
    assert_eq!(report.winner, MonsterId(1));

    let ticks: Vec<_> = drain(&mut clock_rx)
        .into_iter()
        .map(|event| match event {
            BattleEvent::ClockTick { remaining_time, .. } => remaining_time,
            other => panic!("unexpected clock event {other:?}"),
        })
        .collect();
    assert_eq!(ticks, vec![2, 1, 0]);

    let battle = drain(&mut battle_rx);
    assert!(matches!(battle.first(), Some(BattleEvent::Started { .. })));
    assert!(matches!(
        battle.last(),
        Some(BattleEvent::Ended {
            reason: TerminationReason::TimeExpired,
            ..
        })
    ));
    let turns = battle
        .iter()
        .filter(|event| matches!(event, BattleEvent::TurnResolved { .. }))
        .count();
    assert_eq!(turns, 3);
}

#[tokio::test(start_paused = true)]
async fn equal_health_at_timeout_goes_to_first() {
    let runtime = Runtime::builder()
        .battle_config(BattleConfig::default().with_time_budget_secs(2))
        .build();
    let session = runtime
        .start_battle(breeze(1), breeze(-4), ScriptedRandom::constant(0.0))
        .unwrap();
    let report = session.wait().await.unwrap().into_report().unwrap();

    // One hit each before the second tick.
    assert_eq!(report.final_health, [91, 91]);
    assert_eq!(report.winner_side, Side::First);
    assert_eq!(report.reason, TerminationReason::TimeExpired);
}

#[tokio::test]
async fn headless_battles_end_by_knockout() {
    let runtime = Runtime::builder()
        .battle_config(BattleConfig::headless())
        .scheduler(ImmediateScheduler)
        .build();
    let fire = monster(
        7,
        "Ember",
        ElementalType::Fire,
        Attributes::new(70, 60, 40, 50),
        6,
    );
    let earth = monster(
        -3,
        "Terravore",
        ElementalType::Earth,
        Attributes::new(70, 25, 40, 75),
        5,
    );

    let session = runtime.start_battle(fire, earth, PcgRandom::new(8)).unwrap();
    let report = session.wait().await.unwrap().into_report().unwrap();
    assert_eq!(report.reason, TerminationReason::Knockout);
    assert!(report.final_health.contains(&0));
    assert_eq!(report.remaining_time, 60);
}

#[tokio::test]
async fn runner_matches_virtual_clock_simulation() {
    let config = BattleConfig::default().with_time_budget_secs(4);
    let runtime = Runtime::builder()
        .battle_config(config.clone())
        .scheduler(ImmediateScheduler)
        .build();
    let first = monster(
        2,
        "Ripple",
        ElementalType::Water,
        Attributes::new(30, 30, 30, 30),
        2,
    );
    let second = monster(
        -2,
        "Aquafin",
        ElementalType::Water,
        Attributes::new(40, 50, 60, 55),
        4,
    );

    let mut engine = BattleEngine::new(first.clone(), second.clone(), config).unwrap();
    let expected = engine.simulate(&mut PcgRandom::new(21)).unwrap();

    let session = runtime
        .start_battle(first, second, PcgRandom::new(21))
        .unwrap();
    let report = session.wait().await.unwrap().into_report().unwrap();
    assert_eq!(report, expected);
}

#[tokio::test(start_paused = true)]
async fn abandon_suppresses_further_events() {
    let runtime = Runtime::builder().build();
    let mut battle_rx = runtime.subscribe(Topic::Battle);
    let mut clock_rx = runtime.subscribe(Topic::Clock);

    let session = runtime
        .start_battle(breeze(1), breeze(-4), ScriptedRandom::constant(0.5))
        .unwrap();
    tokio::time::sleep(Duration::from_millis(2_600)).await;
    session.abandon();
    session.abandon();
    let token = session.abandon_token();

    let outcome = session.wait().await.unwrap();
    assert_eq!(outcome, SessionOutcome::Abandoned { turns_resolved: 3 });
    assert!(outcome.is_abandoned());
    token.abandon();

    tokio::time::sleep(Duration::from_secs(120)).await;
    let battle = drain(&mut battle_rx);
    assert!(matches!(
        battle.last(),
        Some(BattleEvent::Abandoned {
            turns_resolved: 3,
            ..
        })
    ));
    assert!(
        !battle
            .iter()
            .any(|event| matches!(event, BattleEvent::Ended { .. }))
    );
    assert_eq!(drain(&mut clock_rx).len(), 2);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_abandons_the_session() {
    let runtime = Runtime::builder().build();
    let mut battle_rx = runtime.subscribe(Topic::Battle);

    let session = runtime
        .start_battle(breeze(1), breeze(-4), ScriptedRandom::constant(0.5))
        .unwrap();
    tokio::time::sleep(Duration::from_millis(2_600)).await;
    drop(session);

    tokio::time::sleep(Duration::from_secs(120)).await;
    let battle = drain(&mut battle_rx);
    assert!(matches!(
        battle.last(),
        Some(BattleEvent::Abandoned {
            turns_resolved: 3,
            ..
        })
    ));
    assert!(
        !battle
            .iter()
            .any(|event| matches!(event, BattleEvent::Ended { .. }))
    );
}

#[tokio::test(start_paused = true)]
async fn knockout_beats_a_tick_due_at_the_same_instant() {
    // First turn and the only budget tick both land at 1s.
    let config = BattleConfig {
        start_delay_ms: 1_000,
        ..BattleConfig::default().with_time_budget_secs(1)
    };
    let runtime = Runtime::builder().battle_config(config).build();
    let titan = monster(
        2,
        "Titan",
        ElementalType::Water,
        Attributes::new(100, 100, 100, 100),
        20,
    );
    let pebble = monster(
        -1,
        "Pebble",
        ElementalType::Fire,
        Attributes::new(10, 10, 10, 10),
        1,
    );

    let started = tokio::time::Instant::now();
    let session = runtime
        .start_battle(titan, pebble, ScriptedRandom::constant(0.5))
        .unwrap();
    let report = session.wait().await.unwrap().into_report().unwrap();

    assert_eq!(started.elapsed(), Duration::from_secs(1));
    assert_eq!(report.reason, TerminationReason::Knockout);
    assert_eq!(report.remaining_time, 1);
    assert_eq!(report.turns.len(), 1);
    assert_eq!(report.winner, MonsterId(2));
}

#[tokio::test]
async fn abandoning_before_the_first_turn_resolves_nothing() {
    let runtime = Runtime::builder().scheduler(ImmediateScheduler).build();
    let session = runtime
        .start_battle(breeze(1), breeze(-4), ScriptedRandom::constant(0.5))
        .unwrap();
    session.abandon();
    let outcome = session.wait().await.unwrap();
    assert_eq!(outcome, SessionOutcome::Abandoned { turns_resolved: 0 });
    assert!(outcome.report().is_none());
}

#[tokio::test]
async fn invalid_records_start_no_session() {
    let runtime = Runtime::builder().build();
    let mut broken = breeze(1);
    broken.name = String::new();

    let err = runtime
        .start_battle(broken, breeze(-4), ScriptedRandom::constant(0.5))
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Battle(BattleError::InvalidMonster {
            side: Side::First,
            ..
        })
    ));

    let err = runtime
        .start_battle(breeze(1), breeze(1), ScriptedRandom::constant(0.5))
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Battle(BattleError::DuplicateCombatant(_))
    ));
}

#[tokio::test]
async fn random_opponent_respects_level_band() {
    let runtime = Runtime::builder()
        .battle_config(BattleConfig::headless())
        .scheduler(ImmediateScheduler)
        .build();

    for seed in 0..10 {
        let session = runtime
            .start_vs_random_opponent(breeze(1), PcgRandom::new(seed))
            .unwrap();
        let opponent = session.second().clone();
        assert!(opponent.id.is_builtin());
        assert!(opponent.level <= 5);

        let report = session.wait().await.unwrap().into_report().unwrap();
        assert_eq!(report.second, opponent.id);
    }
}

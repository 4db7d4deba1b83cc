//! `arena battle`: fight a computer-controlled opponent.

use anyhow::{Context, Result, anyhow};
use arena_core::{BattleReport, MonsterId, MonsterRecord, Side};
use arena_runtime::{
    BattleEvent, Runtime, SessionHandle, SessionOutcome, StdRandom, Topic,
};
use clap::Args;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use super::{load_roster, parse_dna};
use crate::config::CliConfig;

/// Battle a roster opponent with a monster derived from DNA
#[derive(Args, Debug)]
pub struct BattleArgs {
    /// Name of your monster
    #[arg(long)]
    pub name: String,

    /// DNA of your monster (decimal or 0x-prefixed hex)
    #[arg(long, value_parser = parse_dna)]
    pub dna: u32,

    /// Level of your monster
    #[arg(long, default_value_t = 1)]
    pub level: u32,

    /// Token id of your monster (positive)
    #[arg(long, default_value_t = 1)]
    pub id: i64,

    /// Roster id of the opponent (e.g. -3); picked by level when omitted
    #[arg(long, allow_hyphen_values = true)]
    pub opponent: Option<i64>,

    /// Seed for a reproducible battle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the delay between turns (0 resolves instantly)
    #[arg(long)]
    pub turn_delay_ms: Option<u64>,

    /// Print the final report as JSON instead of streaming the log
    #[arg(long)]
    pub json: bool,
}

impl BattleArgs {
    pub async fn execute(self, mut config: CliConfig) -> Result<()> {
        if self.id <= 0 {
            anyhow::bail!("--id must be positive; negative ids are reserved for the roster");
        }
        if let Some(delay) = self.turn_delay_ms {
            config.runtime.battle.turn_delay_ms = delay;
            if delay == 0 {
                config.runtime.battle.start_delay_ms = 0;
            }
        }

        let roster = load_roster(&config)?;
        let player = MonsterRecord::from_dna(
            MonsterId(self.id),
            self.name.trim(),
            self.level,
            self.dna,
            "local",
        );
        let rng = match self.seed {
            Some(seed) => StdRandom::seeded(seed),
            None => StdRandom::from_entropy(),
        };

        let runtime = Runtime::builder()
            .config(config.runtime)
            .roster(roster)
            .build();
        let mut battle_rx = runtime.subscribe(Topic::Battle);

        let session = match self.opponent {
            Some(id) => {
                let opponent = runtime
                    .roster()
                    .get(MonsterId(id))
                    .ok_or_else(|| anyhow!("no roster opponent with id {id}"))?
                    .record
                    .clone();
                runtime.start_battle(player, opponent, rng)?
            }
            None => runtime.start_vs_random_opponent(player, rng)?,
        };
        info!(
            session = %session.id(),
            player = %session.first().name,
            opponent = %session.second().name,
            "session started"
        );

        follow(&session, &mut battle_rx, !self.json).await?;
        let outcome = session.wait().await.context("battle session failed")?;

        match outcome {
            SessionOutcome::Completed(report) if self.json => {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            SessionOutcome::Completed(report) => print_summary(&runtime, &report),
            SessionOutcome::Abandoned { turns_resolved } => {
                println!("Battle abandoned after {turns_resolved} turns.");
            }
        }
        Ok(())
    }
}

/// Relay the session's events until it finishes. Ctrl-C abandons the battle.
async fn follow(
    session: &SessionHandle,
    battle_rx: &mut tokio::sync::broadcast::Receiver<BattleEvent>,
    print_log: bool,
) -> Result<()> {
    loop {
        tokio::select! {
            event = battle_rx.recv() => match event {
                Ok(event) if event.session() == session.id() => {
                    if print_log {
                        print_event(&event);
                    }
                    if matches!(event, BattleEvent::Ended { .. } | BattleEvent::Abandoned { .. }) {
                        return Ok(());
                    }
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "battle log lagged; some lines were dropped");
                }
                Err(RecvError::Closed) => return Ok(()),
            },
            signal = tokio::signal::ctrl_c() => {
                signal.context("listening for ctrl-c")?;
                info!(session = %session.id(), "interrupted; abandoning battle");
                session.abandon();
            }
        }
    }
}

fn print_event(event: &BattleEvent) {
    match event {
        BattleEvent::Started { log, .. } | BattleEvent::TurnResolved { log, .. } => {
            for line in log {
                println!("{line}");
            }
        }
        BattleEvent::Ended { .. } | BattleEvent::Abandoned { .. } | BattleEvent::ClockTick { .. } => {}
    }
}

fn print_summary(runtime: &Runtime, report: &BattleReport) {
    // Timeout lines are only in the report, not in any turn event.
    if let Some(last) = report.log.last()
        && last.starts_with("Time's up!")
    {
        println!("{last}");
    }

    let starting = runtime.config().battle.starting_health;
    let [first, second] = report.final_health;
    println!();
    println!(
        "Result: {} ({}) after {} turns, {}s left on the clock",
        if report.winner_side == Side::First { "victory" } else { "defeat" },
        report.reason,
        report.turns.len(),
        report.remaining_time,
    );
    println!("Health: you {first}/{starting}, opponent {second}/{starting}");
}

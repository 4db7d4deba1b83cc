//! Level-banded opponent selection.

use std::ops::RangeInclusive;

use arena_core::RandomSource;

use crate::roster::{Roster, RosterEntry};

/// Difficulty band chosen from the player's monster level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum LevelBand {
    /// Player level 3 or below: opponents up to level 5.
    Beginner,
    /// Player level 4 to 7: opponents from level 3 to 8.
    Intermediate,
    /// Player level 8 and above: opponents from level 5.
    Veteran,
}

impl LevelBand {
    pub const fn for_player_level(level: u32) -> Self {
        match level {
            0..=3 => LevelBand::Beginner,
            4..=7 => LevelBand::Intermediate,
            _ => LevelBand::Veteran,
        }
    }

    /// Opponent levels admitted by this band.
    pub const fn opponent_levels(self) -> RangeInclusive<u32> {
        match self {
            LevelBand::Beginner => 0..=5,
            LevelBand::Intermediate => 3..=8,
            LevelBand::Veteran => 5..=u32::MAX,
        }
    }

    pub fn admits(self, opponent_level: u32) -> bool {
        self.opponent_levels().contains(&opponent_level)
    }
}

/// Picks an opponent for a player from a roster.
#[derive(Clone, Copy, Debug)]
pub struct OpponentSelector<'a> {
    roster: &'a Roster,
}

impl<'a> OpponentSelector<'a> {
    pub fn new(roster: &'a Roster) -> Self {
        Self { roster }
    }

    /// Opponents eligible for a player level.
    ///
    /// Falls back to the whole roster when no opponent fits the band, so the
    /// result is never empty.
    pub fn eligible(&self, player_level: u32) -> Vec<&'a RosterEntry> {
        let band = LevelBand::for_player_level(player_level);
        let in_band: Vec<_> = self
            .roster
            .iter()
            .filter(|entry| band.admits(entry.level()))
            .collect();
        if in_band.is_empty() {
            self.roster.iter().collect()
        } else {
            in_band
        }
    }

    /// Uniformly picks one eligible opponent. Each call draws independently.
    pub fn select<R>(&self, player_level: u32, rng: &mut R) -> &'a RosterEntry
    where
        R: RandomSource + ?Sized,
    {
        let eligible = self.eligible(player_level);
        eligible[rng.pick_index(eligible.len())]
    }
}

#[cfg(test)]
mod tests {
    use arena_core::{Attributes, ElementalType, MonsterId, MonsterRecord, PcgRandom, ScriptedRandom};

    use super::*;

    fn ids(entries: &[&RosterEntry]) -> Vec<i64> {
        entries.iter().map(|entry| entry.record.id.0).collect()
    }

    #[test]
    fn bands_follow_player_level() {
        assert_eq!(LevelBand::for_player_level(1), LevelBand::Beginner);
        assert_eq!(LevelBand::for_player_level(3), LevelBand::Beginner);
        assert_eq!(LevelBand::for_player_level(4), LevelBand::Intermediate);
        assert_eq!(LevelBand::for_player_level(7), LevelBand::Intermediate);
        assert_eq!(LevelBand::for_player_level(8), LevelBand::Veteran);
        assert_eq!(LevelBand::for_player_level(40), LevelBand::Veteran);
    }

    #[test]
    fn eligible_sets_match_bands() {
        let roster = Roster::builtin();
        let selector = OpponentSelector::new(&roster);

        assert_eq!(ids(&selector.eligible(1)), vec![-1, -2, -3, -4, -5]);
        assert_eq!(
            ids(&selector.eligible(5)),
            vec![-1, -2, -3, -4, -5, -6, -7, -9]
        );
        assert_eq!(
            ids(&selector.eligible(10)),
            vec![-3, -5, -6, -7, -8, -9, -10]
        );
    }

    #[test]
    fn selections_stay_inside_band() {
        let roster = Roster::builtin();
        let selector = OpponentSelector::new(&roster);
        let mut rng = PcgRandom::new(99);

        for _ in 0..200 {
            assert!(selector.select(1, &mut rng).level() <= 5);
            assert!(selector.select(10, &mut rng).level() >= 5);
            let mid = selector.select(6, &mut rng).level();
            assert!((3..=8).contains(&mid));
        }
    }

    #[test]
    fn scripted_draw_picks_deterministically() {
        let roster = Roster::builtin();
        let selector = OpponentSelector::new(&roster);

        let first = selector.select(1, &mut ScriptedRandom::constant(0.0));
        assert_eq!(first.record.name, "Flameburst");
        let last = selector.select(1, &mut ScriptedRandom::constant(0.99));
        assert_eq!(last.record.name, "Voltshock");
    }

    #[test]
    fn empty_band_falls_back_to_whole_roster() {
        let elder = RosterEntry {
            record: MonsterRecord {
                id: MonsterId(-1),
                name: "Elder".into(),
                level: 30,
                dna: 0x0000_0003,
                elemental_type: ElementalType::Air,
                attributes: Attributes::new(50, 50, 50, 50),
                owner: String::new(),
            },
            description: "Old and slow.".into(),
        };
        let roster = Roster::new(vec![elder]).unwrap();
        let selector = OpponentSelector::new(&roster);

        assert_eq!(ids(&selector.eligible(1)), vec![-1]);
        assert_eq!(selector.select(2, &mut PcgRandom::new(1)).record.name, "Elder");
    }
}

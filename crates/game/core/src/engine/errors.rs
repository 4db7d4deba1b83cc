//! Error types for the battle engine.

use crate::error::InvalidMonster;
use crate::monster::MonsterId;

use super::state::Side;

/// Errors surfaced by [`BattleEngine`](super::BattleEngine).
///
/// Precondition failures (`InvalidMonster`, `DuplicateCombatant`) mean no
/// session was created. The lifecycle variants report calls made in the wrong
/// state; they never mutate the session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("{side} combatant is invalid: {source}")]
    InvalidMonster {
        side: Side,
        #[source]
        source: InvalidMonster,
    },

    #[error("monster {0} cannot battle itself")]
    DuplicateCombatant(MonsterId),

    #[error("battle has not been started")]
    NotStarted,

    #[error("battle has already been started")]
    AlreadyStarted,

    #[error("battle has already ended")]
    Ended,

    #[error("battle was already advanced by hand; simulate needs a fresh session")]
    AlreadyDriven,

    #[error("battle was abandoned before it ended")]
    Abandoned,
}

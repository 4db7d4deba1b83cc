//! Topic-based event bus for battle sessions.
//!
//! Sessions publish to a topic, and consumers subscribe only to the topics
//! they need: `Battle` for the battle narrative, `Clock` for the countdown.

mod bus;
mod types;

pub use bus::{EventBus, Topic};
pub use types::{BattleEvent, SessionId};

//! Opponent roster loader.
//!
//! Replaces the built-in roster with one authored in RON:
//!
//! ```ron
//! [
//!     (
//!         id: -1,
//!         name: "Flameburst",
//!         elemental_type: "fire",
//!         level: 3,
//!         dna: 0x5A2D4130,
//!         attributes: (strength: 65, speed: 45, intelligence: 30, stamina: 40),
//!         description: "A fast and aggressive fire monster with powerful attacks!",
//!     ),
//! ]
//! ```

use std::path::Path;

use arena_core::{Attributes, ElementalType, InvalidMonster, MonsterId, MonsterRecord, NULL_OWNER};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::roster::{Roster, RosterEntry};

/// One roster entry as written in RON.
///
/// The elemental type is a plain string so an unrecognized name is reported
/// with the entry it belongs to instead of a bare serde error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntrySpec {
    pub id: i64,
    pub name: String,
    pub elemental_type: String,
    pub level: u32,
    pub dna: u32,
    pub attributes: Attributes,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub owner: Option<String>,
}

impl RosterEntrySpec {
    fn resolve(self) -> Result<RosterEntry, InvalidMonster> {
        let elemental_type: ElementalType = self
            .elemental_type
            .parse()
            .map_err(|_| InvalidMonster::UnknownType(self.elemental_type.clone()))?;

        Ok(RosterEntry {
            record: MonsterRecord {
                id: MonsterId(self.id),
                name: self.name,
                level: self.level,
                dna: self.dna,
                elemental_type,
                attributes: self.attributes,
                owner: self.owner.unwrap_or_else(|| NULL_OWNER.to_string()),
            },
            description: self.description,
        })
    }
}

/// Loader for opponent rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse a roster from RON text and validate every entry.
    pub fn parse(content: &str) -> LoadResult<Roster> {
        let specs: Vec<RosterEntrySpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        let mut entries = Vec::with_capacity(specs.len());
        for spec in specs {
            let name = spec.name.clone();
            let entry = spec.resolve().map_err(|e| {
                anyhow::anyhow!("Failed to resolve roster entry '{}': {}", name, e)
            })?;
            entries.push(entry);
        }

        Roster::new(entries).map_err(|e| anyhow::anyhow!("Invalid roster: {}", e))
    }
}

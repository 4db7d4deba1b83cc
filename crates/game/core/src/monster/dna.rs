//! DNA minting helpers.

use crate::env::RandomSource;

use super::element::ElementalType;

/// Draw a fresh DNA value.
///
/// With a preferred type the low nibble is overwritten with that type's index,
/// so [`ElementalType::from_dna`] of the result is always the preference. The
/// other 28 bits stay random.
pub fn generate_dna<R>(rng: &mut R, preferred: Option<ElementalType>) -> u32
where
    R: RandomSource + ?Sized,
{
    let dna = rng.next_u32();
    match preferred {
        Some(ty) => (dna & 0xFFFF_FFF0) | ty.index(),
        None => dna,
    }
}

/// Evolution stage shown for a monster of the given level (1, 2 or 3).
pub const fn evolution_stage(level: u32) -> u8 {
    if level >= 10 {
        3
    } else if level >= 5 {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRandom;

    #[test]
    fn preferred_type_survives_derivation() {
        let mut rng = PcgRandom::new(42);
        for ty in ElementalType::ALL {
            for _ in 0..50 {
                let dna = generate_dna(&mut rng, Some(ty));
                assert_eq!(ElementalType::from_dna(dna), ty);
            }
        }
    }

    #[test]
    fn unconstrained_dna_is_raw_draw() {
        let mut a = PcgRandom::new(7);
        let mut b = PcgRandom::new(7);
        assert_eq!(generate_dna(&mut a, None), b.next_u32());
    }

    #[test]
    fn evolution_thresholds() {
        assert_eq!(evolution_stage(1), 1);
        assert_eq!(evolution_stage(4), 1);
        assert_eq!(evolution_stage(5), 2);
        assert_eq!(evolution_stage(9), 2);
        assert_eq!(evolution_stage(10), 3);
    }
}

//! Spending unspent stat points on a character's attributes.

use crate::database::models::Character;
use crate::error::InsufficientPointsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatAllocation {
    pub attack: u32,
    pub defense: u32,
}

impl StatAllocation {
    pub fn total(&self) -> u64 {
        u64::from(self.attack) + u64::from(self.defense)
    }
}

/// Moves points from the unspent pool into attack and defense.
/// All or nothing: an over-allocation leaves the character untouched.
pub fn allocate_stat_points(
    character: &mut Character,
    allocation: StatAllocation,
) -> Result<(), InsufficientPointsError> {
    let requested = allocation.total();
    if requested > u64::from(character.unspent_stat_points) {
        return Err(InsufficientPointsError {
            requested,
            available: character.unspent_stat_points,
        });
    }

    character.attack += allocation.attack;
    character.defense += allocation.defense;
    // Fits: requested <= unspent_stat_points.
    character.unspent_stat_points -= requested as u32;
    Ok(())
}

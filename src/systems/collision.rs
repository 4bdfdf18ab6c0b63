use glam::Vec2;

use crate::constants::COLLISION_DISTANCE_SQUARED;
use crate::systems::ghost::Ghost;

/// A ghost touching the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    /// Index of the ghost in the session's ghost list
    pub ghost: usize,
    /// Whether the ghost was frightened at the moment of contact
    pub frightened: bool,
}

/// Returns true when two continuous positions are close enough to touch.
pub fn touching(a: Vec2, b: Vec2) -> bool {
    a.distance_squared(b) < COLLISION_DISTANCE_SQUARED
}

/// Finds the first ghost, in list order, touching the player.
///
/// Only one contact is resolved per step even when several ghosts overlap the
/// player at once; the rest are picked up on later steps if still touching.
pub fn first_contact(player: Vec2, ghosts: &[Ghost]) -> Option<Contact> {
    ghosts
        .iter()
        .enumerate()
        .find(|(_, ghost)| touching(player, ghost.agent.position()))
        .map(|(index, ghost)| Contact {
            ghost: index,
            frightened: ghost.is_frightened(),
        })
}

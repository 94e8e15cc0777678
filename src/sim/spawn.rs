//! Asteroid placement
//!
//! New asteroids appear a short hop from the ship, on any bearing outside
//! the 120° cone ahead of its nose.

use glam::Vec2;
use rand::Rng;

use super::state::{Asteroid, Ship};
use super::wrap::Playfield;
use crate::consts::*;
use crate::heading;

/// Place one large asteroid relative to the ship
pub fn spawn_asteroid<R: Rng + ?Sized>(ship: &Ship, playfield: Playfield, rng: &mut R) -> Asteroid {
    let offset = rng.random_range(SPAWN_ANGLE_MIN..=SPAWN_ANGLE_MAX);
    let distance = rng.random_range(SPAWN_DISTANCE_MIN..=SPAWN_DISTANCE_MAX);
    let vel = Vec2::new(
        rng.random_range(-SPAWN_SPEED..=SPAWN_SPEED),
        rng.random_range(-SPAWN_SPEED..=SPAWN_SPEED),
    );

    let pos = playfield.wrap(ship.pos + heading(ship.angle + offset) * distance);
    Asteroid::new(pos, vel, ASTEROID_LARGE)
}

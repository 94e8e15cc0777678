//! Simulation module
//!
//! All gameplay logic lives here. This module is pure apart from the RNG
//! handed in by the caller:
//! - No rendering or platform dependencies
//! - Randomness only through an injected `rand::Rng`
//! - World state owned by the caller and passed in explicitly

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod wrap;

pub use collision::{HitReport, distance, in_circle, resolve_bullet_hits, ship_hits_asteroid};
pub use spawn::spawn_asteroid;
pub use state::{Asteroid, Bullet, GameEvent, Ship, World, integrate};
pub use tick::{TickInput, prune_bullets, tick};
pub use wrap::{Playfield, wrap_axis};

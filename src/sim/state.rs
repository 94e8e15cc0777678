//! World state and entity types
//!
//! Ship, bullets and asteroids are separate lightweight types; movement and
//! wrapping are shared free functions over positions and velocities.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::spawn::spawn_asteroid;
use super::wrap::Playfield;
use crate::consts::*;
use crate::heading;

/// Something that happened during a tick (drained by the caller for logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// World was rebuilt after the ship died
    Reset,
    BulletFired,
    /// An asteroid was hit and removed
    AsteroidDestroyed { size: u32 },
    /// A destroyed asteroid left two children of `size`
    AsteroidSplit { size: u32 },
    /// Every asteroid is gone; bonus awarded and replacements spawned
    FieldCleared,
    ShipDestroyed,
}

/// The player's ship (singleton)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading (radians, 0 = up)
    pub angle: f32,
}

impl Ship {
    /// Pose the ship takes on every reset
    pub fn initial(playfield: Playfield) -> Self {
        Self {
            pos: Vec2::new(playfield.width / 8.0, playfield.height * 0.6),
            vel: Vec2::ZERO,
            angle: 0.0,
        }
    }

    /// Unit vector the nose points along
    #[inline]
    pub fn heading(&self) -> Vec2 {
        heading(self.angle)
    }

    /// Create a bullet leaving the nose
    pub fn fire(&self) -> Bullet {
        Bullet {
            pos: self.pos,
            vel: self.vel + self.heading() * BULLET_SPEED,
            angle: self.angle,
        }
    }
}

/// A projectile. Bullets never wrap; they are dropped once off screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub angle: f32,
}

/// A rock
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Collision radius and draw scale (16, 8 or 4)
    pub size: u32,
    /// Spin for rendering only
    pub angle: f32,
}

impl Asteroid {
    pub fn new(pos: Vec2, vel: Vec2, size: u32) -> Self {
        Self {
            pos,
            vel,
            size,
            angle: 0.0,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size as f32
    }

    /// Children left behind when this asteroid is destroyed.
    ///
    /// Sizes at or below [`ASTEROID_SPLIT_MIN`] leave nothing. Otherwise the
    /// two halves mirror the parent velocity, one across each axis.
    pub fn split(&self) -> Option<[Asteroid; 2]> {
        if self.size <= ASTEROID_SPLIT_MIN {
            return None;
        }
        let size = self.size / 2;
        Some([
            Asteroid::new(self.pos, Vec2::new(-self.vel.x, self.vel.y), size),
            Asteroid::new(self.pos, Vec2::new(self.vel.x, -self.vel.y), size),
        ])
    }
}

/// Advance a position by velocity over `dt`
#[inline]
pub fn integrate(pos: Vec2, vel: Vec2, dt: f32) -> Vec2 {
    pos + vel * dt
}

/// Complete world state, owned by the caller and threaded through
/// [`tick`](super::tick::tick) and the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub playfield: Playfield,
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub bullets: Vec<Bullet>,
    pub score: u64,
    /// Set on ship/asteroid contact, consumed at the start of the next tick
    pub dead: bool,
    /// Ticks since the process started (not reset on death)
    pub frame: u64,
    /// Events raised by the latest tick; cleared when the next one starts
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl World {
    /// Create a fresh world with one seed asteroid
    pub fn new<R: Rng + ?Sized>(playfield: Playfield, rng: &mut R) -> Self {
        let mut world = Self {
            playfield,
            ship: Ship::initial(playfield),
            asteroids: Vec::new(),
            bullets: Vec::new(),
            score: 0,
            dead: false,
            frame: 0,
            events: Vec::new(),
        };
        world.reset(rng);
        world.events.clear();
        world
    }

    /// Rebuild the world in place: score zeroed, ship at its initial pose,
    /// no bullets, and a single asteroid placed by the spawn rule.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.ship = Ship::initial(self.playfield);
        self.bullets.clear();
        self.asteroids.clear();
        self.asteroids
            .push(spawn_asteroid(&self.ship, self.playfield, rng));
        self.score = 0;
        self.dead = false;
        self.events.push(GameEvent::Reset);
    }

    /// Take the events raised by the latest tick
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

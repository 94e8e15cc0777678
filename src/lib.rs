//! Asteroid Console - A wireframe Asteroids game on a wraparound playfield
//!
//! Core modules:
//! - `sim`: Simulation step (movement, collisions, splitting, scoring)
//! - `renderer`: Wire model transforms and drawing onto a cell surface
//! - `platform`: Host engine (key state, frame pump, terminal output)
//! - `game`: Per-frame callback tying input, simulation and rendering together
//! - `settings`: Data-driven startup configuration

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use game::AsteroidGame;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default playfield dimensions (cells)
    pub const DEFAULT_WIDTH: u16 = 160;
    pub const DEFAULT_HEIGHT: u16 = 100;

    /// Largest elapsed time handed to a single frame (seconds).
    /// Together with the ship speed cap this keeps per-frame displacement
    /// under one playfield dimension.
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Ship turn rate (radians per second)
    pub const SHIP_TURN_RATE: f32 = 5.0;
    /// Ship thrust (units per second squared)
    pub const SHIP_THRUST: f32 = 20.0;
    /// Bullet muzzle speed added to the ship velocity
    pub const BULLET_SPEED: f32 = 20.0;

    /// Asteroid sizes (radius), halved on every split
    pub const ASTEROID_LARGE: u32 = 16;
    pub const ASTEROID_MEDIUM: u32 = 8;
    pub const ASTEROID_SMALL: u32 = 4;
    /// Asteroids at or below this size are destroyed without children
    pub const ASTEROID_SPLIT_MIN: u32 = 4;
    /// Asteroid spin (radians per second, rendering only)
    pub const ASTEROID_SPIN: f32 = 0.3;

    /// Spawn distance from the ship
    pub const SPAWN_DISTANCE_MIN: f32 = 16.0;
    pub const SPAWN_DISTANCE_MAX: f32 = 40.0;
    /// Spawn bearing offset from the ship heading (60° .. 300°)
    pub const SPAWN_ANGLE_MIN: f32 = 1.047;
    pub const SPAWN_ANGLE_MAX: f32 = 5.236;
    /// Spawn velocity range, per axis
    pub const SPAWN_SPEED: f32 = 10.0;

    /// Score awarded per asteroid hit
    pub const SCORE_ASTEROID: u64 = 100;
    /// Bonus when the field is cleared
    pub const SCORE_CLEAR_BONUS: u64 = 1000;
    /// Asteroids injected when the field is cleared
    pub const CLEAR_RESPAWN_COUNT: usize = 2;

    /// Asteroid silhouette
    pub const ASTEROID_VERTICES: usize = 20;
    pub const ASTEROID_JITTER_MIN: f32 = 0.8;
    pub const ASTEROID_JITTER_MAX: f32 = 1.2;

    /// Scale used when drawing the ship model
    pub const SHIP_DRAW_SCALE: f32 = 1.0;
}

/// Unit vector along a heading, where angle 0 points "up" (-y)
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.sin(), -angle.cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_zero_points_up() {
        let h = heading(0.0);
        assert!(h.x.abs() < 1e-6);
        assert!((h.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_heading_quarter_turn_points_right() {
        let h = heading(std::f32::consts::FRAC_PI_2);
        assert!((h.x - 1.0).abs() < 1e-6);
        assert!(h.y.abs() < 1e-6);
    }
}

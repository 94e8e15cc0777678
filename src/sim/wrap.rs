//! Toroidal playfield mapping
//!
//! The playfield is one bounded plane that is also the screen. Anything that
//! leaves one edge re-enters from the opposite edge.
//!
//! Wrapping adds or subtracts exactly one extent per axis. It is not a
//! modulo: callers keep per-frame displacement under one playfield dimension.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_FRAME_DT;

/// Size of the wraparound plane (world == screen)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Map a point back onto the plane
    #[inline]
    pub fn wrap(&self, point: Vec2) -> Vec2 {
        Vec2::new(wrap_axis(point.x, self.width), wrap_axis(point.y, self.height))
    }

    /// True when the point lies on a drawable cell
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0
            && point.x <= self.width - 1.0
            && point.y >= 0.0
            && point.y <= self.height - 1.0
    }

    /// Top speed that keeps a full-length frame under half the shorter
    /// extent, so a single wrap always brings a point back
    pub fn max_speed(&self) -> f32 {
        0.5 * self.width.min(self.height) / MAX_FRAME_DT
    }
}

/// Wrap a single coordinate into `[0, extent)`
#[inline]
pub fn wrap_axis(value: f32, extent: f32) -> f32 {
    if value < 0.0 {
        value + extent
    } else if value >= extent {
        value - extent
    } else {
        value
    }
}

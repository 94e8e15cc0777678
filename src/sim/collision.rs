//! Collision detection between bullets, asteroids and the ship
//!
//! Everything is a circle-vs-point test recomputed each frame. There is no
//! persistent pairing: a bullet and an asteroid interact only while they
//! overlap.

use glam::Vec2;

use super::state::{Asteroid, Bullet, Ship};
use crate::consts::SCORE_ASTEROID;

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    let d = a - b;
    (d.x * d.x + d.y * d.y).sqrt()
}

/// True when `point` lies strictly inside the circle at `center`
#[inline]
pub fn in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    distance(point, center) < radius
}

/// Does the ship overlap this asteroid?
#[inline]
pub fn ship_hits_asteroid(ship: &Ship, asteroid: &Asteroid) -> bool {
    in_circle(ship.pos, asteroid.pos, asteroid.radius())
}

/// Outcome of one bullets-vs-asteroids pass
#[derive(Debug, Clone, Default)]
pub struct HitReport {
    /// Parallel to the bullet list: bullet was used up
    pub bullet_hit: Vec<bool>,
    /// Parallel to the asteroid list: asteroid was destroyed
    pub asteroid_hit: Vec<bool>,
    /// Children queued by destroyed asteroids, in hit order
    pub children: Vec<Asteroid>,
    /// Sizes of destroyed asteroids, in hit order
    pub destroyed: Vec<u32>,
    /// Parallel to `destroyed`: child size when the asteroid split
    pub splits: Vec<Option<u32>>,
    /// Points earned by this pass
    pub points: u64,
}

impl HitReport {
    pub fn hits(&self) -> usize {
        self.destroyed.len()
    }
}

/// Test every bullet against every asteroid.
///
/// A bullet is spent on the first live asteroid it overlaps, and an asteroid
/// can only be destroyed once per pass. Nothing is removed here; callers use
/// the masks to prune.
pub fn resolve_bullet_hits(bullets: &[Bullet], asteroids: &[Asteroid]) -> HitReport {
    let mut report = HitReport {
        bullet_hit: vec![false; bullets.len()],
        asteroid_hit: vec![false; asteroids.len()],
        ..Default::default()
    };

    for (bi, bullet) in bullets.iter().enumerate() {
        for (ai, asteroid) in asteroids.iter().enumerate() {
            if report.asteroid_hit[ai] {
                continue;
            }
            if !in_circle(bullet.pos, asteroid.pos, asteroid.radius()) {
                continue;
            }

            let children = asteroid.split();
            report.splits.push(children.map(|[a, _]| a.size));
            if let Some(children) = children {
                report.children.extend(children);
            }
            report.points += SCORE_ASTEROID;
            report.destroyed.push(asteroid.size);
            report.bullet_hit[bi] = true;
            report.asteroid_hit[ai] = true;
            break;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bullet(x: f32, y: f32) -> Bullet {
        Bullet {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            angle: 0.0,
        }
    }

    fn rock(x: f32, y: f32, size: u32) -> Asteroid {
        Asteroid::new(Vec2::new(x, y), Vec2::new(1.0, 2.0), size)
    }

    #[test]
    fn test_in_circle_is_strict() {
        let c = Vec2::new(10.0, 10.0);
        assert!(in_circle(Vec2::new(10.0, 10.0), c, 16.0));
        assert!(in_circle(Vec2::new(25.9, 10.0), c, 16.0));
        assert!(!in_circle(Vec2::new(26.0, 10.0), c, 16.0));
        assert!(!in_circle(c, c, 0.0));
    }

    #[test]
    fn test_single_hit_splits_and_scores() {
        let report = resolve_bullet_hits(&[bullet(10.0, 10.0)], &[rock(10.0, 10.0, 16)]);
        assert_eq!(report.bullet_hit, vec![true]);
        assert_eq!(report.asteroid_hit, vec![true]);
        assert_eq!(report.points, 100);
        assert_eq!(report.children.len(), 2);
        assert!(report.children.iter().all(|c| c.size == 8));
        assert!(report.children.iter().all(|c| c.pos == Vec2::new(10.0, 10.0)));
        assert_eq!(report.splits, vec![Some(8)]);
    }

    #[test]
    fn test_small_asteroid_leaves_no_children() {
        let report = resolve_bullet_hits(&[bullet(0.0, 0.0)], &[rock(1.0, 1.0, 4)]);
        assert_eq!(report.hits(), 1);
        assert_eq!(report.points, 100);
        assert!(report.children.is_empty());
        assert_eq!(report.splits, vec![None]);
    }

    #[test]
    fn test_bullet_spent_on_first_overlap() {
        // Both rocks overlap the bullet; only the first is destroyed
        let report = resolve_bullet_hits(
            &[bullet(50.0, 50.0)],
            &[rock(52.0, 50.0, 8), rock(48.0, 50.0, 8)],
        );
        assert_eq!(report.asteroid_hit, vec![true, false]);
        assert_eq!(report.points, 100);
    }

    #[test]
    fn test_asteroid_destroyed_once() {
        // Two bullets inside the same rock: the second one flies on
        let report = resolve_bullet_hits(
            &[bullet(20.0, 20.0), bullet(21.0, 20.0)],
            &[rock(20.0, 20.0, 16)],
        );
        assert_eq!(report.bullet_hit, vec![true, false]);
        assert_eq!(report.points, 100);
        assert_eq!(report.children.len(), 2);
    }

    #[test]
    fn test_misses_leave_everything() {
        let report = resolve_bullet_hits(&[bullet(0.0, 0.0)], &[rock(100.0, 80.0, 16)]);
        assert_eq!(report.hits(), 0);
        assert_eq!(report.points, 0);
        assert_eq!(report.bullet_hit, vec![false]);
        assert_eq!(report.asteroid_hit, vec![false]);
    }

    #[test]
    fn test_ship_hits_asteroid() {
        let ship = Ship {
            pos: Vec2::new(5.0, 5.0),
            vel: Vec2::ZERO,
            angle: 0.0,
        };
        assert!(ship_hits_asteroid(&ship, &rock(5.0, 5.0, 16)));
        assert!(!ship_hits_asteroid(&ship, &rock(5.0, 30.0, 16)));
    }

    proptest! {
        #[test]
        fn prop_distance_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            r in 0.0f32..64.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(distance(a, b), distance(b, a));
            prop_assert_eq!(in_circle(a, b, r), in_circle(b, a, r));
        }

        #[test]
        fn prop_split_conservation(size in 5u32..64, dx in -10.0f32..10.0, dy in -10.0f32..10.0) {
            let parent = Asteroid::new(Vec2::new(3.0, 4.0), Vec2::new(dx, dy), size);
            let [a, b] = parent.split().unwrap();
            prop_assert_eq!(a.size, size / 2);
            prop_assert_eq!(b.size, size / 2);
            prop_assert_eq!(a.vel, Vec2::new(-dx, dy));
            prop_assert_eq!(b.vel, Vec2::new(dx, -dy));
        }
    }
}

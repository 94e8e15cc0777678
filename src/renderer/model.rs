//! Wireframe models and their transform into screen space

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use super::surface::{Cell, Color, Surface};
use crate::consts::{ASTEROID_JITTER_MAX, ASTEROID_JITTER_MIN, ASTEROID_VERTICES};

/// A closed polygon outline in model space
#[derive(Debug, Clone, PartialEq)]
pub struct WireModel {
    points: Vec<Vec2>,
}

impl WireModel {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Isoceles triangle with its nose along -y
    pub fn ship() -> Self {
        Self::new(vec![
            Vec2::new(0.0, -5.0),
            Vec2::new(-2.5, 2.5),
            Vec2::new(2.5, 2.5),
        ])
    }

    /// Unit circle with each vertex pushed in or out at random
    pub fn asteroid<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let points = (0..ASTEROID_VERTICES)
            .map(|i| {
                let a = TAU * i as f32 / ASTEROID_VERTICES as f32;
                let r = rng.random_range(ASTEROID_JITTER_MIN..=ASTEROID_JITTER_MAX);
                Vec2::new(r * a.sin(), r * a.cos())
            })
            .collect();
        Self::new(points)
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The silhouettes shared by every entity of a kind
#[derive(Debug, Clone)]
pub struct Models {
    pub ship: WireModel,
    /// One jagged outline for all asteroids, scaled by size
    pub asteroid: WireModel,
}

impl Models {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            ship: WireModel::ship(),
            asteroid: WireModel::asteroid(rng),
        }
    }
}

/// Rotate about the origin, then scale, then translate
pub fn transform(points: &[Vec2], center: Vec2, rotation: f32, scale: f32) -> Vec<Vec2> {
    let (sin, cos) = rotation.sin_cos();
    points
        .iter()
        .map(|p| {
            let rotated = Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos);
            rotated * scale + center
        })
        .collect()
}

/// Draw a model as N closed edges (last vertex joins the first).
///
/// Vertices are not wrapped; a model straddling an edge is clipped there
/// unless the surface itself wraps.
pub fn draw_model<S: Surface + ?Sized>(
    surface: &mut S,
    model: &WireModel,
    center: Vec2,
    rotation: f32,
    scale: f32,
    color: Color,
) {
    let screen = transform(model.points(), center, rotation, scale);
    let cell = Cell::solid(color);
    let n = screen.len();
    for i in 0..n {
        let a = screen[i];
        let b = screen[(i + 1) % n];
        surface.draw_line(a.x as i32, a.y as i32, b.x as i32, b.y as i32, cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Canvas;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Records every line instead of rasterising
    #[derive(Default)]
    struct LineLog {
        lines: Vec<(i32, i32, i32, i32)>,
    }

    impl Surface for LineLog {
        fn width(&self) -> i32 {
            1000
        }
        fn height(&self) -> i32 {
            1000
        }
        fn draw(&mut self, _x: i32, _y: i32, _cell: Cell) {}
        fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, _cell: Cell) {
            self.lines.push((x0, y0, x1, y1));
        }
    }

    #[test]
    fn test_identity_transform_is_translation() {
        let model = WireModel::ship();
        let center = Vec2::new(37.25, 12.5);
        let out = transform(model.points(), center, 0.0, 1.0);
        for (p, q) in model.points().iter().zip(&out) {
            assert_eq!(*q, *p + center);
        }
    }

    #[test]
    fn test_rotation_before_scale() {
        // (0,-5) rotated a quarter turn lands on (5,0), then doubles
        let out = transform(&[Vec2::new(0.0, -5.0)], Vec2::new(100.0, 100.0), std::f32::consts::FRAC_PI_2, 2.0);
        assert!((out[0].x - 110.0).abs() < 1e-4);
        assert!((out[0].y - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_ship_draws_three_closed_edges() {
        let mut log = LineLog::default();
        draw_model(&mut log, &WireModel::ship(), Vec2::new(50.0, 50.0), 0.0, 1.0, Color::White);
        assert_eq!(
            log.lines,
            vec![(50, 45, 47, 52), (47, 52, 52, 52), (52, 52, 50, 45)]
        );
    }

    #[test]
    fn test_asteroid_model_shape() {
        let mut rng = Pcg32::seed_from_u64(1234);
        let model = WireModel::asteroid(&mut rng);
        assert_eq!(model.len(), ASTEROID_VERTICES);
        for p in model.points() {
            let r = p.length();
            assert!(r >= ASTEROID_JITTER_MIN - 1e-4 && r <= ASTEROID_JITTER_MAX + 1e-4);
        }
        // First vertex sits on the +y axis
        assert!(model.points()[0].x.abs() < 1e-6);
    }

    #[test]
    fn test_asteroid_edges_count() {
        let mut rng = Pcg32::seed_from_u64(99);
        let models = Models::generate(&mut rng);
        let mut log = LineLog::default();
        draw_model(&mut log, &models.asteroid, Vec2::new(80.0, 50.0), 0.4, 16.0, Color::Yellow);
        assert_eq!(log.lines.len(), ASTEROID_VERTICES);
        // Closed loop: last edge ends where the first begins
        let first = log.lines[0];
        let last = log.lines[ASTEROID_VERTICES - 1];
        assert_eq!((last.2, last.3), (first.0, first.1));
    }

    #[test]
    fn test_model_near_edge_is_not_wrapped() {
        let mut canvas = Canvas::new(20, 20);
        draw_model(&mut canvas, &WireModel::ship(), Vec2::new(19.0, 10.0), 0.0, 1.0, Color::White);
        // Right half of the triangle falls off the canvas and is clipped
        assert!(canvas.inked().all(|(x, _)| x >= 16));
    }

    proptest! {
        #[test]
        fn prop_identity_transform_exact(
            px in -50.0f32..50.0, py in -50.0f32..50.0,
            cx in 0.0f32..160.0, cy in 0.0f32..100.0,
        ) {
            let p = Vec2::new(px, py);
            let c = Vec2::new(cx, cy);
            let out = transform(&[p], c, 0.0, 1.0);
            prop_assert_eq!(out[0], p + c);
        }
    }
}

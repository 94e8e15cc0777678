//! Draws a world onto a surface

use super::model::{Models, draw_model};
use super::surface::{Cell, Color, Surface, Wrapped};
use crate::consts::SHIP_DRAW_SCALE;
use crate::sim::World;

/// Rendering switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Wrap every cell of the ship and asteroid outlines, not just bullets.
    /// Off by default, so an outline crossing an edge is cut off there.
    pub wrap_models: bool,
}

/// Clear, then asteroids, ship, bullets and the score line
pub fn render<S: Surface + ?Sized>(
    world: &World,
    models: &Models,
    surface: &mut S,
    options: RenderOptions,
) {
    surface.clear();

    if options.wrap_models {
        draw_entities(world, models, &mut Wrapped::new(&mut *surface, world.playfield));
    } else {
        draw_entities(world, models, &mut *surface);
    }

    // Bullets go through the point primitive, which always wraps
    let mut points = Wrapped::new(&mut *surface, world.playfield);
    for bullet in &world.bullets {
        points.draw(
            bullet.pos.x as i32,
            bullet.pos.y as i32,
            Cell::solid(Color::White),
        );
    }

    surface.draw_text(2, 2, &format!("Score:{}", world.score), Color::White);
}

fn draw_entities<S: Surface + ?Sized>(world: &World, models: &Models, surface: &mut S) {
    for asteroid in &world.asteroids {
        draw_model(
            surface,
            &models.asteroid,
            asteroid.pos,
            asteroid.angle,
            asteroid.radius(),
            Color::Yellow,
        );
    }

    draw_model(
        surface,
        &models.ship,
        world.ship.pos,
        world.ship.angle,
        SHIP_DRAW_SCALE,
        Color::White,
    );
}

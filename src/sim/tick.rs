//! Per-frame simulation step
//!
//! Advances the world by one frame of elapsed time. Order matters and is
//! fixed: reset, ship control, fire, ship move, bullet move, bullet hits,
//! asteroid removal/injection, depletion refill, asteroid move + ship contact,
//! bullet pruning.

use rand::Rng;

use super::collision::{resolve_bullet_hits, ship_hits_asteroid};
use super::spawn::spawn_asteroid;
use super::state::{GameEvent, World, integrate};
use crate::consts::*;

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Turn-left key is held
    pub turn_left: bool,
    /// Turn-right key is held
    pub turn_right: bool,
    /// Thrust key is held
    pub thrust: bool,
    /// Fire key went down this frame (one bullet per press)
    pub fire: bool,
}

/// Advance the world by `dt` seconds
pub fn tick<R: Rng + ?Sized>(world: &mut World, input: &TickInput, dt: f32, rng: &mut R) {
    // Events only ever describe the latest tick
    world.events.clear();

    // A death flagged last frame rebuilds the world before anything moves
    if world.dead {
        log::info!("Ship lost at score {}, resetting", world.score);
        world.reset(rng);
    }

    world.frame += 1;

    steer_ship(world, input, dt);

    if input.fire {
        let bullet = world.ship.fire();
        world.bullets.push(bullet);
        world.events.push(GameEvent::BulletFired);
    }

    world.ship.pos = world
        .playfield
        .wrap(integrate(world.ship.pos, world.ship.vel, dt));

    for bullet in &mut world.bullets {
        bullet.pos = integrate(bullet.pos, bullet.vel, dt);
    }

    resolve_hits(world);

    if world.asteroids.is_empty() {
        refill_field(world, rng);
    }

    move_asteroids(world, dt);

    prune_bullets(world);
}

/// Turn and thrust
fn steer_ship(world: &mut World, input: &TickInput, dt: f32) {
    let max_speed = world.playfield.max_speed();
    let ship = &mut world.ship;
    if input.turn_left {
        ship.angle -= SHIP_TURN_RATE * dt;
    }
    if input.turn_right {
        ship.angle += SHIP_TURN_RATE * dt;
    }
    if input.thrust {
        ship.vel += ship.heading() * SHIP_THRUST * dt;
        ship.vel = ship.vel.clamp_length_max(max_speed);
    }
}

/// Bullets vs asteroids: score, drop spent bullets and destroyed asteroids,
/// then append the children.
fn resolve_hits(world: &mut World) {
    let report = resolve_bullet_hits(&world.bullets, &world.asteroids);
    if report.hits() == 0 {
        return;
    }

    world.score += report.points;

    for (&size, &child) in report.destroyed.iter().zip(&report.splits) {
        world.events.push(GameEvent::AsteroidDestroyed { size });
        if let Some(size) = child {
            world.events.push(GameEvent::AsteroidSplit { size });
        }
    }

    let mut spent = report.bullet_hit.iter();
    world.bullets.retain(|_| !spent.next().copied().unwrap_or(false));

    let mut destroyed = report.asteroid_hit.iter();
    world
        .asteroids
        .retain(|_| !destroyed.next().copied().unwrap_or(false));

    world.asteroids.extend(report.children);
}

/// Field cleared: bonus, then fresh asteroids around the ship
fn refill_field<R: Rng + ?Sized>(world: &mut World, rng: &mut R) {
    world.score += SCORE_CLEAR_BONUS;
    for _ in 0..CLEAR_RESPAWN_COUNT {
        let asteroid = spawn_asteroid(&world.ship, world.playfield, rng);
        world.asteroids.push(asteroid);
    }
    world.events.push(GameEvent::FieldCleared);
    log::info!("Field cleared, score {}", world.score);
}

/// Drift, spin and wrap every asteroid, flagging a ship contact.
/// The flag is acted on at the start of the next tick.
fn move_asteroids(world: &mut World, dt: f32) {
    let mut contact = false;
    for asteroid in &mut world.asteroids {
        asteroid.pos = world
            .playfield
            .wrap(integrate(asteroid.pos, asteroid.vel, dt));
        asteroid.angle += ASTEROID_SPIN * dt;
        contact |= ship_hits_asteroid(&world.ship, asteroid);
    }

    if contact && !world.dead {
        world.dead = true;
        world.events.push(GameEvent::ShipDestroyed);
        log::debug!("Ship hit at {:?}", world.ship.pos);
    }
}

/// Drop bullets that have left the visible cells
pub fn prune_bullets(world: &mut World) {
    let playfield = world.playfield;
    world.bullets.retain(|b| playfield.contains(b.pos));
}

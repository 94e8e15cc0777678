//! The game as seen by a host: one callback per frame
//!
//! Owns the world, the wire models, the RNG and the render switches. The
//! world is built in `on_init`, once the host has fixed the playfield size.

use std::fs;
use std::path::Path;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::error::{Error, Result};
use crate::platform::{FrameHandler, Key, KeyState};
use crate::renderer::{Models, RenderOptions, Surface, render};
use crate::sim::{GameEvent, Playfield, TickInput, World, tick};

/// Asteroids bound to a host through [`FrameHandler`]
pub struct AsteroidGame<R: Rng = Pcg32> {
    world: Option<World>,
    models: Models,
    rng: R,
    options: RenderOptions,
}

impl<R: Rng> AsteroidGame<R> {
    /// Models are generated immediately; the world waits for `on_init`
    pub fn new(mut rng: R, options: RenderOptions) -> Self {
        let models = Models::generate(&mut rng);
        Self {
            world: None,
            models,
            rng,
            options,
        }
    }

    /// The world, once the host has initialised the game
    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    pub fn world_mut(&mut self) -> Option<&mut World> {
        self.world.as_mut()
    }

    /// Write the current world as pretty JSON
    pub fn dump_world(&self, path: &Path) -> Result<()> {
        let Some(world) = self.world.as_ref() else {
            log::warn!("No world to dump, the game never started");
            return Ok(());
        };
        let json = serde_json::to_string_pretty(world).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json)?;
        log::info!("World at frame {} written to {}", world.frame, path.display());
        Ok(())
    }
}

/// Held keys steer and thrust; fire only on the frame the key goes down
pub fn input_from_keys(keys: &KeyState) -> TickInput {
    TickInput {
        turn_left: keys.held(Key::TurnLeft),
        turn_right: keys.held(Key::TurnRight),
        thrust: keys.held(Key::Thrust),
        fire: keys.pressed(Key::Fire),
    }
}

fn log_event(event: GameEvent, frame: u64) {
    match event {
        GameEvent::AsteroidDestroyed { size } => {
            log::debug!("Frame {frame}: asteroid of size {size} destroyed")
        }
        GameEvent::AsteroidSplit { size } => {
            log::debug!("Frame {frame}: asteroid of size {size} split")
        }
        other => log::debug!("Frame {frame}: {other:?}"),
    }
}

impl<R: Rng> FrameHandler for AsteroidGame<R> {
    fn on_init(&mut self, playfield: Playfield) -> bool {
        if playfield.width < 1.0 || playfield.height < 1.0 {
            log::error!(
                "Playfield {}x{} is too small to play on",
                playfield.width,
                playfield.height
            );
            return false;
        }

        let world = World::new(playfield, &mut self.rng);
        log::info!(
            "Starting on a {}x{} playfield, {} asteroid(s), wrapped models: {}",
            playfield.width,
            playfield.height,
            world.asteroids.len(),
            self.options.wrap_models
        );
        self.world = Some(world);
        true
    }

    fn on_frame(&mut self, dt: f32, keys: &KeyState, surface: &mut dyn Surface) -> bool {
        let Some(world) = self.world.as_mut() else {
            log::error!("Frame requested before initialisation");
            return false;
        };

        tick(world, &input_from_keys(keys), dt, &mut self.rng);

        let frame = world.frame;
        for event in world.drain_events() {
            log_event(event, frame);
        }

        render(world, &self.models, surface, self.options);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Canvas;
    use rand::SeedableRng;
    use std::time::Instant;

    fn game() -> AsteroidGame {
        AsteroidGame::new(Pcg32::seed_from_u64(5), RenderOptions::default())
    }

    #[test]
    fn test_init_rejects_empty_playfield() {
        let mut g = game();
        assert!(!g.on_init(Playfield::new(0.0, 100.0)));
        assert!(!g.on_init(Playfield::new(160.0, 0.0)));
        assert!(g.world().is_none());
    }

    #[test]
    fn test_init_builds_world() {
        let mut g = game();
        assert!(g.on_init(Playfield::new(160.0, 100.0)));
        let world = g.world().unwrap();
        assert_eq!(world.asteroids.len(), 1);
        assert_eq!(world.score, 0);
        assert!(world.events.is_empty());
    }

    #[test]
    fn test_frame_before_init_stops_host() {
        let mut g = game();
        let mut canvas = Canvas::new(160, 100);
        assert!(!g.on_frame(0.016, &KeyState::new(), &mut canvas));
    }

    #[test]
    fn test_key_mapping() {
        let t = Instant::now();
        let mut keys = KeyState::new();
        keys.press(Key::TurnLeft, t);
        keys.press(Key::Fire, t);
        let input = input_from_keys(&keys);
        assert!(input.turn_left && input.fire);
        assert!(!input.turn_right && !input.thrust);

        // Fire is edge triggered, steering is level triggered
        keys.end_frame(t);
        let input = input_from_keys(&keys);
        assert!(input.turn_left);
        assert!(!input.fire);
    }

    #[test]
    fn test_frame_drains_events_and_renders() {
        let mut g = game();
        g.on_init(Playfield::new(160.0, 100.0));
        let mut keys = KeyState::new();
        keys.press(Key::Fire, Instant::now());
        let mut canvas = Canvas::new(160, 100);

        assert!(g.on_frame(0.016, &keys, &mut canvas));

        let world = g.world().unwrap();
        assert!(world.events.is_empty());
        assert_eq!(world.frame, 1);
        assert!(canvas.row_text(2).contains("Score:"));
    }

    #[test]
    fn test_dump_world_writes_snapshot() {
        let mut g = game();
        g.on_init(Playfield::new(160.0, 100.0));
        let mut canvas = Canvas::new(160, 100);
        g.on_frame(0.016, &KeyState::new(), &mut canvas);
        g.world_mut().unwrap().score = 300;

        let path = std::env::temp_dir().join(format!(
            "asteroid-console-world-{}.json",
            std::process::id()
        ));
        g.dump_world(&path).unwrap();
        let json = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);

        let back: World = serde_json::from_str(&json).unwrap();
        assert_eq!(back.score, 300);
        assert_eq!(back.frame, 1);
        assert_eq!(back.asteroids.len(), g.world().unwrap().asteroids.len());
        assert_eq!(back.playfield, Playfield::new(160.0, 100.0));
    }

    #[test]
    fn test_dump_world_before_init_writes_nothing() {
        let path = std::env::temp_dir().join(format!(
            "asteroid-console-no-world-{}.json",
            std::process::id()
        ));
        game().dump_world(&path).unwrap();
        assert!(!path.exists());
    }
}

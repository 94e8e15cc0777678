//! Asteroid Console entry point
//!
//! Parses the command line, resolves settings and runs the terminal host.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use asteroid_console::platform::TerminalHost;
use asteroid_console::renderer::RenderOptions;
use asteroid_console::{AsteroidGame, Result, Settings};

#[derive(Parser, Debug)]
#[command(name = "asteroid-console")]
#[command(about = "Wireframe Asteroids on a wraparound playfield, drawn in the terminal")]
struct Cli {
    /// JSON settings file; command-line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Playfield width in cells
    #[arg(long)]
    width: Option<u16>,
    /// Playfield height in cells
    #[arg(long)]
    height: Option<u16>,
    /// Target frames per second
    #[arg(long)]
    fps: Option<u32>,
    /// RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
    /// Wrap ship and asteroid outlines across the edges
    #[arg(long)]
    wrap_models: bool,
    /// Print the resolved settings as JSON and exit
    #[arg(long)]
    print_config: bool,
    /// Write the resolved settings to this file before starting
    #[arg(long)]
    save_config: Option<PathBuf>,
    /// Write the final world state as JSON to this file on exit
    #[arg(long)]
    dump_world: Option<PathBuf>,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(fps) = self.fps {
            settings.target_fps = fps;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        settings.wrap_models |= self.wrap_models;
        settings.validate()?;
        Ok(settings)
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = cli.settings()?;
    if let Some(path) = &cli.save_config {
        settings.save(path)?;
    }
    if cli.print_config {
        println!("{}", settings.to_json()?);
        return Ok(());
    }

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Seed {seed}");

    let options = RenderOptions {
        wrap_models: settings.wrap_models,
    };
    let mut game = AsteroidGame::new(Pcg32::seed_from_u64(seed), options);
    let mut host = TerminalHost::new(&settings);
    let outcome = host.run(&mut game);

    if let Some(path) = &cli.dump_world {
        game.dump_world(path)?;
    }
    outcome?;

    if let Some(world) = game.world() {
        log::info!("Finished on frame {} with score {}", world.frame, world.score);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("asteroid-console: {e}");
            ExitCode::FAILURE
        }
    }
}

//! Boss Rush headless frame driver
//!
//! Runs the simulation at the nominal frame interval with a scripted input
//! sequence. Useful for soak runs and for capturing reproducible snapshots.

use std::path::PathBuf;

use clap::Parser;

use boss_rush::Settings;
use boss_rush::consts::FRAME_INTERVAL_MS;
use boss_rush::renderer::draw_list;
use boss_rush::sim::{Control, GamePhase, GameWorld, Intents, WorldEvent, advance};

#[derive(Debug, Parser)]
#[command(version, about = "Headless boss fight simulation", long_about = None)]
struct Cli {
    /// Number of frames to simulate
    #[arg(short = 'f', long = "frames", value_name = "FRAMES", default_value_t = 600)]
    frames: u64,

    /// Settings JSON file
    #[arg(short = 'c', long = "config", value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the pattern RNG seed
    #[arg(short = 's', long = "seed", value_name = "SEED")]
    seed: Option<u64>,

    /// Print the final world as JSON
    #[arg(long = "dump")]
    dump: bool,
}

/// Scripted pilot: weave left and right in one-second stretches, always firing
fn scripted_intents(frame: u64) -> Intents {
    let leftward = (frame / 60) % 2 == 0;
    Intents {
        left: leftward,
        right: !leftward,
        fire: true,
        ..Default::default()
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Could not load settings: {}", e);
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };
    if let Some(seed) = cli.seed {
        settings.seed = seed;
    }

    log::info!("Boss Rush starting ({} frames, seed {})", cli.frames, settings.seed);
    let mut world = GameWorld::new(settings);

    let mut volleys = 0u64;
    let mut shots = 0u64;
    let mut peak_bullets = 0usize;

    for frame in 0..cli.frames {
        let now = frame * FRAME_INTERVAL_MS;
        if advance(&mut world, &scripted_intents(frame), now) == Control::Exit {
            break;
        }

        for event in &world.events {
            match event {
                WorldEvent::VolleyFired { .. } => volleys += 1,
                WorldEvent::PlayerFired { .. } => shots += 1,
                _ => {}
            }
        }
        peak_bullets = peak_bullets.max(world.bullet_count());

        if world.phase != GamePhase::Playing {
            break;
        }
    }

    log::info!(
        "Finished at frame {} (t={}ms): phase {:?}, health {}, boss health {}",
        world.frame,
        world.clock,
        world.phase,
        world.health,
        world.boss_health
    );
    log::info!(
        "{} shots, {} volleys, peak {} bullets, {} draw instances",
        shots,
        volleys,
        peak_bullets,
        draw_list(&world).len()
    );

    if cli.dump {
        match world.snapshot() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                log::error!("Could not serialize world: {}", e);
                std::process::exit(1);
            }
        }
    }
}

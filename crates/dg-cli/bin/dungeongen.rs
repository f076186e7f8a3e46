//! Dungeon layout generator
//!
//! Generates one dungeon and prints it to stdout.

use std::path::PathBuf;

use clap::Parser;
use log::info;

use dg_cli::{View, load_config, render};
use dg_core::{DungeonRng, GeneratorConfig, generate_with_rng};

/// Generate a room-and-maze dungeon layout
#[derive(Parser, Debug)]
#[command(name = "dungeongen")]
#[command(author, version, about = "Generate a room-and-maze dungeon", long_about = None)]
struct Args {
    /// JSON configuration file; flags override its values
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Grid width (odd)
    #[arg(short = 'W', long = "width")]
    width: Option<usize>,

    /// Grid height (odd)
    #[arg(short = 'H', long = "height")]
    height: Option<usize>,

    /// Number of rooms to attempt
    #[arg(short = 'r', long = "rooms")]
    rooms: Option<usize>,

    /// Positions tried per room
    #[arg(short = 't', long = "tries")]
    tries_per_room: Option<usize>,

    /// Widen the range of room sizes
    #[arg(long = "room-extra-size")]
    room_extra_size: Option<u32>,

    /// Cells of buffer kept between rooms
    #[arg(long = "room-separation")]
    room_separation: Option<usize>,

    /// Chance (0-100) that corridors turn
    #[arg(short = 'w', long = "winding")]
    winding_percent: Option<u32>,

    /// Inverse chance of extra loop connectors
    #[arg(short = 'x', long = "extra-connector-chance")]
    extra_connector_chance: Option<u32>,

    /// Minimum distance between opened connectors
    #[arg(long = "connector-spacing")]
    min_connector_spacing: Option<u32>,

    /// Outline open space with wall tiles
    #[arg(long = "walls")]
    outline_walls: bool,

    /// RNG seed (random if omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// What to print for each cell
    #[arg(long = "view", value_enum, default_value_t = View::Tiles)]
    view: View,

    /// Verbose logging (repeat for more)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

impl Args {
    /// Layer flags over the file config (or defaults)
    fn apply(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(rooms) = self.rooms {
            config.num_room_tries = rooms;
        }
        if let Some(tries) = self.tries_per_room {
            config.tries_per_room = tries;
        }
        if let Some(extra) = self.room_extra_size {
            config.room_extra_size = extra;
        }
        if let Some(separation) = self.room_separation {
            config.room_separation = separation;
        }
        if let Some(winding) = self.winding_percent {
            config.winding_percent = winding;
        }
        if let Some(chance) = self.extra_connector_chance {
            config.extra_connector_chance = chance;
        }
        if let Some(spacing) = self.min_connector_spacing {
            config.min_connector_spacing = spacing;
        }
        if self.outline_walls {
            config.outline_walls = true;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config
    }

    fn log_level(&self) -> simplelog::LevelFilter {
        use simplelog::LevelFilter;
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    simplelog::TermLogger::init(
        args.log_level(),
        simplelog::ConfigBuilder::new()
            .set_target_level(simplelog::LevelFilter::Off)
            .set_location_level(simplelog::LevelFilter::Off)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let base = match &args.config {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };
    let mut config = args.apply(base);

    // Without an explicit seed anywhere, pick one and report it so the run
    // can be reproduced
    let mut rng = if args.seed.is_none() && args.config.is_none() {
        DungeonRng::from_entropy()
    } else {
        DungeonRng::new(config.seed)
    };
    config.seed = rng.seed();
    info!("seed {}", config.seed);

    let dungeon = generate_with_rng(&config, &mut rng)?;
    let stats = dungeon.stats();
    info!(
        "{} rooms, {} maze runs, {} connectors ({} extra), {} doors, {} dead-end cells filled",
        stats.rooms_placed,
        stats.maze_runs,
        stats.junctions,
        stats.extra_junctions,
        stats.doors,
        stats.dead_ends_filled
    );

    print!("{}", render(dungeon.grid(), args.view));
    Ok(())
}

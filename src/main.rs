use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::{SeedableRng, rngs::StdRng};

use sparse_life::{
    Board, Placement, Rule, RunConfig, Simulation,
    domain::presets,
    rendering::{self, FrameOptions},
};

/// Conway's Game of Life on an unbounded plane, drawn in the terminal
#[derive(Debug, Parser)]
#[command(name = "sparse_life", version)]
struct Cli {
    /// Vertical size of the view; the view spans rows -N..2N and columns -4N..4N
    #[arg(long, default_value_t = 7)]
    area_size: u32,

    /// Milliseconds between generations
    #[arg(long, default_value_t = 250)]
    delay_ms: u64,

    /// Stop after this many generations (runs until interrupted otherwise)
    #[arg(long)]
    generations: Option<u64>,

    /// Pattern to place, as NAME or NAME@X,Y (repeatable). Defaults to the demo scene.
    #[arg(long = "pattern", value_name = "NAME[@X,Y]")]
    patterns: Vec<String>,

    /// Number of random cells to scatter around the origin, on top of the
    /// patterns (the demo run scatters 100; pass 0 for the patterns alone)
    #[arg(long, default_value_t = 100)]
    random: usize,

    /// Random cells land in [-R, R) on both axes
    #[arg(long, default_value_t = 20)]
    random_radius: u32,

    /// Seed for the random scatter
    #[arg(long)]
    seed: Option<u64>,

    /// Rule in B/S notation or by name (conway, highlife, seeds, daynight)
    #[arg(long, default_value = "B3/S23")]
    rule: Rule,

    /// Print the coordinates of every live cell after each frame
    #[arg(long)]
    coordinates: bool,

    /// Print per-generation statistics
    #[arg(long)]
    stats: bool,

    /// Glyph for dead cells
    #[arg(long, default_value_t = ' ')]
    dead_glyph: char,

    /// Keep the live cells centred in view
    #[arg(long)]
    follow: bool,

    /// List the available patterns and exit
    #[arg(long)]
    list_patterns: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let env = env_logger::Env::default().default_filter_or(&cli.log_level);
    env_logger::Builder::from_env(env).init();

    if cli.list_patterns {
        for pattern in presets::all_patterns() {
            println!("{:<12} {}", pattern.name, pattern.description);
        }
        return Ok(());
    }

    let config = RunConfig::new(cli.area_size, Duration::from_millis(cli.delay_ms))
        .context("invalid run configuration")?
        .with_generations(cli.generations)
        .with_rule(cli.rule)
        .with_coordinates(cli.coordinates)
        .with_stats(cli.stats)
        .with_follow(cli.follow)
        .with_dead_glyph(cli.dead_glyph);

    let placements = if cli.patterns.is_empty() {
        presets::demo_scene()
    } else {
        cli.patterns
            .iter()
            .map(|p| Placement::parse(p))
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("invalid --pattern")?
    };

    let mut sim = Simulation::new(Board::with_rule(config.rule), config.tick_delay);
    sim.place_all(&placements);
    if cli.random > 0 {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        sim.randomize(&mut rng, cli.random, cli.random_radius);
    }

    run(&mut sim, &config)
}

/// Draw, wait, advance, until the generation limit (if any) is reached
fn run(sim: &mut Simulation, config: &RunConfig) -> Result<()> {
    let mut viewport = config.viewport()?;
    let options = FrameOptions {
        dead_glyph: config.dead_glyph,
        show_coordinates: config.show_coordinates,
        show_stats: config.show_stats,
    };
    info!(
        "starting: rule {}, {} live cells, delay {:?}",
        config.rule,
        sim.board.live_count(),
        config.tick_delay
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    // Clear once; later frames only move the cursor home
    write!(out, "\x1b[2J")?;

    let mut last = Instant::now();
    loop {
        if config.follow {
            if let Some(bounds) = sim.board.bounds() {
                viewport = viewport.centred_on(bounds);
            }
        }
        rendering::draw_frame(&mut out, sim, &viewport, options).context("failed to draw frame")?;

        if config.generations.is_some_and(|limit| sim.generation >= limit) {
            info!("reached generation {}", sim.generation);
            return Ok(());
        }

        thread::sleep(config.tick_delay);
        let now = Instant::now();
        sim.tick(now - last);
        last = now;
    }
}

use std::time::{Duration, Instant};

use log::{debug, info};
use rand::Rng;

use crate::domain::{Board, GenerationStats, Placement};

/// Simulation drives a board through generations.
/// This is the application layer around the domain engine: it keeps the
/// generation counter, the pacing timer and the last step's numbers.
pub struct Simulation {
    pub board: Board,
    pub generation: u64,
    pub tick_delay: Duration,
    pub update_timer: Duration,
    pub last_stats: GenerationStats,
    pub last_evolution_time_ms: f32,
}

impl Simulation {
    pub fn new(board: Board, tick_delay: Duration) -> Self {
        Self {
            board,
            generation: 0,
            tick_delay,
            update_timer: Duration::ZERO,
            last_stats: GenerationStats::default(),
            last_evolution_time_ms: 0.0,
        }
    }

    /// Stamp every placement onto the board
    pub fn place_all(&mut self, placements: &[Placement]) {
        for placement in placements {
            placement.apply(&mut self.board);
        }
        info!(
            "placed {} pattern(s), {} live cells",
            placements.len(),
            self.board.live_count()
        );
    }

    /// Add up to `count` random cells in the square `[-radius, radius)`.
    /// Repeats collapse onto the same cell.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize, radius: u32) {
        if radius == 0 {
            return;
        }
        let r = i32::try_from(radius).unwrap_or(i32::MAX);
        for _ in 0..count {
            let x = rng.random_range(-r..r);
            let y = rng.random_range(-r..r);
            self.board.add_cell(x, y);
        }
        debug!("scattered {} random cells within {}", count, radius);
    }

    /// Advance one generation right now
    pub fn step(&mut self) -> GenerationStats {
        let start = Instant::now();
        self.last_stats = self.board.advance();
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        self.last_stats
    }

    /// Feed elapsed wall time; advances once the tick delay has built up.
    /// At most one generation per call.
    pub fn tick(&mut self, delta: Duration) -> Option<GenerationStats> {
        self.update_timer += delta;
        if self.update_timer < self.tick_delay {
            return None;
        }
        self.update_timer = Duration::ZERO;
        Some(self.step())
    }

    /// Advance `generations` steps back to back
    pub fn run_for(&mut self, generations: u64) -> GenerationStats {
        for _ in 0..generations {
            self.step();
        }
        self.last_stats
    }

    /// Drop every cell and start counting from zero again
    pub fn reset(&mut self) {
        self.board.clear();
        self.generation = 0;
        self.update_timer = Duration::ZERO;
        self.last_stats = GenerationStats::default();
    }
}

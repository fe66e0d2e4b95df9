//! Sparse Game of Life board on an unbounded integer plane.
//!
//! Only live cells are stored, in a hash set, so membership tests stay O(1)
//! no matter how far apart the cells are. A generation step touches the live
//! cells and their immediate neighbors and nothing else.

use std::collections::HashSet;

use log::debug;

use super::{Cell, Rule};

/// Outcome of one `Board::advance` call
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct GenerationStats {
    /// Cells that came alive this step
    pub births: usize,
    /// Cells that died this step
    pub deaths: usize,
    /// Distinct dead cells whose neighbor count was taken for a birth decision
    pub candidates_evaluated: usize,
    /// Live cells after the step
    pub population: usize,
}

/// Inclusive rectangle on the plane
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    pub fn width(&self) -> u64 {
        (i64::from(self.max_x) - i64::from(self.min_x) + 1) as u64
    }

    pub fn height(&self) -> u64 {
        (i64::from(self.max_y) - i64::from(self.min_y) + 1) as u64
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (self.min_x..=self.max_x).contains(&cell.x) && (self.min_y..=self.max_y).contains(&cell.y)
    }
}

/// Board owns the set of live cells and advances it one generation at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    live: HashSet<Cell>,
    rule: Rule,
}

impl Board {
    /// Empty board under Conway's rule
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty board under the given rule
    pub fn with_rule(rule: Rule) -> Self {
        Self {
            live: HashSet::new(),
            rule,
        }
    }

    /// Board seeded with an initial live set
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        cells.into_iter().map(Into::<Cell>::into).collect()
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn set_rule(&mut self, rule: Rule) {
        self.rule = rule;
    }

    /// Bring a cell to life. Adding a live cell is a no-op.
    pub fn add_cell(&mut self, x: i32, y: i32) {
        self.live.insert(Cell::new(x, y));
    }

    /// Kill a cell. Removing a dead cell is a no-op.
    pub fn remove_cell(&mut self, x: i32, y: i32) {
        self.live.remove(&Cell::new(x, y));
    }

    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.live.contains(&Cell::new(x, y))
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Live cells among the eight around (x, y). (x, y) itself may be dead.
    pub fn count_neighbors(&self, x: i32, y: i32) -> u8 {
        Cell::new(x, y)
            .neighbors()
            .filter(|n| self.live.contains(n))
            .count() as u8
    }

    /// Live cells in no particular order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.live.iter().copied()
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.live.clear();
    }

    /// Smallest rectangle holding every live cell, `None` when empty
    pub fn bounds(&self) -> Option<Bounds> {
        let mut cells = self.cells();
        let first = cells.next()?;
        let start = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(cells.fold(start, |b, c| Bounds {
            min_x: b.min_x.min(c.x),
            min_y: b.min_y.min(c.y),
            max_x: b.max_x.max(c.x),
            max_y: b.max_y.max(c.y),
        }))
    }

    /// Compute the next generation and replace the live set with it.
    ///
    /// Every fate is decided against the current generation: deaths and
    /// births are collected first and only applied once the scan is done.
    /// Birth candidates are the dead neighbors of live cells, each counted
    /// once per call.
    pub fn advance(&mut self) -> GenerationStats {
        let mut evaluated: HashSet<Cell> = HashSet::new();
        let mut dying: Vec<Cell> = Vec::new();
        let mut born: Vec<Cell> = Vec::new();

        for &cell in &self.live {
            if !self.rule.survives(self.count_neighbors(cell.x, cell.y)) {
                dying.push(cell);
            }

            for candidate in cell.neighbors() {
                if self.live.contains(&candidate) || !evaluated.insert(candidate) {
                    continue;
                }
                if self.rule.is_born(self.count_neighbors(candidate.x, candidate.y)) {
                    born.push(candidate);
                }
            }
        }

        for cell in &dying {
            self.live.remove(cell);
        }
        self.live.extend(born.iter().copied());

        let stats = GenerationStats {
            births: born.len(),
            deaths: dying.len(),
            candidates_evaluated: evaluated.len(),
            population: self.live.len(),
        };
        debug!(
            "advance: +{} -{} ({} candidates), population {}",
            stats.births, stats.deaths, stats.candidates_evaluated, stats.population
        );
        stats
    }
}

impl FromIterator<Cell> for Board {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        Self {
            live: iter.into_iter().collect(),
            rule: Rule::default(),
        }
    }
}

impl Extend<Cell> for Board {
    fn extend<T: IntoIterator<Item = Cell>>(&mut self, iter: T) {
        self.live.extend(iter);
    }
}

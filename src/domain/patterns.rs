use log::trace;

use super::{Board, Cell};
use crate::error::PatternError;

/// A named shape that can be stamped onto a board.
/// Drawn as text rows: `O` is alive, anything else is dead.
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    rows: &'static [&'static str],
}

impl Pattern {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        rows: &'static [&'static str],
    ) -> Self {
        Self { name, description, rows }
    }

    /// Live cells relative to the top-left corner of the drawing
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'O')
                .map(move |(x, _)| Cell::new(x as i32, y as i32))
        })
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Add the pattern's cells with its top-left corner at (x, y)
    pub fn place_on(&self, board: &mut Board, x: i32, y: i32) {
        trace!("placing {} at ({}, {})", self.name, x, y);
        for cell in self.cells() {
            let at = cell.offset(x, y);
            board.add_cell(at.x, at.y);
        }
    }
}

/// A pattern together with where to put it
#[derive(Clone, Debug)]
pub struct Placement {
    pub pattern: Pattern,
    pub x: i32,
    pub y: i32,
}

impl Placement {
    pub fn apply(&self, board: &mut Board) {
        self.pattern.place_on(board, self.x, self.y);
    }

    /// Read `name` or `name@x,y`. Without a position the pattern is centred
    /// on the origin.
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let (name, at) = match text.split_once('@') {
            Some((name, at)) => (name, Some(at)),
            None => (text, None),
        };
        let pattern = presets::by_name(name).ok_or_else(|| PatternError::Unknown(name.to_owned()))?;

        let (x, y) = match at {
            Some(at) => {
                let bad = || PatternError::BadPlacement(text.to_owned());
                let (x, y) = at.split_once(',').ok_or_else(bad)?;
                let x = x.trim().parse().map_err(|_| bad())?;
                let y = y.trim().parse().map_err(|_| bad())?;
                (x, y)
            }
            None => (
                -(pattern.width() as i32 / 2),
                -(pattern.height() as i32 / 2),
            ),
        };
        Ok(Self { pattern, x, y })
    }
}

/// Classic Game of Life patterns
// One drawing row per line
#[rustfmt::skip]
pub mod presets {
    use super::*;

    pub const BLOCK: Pattern = Pattern::new(
        "block",
        "Still life",
        &[
            "OO",
            "OO",
        ],
    );

    pub const TUB: Pattern = Pattern::new(
        "tub",
        "Still life",
        &[
            ".O.",
            "O.O",
            ".O.",
        ],
    );

    pub const BLINKER: Pattern = Pattern::new(
        "blinker",
        "Oscillator (period 2)",
        &[
            "OOO",
        ],
    );

    /// Vertical toad
    pub const TOAD: Pattern = Pattern::new(
        "toad",
        "Oscillator (period 2)",
        &[
            "O.",
            "OO",
            "OO",
            ".O",
        ],
    );

    pub const BEACON: Pattern = Pattern::new(
        "beacon",
        "Oscillator (period 2)",
        &[
            "OO..",
            "O...",
            "...O",
            "..OO",
        ],
    );

    pub const PULSAR: Pattern = Pattern::new(
        "pulsar",
        "Oscillator (period 3)",
        &[
            "..OOO...OOO..",
            ".............",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            "..OOO...OOO..",
            ".............",
            "..OOO...OOO..",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            ".............",
            "..OOO...OOO..",
        ],
    );

    pub const GLIDER: Pattern = Pattern::new(
        "glider",
        "Spaceship, moves diagonally (period 4)",
        &[
            ".O.",
            "..O",
            "OOO",
        ],
    );

    pub const LWSS: Pattern = Pattern::new(
        "lwss",
        "Lightweight spaceship (period 4)",
        &[
            ".O..O",
            "O....",
            "O...O",
            "OOOO.",
        ],
    );

    pub const R_PENTOMINO: Pattern = Pattern::new(
        "r-pentomino",
        "Methuselah, settles at gen 1103",
        &[
            ".OO",
            "OO.",
            ".O.",
        ],
    );

    pub const ACORN: Pattern = Pattern::new(
        "acorn",
        "Methuselah, settles at gen 5206",
        &[
            ".O.....",
            "...O...",
            "OO..OOO",
        ],
    );

    pub const GLIDER_GUN: Pattern = Pattern::new(
        "gosper-gun",
        "Emits a glider every 30 generations",
        &[
            "........................O...........",
            "......................O.O...........",
            "............OO......OO............OO",
            "...........O...O....OO............OO",
            "OO........O.....O...OO..............",
            "OO........O...O.OO....O.O...........",
            "..........O.....O.......O...........",
            "...........O...O....................",
            "............OO......................",
        ],
    );

    pub fn all_patterns() -> [Pattern; 11] {
        [
            BLOCK,
            TUB,
            BLINKER,
            TOAD,
            BEACON,
            PULSAR,
            GLIDER,
            LWSS,
            R_PENTOMINO,
            ACORN,
            GLIDER_GUN,
        ]
    }

    pub fn by_name(name: &str) -> Option<Pattern> {
        let name = name.trim().to_ascii_lowercase();
        all_patterns().into_iter().find(|p| p.name == name)
    }

    /// The opening scene of the console demo: a toad, a tub, a glider and
    /// two blinkers spread around the origin.
    pub fn demo_scene() -> Vec<Placement> {
        // Same glider as GLIDER, drawn in another phase
        const DEMO_GLIDER: Pattern = Pattern::new(
            "glider",
            "Spaceship, moves diagonally (period 4)",
            &[
                "..O",
                "O.O",
                ".OO",
            ],
        );
        const VERTICAL_BLINKER: Pattern = Pattern::new(
            "blinker",
            "Oscillator (period 2)",
            &[
                "O",
                "O",
                "O",
            ],
        );

        [
            (TOAD, 1, 1),
            (TUB, -6, 0),
            (DEMO_GLIDER, -20, -5),
            (BLINKER, 10, 0),
            (VERTICAL_BLINKER, -10, 5),
        ]
        .into_iter()
        .map(|(pattern, x, y)| Placement { pattern, x, y })
        .collect()
    }
}

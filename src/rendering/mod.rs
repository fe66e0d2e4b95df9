//! Console rendering.
//!
//! Everything here reads the board through its public queries
//! (`is_alive`, `live_count`, `cells`) and never touches its storage.

use std::io::{self, Write};

use crate::application::{Simulation, Viewport};
use crate::domain::{Board, GenerationStats};

pub const ALIVE_GLYPH: char = 'O';

/// Moves the cursor to the top-left corner so the next frame overwrites the last
pub const CURSOR_HOME: &str = "\x1b[H";

/// Format large numbers with K/M/B suffixes
pub fn format_number(n: usize) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Fixed-width population line. The zero padding keeps every frame the
/// same length so a redraw fully covers the previous one.
pub fn population_line(board: &Board) -> String {
    format!("Cells on board: {:010}", board.live_count())
}

/// Draw the viewport as text, one line per row
pub fn render_viewport(board: &Board, viewport: &Viewport, dead_glyph: char) -> String {
    let (width, height) = viewport.dimensions();
    let mut out = String::with_capacity((width as usize + 1) * height as usize);
    for row in viewport.rows() {
        out.extend(row.map(|c| {
            if board.is_alive(c.x, c.y) {
                ALIVE_GLYPH
            } else {
                dead_glyph
            }
        }));
        out.push('\n');
    }
    out
}

/// One `X: x, Y: y` line per live cell, top to bottom then left to right
pub fn render_coordinates(board: &Board) -> String {
    let mut cells: Vec<_> = board.cells().collect();
    cells.sort_by_key(|c| (c.y, c.x));
    cells
        .iter()
        .map(|c| format!("X: {}, Y: {}\n", c.x, c.y))
        .collect()
}

pub fn stats_line(generation: u64, stats: &GenerationStats, evolution_ms: f32) -> String {
    format!(
        "Generation {:>8} | +{:<6} -{:<6} | attempts to give life: {:<8} | {:.2} ms",
        generation,
        format_number(stats.births),
        format_number(stats.deaths),
        format_number(stats.candidates_evaluated),
        evolution_ms
    )
}

/// What to draw besides the grid
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameOptions {
    pub dead_glyph: char,
    pub show_coordinates: bool,
    pub show_stats: bool,
}

/// Write a whole frame: grid, population line, then the optional extras
pub fn draw_frame<W: Write>(
    out: &mut W,
    sim: &Simulation,
    viewport: &Viewport,
    options: FrameOptions,
) -> io::Result<()> {
    write!(out, "{}", CURSOR_HOME)?;
    writeln!(out)?;
    write!(out, "{}", render_viewport(&sim.board, viewport, options.dead_glyph))?;
    writeln!(out, "{}", population_line(&sim.board))?;

    if options.show_stats {
        let line = stats_line(sim.generation, &sim.last_stats, sim.last_evolution_time_ms);
        writeln!(out, "{}", line)?;
    }
    if options.show_coordinates {
        writeln!(out)?;
        write!(out, "{}", render_coordinates(&sim.board))?;
        writeln!(out, "{}", population_line(&sim.board))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;
    use std::time::Duration;

    fn l_board() -> Board {
        Board::from_cells([Cell::new(0, 0), Cell::new(1, 0), Cell::new(0, 1)])
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_500), "1.5K");
        assert_eq!(format_number(2_000_000), "2.0M");
        assert_eq!(format_number(3_100_000_000), "3.1B");
    }

    #[test]
    fn test_render_viewport() {
        let view = Viewport::new(-1, -1, 4, 3).unwrap();
        let text = render_viewport(&l_board(), &view, '-');
        assert_eq!(text, "----\n-OO-\n-O--\n");
    }

    #[test]
    fn test_render_viewport_far_away() {
        let mut board = Board::new();
        board.add_cell(-1_000_000, 1_000_000);
        let view = Viewport::new(-1_000_001, 999_999, 3, 3).unwrap();
        assert_eq!(render_viewport(&board, &view, '.'), "...\n.O.\n...\n");
    }

    #[test]
    fn test_population_line_is_padded() {
        assert_eq!(population_line(&l_board()), "Cells on board: 0000000003");
    }

    #[test]
    fn test_render_coordinates_sorted() {
        assert_eq!(
            render_coordinates(&l_board()),
            "X: 0, Y: 0\nX: 1, Y: 0\nX: 0, Y: 1\n"
        );
    }

    #[test]
    fn test_draw_frame() {
        let sim = Simulation::new(l_board(), Duration::from_millis(10));
        let view = Viewport::new(0, 0, 2, 2).unwrap();
        let mut out = Vec::new();
        let options = FrameOptions {
            dead_glyph: ' ',
            show_coordinates: true,
            show_stats: true,
        };
        draw_frame(&mut out, &sim, &view, options).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\x1b[H\nOO\nO \nCells on board: 0000000003\n"));
        assert!(text.contains("Generation        0"));
        assert!(text.contains("X: 1, Y: 0\n"));
        assert!(text.ends_with("Cells on board: 0000000003\n"));
    }
}

//! Rain simulation state.

use rand::Rng;
use ratatui::{
    Frame,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::chars::RAIN_CHARS;
use crate::color::{glow_color, trail_color};

/// Chance that a column past the bottom edge recycles to the top.
const RESET_CHANCE: f64 = 0.025;

/// Per-step brightness decay of trail cells, the terminal analogue of
/// repainting the canvas with 5%-alpha black.
const TRAIL_FADE: f32 = 0.95;

/// Trail cells dimmer than this go blank.
const MIN_BRIGHTNESS: f32 = 0.05;

/// One cell of the trail grid.
#[derive(Debug, Clone, Copy, Default)]
struct RainCell {
    /// Glyph last stamped here, or None once fully faded.
    ch: Option<char>,
    /// Remaining brightness in [0, 1].
    brightness: f32,
    /// Set on the step the glyph was stamped, cleared on the next fade.
    glow: bool,
}

impl RainCell {
    fn fade(&mut self) {
        self.glow = false;
        self.brightness *= TRAIL_FADE;
        if self.brightness < MIN_BRIGHTNESS {
            *self = RainCell::default();
        }
    }
}

/// Falling-glyph state for the whole surface.
///
/// The drop vector is sized once at construction and never reallocated;
/// resizing only swaps the trail grid. Columns beyond the current width
/// keep advancing invisibly, and a grown surface leaves its new right-edge
/// columns blank until the state is rebuilt.
#[derive(Debug)]
pub struct RainState {
    /// Next row each column stamps a glyph at. Length fixed at creation.
    drops: Vec<u32>,
    /// Trail grid, row-major, width * height.
    cells: Vec<RainCell>,
    width: u16,
    height: u16,
}

impl RainState {
    /// Create rain state sized to the given surface, one column per cell
    /// of width, every drop starting just below the top edge.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            drops: vec![1; width as usize],
            cells: vec![RainCell::default(); width as usize * height as usize],
            width,
            height,
        }
    }

    /// Follow a surface resize. The trail grid is rebuilt blank for the
    /// new dimensions; the drop vector keeps its original length.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells = vec![RainCell::default(); width as usize * height as usize];
    }

    /// Current trail grid dimensions.
    pub fn grid_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Fall position of every column.
    pub fn drop_positions(&self) -> &[u32] {
        &self.drops
    }

    /// Advance the simulation by one frame.
    pub fn step(&mut self, rng: &mut impl Rng) {
        for cell in &mut self.cells {
            cell.fade();
        }

        let width = self.width as usize;
        let height = self.height as u32;

        for (x, drop) in self.drops.iter_mut().enumerate() {
            let ch = RAIN_CHARS[rng.random_range(0..RAIN_CHARS.len())];
            let y = *drop;

            // Stamp only inside the current grid; off-surface columns
            // still advance so their recycle timing matches on-surface ones.
            if x < width && y < height {
                let brightness = rng.random_range(0.1..1.0);
                self.cells[y as usize * width + x] = RainCell {
                    ch: Some(ch),
                    brightness,
                    glow: true,
                };
            }

            if y > height && rng.random_bool(RESET_CHANCE) {
                *drop = 0;
            }
            *drop += 1;
        }
    }

    /// Render the rain over the full frame area.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = self.width as usize;
        let lines: Vec<Line> = (0..self.height)
            .map(|y| {
                let spans: Vec<Span> = (0..self.width)
                    .map(|x| {
                        let cell = self.cells[y as usize * width + x as usize];
                        match cell.ch {
                            Some(ch) => {
                                let color = if cell.glow {
                                    glow_color(cell.brightness)
                                } else {
                                    trail_color(cell.brightness)
                                };
                                Span::styled(ch.to_string(), Style::new().fg(color))
                            }
                            None => Span::raw(" "),
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    #[cfg(test)]
    fn cell(&self, x: u16, y: u16) -> RainCell {
        self.cells[y as usize * self.width as usize + x as usize]
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn drops_start_at_one() {
        let state = RainState::new(80, 24);
        assert_eq!(state.drop_positions().len(), 80);
        assert!(state.drop_positions().iter().all(|&y| y == 1));
    }

    #[test]
    fn column_count_survives_steps_and_resizes() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = RainState::new(40, 12);

        for frame in 0..200 {
            if frame == 50 {
                state.resize(120, 30);
            }
            if frame == 100 {
                state.resize(10, 4);
            }
            state.step(&mut rng);
            assert_eq!(state.drop_positions().len(), 40);
        }
    }

    #[test]
    fn drops_advance_by_one_or_recycle_to_top() {
        let mut rng = StdRng::seed_from_u64(42);
        // Short surface so drops pass the bottom edge quickly.
        let mut state = RainState::new(16, 4);
        let mut resets = 0;

        for _ in 0..2000 {
            let before = state.drop_positions().to_vec();
            state.step(&mut rng);
            for (prev, &now) in before.iter().zip(state.drop_positions()) {
                if now == prev + 1 {
                    continue;
                }
                // The only other legal outcome is a recycle: reset to 0,
                // then the unconditional increment.
                assert_eq!(now, 1);
                assert!(
                    *prev > 4,
                    "column recycled while still on screen (was at {prev})"
                );
                resets += 1;
            }
        }
        assert!(resets > 0, "no column ever recycled in 2000 frames");
    }

    #[test]
    fn fresh_glyphs_glow_with_bounded_brightness() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = RainState::new(8, 6);
        state.step(&mut rng);

        // Every drop started at row 1, so row 1 holds this frame's glyphs.
        for x in 0..8 {
            let cell = state.cell(x, 1);
            assert!(cell.glow);
            assert!(cell.ch.is_some());
            assert!((0.1..1.0).contains(&cell.brightness));
        }
    }

    #[test]
    fn trail_fades_once_the_drop_moves_on() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut state = RainState::new(4, 8);
        state.step(&mut rng);
        let stamped = state.cell(0, 1);

        state.step(&mut rng);
        let faded = state.cell(0, 1);
        assert!(!faded.glow);
        assert!(faded.brightness < stamped.brightness);

        // Enough frames of decay blank the cell entirely.
        let mut drained = state.cell(0, 1);
        for _ in 0..100 {
            drained.fade();
        }
        assert!(drained.ch.is_none());
        assert_eq!(drained.brightness, 0.0);
    }

    #[test]
    fn shrunk_grid_never_receives_out_of_bounds_stamps() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut state = RainState::new(32, 10);
        state.resize(8, 3);

        // Would panic on an out-of-bounds stamp if the guard were wrong.
        for _ in 0..500 {
            state.step(&mut rng);
        }
        assert_eq!(state.drop_positions().len(), 32);
        assert_eq!(state.grid_size(), (8, 3));
    }

    #[test]
    fn render_paints_the_grid_and_skips_zero_area_frames() {
        use ratatui::{Terminal, backend::TestBackend};

        let mut rng = StdRng::seed_from_u64(5);
        let mut state = RainState::new(8, 4);
        state.step(&mut rng);

        let mut terminal = Terminal::new(TestBackend::new(8, 4)).unwrap();
        terminal.draw(|frame| state.render(frame)).unwrap();

        // Every drop started at row 1, so row 1 shows one glyph per column.
        let buffer = terminal.backend().buffer();
        for x in 0..8u16 {
            let symbol = buffer[(x, 1)].symbol();
            assert!(
                RAIN_CHARS.iter().any(|ch| ch.to_string() == symbol),
                "unexpected glyph {symbol:?} at column {x}"
            );
        }
        // The bottom row was never stamped and stays blank.
        assert_eq!(buffer[(0, 3)].symbol(), " ");

        // A zero-area frame renders nothing and must not panic.
        let mut empty = Terminal::new(TestBackend::new(0, 0)).unwrap();
        empty.draw(|frame| state.render(frame)).unwrap();
    }

    #[test]
    fn zero_sized_surface_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = RainState::new(0, 0);
        state.step(&mut rng);
        assert!(state.drop_positions().is_empty());
    }
}

//! Matrix rain animation for the digirain screensaver.
//!
//! This crate owns the falling-glyph simulation: one fall position per
//! terminal column, a grid of fading trail cells standing in for the
//! translucent-black overpaint a canvas implementation would use, and the
//! green color ramp the glyphs are drawn with.

mod chars;
mod color;
mod state;

pub use chars::RAIN_CHARS;
pub use color::{glow_color, trail_color};
pub use state::RainState;

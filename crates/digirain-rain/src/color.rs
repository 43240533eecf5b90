//! Color mapping for rain glyphs.

use ratatui::style::Color;

/// Color of a freshly stamped glyph, brightened toward white to stand in
/// for the canvas glow effect.
pub fn glow_color(brightness: f32) -> Color {
    let brightness = brightness.clamp(0.0, 1.0);
    let side = (120.0 + 100.0 * brightness) as u8;
    Color::Rgb(side, 255, side)
}

/// Color of a fading trail glyph: green channel scaled by brightness.
pub fn trail_color(brightness: f32) -> Color {
    let brightness = brightness.clamp(0.0, 1.0);
    let g = (60.0 + 195.0 * brightness) as u8;
    Color::Rgb(0, g, 0)
}

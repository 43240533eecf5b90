//! Core types shared across the digirain crates.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Polling timeout of the main loop, one rain step per expiry (~60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Cadence at which the typewriter reveals one character.
pub const TYPING_INTERVAL: Duration = Duration::from_millis(150);

/// Pause between a fully revealed quote and the next one.
pub const QUOTE_PAUSE: Duration = Duration::from_millis(3000);

/// Overall animation speed setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl AnimationSpeed {
    /// How many drawn frames elapse between rain steps. The baseline is
    /// one step per frame; only `Slow` gates steps down.
    pub fn frames_per_step(self) -> u32 {
        match self {
            AnimationSpeed::Slow => 2,
            AnimationSpeed::Normal | AnimationSpeed::Fast => 1,
        }
    }

    /// Event-poll timeout between frames. `Fast` refreshes more often
    /// instead of multi-stepping the simulation.
    pub fn poll_interval(self) -> Duration {
        match self {
            AnimationSpeed::Fast => Duration::from_millis(8),
            AnimationSpeed::Slow | AnimationSpeed::Normal => FRAME_INTERVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_speed_steps_every_frame() {
        assert_eq!(AnimationSpeed::default().frames_per_step(), 1);
        assert_eq!(AnimationSpeed::Normal.frames_per_step(), 1);
    }

    #[test]
    fn slow_is_the_only_gated_speed() {
        assert!(AnimationSpeed::Slow.frames_per_step() > 1);
        assert_eq!(AnimationSpeed::Fast.frames_per_step(), 1);
    }

    #[test]
    fn fast_polls_more_often_than_normal() {
        assert!(AnimationSpeed::Fast.poll_interval() < AnimationSpeed::Normal.poll_interval());
        assert_eq!(AnimationSpeed::Normal.poll_interval(), FRAME_INTERVAL);
    }

    #[test]
    fn default_speed_is_normal() {
        assert_eq!(AnimationSpeed::default(), AnimationSpeed::Normal);
    }
}

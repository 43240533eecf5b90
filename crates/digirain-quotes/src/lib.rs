//! Rotating quote display with a typewriter reveal.
//!
//! The typewriter is a small two-phase state machine: while `Typing` it
//! reveals one character of the active quote per tick, and once the quote
//! is complete it sits in `Paused` until the inter-quote pause elapses,
//! then clears and moves to the next quote in the (cyclic) list.

use std::time::Duration;

use digirain_core::{QUOTE_PAUSE, TYPING_INTERVAL};

/// Default quote rotation.
pub const DEFAULT_QUOTES: [&str; 10] = [
    "Reality is nothing but electrical signals interpreted by your brain.",
    "What you choose to believe is the one freedom you always keep.",
    "Ignorance may be strength, but knowledge is everything.",
    "The holes in a system are born from its designer's perfectionism.",
    "Code is poetry: loops upon loops, holding infinite possibility.",
    "Truth is like source code, hidden beneath the interface.",
    "In the digital world, we are all poets of data.",
    "Every bug is a signpost on the road to perfection.",
    "Algorithms are the most honest magic this world has.",
    "Inside the matrix, the only limit is imagination.",
];

/// Typewriter phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Revealing characters of the active quote.
    Typing,
    /// Active quote fully revealed, waiting before advancing.
    Paused,
}

/// Typewriter over a cyclic quote list.
#[derive(Debug)]
pub struct Typewriter {
    quotes: Vec<String>,
    /// Index of the active quote.
    index: usize,
    /// Characters of the active quote revealed so far.
    offset: usize,
    /// Visible text, always a prefix of the active quote.
    visible: String,
    typing_interval: Duration,
    pause: Duration,
    /// Time accumulated toward the next tick or pause expiry.
    elapsed: Duration,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(DEFAULT_QUOTES.iter().map(|q| q.to_string()).collect())
    }
}

impl Typewriter {
    /// Create a typewriter over the given quotes with default timing.
    /// An empty list falls back to the built-in rotation.
    pub fn new(quotes: Vec<String>) -> Self {
        Self::with_timing(quotes, TYPING_INTERVAL, QUOTE_PAUSE)
    }

    /// Create a typewriter with explicit reveal and pause timing.
    pub fn with_timing(quotes: Vec<String>, typing_interval: Duration, pause: Duration) -> Self {
        let quotes = if quotes.is_empty() {
            DEFAULT_QUOTES.iter().map(|q| q.to_string()).collect()
        } else {
            quotes
        };
        Self {
            quotes,
            index: 0,
            offset: 0,
            visible: String::new(),
            typing_interval,
            pause,
            elapsed: Duration::ZERO,
        }
    }

    /// Text revealed so far.
    pub fn visible(&self) -> &str {
        &self.visible
    }

    /// Index of the active quote.
    pub fn quote_index(&self) -> usize {
        self.index
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        if self.offset < self.active_quote_len() {
            Phase::Typing
        } else {
            Phase::Paused
        }
    }

    fn active_quote_len(&self) -> usize {
        self.quotes[self.index].chars().count()
    }

    /// Reveal one character of the active quote. Does nothing once the
    /// quote is complete.
    pub fn tick(&mut self) {
        if let Some(ch) = self.quotes[self.index].chars().nth(self.offset) {
            self.visible.push(ch);
            self.offset += 1;
        }
    }

    /// Leave `Paused`: clear the display and move to the next quote.
    pub fn advance_quote(&mut self) {
        self.visible.clear();
        self.offset = 0;
        self.index = (self.index + 1) % self.quotes.len();
    }

    /// Drive the state machine by wall-clock time. A long frame may
    /// reveal several characters; phase transitions reset the accumulator
    /// so pause time never counts toward typing and vice versa.
    pub fn update(&mut self, delta: Duration) {
        self.elapsed += delta;
        match self.phase() {
            Phase::Typing => {
                while self.elapsed >= self.typing_interval {
                    self.elapsed -= self.typing_interval;
                    self.tick();
                    if self.phase() == Phase::Paused {
                        self.elapsed = Duration::ZERO;
                        break;
                    }
                }
            }
            Phase::Paused => {
                if self.elapsed >= self.pause {
                    self.elapsed = Duration::ZERO;
                    self.advance_quote();
                }
            }
        }
    }
}

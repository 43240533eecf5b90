use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use digirain_config::Config;
use digirain_core::AnimationSpeed;
use digirain_quotes::Typewriter;
use digirain_rain::RainState;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let terminal = ratatui::init();
    let result = run(terminal);
    ratatui::restore();
    result
}

fn run(mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
    let size = terminal.size()?;
    App::new(Config::load(), size.width, size.height).run(terminal)
}

/// The main application which holds the state and logic of the application.
pub struct App {
    /// Is the application running?
    running: bool,
    /// Falling-glyph background.
    rain: RainState,
    /// Quote overlay state machine.
    typewriter: Typewriter,
    /// Heading shown above the quote.
    title: String,
    /// Rain step cadence.
    speed: AnimationSpeed,
    /// Frames drawn since start, gates rain steps by speed.
    frame_count: u32,
    /// Wall clock captured at startup, drives blink and glitch phases.
    started: Instant,
    /// Previous loop iteration, for typewriter deltas.
    last_frame: Instant,
}

impl App {
    /// Construct a new instance of [`App`] for the given surface size.
    pub fn new(config: Config, width: u16, height: u16) -> Self {
        let now = Instant::now();
        let typing_interval = config.typing_interval();
        let pause = config.pause();
        Self {
            running: false,
            rain: RainState::new(width, height),
            typewriter: Typewriter::with_timing(config.quotes, typing_interval, pause),
            title: config.title,
            speed: config.speed,
            frame_count: 0,
            started: now,
            last_frame: now,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let mut rng = rand::rng();
        self.running = true;
        while self.running {
            let now = Instant::now();
            let delta = now.duration_since(self.last_frame);
            self.last_frame = now;

            self.frame_count = self.frame_count.wrapping_add(1);
            if self.frame_count % self.speed.frames_per_step() == 0 {
                self.rain.step(&mut rng);
            }
            self.typewriter.update(delta);

            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface: rain over the whole frame, then the
    /// centered title and quote on top.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if area.width == 0 || area.height == 0 {
            return;
        }

        self.rain.render(frame);

        let elapsed_ms = self.started.elapsed().as_millis() as u64;

        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Top padding
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacing
            Constraint::Length(4), // Quote
            Constraint::Fill(1),   // Bottom padding
            Constraint::Length(1), // Help text
        ])
        .split(area);

        let title = Paragraph::new(self.title.as_str())
            .style(Style::new().fg(glitch_color(elapsed_ms)).bold())
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[1]);

        // Keep the quote in a readable center strip on wide terminals.
        let strip = area.width.min(64);
        let [_, quote_area, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(strip),
            Constraint::Fill(1),
        ])
        .areas(chunks[3]);

        let cursor = if elapsed_ms % 1000 < 500 { "█" } else { " " };
        let quote = Paragraph::new(Line::from(vec![
            Span::styled(self.typewriter.visible(), Style::new().fg(Color::Rgb(0, 255, 0))),
            Span::styled(cursor, Style::new().fg(Color::Rgb(0, 255, 0))),
        ]))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
        frame.render_widget(quote, quote_area);

        let help = Line::from(vec![
            "q".bold().fg(Color::Rgb(0, 255, 0)),
            " quit".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[5]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout so the animation keeps advancing.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.speed.poll_interval())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(width, height) => self.rain.resize(width, height),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Set running to false to quit the application. Safe to call more
    /// than once.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Title color for the current glitch phase: mostly bright green with a
/// brief off-tint flash twice per cycle.
fn glitch_color(elapsed_ms: u64) -> Color {
    match (elapsed_ms / 500) % 8 {
        0 => Color::Rgb(160, 255, 160),
        4 => Color::Rgb(0, 200, 120),
        _ => Color::Rgb(0, 255, 0),
    }
}

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::clock::GameClock;
use crate::game::{GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Keyboard-driven play in the terminal.
///
/// Owns the engine, the game state and (inside the loop) the clock. Key
/// events and clock ticks are handled one at a time on the same task, so a
/// tick never sees a half-applied turn and the renderer never sees a
/// half-applied tick.
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.idle_state();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Not armed until a game starts; dropped with this frame on every exit path
        let mut clock = GameClock::new();

        // Keeps the elapsed-time display moving between ticks
        let mut hud_timer = interval(Duration::from_secs(1));

        self.draw(terminal)?;

        loop {
            let changed = tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event, &mut clock),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => {
                            self.should_quit = true;
                            false
                        }
                    }
                }

                _ = clock.tick() => self.update_game(&mut clock),

                _ = hud_timer.tick() => {
                    self.metrics.update();
                    true
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                    false
                }
            };

            if self.should_quit {
                break;
            }

            if changed {
                self.draw(terminal)?;
            }
        }

        clock.cancel();
        info!("Quitting after {} games", self.metrics.games_played);
        Ok(())
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let snapshot = self.state.snapshot();
        terminal
            .draw(|frame| {
                self.renderer.render(frame, &snapshot, &self.metrics);
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    /// Returns true if the screen needs a redraw
    fn handle_event(&mut self, event: Event, clock: &mut GameClock) -> bool {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind != KeyEventKind::Press {
                    return false;
                }

                match self.input_handler.handle_key_event(key) {
                    KeyAction::Turn(direction) => {
                        // Picked up by the next tick; nothing to redraw yet
                        self.state.set_pending_direction(direction);
                        false
                    }
                    KeyAction::Start => {
                        if self.state.is_running() {
                            return false;
                        }
                        self.start_game(clock);
                        true
                    }
                    KeyAction::Pause => {
                        if !self.state.is_running() {
                            return false;
                        }
                        self.state.pause();
                        clock.sync(&self.state);
                        self.metrics.on_pause();
                        info!("Game stopped with score {}", self.state.score);
                        true
                    }
                    KeyAction::Quit => {
                        self.should_quit = true;
                        false
                    }
                    KeyAction::None => false,
                }
            }
            Event::Resize(_, _) => true,
            _ => false,
        }
    }

    fn update_game(&mut self, clock: &mut GameClock) -> bool {
        let result = self.engine.tick(&mut self.state);

        if result.game_over() {
            self.metrics.on_game_over(self.state.score);
        }

        // Speed-ups re-arm the timer, game over cancels it
        if clock.sync(&self.state) {
            debug!("Tick interval now {}ms", self.state.tick_interval_ms);
        }

        true
    }

    fn start_game(&mut self, clock: &mut GameClock) {
        self.state = self.engine.start();
        self.metrics.on_game_start();
        clock.arm(self.state.tick_interval_ms);
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

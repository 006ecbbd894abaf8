use serde::{Deserialize, Serialize};

use crate::*;

/// Whole-grid regenerations tried before the mine under the first click is moved instead.
pub const MAX_FIRST_CLICK_REROLLS: u32 = 64;

/// Valid transitions:
/// - NotStarted -> Running
/// - Running -> Won
/// - Running -> Lost
/// - any -> NotStarted (reset)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Fresh grid, no cell opened yet
    NotStarted,
    /// First cell opened, clock running
    Running,
    /// A mine was opened
    Lost,
    /// Every safe cell is open
    Won,
}

impl SessionState {
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    /// Indicates the game has ended and only a reset is accepted
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Face shown above the board, derived from the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Idle,
    Pressed,
    Lost,
    Won,
}

/// Raw input forwarded by the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Primary click on a cell
    Reveal(Coord2),
    /// Secondary click on a cell
    ToggleFlag(Coord2),
    /// Face clicked
    Reset,
    /// Pointer pressed anywhere
    Press,
    /// Pointer released anywhere
    Release,
    /// One second elapsed
    Tick,
}

/// One game from the first click to a win or loss, restartable through reset.
#[derive(Clone, Debug)]
pub struct Session<G = RandomGridGenerator> {
    config: GameConfig,
    generator: G,
    grid: Grid,
    state: SessionState,
    elapsed_seconds: u16,
    remaining_mines: i16,
    pressed: bool,
}

impl Session<RandomGridGenerator> {
    /// Classic 10x10 session with 10 mines.
    pub fn new(seed: u64) -> Self {
        Self::with_generator(GameConfig::CLASSIC, RandomGridGenerator::new(seed))
    }
}

impl<G: GridGenerator> Session<G> {
    pub fn with_generator(config: GameConfig, mut generator: G) -> Self {
        let grid = generator.generate(config);
        Self {
            config,
            generator,
            grid,
            state: SessionState::NotStarted,
            elapsed_seconds: 0,
            remaining_mines: initial_remaining(config),
            pressed: false,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        self.grid.cell_at(coords)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn elapsed_seconds(&self) -> u16 {
        self.elapsed_seconds
    }

    /// Mines minus flags placed, negative when the player over-flags.
    pub fn remaining_mines(&self) -> i16 {
        self.remaining_mines
    }

    pub fn mood(&self) -> Mood {
        match self.state {
            SessionState::Lost => Mood::Lost,
            SessionState::Won => Mood::Won,
            _ if self.pressed => Mood::Pressed,
            _ => Mood::Idle,
        }
    }

    /// Feeds one input event, returns whether anything observable changed.
    pub fn handle(&mut self, event: Event) -> Result<bool> {
        Ok(match event {
            Event::Reveal(coords) => self.on_cell_primary_input(coords)?.has_update(),
            Event::ToggleFlag(coords) => self.on_cell_secondary_input(coords)?.has_update(),
            Event::Reset => {
                self.on_reset_requested();
                true
            }
            Event::Press => self.on_input_pressed(),
            Event::Release => self.on_input_released(),
            Event::Tick => self.on_tick(),
        })
    }

    /// Opens a cell, starting the game on the first one.
    pub fn on_cell_primary_input(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.grid.validate_coords(coords)?;

        match self.state {
            SessionState::Lost | SessionState::Won => return Ok(RevealOutcome::NoChange),
            SessionState::NotStarted => {
                self.ensure_safe_start(coords)?;
                self.state = SessionState::Running;
                log::debug!("Session started at {:?}", coords);
            }
            SessionState::Running => {}
        }

        let outcome = self.grid.reveal(coords)?;
        match outcome {
            RevealOutcome::NoChange => {}
            RevealOutcome::HitMine => {
                expose_mines(&mut self.grid, coords);
                self.state = SessionState::Lost;
                log::debug!("Session lost at {:?} after {}s", coords, self.elapsed_seconds);
            }
            RevealOutcome::Revealed(_) => {
                if evaluate(&mut self.grid) == Outcome::Won {
                    self.state = SessionState::Won;
                    // every mine is flagged now
                    self.remaining_mines = 0;
                    log::debug!("Session won after {}s", self.elapsed_seconds);
                }
            }
        }
        Ok(outcome)
    }

    /// Toggles a flag, only while the game is running.
    pub fn on_cell_secondary_input(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        if !self.state.is_running() {
            return Ok(FlagOutcome::NoChange);
        }

        let outcome = self.grid.toggle_flag(coords)?;
        self.remaining_mines = self.remaining_mines.saturating_add(outcome.counter_delta());
        Ok(outcome)
    }

    /// Starts over with a fresh grid, from any state.
    pub fn on_reset_requested(&mut self) {
        self.grid = self.generator.generate(self.config);
        self.state = SessionState::NotStarted;
        self.elapsed_seconds = 0;
        self.remaining_mines = initial_remaining(self.config);
        log::debug!("Session reset");
    }

    pub fn on_input_pressed(&mut self) -> bool {
        !core::mem::replace(&mut self.pressed, true)
    }

    pub fn on_input_released(&mut self) -> bool {
        core::mem::replace(&mut self.pressed, false)
    }

    /// Advances the clock by one second while running, stopping at the cap.
    pub fn on_tick(&mut self) -> bool {
        if !self.state.is_running() || self.elapsed_seconds >= TIME_CAP {
            return false;
        }
        self.elapsed_seconds += 1;
        true
    }

    /// Re-rolls the grid until `coords` is safe, moving the mine away if that takes too long.
    fn ensure_safe_start(&mut self, coords: Coord2) -> Result<()> {
        let mut rerolls = 0;
        while self.grid.contains_mine(coords) {
            if rerolls >= MAX_FIRST_CLICK_REROLLS {
                log::warn!(
                    "First click at {:?} still on a mine after {} rerolls, relocating it",
                    coords,
                    rerolls
                );
                self.generator.relocate_mine(&mut self.grid, coords)?;
                break;
            }
            self.grid = self.generator.generate(self.config);
            rerolls += 1;
        }

        if rerolls > 0 {
            log::debug!("Rerolled grid {} times for a safe first click", rerolls);
        }
        Ok(())
    }
}

fn initial_remaining(config: GameConfig) -> i16 {
    i16::try_from(config.mines).unwrap_or(i16::MAX)
}

//! The game loop
//!
//! Owns the game state, the pending input flags, the RNG and the drawing
//! surface. The host calls `frame` once per display frame; each call runs
//! the simulation (according to the pacing setting) and redraws.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, TICK_DT};
use crate::renderer::{SceneOptions, Surface, draw_frame};
use crate::settings::{Pacing, Settings};
use crate::sim::{GameEvent, GameState, TickInput, tick};

pub struct GameLoop<S: Surface> {
    state: GameState,
    input: TickInput,
    rng: Pcg32,
    surface: S,
    pacing: Pacing,
    scene: SceneOptions,
    running: bool,
    /// Unsimulated time carried between frames (`Pacing::Fixed` only)
    accumulator: f32,
    /// Timestamp of the previous frame (ms)
    last_time: Option<f64>,
}

impl<S: Surface> GameLoop<S> {
    pub fn new(surface: S, settings: &Settings, seed: u64) -> Self {
        Self {
            state: GameState::new(),
            input: TickInput::default(),
            rng: Pcg32::seed_from_u64(seed),
            surface,
            pacing: settings.pacing,
            scene: SceneOptions {
                reduced_motion: settings.reduced_motion,
            },
            running: false,
            accumulator: 0.0,
            last_time: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin accepting frames. Returns false if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.last_time = None;
        self.accumulator = 0.0;
        log::info!("Game loop started ({} pacing)", self.pacing.as_str());
        true
    }

    /// Stop accepting frames. Safe to call more than once.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!("Game loop stopped");
        }
    }

    /// Jump key went down
    pub fn press_jump(&mut self) {
        self.input.jump = true;
    }

    /// Jump key went up
    pub fn release_jump(&mut self) {
        self.input.jump = false;
    }

    /// Pointer click; restarts the run if it is over
    pub fn request_restart(&mut self) {
        self.input.restart = true;
    }

    /// Run one display frame at `time_ms`. Returns false when stopped, in
    /// which case nothing is simulated or drawn and the host should not
    /// schedule another frame.
    pub fn frame(&mut self, time_ms: f64) -> bool {
        if !self.running {
            return false;
        }

        let ticks = self.ticks_for_frame(time_ms);
        for _ in 0..ticks {
            self.step();
        }
        self.render();
        true
    }

    /// Advance the simulation by exactly one tick
    pub fn step(&mut self) -> Option<GameEvent> {
        tick(&mut self.state, &mut self.input, &mut self.rng)
    }

    /// Draw the current state
    pub fn render(&mut self) {
        draw_frame(&self.state, &mut self.surface, self.scene);
    }

    fn ticks_for_frame(&mut self, time_ms: f64) -> u32 {
        let last = self.last_time.replace(time_ms);
        match self.pacing {
            Pacing::PerFrame => 1,
            Pacing::Fixed => {
                // First frame has no reference point; run a single tick
                let dt = match last {
                    Some(last) => ((time_ms - last) / 1000.0) as f32,
                    None => TICK_DT,
                };
                self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

                let mut ticks = 0;
                while self.accumulator >= TICK_DT && ticks < MAX_SUBSTEPS {
                    self.accumulator -= TICK_DT;
                    ticks += 1;
                }
                // Drop whatever the substep cap could not absorb
                if ticks == MAX_SUBSTEPS {
                    self.accumulator = self.accumulator.min(TICK_DT);
                }
                ticks
            }
        }
    }
}

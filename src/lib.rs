//! Bottle Dodge - A side-scrolling pixel-art dodging game
//!
//! Core modules:
//! - `sim`: Simulation (physics, spawning, collisions, game state)
//! - `renderer`: 2D surface abstraction and frame composition
//! - `game_loop`: Ties state, input, RNG and a surface into one loop
//! - `platform`: Browser wiring (canvas, input, animation frames)
//! - `settings`: Player preferences

pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game_loop::GameLoop;
pub use settings::{Pacing, Settings};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical pixels)
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 300.0;

    /// Top of the ground strip
    pub const GROUND_LINE: f32 = 284.0;
    pub const GROUND_HEIGHT: f32 = 16.0;
    /// Ground tile pattern: one dark tile every `GROUND_TILE_STRIDE` pixels
    pub const GROUND_TILE_STRIDE: f32 = 8.0;
    pub const GROUND_TILE_WIDTH: f32 = 6.0;

    /// Player defaults - x never changes
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_START_Y: f32 = 150.0;
    pub const PLAYER_SIZE: f32 = 16.0;
    /// Lowest y the player can reach (standing on the ground line)
    pub const PLAYER_GROUND_Y: f32 = GROUND_LINE - PLAYER_SIZE;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a jump (negative = upward)
    pub const JUMP_IMPULSE: f32 = -9.5;

    /// Obstacle scroll speed (pixels per tick)
    pub const START_SPEED: f64 = 3.0;
    pub const SPEED_INCREMENT: f64 = 0.0005;
    /// Score is speed scaled by this, floored
    pub const SCORE_MULTIPLIER: f64 = 10.0;

    /// Chance per tick of spawning one obstacle
    pub const SPAWN_CHANCE: f64 = 0.025;
    pub const OBSTACLE_WIDTH: f32 = 20.0;
    pub const OBSTACLE_HEIGHT: f32 = 30.0;
    /// Lane heights (top edge of the obstacle)
    pub const UPPER_LANE_Y: f32 = 40.0;
    pub const GROUND_LANE_Y: f32 = 250.0;

    /// Fixed timestep used by `Pacing::Fixed` (seconds)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum catch-up ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame gap fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

//! Game state and core simulation types

use glam::Vec2;

use super::collision::Aabb;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Run ended, waiting for a restart request
    GameOver,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Player hit an obstacle; carries the final score
    Crashed { score: u32 },
    /// A new run started from the game-over screen
    Restarted,
}

/// The player character
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner; x stays at `PLAYER_X`
    pub pos: Vec2,
    /// Vertical velocity (positive = downward)
    pub vel_y: f32,
    /// Side length of the square hit-box
    pub size: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, PLAYER_START_Y),
            vel_y: 0.0,
            size: PLAYER_SIZE,
        }
    }
}

impl Player {
    pub fn hitbox(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(self.size))
    }

    /// Kick the player upward
    pub fn jump(&mut self) {
        self.vel_y = JUMP_IMPULSE;
    }

    /// Semi-implicit Euler step, then clamp into the visible band.
    ///
    /// The clamp only moves the position; velocity keeps accumulating while
    /// pinned against the floor or ceiling.
    pub fn integrate(&mut self) {
        self.vel_y += GRAVITY;
        self.pos.y = (self.pos.y + self.vel_y).clamp(0.0, PLAYER_GROUND_Y);
    }
}

/// Obstacle visuals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Green bottle rolling along the ground
    Beer,
    /// Clear bottle flying through the upper lane
    Vodka,
}

/// Vertical spawn position of an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    Upper,
    Ground,
}

impl Lane {
    /// Top edge of obstacles in this lane
    pub fn y(self) -> f32 {
        match self {
            Lane::Upper => UPPER_LANE_Y,
            Lane::Ground => GROUND_LANE_Y,
        }
    }

    pub fn kind(self) -> ObstacleKind {
        match self {
            Lane::Upper => ObstacleKind::Vodka,
            Lane::Ground => ObstacleKind::Beer,
        }
    }
}

/// A scrolling obstacle
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: ObstacleKind,
}

impl Obstacle {
    /// New obstacle at the right edge of the playfield
    pub fn spawn(lane: Lane) -> Self {
        Self {
            pos: Vec2::new(FIELD_WIDTH, lane.y()),
            size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            kind: lane.kind(),
        }
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Trailing edge has left the playfield
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.pos.x <= -self.size.x
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub phase: GamePhase,
    pub player: Player,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Obstacle scroll speed (pixels per tick)
    pub speed: f64,
    /// Speed increments applied so far this run
    pub ramp_ticks: u64,
    pub score: u32,
    /// Ticks since the run started, for cosmetic animation only
    pub frame: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Playing,
            player: Player::default(),
            obstacles: Vec::new(),
            speed: START_SPEED,
            ramp_ticks: 0,
            score: 0,
            frame: 0,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Score implied by the current speed
    pub fn score_for_speed(speed: f64) -> u32 {
        (speed * SCORE_MULTIPLIER).floor() as u32
    }

    /// Speed after `ramp_ticks` increments.
    ///
    /// Computed from the count rather than summed tick by tick, so rounding
    /// never builds up and the score crosses each boundary on time.
    pub fn speed_after(ramp_ticks: u64) -> f64 {
        START_SPEED + ramp_ticks as f64 * SPEED_INCREMENT
    }

    /// Apply one speed increment
    pub fn ramp_speed(&mut self) {
        self.ramp_ticks += 1;
        self.speed = Self::speed_after(self.ramp_ticks);
    }

    /// Start a fresh run. Only valid from `GameOver`; returns whether the
    /// reset happened.
    pub fn restart(&mut self) -> bool {
        if !self.is_game_over() {
            return false;
        }
        *self = Self::new();
        true
    }
}

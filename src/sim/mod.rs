//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module renders or touches
//! the platform:
//! - One call to `tick` = one display frame of game time
//! - Randomness comes from the caller's RNG only
//! - Obstacles are kept in spawn order

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, first_hit};
pub use state::{GameEvent, GamePhase, GameState, Lane, Obstacle, ObstacleKind, Player};
pub use tick::{TickInput, tick};

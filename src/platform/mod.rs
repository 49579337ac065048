//! Platform abstraction layer
//!
//! Browser wiring for:
//! - Canvas acquisition
//! - Input events (jump key, restart click)
//! - Animation frame scheduling and teardown

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Key code that triggers a jump
pub const JUMP_KEY: &str = "Space";

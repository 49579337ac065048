//! Frame composition
//!
//! Draws the whole playfield back to front from a read-only view of the game
//! state: sky, clouds, ground, player, obstacles, score, game-over overlay.

use super::sprites::{self, colors};
use super::surface::{Surface, TextAlign, TextStyle};
use crate::consts::*;
use crate::sim::GameState;

const CLOUD_COUNT: usize = 3;
/// Clouds drift this many pixels per frame
const CLOUD_DRIFT: f32 = 0.5;
const CLOUD_SPACING: f32 = 150.0;
/// Horizontal wrap period; clouds re-enter from 50px left of the field
const CLOUD_WRAP: f32 = 500.0;
/// Frames for one full drift period (`CLOUD_WRAP / CLOUD_DRIFT`)
const CLOUD_PERIOD: u64 = 1000;
const CLOUD_MARGIN: f32 = 50.0;

/// Beard wobble phase per frame (radians)
const BEARD_RATE: f32 = 0.2;

const SCORE_STYLE: TextStyle = TextStyle {
    font: "bold 22px monospace",
    color: colors::SCORE,
    glow: Some((colors::SCORE, 8.0)),
    align: TextAlign::Left,
};

const TITLE_STYLE: TextStyle = TextStyle {
    font: "bold 32px monospace",
    color: colors::SCORE,
    glow: Some((colors::SCORE, 12.0)),
    align: TextAlign::Center,
};

const HINT_STYLE: TextStyle = TextStyle {
    font: "16px monospace",
    color: colors::OVERLAY_TEXT,
    glow: None,
    align: TextAlign::Center,
};

/// Options that change how a frame looks, never what happens
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneOptions {
    /// Freeze cloud drift and beard wobble
    pub reduced_motion: bool,
}

/// Render one complete frame
pub fn draw_frame<S: Surface + ?Sized>(state: &GameState, surface: &mut S, opts: SceneOptions) {
    let frame = if opts.reduced_motion { 0 } else { state.frame };

    surface.fill(colors::SKY);
    draw_clouds(surface, frame);
    draw_ground(surface);

    let player = &state.player;
    sprites::player(
        surface,
        player.pos.x,
        player.pos.y,
        player.size,
        beard_offset(frame),
    );

    for obs in &state.obstacles {
        sprites::bottle(surface, obs.pos.x, obs.pos.y, obs.kind);
    }

    surface.fill_text(&format!("Score: {}", state.score), 10.0, 30.0, &SCORE_STYLE);

    if state.is_game_over() {
        draw_game_over(surface, state.score);
    }
}

/// Left edge of cloud `index` at `frame`
pub fn cloud_x(frame: u64, index: usize) -> f32 {
    let phase = (frame % CLOUD_PERIOD) as f32;
    (phase * CLOUD_DRIFT + index as f32 * CLOUD_SPACING) % CLOUD_WRAP - CLOUD_MARGIN
}

/// Vertical beard offset at `frame`, in [-1, 1]
pub fn beard_offset(frame: u64) -> f32 {
    (frame as f32 * BEARD_RATE).sin()
}

fn draw_clouds<S: Surface + ?Sized>(surface: &mut S, frame: u64) {
    for i in 0..CLOUD_COUNT {
        let x = cloud_x(frame, i);
        let y = 30.0 + i as f32 * 20.0;
        surface.fill_rect(x, y, 40.0, 10.0, colors::CLOUD);
        surface.fill_rect(x + 10.0, y - 5.0, 30.0, 15.0, colors::CLOUD);
    }
}

fn draw_ground<S: Surface + ?Sized>(surface: &mut S) {
    surface.fill_rect(0.0, GROUND_LINE, FIELD_WIDTH, GROUND_HEIGHT, colors::GRASS);
    let mut x = 0.0;
    while x < FIELD_WIDTH {
        surface.fill_rect(x, GROUND_LINE, GROUND_TILE_WIDTH, GROUND_HEIGHT, colors::GRASS_TILE);
        x += GROUND_TILE_STRIDE;
    }
}

fn draw_game_over<S: Surface + ?Sized>(surface: &mut S, score: u32) {
    surface.fill_rect(0.0, 0.0, FIELD_WIDTH, FIELD_HEIGHT, colors::OVERLAY);
    let cx = FIELD_WIDTH / 2.0;
    surface.fill_text("GAME OVER", cx, 130.0, &TITLE_STYLE);
    surface.fill_text(&format!("Final score: {}", score), cx, 165.0, &HINT_STYLE);
    surface.fill_text("Click to restart", cx, 190.0, &HINT_STYLE);
}

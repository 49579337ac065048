//! Pixel-art sprites built from filled rectangles

use super::surface::{Color, Surface};
use crate::sim::ObstacleKind;

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const SKY: Color = Color::hex(0x87CEEB);
    pub const CLOUD: Color = Color::hex(0xFFFFFF);
    pub const GRASS: Color = Color::hex(0x228B22);
    pub const GRASS_TILE: Color = Color::hex(0x006400);
    pub const SCORE: Color = Color::hex(0xFFD700);
    pub const OVERLAY: Color = Color::hex(0x000000).with_alpha(153);
    pub const OVERLAY_TEXT: Color = Color::hex(0xFFFFFF);

    // Player
    pub const SKIN: Color = Color::hex(0xFDBCB4);
    pub const HAIR: Color = Color::hex(0x8B4513);
    pub const EYES: Color = Color::hex(0x000000);
    pub const BEARD: Color = Color::hex(0x654321);
    pub const MOUTH: Color = Color::hex(0xA52A2A);

    // Beer bottle
    pub const BEER_CAP: Color = Color::hex(0x8B4513);
    pub const BEER_GLASS: Color = Color::hex(0x228B22);
    pub const BEER_SHINE: Color = Color::hex(0x90EE90);
    pub const BEER_LABEL: Color = Color::hex(0xFFD700);

    // Vodka bottle
    pub const VODKA_CAP: Color = Color::hex(0x000000);
    pub const VODKA_GLASS: Color = Color::hex(0xE0E0E0);
    pub const VODKA_SHINE: Color = Color::hex(0xF0F8FF);
    pub const VODKA_SHADOW: Color = Color::hex(0xD3D3D3);
    pub const VODKA_LABEL: Color = Color::hex(0xFF69B4);
}

/// Draw the player at (x, y). `beard_offset` shifts the beard vertically.
pub fn player<S: Surface + ?Sized>(surface: &mut S, x: f32, y: f32, size: f32, beard_offset: f32) {
    let s = size;

    // Head
    surface.fill_rect(x + 2.0, y + 2.0, s - 4.0, s - 6.0, colors::SKIN);

    // Hair: top and both sides
    surface.fill_rect(x + 1.0, y, s - 2.0, 4.0, colors::HAIR);
    surface.fill_rect(x, y + 1.0, 3.0, s - 4.0, colors::HAIR);
    surface.fill_rect(x + s - 3.0, y + 1.0, 3.0, s - 4.0, colors::HAIR);

    // Eyes and nose
    surface.fill_rect(x + 4.0, y + 5.0, 2.0, 2.0, colors::EYES);
    surface.fill_rect(x + 10.0, y + 5.0, 2.0, 2.0, colors::EYES);
    surface.fill_rect(x + 7.0, y + 8.0, 2.0, 3.0, colors::EYES);

    // Beard
    surface.fill_rect(x + 3.0, y + 11.0 + beard_offset, 10.0, 5.0, colors::BEARD);
    surface.fill_rect(x + 1.0, y + 13.0 + beard_offset, s - 2.0, 3.0, colors::BEARD);

    // Mouth sits on top of the beard
    surface.fill_rect(x + 6.0, y + 10.0, 4.0, 1.0, colors::MOUTH);
}

/// Draw a bottle obstacle with its top-left corner at (x, y)
pub fn bottle<S: Surface + ?Sized>(surface: &mut S, x: f32, y: f32, kind: ObstacleKind) {
    match kind {
        ObstacleKind::Beer => {
            surface.fill_rect(x + 2.0, y, 16.0, 4.0, colors::BEER_CAP);
            surface.fill_rect(x + 3.0, y + 4.0, 14.0, 24.0, colors::BEER_GLASS);
            surface.fill_rect(x + 5.0, y + 6.0, 3.0, 20.0, colors::BEER_SHINE);
            surface.fill_rect(x + 12.0, y + 6.0, 3.0, 20.0, colors::BEER_SHINE);
            surface.fill_rect(x + 6.0, y + 12.0, 8.0, 8.0, colors::BEER_LABEL);
        }
        ObstacleKind::Vodka => {
            surface.fill_rect(x + 4.0, y, 12.0, 4.0, colors::VODKA_CAP);
            surface.fill_rect(x + 3.0, y + 4.0, 14.0, 24.0, colors::VODKA_GLASS);
            surface.fill_rect(x + 14.0, y + 6.0, 2.0, 20.0, colors::VODKA_SHINE);
            surface.fill_rect(x + 4.0, y + 6.0, 2.0, 20.0, colors::VODKA_SHADOW);
            surface.fill_rect(x + 6.0, y + 14.0, 8.0, 6.0, colors::VODKA_LABEL);
        }
    }
}

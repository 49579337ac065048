//! `Surface` backed by an HTML canvas 2D context

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{Color, Surface, TextAlign, TextStyle};
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas` and size it to the playfield.
    ///
    /// Fails if the browser refuses a 2D context; the game cannot run without
    /// one.
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        canvas.set_width(FIELD_WIDTH as u32);
        canvas.set_height(FIELD_HEIGHT as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        // Crisp pixel art
        ctx.set_image_smoothing_enabled(false);

        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn fill(&mut self, color: Color) {
        self.fill_rect(0.0, 0.0, FIELD_WIDTH, FIELD_HEIGHT, color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        let ctx = &self.ctx;
        ctx.set_font(style.font);
        ctx.set_fill_style_str(&style.color.to_string());
        ctx.set_text_align(match style.align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        if let Some((glow, blur)) = style.glow {
            ctx.set_shadow_color(&glow.to_string());
            ctx.set_shadow_blur(blur as f64);
        }

        if let Err(e) = ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }

        // Glow must not bleed into the next frame's rectangles
        ctx.set_shadow_blur(0.0);
    }
}

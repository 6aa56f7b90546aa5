//! Canvas 2D renderer
//!
//! Bodies are drawn as one path of filled circles in a single colour.

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::driver::Render;
use crate::sim::Circle;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    fill_color: String,
}

impl CanvasRenderer {
    /// Acquire the 2D context of `canvas`
    pub fn new(canvas: &HtmlCanvasElement, fill_color: &str) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            fill_color: fill_color.to_string(),
        })
    }
}

impl Render for CanvasRenderer {
    fn render(&mut self, circles: &[Circle]) {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, self.width, self.height);
        ctx.begin_path();
        for circle in circles {
            // Start each subpath on the rim so no spoke is filled
            ctx.move_to(circle.center.x + circle.radius, circle.center.y);
            if let Err(e) = ctx.arc(circle.center.x, circle.center.y, circle.radius, 0.0, TAU) {
                log::warn!("Canvas arc failed: {:?}", e);
            }
        }
        ctx.set_fill_style_str(&self.fill_color);
        ctx.fill();
    }
}

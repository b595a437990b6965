//! `<canvas>` 2D context as the game's drawing surface

use game_core::{Color, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    fill: Option<Color>, // Last fill style set on the context
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Context is not a CanvasRenderingContext2d"))?;

        Ok(Self {
            canvas,
            context,
            fill: None,
        })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    #[allow(deprecated)]
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        if self.fill != Some(color) {
            self.context
                .set_fill_style(&JsValue::from_str(&color.to_css()));
            self.fill = Some(color);
        }
        self.context
            .fill_rect(x as f64, y as f64, w as f64, h as f64);
    }
}

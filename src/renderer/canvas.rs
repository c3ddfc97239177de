//! Canvas 2D backend (browser only)

use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::sprites::{DrawCommand, Sprite, frame};
use crate::sim::Snapshot;

/// Executes draw commands against a canvas element
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    images: HashMap<Sprite, HtmlImageElement>,
}

impl CanvasRenderer {
    /// Acquire the 2D context and start loading every sprite
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;

        let mut images = HashMap::with_capacity(Sprite::ALL.len());
        for sprite in Sprite::ALL {
            let image = HtmlImageElement::new()?;
            image.set_src(sprite.path());
            images.insert(sprite, image);
        }

        Ok(Self { ctx, images })
    }

    /// Draw one frame
    pub fn render(&self, snapshot: &Snapshot) {
        for command in frame(snapshot) {
            if let Err(e) = self.execute(&command) {
                log::warn!("Draw error: {:?}", e);
            }
        }
    }

    fn execute(&self, command: &DrawCommand) -> Result<(), JsValue> {
        match *command {
            DrawCommand::Clear { size } => {
                self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
                Ok(())
            }
            DrawCommand::Image { sprite, rect } => {
                let Some(image) = self.images.get(&sprite) else {
                    return Ok(());
                };
                // Skip until the asset has finished loading
                if !image.complete() || image.natural_width() == 0 {
                    return Ok(());
                }
                self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    image,
                    rect.pos.x as f64,
                    rect.pos.y as f64,
                    rect.size.x as f64,
                    rect.size.y as f64,
                )
            }
        }
    }
}

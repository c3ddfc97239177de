//! Rendering module
//!
//! Frames are described as a flat list of draw commands built from a
//! simulation snapshot; the browser backend replays them on a 2D canvas.

pub mod sprites;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use sprites::{DrawCommand, Rect, Sprite, frame};

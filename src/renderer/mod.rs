//! Rendering module
//!
//! Everything is drawn as flat rectangles and text onto a `Surface`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;
pub mod sprites;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::{SceneOptions, draw_frame};
pub use surface::{Color, DrawCmd, RecordingSurface, Surface, TextAlign, TextStyle};

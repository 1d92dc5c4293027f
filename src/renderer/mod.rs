//! 2D canvas rendering module
//!
//! The scene is drawn through the `RenderSurface` primitives, so frames can
//! be recorded headlessly as well as painted on a browser canvas.

pub mod assets;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod scene;
pub mod surface;

pub use assets::{LoadProgress, Sprites};
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordedImage, RecordingSurface};
pub use scene::draw;
pub use surface::{Color, Fill, ImageSource, RenderSurface};

//! Pixel-space rendering of active boxes onto a drawing surface.

mod rect;
mod recording;
mod renderer;
mod style;
mod surface;

#[cfg(feature = "raster")]
mod raster;

pub use rect::Rect;
pub use recording::{DrawCommand, RecordingSurface};
pub use renderer::OverlayRenderer;
pub use style::{Color, OverlayConfig, StrokeStyle};
pub use surface::DrawSurface;

#[cfg(feature = "raster")]
pub use raster::RasterSurface;

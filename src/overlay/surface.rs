use crate::overlay::rect::Rect;
use crate::overlay::style::StrokeStyle;

/// Drawing surface layered over the video.
///
/// Implement this for a canvas, a window texture or an in-memory image. All
/// coordinates are pixels relative to the surface's top-left corner.
pub trait DrawSurface {
    /// Current (width, height) in pixels.
    fn dimensions(&self) -> (f32, f32);

    /// Resize the surface. Existing contents are discarded.
    fn resize(&mut self, width: f32, height: f32);

    /// Erase everything inside `rect`.
    fn clear_rect(&mut self, rect: Rect);

    /// Draw the outline of `rect`.
    fn stroke_rect(&mut self, rect: Rect, style: &StrokeStyle);
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn dimensions(&self) -> (f32, f32) {
        (**self).dimensions()
    }

    fn resize(&mut self, width: f32, height: f32) {
        (**self).resize(width, height)
    }

    fn clear_rect(&mut self, rect: Rect) {
        (**self).clear_rect(rect)
    }

    fn stroke_rect(&mut self, rect: Rect, style: &StrokeStyle) {
        (**self).stroke_rect(rect, style)
    }
}

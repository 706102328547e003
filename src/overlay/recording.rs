//! In-memory surface that keeps the visible strokes and a log of every draw call.

use crate::overlay::rect::Rect;
use crate::overlay::style::StrokeStyle;
use crate::overlay::surface::DrawSurface;

/// A single call made against a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Resize { width: f32, height: f32 },
    Clear(Rect),
    Stroke(Rect, StrokeStyle),
}

/// Surface that records draw calls instead of rasterizing them.
///
/// A clear that covers the whole surface erases every stroke, including
/// strokes that lie partly or wholly off the surface. A smaller clear erases
/// the strokes it touches, even partially.
///
/// The command log is unbounded: every call is appended until the log is
/// drained with [`take_commands`](Self::take_commands). Drain it regularly
/// when recording a long playback.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    visible: Vec<(Rect, StrokeStyle)>,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Strokes currently on the surface, in draw order.
    pub fn visible(&self) -> &[(Rect, StrokeStyle)] {
        &self.visible
    }

    pub fn visible_rects(&self) -> Vec<Rect> {
        self.visible.iter().map(|(rect, _)| *rect).collect()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the command log, leaving the visible strokes untouched.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawSurface for RecordingSurface {
    fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.visible.clear();
        self.commands.push(DrawCommand::Resize { width, height });
    }

    fn clear_rect(&mut self, rect: Rect) {
        let surface = Rect::new(0.0, 0.0, self.width, self.height);
        if rect.contains(&surface) {
            self.visible.clear();
        } else if !rect.is_empty() {
            self.visible.retain(|(stroke, _)| !rect.touches(stroke));
        }
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn stroke_rect(&mut self, rect: Rect, style: &StrokeStyle) {
        self.visible.push((rect, *style));
        self.commands.push(DrawCommand::Stroke(rect, *style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_removes_touched_strokes() {
        let style = StrokeStyle::default();
        let mut surface = RecordingSurface::new(100.0, 100.0);
        surface.stroke_rect(Rect::new(10.0, 10.0, 10.0, 10.0), &style);
        surface.stroke_rect(Rect::new(60.0, 60.0, 10.0, 10.0), &style);

        surface.clear_rect(Rect::new(0.0, 0.0, 50.0, 50.0));
        let remaining = vec![Rect::new(60.0, 60.0, 10.0, 10.0)];
        assert_eq!(surface.visible_rects(), remaining);

        surface.clear_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(surface.visible().is_empty());
        assert_eq!(surface.commands().len(), 4);
    }

    #[test]
    fn test_full_clear_removes_off_surface_strokes() {
        let style = StrokeStyle::default();
        let mut surface = RecordingSurface::new(100.0, 100.0);
        surface.stroke_rect(Rect::new(120.0, 10.0, 20.0, 20.0), &style);
        surface.stroke_rect(Rect::new(-50.0, -50.0, 10.0, 10.0), &style);

        surface.clear_rect(Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(surface.visible().len(), 2);

        surface.clear_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(surface.visible().is_empty());
    }

    #[test]
    fn test_zero_area_clear_is_noop() {
        let style = StrokeStyle::default();
        let mut surface = RecordingSurface::new(10.0, 10.0);
        surface.stroke_rect(Rect::new(0.0, 0.0, 5.0, 5.0), &style);
        surface.clear_rect(Rect::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(surface.visible().len(), 1);
    }

    #[test]
    fn test_resize_discards_contents() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        let style = StrokeStyle::default();
        surface.stroke_rect(Rect::new(0.0, 0.0, 5.0, 5.0), &style);
        surface.resize(20.0, 30.0);
        assert!(surface.visible().is_empty());
        assert_eq!(surface.dimensions(), (20.0, 30.0));

        let resize = DrawCommand::Resize {
            width: 20.0,
            height: 30.0,
        };
        assert_eq!(surface.take_commands().last(), Some(&resize));
        assert!(surface.commands().is_empty());
    }
}

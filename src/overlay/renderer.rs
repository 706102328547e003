//! Clear-then-redraw rendering of the active boxes on each time change.

use log::{debug, trace};

use crate::annotation::AnnotationIndex;
use crate::integration::PlaybackHost;
use crate::overlay::rect::Rect;
use crate::overlay::style::StrokeStyle;
use crate::overlay::surface::DrawSurface;

/// Draws the boxes active at the current playback time onto a surface sized
/// to the rendered video.
///
/// Nothing about the playback host is cached between calls: the surface is
/// resized, cleared and redrawn from the arguments of every call, so two
/// calls with the same time and dimensions leave the same surface behind.
pub struct OverlayRenderer<S: DrawSurface> {
    index: AnnotationIndex,
    surface: S,
    style: StrokeStyle,
}

impl<S: DrawSurface> OverlayRenderer<S> {
    /// Create a renderer with the default stroke style.
    pub fn new(index: AnnotationIndex, surface: S) -> Self {
        Self::with_style(index, surface, StrokeStyle::default())
    }

    pub fn with_style(index: AnnotationIndex, surface: S, style: StrokeStyle) -> Self {
        Self {
            index,
            surface,
            style,
        }
    }

    /// Redraw for `current_time` on a surface of the rendered video size.
    ///
    /// The surface is always cleared, even when no box is active. Zero or
    /// invalid dimensions skip the draw step, and boxes with inverted or zero
    /// extents are not drawn. Returns the rectangles drawn.
    pub fn on_time_change(
        &mut self,
        current_time: f64,
        surface_width: f32,
        surface_height: f32,
    ) -> Vec<Rect> {
        let width = sanitize_extent(surface_width);
        let height = sanitize_extent(surface_height);

        if self.surface.dimensions() != (width, height) {
            debug!("Resizing overlay surface to {}x{}", width, height);
            self.surface.resize(width, height);
        }
        self.surface.clear_rect(Rect::new(0.0, 0.0, width, height));

        if width == 0.0 || height == 0.0 {
            debug!("Zero-area surface, skipping draw at t={current_time}");
            return Vec::new();
        }

        let rects: Vec<Rect> = self
            .index
            .active_boxes(current_time)
            .iter()
            .map(|bbox| Rect::from_normalized(bbox, width, height))
            .filter(|rect| !rect.is_empty())
            .collect();

        for rect in &rects {
            self.surface.stroke_rect(*rect, &self.style);
        }

        trace!("Drew {} boxes at t={current_time}", rects.len());
        rects
    }

    /// Redraw using the time and rendered size reported by `host`.
    pub fn on_playback_event<H: PlaybackHost + ?Sized>(&mut self, host: &H) -> Vec<Rect> {
        self.on_time_change(
            host.current_time(),
            host.rendered_width(),
            host.rendered_height(),
        )
    }

    /// Swap in the annotations of a new video and clear the surface.
    ///
    /// Returns the previous index.
    pub fn replace_index(&mut self, index: AnnotationIndex) -> AnnotationIndex {
        let (width, height) = self.surface.dimensions();
        self.surface.clear_rect(Rect::new(0.0, 0.0, width, height));
        std::mem::replace(&mut self.index, index)
    }

    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn index(&self) -> &AnnotationIndex {
        &self.index
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

fn sanitize_extent(extent: f32) -> f32 {
    if extent.is_finite() && extent > 0.0 {
        extent
    } else {
        0.0
    }
}

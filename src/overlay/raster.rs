//! Software surface backed by an RGBA image.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_rect_mut;

use crate::overlay::rect::Rect;
use crate::overlay::style::StrokeStyle;
use crate::overlay::surface::DrawSurface;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Transparent RGBA image that can be composited over a video frame.
///
/// Strokes are centered on the rectangle edges, `line_width` pixels wide.
/// Rectangles with inverted or zero extents are not drawn.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

impl DrawSurface for RasterSurface {
    fn dimensions(&self) -> (f32, f32) {
        (self.image.width() as f32, self.image.height() as f32)
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.image = RgbaImage::new(to_pixels(width), to_pixels(height));
    }

    fn clear_rect(&mut self, rect: Rect) {
        let [x1, y1, x2, y2] = rect.normalized().to_tlbr();
        let (width, height) = self.image.dimensions();
        let clamp = |v: f32, max: u32| (v.max(0.0).round() as u32).min(max);
        for y in clamp(y1, height)..clamp(y2, height) {
            for x in clamp(x1, width)..clamp(x2, width) {
                self.image.put_pixel(x, y, TRANSPARENT);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, style: &StrokeStyle) {
        if rect.is_empty() {
            return;
        }
        let color = Rgba(style.color.to_array());
        let passes = style.line_width.round().max(1.0) as i32;
        let half = passes / 2;

        // One 1px outline per pass, from the outer edge of the band inwards.
        for pass in 0..passes {
            let inset = pass - half;
            let x = rect.x.round() as i32 + inset;
            let y = rect.y.round() as i32 + inset;
            let w = rect.width.round() as i32 - 2 * inset;
            let h = rect.height.round() as i32 - 2 * inset;
            if w <= 0 || h <= 0 {
                break;
            }
            let outline = imageproc::rect::Rect::at(x, y).of_size(w as u32, h as u32);
            draw_hollow_rect_mut(&mut self.image, outline, color);
        }
    }
}

fn to_pixels(extent: f32) -> u32 {
    if extent.is_finite() && extent > 0.0 {
        extent.round() as u32
    } else {
        0
    }
}

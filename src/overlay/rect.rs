use nalgebra::Vector2;

use crate::annotation::NormalizedBox;

/// Pixel rectangle in TLWH form: top-left x, top-left y, width, height.
///
/// Width and height may be zero or negative when built from degenerate
/// boxes; such rectangles cover no area.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Top-left x coordinate
    pub x: f32,
    /// Top-left y coordinate
    pub y: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Rect {
    /// Create a new Rect from top-left coordinates and dimensions (TLWH format).
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a Rect from TLBR format (top-left x, top-left y, bottom-right x, bottom-right y).
    #[inline]
    pub fn from_tlbr(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
        }
    }

    /// Scale a normalized box into a surface of `width` x `height` pixels.
    pub fn from_normalized(bbox: &NormalizedBox, width: f32, height: f32) -> Self {
        let scale = Vector2::new(width, height);
        let origin = Vector2::new(bbox.left, bbox.top).component_mul(&scale);
        let size = Vector2::new(bbox.width(), bbox.height());
        let extent = size.component_mul(&scale);
        Self::new(origin.x, origin.y, extent.x, extent.y)
    }

    /// Convert to TLBR format: (x1, y1, x2, y2).
    #[inline]
    pub fn to_tlbr(&self) -> [f32; 4] {
        [self.x, self.y, self.x + self.width, self.y + self.height]
    }

    /// Same region with non-negative width and height.
    pub fn normalized(&self) -> Self {
        let [x1, y1, x2, y2] = self.to_tlbr();
        Self::from_tlbr(x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2))
    }

    /// Area in square pixels; 0 for empty rectangles.
    #[inline]
    pub fn area(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.width * self.height
        }
    }

    /// True unless both width and height are positive. Inverted and NaN
    /// extents count as empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Whether `other` lies entirely within this rectangle, edges inclusive.
    pub fn contains(&self, other: &Rect) -> bool {
        let [ax1, ay1, ax2, ay2] = self.normalized().to_tlbr();
        let [bx1, by1, bx2, by2] = other.normalized().to_tlbr();
        bx1 >= ax1 && by1 >= ay1 && bx2 <= ax2 && by2 <= ay2
    }

    /// Whether `other` touches or lies within this rectangle, edges inclusive.
    pub fn touches(&self, other: &Rect) -> bool {
        let [ax1, ay1, ax2, ay2] = self.normalized().to_tlbr();
        let [bx1, by1, bx2, by2] = other.normalized().to_tlbr();
        bx1 <= ax2 && bx2 >= ax1 && by1 <= ay2 && by2 >= ay1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(rect: Rect, expected: [f32; 4]) {
        let got = [rect.x, rect.y, rect.width, rect.height];
        for (g, e) in got.iter().zip(expected) {
            assert!((g - e).abs() < 1e-3, "{got:?} != {expected:?}");
        }
    }

    #[test]
    fn test_from_normalized() {
        let bbox = NormalizedBox::new(0.1, 0.2, 0.5, 0.6);
        let rect = Rect::from_normalized(&bbox, 1000.0, 500.0);
        assert_close(rect, [100.0, 100.0, 400.0, 200.0]);
    }

    #[test]
    fn test_from_normalized_missing_origin() {
        let bbox = NormalizedBox::new(0.0, 0.0, 0.3, 0.4);
        for (w, h) in [(640.0, 480.0), (1920.0, 1080.0)] {
            let rect = Rect::from_normalized(&bbox, w, h);
            assert_eq!(rect.x, 0.0);
            assert_eq!(rect.y, 0.0);
        }
    }

    #[test]
    fn test_degenerate_boxes_are_empty() {
        let inverted = NormalizedBox::new(0.5, 0.5, 0.2, 0.2);
        let rect = Rect::from_normalized(&inverted, 100.0, 100.0);
        assert!(rect.width < 0.0);
        assert!(rect.is_empty());
        assert_eq!(rect.area(), 0.0);

        let flat = NormalizedBox::new(0.1, 0.1, 0.1, 0.9);
        assert!(Rect::from_normalized(&flat, 100.0, 100.0).is_empty());

        let half_inverted = Rect::new(0.0, 0.0, 10.0, -5.0);
        assert!(half_inverted.is_empty());
        assert!(Rect::new(0.0, 0.0, f32::NAN, 5.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn test_normalized() {
        let rect = Rect::new(50.0, 50.0, -30.0, -30.0);
        assert_close(rect.normalized(), [20.0, 20.0, 30.0, 30.0]);
    }

    #[test]
    fn test_from_tlbr() {
        let rect = Rect::from_tlbr(10.0, 20.0, 40.0, 60.0);
        assert_eq!(rect, Rect::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(rect.to_tlbr(), [10.0, 20.0, 40.0, 60.0]);
    }

    #[test]
    fn test_touches() {
        let surface = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(surface.touches(&Rect::new(10.0, 10.0, 5.0, 5.0)));
        assert!(surface.touches(&Rect::new(100.0, 50.0, 0.0, 0.0)));
        assert!(surface.touches(&Rect::new(90.0, 40.0, 30.0, 30.0)));
        assert!(!surface.touches(&Rect::new(101.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_contains() {
        let surface = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(surface.contains(&surface));
        assert!(surface.contains(&Rect::new(10.0, 10.0, 5.0, 5.0)));
        assert!(!surface.contains(&Rect::new(90.0, 40.0, 30.0, 30.0)));
        assert!(!Rect::new(10.0, 10.0, 5.0, 5.0).contains(&surface));
    }
}

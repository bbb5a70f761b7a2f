use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle `size` wide/tall whose bottom edge is centred on `bottom_center`.
    #[inline]
    pub fn from_bottom_center(bottom_center: Vec2, size: Vec2) -> Self {
        Rect::new(
            bottom_center.x - size.x * 0.5,
            bottom_center.y - size.y,
            size.x,
            size.y,
        )
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_height() {
        let rect = r(0.0, 10.0, 5.0, -3.0);
        let n = rect.normalized();
        assert_eq!(n.origin.y, 7.0);
        assert_eq!(n.size.y, 3.0);
    }

    // ── from_bottom_center ────────────────────────────────────────────────

    #[test]
    fn bottom_center_anchors_bottom_edge() {
        let rect = Rect::from_bottom_center(Vec2::new(100.0, 300.0), Vec2::new(80.0, 50.0));
        assert_eq!(rect, r(60.0, 250.0, 80.0, 50.0));
        assert_eq!(rect.max(), Vec2::new(140.0, 300.0));
    }

    #[test]
    fn zero_height_is_empty() {
        let rect = Rect::from_bottom_center(Vec2::new(0.0, 10.0), Vec2::new(80.0, 0.0));
        assert!(rect.is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}

/// Backing stores are never scaled past 2x.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Logical size of the drawing surface plus the backing-store scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl ViewportState {
    pub fn measure(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        let css = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(MAX_PIXEL_RATIO)
        } else {
            1.0
        };
        Self {
            width: css(width),
            height: css(height),
            pixel_ratio,
        }
    }

    /// Backing-store size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio).round() as u32,
            (self.height * self.pixel_ratio).round() as u32,
        )
    }

    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }
}

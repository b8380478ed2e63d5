use crate::color::Rgba;
use crate::viewport::ViewportState;

/// Canvas compositing modes the renderer switches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blend {
    /// `source-over`
    Normal,
    /// `lighter`: overlapping dots add up.
    Additive,
}

impl Blend {
    pub fn composite_operation(self) -> &'static str {
        match self {
            Blend::Normal => "source-over",
            Blend::Additive => "lighter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba,
}

impl ColorStop {
    pub fn new(offset: f64, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// An immediate-mode 2D drawing target. Coordinates are CSS pixels once
/// `apply_viewport` has installed the pixel-ratio transform.
pub trait Surface {
    /// Size of the element the surface should fill, in CSS pixels.
    fn container_size(&self) -> (f64, f64);

    fn device_pixel_ratio(&self) -> f64;

    /// Resize the backing store and install the pixel-ratio transform.
    fn apply_viewport(&mut self, viewport: &ViewportState);

    fn set_blend(&mut self, blend: Blend);

    fn set_alpha(&mut self, alpha: f64);

    /// A zero blur disables the shadow.
    fn set_shadow(&mut self, blur: f64, color: Rgba);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba);

    /// Fill a rectangle with a gradient running from its top edge (offset 0)
    /// to its bottom edge (offset 1).
    fn fill_vertical_gradient(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        stops: &[ColorStop],
    );

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba);
}

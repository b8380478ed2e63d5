//! Per-point math for the dot field: grid coverage, wave displacement, the
//! two fixed rotations, perspective projection and the depth-driven styling.
//!
//! Everything here is a pure function of (config, viewport, point, time).

use crate::color::Rgb;
use crate::config::RenderConfig;
use crate::viewport::ViewportState;

/// Extra grid cells beyond the visible area, in each direction.
pub const MARGIN_CELLS: i32 = 10;
/// Vertical origin of the grid, as a fraction of viewport height.
pub const HORIZON_RATIO: f64 = 0.72;
/// Rotation about the horizontal axis.
pub const TILT_DEGREES: f64 = 66.0;
/// Rotation in the screen plane.
pub const ROLL_DEGREES: f64 = 10.0;
/// Distance pushed along the depth axis before projecting.
pub const CAMERA_OFFSET: f64 = 1200.0;
pub const FOCAL_LENGTH: f64 = 900.0;
/// Points whose depth falls below this are behind the camera.
pub const NEAR_CLIP: f64 = 1.0;

pub const MIN_DOT_RADIUS: f64 = 1.0;

/// Half-extent of the `(ix, iy)` iteration; points run over
/// `-cols..=cols` by `-rows..=rows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub cols: i32,
    pub rows: i32,
}

impl GridBounds {
    pub fn covering(viewport: &ViewportState, spacing: f64) -> Self {
        let cells = |extent: f64| {
            let n = (extent / spacing).ceil();
            let n = if n.is_finite() { n.max(0.0) as i32 } else { 0 };
            n.saturating_add(MARGIN_CELLS).max(1)
        };
        Self {
            cols: cells(viewport.width),
            rows: cells(viewport.height),
        }
    }

    /// `(2 * cols + 1) * (2 * rows + 1)`; fits in a `u64` for any `i32` extents.
    pub fn point_count(&self) -> u64 {
        let span = |n: i32| 2 * u64::from(n.max(0).unsigned_abs()) + 1;
        span(self.cols) * span(self.rows)
    }

    /// Row-major iteration over every grid point.
    pub fn points(&self) -> impl Iterator<Item = (i32, i32)> {
        let (cols, rows) = (self.cols, self.rows);
        (-rows..=rows).flat_map(move |iy| (-cols..=cols).map(move |ix| (ix, iy)))
    }
}

/// Wave displacement along the depth axis at wave time `t` (seconds already
/// scaled by the speed multiplier).
pub fn wave_height(ix: i32, iy: i32, t: f64, amplitude: f64) -> f64 {
    let ix = f64::from(ix);
    let iy = f64::from(iy);
    (ix * 0.14 + t * 1.2).sin() * amplitude + (iy * 0.18 - t * 0.9).cos() * amplitude * 0.8
}

/// A grid point after both rotations, before projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotated {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

pub fn rotate(x: f64, y: f64, z: f64) -> Rotated {
    let (sin_tilt, cos_tilt) = TILT_DEGREES.to_radians().sin_cos();
    let y1 = y * cos_tilt + z * sin_tilt;
    let z1 = -y * sin_tilt + z * cos_tilt;

    let (sin_roll, cos_roll) = ROLL_DEGREES.to_radians().sin_cos();
    Rotated {
        x: x * cos_roll - y1 * sin_roll,
        y: x * sin_roll + y1 * cos_roll,
        z: z1,
    }
}

/// Screen-space position of a rotated point, or `None` when it sits behind
/// the camera.
pub fn project(point: Rotated, center_x: f64, horizon_y: f64) -> Option<(f64, f64)> {
    let depth = point.z + CAMERA_OFFSET;
    if depth.is_nan() || depth <= NEAR_CLIP {
        return None;
    }
    let scale = FOCAL_LENGTH / depth;
    Some((center_x + point.x * scale, horizon_y + point.y * scale))
}

/// How close a point is to the camera, in [0, 1]. Closer is larger.
pub fn nearness(z: f64, amplitude: f64) -> f64 {
    let reach = CAMERA_OFFSET + amplitude;
    let n = (reach - z) / reach;
    if n.is_nan() {
        0.0
    } else {
        n.clamp(0.0, 1.0)
    }
}

pub fn dot_radius(nearness: f64) -> f64 {
    (1.3 + 2.2 * nearness).max(MIN_DOT_RADIUS)
}

/// Weight of the near color in the far-to-near mix.
pub fn color_weight(nearness: f64) -> f64 {
    0.15 + 0.85 * nearness
}

pub fn dot_color(config: &RenderConfig, nearness: f64) -> Rgb {
    config
        .far_color()
        .lerp(config.near_color(), color_weight(nearness))
}

/// Opacity of a dot: brighter when near, fogged out above the horizon band.
pub fn dot_alpha(screen_y: f64, horizon_y: f64, nearness: f64) -> f64 {
    let fog = if horizon_y > 0.0 {
        (screen_y / horizon_y).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let fog = if fog.is_nan() { 0.0 } else { fog };
    ((0.35 + 0.65 * nearness) * (0.2 + 0.8 * fog)).clamp(0.0, 1.0)
}

/// Everything needed to paint one dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgb,
    pub alpha: f64,
    pub nearness: f64,
}

/// Computes the dot for grid point `(ix, iy)` at wave time `t`.
pub fn sample_dot(
    config: &RenderConfig,
    viewport: &ViewportState,
    bounds: &GridBounds,
    (ix, iy): (i32, i32),
    t: f64,
) -> Option<Dot> {
    let spacing = config.spacing();
    let amplitude = config.amplitude();

    let x = (f64::from(ix) - f64::from(bounds.cols) / 2.0) * spacing;
    let y = (f64::from(iy) - f64::from(bounds.rows) / 2.0) * spacing;
    let z = wave_height(ix, iy, t, amplitude);

    let rotated = rotate(x, y, z);
    let horizon_y = viewport.height * HORIZON_RATIO;
    let (sx, sy) = project(rotated, viewport.center_x(), horizon_y)?;

    let near = nearness(rotated.z, amplitude);
    Some(Dot {
        x: sx,
        y: sy,
        radius: dot_radius(near),
        color: dot_color(config, near),
        alpha: dot_alpha(sy, horizon_y, near),
        nearness: near,
    })
}

/// Converts a frame-clock reading into wave time.
pub fn wave_time(elapsed_ms: f64, speed: f64) -> f64 {
    (elapsed_ms.max(0.0) / 1000.0) * speed
}

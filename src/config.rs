use serde::Deserialize;

use crate::color::Rgb;
use crate::error::DotFieldError;

pub const DEFAULT_SPACING: f64 = 22.0;
/// Smallest accepted dot spacing, in CSS pixels. Keeps the per-frame dot
/// count bounded by the viewport area.
pub const MIN_SPACING: f64 = 4.0;
pub const DEFAULT_AMPLITUDE: f64 = 26.0;
pub const DEFAULT_SPEED: f64 = 0.9;
pub const DEFAULT_NEAR_COLOR: Rgb = Rgb::new(0xff, 0x4b, 0x6e);
pub const DEFAULT_FAR_COLOR: Rgb = Rgb::new(0x8c, 0x0f, 0x2e);
pub const DEFAULT_BACKDROP: Rgb = Rgb::new(0x07, 0x06, 0x0a);

/// Fixed parameters of one dot field. Built once; changing anything means
/// building a new animator.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    spacing: f64,
    amplitude: f64,
    speed: f64,
    near: Rgb,
    far: Rgb,
    backdrop: Rgb,
}

impl RenderConfig {
    /// Distance between neighbouring dots, in CSS pixels. Always >= [`MIN_SPACING`].
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Peak wave displacement, in CSS pixels. Always >= 0.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn near_color(&self) -> Rgb {
        self.near
    }

    pub fn far_color(&self) -> Rgb {
        self.far
    }

    pub fn backdrop(&self) -> Rgb {
        self.backdrop
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            amplitude: DEFAULT_AMPLITUDE,
            speed: DEFAULT_SPEED,
            near: DEFAULT_NEAR_COLOR,
            far: DEFAULT_FAR_COLOR,
            backdrop: DEFAULT_BACKDROP,
        }
    }
}

/// Partially specified settings, as handed over from JavaScript.
/// Missing fields take the defaults above.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    pub spacing: Option<f64>,
    pub amplitude: Option<f64>,
    pub speed: Option<f64>,
    pub near_color: Option<String>,
    pub far_color: Option<String>,
    #[serde(alias = "backdrop")]
    pub background_color: Option<String>,
}

impl TryFrom<RenderOptions> for RenderConfig {
    type Error = DotFieldError;

    fn try_from(options: RenderOptions) -> Result<Self, Self::Error> {
        let spacing = options.spacing.unwrap_or(DEFAULT_SPACING);
        if !spacing.is_finite() || spacing < MIN_SPACING {
            return Err(DotFieldError::InvalidSpacing(spacing));
        }
        let amplitude = options.amplitude.unwrap_or(DEFAULT_AMPLITUDE);
        if !amplitude.is_finite() || amplitude < 0.0 {
            return Err(DotFieldError::InvalidAmplitude(amplitude));
        }
        let speed = options.speed.unwrap_or(DEFAULT_SPEED);
        if !speed.is_finite() {
            return Err(DotFieldError::InvalidSpeed(speed));
        }

        let color = |value: Option<&str>, fallback: Rgb| match value {
            Some(hex) => Rgb::from_hex(hex),
            None => Ok(fallback),
        };

        Ok(Self {
            spacing,
            amplitude,
            speed,
            near: color(options.near_color.as_deref(), DEFAULT_NEAR_COLOR)?,
            far: color(options.far_color.as_deref(), DEFAULT_FAR_COLOR)?,
            backdrop: color(options.background_color.as_deref(), DEFAULT_BACKDROP)?,
        })
    }
}

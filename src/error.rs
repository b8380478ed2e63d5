use thiserror::Error;

/// Everything that can go wrong while setting up a dot field.
///
/// None of these ever reach the page: the browser entry point logs them and
/// either falls back to defaults or hands back an inert handle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DotFieldError {
    #[error("drawing surface does not provide a 2d context")]
    ContextUnavailable,

    #[error("invalid hex color {value:?}")]
    InvalidColor { value: String },

    #[error("dot spacing must be a finite number of at least 4px, got {0}")]
    InvalidSpacing(f64),

    #[error("wave amplitude must be a non-negative finite number, got {0}")]
    InvalidAmplitude(f64),

    #[error("speed multiplier must be finite, got {0}")]
    InvalidSpeed(f64),

    #[error("could not read render options: {0}")]
    InvalidOptions(String),
}

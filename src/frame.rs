use crate::color::{Rgb, Rgba};
use crate::config::RenderConfig;
use crate::field::{sample_dot, GridBounds};
use crate::surface::{Blend, ColorStop, Surface};
use crate::viewport::ViewportState;

/// Where the top fade reaches full transparency.
pub const TOP_FADE_END: f64 = 0.35;
/// Where the bottom fade starts.
pub const BOTTOM_FADE_START: f64 = 0.55;
pub const GLOW_BLUR: f64 = 8.0;
pub const GLOW_ALPHA: f64 = 0.6;
/// Neon glow behind every dot, independent of the dot colors.
pub const GLOW_TINT: Rgb = Rgb::new(0xff, 0x3c, 0x64);

/// Paint one complete frame at wave time `t`. Returns the number of dots drawn.
pub fn paint_frame<S: Surface>(
    surface: &mut S,
    config: &RenderConfig,
    viewport: &ViewportState,
    t: f64,
) -> usize {
    let (width, height) = (viewport.width, viewport.height);
    let backdrop = config.backdrop();

    surface.set_blend(Blend::Normal);
    surface.set_alpha(1.0);
    surface.set_shadow(0.0, Rgba::TRANSPARENT);
    surface.fill_rect(0.0, 0.0, width, height, backdrop.opaque());
    surface.fill_vertical_gradient(
        0.0,
        0.0,
        width,
        height,
        &[
            ColorStop::new(0.0, backdrop.opaque()),
            ColorStop::new(TOP_FADE_END, backdrop.with_alpha(0.0)),
        ],
    );

    let bounds = GridBounds::covering(viewport, config.spacing());
    surface.set_blend(Blend::Additive);
    surface.set_shadow(GLOW_BLUR, GLOW_TINT.with_alpha(GLOW_ALPHA));

    let mut drawn = 0;
    for point in bounds.points() {
        let Some(dot) = sample_dot(config, viewport, &bounds, point, t) else {
            continue;
        };
        surface.set_alpha(dot.alpha);
        surface.fill_circle(dot.x, dot.y, dot.radius, dot.color.opaque());
        drawn += 1;
    }

    surface.set_blend(Blend::Normal);
    surface.set_alpha(1.0);
    surface.set_shadow(0.0, Rgba::TRANSPARENT);
    surface.fill_vertical_gradient(
        0.0,
        0.0,
        width,
        height,
        &[
            ColorStop::new(BOTTOM_FADE_START, backdrop.with_alpha(0.0)),
            ColorStop::new(1.0, backdrop.opaque()),
        ],
    );

    drawn
}

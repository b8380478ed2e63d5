use crate::config::RenderConfig;
use crate::error::DotFieldError;
use crate::field::wave_time;
use crate::frame::paint_frame;
use crate::surface::Surface;
use crate::viewport::ViewportState;

/// The platform services an animator needs besides its drawing surface:
/// a per-frame scheduler, resize notifications and the reduced-motion query.
///
/// The host calls back into the animator itself ([`Animator::frame`] and
/// [`Animator::resize`]); these methods only manage the subscriptions.
pub trait Host {
    type FrameId: Copy;

    /// Ask for one `frame` callback before the next repaint. `None` if the
    /// platform refused.
    fn request_frame(&mut self) -> Option<Self::FrameId>;

    fn cancel_frame(&mut self, id: Self::FrameId);

    fn attach_resize(&mut self);

    fn detach_resize(&mut self);

    fn prefers_reduced_motion(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Running,
    Disposed,
}

/// Owns a surface and paints one dot-field frame per host tick.
pub struct Animator<S: Surface, H: Host> {
    surface: S,
    host: H,
    config: RenderConfig,
    viewport: ViewportState,
    lifecycle: Lifecycle,
    reduced_motion: bool,
    pending: Option<H::FrameId>,
    epoch_ms: Option<f64>,
    frames_painted: u64,
    last_dot_count: usize,
}

impl<S: Surface, H: Host> Animator<S, H> {
    /// Start animating immediately.
    ///
    /// With reduced motion one static frame is painted before returning and
    /// no frame is ever requested; otherwise the first frame is requested.
    pub fn start(mut surface: S, mut host: H, config: RenderConfig) -> Self {
        let reduced_motion = host.prefers_reduced_motion();
        let (width, height) = surface.container_size();
        let viewport = ViewportState::measure(width, height, surface.device_pixel_ratio());
        surface.apply_viewport(&viewport);
        host.attach_resize();

        log::debug!(
            "dot field started at {}x{} @{}x, reduced motion: {}",
            viewport.width,
            viewport.height,
            viewport.pixel_ratio,
            reduced_motion
        );

        let mut animator = Self {
            surface,
            host,
            config,
            viewport,
            lifecycle: Lifecycle::Running,
            reduced_motion,
            pending: None,
            epoch_ms: None,
            frames_painted: 0,
            last_dot_count: 0,
        };
        if reduced_motion {
            animator.paint(0.0);
        } else {
            animator.schedule();
        }
        animator
    }

    /// Frame callback. `now_ms` is the host's frame timestamp; the first one
    /// seen becomes the clock's epoch.
    pub fn frame(&mut self, now_ms: f64) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        self.pending = None;
        self.sync_viewport();

        let t = if self.reduced_motion {
            0.0
        } else {
            let epoch = *self.epoch_ms.get_or_insert(now_ms);
            wave_time(now_ms - epoch, self.config.speed())
        };
        self.paint(t);

        if !self.reduced_motion {
            self.schedule();
        }
    }

    /// Resize callback. Re-measures straight away so the next frame never
    /// paints with a stale size; a static field is repainted here since no
    /// frame will follow.
    pub fn resize(&mut self) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        if self.sync_viewport() && self.reduced_motion {
            self.paint(0.0);
        }
    }

    /// Stop painting for good. Safe to call any number of times.
    pub fn dispose(&mut self) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        self.lifecycle = Lifecycle::Disposed;
        if let Some(id) = self.pending.take() {
            self.host.cancel_frame(id);
        }
        self.host.detach_resize();
        log::debug!("dot field disposed after {} frames", self.frames_painted);
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    /// True when reduced motion froze the field on a single frame.
    pub fn is_static(&self) -> bool {
        self.reduced_motion
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn frames_painted(&self) -> u64 {
        self.frames_painted
    }

    /// Dots drawn by the most recent frame.
    pub fn last_dot_count(&self) -> usize {
        self.last_dot_count
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    fn sync_viewport(&mut self) -> bool {
        let (width, height) = self.surface.container_size();
        let next = ViewportState::measure(width, height, self.surface.device_pixel_ratio());
        if next == self.viewport {
            return false;
        }
        log::debug!("dot field resized to {}x{}", next.width, next.height);
        self.viewport = next;
        self.surface.apply_viewport(&next);
        true
    }

    fn paint(&mut self, t: f64) {
        self.last_dot_count = paint_frame(&mut self.surface, &self.config, &self.viewport, t);
        self.frames_painted += 1;
    }

    fn schedule(&mut self) {
        self.pending = self.host.request_frame();
        if self.pending.is_none() {
            log::warn!("host refused to schedule a frame; dot field stops here");
        }
    }
}

impl<S: Surface, H: Host> Drop for Animator<S, H> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// What `create` hands back: a running animator, or an inert placeholder when
/// the surface had no 2D context. Every method is a no-op on an inert handle.
pub struct AnimatorHandle<S: Surface, H: Host> {
    animator: Option<Animator<S, H>>,
}

impl<S: Surface, H: Host> AnimatorHandle<S, H> {
    pub fn create(surface: Result<S, DotFieldError>, host: H, config: RenderConfig) -> Self {
        match surface {
            Ok(surface) => Self {
                animator: Some(Animator::start(surface, host, config)),
            },
            Err(err) => {
                log::debug!("dot field left inert: {err}");
                Self::inert()
            }
        }
    }

    pub fn inert() -> Self {
        Self { animator: None }
    }

    pub fn is_inert(&self) -> bool {
        self.animator.is_none()
    }

    pub fn is_running(&self) -> bool {
        self.animator.as_ref().is_some_and(Animator::is_running)
    }

    pub fn frame(&mut self, now_ms: f64) {
        if let Some(animator) = self.animator.as_mut() {
            animator.frame(now_ms);
        }
    }

    pub fn resize(&mut self) {
        if let Some(animator) = self.animator.as_mut() {
            animator.resize();
        }
    }

    pub fn dispose(&mut self) {
        if let Some(animator) = self.animator.as_mut() {
            animator.dispose();
        }
    }

    pub fn animator(&self) -> Option<&Animator<S, H>> {
        self.animator.as_ref()
    }
}

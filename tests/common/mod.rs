#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dotfield_wasm::{Blend, ColorStop, Host, Rgba, Surface, ViewportState};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Viewport(ViewportState),
    Blend(Blend),
    Alpha(f64),
    Shadow(f64, Rgba),
    Rect { x: f64, y: f64, w: f64, h: f64, color: Rgba },
    Gradient { x: f64, y: f64, w: f64, h: f64, stops: Vec<ColorStop> },
    Circle { x: f64, y: f64, r: f64, color: Rgba },
}

/// Records every drawing call. The container size is shared so tests can
/// "resize the page" while the animator owns the surface.
pub struct RecordingSurface {
    pub size: Rc<Cell<(f64, f64)>>,
    pub dpr: f64,
    pub ops: Rc<RefCell<Vec<Op>>>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Rc::new(Cell::new((width, height))),
            dpr: 1.0,
            ops: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl Surface for RecordingSurface {
    fn container_size(&self) -> (f64, f64) {
        self.size.get()
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.dpr
    }

    fn apply_viewport(&mut self, viewport: &ViewportState) {
        self.ops.borrow_mut().push(Op::Viewport(*viewport));
    }

    fn set_blend(&mut self, blend: Blend) {
        self.ops.borrow_mut().push(Op::Blend(blend));
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.ops.borrow_mut().push(Op::Alpha(alpha));
    }

    fn set_shadow(&mut self, blur: f64, color: Rgba) {
        self.ops.borrow_mut().push(Op::Shadow(blur, color));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        self.ops.borrow_mut().push(Op::Rect { x, y, w, h, color });
    }

    fn fill_vertical_gradient(&mut self, x: f64, y: f64, w: f64, h: f64, stops: &[ColorStop]) {
        self.ops.borrow_mut().push(Op::Gradient {
            x,
            y,
            w,
            h,
            stops: stops.to_vec(),
        });
    }

    fn fill_circle(&mut self, x: f64, y: f64, r: f64, color: Rgba) {
        self.ops.borrow_mut().push(Op::Circle { x, y, r, color });
    }
}

/// Counters shared between a [`SpyHost`] and the test body.
#[derive(Debug, Default)]
pub struct HostLog {
    pub requested: Cell<u32>,
    pub cancelled: RefCell<Vec<u32>>,
    pub attaches: Cell<u32>,
    pub detaches: Cell<u32>,
    pub refuse_frames: Cell<bool>,
}

impl HostLog {
    pub fn resize_attached(&self) -> bool {
        self.attaches.get() > self.detaches.get()
    }
}

pub struct SpyHost {
    pub reduced_motion: bool,
    pub log: Rc<HostLog>,
}

impl SpyHost {
    pub fn new(reduced_motion: bool) -> (Self, Rc<HostLog>) {
        let log = Rc::new(HostLog::default());
        (
            Self {
                reduced_motion,
                log: Rc::clone(&log),
            },
            log,
        )
    }
}

impl Host for SpyHost {
    type FrameId = u32;

    fn request_frame(&mut self) -> Option<u32> {
        if self.log.refuse_frames.get() {
            return None;
        }
        let id = self.log.requested.get() + 1;
        self.log.requested.set(id);
        Some(id)
    }

    fn cancel_frame(&mut self, id: u32) {
        self.log.cancelled.borrow_mut().push(id);
    }

    fn attach_resize(&mut self) {
        self.log.attaches.set(self.log.attaches.get() + 1);
    }

    fn detach_resize(&mut self) {
        self.log.detaches.set(self.log.detaches.get() + 1);
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

pub fn circles(ops: &[Op]) -> u64 {
    ops.iter().filter(|op| matches!(op, Op::Circle { .. })).count() as u64
}

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

use super::canvas::CanvasSurface;
use crate::animator::{AnimatorHandle, Host};
use crate::config::{RenderConfig, RenderOptions};
use crate::error::DotFieldError;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

type Handle = AnimatorHandle<CanvasSurface, BrowserHost>;

/// `requestAnimationFrame`, window `resize` and `matchMedia` behind [`Host`].
///
/// The closures only hold a weak reference to the handle that owns this
/// host, so host and handle never keep each other alive.
pub struct BrowserHost {
    window: Window,
    on_frame: Closure<dyn FnMut(f64)>,
    on_resize: Closure<dyn FnMut()>,
    resize_attached: bool,
}

impl BrowserHost {
    fn new(window: Window, handle: Weak<RefCell<Handle>>) -> Self {
        let on_frame = {
            let handle = handle.clone();
            Closure::wrap(Box::new(move |now: f64| {
                if let Some(handle) = handle.upgrade() {
                    if let Ok(mut handle) = handle.try_borrow_mut() {
                        handle.frame(now);
                    }
                }
            }) as Box<dyn FnMut(f64)>)
        };
        let on_resize = Closure::wrap(Box::new(move || {
            if let Some(handle) = handle.upgrade() {
                if let Ok(mut handle) = handle.try_borrow_mut() {
                    handle.resize();
                }
            }
        }) as Box<dyn FnMut()>);

        Self {
            window,
            on_frame,
            on_resize,
            resize_attached: false,
        }
    }
}

impl Host for BrowserHost {
    type FrameId = i32;

    fn request_frame(&mut self) -> Option<i32> {
        match self
            .window
            .request_animation_frame(self.on_frame.as_ref().unchecked_ref())
        {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, id: i32) {
        if let Err(e) = self.window.cancel_animation_frame(id) {
            log::warn!("cancelAnimationFrame failed: {:?}", e);
        }
    }

    fn attach_resize(&mut self) {
        if self.resize_attached {
            return;
        }
        match self
            .window
            .add_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
        {
            Ok(()) => self.resize_attached = true,
            Err(e) => log::warn!("could not listen for resize: {:?}", e),
        }
    }

    fn detach_resize(&mut self) {
        if !self.resize_attached {
            return;
        }
        self.resize_attached = false;
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
        {
            log::warn!("could not remove resize listener: {:?}", e);
        }
    }

    fn prefers_reduced_motion(&self) -> bool {
        match self.window.match_media(REDUCED_MOTION_QUERY) {
            Ok(Some(query)) => query.matches(),
            _ => false,
        }
    }
}

/// Animated dot-field background bound to one canvas.
///
/// ```js
/// const field = new DotField(canvas, { spacing: 24, nearColor: "#ff4b6e" });
/// // later
/// field.dispose();
/// ```
#[wasm_bindgen]
pub struct DotField {
    handle: Rc<RefCell<Handle>>,
}

#[wasm_bindgen]
impl DotField {
    /// Starts animating right away. Never throws: bad options fall back to
    /// the defaults and a canvas without a 2d context gives an inert field.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, options: JsValue) -> DotField {
        let config = read_config(options);
        let handle = Rc::new(RefCell::new(Handle::inert()));

        let Some(window) = web_sys::window() else {
            log::debug!("no window; dot field left inert");
            return DotField { handle };
        };
        let host = BrowserHost::new(window.clone(), Rc::downgrade(&handle));
        let started = Handle::create(CanvasSurface::new(window, canvas), host, config);
        *handle.borrow_mut() = started;

        DotField { handle }
    }

    /// Stops the frame loop and removes the resize listener. Idempotent.
    pub fn dispose(&self) {
        let mut retired = match self.handle.try_borrow_mut() {
            Ok(mut handle) => std::mem::replace(&mut *handle, Handle::inert()),
            Err(_) => {
                log::warn!("dot field is mid-frame; dispose skipped");
                return;
            }
        };
        retired.dispose();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.handle
            .try_borrow()
            .is_ok_and(|handle| handle.is_running())
    }
}

impl Drop for DotField {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn read_config(options: JsValue) -> RenderConfig {
    if options.is_undefined() || options.is_null() {
        return RenderConfig::default();
    }
    serde_wasm_bindgen::from_value::<RenderOptions>(options)
        .map_err(|e| DotFieldError::InvalidOptions(e.to_string()))
        .and_then(RenderConfig::try_from)
        .unwrap_or_else(|err| {
            log::warn!("{err}; using default dot field settings");
            RenderConfig::default()
        })
}

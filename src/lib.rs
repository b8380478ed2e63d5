//! Perspective dot-field background: a wave-displaced grid of glowing dots,
//! tilted into a ground plane and painted onto a 2D canvas every frame.
//!
//! The math, colors, config and lifecycle are plain Rust and run anywhere;
//! the browser bindings live behind `target_arch = "wasm32"`.

pub mod animator;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod frame;
pub mod surface;
pub mod viewport;

pub use animator::{Animator, AnimatorHandle, Host, Lifecycle};
pub use color::{Rgb, Rgba};
pub use config::{RenderConfig, RenderOptions};
pub use error::DotFieldError;
pub use surface::{Blend, ColorStop, Surface};
pub use viewport::ViewportState;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    mod browser;
    mod canvas;

    pub use browser::DotField;

    /// Canvas picked up automatically when the module loads.
    const AUTO_MOUNT_ID: &str = "dot-field";

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(element) = document.get_element_by_id(AUTO_MOUNT_ID) else {
            return;
        };
        match element.dyn_into::<web_sys::HtmlCanvasElement>() {
            Ok(canvas) => {
                // Lives as long as the page.
                std::mem::forget(DotField::new(canvas, JsValue::UNDEFINED));
            }
            Err(_) => log::warn!("#{AUTO_MOUNT_ID} is not a canvas; nothing mounted"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::DotField;

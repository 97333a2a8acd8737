#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Ambient particle field and one-shot celebration burst for the
//! inauguration page, plus the timed hand-over to the video.
//!
//! The engine modules are target-independent and draw through
//! [`surface::Surface`]; the browser wiring lives in `wasm`.

pub mod ambient;
pub mod celebration;
pub mod chime;
pub mod choreography;
pub mod config;
pub mod error;
pub mod palette;
pub mod stage;
pub mod surface;
pub mod timeline;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::config::Config;
    use crate::error::SetupError;
    use crate::stage::Stage;

    mod audio;
    pub mod canvas;
    mod controls;
    mod dom;
    pub mod media;
    mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or(SetupError::NoWindow)?;
        let document = window.document().ok_or(SetupError::NoDocument)?;

        let ambient = canvas::CanvasSurface::new(dom::canvas(&document, dom::PARTICLE_CANVAS)?)?;
        let celebration =
            canvas::CanvasSurface::new(dom::canvas(&document, dom::CELEBRATION_CANVAS)?)?;
        let page = Rc::new(dom::Page::find(&document)?);

        let (w, h) = dom::viewport(&window);
        ambient.fit(w, h);
        celebration.fit(w, h);

        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let stage = Rc::new(RefCell::new(Stage::new(Config::default(), w, h, seed)));

        media::install_fallback(&document, &page.video)?;
        controls::install(&window, &document, page.clone(), stage.clone())?;
        render::start(window, stage, ambient, celebration, page)?;

        log::info!("page ready at {w}x{h}");
        Ok(())
    }
}

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlCanvasElement, HtmlElement, HtmlVideoElement, Window};

use crate::error::SetupError;

pub const PARTICLE_CANVAS: &str = "particle-canvas";
pub const CELEBRATION_CANVAS: &str = "celebration-canvas";
pub const TRIGGER: &str = "inaugurate-btn";
pub const MAIN: &str = "main-container";
pub const VIDEO_SECTION: &str = "video-section";
pub const VIDEO: &str = "inauguration-video";
pub const VIDEO_CONTAINER: &str = ".video-container";

/// The elements the transition touches.
pub struct Page {
    pub button: HtmlButtonElement,
    pub main: HtmlElement,
    pub video_section: HtmlElement,
    pub video: HtmlVideoElement,
}

impl Page {
    pub fn find(document: &Document) -> Result<Self, SetupError> {
        Ok(Self {
            button: element(document, TRIGGER, "HtmlButtonElement")?,
            main: element(document, MAIN, "HtmlElement")?,
            video_section: element(document, VIDEO_SECTION, "HtmlElement")?,
            video: element(document, VIDEO, "HtmlVideoElement")?,
        })
    }
}

pub fn element<T: JsCast>(
    document: &Document,
    id: &'static str,
    expected: &'static str,
) -> Result<T, SetupError> {
    document
        .get_element_by_id(id)
        .ok_or(SetupError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| SetupError::WrongElement { id, expected })
}

pub fn canvas(document: &Document, id: &'static str) -> Result<HtmlCanvasElement, SetupError> {
    element(document, id, "HtmlCanvasElement")
}

/// Inner size of the window, or zero when the host refuses to say.
pub fn viewport(window: &Window) -> (f64, f64) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

pub fn now(window: &Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0)
}

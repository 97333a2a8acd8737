use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlVideoElement};

use super::dom::VIDEO_CONTAINER;

const FALLBACK_STYLE: &str = "position: absolute; top: 50%; left: 50%; \
    transform: translate(-50%, -50%); text-align: center; color: #D4AF37; \
    font-family: 'Playfair Display', serif; padding: 40px; \
    background: rgba(0, 0, 0, 0.8); border-radius: 20px; border: 2px solid #D4AF37;";

const FALLBACK_HTML: &str = r#"
    <h2 style="font-size: 2rem; margin-bottom: 20px;">Fathia Surah</h2>
    <p style="font-size: 1.1rem; opacity: 0.8;">Please add your fathia.mp4 video file to the assets folder</p>
    <p style="font-size: 0.9rem; margin-top: 15px; opacity: 0.6;">بِسْمِ اللهِ الرَّحْمٰنِ الرَّحِيْمِ</p>
"#;

/// Request playback; a rejected promise (autoplay policy) is only logged.
pub fn play(video: &HtmlVideoElement) {
    let promise = match video.play() {
        Ok(p) => p,
        Err(e) => {
            log::warn!("video play failed: {e:?}");
            return;
        }
    };
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("video autoplay blocked: {e:?}");
        }
    });
}

/// Show a static panel over the video container when the video fails to load.
///
/// The video starts loading while the page parses, so it may already have
/// failed by the time this runs; in that case the panel is shown right away.
pub fn install_fallback(document: &Document, video: &HtmlVideoElement) -> Result<(), JsValue> {
    let shown = Rc::new(Cell::new(false));
    let on_error = {
        let document = document.clone();
        let shown = shown.clone();
        Closure::wrap(Box::new(move || show_once(&document, &shown)) as Box<dyn FnMut()>)
    };
    video.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())?;
    on_error.forget();

    if video.error().is_some() {
        show_once(document, &shown);
    }
    Ok(())
}

fn show_once(document: &Document, shown: &Cell<bool>) {
    if shown.replace(true) {
        return;
    }
    log::warn!("video failed to load, showing fallback");
    if let Err(e) = append_fallback(document) {
        log::error!("fallback panel: {e:?}");
    }
}

fn append_fallback(document: &Document) -> Result<(), JsValue> {
    let container = document
        .query_selector(VIDEO_CONTAINER)?
        .ok_or("video container not found")?;
    let panel = document.create_element("div")?;
    panel.set_attribute("style", FALLBACK_STYLE)?;
    panel.set_inner_html(FALLBACK_HTML);
    container.append_child(&panel)?;
    Ok(())
}

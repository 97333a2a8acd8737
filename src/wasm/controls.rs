use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, KeyboardEvent, Node, Window};

use super::dom::{self, Page};
use super::{audio, media};
use crate::chime;
use crate::choreography::Cue;
use crate::palette;
use crate::stage::Stage;

const BUSY_LABEL: &str = "Inaugurating...";

/// Wire the trigger button: click, keyboard activation and focus ring.
pub fn install(
    window: &Window,
    document: &Document,
    page: Rc<Page>,
    stage: Rc<RefCell<Stage>>,
) -> Result<(), JsValue> {
    let on_click = {
        let window = window.clone();
        let page = page.clone();
        Closure::wrap(Box::new(move || {
            let now = dom::now(&window);
            if !stage.borrow_mut().trigger(now) {
                return;
            }
            page.button.set_disabled(true);
            page.button.set_text_content(Some(BUSY_LABEL));
            audio::play(&chime::fanfare());
        }) as Box<dyn FnMut()>)
    };
    page.button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    let on_key = {
        let document = document.clone();
        let page = page.clone();
        Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if !matches!(event.key().as_str(), "Enter" | " ") {
                return;
            }
            let button: &Node = &page.button;
            let focused = document
                .active_element()
                .is_some_and(|el| el.is_same_node(Some(button)));
            if focused {
                page.button.click();
            }
        }) as Box<dyn FnMut(KeyboardEvent)>)
    };
    document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    on_key.forget();

    let on_focus = {
        let page = page.clone();
        Closure::wrap(Box::new(move || {
            let style = page.button.style();
            let ring = format!("3px solid {}", palette::GOLD.alpha(0.5));
            style.set_property("outline", &ring).ok();
            style.set_property("outline-offset", "3px").ok();
        }) as Box<dyn FnMut()>)
    };
    page.button
        .add_event_listener_with_callback("focus", on_focus.as_ref().unchecked_ref())?;
    on_focus.forget();

    let on_blur = {
        let page = page.clone();
        Closure::wrap(Box::new(move || {
            page.button.style().set_property("outline", "none").ok();
        }) as Box<dyn FnMut()>)
    };
    page.button
        .add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref())?;
    on_blur.forget();

    Ok(())
}

/// Carry out a transition cue on the page.
pub fn apply(page: &Page, cue: Cue) {
    match cue {
        Cue::FadeOut => {
            page.main.class_list().add_1("fade-out").ok();
        }
        Cue::RevealVideo => {
            page.video_section.class_list().add_1("active").ok();
            media::play(&page.video);
        }
    }
}

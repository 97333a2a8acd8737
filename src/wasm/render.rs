use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::Window;

use super::canvas::CanvasSurface;
use super::controls;
use super::dom::{self, Page};
use crate::stage::Stage;

/// Start the frame loop and keep both canvases sized to the window.
pub fn start(
    window: Window,
    stage: Rc<RefCell<Stage>>,
    mut ambient: CanvasSurface,
    mut celebration: CanvasSurface,
    page: Rc<Page>,
) -> Result<(), JsValue> {
    let ambient_canvas = ambient.canvas().clone();
    let celebration_canvas = celebration.canvas().clone();

    let resize_closure = {
        let window = window.clone();
        let stage = stage.clone();
        Closure::wrap(Box::new(move || {
            let (w, h) = dom::viewport(&window);
            for canvas in [&ambient_canvas, &celebration_canvas] {
                canvas.set_width(w as u32);
                canvas.set_height(h as u32);
            }
            stage.borrow_mut().resize(w, h);
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    // The frame closure reschedules itself through `f`.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let frame_window = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let cues = stage.borrow_mut().tick(now, &mut ambient, &mut celebration);
        for cue in cues {
            controls::apply(&page, cue);
        }

        if let Some(next) = f.borrow().as_ref() {
            if let Err(e) = frame_window.request_animation_frame(next.as_ref().unchecked_ref()) {
                log::error!("frame loop stopped: {e:?}");
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(first) = g.borrow().as_ref() {
        window.request_animation_frame(first.as_ref().unchecked_ref())?;
    }

    Ok(())
}

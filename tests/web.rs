#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

use celebrate_wasm::config::Config;
use celebrate_wasm::stage::Stage;
use celebrate_wasm::wasm::canvas::CanvasSurface;
use celebrate_wasm::wasm::media;

wasm_bindgen_test_configure!(run_in_browser);

fn surface(width: u32, height: u32) -> CanvasSurface {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    let surface = CanvasSurface::new(canvas).expect("2d context");
    surface.fit(width as f64, height as f64);
    surface
}

fn painted(surface: &CanvasSurface) -> usize {
    let canvas = surface.canvas();
    let data = surface
        .context()
        .get_image_data(0.0, 0.0, canvas.width() as f64, canvas.height() as f64)
        .unwrap()
        .data();
    data.chunks(4).filter(|px| px[3] > 0).count()
}

#[wasm_bindgen_test]
fn canvas_is_sized() {
    let s = surface(320, 200);
    assert_eq!((s.canvas().width(), s.canvas().height()), (320, 200));
}

#[wasm_bindgen_test]
fn celebration_paints_and_ambient_keeps_drawing() {
    let mut ambient = surface(320, 200);
    let mut celebration = surface(320, 200);
    let mut stage = Stage::new(Config::default(), 320.0, 200.0, 1);

    stage.tick(0.0, &mut ambient, &mut celebration);
    assert!(painted(&ambient) > 0);
    assert_eq!(painted(&celebration), 0);

    assert!(stage.trigger(16.0));
    stage.tick(32.0, &mut ambient, &mut celebration);
    assert!(painted(&celebration) > 0);
}

#[wasm_bindgen_test]
async fn fallback_shows_for_a_video_that_failed_before_setup() {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_class_name("video-container");
    body.insert_before(&container, body.first_child().as_ref()).unwrap();

    let video = document
        .create_element("video")
        .unwrap()
        .dyn_into::<web_sys::HtmlVideoElement>()
        .unwrap();
    container.append_child(&video).unwrap();

    let failed = js_sys::Promise::new(&mut |resolve, _| {
        video.add_event_listener_with_callback("error", &resolve).unwrap();
    });
    video.set_src("no-such-video.mp4");
    JsFuture::from(failed).await.unwrap();
    assert!(video.error().is_some());

    media::install_fallback(&document, &video).unwrap();
    assert_eq!(container.child_element_count(), 2);

    // a later error event must not add a second panel
    video.dispatch_event(&web_sys::Event::new("error").unwrap()).unwrap();
    assert_eq!(container.child_element_count(), 2);
}

use js_sys::Promise;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element};

pub fn document() -> Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("tests run in a browser")
}

/// A fresh `<div>`, attached to the body.
pub fn scratch() -> Element {
    let document = document();
    let scratch = document.create_element("div").unwrap();

    document
        .body()
        .expect("document to have a body")
        .append_child(&scratch)
        .unwrap();

    scratch
}

/// Resolves on the next animation frame.
async fn next_frame() {
    let promise = Promise::new(&mut |resolve, _| {
        web_sys::window()
            .expect("tests run in a browser")
            .request_animation_frame(&resolve)
            .unwrap();
    });

    JsFuture::from(promise).await.unwrap();
}

/// Lets layout run and resize observers deliver. Observers are notified after the animation
/// frame callbacks of a frame, so waiting for the following frame covers them.
pub async fn settle() {
    next_frame().await;
    next_frame().await;
}

/// Give `element` a fixed box, so it has a size to observe.
pub fn resize(element: &Element, width: u32) {
    element
        .set_attribute("style", &format!("display: block; width: {width}px; height: 10px"))
        .unwrap();
}

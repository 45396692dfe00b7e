mod app;
mod component;
mod dom;
mod element;
mod fragment;

#[cfg(test)]
mod test_util;

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

pub use app::App;
pub use component::{Component, ComponentWrapper, Controller};
pub use dom::{EventFn, EventListener, EventType, PropertyBag, ResizeFn, ResizeWatcher};
pub use element::{ElementHost, HostInputs, LoadedFn, ManagedElement};
pub use fragment::{Dynamic, Fragment, FragmentBuilder, Location, Node, View};

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    /// The demo app mounted by [`main`], kept alive until [`unmount`] is called.
    static MOUNTED: RefCell<Option<Controller<App>>> = RefCell::new(None);
}

#[cfg(not(test))]
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    use web_sys::window;

    // Configure the panic hook to log to console.error
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    console_log::init_with_level(log::Level::Debug)
        .map_err(|error| JsValue::from_str(&error.to_string()))?;

    let window = window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("body to exist"))?;

    let mut controller = Controller::new(&document, ComponentWrapper::new(App::new()))?;
    controller.mount(&Location::parent(&body))?;

    MOUNTED.with(|mounted| mounted.replace(Some(controller)));

    Ok(())
}

/// Detach the demo app, tearing down the hosted element's listener and observer.
#[wasm_bindgen]
pub fn unmount() {
    let controller = MOUNTED.with(|mounted| mounted.borrow_mut().take());

    match controller {
        Some(mut controller) => controller.detach(true),
        None => log::warn!("nothing mounted"),
    }
}

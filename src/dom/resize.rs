use js_sys::Array;
use std::rc::Rc;
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{Element, ResizeObserver, ResizeObserverEntry};

/// Handler called with the first entry of every resize notification.
pub type ResizeFn = dyn Fn(ResizeObserverEntry);

/// A [`ResizeObserver`] watching exactly one element. Disconnected when dropped.
pub struct ResizeWatcher {
    observer: ResizeObserver,

    /// Kept alive for as long as the observer may call it.
    _callback: Closure<dyn Fn(Array)>,
}

impl ResizeWatcher {
    /// Start observing `target`, forwarding resizes to `on_resize`.
    pub fn observe(target: &Element, on_resize: Rc<ResizeFn>) -> Result<Self, JsValue> {
        let callback = Closure::<dyn Fn(Array)>::new(move |entries: Array| {
            forward_first_entry(&entries, on_resize.as_ref())
        });

        let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(target);
        log::debug!("observing <{}> for resizes", target.local_name());

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ResizeWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
        log::debug!("resize observer disconnected");
    }
}

/// Only the first entry of a batch is of interest, as a watcher observes a single element. An
/// empty batch is dropped.
fn forward_first_entry(entries: &Array, on_resize: &ResizeFn) {
    let Some(entry) = entries.iter().next() else {
        return;
    };

    on_resize(entry.unchecked_into());
}

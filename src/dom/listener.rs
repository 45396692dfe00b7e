use super::EventType;
use std::rc::Rc;
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{Event, EventTarget};

/// Handler called with every event dispatched to a listener.
pub type EventFn = dyn Fn(Event);

/// A listener registered on a single [`EventTarget`].
///
/// The [`js_sys::Function`] handed to the target is owned by the listener, so the exact same
/// function can be removed again. Removal happens when the listener is dropped.
pub struct EventListener {
    target: EventTarget,
    event_type: EventType,
    closure: Closure<dyn Fn(Event)>,
}

impl EventListener {
    /// Register `handler` for `event_type` on `target`.
    pub fn new<T>(target: &T, event_type: EventType, handler: Rc<EventFn>) -> Result<Self, JsValue>
    where
        T: AsRef<EventTarget>,
    {
        let target = target.as_ref().clone();
        let closure = Closure::<dyn Fn(Event)>::new(move |event: Event| handler(event));

        target.add_event_listener_with_callback(
            event_type.as_str(),
            closure.as_ref().unchecked_ref(),
        )?;
        log::debug!("listening for `{event_type}`");

        Ok(Self {
            target,
            event_type,
            closure,
        })
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(error) = self.target.remove_event_listener_with_callback(
            self.event_type.as_str(),
            self.closure.as_ref().unchecked_ref(),
        ) {
            log::warn!("failed to remove `{}` listener: {error:?}", self.event_type);
        }

        log::debug!("stopped listening for `{}`", self.event_type);
    }
}

use crate::dom::{EventFn, PropertyBag, ResizeFn};
use std::rc::Rc;
use web_sys::{Element, Event, ResizeObserverEntry};

/// Called once with the hosted element, after it has been attached and instrumented.
pub type LoadedFn = dyn Fn(&Element);

/// Everything an [`super::ElementHost`] is configured with.
///
/// Inputs are read once, when the host is mounted. Changing them afterwards has no effect on an
/// element that already exists.
#[derive(Clone, Default)]
pub struct HostInputs {
    /// Tag name of the custom element to create. Nothing is created when empty or absent.
    pub selector: Option<String>,

    /// Properties assigned onto the element before it is attached.
    pub props: PropertyBag,

    /// Listener for [`crate::dom::EventType::Custom`] events on the element.
    pub on_event: Option<Rc<EventFn>>,

    /// Called once, synchronously during mount, with the created element.
    ///
    /// The host is mutably borrowed while this runs, so the callback must not borrow the same
    /// [`super::ElementHost`] (for instance through [`crate::App::host`]).
    pub on_loaded: Option<Rc<LoadedFn>>,

    /// Receives the first entry of each resize notification for the element.
    pub on_resize: Option<Rc<ResizeFn>>,
}

impl HostInputs {
    pub fn new<S>(selector: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            selector: Some(selector.into()),
            ..Self::default()
        }
    }

    pub fn with_props(mut self, props: PropertyBag) -> Self {
        self.props = props;
        self
    }

    pub fn on_event<F>(mut self, on_event: F) -> Self
    where
        F: 'static + Fn(Event),
    {
        self.on_event = Some(Rc::new(on_event));
        self
    }

    pub fn on_loaded<F>(mut self, on_loaded: F) -> Self
    where
        F: 'static + Fn(&Element),
    {
        self.on_loaded = Some(Rc::new(on_loaded));
        self
    }

    pub fn on_resize<F>(mut self, on_resize: F) -> Self
    where
        F: 'static + Fn(ResizeObserverEntry),
    {
        self.on_resize = Some(Rc::new(on_resize));
        self
    }

    /// The selector, if it names anything at all.
    pub fn tag_name(&self) -> Option<&str> {
        self.selector
            .as_deref()
            .filter(|selector| !selector.is_empty())
    }
}

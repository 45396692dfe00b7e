use crate::component::{Component, ComponentWrapper};
use crate::dom::PropertyBag;
use crate::element::{ElementHost, HostInputs};
use crate::fragment::{Fragment, FragmentBuilder};

use std::{cell::RefCell, rc::Rc};
use web_sys::{Element, Event, ResizeObserverEntry};

/// Demo host: a heading followed by a `cool-counter`, with every callback logged.
pub struct App {
    host: ComponentWrapper<ElementHost>,
}

impl App {
    pub fn new() -> Self {
        let props = PropertyBag::new()
            .with("count", 5)
            .with("label", "Upvotes")
            .with("disabled", false);

        let inputs = HostInputs::new("cool-counter")
            .with_props(props)
            .on_event(handle_custom_event)
            .on_loaded(handle_load)
            .on_resize(handle_resize);

        Self {
            host: ComponentWrapper::new(ElementHost::new(inputs)),
        }
    }

    pub fn host(&self) -> Rc<RefCell<ElementHost>> {
        self.host.clone_component()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for App {
    fn render(&self) -> FragmentBuilder {
        Fragment::build()
            .with_element("h2", None)
            .with_text("Dynamic Web Component Wrapper", Some(0))
            .with_component(self.host.clone(), None)
    }
}

fn handle_custom_event(event: Event) {
    log::info!("custom event received: {}", event.type_());
}

fn handle_load(element: &Element) {
    log::info!("web component loaded: <{}>", element.local_name());
}

fn handle_resize(entry: ResizeObserverEntry) {
    let rect = entry.content_rect();
    log::info!("resize detected: {}x{}", rect.width(), rect.height());
}

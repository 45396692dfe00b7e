use super::HostInputs;
use crate::dom::{EventListener, EventType, ResizeWatcher};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::Element;

/// A custom element created by an [`super::ElementHost`], together with the registrations made on
/// it. Dropping it releases both registrations; the element itself stays where it was attached.
pub struct ManagedElement {
    element: Element,
    listener: Option<EventListener>,
    watcher: Option<ResizeWatcher>,
}

impl ManagedElement {
    /// Create the element named by `inputs`, assign its properties, append it to `container` and
    /// register the event listener and resize watcher that were asked for.
    ///
    /// Returns [`None`] without touching the DOM when there is no tag name. Any failure from the
    /// platform is returned as is, releasing whatever was registered up to that point.
    pub fn create(container: &Element, inputs: &HostInputs) -> Result<Option<Self>, JsValue> {
        let Some(tag_name) = inputs.tag_name() else {
            log::debug!("no selector supplied, nothing to create");
            return Ok(None);
        };

        let document = container
            .owner_document()
            .ok_or_else(|| JsValue::from_str("container does not belong to a document"))?;

        let element = document.create_element(tag_name)?;
        inputs.props.apply(&element)?;
        container.append_child(&element)?;

        let listener = inputs
            .on_event
            .as_ref()
            .map(|on_event| EventListener::new(&element, EventType::Custom, Rc::clone(on_event)))
            .transpose()?;

        let watcher = inputs
            .on_resize
            .as_ref()
            .map(|on_resize| ResizeWatcher::observe(&element, Rc::clone(on_resize)))
            .transpose()?;

        log::debug!(
            "created <{tag_name}> with {} properties",
            inputs.props.len()
        );

        Ok(Some(Self {
            element,
            listener,
            watcher,
        }))
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    pub fn is_observing(&self) -> bool {
        self.watcher.is_some()
    }

    /// Remove the listener, then disconnect the watcher.
    pub fn release(mut self) {
        drop(self.listener.take());
        drop(self.watcher.take());

        log::debug!("released <{}>", self.element.local_name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::PropertyBag;
    use crate::test_util::scratch;
    use wasm_bindgen_test::*;
    use web_sys::{Event, ResizeObserverEntry};

    #[wasm_bindgen_test]
    fn nothing_is_created_without_a_tag_name() {
        let container = scratch();

        let missing = ManagedElement::create(&container, &HostInputs::default()).unwrap();
        let empty = ManagedElement::create(&container, &HostInputs::new("")).unwrap();

        assert!(missing.is_none());
        assert!(empty.is_none());
        assert_eq!(container.child_element_count(), 0);
    }

    #[wasm_bindgen_test]
    fn registrations_follow_supplied_callbacks() {
        let container = scratch();

        let bare = ManagedElement::create(&container, &HostInputs::new("x-bare"))
            .unwrap()
            .unwrap();
        assert!(!bare.is_listening());
        assert!(!bare.is_observing());

        let inputs = HostInputs::new("x-full")
            .on_event(|_: Event| {})
            .on_resize(|_: ResizeObserverEntry| {});
        let full = ManagedElement::create(&container, &inputs).unwrap().unwrap();
        assert!(full.is_listening());
        assert!(full.is_observing());
    }

    #[wasm_bindgen_test]
    fn properties_are_set_before_attaching() {
        let container = scratch();
        let inputs =
            HostInputs::new("x-props").with_props(PropertyBag::new().with("count", 3));

        let managed = ManagedElement::create(&container, &inputs).unwrap().unwrap();

        let count = js_sys::Reflect::get(managed.element(), &"count".into()).unwrap();
        assert_eq!(count.as_f64(), Some(3.0));
        assert_eq!(managed.element().get_attribute("count"), None);
    }

    #[wasm_bindgen_test]
    fn release_keeps_the_element_attached() {
        let container = scratch();
        let inputs = HostInputs::new("x-kept").on_event(|_: Event| {});

        let managed = ManagedElement::create(&container, &inputs).unwrap().unwrap();
        managed.release();

        assert_eq!(container.child_element_count(), 1);
    }

    #[wasm_bindgen_test]
    fn getter_only_property_is_an_error() {
        let container = scratch();
        let inputs = HostInputs::new("x-getter")
            .with_props(PropertyBag::new().with("tagName", "x-other"));

        let result = ManagedElement::create(&container, &inputs);

        assert!(result.is_err());
        assert_eq!(container.child_element_count(), 0);
    }

    #[wasm_bindgen_test]
    fn invalid_tag_name_is_an_error() {
        let container = scratch();

        let result = ManagedElement::create(&container, &HostInputs::new("not a tag"));

        assert!(result.is_err());
        assert_eq!(container.child_element_count(), 0);
    }
}

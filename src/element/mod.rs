mod inputs;
mod managed;

pub use self::inputs::{HostInputs, LoadedFn};
pub use self::managed::ManagedElement;

use crate::component::Component;
use crate::fragment::{Fragment, FragmentBuilder, Node, View};
use std::mem;
use wasm_bindgen::JsValue;
use web_sys::Element;

/// Name of the container element every host renders.
const CONTAINER: &str = "container";

/// Where an [`ElementHost`] is in its life.
enum Lifecycle {
    /// Not set up yet.
    Unmounted,

    /// Set up. Holds the managed element, unless there was no selector.
    Mounted(Option<ManagedElement>),

    /// Torn down. The host will not set up again.
    Released,
}

/// A component hosting an arbitrary custom element by tag name.
///
/// The host renders a single container `<div>`. Once that container is attached, the element is
/// created with its properties, appended to the container, and instrumented with the callbacks in
/// its [`HostInputs`]. Before the container is detached, the event listener is removed and the
/// resize watcher disconnected.
pub struct ElementHost {
    inputs: HostInputs,
    lifecycle: Lifecycle,
}

impl ElementHost {
    pub fn new(inputs: HostInputs) -> Self {
        Self {
            inputs,
            lifecycle: Lifecycle::Unmounted,
        }
    }

    pub fn inputs(&self) -> &HostInputs {
        &self.inputs
    }

    /// The hosted element, while mounted.
    pub fn element(&self) -> Option<&Element> {
        match &self.lifecycle {
            Lifecycle::Mounted(Some(managed)) => Some(managed.element()),
            _ => None,
        }
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Mounted(_))
    }

    pub fn is_released(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Released)
    }
}

impl Component for ElementHost {
    fn render(&self) -> FragmentBuilder {
        Fragment::build().with_node(Node::element("div").with_ref(CONTAINER), None)
    }

    fn mounted(&mut self, view: &View) -> Result<(), JsValue> {
        if !matches!(self.lifecycle, Lifecycle::Unmounted) {
            log::debug!("element host already set up, ignoring mount");
            return Ok(());
        }

        let container = view
            .get(CONTAINER)
            .ok_or_else(|| JsValue::from_str("element host rendered without a container"))?;

        let managed = ManagedElement::create(container, &self.inputs)?;
        let loaded = managed.as_ref().map(|managed| managed.element().clone());
        self.lifecycle = Lifecycle::Mounted(managed);

        if let (Some(on_loaded), Some(element)) = (&self.inputs.on_loaded, loaded) {
            on_loaded(&element);
        }

        Ok(())
    }

    fn detaching(&mut self) {
        match mem::replace(&mut self.lifecycle, Lifecycle::Released) {
            Lifecycle::Mounted(managed) => {
                if let Some(managed) = managed {
                    managed.release();
                }
            }
            lifecycle => self.lifecycle = lifecycle,
        }
    }
}

use super::{Component, ComponentWrapper};
use crate::fragment::{Dynamic, Fragment, Location};

use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::JsValue;
use web_sys::Document;

/// A component controller, responsible for the top level [`Fragment`] of a component, and for
/// running the component's lifecycle hooks as that fragment is mounted and detached.
pub struct Controller<C>
where
    C: Component + ?Sized,
{
    /// The component that was rendered. Shared so that whoever created the component can keep
    /// inspecting it while it is mounted.
    component: Rc<RefCell<C>>,

    /// The top level fragment that the component rendered.
    fragment: Fragment,
}

impl<C> Controller<C>
where
    C: Component + ?Sized + 'static,
{
    /// Render the component and build its fragment. Nothing is attached to the DOM until
    /// [`Dynamic::mount`] is called.
    pub fn new(document: &Document, component: ComponentWrapper<C>) -> Result<Self, JsValue> {
        let fragment = component.component.borrow().render().build(document)?;

        Ok(Self {
            component: component.component,
            fragment,
        })
    }

    pub fn component(&self) -> Rc<RefCell<C>> {
        Rc::clone(&self.component)
    }

    pub fn is_mounted(&self) -> bool {
        self.fragment.is_mounted()
    }
}

impl<C> Dynamic for Controller<C>
where
    C: Component + ?Sized,
{
    fn mount(&mut self, location: &Location) -> Result<(), JsValue> {
        if self.fragment.is_mounted() {
            return Ok(());
        }

        self.fragment.mount(location)?;

        log::debug!("component mounted, running hook");
        self.component.borrow_mut().mounted(self.fragment.view())
    }

    fn detach(&mut self, top_level: bool) {
        if !self.fragment.is_mounted() {
            return;
        }

        self.component.borrow_mut().detaching();
        self.fragment.detach(top_level);

        log::debug!("component detached");
    }
}

use super::Component;

use std::cell::RefCell;
use std::rc::Rc;

/// Helper type to easily pass a constructed component around.
pub struct ComponentWrapper<C: ?Sized + Component> {
    /// A shared reference to the component.
    pub component: Rc<RefCell<C>>,
}

impl<C: Component> ComponentWrapper<C> {
    /// Construct a new component wrapper
    pub fn new(component: C) -> Self {
        Self {
            component: Rc::new(RefCell::new(component)),
        }
    }
}

impl<C: ?Sized + Component> ComponentWrapper<C> {
    /// Clone the reference to the component
    pub fn clone_component(&self) -> Rc<RefCell<C>> {
        Rc::clone(&self.component)
    }
}

impl<C: Component + 'static> ComponentWrapper<C> {
    pub fn into_any(self) -> ComponentWrapper<dyn Component> {
        ComponentWrapper::<dyn Component> {
            component: self.component as Rc<RefCell<dyn Component>>,
        }
    }
}

impl<C: ?Sized + Component> Clone for ComponentWrapper<C> {
    fn clone(&self) -> Self {
        Self {
            component: self.clone_component(),
        }
    }
}

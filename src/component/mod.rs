mod controller;
mod wrapper;

pub use self::controller::Controller;
pub use self::wrapper::ComponentWrapper;
use crate::fragment::{FragmentBuilder, View};
use wasm_bindgen::JsValue;

/// Trait that represents a renderable component
pub trait Component {
    /// Describes the nodes and nested components of this component. Called once, when the
    /// component is handed to a [`Controller`].
    fn render(&self) -> FragmentBuilder;

    /// Called once the rendered fragment is attached at its location, after any nested components
    /// have been mounted. Referenced elements of the fragment are available through `view`.
    fn mounted(&mut self, _view: &View) -> Result<(), JsValue> {
        Ok(())
    }

    /// Called before the rendered fragment is detached.
    fn detaching(&mut self) {}
}

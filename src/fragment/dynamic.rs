use super::Location;
use wasm_bindgen::JsValue;

/// Something that owns nodes in the DOM, and must be able to place them at a location and clean
/// up after itself.
pub trait Dynamic {
    /// Mount self to the DOM as described by `location`.
    fn mount(&mut self, location: &Location) -> Result<(), JsValue>;

    /// Detach self from the DOM. `top_level` indicates that this item is at the top level of the
    /// item being detached, so its nodes must be removed. Otherwise a parent node is being removed,
    /// taking these nodes with it.
    fn detach(&mut self, top_level: bool);
}

use wasm_bindgen::JsValue;
use web_sys::Node as WsNode;

/// Expresses a location relative to a [`web_sys::Node`] in the DOM. Primarily used for directing a
/// [`super::super::Dynamic`] when mounting it to the DOM.
#[derive(Clone)]
pub struct Location {
    /// The parent to mount the [`web_sys::Node`] within.
    parent: WsNode,

    /// An optional anchor to use when mounting the [`web_sys::Node`]. If provided, the node will
    /// be inserted before the anchor. If not provided, then the node will be appended to the
    /// parent.
    anchor: Option<WsNode>,
}

impl Location {
    /// Create a location from a parent, without an anchor.
    pub fn parent<N>(parent: &N) -> Self
    where
        N: AsRef<WsNode>,
    {
        Self {
            parent: parent.as_ref().clone(),
            anchor: None,
        }
    }

    /// Create a location with both an anchor and a parent.
    pub fn anchored_parent<P, A>(parent: &P, anchor: Option<&A>) -> Self
    where
        P: AsRef<WsNode>,
        A: AsRef<WsNode>,
    {
        Self {
            parent: parent.as_ref().clone(),
            anchor: anchor.map(|anchor| anchor.as_ref().clone()),
        }
    }

    /// Use the location to mount the provided [`web_sys::Node`].
    pub fn mount<N>(&self, node: &N) -> Result<(), JsValue>
    where
        N: AsRef<WsNode>,
    {
        self.parent.insert_before(node.as_ref(), self.anchor.as_ref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{document, scratch};
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn appends_without_anchor() {
        let parent = scratch();
        let first = document().create_element("p").unwrap();
        let second = document().create_element("span").unwrap();

        let location = Location::parent(&parent);
        location.mount(&first).unwrap();
        location.mount(&second).unwrap();

        assert_eq!(parent.inner_html(), "<p></p><span></span>");
    }

    #[wasm_bindgen_test]
    fn inserts_before_anchor() {
        let parent = scratch();
        let anchor = document().create_element("p").unwrap();
        parent.append_child(&anchor).unwrap();

        let node = document().create_element("span").unwrap();
        Location::anchored_parent(&parent, Some(&anchor))
            .mount(&node)
            .unwrap();

        assert_eq!(parent.inner_html(), "<span></span><p></p>");
    }
}

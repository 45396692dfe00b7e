mod builder;
mod dynamic;
mod util;
mod view;

pub use self::builder::FragmentBuilder;
pub use self::dynamic::Dynamic;
pub use self::util::{Location, Node};
pub use self::view::View;

use crate::component::{Component, Controller};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Node as WsNode};

/// Static nodes paired with the index of the static node they are mounted within.
type StaticNodes = [(Option<usize>, WsNode)];

/// A top level representation of a fragment. Is responsible for mounting/detaching itself and all
/// children. Holds only static nodes and nested component controllers; nothing within a fragment
/// is conditionally mounted.
pub struct Fragment {
    /// Collection of static [`web_sys::Node`]s, and a reference to the static node that it should
    /// be mounted in.
    static_nodes: Vec<(Option<usize>, WsNode)>,

    /// Nested components within this fragment.
    controllers: Vec<(Option<usize>, Controller<dyn Component>)>,

    /// Referenced elements, handed to the owning component once mounted.
    view: View,

    /// Whether the fragment is currently mounted or not.
    mounted: bool,
}

impl Fragment {
    /// Create a new [`FragmentBuilder`].
    pub fn build() -> FragmentBuilder {
        FragmentBuilder::new()
    }

    fn new() -> Self {
        Self {
            static_nodes: Vec::new(),
            controllers: Vec::new(),
            view: View::default(),
            mounted: false,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Creates and inserts a static node into the fragment.
    fn with_static_node(
        &mut self,
        document: &Document,
        node: Node,
        location: Option<usize>,
    ) -> Result<(), JsValue> {
        self.check_location(location)?;

        let built = node.create_node(document)?;

        if let Some(name) = node.reference() {
            match built.dyn_ref::<Element>() {
                Some(element) => self.view.insert(name, element.clone()),
                None => log::warn!("reference `{name}` is not on an element, ignoring"),
            }
        }

        self.static_nodes.push((location, built));

        Ok(())
    }

    /// Inserts a nested component's controller into the fragment.
    fn with_controller(
        &mut self,
        controller: Controller<dyn Component>,
        location: Option<usize>,
    ) -> Result<(), JsValue> {
        self.check_location(location)?;
        self.controllers.push((location, controller));

        Ok(())
    }

    /// Pieces may only be mounted within a static node that was inserted before them.
    fn check_location(&self, location: Option<usize>) -> Result<(), JsValue> {
        match location {
            Some(parent_id) if parent_id >= self.static_nodes.len() => Err(JsValue::from_str(
                &format!("no static node {parent_id} to mount within"),
            )),
            _ => Ok(()),
        }
    }
}

/// Find the location for a piece, either within one of the static nodes or at the root location
/// of the fragment.
fn resolve(static_nodes: &StaticNodes, parent_id: Option<usize>, root: &Location) -> Location {
    parent_id
        .and_then(|parent_id| static_nodes.get(parent_id))
        .map(|(_, parent)| Location::parent(parent))
        .unwrap_or_else(|| root.clone())
}

impl Dynamic for Fragment {
    fn mount(&mut self, location: &Location) -> Result<(), JsValue> {
        let static_nodes = &self.static_nodes;

        for (parent_id, node) in static_nodes {
            resolve(static_nodes, *parent_id, location).mount(node)?;
        }

        self.mounted = true;

        // Static nodes are in place, so nested components see their final parents
        for (parent_id, controller) in self.controllers.iter_mut() {
            controller.mount(&resolve(static_nodes, *parent_id, location))?;
        }

        Ok(())
    }

    fn detach(&mut self, top_level: bool) {
        if !self.mounted {
            return;
        }

        for (parent_id, controller) in self.controllers.iter_mut() {
            controller.detach(top_level && parent_id.is_none());
        }

        // Nested static nodes leave along with their parent
        if top_level {
            self.static_nodes
                .iter()
                .filter(|(parent_id, _)| parent_id.is_none())
                .for_each(|(_, node)| {
                    let Some(parent) = node.parent_node() else {
                        return;
                    };

                    if let Err(error) = parent.remove_child(node) {
                        log::warn!("failed to detach node: {error:?}");
                    }
                });
        }

        self.mounted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{document, scratch};
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn mounts_nested_static_nodes() {
        let parent = scratch();

        let mut fragment = Fragment::build()
            .with_element("p", None)
            .with_text("hello ", Some(0))
            .with_element("b", Some(0))
            .with_text("world", Some(2))
            .with_element("hr", None)
            .build(&document())
            .unwrap();

        fragment.mount(&Location::parent(&parent)).unwrap();

        assert!(fragment.is_mounted());
        assert_eq!(parent.inner_html(), "<p>hello <b>world</b></p><hr>");
    }

    #[wasm_bindgen_test]
    fn detach_removes_root_nodes() {
        let parent = scratch();

        let mut fragment = Fragment::build()
            .with_element("p", None)
            .with_text("content", Some(0))
            .with_element("span", None)
            .build(&document())
            .unwrap();

        fragment.mount(&Location::parent(&parent)).unwrap();
        fragment.detach(true);

        assert!(!fragment.is_mounted());
        assert_eq!(parent.child_element_count(), 0);
    }

    #[wasm_bindgen_test]
    fn detached_fragment_can_be_mounted_again() {
        let first = scratch();
        let second = scratch();

        let mut fragment = Fragment::build()
            .with_element("p", None)
            .build(&document())
            .unwrap();

        fragment.mount(&Location::parent(&first)).unwrap();
        fragment.detach(true);
        fragment.mount(&Location::parent(&second)).unwrap();

        assert_eq!(first.child_element_count(), 0);
        assert_eq!(second.inner_html(), "<p></p>");
    }

    #[wasm_bindgen_test]
    fn references_are_collected() {
        let fragment = Fragment::build()
            .with_element("section", None)
            .with_node(Node::element("div").with_ref("inner"), Some(0))
            .with_node(Node::text("not an element").with_ref("text"), Some(0))
            .build(&document())
            .unwrap();

        let inner = fragment.view().get("inner").unwrap();
        assert_eq!(inner.local_name(), "div");
        assert!(fragment.view().get("text").is_none());
    }

    #[wasm_bindgen_test]
    fn unknown_parent_is_rejected() {
        let result = Fragment::build()
            .with_element("p", None)
            .with_text("orphan", Some(3))
            .build(&document());

        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn invalid_tag_name_is_rejected() {
        let result = Fragment::build()
            .with_element("not a tag", None)
            .build(&document());

        assert!(result.is_err());
    }
}

use super::{Fragment, Node};
use crate::component::{Component, ComponentWrapper, Controller};
use wasm_bindgen::JsValue;
use web_sys::Document;

/// Builder for a static node within a [`Fragment`].
struct PieceBuilder {
    node: Node,

    /// The ID of the static node to append the built result to. If [`Option::None`], will be
    /// appended to the root of the fragment.
    location: Option<usize>,
}

/// Builder for a nested component within a [`Fragment`].
struct ComponentBuilder {
    component: ComponentWrapper<dyn Component>,
    location: Option<usize>,
}

/// Used to build and represent a [`Fragment`] that does not yet have access to the [`Document`].
///
/// Static nodes are numbered in the order they are added, and that number is what the `location`
/// of later pieces refers to.
pub struct FragmentBuilder {
    pieces: Vec<PieceBuilder>,
    components: Vec<ComponentBuilder>,
}

impl FragmentBuilder {
    /// Create a new, empty instance.
    pub fn new() -> Self {
        Self {
            pieces: Vec::new(),
            components: Vec::new(),
        }
    }

    /// Add a static node to the builder.
    pub fn with_node(mut self, node: Node, location: Option<usize>) -> Self {
        self.pieces.push(PieceBuilder { node, location });
        self
    }

    /// Shorthand for a static element with the provided tag name.
    pub fn with_element<S>(self, kind: S, location: Option<usize>) -> Self
    where
        S: AsRef<str>,
    {
        self.with_node(Node::element(kind), location)
    }

    /// Shorthand for a static text node.
    pub fn with_text<S>(self, content: S, location: Option<usize>) -> Self
    where
        S: AsRef<str>,
    {
        self.with_node(Node::text(content), location)
    }

    /// Nest a component within the fragment. The component will be rendered when the fragment is
    /// built, and mounted after all static nodes.
    pub fn with_component<C>(mut self, component: ComponentWrapper<C>, location: Option<usize>) -> Self
    where
        C: Component + 'static,
    {
        self.components.push(ComponentBuilder {
            component: component.into_any(),
            location,
        });
        self
    }

    /// Use the reference to [`Document`] to build all of the nodes and nested components within
    /// this fragment builder. Returns the constructed fragment.
    pub fn build(self, document: &Document) -> Result<Fragment, JsValue> {
        let mut fragment = Fragment::new();

        for PieceBuilder { node, location } in self.pieces {
            fragment.with_static_node(document, node, location)?;
        }

        for ComponentBuilder {
            component,
            location,
        } in self.components
        {
            fragment.with_controller(Controller::new(document, component)?, location)?;
        }

        Ok(fragment)
    }
}

impl Default for FragmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

use wasm_bindgen::JsValue;
use web_sys::{Document, Node as WsNode};

/// Information required to build a [`web_sys::Node`].
enum NodeType {
    /// A [`web_sys::Text`] node. Containing [`String`] refers to the content of the generated text
    /// node, which will be passed to [`Document::create_text_node()`].
    Text(String),

    /// A [`web_sys::Element`] node. Containing [`String`] refers to the tag name (eg `p`,
    /// `div`, `cool-counter`), which will be passed to [`Document::create_element()`].
    Element(String),
}

/// Offers a friendly interface for describing new [`web_sys::Node`]s before a [`Document`] is
/// available.
pub struct Node {
    node_type: NodeType,

    /// Name the built element will be available under in the owning component's
    /// [`crate::fragment::View`].
    reference: Option<String>,
}

impl Node {
    /// Describe a [`web_sys::Text`] node with the provided content.
    pub fn text<S>(content: S) -> Self
    where
        S: AsRef<str>,
    {
        Self {
            node_type: NodeType::Text(content.as_ref().to_string()),
            reference: None,
        }
    }

    /// Describe a [`web_sys::Element`] node of the provided tag name.
    pub fn element<S>(kind: S) -> Self
    where
        S: AsRef<str>,
    {
        Self {
            node_type: NodeType::Element(kind.as_ref().to_string()),
            reference: None,
        }
    }

    /// Expose the built element to the owning component under `name`.
    pub fn with_ref<S>(mut self, name: S) -> Self
    where
        S: AsRef<str>,
    {
        self.reference = Some(name.as_ref().to_string());
        self
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Build a [`web_sys::Node`] based off of the current node representation. Fails if the
    /// document refuses the tag name.
    pub fn create_node(&self, document: &Document) -> Result<WsNode, JsValue> {
        Ok(match &self.node_type {
            NodeType::Element(kind) => document.create_element(kind)?.into(),
            NodeType::Text(content) => document.create_text_node(content).into(),
        })
    }
}

use std::collections::HashMap;
use web_sys::Element;

/// Elements of a mounted fragment that were marked with [`super::Node::with_ref`], by name.
#[derive(Clone, Default)]
pub struct View {
    refs: HashMap<String, Element>,
}

impl View {
    pub fn get(&self, name: &str) -> Option<&Element> {
        self.refs.get(name)
    }

    pub(super) fn insert(&mut self, name: &str, element: Element) {
        self.refs.insert(name.to_string(), element);
    }
}

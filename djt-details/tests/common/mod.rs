use std::collections::HashMap;

use djt_dom::DomNode;

/// Test double for a live node in the host's backing store.
pub struct FakeDomNode {
    pub name: String,
    pub open: Option<bool>,
    pub class_name: String,
    pub attributes: HashMap<String, String>,
}

impl FakeDomNode {
    /// A node exposing the boolean-typed "open" property (native support).
    pub fn details() -> Self {
        Self {
            name: "details".into(),
            open: Some(false),
            class_name: String::new(),
            attributes: HashMap::new(),
        }
    }

    /// A node without the "open" property (no native support).
    pub fn legacy(name: &str) -> Self {
        Self {
            name: name.into(),
            open: None,
            class_name: String::new(),
            attributes: HashMap::new(),
        }
    }
}

impl DomNode for FakeDomNode {
    fn node_name(&self) -> String {
        self.name.clone()
    }

    fn open_state(&self) -> Option<bool> {
        self.open
    }

    fn set_open(&mut self, open: bool) {
        self.open = Some(open);
    }

    fn class_name(&self) -> String {
        self.class_name.clone()
    }

    fn set_class_name(&mut self, class_name: &str) {
        self.class_name = class_name.to_string();
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}

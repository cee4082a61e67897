use std::collections::HashMap;

use djt_dom::{apply_patch, DomNode, DomPatch};

struct FakeNode {
    name: String,
    open: Option<bool>,
    class_name: String,
    attributes: HashMap<String, String>,
}

impl FakeNode {
    fn details() -> Self {
        Self {
            name: "details".into(),
            open: Some(false),
            class_name: String::new(),
            attributes: HashMap::new(),
        }
    }
}

impl DomNode for FakeNode {
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

#[test]
fn test_replace_classes_patch() {
    let mut node = FakeNode::details();
    node.set_class_name("closed theme");

    let patch = DomPatch::ReplaceClasses {
        exclude: vec!["opened".into(), "closed".into()],
        prepend: "opened".into(),
    };
    apply_patch(&mut node, &patch);
    assert_eq!(node.class_name, "opened theme");

    // Re-applying must not change anything.
    apply_patch(&mut node, &patch);
    assert_eq!(node.class_name, "opened theme");
}

#[test]
fn test_set_open_patch() {
    let mut node = FakeNode::details();
    apply_patch(&mut node, &DomPatch::SetOpen(true));
    assert_eq!(node.open, Some(true));
}

#[test]
fn test_set_attribute_patch() {
    let mut node = FakeNode::details();
    apply_patch(
        &mut node,
        &DomPatch::SetAttribute {
            name: "id".into(),
            value: "widget-1".into(),
        },
    );
    assert_eq!(node.attributes.get("id").map(String::as_str), Some("widget-1"));
}

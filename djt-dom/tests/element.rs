use djt_dom::{find_element, Content, Element, Tag};

#[test]
fn test_builders_set_tag() {
    assert_eq!(Element::details().tag, Tag::Details);
    assert_eq!(Element::summary().tag, Tag::Summary);
    assert_eq!(Element::div().tag, Tag::Div);
    assert_eq!(
        Element::custom("djt-details").tag,
        Tag::Custom("djt-details".into())
    );
}

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::div();
    let b = Element::div();
    assert_ne!(a.id, b.id);
}

#[test]
fn test_child_appends_to_children() {
    let root = Element::div()
        .child(Element::summary().id("s"))
        .child(Element::div().id("c"));

    match &root.content {
        Content::Children(children) => {
            assert_eq!(children.len(), 2);
            assert_eq!(children[0].id, "s");
            assert_eq!(children[1].id, "c");
        }
        other => panic!("expected children, got {other:?}"),
    }
}

#[test]
fn test_html_content() {
    let el = Element::div().html("<p>hi</p>");
    assert_eq!(el.content, Content::Html("<p>hi</p>".into()));
    assert!(!el.content.is_empty());
    assert!(Element::div().content.is_empty());
}

#[test]
fn test_hidden_element_keeps_content() {
    let el = Element::div().html("<p>hi</p>").hidden(true);
    assert!(el.hidden);
    assert_eq!(el.content, Content::Html("<p>hi</p>".into()));
}

#[test]
fn test_find_element_by_id() {
    let tree = Element::div()
        .id("root")
        .children(vec![
            Element::summary().id("header"),
            Element::div().id("body").child(Element::div().id("inner")),
        ]);

    assert!(find_element(&tree, "root").is_some());
    assert!(find_element(&tree, "inner").is_some());
    assert!(find_element(&tree, "missing").is_none());
}

#[test]
fn test_handler_stored_as_data() {
    let el = Element::summary().handler("on_pointer_down", "details-1-toggle");
    assert_eq!(
        el.data.get("on_pointer_down").map(String::as_str),
        Some("details-1-toggle")
    );
}

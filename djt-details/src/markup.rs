//! Extraction of summary and content from pre-existing markup.
//!
//! A widget may take over markup that is either a bare `details` fragment
//! or one the widget itself rendered in an earlier server-side pass (then
//! wrapped in its own `djt-details` tag). This walk locates the summary and
//! body payload in both shapes. At most two nesting levels are inspected;
//! anything deeper belongs to the payload HTML itself.

use djt_dom::MarkupNode;

/// Node name of the native disclosure element.
pub const DETAILS_NODE_NAME: &str = "details";
/// Node name of the summary slot.
pub const SUMMARY_NODE_NAME: &str = "summary";

/// Summary/content values extracted from pre-existing markup.
///
/// Fields left as `None` keep whatever the configuration derived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupOverrides {
    pub summary: Option<String>,
    pub content: Option<String>,
}

/// Parse pre-existing markup for summary and content payloads.
///
/// Returns `None` when the root node is neither a `details` fragment nor
/// this widget's own wrapper tag, or when nothing relevant was found;
/// configuration-derived defaults then stand.
pub fn parse_original_element(data: &MarkupNode) -> Option<MarkupOverrides> {
    match data.name.as_str() {
        DETAILS_NODE_NAME => parse_details_items(&data.children),
        crate::widgets::details::COMPONENT_NAME => parse_component_items(&data.children),
        _ => None,
    }
}

/// Walk the direct children of a `details` node.
///
/// A `summary` child assigns the summary (the last one wins); every other
/// child with non-empty HTML appends to the content in document order.
fn parse_details_items(items: &[MarkupNode]) -> Option<MarkupOverrides> {
    let mut found = MarkupOverrides::default();

    for item in items {
        if item.name == SUMMARY_NODE_NAME {
            found.summary = Some(item.html.clone());
        } else if !item.html.is_empty() {
            match &mut found.content {
                Some(content) => content.push_str(&item.html),
                None => found.content = Some(item.html.clone()),
            }
        }
    }

    if found.summary.is_none() && found.content.is_none() {
        None
    } else {
        Some(found)
    }
}

/// Walk the children of the widget's own wrapper tag.
///
/// The first `details` child holds the payload; without one, the wrapper's
/// own children are treated as the payload directly.
fn parse_component_items(items: &[MarkupNode]) -> Option<MarkupOverrides> {
    match items.iter().find(|item| item.name == DETAILS_NODE_NAME) {
        Some(details) => parse_details_items(&details.children),
        None => parse_details_items(items),
    }
}

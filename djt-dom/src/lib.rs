pub mod class;
pub mod dom;
pub mod element;
pub mod markup;

pub use class::filtered_and_prepended;
pub use dom::{apply_patch, DomNode, DomPatch};
pub use element::{find_element, Content, Element, Tag};
pub use markup::MarkupNode;

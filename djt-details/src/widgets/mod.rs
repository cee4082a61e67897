//! Widgets making up the details polyfill.
//!
//! Each widget produces a plain [`Element`](djt_dom::Element) tree; the
//! host applies the tree and dispatches interaction back through handler
//! IDs stored in element data, not stored closures.

pub mod details;
pub mod events;
pub mod html_content;
pub mod summary;

pub use details::Details;
pub use html_content::HtmlContent;
pub use summary::SummaryHtmlContent;

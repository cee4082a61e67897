pub mod error;
pub mod markup;
pub mod props;
pub mod registration;
pub mod support;
pub mod widgets;

pub use widgets::details::Details;

pub mod prelude {
    pub use crate::error::DetailsError;
    pub use crate::markup::{parse_original_element, MarkupOverrides};
    pub use crate::props::{DetailsProps, FlagValue};
    pub use crate::registration::{
        find_component, registered_components, Component, ComponentRegistration,
    };
    pub use crate::support::NativeSupport;
    pub use crate::widgets::details::{
        Details, DetailsId, DetailsState, RenderOutput, RenderStrategy,
    };
    pub use crate::widgets::events::{WidgetEvent, WidgetEventKind};
    pub use crate::widgets::html_content::HtmlContent;
    pub use crate::widgets::summary::SummaryHtmlContent;

    pub use djt_dom::{apply_patch, DomNode, DomPatch, Element, MarkupNode, Tag};
}

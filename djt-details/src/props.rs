//! Widget configuration.
//!
//! Hosts deliver configuration as loosely-typed attribute bags: a flag may
//! arrive as a real boolean or as an attribute string such as `"0"`. All
//! keys are optional; missing values fall back to documented defaults
//! during state derivation.

use djt_dom::MarkupNode;
use serde::Deserialize;

use crate::error::DetailsError;

/// A flag as delivered by the host: boolean or attribute string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Text(String),
}

impl FlagValue {
    /// True for the explicit opt-out markers: the string `"0"` and `false`.
    ///
    /// Anything else, including strings like `"false"`, counts as set.
    pub fn is_explicit_off(&self) -> bool {
        match self {
            Self::Bool(value) => !value,
            Self::Text(text) => text == "0",
        }
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Configuration for the [`Details`](crate::Details) widget.
///
/// Immutable per render pass; state is derived from it once at
/// construction time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetailsProps {
    /// Identifier applied to the rendered (or attached) element.
    pub id: Option<String>,
    /// Initial summary/header HTML.
    pub summary: Option<String>,
    /// Initial body HTML.
    pub content: Option<String>,
    /// Initial visibility. `"0"`, `false` or an absent key derive per the
    /// documented rule; anything else means open.
    pub is_visible: Option<FlagValue>,
    /// Forces fallback mode when `"0"` or `false`.
    pub native_implementation: Option<FlagValue>,
    /// CSS class applied when expanded.
    pub opened_class: Option<String>,
    /// CSS class applied when collapsed.
    pub closed_class: Option<String>,
    /// CSS class for the fallback-mode wrapper.
    pub non_native_container_class: Option<String>,
    /// CSS class for the fallback-mode summary.
    pub non_native_summary_class: Option<String>,
    /// Pre-existing markup to absorb, as parsed by the host.
    #[serde(skip)]
    pub original_element_data: Option<MarkupNode>,
}

impl DetailsProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode props from a loosely-typed configuration value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, DetailsError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn is_visible(mut self, value: impl Into<FlagValue>) -> Self {
        self.is_visible = Some(value.into());
        self
    }

    pub fn native_implementation(mut self, value: impl Into<FlagValue>) -> Self {
        self.native_implementation = Some(value.into());
        self
    }

    pub fn opened_class(mut self, class: impl Into<String>) -> Self {
        self.opened_class = Some(class.into());
        self
    }

    pub fn closed_class(mut self, class: impl Into<String>) -> Self {
        self.closed_class = Some(class.into());
        self
    }

    pub fn non_native_container_class(mut self, class: impl Into<String>) -> Self {
        self.non_native_container_class = Some(class.into());
        self
    }

    pub fn non_native_summary_class(mut self, class: impl Into<String>) -> Self {
        self.non_native_summary_class = Some(class.into());
        self
    }

    pub fn original_element_data(mut self, data: MarkupNode) -> Self {
        self.original_element_data = Some(data);
        self
    }
}

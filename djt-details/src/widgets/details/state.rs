//! Details widget state and derivation.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::markup::parse_original_element;
use crate::props::DetailsProps;
use crate::support::NativeSupport;

/// Fallback class applied when expanded.
pub const OPENED_CLASS: &str = "djt-details-opened";
/// Fallback class applied when collapsed.
pub const CLOSED_CLASS: &str = "djt-details-closed";
/// Fallback class for the fallback-mode wrapper.
pub const NON_NATIVE_CONTAINER_CLASS: &str = "djt-details-non-native-container";
/// Fallback class for the fallback-mode summary.
pub const NON_NATIVE_SUMMARY_CLASS: &str = "djt-details-non-native-summary";

/// Unique identifier for a Details widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DetailsId(usize);

impl DetailsId {
    pub(crate) fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for DetailsId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__details_{}", self.0)
    }
}

/// Derived state of a Details widget.
///
/// Computed once from configuration plus any pre-existing markup; mutated
/// afterwards only by the mount-time support probe (which may clear
/// `is_native_implementation`, never set it) and by the visibility toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsState {
    /// Body HTML.
    pub content: String,
    /// Summary/header HTML.
    pub summary: String,
    /// Whether the body is currently shown.
    pub is_visible: bool,
    /// Whether native-element mode is active.
    pub is_native_implementation: bool,
    pub opened_class: String,
    pub closed_class: String,
    pub non_native_container_class: String,
    pub non_native_summary_class: String,
}

impl DetailsState {
    /// Derive initial state from configuration and pre-existing markup.
    ///
    /// Missing values fall back to documented defaults. Visibility is on
    /// unless the configuration carries an explicit opt-out marker (`"0"`
    /// or `false`); native mode additionally requires that the support
    /// latch has not already resolved to unsupported.
    pub fn derive(props: &DetailsProps, support: &NativeSupport) -> Self {
        let mut state = Self {
            content: props.content.clone().unwrap_or_default(),
            summary: props.summary.clone().unwrap_or_default(),
            is_visible: props
                .is_visible
                .as_ref()
                .is_none_or(|flag| !flag.is_explicit_off()),
            is_native_implementation: !support.is_unsupported()
                && props
                    .native_implementation
                    .as_ref()
                    .is_none_or(|flag| !flag.is_explicit_off()),
            opened_class: props
                .opened_class
                .clone()
                .unwrap_or_else(|| OPENED_CLASS.into()),
            closed_class: props
                .closed_class
                .clone()
                .unwrap_or_else(|| CLOSED_CLASS.into()),
            non_native_container_class: props
                .non_native_container_class
                .clone()
                .unwrap_or_else(|| NON_NATIVE_CONTAINER_CLASS.into()),
            non_native_summary_class: props
                .non_native_summary_class
                .clone()
                .unwrap_or_else(|| NON_NATIVE_SUMMARY_CLASS.into()),
        };

        if let Some(data) = &props.original_element_data
            && let Some(overrides) = parse_original_element(data)
        {
            if let Some(summary) = overrides.summary {
                state.summary = summary;
            }
            if let Some(content) = overrides.content {
                state.content = content;
            }
        }

        state
    }
}

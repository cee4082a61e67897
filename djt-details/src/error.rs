//! Widget error types.

use thiserror::Error;

/// Errors the details widget can surface to its host.
///
/// Configuration handling is deliberately permissive (missing or odd values
/// fall back to documented defaults), so errors only arise at the two
/// genuinely fallible seams: resolving a backing DOM node and decoding a
/// loosely-typed configuration value.
#[derive(Debug, Error)]
pub enum DetailsError {
    /// Native mode is active but no live DOM node could be resolved.
    ///
    /// Happens when the widget is mounted in a host without DOM support;
    /// the probe cannot run and the host has to supply a node.
    #[error("no backing DOM node available for the native details probe")]
    MissingBackingNode,

    /// A configuration value bag could not be decoded into props.
    #[error("invalid details configuration: {0}")]
    InvalidProps(#[from] serde_json::Error),
}

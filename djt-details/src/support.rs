//! Native disclosure-element support detection.
//!
//! Whether the environment supports the native disclosure element is a
//! property of the runtime, not of any widget instance: it is probed once,
//! on the first mount that can reach a live node, and every widget mounted
//! afterwards reuses the result. There is no process global; the host owns
//! a [`NativeSupport`] handle and clones it into each widget. Hosts that
//! don't care about sharing can let the widget create a private one.

use std::sync::{Arc, RwLock};

use log::debug;

/// One-way-latching capability cache for native disclosure support.
///
/// Cheap to clone; all clones share the same detection result. The first
/// [`resolve`](Self::resolve) wins, and a `false` result is irrecoverable:
/// the latch never reverts to `true` or back to unknown.
#[derive(Debug, Clone, Default)]
pub struct NativeSupport {
    inner: Arc<RwLock<Option<bool>>>,
}

impl NativeSupport {
    /// Create an unresolved handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the probe result. No-op once a result is already latched.
    pub fn resolve(&self, supported: bool) {
        if let Ok(mut guard) = self.inner.write()
            && guard.is_none()
        {
            debug!("native details support detected: {supported}");
            *guard = Some(supported);
        }
    }

    /// The latched result, if any probe has run.
    pub fn get(&self) -> Option<bool> {
        self.inner.read().map(|guard| *guard).unwrap_or(None)
    }

    /// Whether a probe has already run.
    pub fn is_resolved(&self) -> bool {
        self.get().is_some()
    }

    /// Whether the environment is confirmed to lack native support.
    pub fn is_unsupported(&self) -> bool {
        self.get() == Some(false)
    }
}

#![forbid(unsafe_code)]

//! Dismissal classification.
//!
//! The host fires one dismissal notification per teardown, and its signature
//! carries no hint of who initiated it. The observer is the piece that can
//! tell: the bridge clears the shared displayed flag *before* asking the
//! host to hide, so by the time the notification arrives, a true flag can
//! only mean the user did it.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use stagesheet_core::{Completion, DismissDelegate, DisplayIntent};
use stagesheet_runtime::Binding;

/// Organic-dismissal delegate for one bridge.
///
/// Registered with the host at present time; invoked exactly once per
/// teardown.
pub struct DismissObserver {
    displayed: Rc<Cell<bool>>,
    intent: Binding<DisplayIntent>,
    organic_completion: Option<Completion>,
}

impl DismissObserver {
    pub(crate) fn new(
        displayed: Rc<Cell<bool>>,
        intent: Binding<DisplayIntent>,
        organic_completion: Option<Completion>,
    ) -> Self {
        Self {
            displayed,
            intent,
            organic_completion,
        }
    }

    /// Handle a dismissal notification from the host.
    ///
    /// If the displayed flag is still set, the bridge did not initiate this
    /// teardown — the dismissal is organic and the caller's callback fires.
    /// Either way the flag is cleared and the intent is forced to
    /// `Hidden(None)`; this is the only path that pushes a dismissal
    /// discovered outside the bridge's control flow back into caller-visible
    /// state, and it deliberately carries no per-call completion.
    pub fn notify_dismissed(&self) {
        if self.displayed.get() {
            debug!("organic dismissal observed");
            if let Some(callback) = &self.organic_completion {
                callback();
            }
        }
        self.displayed.set(false);
        self.intent.set(DisplayIntent::hidden());
    }

    /// The delegate handle handed to the host on each present.
    pub(crate) fn delegate(self: &Rc<Self>) -> DismissDelegate {
        let observer = Rc::clone(self);
        Rc::new(move || observer.notify_dismissed())
    }
}

impl std::fmt::Debug for DismissObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DismissObserver")
            .field("displayed", &self.displayed.get())
            .field("organic_completion", &self.organic_completion.is_some())
            .finish()
    }
}

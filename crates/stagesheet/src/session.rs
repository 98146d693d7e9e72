#![forbid(unsafe_code)]

//! Idempotent wrapper over the imperative presentation controller.
//!
//! One session wraps one [`SheetHost`] for the lifetime of its bridge. The
//! underlying presentation instance is created lazily on the first
//! `present()` and torn down on `dismiss()`; the session itself is never
//! recreated, and content is swapped in place while a sheet is open.
//!
//! The host is the source of truth for "is a sheet on screen": an organic
//! dismissal changes `is_showing()` without any call through the session,
//! which is exactly why every operation here re-checks the host instead of
//! caching liveness.

use tracing::debug;

use stagesheet_core::{Completion, DismissDelegate, SheetConfig, SheetHost, ShowRequest};

/// Wrapper owning the platform host, the pass-through configuration, and
/// the current sheet content.
pub struct SheetSession<C> {
    host: Box<dyn SheetHost<C>>,
    config: SheetConfig,
    content: C,
}

impl<C> SheetSession<C> {
    /// Create a session. No presentation instance exists until
    /// [`present`](Self::present) is called.
    pub fn new(host: Box<dyn SheetHost<C>>, config: SheetConfig, content: C) -> Self {
        Self {
            host,
            config,
            content,
        }
    }

    /// Whether a presentation instance is currently on screen.
    #[must_use]
    pub fn is_presented(&self) -> bool {
        self.host.is_showing()
    }

    /// The pass-through configuration this session presents with.
    #[must_use]
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Replace the sheet content. The live instance, if any, picks the new
    /// content up immediately; otherwise it is used on the next `present`.
    pub fn set_content(&mut self, content: C) {
        self.content = content;
        if self.host.is_showing() {
            self.host.set_content(&self.content);
        }
    }

    /// Present a sheet configured with the current stages, thresholds, and
    /// content, registering `delegate` as the dismissal delegate before the
    /// sheet becomes visible. No-op if an instance is already presented.
    pub fn present(&mut self, delegate: DismissDelegate) {
        if self.host.is_showing() {
            return;
        }
        debug!(stages = ?self.config.stages, "presenting sheet");
        self.host.show(ShowRequest {
            config: &self.config,
            content: &self.content,
            on_dismissed: delegate,
        });
    }

    /// Tear down the presented instance and run `completion` once teardown
    /// finishes. No-op if nothing is presented; `completion` is then never
    /// invoked.
    pub fn dismiss(&mut self, completion: Option<Completion>) {
        if !self.host.is_showing() {
            return;
        }
        debug!("dismissing sheet");
        self.host.hide(completion);
    }

    /// Host-teardown hook: the owning view is about to leave the screen, so
    /// force a dismiss with no completion rather than leak a presented
    /// instance past the owner's lifetime.
    pub fn teardown(&mut self) {
        self.dismiss(None);
    }
}

impl<C> std::fmt::Debug for SheetSession<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetSession")
            .field("presented", &self.is_presented())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::RecordingHost;
    use std::cell::Cell;
    use std::rc::Rc;

    fn noop_delegate() -> DismissDelegate {
        Rc::new(|| {})
    }

    #[test]
    fn present_is_idempotent() {
        let host = RecordingHost::new();
        let mut session =
            SheetSession::new(Box::new(host.clone()), SheetConfig::default(), "content");

        session.present(noop_delegate());
        session.present(noop_delegate());

        assert!(session.is_presented());
        assert_eq!(host.shown_count(), 1, "second present must be a no-op");
        assert_eq!(host.delegate_registrations(), 1);
    }

    #[test]
    fn dismiss_without_presentation_drops_completion() {
        let host = RecordingHost::new();
        let mut session =
            SheetSession::new(Box::new(host.clone()), SheetConfig::default(), "content");

        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        session.dismiss(Some(Rc::new(move || flag.set(true))));

        assert!(!fired.get(), "completion must not run for a no-op dismiss");
        assert_eq!(host.hidden_count(), 0);
    }

    #[test]
    fn dismiss_runs_completion_after_teardown() {
        let host = RecordingHost::new();
        let mut session =
            SheetSession::new(Box::new(host.clone()), SheetConfig::default(), "content");
        session.present(noop_delegate());

        let fired = Rc::new(Cell::new(0));
        let count = Rc::clone(&fired);
        session.dismiss(Some(Rc::new(move || count.set(count.get() + 1))));

        assert!(!session.is_presented());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn content_swap_reaches_live_instance() {
        let host = RecordingHost::new();
        let mut session = SheetSession::new(Box::new(host.clone()), SheetConfig::default(), "old");
        session.present(noop_delegate());

        session.set_content("new");

        assert!(session.is_presented(), "content swap must not close the sheet");
        assert_eq!(host.shown_count(), 1);
        assert_eq!(host.content(), Some("new"));
    }

    #[test]
    fn content_swap_while_closed_is_stored_only() {
        let host = RecordingHost::new();
        let mut session = SheetSession::new(Box::new(host.clone()), SheetConfig::default(), "old");

        session.set_content("new");
        assert_eq!(host.content(), None);

        session.present(noop_delegate());
        assert_eq!(host.content(), Some("new"));
    }

    #[test]
    fn teardown_dismisses_unconditionally() {
        let host = RecordingHost::new();
        let mut session =
            SheetSession::new(Box::new(host.clone()), SheetConfig::default(), "content");
        session.present(noop_delegate());

        session.teardown();
        assert!(!session.is_presented());

        // A second teardown has nothing to do.
        session.teardown();
        assert_eq!(host.hidden_count(), 1);
    }
}

#![forbid(unsafe_code)]

//! The opaque platform presentation surface.
//!
//! The bridge never touches platform chrome directly; it drives a
//! [`SheetHost`] and lets the embedder decide what a sheet actually looks
//! like. The trait is deliberately small: show, hide, a liveness query, and
//! an in-place content swap.
//!
//! # Invariants
//!
//! 1. At most one sheet instance exists per host; `show` is only called
//!    while `is_showing()` is false and `hide` only while it is true (the
//!    session enforces this).
//! 2. The dismissal delegate registered via [`ShowRequest`] fires exactly
//!    once per teardown, whether the teardown came from `hide()` or from the
//!    user (swipe-down, tap-outside). The two cases are indistinguishable at
//!    the delegate's signature; classification is the observer's job.
//! 3. `hide` runs its completion after teardown finishes, after the
//!    dismissal delegate has fired.
//!
//! # Failure Modes
//!
//! Presentation is best-effort UI work: a host cannot return a recoverable
//! error from `show` or `hide`, only fail to change `is_showing()`.

use crate::config::SheetConfig;
use crate::intent::Completion;
use std::rc::Rc;

/// Callback a host invokes when its sheet instance leaves the screen.
pub type DismissDelegate = Rc<dyn Fn()>;

/// Everything a host needs to put a sheet on screen.
pub struct ShowRequest<'a, C> {
    /// Pass-through presentation configuration.
    pub config: &'a SheetConfig,
    /// Content to render inside the sheet.
    pub content: &'a C,
    /// Delegate to invoke on teardown. Must be registered before the sheet
    /// becomes visible so an immediate user dismissal is never missed.
    pub on_dismissed: DismissDelegate,
}

/// Platform-native presentation API for a bottom-anchored, multi-stage
/// modal sheet.
pub trait SheetHost<C> {
    /// Construct and present a sheet instance for `request`.
    fn show(&mut self, request: ShowRequest<'_, C>);

    /// Tear down the presented instance, then fire the dismissal delegate,
    /// then run `completion`.
    fn hide(&mut self, completion: Option<Completion>);

    /// Whether a sheet instance is currently on screen. The host is the
    /// source of truth; organic dismissals are reflected here without any
    /// call from the session.
    fn is_showing(&self) -> bool;

    /// Replace the content of the live instance without re-presenting.
    /// Called only while `is_showing()` is true.
    fn set_content(&mut self, content: &C);
}

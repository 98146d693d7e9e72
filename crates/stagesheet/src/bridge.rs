#![forbid(unsafe_code)]

//! Reconciliation between declared intent and live presentation state.
//!
//! The bridge owns one [`SheetSession`] and a shadow flag mirroring "is a
//! presentation instance actually on screen". Every declarative render pass
//! calls [`SheetBridge::update`], which defers one reconciliation step to
//! the next [`MainQueue`] tick:
//!
//! | intent      | displayed | action                        |
//! |-------------|-----------|-------------------------------|
//! | `Shown`     | false     | present; flag := true         |
//! | `Shown`     | true      | no-op                         |
//! | `Hidden(c)` | true      | flag := false; dismiss with c |
//! | `Hidden(c)` | false     | no-op                         |
//!
//! # Invariants
//!
//! 1. At most one present/dismiss call is issued per tick; the table rows
//!    are exhaustive and mutually exclusive.
//! 2. The shadow flag is cleared *before* the dismiss call goes to the
//!    host, so the host's dismissal notification — indistinguishable from an
//!    organic one — finds it false and the organic callback stays silent.
//! 3. Session content is refreshed on every reconciliation pass, whether or
//!    not a present/dismiss fires, so an open sheet reflects live content.
//! 4. The flag and the host's actual presentation state never diverge for
//!    more than one reconciliation cycle.
//!
//! # Failure Modes
//!
//! - A completion carried by a `Hidden` intent set while the sheet is
//!   already hidden never runs: the `Hidden`/false row is the defense
//!   against double-dismiss, and a completion for a dismissal that never
//!   happened would be worse than a dropped one.
//! - Reconciliation queued behind an organic dismissal lands on the
//!   `Hidden`/false row and does nothing; no duplicate dismiss is issued.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::trace;

use stagesheet_core::{Completion, DisplayIntent};
use stagesheet_runtime::{Binding, MainQueue};

use crate::observer::DismissObserver;
use crate::session::SheetSession;

/// The state-synchronization bridge for one sheet attachment.
pub struct SheetBridge<C> {
    session: Rc<RefCell<SheetSession<C>>>,
    intent: Binding<DisplayIntent>,
    displayed: Rc<Cell<bool>>,
    observer: Rc<DismissObserver>,
    queue: MainQueue,
}

impl<C: 'static> SheetBridge<C> {
    /// Wire a bridge over `session`, reconciling against `intent` on
    /// `queue`. `organic_dismissal_completion` fires only for dismissals
    /// the user (or platform) initiated.
    pub fn new(
        intent: Binding<DisplayIntent>,
        session: SheetSession<C>,
        organic_dismissal_completion: Option<Completion>,
        queue: MainQueue,
    ) -> Self {
        let displayed = Rc::new(Cell::new(false));
        let observer = Rc::new(DismissObserver::new(
            Rc::clone(&displayed),
            intent.clone(),
            organic_dismissal_completion,
        ));
        Self {
            session: Rc::new(RefCell::new(session)),
            intent,
            displayed,
            observer,
            queue,
        }
    }

    /// Record one declarative render pass.
    ///
    /// Stores nothing and mutates nothing immediately: the content refresh
    /// and the reconciliation table both run on the next queue tick, because
    /// mutating the imperative layer mid-render is unsafe on the host
    /// platform.
    pub fn update(&self, content: C) {
        let session = Rc::clone(&self.session);
        let intent = self.intent.clone();
        let displayed = Rc::clone(&self.displayed);
        let observer = Rc::clone(&self.observer);

        self.queue.post(move || {
            let mut session = session.borrow_mut();
            session.set_content(content);

            match intent.get() {
                DisplayIntent::Shown => {
                    if !displayed.get() {
                        trace!("reconcile: present");
                        session.present(observer.delegate());
                        displayed.set(true);
                    }
                }
                DisplayIntent::Hidden(completion) => {
                    if displayed.get() {
                        trace!("reconcile: dismiss");
                        // Cleared before the host call: the dismissal
                        // notification must observe false.
                        displayed.set(false);
                        session.dismiss(completion);
                    }
                }
            }
        });
    }

    /// Whether the bridge believes a sheet is on screen. Test and
    /// diagnostic surface; the host remains the source of truth.
    #[must_use]
    pub fn is_currently_displayed(&self) -> bool {
        self.displayed.get()
    }

    /// Host-teardown hook: the owning view is leaving the screen. Dismisses
    /// synchronously (not queued) with no completion, so no presented
    /// instance outlives its owner.
    pub fn teardown(&self) {
        self.displayed.set(false);
        self.session.borrow_mut().teardown();
    }
}

impl<C> std::fmt::Debug for SheetBridge<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetBridge")
            .field("displayed", &self.displayed.get())
            .field("pending_ticks", &self.queue.len())
            .finish()
    }
}

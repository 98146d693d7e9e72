#![forbid(unsafe_code)]

//! Test-support host double.
//!
//! [`RecordingHost`] implements [`SheetHost`] against plain shared state:
//! it records every show/hide/content-swap, keeps the registered dismissal
//! delegate, and can simulate a user swipe. Handles are cheap clones over
//! the same state, so a test keeps one clone as a probe and boxes another
//! into the session.

use std::cell::RefCell;
use std::rc::Rc;

use stagesheet_core::{Completion, DismissDelegate, SheetConfig, SheetHost, ShowRequest};

struct HostState<C> {
    showing: bool,
    content: Option<C>,
    delegate: Option<DismissDelegate>,
    config: Option<SheetConfig>,
    shown: usize,
    hidden: usize,
    content_swaps: usize,
    delegate_registrations: usize,
}

/// Recording implementation of [`SheetHost`] for tests.
pub struct RecordingHost<C> {
    inner: Rc<RefCell<HostState<C>>>,
}

impl<C> Clone for RecordingHost<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C> Default for RecordingHost<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> RecordingHost<C> {
    /// Create a host with nothing showing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(HostState {
                showing: false,
                content: None,
                delegate: None,
                config: None,
                shown: 0,
                hidden: 0,
                content_swaps: 0,
                delegate_registrations: 0,
            })),
        }
    }

    /// Whether a sheet is on screen.
    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.inner.borrow().showing
    }

    /// Number of `show` calls observed.
    #[must_use]
    pub fn shown_count(&self) -> usize {
        self.inner.borrow().shown
    }

    /// Number of `hide` calls that actually tore an instance down.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.inner.borrow().hidden
    }

    /// Number of in-place content swaps observed.
    #[must_use]
    pub fn content_swap_count(&self) -> usize {
        self.inner.borrow().content_swaps
    }

    /// Number of dismissal-delegate registrations observed.
    #[must_use]
    pub fn delegate_registrations(&self) -> usize {
        self.inner.borrow().delegate_registrations
    }

    /// Configuration the live (or last) instance was presented with.
    #[must_use]
    pub fn config(&self) -> Option<SheetConfig> {
        self.inner.borrow().config.clone()
    }

    /// Simulate the user swiping the sheet away. Tears the instance down
    /// and fires the registered dismissal delegate. Returns false (and does
    /// nothing) if no sheet is showing.
    pub fn user_swipe(&self) -> bool {
        let delegate = {
            let mut state = self.inner.borrow_mut();
            if !state.showing {
                return false;
            }
            state.showing = false;
            state.content = None;
            state.delegate.take()
        };
        // Borrow released before the delegate runs; it re-enters the
        // reactive layer, never this host.
        if let Some(delegate) = delegate {
            delegate();
        }
        true
    }
}

impl<C: Clone> RecordingHost<C> {
    /// Content of the live instance, if any.
    #[must_use]
    pub fn content(&self) -> Option<C> {
        self.inner.borrow().content.clone()
    }
}

impl<C: Clone> SheetHost<C> for RecordingHost<C> {
    fn show(&mut self, request: ShowRequest<'_, C>) {
        let mut state = self.inner.borrow_mut();
        state.showing = true;
        state.config = Some(request.config.clone());
        state.content = Some(request.content.clone());
        state.delegate = Some(request.on_dismissed);
        state.shown += 1;
        state.delegate_registrations += 1;
    }

    fn hide(&mut self, completion: Option<Completion>) {
        let delegate = {
            let mut state = self.inner.borrow_mut();
            if !state.showing {
                return;
            }
            state.showing = false;
            state.content = None;
            state.hidden += 1;
            state.delegate.take()
        };
        if let Some(delegate) = delegate {
            delegate();
        }
        if let Some(completion) = completion {
            completion();
        }
    }

    fn is_showing(&self) -> bool {
        self.inner.borrow().showing
    }

    fn set_content(&mut self, content: &C) {
        let mut state = self.inner.borrow_mut();
        state.content = Some(content.clone());
        state.content_swaps += 1;
    }
}

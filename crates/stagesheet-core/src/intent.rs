#![forbid(unsafe_code)]

//! The tri-state display signal for a sheet.
//!
//! [`DisplayIntent`] has two logical states as observed by the caller
//! (shown / hidden) but three constructible values: `Shown`, `Hidden(None)`,
//! and `Hidden(Some(completion))`. The carried completion runs once the
//! dismissal it requested finishes.
//!
//! # Invariants
//!
//! 1. Equality is defined ONLY over the shown/hidden axis; the carried
//!    completion is never compared. Two consecutive identical-looking dismiss
//!    requests are therefore not distinct state transitions — a sheet cannot
//!    need dismissing twice in a row.
//! 2. The value is owned and mutated by exactly one side at a time: the
//!    caller (to request a transition) or the bridge (to reflect an organic
//!    dismissal), never both within one reconciliation pass.

use std::fmt;
use std::rc::Rc;

/// Zero-argument callback run once a dismissal completes.
///
/// Shared-ownership so intents stay cheaply cloneable; the bridge invokes it
/// at most once per dismissal.
pub type Completion = Rc<dyn Fn()>;

/// Declared display state for a sheet.
#[derive(Clone)]
pub enum DisplayIntent {
    /// The sheet should be on screen.
    Shown,
    /// The sheet should be off screen, optionally running the carried
    /// completion once teardown finishes.
    Hidden(Option<Completion>),
}

impl DisplayIntent {
    /// `Hidden` with no completion.
    #[must_use]
    pub fn hidden() -> Self {
        Self::Hidden(None)
    }

    /// `Hidden` carrying a completion to run after teardown.
    #[must_use]
    pub fn hidden_then(completion: impl Fn() + 'static) -> Self {
        Self::Hidden(Some(Rc::new(completion)))
    }

    /// Collapse to the shown/hidden axis.
    #[must_use]
    pub fn as_bool(&self) -> bool {
        matches!(self, Self::Shown)
    }

    /// The carried dismissal completion, if any.
    #[must_use]
    pub fn completion(&self) -> Option<Completion> {
        match self {
            Self::Shown => None,
            Self::Hidden(completion) => completion.clone(),
        }
    }

    /// Lift a plain boolean into an intent: `true` → `Shown`,
    /// `false` → `Hidden(None)`.
    #[must_use]
    pub fn from_bool(shown: bool) -> Self {
        if shown { Self::Shown } else { Self::Hidden(None) }
    }
}

impl Default for DisplayIntent {
    fn default() -> Self {
        Self::Hidden(None)
    }
}

impl PartialEq for DisplayIntent {
    fn eq(&self, other: &Self) -> bool {
        self.as_bool() == other.as_bool()
    }
}

impl Eq for DisplayIntent {}

impl fmt::Debug for DisplayIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shown => f.write_str("Shown"),
            Self::Hidden(completion) => f
                .debug_struct("Hidden")
                .field("completion", &completion.is_some())
                .finish(),
        }
    }
}

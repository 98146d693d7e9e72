#![forbid(unsafe_code)]

//! Shared value cells and get/set bindings.
//!
//! [`State<T>`] owns a value behind `Rc<RefCell<..>>` and tracks a version
//! that bumps on every observable change. [`Binding<T>`] is the detachable
//! get/set handle: usually derived from a `State`, but constructible from
//! arbitrary closures so a binding of one type can be layered over a cell of
//! another (the plain-boolean sheet API is built exactly that way).
//!
//! # Invariants
//!
//! 1. `Binding::get()` always returns the current (not stale) value.
//! 2. `State::set` with a value equal to the current one stores the new
//!    value but does not bump the version. Equality may be coarser than
//!    identity (a payload-carrying value can compare equal to one with a
//!    different payload); the latest payload wins while change detection
//!    stays quiet.
//! 3. Cloning a `State` or `Binding` shares the underlying cell.
//!
//! # Failure Modes
//!
//! - Re-entrant `set` from inside `with` panics (`RefCell` discipline).
//! - A `Binding` built from closures is only as current as its closures.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

struct StateInner<T> {
    value: T,
    version: u64,
}

/// A shared, version-tracked value cell. Single-threaded.
pub struct State<T> {
    inner: Rc<RefCell<StateInner<T>>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq + 'static> State<T> {
    /// Create a cell holding `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StateInner { value, version: 0 })),
        }
    }

    /// Clone out the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Read the current value without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Store `value`. The version bumps only when the new value compares
    /// unequal to the old one.
    pub fn set(&self, value: T) {
        let mut inner = self.inner.borrow_mut();
        let changed = inner.value != value;
        inner.value = value;
        if changed {
            inner.version += 1;
        }
    }

    /// Monotonic change counter; bumps once per observable change.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Derive a get/set handle sharing this cell.
    #[must_use]
    pub fn binding(&self) -> Binding<T> {
        let read = self.clone();
        let write = self.clone();
        Binding::new(move || read.get(), move |value| write.set(value))
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("State")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .finish()
    }
}

/// A get/set handle over some shared value.
pub struct Binding<T> {
    read: Rc<dyn Fn() -> T>,
    write: Rc<dyn Fn(T)>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            read: Rc::clone(&self.read),
            write: Rc::clone(&self.write),
        }
    }
}

impl<T: 'static> Binding<T> {
    /// Create a binding from explicit accessor closures.
    pub fn new(read: impl Fn() -> T + 'static, write: impl Fn(T) + 'static) -> Self {
        Self {
            read: Rc::new(read),
            write: Rc::new(write),
        }
    }

    /// Get the current bound value.
    #[must_use]
    pub fn get(&self) -> T {
        (self.read)()
    }

    /// Write a new value through the binding.
    pub fn set(&self, value: T) {
        (self.write)(value);
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("value", &self.get())
            .finish()
    }
}

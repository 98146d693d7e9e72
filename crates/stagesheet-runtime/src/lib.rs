#![forbid(unsafe_code)]

//! Single-threaded cooperative substrate for stagesheet.
//!
//! Two primitives, both `Rc`-based and strictly single-threaded:
//!
//! - [`State`] / [`Binding`]: a version-tracked shared value cell and the
//!   get/set handle derived from it. The caller and the bridge read and
//!   write the same display intent through these.
//! - [`MainQueue`]: a serial FIFO task queue with "next tick" semantics —
//!   the deferral primitive that keeps imperative mutation out of the
//!   declarative layer's render pass.
//!
//! There is no locking anywhere; the single-queue discipline is itself the
//! concurrency control.

pub mod binding;
pub mod queue;

pub use binding::{Binding, State};
pub use queue::MainQueue;

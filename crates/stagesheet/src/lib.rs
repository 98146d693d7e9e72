#![forbid(unsafe_code)]

//! Declarative-to-imperative state bridge for multi-stage bottom sheets.
//!
//! A declarative UI layer has no native concept of a platform sheet with
//! discrete height stages, background dimming control, and swipe-to-dismiss.
//! This crate bridges the two worlds and keeps them synchronized in both
//! directions: programmatic show/hide flows from the caller's
//! [`DisplayIntent`] down to the platform, and organic user-driven
//! dismissals flow back up into the caller-visible state.
//!
//! The moving parts:
//!
//! - [`SheetSession`]: idempotent wrapper over the imperative presentation
//!   controller ([`SheetHost`]).
//! - [`SheetBridge`]: reconciles declared intent against live presentation
//!   state, one scheduler tick after each render pass.
//! - [`DismissObserver`]: classifies dismissals as organic or
//!   caller-initiated and pushes organic ones back into the intent.
//! - [`SheetAnchor`]: the caller-facing configuration surface.
//!
//! # Example
//!
//! ```ignore
//! use stagesheet::{MainQueue, SheetAnchor, State, DisplayIntent, Stage};
//!
//! let queue = MainQueue::new();
//! let presented = State::new(DisplayIntent::hidden());
//!
//! let bridge = SheetAnchor::new(presented.binding())
//!     .stages([Stage::Medium, Stage::Large])
//!     .undimmed_stage_threshold(Some(Stage::Medium))
//!     .on_organic_dismissal(|| println!("swiped away"))
//!     .content("picker")
//!     .mount(Box::new(host), &queue);
//!
//! presented.set(DisplayIntent::Shown);
//! bridge.update("picker");   // declarative layer re-rendered
//! queue.tick();              // sheet presents on the next tick
//! ```

pub mod anchor;
pub mod bridge;
pub mod harness;
pub mod observer;
pub mod session;

pub use anchor::{SheetAnchor, intent_binding_from_bool};
pub use bridge::SheetBridge;
pub use observer::DismissObserver;
pub use session::SheetSession;

pub use stagesheet_core::{
    Completion, DismissDelegate, DisplayIntent, SheetConfig, SheetHost, ShowRequest, Stage,
    StageList,
};
pub use stagesheet_runtime::{Binding, MainQueue, State};

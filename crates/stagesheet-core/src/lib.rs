#![forbid(unsafe_code)]

//! Value types and the host seam for stagesheet.
//!
//! This crate holds everything both sides of the bridge agree on:
//!
//! - [`DisplayIntent`]: the tri-state display signal the caller mutates and
//!   the bridge reconciles against.
//! - [`Stage`]: the platform's fixed set of sheet height stages (detents).
//! - [`SheetConfig`]: pass-through presentation configuration (stages,
//!   dimming threshold, scroll expansion, edge attachment).
//! - [`SheetHost`]: the opaque platform presentation surface the session
//!   drives. Concrete chrome lives with the embedder, not here.

pub mod config;
pub mod host;
pub mod intent;
pub mod stage;

pub use config::{SheetConfig, StageList};
pub use host::{DismissDelegate, SheetHost, ShowRequest};
pub use intent::{Completion, DisplayIntent};
pub use stage::Stage;

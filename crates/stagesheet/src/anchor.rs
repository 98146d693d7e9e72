#![forbid(unsafe_code)]

//! Caller-facing attachment surface.
//!
//! [`SheetAnchor`] is the one place a caller configures a sheet: the intent
//! binding, the stage set, dimming, the organic-dismissal callback, and the
//! content value. `mount` wires everything into a [`SheetBridge`]; from
//! then on the caller only mutates the intent and calls
//! [`SheetBridge::update`] from its render pass.
//!
//! Callers who only want a two-state boolean API use
//! [`SheetAnchor::presented_bool`], which layers a boolean binding over the
//! richer intent type in both directions.

use std::rc::Rc;

use stagesheet_core::{Completion, DisplayIntent, SheetConfig, SheetHost, Stage};
use stagesheet_runtime::{Binding, MainQueue};

use crate::bridge::SheetBridge;
use crate::session::SheetSession;

/// Adapt a plain boolean binding into a display-intent binding.
///
/// Reads map `true` → `Shown`, `false` → `Hidden(None)`; writes collapse to
/// the shown/hidden axis, so an organic dismissal pushed through the
/// adapter flips the caller's boolean to `false`.
#[must_use]
pub fn intent_binding_from_bool(presented: &Binding<bool>) -> Binding<DisplayIntent> {
    let read = presented.clone();
    let write = presented.clone();
    Binding::new(
        move || DisplayIntent::from_bool(read.get()),
        move |intent: DisplayIntent| write.set(intent.as_bool()),
    )
}

/// Builder that attaches a sheet to a host.
pub struct SheetAnchor<C> {
    intent: Binding<DisplayIntent>,
    config: SheetConfig,
    organic_dismissal_completion: Option<Completion>,
    content: Option<C>,
}

impl<C: 'static> SheetAnchor<C> {
    /// Attach to a display-intent binding.
    #[must_use]
    pub fn new(presented: Binding<DisplayIntent>) -> Self {
        Self {
            intent: presented,
            config: SheetConfig::default(),
            organic_dismissal_completion: None,
            content: None,
        }
    }

    /// Attach to a plain boolean binding (two-state overload).
    #[must_use]
    pub fn presented_bool(presented: Binding<bool>) -> Self {
        Self::new(intent_binding_from_bool(&presented))
    }

    /// Replace the whole presentation configuration.
    #[must_use]
    pub fn config(mut self, config: SheetConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the allowed stages. Panics on an empty stage list.
    #[must_use]
    pub fn stages(mut self, stages: impl IntoIterator<Item = Stage>) -> Self {
        self.config = self.config.stages(stages);
        self
    }

    /// Set the largest stage at which the background stays undimmed.
    #[must_use]
    pub fn undimmed_stage_threshold(mut self, threshold: Option<Stage>) -> Self {
        self.config = self.config.undimmed_stage_threshold(threshold);
        self
    }

    /// Set scroll-expansion behavior.
    #[must_use]
    pub fn scroll_expansion(mut self, expand: bool) -> Self {
        self.config = self.config.scroll_expansion(expand);
        self
    }

    /// Set compact-height edge attachment.
    #[must_use]
    pub fn edge_attached_in_compact_height(mut self, attached: bool) -> Self {
        self.config = self.config.edge_attached_in_compact_height(attached);
        self
    }

    /// Set grabber visibility.
    #[must_use]
    pub fn grabber_visible(mut self, visible: bool) -> Self {
        self.config = self.config.grabber_visible(visible);
        self
    }

    /// Set whether sheet width tracks preferred content width.
    #[must_use]
    pub fn width_follows_content(mut self, follows: bool) -> Self {
        self.config = self.config.width_follows_content(follows);
        self
    }

    /// Callback fired only when the user (or platform) dismisses the sheet,
    /// never when the caller does.
    #[must_use]
    pub fn on_organic_dismissal(mut self, callback: impl Fn() + 'static) -> Self {
        self.organic_dismissal_completion = Some(Rc::new(callback));
        self
    }

    /// Initial sheet content.
    #[must_use]
    pub fn content(mut self, content: C) -> Self {
        self.content = Some(content);
        self
    }

    /// Wire the configured sheet into `host`, reconciling on `queue`.
    ///
    /// # Panics
    ///
    /// Panics if no content was supplied; a sheet with nothing to render is
    /// a broken caller contract.
    #[must_use]
    pub fn mount(self, host: Box<dyn SheetHost<C>>, queue: &MainQueue) -> SheetBridge<C> {
        let content = self
            .content
            .expect("SheetAnchor::mount requires content to render");
        let session = SheetSession::new(host, self.config, content);
        SheetBridge::new(
            self.intent,
            session,
            self.organic_dismissal_completion,
            queue.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::RecordingHost;
    use stagesheet_runtime::State;

    #[test]
    fn mounted_config_reaches_the_host() {
        let host = RecordingHost::new();
        let queue = MainQueue::new();
        let intent = State::new(DisplayIntent::Shown);

        let bridge = SheetAnchor::new(intent.binding())
            .stages([Stage::Medium])
            .undimmed_stage_threshold(Some(Stage::Medium))
            .scroll_expansion(false)
            .edge_attached_in_compact_height(false)
            .grabber_visible(false)
            .width_follows_content(false)
            .content("content")
            .mount(Box::new(host.clone()), &queue);

        bridge.update("content");
        queue.tick();

        let config = host.config().expect("sheet should have presented");
        assert_eq!(config.stages.as_slice(), &[Stage::Medium]);
        assert_eq!(config.undimmed_stage_threshold, Some(Stage::Medium));
        assert!(!config.scroll_expansion);
        assert!(!config.edge_attached_in_compact_height);
        assert!(!config.grabber_visible);
        assert!(!config.width_follows_content);
    }

    #[test]
    #[should_panic(expected = "requires content")]
    fn mount_without_content_panics() {
        let host: RecordingHost<&'static str> = RecordingHost::new();
        let queue = MainQueue::new();
        let intent = State::new(DisplayIntent::hidden());
        let _ = SheetAnchor::new(intent.binding()).mount(Box::new(host), &queue);
    }

    #[test]
    fn bool_binding_round_trips_both_directions() {
        let backing = State::new(false);
        let intent = intent_binding_from_bool(&backing.binding());

        assert_eq!(intent.get(), DisplayIntent::hidden());

        backing.set(true);
        assert_eq!(intent.get(), DisplayIntent::Shown);

        intent.set(DisplayIntent::hidden());
        assert!(!backing.get());
    }

    #[test]
    fn boolean_overload_sees_organic_dismissal() {
        let host = RecordingHost::new();
        let queue = MainQueue::new();
        let presented = State::new(true);

        let bridge = SheetAnchor::presented_bool(presented.binding())
            .content("content")
            .mount(Box::new(host.clone()), &queue);

        bridge.update("content");
        queue.tick();
        assert!(host.is_showing());

        assert!(host.user_swipe());
        assert!(!presented.get(), "swipe must flip the caller's boolean");
    }
}

#![forbid(unsafe_code)]

//! Pass-through presentation configuration for a sheet.
//!
//! Everything here is handed to the host verbatim when a sheet is presented;
//! the bridge never interprets it beyond the dimming helper.

use smallvec::{SmallVec, smallvec};

use crate::stage::Stage;

/// Ordered list of allowed stages. Two is the common case, so the list is
/// inline-allocated at that capacity.
pub type StageList = SmallVec<[Stage; 2]>;

/// Presentation configuration for a sheet.
///
/// Defaults match the customary two-stage sheet: medium and large stages,
/// background always dimmed, scroll expansion and compact-height edge
/// attachment on, grabber visible, width following content.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetConfig {
    /// Allowed stages, in ascending height order. Never empty.
    pub stages: StageList,
    /// Largest stage at which the background stays undimmed. `None` means
    /// the background is always dimmed; the largest stage means it never is.
    pub undimmed_stage_threshold: Option<Stage>,
    /// Whether a nested scrollable region dragged to its edge expands or
    /// contracts the sheet.
    pub scroll_expansion: bool,
    /// Whether the sheet attaches flush to the bottom edge in a
    /// compact-height layout.
    pub edge_attached_in_compact_height: bool,
    /// Whether the platform drag grabber is shown.
    pub grabber_visible: bool,
    /// Whether sheet width tracks preferred content width when
    /// edge-attached.
    pub width_follows_content: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            stages: smallvec![Stage::Medium, Stage::Large],
            undimmed_stage_threshold: None,
            scroll_expansion: true,
            edge_attached_in_compact_height: true,
            grabber_visible: true,
            width_follows_content: true,
        }
    }
}

impl SheetConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the allowed stages.
    ///
    /// # Panics
    ///
    /// Panics if `stages` is empty; a sheet with no stage to rest at is a
    /// broken caller contract, not a runtime condition.
    #[must_use]
    pub fn stages(mut self, stages: impl IntoIterator<Item = Stage>) -> Self {
        self.stages = stages.into_iter().collect();
        assert!(
            !self.stages.is_empty(),
            "SheetConfig::stages requires at least one stage"
        );
        self
    }

    /// Set the largest stage at which the background stays undimmed.
    #[must_use]
    pub fn undimmed_stage_threshold(mut self, threshold: Option<Stage>) -> Self {
        self.undimmed_stage_threshold = threshold;
        self
    }

    /// Set scroll-expansion behavior.
    #[must_use]
    pub fn scroll_expansion(mut self, expand: bool) -> Self {
        self.scroll_expansion = expand;
        self
    }

    /// Set compact-height edge attachment.
    #[must_use]
    pub fn edge_attached_in_compact_height(mut self, attached: bool) -> Self {
        self.edge_attached_in_compact_height = attached;
        self
    }

    /// Set grabber visibility.
    #[must_use]
    pub fn grabber_visible(mut self, visible: bool) -> Self {
        self.grabber_visible = visible;
        self
    }

    /// Set whether sheet width tracks preferred content width.
    #[must_use]
    pub fn width_follows_content(mut self, follows: bool) -> Self {
        self.width_follows_content = follows;
        self
    }

    /// Whether the background behind the sheet is dimmed while the sheet
    /// rests at `stage`.
    ///
    /// With no threshold every stage dims; otherwise only stages above the
    /// threshold do.
    #[must_use]
    pub fn dims_background_at(&self, stage: Stage) -> bool {
        match self.undimmed_stage_threshold {
            None => true,
            Some(threshold) => stage > threshold,
        }
    }
}

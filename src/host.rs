// Content host - region registry and the scrollable viewport
use crate::model::{ContentNode, TargetId};
use crate::scroll::{ScrollBehavior, ScrollCompleted, SmoothScroll};
use std::collections::HashMap;
use tracing::trace;

/// Offsets closer than this (in points) count as the same position.
const SNAP_TOLERANCE: f32 = 0.5;

/// Measured geometry of a region, relative to the top of the scrollable
/// content.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RegionLayout {
    pub top: f32,
    pub height: f32,
}

impl RegionLayout {
    pub fn is_laid_out(&self) -> bool {
        self.height > 0.0
    }
}

/// What the scroll-sync controller needs from the content area.
pub trait ContentHost {
    /// Layout of the region registered under `id`; `None` when no region has
    /// that id. An unmeasured region reports a zero height.
    fn region(&self, id: &TargetId) -> Option<RegionLayout>;
    fn scroll_to(&mut self, offset: f32, behavior: ScrollBehavior);
    fn scroll_offset(&self) -> f32;
    /// True once every region has been measured at least once.
    fn layout_complete(&self) -> bool;
}

/// Regions addressable by id, including those supplied one level down by a
/// nested component.
#[derive(Clone, Debug, Default)]
pub struct RegionRegistry {
    slots: HashMap<TargetId, RegionLayout>,
}

impl RegionRegistry {
    pub fn from_nodes(nodes: &[ContentNode]) -> Self {
        let slots = nodes
            .iter()
            .flat_map(|node| node.regions())
            .map(|region| (region.id.clone(), RegionLayout::default()))
            .collect();
        Self { slots }
    }

    pub fn layout(&self, id: &TargetId) -> Option<RegionLayout> {
        self.slots.get(id).copied()
    }

    /// Returns false for ids that are not registered.
    pub fn record(&mut self, id: &TargetId, layout: RegionLayout) -> bool {
        match self.slots.get_mut(id) {
            Some(slot) => {
                *slot = layout;
                true
            }
            None => false,
        }
    }

    /// Top of the measured region closest to `offset`.
    pub fn nearest_top(&self, offset: f32) -> Option<f32> {
        self.slots
            .values()
            .filter(|layout| layout.is_laid_out())
            .map(|layout| layout.top)
            .min_by(|a, b| (a - offset).abs().total_cmp(&(b - offset).abs()))
    }

    fn all_measured(&self) -> bool {
        self.slots.values().all(RegionLayout::is_laid_out)
    }
}

/// Scroll state of the content area. The view feeds it measurements and the
/// offsets egui reports; it hands back the offset to force while a scroll
/// is in flight.
pub struct Viewport {
    registry: RegionRegistry,
    offset: f32,
    max_offset: f32,
    animation: Option<SmoothScroll>,
    jump_pending: bool,
    scroll_duration: f32,
    completed: Vec<ScrollCompleted>,
    measured: bool,
    // Set by user scrolling until the offset comes to rest
    settling: bool,
    moved: bool,
}

impl Viewport {
    /// `scroll_duration` is in seconds.
    pub fn new(registry: RegionRegistry, scroll_duration: f32) -> Self {
        Self {
            registry,
            offset: 0.0,
            max_offset: f32::INFINITY,
            animation: None,
            jump_pending: false,
            scroll_duration,
            completed: Vec::new(),
            measured: false,
            settling: false,
            moved: false,
        }
    }

    pub fn record_layout(&mut self, id: &TargetId, layout: RegionLayout) {
        self.registry.record(id, layout);
    }

    /// Called after the view has measured every region for a frame.
    pub fn finish_layout_pass(&mut self, max_offset: f32) {
        self.max_offset = max_offset.max(0.0);
        self.measured = self.registry.all_measured();
    }

    /// Advance a running scroll by `dt` seconds. Returns the offset the view
    /// must apply this frame, or `None` when the user owns the scroll.
    pub fn advance(&mut self, dt: f32) -> Option<f32> {
        if let Some(animation) = self.animation.as_mut() {
            let (offset, done) = animation.step(dt);
            self.offset = offset;
            if done {
                self.animation = None;
                self.completed.push(ScrollCompleted { offset });
            }
            return Some(offset);
        }

        if self.jump_pending {
            self.jump_pending = false;
            return Some(self.offset);
        }

        None
    }

    /// Adopt the offset egui ended the frame with (user wheel or drag).
    pub fn sync_offset(&mut self, offset: f32) {
        if self.animation.is_none() && !self.jump_pending {
            self.moved = (offset - self.offset).abs() > SNAP_TOLERANCE;
            self.offset = offset;
        }
    }

    /// The user took over: drop the running animation where it is. Once the
    /// user lets go, [`Self::snap_when_idle`] settles on a region boundary.
    pub fn interrupt(&mut self) {
        self.settling = true;
        if self.animation.take().is_some() {
            trace!(offset = self.offset, "scroll interrupted");
        }
    }

    /// Called on frames without user scroll input. When a user scroll has
    /// come to rest between regions, smooth-scroll to the nearest region top.
    /// Returns the offset snapped to, if any.
    pub fn snap_when_idle(&mut self) -> Option<f32> {
        if !self.settling || self.moved || self.is_animating() {
            return None;
        }
        self.settling = false;

        let top = self.registry.nearest_top(self.offset)?.clamp(0.0, self.max_offset);
        if (top - self.offset).abs() <= SNAP_TOLERANCE {
            return None;
        }
        trace!(from = self.offset, to = top, "snapping to region");
        self.scroll_to(top, ScrollBehavior::Smooth);
        Some(top)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some() || self.jump_pending
    }

    /// A user scroll has not come to rest yet.
    pub fn is_settling(&self) -> bool {
        self.settling
    }

    /// Drain scroll-completed notifications.
    pub fn take_completed(&mut self) -> Vec<ScrollCompleted> {
        std::mem::take(&mut self.completed)
    }
}

impl ContentHost for Viewport {
    fn region(&self, id: &TargetId) -> Option<RegionLayout> {
        self.registry.layout(id)
    }

    fn scroll_to(&mut self, offset: f32, behavior: ScrollBehavior) {
        let target = offset.clamp(0.0, self.max_offset);
        trace!(from = self.offset, to = target, ?behavior, "scroll requested");

        if behavior == ScrollBehavior::Instant || self.scroll_duration <= 0.0 {
            self.animation = None;
            self.offset = target;
            self.jump_pending = true;
            self.completed.push(ScrollCompleted { offset: target });
        } else {
            // A new scroll replaces a running one, starting from where it is
            self.animation = Some(SmoothScroll::new(self.offset, target, self.scroll_duration));
        }
    }

    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn layout_complete(&self) -> bool {
        self.measured
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Content;

    fn viewport() -> Viewport {
        let content = Content::builtin().expect("builtin content");
        Viewport::new(RegionRegistry::from_nodes(&content.nodes), 0.3)
    }

    fn id(s: &str) -> TargetId {
        TargetId::new(s)
    }

    #[test]
    fn test_registry_penetrates_one_component_level() {
        let registry = viewport().registry;
        for target in crate::model::default_targets() {
            assert!(registry.layout(&target.id).is_some(), "{} registered", target.id);
        }
        // Components themselves are not addressable
        assert!(registry.layout(&id("resume-section")).is_none());
        assert!(registry.layout(&id("projects-section")).is_none());
    }

    #[test]
    fn test_unmeasured_regions_are_not_laid_out() {
        let mut vp = viewport();
        let layout = vp.region(&id("screen-3")).expect("registered");
        assert!(!layout.is_laid_out());
        assert!(!vp.layout_complete());

        for (i, target) in crate::model::default_targets().iter().enumerate() {
            vp.record_layout(&target.id, RegionLayout { top: i as f32 * 600.0, height: 600.0 });
        }
        vp.finish_layout_pass(2400.0);
        assert!(vp.layout_complete());
        assert_eq!(vp.region(&id("screen-3")), Some(RegionLayout { top: 1200.0, height: 600.0 }));
    }

    #[test]
    fn test_smooth_scroll_completes_with_notification() {
        let mut vp = viewport();
        vp.scroll_to(900.0, ScrollBehavior::Smooth);
        assert!(vp.is_animating());

        let first = vp.advance(0.1).expect("animating");
        assert!(first > 0.0 && first < 900.0);
        assert!(vp.take_completed().is_empty());

        assert_eq!(vp.advance(1.0), Some(900.0));
        assert_eq!(vp.take_completed(), vec![ScrollCompleted { offset: 900.0 }]);
        assert_eq!(vp.advance(0.1), None);
        assert_eq!(vp.scroll_offset(), 900.0);
    }

    #[test]
    fn test_instant_scroll_applies_once() {
        let mut vp = viewport();
        vp.scroll_to(300.0, ScrollBehavior::Instant);
        assert_eq!(vp.scroll_offset(), 300.0);
        assert_eq!(vp.advance(0.0), Some(300.0));
        assert_eq!(vp.advance(0.0), None);
    }

    #[test]
    fn test_scroll_clamped_to_content() {
        let mut vp = viewport();
        vp.finish_layout_pass(1000.0);
        vp.scroll_to(5000.0, ScrollBehavior::Instant);
        assert_eq!(vp.scroll_offset(), 1000.0);
        vp.scroll_to(-20.0, ScrollBehavior::Instant);
        assert_eq!(vp.scroll_offset(), 0.0);
    }

    #[test]
    fn test_interrupt_keeps_partial_offset() {
        let mut vp = viewport();
        vp.scroll_to(900.0, ScrollBehavior::Smooth);
        let partial = vp.advance(0.05).expect("animating");
        vp.interrupt();
        assert!(!vp.is_animating());
        assert_eq!(vp.scroll_offset(), partial);

        vp.sync_offset(123.0);
        assert_eq!(vp.scroll_offset(), 123.0);
    }

    #[test]
    fn test_user_offset_ignored_while_animating() {
        let mut vp = viewport();
        vp.scroll_to(900.0, ScrollBehavior::Smooth);
        vp.advance(0.05);
        let during = vp.scroll_offset();
        vp.sync_offset(5.0);
        assert_eq!(vp.scroll_offset(), during);
    }

    fn measured_viewport() -> Viewport {
        let mut vp = viewport();
        for (i, target) in crate::model::default_targets().iter().enumerate() {
            vp.record_layout(&target.id, RegionLayout { top: i as f32 * 600.0, height: 600.0 });
        }
        vp.finish_layout_pass(2400.0);
        vp
    }

    #[test]
    fn test_user_scroll_snaps_to_nearest_region_once_at_rest() {
        let mut vp = measured_viewport();

        // Wheel frames: egui moves the offset, we only follow
        vp.interrupt();
        vp.sync_offset(500.0);
        vp.interrupt();
        vp.sync_offset(740.0);
        assert!(vp.is_settling());

        // First quiet frame still saw movement
        assert_eq!(vp.snap_when_idle(), None);
        vp.sync_offset(740.0);

        assert_eq!(vp.snap_when_idle(), Some(600.0));
        assert!(!vp.is_settling());
        assert_eq!(vp.advance(10.0), Some(600.0));
        assert_eq!(vp.scroll_offset(), 600.0);
        assert_eq!(vp.take_completed(), vec![ScrollCompleted { offset: 600.0 }]);
    }

    #[test]
    fn test_snap_rounds_to_closer_boundary() {
        let mut vp = measured_viewport();
        vp.interrupt();
        vp.sync_offset(1550.0);
        vp.sync_offset(1550.0);
        assert_eq!(vp.snap_when_idle(), Some(1800.0));
    }

    #[test]
    fn test_no_snap_when_resting_on_boundary() {
        let mut vp = measured_viewport();
        vp.interrupt();
        vp.sync_offset(1200.0);
        vp.sync_offset(1200.0);
        assert_eq!(vp.snap_when_idle(), None);
        assert!(!vp.is_animating());
        assert!(!vp.is_settling());
    }

    #[test]
    fn test_no_snap_without_user_scroll() {
        let mut vp = measured_viewport();
        vp.sync_offset(700.0);
        vp.sync_offset(700.0);
        assert_eq!(vp.snap_when_idle(), None);
        assert_eq!(vp.scroll_offset(), 700.0);
    }

    #[test]
    fn test_no_snap_before_measurement() {
        let mut vp = viewport();
        vp.interrupt();
        vp.sync_offset(300.0);
        vp.sync_offset(300.0);
        assert_eq!(vp.snap_when_idle(), None);
        assert!(!vp.is_animating());
    }
}

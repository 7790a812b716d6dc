// Scroll-sync controller - keeps the active screen, scroll position and
// location fragment consistent
use crate::error::NavigationError;
use crate::history::{FragmentChange, HistoryMode, HistoryPort, ListenerId};
use crate::host::{ContentHost, RegionLayout};
use crate::model::{parse_fragment, TargetId, TargetList};
use crate::scroll::ScrollBehavior;
use std::sync::mpsc::{channel, Receiver, Sender};
use tracing::{debug, warn};

/// A fragment navigation waiting for the layout gate: applied on a later
/// frame than the one it was queued in, once its region has been measured.
#[derive(Clone, Debug, PartialEq)]
struct PendingNavigation {
    target: TargetId,
    queued_frame: u64,
}

/// Sole owner of the active screen. Menu clicks, fragment changes and the
/// scroll-to-top affordance all go through here.
pub struct ScrollSyncController<H: HistoryPort> {
    targets: TargetList,
    active: TargetId,
    history: H,
    top_mode: HistoryMode,
    listener: Option<ListenerId>,
    changes_tx: Sender<FragmentChange>,
    changes_rx: Receiver<FragmentChange>,
    pending: Option<PendingNavigation>,
    launch_fragment_handled: bool,
    frame: u64,
}

impl<H: HistoryPort> ScrollSyncController<H> {
    /// `top_mode` is the history write used by [`Self::scroll_to_top`].
    pub fn new(targets: TargetList, history: H, top_mode: HistoryMode) -> Self {
        let (changes_tx, changes_rx) = channel();
        Self {
            active: targets.first().id.clone(),
            targets,
            history,
            top_mode,
            listener: None,
            changes_tx,
            changes_rx,
            pending: None,
            launch_fragment_handled: false,
            frame: 0,
        }
    }

    pub fn active(&self) -> &TargetId {
        &self.active
    }

    pub fn is_active(&self, id: &TargetId) -> bool {
        &self.active == id
    }

    pub fn targets(&self) -> &TargetList {
        &self.targets
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start listening for fragment changes. The listener is registered at
    /// most once however often this is called; the fragment present at load
    /// is honored on the first attach only.
    pub fn attach(&mut self) {
        if self.listener.is_none() {
            let id = self.history.on_fragment_change(self.changes_tx.clone());
            debug!(?id, "fragment listener registered");
            self.listener = Some(id);
        }

        if !self.launch_fragment_handled {
            self.launch_fragment_handled = true;
            self.handle_external_fragment_change();
        }
    }

    pub fn detach(&mut self) {
        if let Some(id) = self.listener.take() {
            self.history.remove_listener(id);
            debug!(?id, "fragment listener removed");
        }
        // Changes queued before detaching are not ours to act on anymore
        while self.changes_rx.try_recv().is_ok() {}
    }

    /// Scroll to `id`, push `#id` onto the history and make it active.
    ///
    /// Unknown targets and targets without a region leave everything
    /// untouched and are reported. A region that has not been measured yet
    /// becomes active right away; its scroll waits for the layout gate.
    pub fn navigate_to<C: ContentHost>(
        &mut self,
        host: &mut C,
        id: &str,
    ) -> Result<(), NavigationError> {
        let Some(target) = self.targets.get(id).map(|t| t.id.clone()) else {
            warn!(screen = id, "navigation to unknown target ignored");
            return Err(NavigationError::UnknownTarget(id.to_string()));
        };
        let Some(layout) = host.region(&target) else {
            warn!(screen = id, "navigation target has no content region");
            return Err(NavigationError::MissingRegion(id.to_string()));
        };

        // An explicit navigation supersedes a deferred one
        self.pending = None;
        if layout.is_laid_out() {
            self.apply(host, target, layout, HistoryMode::Push);
        } else {
            debug!(screen = %target, frame = self.frame, "region not measured, scroll deferred");
            self.history.set_fragment(&target, HistoryMode::Push);
            self.active = target.clone();
            self.pending = Some(PendingNavigation {
                target,
                queued_frame: self.frame,
            });
        }
        Ok(())
    }

    /// React to the fragment having changed outside the controller. The
    /// navigation itself waits for the layout gate in [`Self::poll`].
    ///
    /// The newest fragment always wins: one that requests no navigation
    /// still cancels a navigation queued for an older one.
    pub fn handle_external_fragment_change(&mut self) {
        let fragment = self.history.fragment();
        let Some(target) = parse_fragment(&fragment) else {
            debug!(%fragment, "no navigation requested by fragment");
            self.pending = None;
            return;
        };
        if !self.targets.contains(target.as_str()) {
            debug!(screen = %target, "fragment names no navigation target, ignored");
            self.pending = None;
            return;
        }

        debug!(screen = %target, frame = self.frame, "fragment navigation queued");
        self.pending = Some(PendingNavigation {
            target,
            queued_frame: self.frame,
        });
    }

    /// Run once per frame, before the content is drawn. Applies a pending
    /// fragment navigation whose gate has opened, then picks up fragment
    /// changes delivered since the last frame. Returns the target navigated
    /// to, if any.
    pub fn poll<C: ContentHost>(&mut self, host: &mut C) -> Option<TargetId> {
        self.frame += 1;
        let navigated = self.advance_pending(host);

        let mut changed = false;
        while let Ok(change) = self.changes_rx.try_recv() {
            debug!(old = %change.old, new = %change.new, "fragment change received");
            changed = true;
        }
        if changed {
            self.handle_external_fragment_change();
        }

        navigated
    }

    /// Scroll to the top and reset the fragment and the active screen to the
    /// first target.
    pub fn scroll_to_top<C: ContentHost>(&mut self, host: &mut C) {
        let first = self.targets.first().id.clone();
        host.scroll_to(0.0, ScrollBehavior::Smooth);
        self.history.set_fragment(&first, self.top_mode);
        self.pending = None;
        debug!(screen = %first, mode = ?self.top_mode, "scrolled to top");
        self.active = first;
    }

    fn advance_pending<C: ContentHost>(&mut self, host: &mut C) -> Option<TargetId> {
        let pending = self.pending.as_ref()?;
        if self.frame <= pending.queued_frame {
            return None;
        }

        match host.region(&pending.target) {
            Some(layout) if layout.is_laid_out() => {
                let target = pending.target.clone();
                self.pending = None;
                self.apply(host, target.clone(), layout, HistoryMode::Replace);
                Some(target)
            }
            None if host.layout_complete() => {
                warn!(screen = %pending.target, "fragment target has no content region");
                self.pending = None;
                None
            }
            // Not measured yet
            _ => None,
        }
    }

    fn apply<C: ContentHost>(
        &mut self,
        host: &mut C,
        target: TargetId,
        layout: RegionLayout,
        mode: HistoryMode,
    ) {
        host.scroll_to(layout.top, ScrollBehavior::Smooth);

        match mode {
            HistoryMode::Push => self.history.set_fragment(&target, HistoryMode::Push),
            HistoryMode::Replace => {
                // The entry already names the target unless the port stores
                // it in another spelling
                if self.history.fragment() != target.as_str() {
                    self.history.set_fragment(&target, HistoryMode::Replace);
                }
            }
        }

        debug!(screen = %target, top = layout.top, ?mode, "active screen changed");
        self.active = target;
    }
}

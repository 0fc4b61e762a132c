//! The gesture-to-position controller.
//!
//! [`SheetController`] composes snap resolution, friction, scroll-region
//! arbitration and snap selection into one state machine driven by gesture
//! samples, viewport changes and animator notifications. All processing is
//! synchronous; the animator is fire-and-forget between gesture-end and the
//! next gesture-start.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::{
    animator::{SheetAnimator, Transition},
    config::SheetArgs,
    element::{ElementId, ElementTree},
    error::SheetError,
    friction::FrictionModel,
    gesture::{FrameOutcome, GestureConfig, GestureEvent, GestureSample},
    position::PositionField,
    scroll_lock::{NoScrollLock, ScrollLock},
    scroll_region::{ScrollRegion, ScrollVerdict, inside_scroll_region},
    session::{DragSession, SheetPhase},
    snap_points::SnapPoints,
    snap_selector::select_nearest,
    viewport::{ViewportSource, ViewportState},
};

/// Drives a snapping sheet from gesture samples.
///
/// The controller exclusively owns the sheet offset. During a drag it writes
/// the offset synchronously; otherwise the animator's frames are applied via
/// [`Self::apply_animation_frame`].
pub struct SheetController {
    args: SheetArgs,
    viewport: ViewportState,
    snap_points: SnapPoints,
    friction: FrictionModel,
    position: PositionField,
    phase: SheetPhase,
    animator: Box<dyn SheetAnimator + Send>,
    scroll_lock: Box<dyn ScrollLock + Send>,
    sheet_root: Option<ElementId>,
    element_tree: Option<Arc<dyn ElementTree + Send + Sync>>,
    scroll_region: Option<Arc<dyn ScrollRegion + Send + Sync>>,
}

impl SheetController {
    /// Creates a controller resting at the initial snap point.
    ///
    /// The initial offset is the snap point nearest to
    /// `initial_fraction * height`, so the sheet always starts on a resting
    /// position.
    pub fn new(
        args: SheetArgs,
        viewport: ViewportState,
        animator: impl SheetAnimator + Send + 'static,
    ) -> Result<Self, SheetError> {
        args.validate()?;
        let viewport = viewport.validated()?;
        let snap_points = SnapPoints::resolve(&args.snap_points, viewport.height);
        let friction = FrictionModel::new(
            viewport.height,
            snap_points.largest(),
            args.min_visible_height,
        );
        let initial = select_nearest(args.initial_fraction() * viewport.height, &snap_points);
        debug!("Sheet created at {initial} with snap points {:?}", snap_points.as_slice());

        Ok(Self {
            args,
            viewport,
            snap_points,
            friction,
            position: PositionField::new(initial),
            phase: SheetPhase::Idle,
            animator: Box::new(animator),
            scroll_lock: Box::new(NoScrollLock),
            sheet_root: None,
            element_tree: None,
            scroll_region: None,
        })
    }

    /// Sets the background scroll-lock collaborator.
    pub fn with_scroll_lock(mut self, scroll_lock: impl ScrollLock + Send + 'static) -> Self {
        self.scroll_lock = Box::new(scroll_lock);
        self
    }

    /// Sets the element the sheet is rooted at.
    pub fn with_sheet_root(mut self, sheet_root: ElementId) -> Self {
        self.sheet_root = Some(sheet_root);
        self
    }

    /// Sets the tree used to locate gesture origins.
    pub fn with_element_tree(mut self, tree: Arc<dyn ElementTree + Send + Sync>) -> Self {
        self.element_tree = Some(tree);
        self
    }

    /// Sets the nested scroll region whose scrolling takes precedence.
    pub fn with_scroll_region(mut self, region: Arc<dyn ScrollRegion + Send + Sync>) -> Self {
        self.scroll_region = Some(region);
        self
    }

    /// Current configuration.
    pub fn args(&self) -> &SheetArgs {
        &self.args
    }

    /// Current viewport snapshot.
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    /// Resolved resting offsets for the current viewport.
    pub fn snap_points(&self) -> &SnapPoints {
        &self.snap_points
    }

    /// Current sheet offset in pixels.
    pub fn position(&self) -> f32 {
        self.position.y()
    }

    /// The position field, including its current owner.
    pub fn position_field(&self) -> &PositionField {
        &self.position
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SheetPhase {
        self.phase
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, SheetPhase::Dragging(_))
    }

    /// Whether the animator is travelling toward a snap point.
    pub fn is_settling(&self) -> bool {
        matches!(self.phase, SheetPhase::Settling { .. })
    }

    /// Largest offset an intermediate drag frame may reach.
    pub fn max_drag_offset(&self) -> f32 {
        self.friction.max_offset()
    }

    /// Settings for the gesture source.
    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            delay: self.args.drag_delay.duration(),
        }
    }

    /// Replaces the configuration and re-resolves the snap points.
    ///
    /// An idle sheet left off the new snap set settles to its nearest point.
    /// A drag or an in-flight settle is left untouched; their next release
    /// uses the new points.
    pub fn set_args(&mut self, args: SheetArgs) -> Result<(), SheetError> {
        args.validate()?;
        self.args = args;
        self.refresh_layout();

        let y = self.position.y();
        if self.phase == SheetPhase::Idle && !self.snap_points.contains(y) {
            let target = select_nearest(y, &self.snap_points);
            debug!("Snap points changed under the resting sheet; settling from {y} to {target}");
            self.settle_to(target, Transition::stiff());
        }
        Ok(())
    }

    /// Applies a new viewport height.
    ///
    /// Snap points are re-resolved immediately. The offset and the drag
    /// session are not touched; an in-flight drag keeps its anchor and the
    /// new points apply from the next release.
    pub fn resize(&mut self, height: f32) -> Result<(), SheetError> {
        let viewport = ViewportState::new(height).validated()?;
        if viewport == self.viewport {
            return Ok(());
        }
        debug!("Viewport resized from {} to {height}", self.viewport.height);
        self.viewport = viewport;
        self.refresh_layout();
        Ok(())
    }

    /// Polls `source` and resizes when its height changed.
    ///
    /// Returns whether the snap points were re-resolved.
    pub fn poll_viewport(&mut self, source: &impl ViewportSource) -> Result<bool, SheetError> {
        let height = source.height();
        if height == self.viewport.height {
            return Ok(false);
        }
        self.resize(height)?;
        Ok(true)
    }

    fn refresh_layout(&mut self) {
        self.snap_points = SnapPoints::resolve(&self.args.snap_points, self.viewport.height);
        self.friction = FrictionModel::new(
            self.viewport.height,
            self.snap_points.largest(),
            self.args.min_visible_height,
        );
        trace!("Snap points resolved to {:?}", self.snap_points.as_slice());
    }

    /// Processes one gesture sample.
    ///
    /// Samples without an event payload, and samples that arrive while no
    /// drag is active (for example after a cancellation), have no effect.
    /// The one exception is a payload-less release frame during a drag: the
    /// drag still ends at the last tracked offset.
    #[tracing::instrument(
        level = "trace",
        skip(self, sample),
        fields(first = sample.first, last = sample.last, movement_y = sample.movement_y)
    )]
    pub fn handle_sample(&mut self, sample: &GestureSample) -> FrameOutcome {
        let Some(event) = sample.event else {
            if sample.last && self.is_dragging() {
                debug!("Release frame without an event payload; ending the drag in place");
                return self.release(self.position.y(), sample.velocity_y);
            }
            trace!("Ignoring gesture sample without an event payload");
            return FrameOutcome::Ignored;
        };

        if sample.first {
            self.begin_drag(event);
        }

        let Some(session) = self.phase.session().copied() else {
            trace!("Ignoring gesture sample outside of a drag");
            return FrameOutcome::Ignored;
        };

        let raw = session.raw_offset(sample.movement_y);
        match self.scroll_verdict(&session, sample.movement_y) {
            ScrollVerdict::Cede => {
                if sample.last {
                    // The sheet did not move this frame; settle from where it is.
                    return self.release(self.position.y(), sample.velocity_y);
                }
                trace!("Frame ceded to the scroll region");
                FrameOutcome::Ceded
            }
            ScrollVerdict::SheetWithoutFriction if raw < 0.0 => {
                debug!("Upward drag while content can still scroll; cancelling at the open bound");
                sample.cancel.call();
                self.cancel_drag(0.0, sample.velocity_y)
            }
            ScrollVerdict::SheetWithoutFriction => self.track(raw, sample),
            ScrollVerdict::Sheet => {
                let adjusted = FrictionModel::apply(raw);
                if FrictionModel::should_cancel(adjusted) {
                    debug!("Overdrag reached {adjusted}; cancelling");
                    sample.cancel.call();
                    return self.cancel_drag(adjusted, sample.velocity_y);
                }
                self.track(adjusted, sample)
            }
        }
    }

    /// Applies one frame of animator output.
    ///
    /// Returns `false` when a drag owns the offset and the frame was dropped.
    pub fn apply_animation_frame(&mut self, value: f32) -> bool {
        let applied = self.position.write_animated(value);
        if !applied {
            warn!("Animator wrote {value} while a drag owns the sheet position; frame dropped");
        }
        applied
    }

    /// The animator finished its transition.
    ///
    /// The offset is pinned exactly to the settle target so the sheet rests
    /// on a snap point.
    pub fn animation_settled(&mut self) {
        match self.phase {
            SheetPhase::Settling { target } => {
                self.position.write_animated(target);
                self.phase = SheetPhase::Idle;
                debug!("Sheet settled at {target}");
            }
            SheetPhase::Dragging(_) => {
                trace!("Ignoring settle notification during a drag");
            }
            SheetPhase::Idle => {}
        }
    }

    /// Animates to the snap point at `index` (ascending offsets).
    ///
    /// Returns `false` while dragging or when `index` is out of range.
    pub fn snap_to(&mut self, index: usize) -> bool {
        if self.is_dragging() {
            warn!("snap_to({index}) ignored during a drag");
            return false;
        }
        let Some(&target) = self.snap_points.get(index) else {
            warn!(
                "snap_to({index}) ignored; only {} snap points",
                self.snap_points.len()
            );
            return false;
        };
        self.settle_to(target, Transition::stiff());
        true
    }

    /// Animates to the most open snap point.
    pub fn open(&mut self) -> bool {
        self.snap_to(0)
    }

    /// Animates to the most hidden snap point.
    pub fn collapse(&mut self) -> bool {
        self.snap_to(self.snap_points.len() - 1)
    }

    fn begin_drag(&mut self, event: GestureEvent) {
        if self.is_dragging() {
            warn!("Gesture started while a drag is active; restarting the session");
        }

        self.animator.interrupt();
        self.position.suspend_animator();
        if let Some(root) = self.sheet_root {
            self.scroll_lock.lock(root);
        }

        let inside = match (&self.element_tree, self.sheet_root, &self.scroll_region) {
            (Some(tree), Some(root), Some(region)) => {
                inside_scroll_region(tree.as_ref(), event.origin, root, Some(region.element()))
            }
            _ => false,
        };
        let anchor = self.position.y();
        self.phase = SheetPhase::Dragging(DragSession::new(anchor, inside));
        debug!("Drag started at {anchor} (inside scroll region: {inside})");
    }

    fn scroll_verdict(&self, session: &DragSession, movement_y: f32) -> ScrollVerdict {
        if !session.inside_scroll_region() {
            return ScrollVerdict::Sheet;
        }
        self.scroll_region
            .as_ref()
            .map_or(ScrollVerdict::Sheet, |region| {
                ScrollVerdict::evaluate(movement_y, region.metrics())
            })
    }

    fn track(&mut self, offset: f32, sample: &GestureSample) -> FrameOutcome {
        if sample.last {
            return self.release(offset, sample.velocity_y);
        }
        let offset = self.friction.clamp(offset);
        self.position.write_drag(offset);
        trace!("Tracking at {offset}");
        FrameOutcome::Tracked { offset }
    }

    fn release(&mut self, offset: f32, velocity: f32) -> FrameOutcome {
        let target = select_nearest(offset, &self.snap_points);
        debug!("Released at {offset} with velocity {velocity}; settling to {target}");
        self.end_drag();
        self.settle_to(target, Transition::stiff_with_velocity(velocity));
        FrameOutcome::Released { target, velocity }
    }

    fn cancel_drag(&mut self, offset: f32, velocity: f32) -> FrameOutcome {
        let target = select_nearest(offset.max(0.0), &self.snap_points);
        debug!("Drag cancelled; settling to {target}");
        self.end_drag();
        self.settle_to(target, Transition::stiff_with_velocity(velocity));
        FrameOutcome::Cancelled { target }
    }

    fn end_drag(&mut self) {
        self.scroll_lock.release_all();
        self.position.resume_animator();
    }

    fn settle_to(&mut self, target: f32, transition: Transition) {
        self.animator.set_target(target, transition);
        self.phase = SheetPhase::Settling { target };
    }
}

impl std::fmt::Debug for SheetController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetController")
            .field("args", &self.args)
            .field("viewport", &self.viewport)
            .field("snap_points", &self.snap_points)
            .field("position", &self.position)
            .field("phase", &self.phase)
            .field("sheet_root", &self.sheet_root)
            .finish_non_exhaustive()
    }
}

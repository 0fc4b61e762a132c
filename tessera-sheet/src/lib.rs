//! Gesture-driven snapping sheet controller.
//!
//! ## Usage
//!
//! Feed pointer/touch samples from a gesture source into a
//! [`SheetController`], render the panel at [`SheetController::position`], and
//! forward the animator's per-frame output back through
//! [`SheetController::apply_animation_frame`].
//!
//! ```
//! use tessera_sheet::{
//!     Callback, FrameOutcome, GestureEvent, GestureSample, SheetAnimator, SheetArgs,
//!     SheetController, Transition, ViewportState, ElementId,
//! };
//!
//! struct NoopAnimator;
//!
//! impl SheetAnimator for NoopAnimator {
//!     fn set_target(&mut self, _target: f32, _transition: Transition) {}
//!     fn interrupt(&mut self) {}
//! }
//!
//! let mut sheet = SheetController::new(
//!     SheetArgs::default().snap_points(vec![0.0, 0.4, 0.8]),
//!     ViewportState::new(800.0),
//!     NoopAnimator,
//! )?;
//! assert_eq!(sheet.position(), 640.0);
//!
//! let event = Some(GestureEvent::new(ElementId::new(1)));
//! sheet.handle_sample(&GestureSample::start(event).cancel(Callback::default()));
//! sheet.handle_sample(&GestureSample::moved(-340.0, 0.0, event));
//! let outcome = sheet.handle_sample(&GestureSample::end(-340.0, 0.0, event));
//! assert_eq!(outcome, FrameOutcome::Released { target: 320.0, velocity: 0.0 });
//! # Ok::<(), tessera_sheet::SheetError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animator;
pub mod callback;
pub mod config;
pub mod controller;
pub mod element;
pub mod error;
pub mod friction;
pub mod gesture;
pub mod position;
pub mod scroll_lock;
pub mod scroll_region;
pub mod session;
pub mod snap_points;
pub mod snap_selector;
pub mod viewport;

pub use animator::{SheetAnimator, Stiffness, Transition};
pub use callback::Callback;
pub use config::{DragDelay, SheetArgs};
pub use controller::SheetController;
pub use element::{AncestorPath, ElementId, ElementTree, ParentMap, ancestor_path};
pub use error::SheetError;
pub use friction::{CANCEL_THRESHOLD, FrictionModel, MIN_DRAG_OFFSET};
pub use gesture::{FrameOutcome, GestureConfig, GestureEvent, GestureSample};
pub use position::{PositionField, PositionWriter};
pub use scroll_lock::{NoScrollLock, ScrollLock};
pub use scroll_region::{ScrollMetrics, ScrollRegion, ScrollVerdict, inside_scroll_region};
pub use session::{DragSession, SheetPhase};
pub use snap_points::SnapPoints;
pub use snap_selector::select_nearest;
pub use viewport::{ViewportSource, ViewportState};

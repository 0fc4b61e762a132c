//! Samples delivered by the external gesture source, and what the controller
//! made of them.
//!
//! ## Usage
//!
//! The gesture source measures raw pointer movement and velocity and calls
//! [`SheetController::handle_sample`](crate::SheetController::handle_sample)
//! once per frame. The returned [`FrameOutcome`] tells the host whether the
//! underlying event was consumed by the sheet.

use std::time::Duration;

use crate::{callback::Callback, element::ElementId};

/// The input event a sample was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureEvent {
    /// Element the pointer went down on.
    pub origin: ElementId,
}

impl GestureEvent {
    /// Creates an event originating at `origin`.
    pub fn new(origin: ElementId) -> Self {
        Self { origin }
    }
}

/// One frame of a vertical drag gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSample {
    /// First frame of the gesture.
    pub first: bool,
    /// Last frame of the gesture (pointer released).
    pub last: bool,
    /// Vertical movement since the gesture started. Positive hides the sheet.
    pub movement_y: f32,
    /// Instantaneous vertical velocity.
    pub velocity_y: f32,
    /// Underlying input event. Samples without one are ignored.
    pub event: Option<GestureEvent>,
    /// Asks the gesture source to stop delivering this gesture.
    pub cancel: Callback,
}

impl GestureSample {
    /// First frame of a gesture, with no movement yet.
    pub fn start(event: Option<GestureEvent>) -> Self {
        Self {
            first: true,
            last: false,
            movement_y: 0.0,
            velocity_y: 0.0,
            event,
            cancel: Callback::default(),
        }
    }

    /// Intermediate frame.
    pub fn moved(movement_y: f32, velocity_y: f32, event: Option<GestureEvent>) -> Self {
        Self {
            first: false,
            last: false,
            movement_y,
            velocity_y,
            event,
            cancel: Callback::default(),
        }
    }

    /// Release frame.
    pub fn end(movement_y: f32, velocity_y: f32, event: Option<GestureEvent>) -> Self {
        Self {
            first: false,
            last: true,
            movement_y,
            velocity_y,
            event,
            cancel: Callback::default(),
        }
    }

    /// Attaches the gesture source's cancel hook.
    pub fn cancel(mut self, cancel: impl Into<Callback>) -> Self {
        self.cancel = cancel.into();
        self
    }
}

/// Settings the controller asks of the gesture source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GestureConfig {
    /// Hold required before the drag engages, if any.
    pub delay: Option<Duration>,
}

/// What the controller did with a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// No effect: missing event payload, or no drag in progress.
    Ignored,
    /// The frame belongs to the nested scroll region; the host should let the
    /// native scroll proceed.
    Ceded,
    /// The sheet tracked the pointer to `offset`.
    Tracked {
        /// Offset written to the position field.
        offset: f32,
    },
    /// The gesture ended and the animator was sent to `target`.
    Released {
        /// Chosen snap offset.
        target: f32,
        /// Release velocity forwarded to the animator.
        velocity: f32,
    },
    /// The gesture was cancelled and the sheet settles toward `target`.
    Cancelled {
        /// Chosen snap offset.
        target: f32,
    },
}

impl FrameOutcome {
    /// Whether the host should treat the input event as consumed.
    pub fn consumed(&self) -> bool {
        !matches!(self, Self::Ignored | Self::Ceded)
    }
}

//! A fixed-step spring animator for driving the sheet without a renderer.

use std::{sync::Arc, time::Duration};

use parking_lot::Mutex;
use tessera_sheet::{SheetAnimator, Stiffness, Transition};

/// Integration sub-step; longer frames are split.
const MAX_STEP_SECS: f32 = 0.004;
/// Distance to target below which the spring counts as settled.
const REST_DISTANCE: f32 = 0.5;
/// Speed below which the spring counts as settled.
const REST_VELOCITY: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    Idle,
    Running,
    Settled,
}

#[derive(Debug)]
struct SpringState {
    value: f32,
    velocity: f32,
    target: f32,
    stiffness: Stiffness,
    motion: Motion,
}

/// What a call to [`SpringAnimator::tick`] produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpringFrame {
    /// Nothing is animating.
    Idle,
    /// The spring moved to the given value.
    Moving(f32),
    /// The spring reached its target on this frame.
    Settled(f32),
}

/// Shared handle to a damped spring.
///
/// One clone is handed to the controller as its [`SheetAnimator`]; the host
/// keeps another and calls [`Self::tick`] once per frame.
#[derive(Debug, Clone)]
pub struct SpringAnimator {
    state: Arc<Mutex<SpringState>>,
}

impl SpringAnimator {
    pub fn new(value: f32) -> Self {
        Self {
            state: Arc::new(Mutex::new(SpringState {
                value,
                velocity: 0.0,
                target: value,
                stiffness: Stiffness::default(),
                motion: Motion::Idle,
            })),
        }
    }

    /// Moves the spring's current value without touching its target.
    ///
    /// The controller writes drag frames itself, so the spring has to be
    /// brought to the sheet's position before it takes over again.
    pub fn set_value(&self, value: f32) {
        self.state.lock().value = value;
    }

    /// Advances the spring by `dt`.
    pub fn tick(&self, dt: Duration) -> SpringFrame {
        let mut state = self.state.lock();
        match state.motion {
            Motion::Idle => return SpringFrame::Idle,
            Motion::Settled => {
                state.motion = Motion::Idle;
                return SpringFrame::Idle;
            }
            Motion::Running => {}
        }

        let tension = state.stiffness.tension();
        let friction = state.stiffness.friction();
        let mut remaining = dt.as_secs_f32();
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP_SECS);
            // Semi-implicit Euler: velocity first, then position.
            let force = -tension * (state.value - state.target) - friction * state.velocity;
            state.velocity += force * step;
            state.value += state.velocity * step;
            remaining -= step;
        }

        if (state.value - state.target).abs() < REST_DISTANCE
            && state.velocity.abs() < REST_VELOCITY
        {
            state.value = state.target;
            state.velocity = 0.0;
            state.motion = Motion::Settled;
            SpringFrame::Settled(state.value)
        } else {
            SpringFrame::Moving(state.value)
        }
    }
}

impl SheetAnimator for SpringAnimator {
    fn set_target(&mut self, target: f32, transition: Transition) {
        let mut state = self.state.lock();
        state.target = target;
        state.stiffness = transition.stiffness;
        if let Some(velocity) = transition.initial_velocity {
            state.velocity = velocity;
        }
        state.motion = Motion::Running;
    }

    fn interrupt(&mut self) {
        let mut state = self.state.lock();
        state.velocity = 0.0;
        state.motion = Motion::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn settles_on_target() {
        let mut spring = SpringAnimator::new(640.0);
        spring.set_target(320.0, Transition::stiff());

        let mut last = SpringFrame::Idle;
        for _ in 0..600 {
            last = spring.tick(FRAME);
            if matches!(last, SpringFrame::Settled(_)) {
                break;
            }
        }
        assert_eq!(last, SpringFrame::Settled(320.0));
        assert_eq!(spring.tick(FRAME), SpringFrame::Idle);
    }

    #[test]
    fn interrupt_freezes_the_value() {
        let mut spring = SpringAnimator::new(0.0);
        spring.set_target(100.0, Transition::stiff_with_velocity(0.0));
        assert!(matches!(spring.tick(FRAME), SpringFrame::Moving(_)));
        spring.interrupt();
        assert_eq!(spring.tick(FRAME), SpringFrame::Idle);
    }

    #[test]
    fn set_value_keeps_the_pending_target() {
        let mut spring = SpringAnimator::new(0.0);
        spring.set_target(320.0, Transition::stiff());
        spring.set_value(319.9);
        assert_eq!(spring.tick(FRAME), SpringFrame::Settled(320.0));
    }
}

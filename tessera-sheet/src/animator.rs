//! Interface to the external spring animator.
//!
//! The controller hands settle targets to a [`SheetAnimator`] and interrupts
//! it when a drag starts. The animator's per-frame output flows back through
//! [`SheetController::apply_animation_frame`](crate::SheetController::apply_animation_frame),
//! and its completion through
//! [`SheetController::animation_settled`](crate::SheetController::animation_settled).

/// Spring stiffness profile for a transition.
///
/// Each preset is a `(tension, friction)` pair for a damped spring.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Stiffness {
    /// Tension 170, friction 26.
    #[default]
    Default,
    /// Tension 120, friction 14.
    Gentle,
    /// Tension 180, friction 12.
    Wobbly,
    /// Tension 210, friction 20. Used for every sheet transition.
    Stiff,
    /// Tension 280, friction 60.
    Slow,
    /// Tension 280, friction 120.
    Molasses,
}

impl Stiffness {
    /// Restoring force of the spring.
    pub fn tension(self) -> f32 {
        match self {
            Self::Default => 170.0,
            Self::Gentle => 120.0,
            Self::Wobbly => 180.0,
            Self::Stiff => 210.0,
            Self::Slow | Self::Molasses => 280.0,
        }
    }

    /// Velocity damping of the spring.
    pub fn friction(self) -> f32 {
        match self {
            Self::Default => 26.0,
            Self::Gentle => 14.0,
            Self::Wobbly => 12.0,
            Self::Stiff => 20.0,
            Self::Slow => 60.0,
            Self::Molasses => 120.0,
        }
    }
}

/// How the animator should travel to a target.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Velocity to start from, usually the gesture's release velocity.
    pub initial_velocity: Option<f32>,
    /// Spring profile.
    pub stiffness: Stiffness,
}

impl Transition {
    /// A stiff transition starting from `velocity`.
    pub fn stiff_with_velocity(velocity: f32) -> Self {
        Self {
            initial_velocity: Some(velocity),
            stiffness: Stiffness::Stiff,
        }
    }

    /// A stiff transition starting at rest.
    pub fn stiff() -> Self {
        Self {
            initial_velocity: None,
            stiffness: Stiffness::Stiff,
        }
    }
}

/// The external animator that interpolates the sheet position.
pub trait SheetAnimator {
    /// Starts (or retargets) a transition toward `target`.
    fn set_target(&mut self, target: f32, transition: Transition);
    /// Stops any in-flight transition immediately.
    fn interrupt(&mut self);
}

impl<T: SheetAnimator + ?Sized> SheetAnimator for Box<T> {
    fn set_target(&mut self, target: f32, transition: Transition) {
        (**self).set_target(target, transition);
    }

    fn interrupt(&mut self) {
        (**self).interrupt();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stiff_preset_values() {
        assert_eq!(Stiffness::Stiff.tension(), 210.0);
        assert_eq!(Stiffness::Stiff.friction(), 20.0);
        assert_eq!(Stiffness::default(), Stiffness::Default);
    }

    #[test]
    fn transition_constructors() {
        let release = Transition::stiff_with_velocity(-1.25);
        assert_eq!(release.initial_velocity, Some(-1.25));
        assert_eq!(release.stiffness, Stiffness::Stiff);
        assert_eq!(Transition::stiff().initial_velocity, None);
    }
}

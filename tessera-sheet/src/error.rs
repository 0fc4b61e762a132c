//! Errors raised while configuring a sheet.

use thiserror::Error;

/// Configuration and viewport errors.
///
/// Gesture handling itself never fails; only the inputs that shape the snap
/// layout are validated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SheetError {
    /// No snap fractions were configured.
    #[error("at least one snap point is required")]
    NoSnapPoints,
    /// A snap fraction is NaN, infinite, or outside `0.0..=1.0`.
    #[error("snap point #{index} ({value}) must be a finite fraction in 0.0..=1.0")]
    InvalidSnapPoint {
        /// Position of the offending fraction in the configured list.
        index: usize,
        /// The rejected value.
        value: f32,
    },
    /// The initial snap fraction is NaN, infinite, or outside `0.0..=1.0`.
    #[error("initial snap point ({0}) must be a finite fraction in 0.0..=1.0")]
    InvalidInitialSnapPoint(f32),
    /// The minimum visible height is negative or not finite.
    #[error("minimum visible height ({0}) must be a finite, non-negative pixel value")]
    InvalidMinVisibleHeight(f32),
    /// The viewport reported a negative or non-finite height.
    #[error("viewport height ({0}) must be a finite, non-negative pixel value")]
    InvalidViewportHeight(f32),
}

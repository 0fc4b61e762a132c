//! One-way hook into the host's background scroll locking.

use crate::element::ElementId;

/// Locks scrolling of the document behind the sheet while it is dragged.
///
/// The controller only informs the collaborator; it never inspects its state.
pub trait ScrollLock {
    /// The sheet rooted at `sheet_root` became interactive.
    fn lock(&mut self, sheet_root: ElementId);
    /// The sheet stopped being interactive; drop every lock.
    fn release_all(&mut self);
}

/// A [`ScrollLock`] that does nothing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoScrollLock;

impl ScrollLock for NoScrollLock {
    fn lock(&mut self, _sheet_root: ElementId) {}

    fn release_all(&mut self) {}
}

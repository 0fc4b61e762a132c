//! The single source of truth for the sheet's vertical offset.
//!
//! Two writers share the field: the live drag and the external animator.
//! Only one of them owns it at a time. A gesture-start hands ownership to the
//! drag, and gesture-end hands it back to the animator.

/// Which path currently owns [`PositionField`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PositionWriter {
    /// The animator's per-frame output is applied.
    #[default]
    Animator,
    /// Drag math writes synchronously; animator frames are rejected.
    Drag,
}

/// Current pixel offset of the sheet. `0.0` is fully open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionField {
    y: f32,
    writer: PositionWriter,
}

impl PositionField {
    /// Creates a field resting at `y`, owned by the animator.
    pub fn new(y: f32) -> Self {
        Self {
            y,
            writer: PositionWriter::Animator,
        }
    }

    /// Current offset.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Current owner.
    pub fn writer(&self) -> PositionWriter {
        self.writer
    }

    /// Hands ownership to the drag path.
    pub(crate) fn suspend_animator(&mut self) {
        self.writer = PositionWriter::Drag;
    }

    /// Hands ownership back to the animator.
    pub(crate) fn resume_animator(&mut self) {
        self.writer = PositionWriter::Animator;
    }

    /// Writes a drag frame.
    pub(crate) fn write_drag(&mut self, y: f32) {
        debug_assert_eq!(self.writer, PositionWriter::Drag);
        self.y = y;
    }

    /// Writes an animator frame. Returns `false` when a drag owns the field.
    pub(crate) fn write_animated(&mut self, y: f32) -> bool {
        if self.writer != PositionWriter::Animator {
            return false;
        }
        self.y = y;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animator_frames_are_rejected_during_a_drag() {
        let mut field = PositionField::new(640.0);
        assert!(field.write_animated(600.0));
        assert_eq!(field.y(), 600.0);

        field.suspend_animator();
        field.write_drag(420.0);
        assert!(!field.write_animated(10.0));
        assert_eq!(field.y(), 420.0);

        field.resume_animator();
        assert!(field.write_animated(320.0));
        assert_eq!(field.y(), 320.0);
        assert_eq!(field.writer(), PositionWriter::Animator);
    }
}

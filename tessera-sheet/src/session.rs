//! Per-gesture drag state and the sheet's lifecycle phase.

/// State of one active drag, created at gesture-start and dropped at
/// gesture-end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    anchor_offset: f32,
    inside_scroll_region: bool,
}

impl DragSession {
    /// Starts a session anchored at the sheet's current offset.
    pub fn new(anchor_offset: f32, inside_scroll_region: bool) -> Self {
        Self {
            anchor_offset,
            inside_scroll_region,
        }
    }

    /// Offset of the sheet when the gesture started.
    pub fn anchor_offset(&self) -> f32 {
        self.anchor_offset
    }

    /// Whether the gesture started inside the nested scroll region.
    pub fn inside_scroll_region(&self) -> bool {
        self.inside_scroll_region
    }

    /// Offset the sheet would have if it tracked `movement_y` 1:1.
    pub fn raw_offset(&self, movement_y: f32) -> f32 {
        self.anchor_offset + movement_y
    }
}

/// Lifecycle of the sheet: `Idle -> Dragging -> Settling -> Idle`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum SheetPhase {
    /// At rest on a snap point.
    #[default]
    Idle,
    /// Following the pointer.
    Dragging(DragSession),
    /// The animator is travelling toward `target`.
    Settling {
        /// Snap offset the animator was sent to.
        target: f32,
    },
}

impl SheetPhase {
    /// The active drag session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            _ => None,
        }
    }
}

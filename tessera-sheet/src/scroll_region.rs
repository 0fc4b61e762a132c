//! Arbitration between dragging the sheet and scrolling content inside it.
//!
//! A drag that starts inside the nested scroll region scrolls that region
//! until it reaches its own edge. Only then does further movement drive the
//! sheet. Membership is decided once per gesture, and the per-frame verdict
//! is re-evaluated from the region's live scroll metrics.

use crate::element::{ElementId, ElementTree, ancestor_path};

/// Scroll geometry of the nested region, in pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top of the content.
    pub scroll_top: f32,
    /// Total height of the scrollable content.
    pub scroll_height: f32,
    /// Visible height of the region.
    pub offset_height: f32,
}

impl ScrollMetrics {
    /// Creates a metrics snapshot.
    pub fn new(scroll_top: f32, scroll_height: f32, offset_height: f32) -> Self {
        Self {
            scroll_top,
            scroll_height,
            offset_height,
        }
    }

    /// Whether the content is scrolled all the way up.
    pub fn at_top(&self) -> bool {
        self.scroll_top == 0.0
    }

    /// Whether the content is scrolled all the way down.
    pub fn at_bottom(&self) -> bool {
        self.scroll_height - self.offset_height == self.scroll_top
    }
}

/// A nested scrollable element hosted inside the sheet.
pub trait ScrollRegion {
    /// Element that owns the scrolling.
    fn element(&self) -> ElementId;
    /// Live scroll metrics of the element.
    fn metrics(&self) -> ScrollMetrics;
}

/// How one move frame of a drag inside the scroll region is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollVerdict {
    /// The region is at the relevant edge; the sheet moves as usual.
    Sheet,
    /// Downward drag while content is scrolled; the frame belongs to the
    /// region and the sheet stays put.
    Cede,
    /// Upward drag while content can still scroll down; the sheet moves
    /// without overdrag friction and may not rise above fully open.
    SheetWithoutFriction,
}

impl ScrollVerdict {
    /// Decides the frame from the cumulative vertical movement and the
    /// region's current metrics. Positive movement hides the sheet.
    pub fn evaluate(movement_y: f32, metrics: ScrollMetrics) -> Self {
        if movement_y > 0.0 && !metrics.at_top() {
            Self::Cede
        } else if movement_y < 0.0 && !metrics.at_bottom() {
            Self::SheetWithoutFriction
        } else {
            Self::Sheet
        }
    }
}

/// Whether a gesture starting at `origin` began inside `scroll_region`.
///
/// The ancestor chain is walked from `origin` up to `sheet_root`. A walk that
/// never meets the sheet root is treated as outside, as is a missing region.
pub fn inside_scroll_region(
    tree: &dyn ElementTree,
    origin: ElementId,
    sheet_root: ElementId,
    scroll_region: Option<ElementId>,
) -> bool {
    let Some(region) = scroll_region else {
        return false;
    };
    let path = ancestor_path(tree, origin, sheet_root);
    path.reached_boundary && path.contains(region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ParentMap;

    const ROOT: ElementId = ElementId::new(1);
    const SHEET: ElementId = ElementId::new(2);
    const HEADER: ElementId = ElementId::new(3);
    const LIST: ElementId = ElementId::new(4);
    const ROW: ElementId = ElementId::new(5);

    fn tree() -> ParentMap {
        ParentMap::new()
            .with(SHEET, ROOT)
            .with(HEADER, SHEET)
            .with(LIST, SHEET)
            .with(ROW, LIST)
    }

    #[test]
    fn membership_follows_the_ancestor_chain() {
        let tree = tree();
        assert!(inside_scroll_region(&tree, ROW, SHEET, Some(LIST)));
        assert!(inside_scroll_region(&tree, LIST, SHEET, Some(LIST)));
        assert!(!inside_scroll_region(&tree, HEADER, SHEET, Some(LIST)));
        assert!(!inside_scroll_region(&tree, SHEET, SHEET, Some(LIST)));
    }

    #[test]
    fn no_region_means_never_inside() {
        assert!(!inside_scroll_region(&tree(), ROW, SHEET, None));
    }

    #[test]
    fn unreachable_sheet_root_is_treated_as_outside() {
        let detached_root = ElementId::new(42);
        assert!(!inside_scroll_region(
            &tree(),
            ROW,
            detached_root,
            Some(LIST)
        ));
    }

    #[test]
    fn edges() {
        let top = ScrollMetrics::new(0.0, 1000.0, 400.0);
        assert!(top.at_top());
        assert!(!top.at_bottom());

        let bottom = ScrollMetrics::new(600.0, 1000.0, 400.0);
        assert!(!bottom.at_top());
        assert!(bottom.at_bottom());

        let fits = ScrollMetrics::new(0.0, 300.0, 300.0);
        assert!(fits.at_top());
        assert!(fits.at_bottom());
    }

    #[test]
    fn verdicts() {
        let top = ScrollMetrics::new(0.0, 1000.0, 400.0);
        let middle = ScrollMetrics::new(250.0, 1000.0, 400.0);
        let bottom = ScrollMetrics::new(600.0, 1000.0, 400.0);

        assert_eq!(ScrollVerdict::evaluate(50.0, top), ScrollVerdict::Sheet);
        assert_eq!(ScrollVerdict::evaluate(50.0, middle), ScrollVerdict::Cede);
        assert_eq!(ScrollVerdict::evaluate(50.0, bottom), ScrollVerdict::Cede);

        assert_eq!(
            ScrollVerdict::evaluate(-50.0, top),
            ScrollVerdict::SheetWithoutFriction
        );
        assert_eq!(
            ScrollVerdict::evaluate(-50.0, middle),
            ScrollVerdict::SheetWithoutFriction
        );
        assert_eq!(ScrollVerdict::evaluate(-50.0, bottom), ScrollVerdict::Sheet);

        assert_eq!(ScrollVerdict::evaluate(0.0, middle), ScrollVerdict::Sheet);
    }
}

//! Scripted gestures played against a [`SheetController`].

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use anyhow::{Result, bail};
use clap::ValueEnum;
use parking_lot::Mutex;
use tessera_sheet::{
    Callback, ElementId, FrameOutcome, GestureEvent, GestureSample, ParentMap, ScrollLock,
    ScrollMetrics, ScrollRegion, SheetController,
};
use tracing::{info, warn};

use crate::spring::{SpringAnimator, SpringFrame};

const FRAME: Duration = Duration::from_millis(16);
/// Upper bound on settle frames before giving up.
const MAX_SETTLE_FRAMES: usize = 1000;

const SHEET: ElementId = ElementId::new(1);
const HANDLE: ElementId = ElementId::new(2);
const LIST: ElementId = ElementId::new(3);
const LIST_ROW: ElementId = ElementId::new(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Drag the handle up from the most hidden point and let go.
    Basic,
    /// Pull the open sheet far past its open bound.
    Overdrag,
    /// Drag from inside a scrolled list.
    Nested,
    /// Shrink the viewport halfway through a drag.
    Resize,
}

/// Logs background scroll locking.
struct LoggingScrollLock;

impl ScrollLock for LoggingScrollLock {
    fn lock(&mut self, sheet_root: ElementId) {
        info!("Locking background scroll for {sheet_root:?}");
    }

    fn release_all(&mut self) {
        info!("Releasing background scroll locks");
    }
}

struct DemoList {
    metrics: Mutex<ScrollMetrics>,
}

impl ScrollRegion for DemoList {
    fn element(&self) -> ElementId {
        LIST
    }

    fn metrics(&self) -> ScrollMetrics {
        *self.metrics.lock()
    }
}

/// Runs one scripted scenario and returns the resting offset.
pub fn run(scenario: Scenario, mut sheet: SheetController, spring: SpringAnimator) -> Result<f32> {
    let tree = ParentMap::new()
        .with(HANDLE, SHEET)
        .with(LIST, SHEET)
        .with(LIST_ROW, LIST);
    let list = Arc::new(DemoList {
        metrics: Mutex::new(ScrollMetrics::new(0.0, 2400.0, 600.0)),
    });
    sheet = sheet
        .with_sheet_root(SHEET)
        .with_element_tree(Arc::new(tree))
        .with_scroll_region(list.clone())
        .with_scroll_lock(LoggingScrollLock);
    info!(
        "Sheet at {} with snap points {:?}",
        sheet.position(),
        sheet.snap_points().as_slice()
    );

    match scenario {
        Scenario::Basic => {
            let height = sheet.viewport().height;
            drag(&mut sheet, HANDLE, &linear(-0.45 * height, 12), None);
        }
        Scenario::Overdrag => {
            sheet.open();
            settle(&mut sheet, &spring)?;
            let cancelled = Arc::new(AtomicBool::new(false));
            let cancel = {
                let cancelled = Arc::clone(&cancelled);
                Callback::new(move || cancelled.store(true, Ordering::SeqCst))
            };
            drag(&mut sheet, HANDLE, &linear(-900.0, 18), Some(cancel));
            info!(
                "Gesture source cancelled: {}",
                cancelled.load(Ordering::SeqCst)
            );
        }
        Scenario::Nested => {
            sheet.open();
            settle(&mut sheet, &spring)?;
            *list.metrics.lock() = ScrollMetrics::new(300.0, 2400.0, 600.0);
            info!("List scrolled to 300; pulling down should scroll the list");
            drag(&mut sheet, LIST_ROW, &linear(120.0, 6), None);
            settle(&mut sheet, &spring)?;

            *list.metrics.lock() = ScrollMetrics::new(0.0, 2400.0, 600.0);
            info!("List at its top; pulling down should move the sheet");
            drag(&mut sheet, LIST_ROW, &linear(280.0, 10), None);
        }
        Scenario::Resize => {
            let height = sheet.viewport().height;
            let movements = linear(-0.3 * height, 10);
            let (before, after) = movements.split_at(movements.len() / 2);
            let event = Some(GestureEvent::new(HANDLE));
            sheet.handle_sample(&GestureSample::start(event));
            for &movement in before {
                sheet.handle_sample(&GestureSample::moved(movement, -1.0, event));
            }
            let resized = height * 0.75;
            sheet.poll_viewport(&|| resized)?;
            info!(
                "Viewport resized to {resized}; snap points now {:?}",
                sheet.snap_points().as_slice()
            );
            for &movement in after {
                sheet.handle_sample(&GestureSample::moved(movement, -1.0, event));
            }
            let last = after.last().copied().unwrap_or_default();
            let outcome = sheet.handle_sample(&GestureSample::end(last, -1.0, event));
            info!("Release: {outcome:?}");
        }
    }

    settle(&mut sheet, &spring)?;
    let rest = sheet.position();
    if !sheet.snap_points().contains(rest) {
        bail!("sheet came to rest at {rest}, which is not a snap point");
    }
    Ok(rest)
}

/// Evenly spaced cumulative movements ending at `total`.
fn linear(total: f32, frames: usize) -> Vec<f32> {
    (1..=frames)
        .map(|frame| total * frame as f32 / frames as f32)
        .collect()
}

fn drag(
    sheet: &mut SheetController,
    origin: ElementId,
    movements: &[f32],
    cancel: Option<Callback>,
) {
    let event = Some(GestureEvent::new(origin));
    let cancel = cancel.unwrap_or_default();
    let velocity = movements
        .windows(2)
        .last()
        .map_or(0.0, |pair| (pair[1] - pair[0]) / FRAME.as_secs_f32());

    sheet.handle_sample(&GestureSample::start(event).cancel(cancel.clone()));
    let Some((&last, frames)) = movements.split_last() else {
        return;
    };
    for &movement in frames {
        let outcome =
            sheet.handle_sample(&GestureSample::moved(movement, velocity, event).cancel(cancel.clone()));
        info!("movement {movement:>8.1} -> {outcome:?}");
        if matches!(outcome, FrameOutcome::Cancelled { .. }) {
            return;
        }
    }
    let outcome = sheet.handle_sample(&GestureSample::end(last, velocity, event).cancel(cancel));
    info!("Release: {outcome:?}");
}

fn settle(sheet: &mut SheetController, spring: &SpringAnimator) -> Result<()> {
    if !sheet.is_settling() {
        return Ok(());
    }
    spring.set_value(sheet.position());
    for _ in 0..MAX_SETTLE_FRAMES {
        match spring.tick(FRAME) {
            SpringFrame::Moving(value) => {
                sheet.apply_animation_frame(value);
            }
            SpringFrame::Settled(value) => {
                sheet.apply_animation_frame(value);
                sheet.animation_settled();
                info!("Settled at {}", sheet.position());
                return Ok(());
            }
            SpringFrame::Idle => {
                warn!("Spring went idle while the sheet was settling");
                sheet.animation_settled();
                return Ok(());
            }
        }
    }
    bail!("spring did not settle within {MAX_SETTLE_FRAMES} frames")
}

#[cfg(test)]
mod tests {
    use tessera_sheet::{SheetArgs, ViewportState};

    use super::*;

    fn play(scenario: Scenario) -> f32 {
        let spring = SpringAnimator::new(0.0);
        let sheet = SheetController::new(
            SheetArgs::default(),
            ViewportState::new(800.0),
            spring.clone(),
        )
        .expect("valid args");
        spring.set_value(sheet.position());
        run(scenario, sheet, spring).expect("scenario settles")
    }

    #[test]
    fn scenarios_rest_on_snap_points() {
        assert_eq!(play(Scenario::Basic), 320.0);
        assert_eq!(play(Scenario::Overdrag), 0.0);
        assert_eq!(play(Scenario::Nested), 320.0);
        assert_eq!(play(Scenario::Resize), 480.0);
    }
}

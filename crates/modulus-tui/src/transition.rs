//! Horizontal slide when the wizard changes step.

use modulus_core::{StepType, TransitionObserver};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

const SLIDE_DURATION: Duration = Duration::from_millis(300);
/// Columns the incoming content starts offset by.
const SLIDE_COLUMNS: u16 = 6;

/// Records when the last step change happened. Clones share the same clock,
/// so one copy can be handed to the wizard and another kept by the renderer.
#[derive(Debug, Clone, Default)]
pub struct SlideTransition {
    started: Rc<Cell<Option<Instant>>>,
}

impl SlideTransition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.started
            .get()
            .is_some_and(|t| t.elapsed() < SLIDE_DURATION)
    }

    /// Current horizontal offset for content `width` columns wide.
    pub fn offset(&self, width: u16) -> u16 {
        let Some(started) = self.started.get() else {
            return 0;
        };
        Self::offset_at(started.elapsed(), width)
    }

    fn offset_at(elapsed: Duration, width: u16) -> u16 {
        if elapsed >= SLIDE_DURATION {
            return 0;
        }
        let remaining = 1.0 - elapsed.as_secs_f64() / SLIDE_DURATION.as_secs_f64();
        let cols = (SLIDE_COLUMNS as f64 * remaining).round() as u16;
        cols.min(width / 4)
    }
}

impl TransitionObserver for SlideTransition {
    fn on_step_change(&mut self, _from: StepType, _to: StepType) {
        self.started.set(Some(Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_shrinks_to_zero() {
        assert_eq!(SlideTransition::offset_at(Duration::ZERO, 80), SLIDE_COLUMNS);
        assert_eq!(SlideTransition::offset_at(Duration::from_millis(150), 80), 3);
        assert_eq!(SlideTransition::offset_at(SLIDE_DURATION, 80), 0);
        assert_eq!(SlideTransition::offset_at(Duration::ZERO, 8), 2);
    }

    #[test]
    fn clones_share_clock() {
        let slide = SlideTransition::new();
        let mut observer = slide.clone();
        assert!(!slide.is_active());
        observer.on_step_change(StepType::Welcome, StepType::Phone);
        assert!(slide.is_active());
    }
}

//! Gesture state - interaction phase, anchor, pending sample and baselines

use crate::primitives::{Point, shortest_signed_delta};

/// One pointer position in page coordinates, whatever device produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<Point> for PointerSample {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
}

/// Pointer and virtual angle captured at the first processed sample of a
/// gesture, plus the shortest-arc sweep accumulated since.
///
/// Each sample contributes at most 180°, so a fast flick that jumps more
/// than half a turn between ticks is read as the shorter way round, while
/// a slow drag can wind up any number of full turns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pointer_angle: f64,
    virtual_angle: f64,
    last_pointer_angle: f64,
    sweep: f64,
}

impl Baseline {
    pub fn new(pointer_angle: f64, virtual_angle: f64) -> Self {
        Self {
            pointer_angle,
            virtual_angle,
            last_pointer_angle: pointer_angle,
            sweep: 0.0,
        }
    }

    pub fn pointer_angle(&self) -> f64 {
        self.pointer_angle
    }

    pub fn virtual_angle(&self) -> f64 {
        self.virtual_angle
    }

    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// Feed the next pointer angle; returns the new virtual angle.
    pub fn advance(&mut self, pointer_angle: f64) -> f64 {
        self.sweep += shortest_signed_delta(pointer_angle, self.last_pointer_angle);
        self.last_pointer_angle = pointer_angle;
        self.virtual_angle + self.sweep
    }
}

#[derive(Debug, Clone, Default)]
pub struct GestureState {
    phase: GesturePhase,
    anchor: Point,
    baseline: Option<Baseline>,
    pending: Option<PointerSample>,
}

impl GestureState {
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Dragging
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn baseline(&self) -> Option<&Baseline> {
        self.baseline.as_ref()
    }

    pub fn pending(&self) -> Option<PointerSample> {
        self.pending
    }

    pub fn begin(&mut self, anchor: Point) {
        self.phase = GesturePhase::Dragging;
        self.anchor = anchor;
        self.baseline = None;
        self.pending = None;
    }

    /// Keeps only the latest sample; returns false outside a drag.
    pub fn record(&mut self, sample: PointerSample) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.pending = Some(sample);
        true
    }

    pub fn take_pending(&mut self) -> Option<PointerSample> {
        if self.is_dragging() { self.pending.take() } else { None }
    }

    /// Baseline for the current gesture, captured on first use.
    pub fn baseline_or_insert(&mut self, pointer_angle: f64, virtual_angle: f64) -> &mut Baseline {
        self.baseline
            .get_or_insert_with(|| Baseline::new(pointer_angle, virtual_angle))
    }

    /// Forget baselines so the next sample re-anchors the drag.
    pub fn rebaseline(&mut self) {
        self.baseline = None;
    }

    /// Ends the drag; returns whether one was in progress.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.phase = GesturePhase::Idle;
        self.pending = None;
        was_dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_jump_across_wrap_takes_short_arc() {
        let mut b = Baseline::new(10.0, 0.0);
        // 10° -> 370° reported in one sample is the same direction
        assert_eq!(b.advance(370.0), 0.0);
    }

    #[test]
    fn incremental_samples_accumulate_full_turn() {
        let mut b = Baseline::new(10.0, 0.0);
        let mut virtual_angle = 0.0;
        for pointer in [100.0, 190.0, 280.0, 10.0] {
            virtual_angle = b.advance(pointer);
        }
        assert_eq!(virtual_angle, 360.0);
        assert_eq!(b.sweep(), 360.0);
    }

    #[test]
    fn counter_clockwise_drag_goes_negative() {
        let mut b = Baseline::new(0.0, 45.0);
        assert_eq!(b.advance(350.0), 35.0);
        assert_eq!(b.advance(300.0), -15.0);
        assert_eq!(b.pointer_angle(), 0.0);
        assert_eq!(b.virtual_angle(), 45.0);
    }

    #[test]
    fn samples_only_recorded_while_dragging() {
        let mut g = GestureState::default();
        assert!(!g.record(PointerSample::new(1.0, 2.0)));
        assert_eq!(g.pending(), None);

        g.begin(Point::new(5.0, 5.0));
        assert!(g.record(PointerSample::new(1.0, 2.0)));
        assert!(g.record(PointerSample::new(3.0, 4.0)));
        assert_eq!(g.take_pending(), Some(PointerSample::new(3.0, 4.0)));
        assert_eq!(g.take_pending(), None);
    }

    #[test]
    fn begin_clears_baseline_and_end_keeps_anchor() {
        let mut g = GestureState::default();
        g.begin(Point::new(5.0, 5.0));
        g.baseline_or_insert(90.0, 10.0);
        g.record(PointerSample::new(0.0, 0.0));
        assert!(g.end());
        assert!(!g.end());
        assert_eq!(g.pending(), None);
        assert!(g.baseline().is_some());
        assert_eq!(g.anchor(), Point::new(5.0, 5.0));

        g.begin(Point::new(7.0, 7.0));
        assert!(g.baseline().is_none());
        assert_eq!(g.phase(), GesturePhase::Dragging);
    }
}

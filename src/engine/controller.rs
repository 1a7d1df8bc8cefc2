//! Rotation controller - gesture handling and the per-frame tick
//!
//! The controller never touches the DOM. It asks a [`RotationTarget`] where
//! the element's center is and tells it when to paint a new angle; the frame
//! driver calls [`RotationController::tick`] until it returns
//! [`Schedule::Stop`].

use tracing::{debug, warn};

use super::gesture::{GesturePhase, GestureState, PointerSample};
use super::model::{AngleModel, SpeedChange};
use crate::config::{PropellerConfig, Transition};
use crate::error::ConfigError;
use crate::primitives::{Point, pointer_angle, shortest_signed_delta};

/// The element being rotated, as seen by the controller
pub trait RotationTarget {
    /// Center of the element in page coordinates, if it can be located
    fn center(&self) -> Option<Point>;

    /// Paint the element at `degrees`
    fn apply_rotation(&mut self, degrees: f64);

    /// Called on bind with the angle to show before the first frame
    fn prepare(&mut self, _degrees: f64, _transition: Option<&Transition>) {}
}

/// Notification hook. Errors are logged and never stop the frame loop.
pub type Hook<A> = Box<dyn FnMut(A) -> anyhow::Result<()>>;

#[derive(Default)]
pub struct Callbacks {
    on_rotate: Option<Hook<f64>>,
    on_stop: Option<Hook<()>>,
    on_drag_start: Option<Hook<()>>,
    on_drag_stop: Option<Hook<()>>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receives the displayed angle after every render
    pub fn on_rotate(mut self, f: impl FnMut(f64) -> anyhow::Result<()> + 'static) -> Self {
        self.on_rotate = Some(Box::new(f));
        self
    }

    /// Fires when inertia brings the element to rest
    pub fn on_stop(mut self, f: impl FnMut(()) -> anyhow::Result<()> + 'static) -> Self {
        self.on_stop = Some(Box::new(f));
        self
    }

    pub fn on_drag_start(mut self, f: impl FnMut(()) -> anyhow::Result<()> + 'static) -> Self {
        self.on_drag_start = Some(Box::new(f));
        self
    }

    pub fn on_drag_stop(mut self, f: impl FnMut(()) -> anyhow::Result<()> + 'static) -> Self {
        self.on_drag_stop = Some(Box::new(f));
        self
    }
}

fn notify<A>(hook: &mut Option<Hook<A>>, name: &str, arg: A) {
    if let Some(f) = hook {
        if let Err(err) = f(arg) {
            warn!(callback = name, error = %err, "propeller callback failed");
        }
    }
}

/// What the frame driver should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    Continue,
    Stop,
}

pub struct RotationController<T: RotationTarget> {
    target: T,
    config: PropellerConfig,
    model: AngleModel,
    gesture: GestureState,
    callbacks: Callbacks,
    bound: bool,
    /// Renders are held back until this timestamp while a CSS transition runs
    transiting_until: Option<f64>,
}

impl<T: RotationTarget> RotationController<T> {
    /// Validates `config` and builds an unbound controller.
    pub fn new(target: T, config: PropellerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            model: AngleModel::new(&config),
            target,
            config,
            gesture: GestureState::default(),
            callbacks: Callbacks::default(),
            bound: false,
            transiting_until: None,
        })
    }

    pub fn with_callbacks(mut self, callbacks: Callbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Start accepting gestures and frames.
    pub fn bind(&mut self) {
        if self.bound {
            return;
        }
        self.bound = true;
        self.target
            .prepare(self.model.last_applied_angle(), self.config.transition().as_ref());
        debug!(angle = self.model.displayed_angle(), "propeller bound");
    }

    /// Stop accepting gestures; the next tick returns [`Schedule::Stop`].
    pub fn unbind(&mut self) {
        if !self.bound {
            return;
        }
        self.bound = false;
        self.gesture.end();
        debug!("propeller unbound");
    }

    pub fn phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Displayed angle
    pub fn angle(&self) -> f64 {
        self.model.displayed_angle()
    }

    pub fn virtual_angle(&self) -> f64 {
        self.model.virtual_angle()
    }

    pub fn speed(&self) -> f64 {
        self.model.speed()
    }

    /// Whether pointer moves should keep bubbling to ancestors
    pub fn propagates_moves(&self) -> bool {
        self.config.rotate_parent_instantly
    }

    /// Pointer pressed on the element.
    pub fn start_gesture(&mut self) {
        if !self.bound {
            return;
        }
        let anchor = self.target.center().unwrap_or_else(|| {
            warn!("propeller target has no geometry, anchoring at the page origin");
            Point::ORIGIN
        });
        self.model.reset_speed();
        self.gesture.begin(anchor);
        debug!(x = anchor.x, y = anchor.y, "drag started");
        notify(&mut self.callbacks.on_drag_start, "on_drag_start", ());
    }

    /// Stores the sample for the next tick; returns whether it was taken.
    pub fn move_pointer(&mut self, sample: PointerSample) -> bool {
        self.bound && self.gesture.record(sample)
    }

    /// Pointer released, cancelled or left the element.
    pub fn end_gesture(&mut self) {
        if !self.bound || !self.gesture.end() {
            return;
        }
        debug!(speed = self.model.speed(), "drag stopped");
        notify(&mut self.callbacks.on_drag_stop, "on_drag_stop", ());
    }

    /// Kill any spin and end the current drag.
    pub fn stop(&mut self) {
        self.model.reset_speed();
        self.end_gesture();
    }

    /// Jump to `degrees` and paint immediately, bypassing the render
    /// threshold and any transition cooldown.
    pub fn set_angle(&mut self, degrees: f64) {
        self.model.set_virtual_angle(degrees);
        self.model.refresh_displayed();
        self.gesture.rebaseline();
        self.render();
    }

    /// One animation frame. `now_ms` only matters for transition cooldowns.
    pub fn tick(&mut self, now_ms: f64) -> Schedule {
        if !self.bound {
            return Schedule::Stop;
        }

        if let Some(sample) = self.gesture.take_pending() {
            self.track(sample);
        }
        self.model.refresh_displayed();

        let dragging = self.gesture.is_dragging();
        self.model.integrate_speed(dragging);
        // a held pointer also decays speed, but only a coasting element rests
        if self.model.decay_speed() == SpeedChange::Stopped && !dragging {
            debug!(angle = self.model.displayed_angle(), "propeller came to rest");
            notify(&mut self.callbacks.on_stop, "on_stop", ());
        }

        self.render_if_moved(now_ms);
        Schedule::Continue
    }

    fn track(&mut self, sample: PointerSample) {
        let pointer = pointer_angle(self.gesture.anchor(), sample.point()).degrees();
        let previous = self.model.virtual_angle();
        let next = self.gesture.baseline_or_insert(pointer, previous).advance(pointer);
        self.model.set_virtual_angle(next);
        self.model.set_speed(shortest_signed_delta(next, previous));
    }

    fn render_if_moved(&mut self, now_ms: f64) {
        if let Some(until) = self.transiting_until {
            if now_ms < until {
                return;
            }
            self.transiting_until = None;
        }
        if self.model.pending_change() < self.config.effective_minimal_angle_change() {
            return;
        }
        self.render();
        if self.config.step_transition_time > 0.0 {
            self.transiting_until = Some(now_ms + self.config.step_transition_time);
        }
    }

    fn render(&mut self) {
        let angle = self.model.displayed_angle();
        self.target.apply_rotation(angle);
        self.model.mark_applied();
        notify(&mut self.callbacks.on_rotate, "on_rotate", angle);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::config::PropellerConfig;

    const CENTER: Point = Point::new(200.0, 200.0);

    #[derive(Default)]
    struct Recorder {
        center: Option<Point>,
        renders: Vec<f64>,
        prepared: Option<(f64, Option<Transition>)>,
    }

    impl RotationTarget for Recorder {
        fn center(&self) -> Option<Point> {
            self.center
        }

        fn apply_rotation(&mut self, degrees: f64) {
            self.renders.push(degrees);
        }

        fn prepare(&mut self, degrees: f64, transition: Option<&Transition>) {
            self.prepared = Some((degrees, transition.cloned()));
        }
    }

    fn bound(config: PropellerConfig) -> RotationController<Recorder> {
        let target = Recorder { center: Some(CENTER), ..Default::default() };
        let mut c = RotationController::new(target, config).unwrap();
        c.bind();
        c
    }

    fn at(degrees: f64) -> PointerSample {
        CENTER.orbit(degrees, 80.0).into()
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnMut(()) -> anyhow::Result<()> + 'static) {
        let count = Rc::new(Cell::new(0));
        let hook = {
            let count = count.clone();
            move |_: ()| -> anyhow::Result<()> {
                count.set(count.get() + 1);
                Ok(())
            }
        };
        (count, hook)
    }

    #[test]
    fn rejects_invalid_config() {
        let err = RotationController::new(Recorder::default(), PropellerConfig::default().with_inertia(2.0));
        assert!(matches!(err, Err(ConfigError::InertiaOutOfRange(_))));
    }

    #[test]
    fn bind_prepares_target_with_transition() {
        let c = bound(
            PropellerConfig::default()
                .with_angle(42.0)
                .with_step(10.0)
                .with_transition(250.0, "ease-out"),
        );
        assert!(c.is_bound());
        assert_eq!(
            c.target().prepared,
            Some((50.0, Some(Transition { duration_ms: 250.0, easing: "ease-out".into() })))
        );
        assert!(c.target().renders.is_empty());
    }

    #[test]
    fn quarter_turn_drag_renders_once() {
        let rotations = Rc::new(RefCell::new(Vec::new()));
        let seen = rotations.clone();
        let mut c = bound(PropellerConfig::default()).with_callbacks(Callbacks::new().on_rotate(move |a| {
            seen.borrow_mut().push(a);
            Ok(())
        }));

        c.start_gesture();
        assert!(c.move_pointer(at(0.0)));
        c.tick(0.0);
        assert!(c.target().renders.is_empty());

        for degrees in [30.0, 60.0, 90.0] {
            c.move_pointer(at(degrees));
        }
        c.tick(16.0);
        c.tick(32.0);
        c.tick(48.0);
        c.end_gesture();
        c.tick(64.0);

        assert_eq!(c.target().renders, vec![90.0]);
        assert_eq!(*rotations.borrow(), vec![90.0]);
        assert_eq!(c.angle(), 90.0);
        assert_eq!(c.speed(), 0.0);
    }

    #[test]
    fn one_sample_per_tick_renders_each_step() {
        let mut c = bound(PropellerConfig::default());
        c.start_gesture();
        c.move_pointer(at(0.0));
        c.tick(0.0);
        for (i, degrees) in [30.0, 60.0, 90.0].into_iter().enumerate() {
            c.move_pointer(at(degrees));
            c.tick(16.0 * (i + 1) as f64);
        }
        c.end_gesture();
        c.tick(64.0);
        assert_eq!(c.target().renders, vec![30.0, 60.0, 90.0]);
        assert_eq!(c.angle(), 90.0);
    }

    #[test]
    fn held_drag_never_reports_rest() {
        let (stops, on_stop) = counter();
        let mut c = bound(PropellerConfig::default().with_inertia(0.9).with_minimal_speed(0.01))
            .with_callbacks(Callbacks::new().on_stop(on_stop));

        c.start_gesture();
        c.move_pointer(at(0.0));
        c.tick(0.0);
        c.move_pointer(at(20.0));
        for i in 0..200 {
            c.tick(16.0 * i as f64);
        }
        assert!(c.is_dragging());
        assert_eq!(c.speed(), 0.0);
        assert_eq!(stops.get(), 0);

        c.move_pointer(at(40.0));
        for i in 200..400 {
            c.tick(16.0 * i as f64);
        }
        assert_eq!(stops.get(), 0);

        // release while still moving, then coast to rest
        c.move_pointer(at(60.0));
        c.tick(6400.0);
        c.end_gesture();
        for i in 401..1000 {
            c.tick(16.0 * i as f64);
        }
        assert_eq!(c.speed(), 0.0);
        assert_eq!(stops.get(), 1);
    }

    #[test]
    fn tick_by_tick_drag_winds_a_full_turn() {
        let mut c = bound(PropellerConfig::default());
        c.start_gesture();
        for degrees in [10.0, 100.0, 190.0, 280.0, 10.0] {
            c.move_pointer(at(degrees));
            c.tick(0.0);
        }
        assert_eq!(c.virtual_angle(), 360.0);
        assert_eq!(c.angle(), 0.0);
    }

    #[test]
    fn single_jump_across_wrap_is_shortest_arc() {
        let mut c = bound(PropellerConfig::default());
        c.start_gesture();
        c.move_pointer(at(10.0));
        c.tick(0.0);
        c.move_pointer(at(370.0));
        c.tick(16.0);
        assert_eq!(c.virtual_angle(), 0.0);
    }

    #[test]
    fn second_gesture_continues_from_last_angle() {
        let mut c = bound(PropellerConfig::default());
        c.start_gesture();
        c.move_pointer(at(0.0));
        c.tick(0.0);
        c.move_pointer(at(120.0));
        c.tick(16.0);
        c.end_gesture();

        // grab the element on the opposite side and drag a bit more
        c.start_gesture();
        c.move_pointer(at(270.0));
        c.tick(32.0);
        c.move_pointer(at(300.0));
        c.tick(48.0);
        assert_eq!(c.virtual_angle(), 150.0);
    }

    #[test]
    fn release_spins_down_and_stops_once() {
        let (stops, on_stop) = counter();
        let mut c = bound(PropellerConfig::default().with_inertia(0.9).with_minimal_speed(0.01))
            .with_callbacks(Callbacks::new().on_stop(on_stop));

        c.start_gesture();
        c.move_pointer(at(0.0));
        c.tick(0.0);
        c.move_pointer(at(5.0));
        c.tick(16.0);
        assert!((c.speed() - 4.5).abs() < 1e-9);
        c.end_gesture();

        let released_at = c.virtual_angle();
        let mut ticks = 0;
        loop {
            ticks += 1;
            assert!(ticks < 1000, "speed never reached zero");
            c.tick(16.0 * ticks as f64);
            if c.speed() == 0.0 {
                assert_eq!(stops.get(), 1);
                break;
            }
            assert_eq!(stops.get(), 0);
        }
        assert!(c.virtual_angle() > released_at + 30.0);

        for _ in 0..10 {
            c.tick(0.0);
        }
        assert_eq!(stops.get(), 1);
    }

    #[test]
    fn drag_without_inertia_keeps_speed_zero() {
        let mut c = bound(PropellerConfig::default());
        c.start_gesture();
        c.move_pointer(at(0.0));
        c.tick(0.0);
        c.move_pointer(at(40.0));
        c.tick(16.0);
        assert_eq!(c.speed(), 0.0);
        c.end_gesture();
        c.tick(32.0);
        assert_eq!(c.virtual_angle(), 40.0);
    }

    #[test]
    fn initial_speed_spins_without_a_gesture() {
        let mut c = bound(PropellerConfig::default().with_inertia(0.5).with_speed(8.0));
        c.tick(0.0);
        // displayed angle lags integration by one frame
        assert_eq!(c.virtual_angle(), 8.0);
        c.tick(16.0);
        assert_eq!(c.angle(), 8.0);
        assert_eq!(c.target().renders, vec![8.0]);
    }

    #[test]
    fn transition_cooldown_holds_back_renders() {
        let mut c = bound(PropellerConfig::default().with_step(10.0).with_transition(100.0, "linear"));
        c.start_gesture();
        c.move_pointer(at(0.0));
        c.tick(0.0);

        c.move_pointer(at(25.0));
        c.tick(10.0);
        assert_eq!(c.target().renders, vec![30.0]);

        c.move_pointer(at(50.0));
        c.tick(50.0);
        assert_eq!(c.target().renders, vec![30.0]);

        c.tick(120.0);
        assert_eq!(c.target().renders, vec![30.0, 50.0]);
    }

    #[test]
    fn stepped_renders_wait_for_a_full_step() {
        let mut c = bound(PropellerConfig::default().with_step(30.0));
        c.start_gesture();
        c.move_pointer(at(0.0));
        c.tick(0.0);
        c.move_pointer(at(-5.0));
        c.tick(16.0);
        // ceil(-5 / 30) * 30 == 0, nothing to paint
        assert!(c.target().renders.is_empty());
        c.move_pointer(at(1.0));
        c.tick(32.0);
        assert_eq!(c.target().renders, vec![30.0]);
    }

    #[test]
    fn set_angle_renders_unconditionally() {
        let rotations = Rc::new(Cell::new(0));
        let seen = rotations.clone();
        let mut c = bound(PropellerConfig::default().with_step(10.0).with_transition(500.0, "linear"))
            .with_callbacks(Callbacks::new().on_rotate(move |_| {
                seen.set(seen.get() + 1);
                Ok(())
            }));

        c.set_angle(23.0);
        assert_eq!(c.angle(), 30.0);
        assert_eq!(c.virtual_angle(), 23.0);
        c.set_angle(24.0);
        assert_eq!(c.target().renders, vec![30.0, 30.0]);
        assert_eq!(rotations.get(), 2);

        // nothing new for the tick to paint
        c.tick(0.0);
        assert_eq!(c.target().renders.len(), 2);
    }

    #[test]
    fn set_angle_rebaselines_a_drag() {
        let mut c = bound(PropellerConfig::default());
        c.start_gesture();
        c.move_pointer(at(0.0));
        c.tick(0.0);
        c.set_angle(200.0);
        c.move_pointer(at(10.0));
        c.tick(16.0);
        c.move_pointer(at(20.0));
        c.tick(32.0);
        assert_eq!(c.virtual_angle(), 210.0);
    }

    #[test]
    fn drag_callbacks_fire_on_transitions() {
        let (starts, on_start) = counter();
        let (stops, on_stop) = counter();
        let mut c = bound(PropellerConfig::default())
            .with_callbacks(Callbacks::new().on_drag_start(on_start).on_drag_stop(on_stop));

        c.end_gesture();
        assert_eq!(stops.get(), 0);
        c.start_gesture();
        assert_eq!(c.phase(), GesturePhase::Dragging);
        c.end_gesture();
        c.end_gesture();
        assert_eq!((starts.get(), stops.get()), (1, 1));
        assert_eq!(c.phase(), GesturePhase::Idle);
    }

    #[test]
    fn stop_kills_spin_and_drag() {
        let (drag_stops, on_drag_stop) = counter();
        let (rests, on_stop) = counter();
        let mut c = bound(PropellerConfig::default().with_inertia(0.95))
            .with_callbacks(Callbacks::new().on_drag_stop(on_drag_stop).on_stop(on_stop));

        c.start_gesture();
        c.move_pointer(at(0.0));
        c.tick(0.0);
        c.move_pointer(at(20.0));
        c.tick(16.0);
        assert!(c.speed() > 0.0);

        c.stop();
        assert_eq!(c.speed(), 0.0);
        assert!(!c.is_dragging());
        assert_eq!(drag_stops.get(), 1);

        let angle = c.virtual_angle();
        c.tick(32.0);
        assert_eq!(c.virtual_angle(), angle);
        assert_eq!(rests.get(), 0);
    }

    #[test]
    fn failing_callback_does_not_break_the_loop() {
        let mut c = bound(PropellerConfig::default())
            .with_callbacks(Callbacks::new().on_rotate(|_| anyhow::bail!("listener blew up")));
        c.start_gesture();
        c.move_pointer(at(0.0));
        c.tick(0.0);
        c.move_pointer(at(45.0));
        assert_eq!(c.tick(16.0), Schedule::Continue);
        c.move_pointer(at(90.0));
        assert_eq!(c.tick(32.0), Schedule::Continue);
        assert_eq!(c.target().renders, vec![45.0, 90.0]);
    }

    #[test]
    fn missing_geometry_anchors_at_origin() {
        let mut c = RotationController::new(Recorder::default(), PropellerConfig::default()).unwrap();
        c.bind();
        c.start_gesture();
        c.move_pointer(PointerSample::new(0.0, -10.0));
        c.tick(0.0);
        c.move_pointer(PointerSample::new(10.0, 0.0));
        c.tick(16.0);
        assert_eq!(c.angle(), 90.0);
    }

    #[test]
    fn unbind_stops_schedule_and_ignores_gestures() {
        let (starts, on_start) = counter();
        let mut c = bound(PropellerConfig::default())
            .with_callbacks(Callbacks::new().on_drag_start(on_start));
        assert_eq!(c.tick(0.0), Schedule::Continue);

        c.unbind();
        assert_eq!(c.tick(16.0), Schedule::Stop);
        c.start_gesture();
        assert!(!c.move_pointer(at(10.0)));
        assert_eq!(starts.get(), 0);
        assert!(!c.is_dragging());

        c.bind();
        assert_eq!(c.tick(32.0), Schedule::Continue);
    }

    #[test]
    fn unbound_controller_ignores_input_until_bound() {
        let mut c = RotationController::new(
            Recorder { center: Some(CENTER), ..Default::default() },
            PropellerConfig::default(),
        )
        .unwrap();
        assert_eq!(c.tick(0.0), Schedule::Stop);
        c.start_gesture();
        assert!(!c.is_dragging());
        assert!(c.target().prepared.is_none());
    }

    #[test]
    fn moves_bubble_only_when_configured() {
        assert!(!bound(PropellerConfig::default()).propagates_moves());
        assert!(bound(PropellerConfig::default().with_rotate_parent_instantly(true)).propagates_moves());
    }
}

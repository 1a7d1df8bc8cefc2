//! Angle model - virtual/displayed angle bookkeeping and the inertia model
//!
//! No I/O: the controller decides when to render, this only tracks numbers.

use crate::config::PropellerConfig;
use crate::primitives::{normalize, quantize};

/// Result of one inertia decay step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedChange {
    /// Speed was already zero or inertia is disabled
    Idle,
    Decayed,
    /// Speed fell under the minimum and snapped to exactly zero this step
    Stopped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AngleModel {
    virtual_angle: f64,
    displayed_angle: f64,
    last_applied_angle: f64,
    speed: f64,
    step: f64,
    inertia: f64,
    minimal_speed: f64,
}

impl AngleModel {
    pub fn new(config: &PropellerConfig) -> Self {
        let mut model = Self {
            virtual_angle: config.angle,
            displayed_angle: 0.0,
            last_applied_angle: 0.0,
            speed: if config.inertia_enabled() { config.speed } else { 0.0 },
            step: config.step,
            inertia: config.inertia,
            minimal_speed: config.minimal_speed,
        };
        model.refresh_displayed();
        model.last_applied_angle = model.displayed_angle;
        model
    }

    pub fn virtual_angle(&self) -> f64 {
        self.virtual_angle
    }

    pub fn displayed_angle(&self) -> f64 {
        self.displayed_angle
    }

    pub fn last_applied_angle(&self) -> f64 {
        self.last_applied_angle
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn inertia_enabled(&self) -> bool {
        self.inertia > 0.0
    }

    /// Displayed angle for a given virtual angle: stepped when a step is
    /// configured, otherwise normalized into [0, 360).
    pub fn display_for(&self, virtual_angle: f64) -> f64 {
        if self.step > 0.0 {
            quantize(virtual_angle, self.step)
        } else {
            normalize(virtual_angle)
        }
    }

    pub fn set_virtual_angle(&mut self, virtual_angle: f64) {
        self.virtual_angle = virtual_angle;
    }

    /// Speed only sticks while inertia is enabled.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = if self.inertia_enabled() { speed } else { 0.0 };
    }

    pub fn reset_speed(&mut self) {
        self.speed = 0.0;
    }

    pub fn refresh_displayed(&mut self) {
        self.displayed_angle = self.display_for(self.virtual_angle);
    }

    pub fn mark_applied(&mut self) {
        self.last_applied_angle = self.displayed_angle;
    }

    /// Distance between what is displayed and what was last rendered
    pub fn pending_change(&self) -> f64 {
        (self.displayed_angle - self.last_applied_angle).abs()
    }

    /// Coast on the current speed while nobody is dragging.
    pub fn integrate_speed(&mut self, dragging: bool) {
        if self.inertia_enabled() && !dragging && self.speed != 0.0 {
            self.virtual_angle += self.speed;
        }
    }

    /// A speed that decays into the subnormal range counts as stopped, so
    /// a `minimal_speed` of 0 still comes to rest.
    pub fn decay_speed(&mut self) -> SpeedChange {
        if !self.inertia_enabled() || self.speed == 0.0 {
            return SpeedChange::Idle;
        }
        if self.speed.abs() >= self.minimal_speed {
            self.speed *= self.inertia;
            if self.speed.is_normal() {
                return SpeedChange::Decayed;
            }
        }
        self.speed = 0.0;
        SpeedChange::Stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inertial(speed: f64) -> AngleModel {
        AngleModel::new(
            &PropellerConfig::default()
                .with_inertia(0.9)
                .with_minimal_speed(0.001)
                .with_speed(speed),
        )
    }

    #[test]
    fn displayed_follows_virtual() {
        let mut m = AngleModel::new(&PropellerConfig::default().with_angle(-30.0));
        assert_eq!(m.displayed_angle(), 330.0);
        assert_eq!(m.last_applied_angle(), 330.0);

        m.set_virtual_angle(725.0);
        m.refresh_displayed();
        assert_eq!(m.displayed_angle(), 5.0);
        assert_eq!(m.virtual_angle(), 725.0);
    }

    #[test]
    fn stepped_display_is_unnormalized() {
        let mut m = AngleModel::new(&PropellerConfig::default().with_step(10.0));
        m.set_virtual_angle(723.0);
        m.refresh_displayed();
        assert_eq!(m.displayed_angle(), 730.0);
        assert_eq!(m.pending_change(), 730.0);
        m.mark_applied();
        assert_eq!(m.pending_change(), 0.0);
    }

    #[test]
    fn speed_is_dropped_without_inertia() {
        let mut m = AngleModel::new(&PropellerConfig::default().with_speed(4.0));
        assert_eq!(m.speed(), 0.0);
        m.set_speed(3.0);
        assert_eq!(m.speed(), 0.0);
        assert_eq!(m.decay_speed(), SpeedChange::Idle);
    }

    #[test]
    fn integrate_only_while_released() {
        let mut m = inertial(2.5);
        m.integrate_speed(true);
        assert_eq!(m.virtual_angle(), 0.0);
        m.integrate_speed(false);
        m.integrate_speed(false);
        assert_eq!(m.virtual_angle(), 5.0);
    }

    #[test]
    fn decay_is_geometric_then_snaps_to_zero() {
        let mut m = inertial(1.0);
        let mut expected = 1.0_f64;
        let mut ticks = 0;
        loop {
            let change = m.decay_speed();
            ticks += 1;
            if expected.abs() >= 0.001 {
                expected *= 0.9;
                assert_eq!(change, SpeedChange::Decayed);
                assert!((m.speed() - expected).abs() < 1e-12, "tick {ticks}");
            } else {
                assert_eq!(change, SpeedChange::Stopped);
                assert_eq!(m.speed(), 0.0);
                break;
            }
        }
        // 0.9^66 is the first power under 0.001
        assert_eq!(ticks, 67);
        assert_eq!(m.decay_speed(), SpeedChange::Idle);
    }

    #[test]
    fn zero_minimal_speed_still_comes_to_rest() {
        let mut m = AngleModel::new(
            &PropellerConfig::default()
                .with_inertia(0.9)
                .with_minimal_speed(0.0)
                .with_speed(5.0),
        );
        let mut stopped = 0;
        for _ in 0..100_000 {
            match m.decay_speed() {
                SpeedChange::Stopped => stopped += 1,
                SpeedChange::Idle => break,
                SpeedChange::Decayed => {}
            }
        }
        assert_eq!(stopped, 1);
        assert_eq!(m.speed(), 0.0);
    }

    #[test]
    fn negative_speed_decays_toward_zero() {
        let mut m = inertial(-3.0);
        m.decay_speed();
        assert!((m.speed() + 2.7).abs() < 1e-12);
        let before = m.speed().abs();
        m.decay_speed();
        assert!(m.speed().abs() < before);
    }
}

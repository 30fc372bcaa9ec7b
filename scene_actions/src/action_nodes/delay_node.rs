use crate::{Action, ActionError, IntervalAction, Result};

/// Waits for a duration without touching the node.
///
/// The first step after a start only marks the clock as running, later steps
/// accumulate their `dt`.
pub struct DelayTime {
    duration: f64,
    elapsed: f64,
    first_tick: bool,
}

impl DelayTime {
    pub fn new(duration: f64) -> Result<Self> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(ActionError::InvalidDuration(duration));
        }
        Ok(Self {
            duration,
            elapsed: 0.0,
            first_tick: true,
        })
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

impl<N> IntervalAction<N> for DelayTime {
    fn start_with_target(&mut self, _target: &mut N) {
        self.elapsed = 0.0;
        self.first_tick = true;
    }

    fn step(&mut self, dt: f64, target: &mut N) {
        if self.first_tick {
            self.first_tick = false;
            self.elapsed = 0.0;
        } else {
            self.elapsed += dt;
        }

        let time = (self.elapsed / self.duration.max(f64::EPSILON)).clamp(0.0, 1.0);
        self.update(time, target);
    }

    fn update(&mut self, _time: f64, _target: &mut N) {}

    fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn reverse(&self) -> Result<Action<N>> {
        Ok(Action::interval(DelayTime::new(self.duration)?))
    }

    fn name(&self) -> &'static str {
        "DelayTime"
    }
}

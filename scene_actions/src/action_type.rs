use crate::{InstantAction, IntervalAction, Result};

/// A runnable action.
///
/// Instant actions share one execution contract: they are always done,
/// stepping them is `update(1.0)` and `update` does nothing, because their
/// whole effect happens in `start_with_target`.
pub enum Action<N> {
    Instant(Box<dyn InstantAction<N>>),
    Interval(Box<dyn IntervalAction<N>>),
}

impl<N> Action<N> {
    pub fn instant<T>(action: T) -> Self
    where
        T: InstantAction<N> + 'static,
    {
        Action::Instant(Box::new(action))
    }

    pub fn interval<T>(action: T) -> Self
    where
        T: IntervalAction<N> + 'static,
    {
        Action::Interval(Box::new(action))
    }

    pub fn start_with_target(&mut self, target: &mut N) {
        tracing::trace!(action = self.name(), "Starting action");
        match self {
            Action::Instant(instant_action) => instant_action.start_with_target(target),
            Action::Interval(interval_action) => interval_action.start_with_target(target),
        }
    }

    pub fn step(&mut self, dt: f64, target: &mut N) {
        match self {
            Action::Instant(_) => self.update(1.0, target),
            Action::Interval(interval_action) => interval_action.step(dt, target),
        }
    }

    pub fn update(&mut self, time: f64, target: &mut N) {
        match self {
            Action::Instant(_) => {}
            Action::Interval(interval_action) => interval_action.update(time, target),
        }
    }

    pub fn is_done(&self) -> bool {
        match self {
            Action::Instant(_) => true,
            Action::Interval(interval_action) => interval_action.is_done(),
        }
    }

    pub fn stop(&mut self, target: &mut N) {
        match self {
            Action::Instant(_) => {}
            Action::Interval(interval_action) => interval_action.stop(target),
        }
    }

    pub fn duration(&self) -> f64 {
        match self {
            Action::Instant(_) => 0.0,
            Action::Interval(interval_action) => interval_action.duration(),
        }
    }

    pub fn reverse(&self) -> Result<Action<N>> {
        let reversed = match self {
            Action::Instant(instant_action) => instant_action.reverse(),
            Action::Interval(interval_action) => interval_action.reverse(),
        };
        if let Err(err) = &reversed {
            tracing::warn!(action = self.name(), %err, "Reverse requested");
        }
        reversed
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Instant(instant_action) => instant_action.name(),
            Action::Interval(interval_action) => interval_action.name(),
        }
    }

    pub fn is_instant(&self) -> bool {
        matches!(self, Action::Instant(_))
    }
}

impl<N> std::fmt::Debug for Action<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Instant(instant_action) => {
                f.debug_tuple("Instant").field(&instant_action.name()).finish()
            }
            Action::Interval(interval_action) => {
                f.debug_tuple("Interval").field(&interval_action.name()).finish()
            }
        }
    }
}

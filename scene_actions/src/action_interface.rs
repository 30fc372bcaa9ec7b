use crate::{Action, ActionError, Result};

/// An action whose whole effect is applied when it is started.
///
/// Implementors only describe the effect. Stepping, completion and the zero
/// duration are provided by [`Action::Instant`], so an instant action is done
/// as soon as it exists and stepping it again never re-applies the effect.
pub trait InstantAction<N> {
    /// Applies the effect of the action to `target`.
    fn start_with_target(&mut self, target: &mut N);

    /// Creates a new action that undoes this one.
    fn reverse(&self) -> Result<Action<N>> {
        Err(ActionError::NotReversible {
            action: self.name(),
        })
    }

    /// Identify your action
    fn name(&self) -> &'static str;
}

/// An action that runs over several ticks.
pub trait IntervalAction<N> {
    /// Binds the action to `target` and resets its progress.
    ///
    /// Invoked once before the first `step`, and again whenever a composite
    /// restarts the action.
    fn start_with_target(&mut self, target: &mut N);

    /// Advances the action by `dt` seconds.
    ///
    /// NOTE: See `ActionManager`. User is not expected to invoke this manually
    fn step(&mut self, dt: f64, target: &mut N);

    /// Applies the action at `time`, a progress value between 0 and 1.
    fn update(&mut self, time: f64, target: &mut N);

    fn is_done(&self) -> bool;

    /// Function is only invoked when a started action is done or removed.
    fn stop(&mut self, _target: &mut N) {}

    /// Duration in seconds
    fn duration(&self) -> f64;

    fn reverse(&self) -> Result<Action<N>>;

    fn name(&self) -> &'static str;
}

/// Converts user action descriptions into runnable actions.
pub trait ToAction<N> {
    fn to_action(self) -> Action<N>;
}

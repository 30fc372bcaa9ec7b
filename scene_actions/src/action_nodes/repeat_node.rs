use crate::{Action, ActionError, Child, IntervalAction, Result};

/// Runs an action a fixed number of times.
///
/// The action is restarted on the same target as soon as it is done, within
/// the same step.
pub struct Repeat<N> {
    child: Child<N>,
    times: u32,
    completed: u32,
}

impl<N> Repeat<N> {
    pub fn new(action: Action<N>, times: u32) -> Result<Self> {
        Self::from_child(Child::from_action(action), times)
    }

    pub fn from_child(child: Child<N>, times: u32) -> Result<Self> {
        if times == 0 {
            return Err(ActionError::ZeroRepeat);
        }
        Ok(Self {
            child,
            times,
            completed: 0,
        })
    }

    pub fn times(&self) -> u32 {
        self.times
    }

    pub fn completed(&self) -> u32 {
        self.completed
    }
}

impl<N: 'static> IntervalAction<N> for Repeat<N> {
    fn start_with_target(&mut self, target: &mut N) {
        self.completed = 0;
        self.child.reset();
        self.child.start_with_target(target);
    }

    #[tracing::instrument(level = "trace", name = "Repeat::step", skip_all, fields(times = self.times))]
    fn step(&mut self, dt: f64, target: &mut N) {
        if self.is_done() {
            return;
        }

        self.child.step(dt, target);
        while self.child.is_done() {
            self.child.stop(target);
            self.completed += 1;
            if self.is_done() {
                break;
            }

            self.child.reset();
            self.child.start_with_target(target);
            self.child.step(dt, target);
        }
    }

    // Progress is driven by the child in `step`
    fn update(&mut self, _time: f64, _target: &mut N) {}

    fn is_done(&self) -> bool {
        self.completed >= self.times
    }

    fn stop(&mut self, target: &mut N) {
        if self.child.is_running() {
            self.child.stop(target);
        }
    }

    fn duration(&self) -> f64 {
        self.child.duration() * f64::from(self.times)
    }

    fn reverse(&self) -> Result<Action<N>> {
        Ok(Action::interval(Repeat::new(
            self.child.reverse()?,
            self.times,
        )?))
    }

    fn name(&self) -> &'static str {
        "Repeat"
    }
}

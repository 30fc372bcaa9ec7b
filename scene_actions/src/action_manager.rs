use scene_actions_common::{Behavior, Node, State, Status};

use crate::{Action, Child, Result, ToAction};

/// Identifies a scheduled action so it can be removed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Tag(pub u32);

struct ScheduledAction<N> {
    child: Child<N>,
    tag: Option<Tag>,
}

/// Runs actions against the node it owns.
///
/// Actions are started on the first `tick` after they are scheduled and are
/// stepped in that same tick, so an instant action is applied and removed in
/// a single tick. Removing an action before that tick cancels it.
pub struct ActionManager<N> {
    target: N,
    actions: Vec<ScheduledAction<N>>,
    paused: bool,
}

impl<N> ActionManager<N>
where
    N: Node + 'static,
{
    pub fn new(target: N) -> Self {
        Self {
            target,
            actions: vec![],
            paused: false,
        }
    }

    pub fn run_action(&mut self, action: Action<N>) -> tokio::sync::watch::Receiver<Option<Status>> {
        self.schedule(Child::from_action(action), None)
    }

    pub fn run_action_with_tag(
        &mut self,
        action: Action<N>,
        tag: Tag,
    ) -> tokio::sync::watch::Receiver<Option<Status>> {
        self.schedule(Child::from_action(action), Some(tag))
    }

    /// Builds the actions described by `behavior` and schedules them.
    pub fn run_behavior<A>(&mut self, behavior: Behavior<A>) -> Result<State>
    where
        A: ToAction<N>,
    {
        let (child, state) = Child::from_behavior_with_state(behavior)?;
        self.schedule(child, None);
        Ok(state)
    }

    fn schedule(
        &mut self,
        child: Child<N>,
        tag: Option<Tag>,
    ) -> tokio::sync::watch::Receiver<Option<Status>> {
        tracing::debug!(action = child.name(), ?tag, "Scheduled action");
        let status = child.subscribe();
        self.actions.push(ScheduledAction { child, tag });
        status
    }

    #[tracing::instrument(level = "trace", name = "ActionManager::tick", skip(self))]
    pub fn tick(&mut self, dt: f64) {
        if self.paused {
            return;
        }

        let Self {
            target, actions, ..
        } = self;

        for scheduled in actions.iter_mut() {
            let child = &mut scheduled.child;
            if !child.is_started() {
                child.start_with_target(target);
            }
            child.step(dt, target);
        }

        actions.retain_mut(|scheduled| {
            if !scheduled.child.is_done() {
                return true;
            }
            scheduled.child.stop(target);
            tracing::trace!(action = scheduled.child.name(), "Removed finished action");
            false
        });
    }

    /// Removes the first action scheduled with `tag`.
    ///
    /// Returns false if no such action is scheduled.
    pub fn remove_action_by_tag(&mut self, tag: Tag) -> bool {
        let Some(index) = self
            .actions
            .iter()
            .position(|scheduled| scheduled.tag == Some(tag))
        else {
            return false;
        };

        let mut scheduled = self.actions.remove(index);
        if scheduled.child.is_running() {
            scheduled.child.stop(&mut self.target);
        }
        tracing::debug!(action = scheduled.child.name(), ?tag, "Removed action");
        true
    }

    pub fn remove_all_actions(&mut self) {
        for mut scheduled in self.actions.drain(..) {
            if scheduled.child.is_running() {
                scheduled.child.stop(&mut self.target);
            }
        }
    }

    /// Stops ticking the actions until `resume` is called.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    pub fn target(&self) -> &N {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut N {
        &mut self.target
    }

    pub fn into_target(self) -> N {
        self.target
    }
}

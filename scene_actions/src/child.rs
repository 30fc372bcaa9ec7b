use std::rc::Rc;

use scene_actions_common::{Behavior, Node, State, Status};

use crate::{
    Action, DelayTime, FlipX, FlipY, Hide, Place, Repeat, Result, Sequence, Show, ToAction,
    ToggleVisibility,
};

/// An action together with the channel its status is published on.
pub struct Child<N> {
    action: Action<N>,
    status: tokio::sync::watch::Sender<Option<Status>>,
}

impl<N> Child<N> {
    pub fn new(action: Action<N>, status: tokio::sync::watch::Sender<Option<Status>>) -> Self {
        Self { action, status }
    }

    /// Wraps an action whose status nobody observes yet.
    pub fn from_action(action: Action<N>) -> Self {
        let (child, _state) = Self::from_action_with_state(action);
        child
    }

    pub fn from_action_with_state(action: Action<N>) -> (Self, State) {
        let (tx, rx) = tokio::sync::watch::channel(None);
        let state = State::NoChild(action.name(), rx);
        (Self::new(action, tx), state)
    }

    #[cfg(test)]
    pub fn from_behavior<A>(behavior: Behavior<A>) -> Result<Self>
    where
        A: ToAction<N>,
        N: Node + 'static,
    {
        let (child, _state) = Self::from_behavior_with_state(behavior)?;
        Ok(child)
    }

    pub fn from_behavior_with_state<A>(behavior: Behavior<A>) -> Result<(Self, State)>
    where
        A: ToAction<N>,
        N: Node + 'static,
    {
        match behavior {
            Behavior::Action(action) => Ok(Self::from_action_with_state(action.to_action())),
            Behavior::Show => Ok(Self::from_action_with_state(Action::instant(Show::new()))),
            Behavior::Hide => Ok(Self::from_action_with_state(Action::instant(Hide::new()))),
            Behavior::ToggleVisibility => Ok(Self::from_action_with_state(Action::instant(
                ToggleVisibility::new(),
            ))),
            Behavior::FlipX(flip_x) => {
                Ok(Self::from_action_with_state(Action::instant(FlipX::new(flip_x))))
            }
            Behavior::FlipY(flip_y) => {
                Ok(Self::from_action_with_state(Action::instant(FlipY::new(flip_y))))
            }
            Behavior::Place(position) => {
                let action = Action::instant(Place::new(position)?);
                Ok(Self::from_action_with_state(action))
            }
            Behavior::Wait(duration) => {
                let action = Action::interval(DelayTime::new(duration)?);
                Ok(Self::from_action_with_state(action))
            }
            Behavior::Sequence(children) => {
                let (children, children_state): (Vec<_>, Vec<_>) = children
                    .into_iter()
                    .map(Self::from_behavior_with_state)
                    .collect::<Result<Vec<_>>>()?
                    .into_iter()
                    .unzip();
                let children_state = Rc::from_iter(children_state);

                let action = Action::interval(Sequence::from_children(children)?);

                let (tx, rx) = tokio::sync::watch::channel(None);
                let state = State::MultipleChildren(action.name(), rx, children_state);
                Ok((Self::new(action, tx), state))
            }
            Behavior::Repeat(times, child) => {
                let (child, child_state) = Self::from_behavior_with_state(*child)?;

                let action = Action::interval(Repeat::from_child(child, times)?);

                let (tx, rx) = tokio::sync::watch::channel(None);
                let state = State::SingleChild(action.name(), rx, Rc::new(child_state));
                Ok((Self::new(action, tx), state))
            }
        }
    }

    pub fn start_with_target(&mut self, target: &mut N) {
        self.action.start_with_target(target);
        self.publish();
    }

    pub fn step(&mut self, dt: f64, target: &mut N) -> Status {
        self.action.step(dt, target);
        self.publish()
    }

    pub fn stop(&mut self, target: &mut N) {
        self.action.stop(target);
    }

    /// Marks the action as not started so it can be started again.
    pub fn reset(&mut self) {
        self.status.send_replace(None);
    }

    pub fn is_started(&self) -> bool {
        self.status().is_some()
    }

    pub fn is_done(&self) -> bool {
        self.action.is_done()
    }

    /// True while the action has been started and still has work left.
    pub fn is_running(&self) -> bool {
        self.status() == Some(Status::Running)
    }

    pub fn status(&self) -> Option<Status> {
        *self.status.borrow()
    }

    /// Observe the status of this action.
    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<Option<Status>> {
        self.status.subscribe()
    }

    pub fn name(&self) -> &'static str {
        self.action.name()
    }

    pub fn duration(&self) -> f64 {
        self.action.duration()
    }

    pub fn reverse(&self) -> Result<Action<N>> {
        self.action.reverse()
    }

    fn publish(&mut self) -> Status {
        let status = Status::from_done(self.action.is_done());
        self.status.send_replace(Some(status));
        status
    }
}

#[cfg(test)]
mod tests {
    use scene_actions_common::Point;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    use super::*;
    use crate::ActionError;
    use crate::test_action_interface::{TestAction, TestNode};

    #[test]
    fn test_basic_behavior() {
        let _ignore = tracing_subscriber::Registry::default()
            .with(tracing_forest::ForestLayer::default())
            .try_init();

        let behavior = Behavior::Sequence(vec![
            Behavior::Hide,
            Behavior::Action(TestAction::Log("hidden".into())),
            Behavior::Wait(2.0),
            Behavior::Place(Point::new(10.0, 20.0)),
            Behavior::Show,
        ]);

        let (mut child, state) = Child::from_behavior_with_state(behavior).unwrap();
        let mut node = TestNode::default();
        assert_eq!(state.status(), None);
        assert_eq!(state.children().len(), 5);

        child.start_with_target(&mut node);
        loop {
            let status = child.step(1.0, &mut node);
            tracing::info!("State:\n{:#?}", state);
            if status != Status::Running {
                break;
            }
        }

        assert!(node.sprite.visible);
        assert_eq!(node.sprite.position, Point::new(10.0, 20.0));
        assert_eq!(node.log, vec!["hidden".to_string()]);
        assert!(
            state
                .children()
                .iter()
                .all(|child| child.status() == Some(Status::Done))
        );
    }

    #[test]
    fn test_state_names() {
        let behavior: Behavior<TestAction> = Behavior::Repeat(
            2,
            Box::new(Behavior::Sequence(vec![
                Behavior::FlipX(true),
                Behavior::FlipY(false),
            ])),
        );

        let (_child, state) = Child::<TestNode>::from_behavior_with_state(behavior).unwrap();
        assert_eq!(state.name(), "Repeat");
        assert_eq!(state.children()[0].name(), "Sequence");
        let names = state.children()[0]
            .children()
            .iter()
            .map(State::name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["FlipX", "FlipY"]);
    }

    #[test]
    fn test_invalid_behavior() {
        let behavior: Behavior<TestAction> =
            Behavior::Sequence(vec![Behavior::Show, Behavior::Wait(-1.0)]);
        let err = Child::<TestNode>::from_behavior(behavior).err();
        assert_eq!(err, Some(ActionError::InvalidDuration(-1.0)));

        let behavior: Behavior<TestAction> = Behavior::Sequence(vec![]);
        let err = Child::<TestNode>::from_behavior(behavior).err();
        assert_eq!(err, Some(ActionError::EmptySequence));

        let behavior: Behavior<TestAction> = Behavior::Repeat(0, Box::new(Behavior::Show));
        let err = Child::<TestNode>::from_behavior(behavior).err();
        assert_eq!(err, Some(ActionError::ZeroRepeat));
    }

    #[test]
    fn test_instant_child_is_done_when_started() {
        let mut node = TestNode::default();
        let (mut child, state) = Child::from_action_with_state(Action::instant(Hide::new()));
        assert!(!child.is_started());

        child.start_with_target(&mut node);
        assert!(child.is_started());
        assert!(!child.is_running());
        assert_eq!(state.status(), Some(Status::Done));
        assert!(!node.sprite.visible);

        child.reset();
        assert_eq!(state.status(), None);
    }
}

use crate::{Action, ActionError, Child, IntervalAction, Result};

/// Runs actions one after the other.
///
/// Whenever the current action is done the next one is started in the same
/// step, so a run of instant actions is applied within a single tick.
pub struct Sequence<N> {
    children: Vec<Child<N>>,
    index: usize,
}

impl<N> Sequence<N> {
    pub fn new(actions: Vec<Action<N>>) -> Result<Self> {
        let children = actions.into_iter().map(Child::from_action).collect();
        Self::from_children(children)
    }

    pub fn from_children(children: Vec<Child<N>>) -> Result<Self> {
        if children.is_empty() {
            return Err(ActionError::EmptySequence);
        }
        Ok(Self { children, index: 0 })
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<N: 'static> IntervalAction<N> for Sequence<N> {
    fn start_with_target(&mut self, _target: &mut N) {
        // Children are started lazily when the sequence reaches them
        self.children.iter_mut().for_each(Child::reset);
        self.index = 0;
    }

    #[tracing::instrument(level = "trace", name = "Sequence::step", skip_all)]
    fn step(&mut self, dt: f64, target: &mut N) {
        while let Some(child) = self.children.get_mut(self.index) {
            if !child.is_started() {
                child.start_with_target(target);
            }

            child.step(dt, target);
            if !child.is_done() {
                break;
            }

            child.stop(target);
            self.index += 1;
        }
    }

    // Progress is driven by the children in `step`
    fn update(&mut self, _time: f64, _target: &mut N) {}

    fn is_done(&self) -> bool {
        self.index >= self.children.len()
    }

    fn stop(&mut self, target: &mut N) {
        if let Some(child) = self.children.get_mut(self.index) {
            if child.is_running() {
                child.stop(target);
            }
        }
    }

    fn duration(&self) -> f64 {
        self.children.iter().map(Child::duration).sum()
    }

    fn reverse(&self) -> Result<Action<N>> {
        let actions = self
            .children
            .iter()
            .rev()
            .map(Child::reverse)
            .collect::<Result<Vec<_>>>()?;
        Ok(Action::interval(Sequence::new(actions)?))
    }

    fn name(&self) -> &'static str {
        "Sequence"
    }
}

#[cfg(test)]
mod tests {
    use scene_actions_common::{Node, Point, SpriteNode};

    use super::*;
    use crate::{DelayTime, FlipX, Hide, Place, Show};

    fn run(sequence: &mut Action<SpriteNode>, node: &mut SpriteNode, dt: f64) -> usize {
        sequence.start_with_target(node);
        let mut ticks = 0;
        loop {
            sequence.step(dt, node);
            ticks += 1;
            if sequence.is_done() {
                break ticks;
            }
        }
    }

    #[test]
    fn test_sequence_instants_in_one_step() {
        let mut node = SpriteNode::new();
        node.set_visible(false);

        let mut sequence = Action::interval(
            Sequence::new(vec![
                Action::instant(Show::new()),
                Action::instant(FlipX::new(true)),
                Action::instant(Place::new(Point::new(5.0, 5.0)).unwrap()),
            ])
            .unwrap(),
        );
        assert_eq!(sequence.duration(), 0.0);

        let ticks = run(&mut sequence, &mut node, 0.1);
        assert_eq!(ticks, 1);
        assert!(node.is_visible());
        assert!(node.flip_x);
        assert_eq!(node.position(), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_sequence_with_delay() {
        let mut node = SpriteNode::new();

        let mut sequence = Action::interval(
            Sequence::new(vec![
                Action::instant(Hide::new()),
                Action::interval(DelayTime::new(1.0).unwrap()),
                Action::instant(Show::new()),
            ])
            .unwrap(),
        );
        assert_eq!(sequence.duration(), 1.0);
        sequence.start_with_target(&mut node);

        sequence.step(0.5, &mut node);
        assert!(!node.is_visible());
        assert!(!sequence.is_done());

        sequence.step(0.5, &mut node);
        assert!(!node.is_visible());
        assert!(!sequence.is_done());

        sequence.step(0.5, &mut node);
        assert!(node.is_visible());
        assert!(sequence.is_done());
    }

    #[test]
    fn test_sequence_restart() {
        let mut node = SpriteNode::new();
        let mut sequence = Action::interval(
            Sequence::new(vec![
                Action::instant(Hide::new()),
                Action::interval(DelayTime::new(0.2).unwrap()),
            ])
            .unwrap(),
        );

        run(&mut sequence, &mut node, 0.1);
        node.set_visible(true);

        // Starting again replays every child
        let ticks = run(&mut sequence, &mut node, 0.1);
        assert_eq!(ticks, 3);
        assert!(!node.is_visible());
    }

    #[test]
    fn test_sequence_reverse() {
        let mut node = SpriteNode::new();
        node.set_visible(false);

        let sequence = Action::interval(
            Sequence::new(vec![
                Action::instant(Show::new()),
                Action::instant(FlipX::new(true)),
            ])
            .unwrap(),
        );
        let mut reversed = sequence.reverse().unwrap();
        assert_eq!(reversed.name(), "Sequence");

        let mut forward = sequence;
        run(&mut forward, &mut node, 0.1);
        assert!(node.is_visible());
        assert!(node.flip_x);

        run(&mut reversed, &mut node, 0.1);
        assert!(!node.is_visible());
        assert!(!node.flip_x);
    }

    #[test]
    fn test_sequence_reverse_with_place_fails() {
        let sequence: Action<SpriteNode> = Action::interval(
            Sequence::new(vec![
                Action::instant(Show::new()),
                Action::instant(Place::new(Point::ZERO).unwrap()),
            ])
            .unwrap(),
        );
        assert_eq!(
            sequence.reverse().unwrap_err(),
            ActionError::NotReversible { action: "Place" }
        );
    }

    #[test]
    fn test_sequence_empty() {
        let sequence = Sequence::<SpriteNode>::new(vec![]);
        assert!(matches!(sequence, Err(ActionError::EmptySequence)));
    }
}

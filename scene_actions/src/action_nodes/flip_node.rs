use scene_actions_common::Node;

use crate::{Action, InstantAction, Result};

/// Sets the horizontal flip flag of the node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlipX {
    flip_x: bool,
}

impl FlipX {
    pub fn new(flip_x: bool) -> Self {
        Self { flip_x }
    }

    pub fn flip_x(&self) -> bool {
        self.flip_x
    }
}

impl<N: Node> InstantAction<N> for FlipX {
    fn start_with_target(&mut self, target: &mut N) {
        target.set_flip_x(self.flip_x);
    }

    fn reverse(&self) -> Result<Action<N>> {
        Ok(Action::instant(FlipX::new(!self.flip_x)))
    }

    fn name(&self) -> &'static str {
        "FlipX"
    }
}

/// Sets the vertical flip flag of the node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlipY {
    flip_y: bool,
}

impl FlipY {
    pub fn new(flip_y: bool) -> Self {
        Self { flip_y }
    }

    pub fn flip_y(&self) -> bool {
        self.flip_y
    }
}

impl<N: Node> InstantAction<N> for FlipY {
    fn start_with_target(&mut self, target: &mut N) {
        target.set_flip_y(self.flip_y);
    }

    fn reverse(&self) -> Result<Action<N>> {
        Ok(Action::instant(FlipY::new(!self.flip_y)))
    }

    fn name(&self) -> &'static str {
        "FlipY"
    }
}

#[cfg(test)]
mod tests {
    use scene_actions_common::SpriteNode;

    use super::*;

    #[test]
    fn test_flip_default_is_false() {
        assert!(!FlipX::default().flip_x());
        assert!(!FlipY::default().flip_y());
    }

    #[test]
    fn test_flip_x() {
        let mut node = SpriteNode::new();
        let mut flip: Action<SpriteNode> = Action::instant(FlipX::new(true));
        flip.start_with_target(&mut node);
        assert!(node.flip_x);
        assert!(!node.flip_y);

        let mut reversed = flip.reverse().unwrap();
        reversed.start_with_target(&mut node);
        assert!(!node.flip_x);
    }

    #[test]
    fn test_flip_y() {
        let mut node = SpriteNode::new();
        let mut flip: Action<SpriteNode> = Action::instant(FlipY::new(true));
        flip.start_with_target(&mut node);
        assert!(node.flip_y);
        assert!(!node.flip_x);

        let mut reversed = flip.reverse().unwrap();
        assert_eq!(reversed.name(), "FlipY");
        reversed.start_with_target(&mut node);
        assert!(!node.flip_y);
    }

    #[test]
    fn test_flip_reverse_twice() {
        let mut node = SpriteNode::new();
        let flip: Action<SpriteNode> = Action::instant(FlipX::new(true));
        let mut twice = flip.reverse().unwrap().reverse().unwrap();
        twice.start_with_target(&mut node);
        assert!(node.flip_x);
    }
}

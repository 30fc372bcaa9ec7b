use scene_actions_common::{Node, Point};

use crate::{ActionError, InstantAction, Result};

/// Moves the node to an absolute position.
///
/// Has no inverse since the previous position is unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Place {
    position: Point,
}

impl Place {
    pub fn new(position: Point) -> Result<Self> {
        if !position.is_finite() {
            return Err(ActionError::InvalidPosition {
                x: position.x,
                y: position.y,
            });
        }
        Ok(Self { position })
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

impl<N: Node> InstantAction<N> for Place {
    fn start_with_target(&mut self, target: &mut N) {
        target.set_position(self.position);
    }

    fn name(&self) -> &'static str {
        "Place"
    }
}

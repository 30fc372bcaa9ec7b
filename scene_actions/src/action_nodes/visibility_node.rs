use scene_actions_common::Node;

use crate::{Action, InstantAction, Result};

/// Shows the node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Show;

impl Show {
    pub fn new() -> Self {
        Self
    }
}

impl<N: Node> InstantAction<N> for Show {
    fn start_with_target(&mut self, target: &mut N) {
        target.set_visible(true);
    }

    fn reverse(&self) -> Result<Action<N>> {
        Ok(Action::instant(Hide::new()))
    }

    fn name(&self) -> &'static str {
        "Show"
    }
}

/// Hides the node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hide;

impl Hide {
    pub fn new() -> Self {
        Self
    }
}

impl<N: Node> InstantAction<N> for Hide {
    fn start_with_target(&mut self, target: &mut N) {
        target.set_visible(false);
    }

    fn reverse(&self) -> Result<Action<N>> {
        Ok(Action::instant(Show::new()))
    }

    fn name(&self) -> &'static str {
        "Hide"
    }
}

/// Inverts the visibility of the node.
///
/// The visibility is read once, when the action starts. Reversing gives
/// another toggle, which only restores the previous visibility if nothing
/// else changed it in between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleVisibility;

impl ToggleVisibility {
    pub fn new() -> Self {
        Self
    }
}

impl<N: Node> InstantAction<N> for ToggleVisibility {
    fn start_with_target(&mut self, target: &mut N) {
        let visible = target.is_visible();
        target.set_visible(!visible);
    }

    fn reverse(&self) -> Result<Action<N>> {
        Ok(Action::instant(ToggleVisibility::new()))
    }

    fn name(&self) -> &'static str {
        "ToggleVisibility"
    }
}

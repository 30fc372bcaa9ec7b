use std::rc::Rc;

use crate::Status;

/// Live view of an instantiated action tree.
///
/// Every node carries the name of its action and a receiver for its status.
/// `None` means the action has not been started yet.
#[derive(Debug, Clone)]
pub enum State {
    /// Leaf actions
    NoChild(&'static str, tokio::sync::watch::Receiver<Option<Status>>),
    /// Actions wrapping a single action, such as `Repeat`
    SingleChild(
        &'static str,
        tokio::sync::watch::Receiver<Option<Status>>,
        Rc<State>,
    ),
    /// Actions running a list of actions, such as `Sequence`
    MultipleChildren(
        &'static str,
        tokio::sync::watch::Receiver<Option<Status>>,
        Rc<[State]>,
    ),
}

impl State {
    pub fn name(&self) -> &'static str {
        match self {
            State::NoChild(name, _)
            | State::SingleChild(name, _, _)
            | State::MultipleChildren(name, _, _) => name,
        }
    }

    pub fn status(&self) -> Option<Status> {
        match self {
            State::NoChild(_, rx)
            | State::SingleChild(_, rx, _)
            | State::MultipleChildren(_, rx, _) => *rx.borrow(),
        }
    }

    /// Direct children of this node, in execution order.
    pub fn children(&self) -> &[State] {
        match self {
            State::NoChild(..) => &[],
            State::SingleChild(_, _, child) => std::slice::from_ref(child.as_ref()),
            State::MultipleChildren(_, _, children) => children,
        }
    }
}

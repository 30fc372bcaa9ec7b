use kurbo::Point;

/// Describes an action tree.
///
/// This is the serializable form of the actions a node runs. It is turned
/// into live actions when handed to an action manager.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Behavior<A> {
    /// A user defined action, for example a callback.
    Action(A),

    /// Makes the node visible.
    Show,
    /// Makes the node invisible.
    Hide,
    /// Inverts the visibility of the node when started.
    ToggleVisibility,
    /// Sets the horizontal flip flag of the node.
    FlipX(bool),
    /// Sets the vertical flip flag of the node.
    FlipY(bool),
    /// Moves the node to an absolute position.
    Place(Point),

    /// Waits an amount of time before continuing.
    ///
    /// f64: Time in seconds
    Wait(f64),

    /// Runs behaviors one by one until all of them are done.
    ///
    /// Instant behaviors that follow each other all run in the same tick.
    Sequence(Vec<Behavior<A>>),
    /// Runs a behavior a number of times.
    Repeat(u32, Box<Behavior<A>>),
}

impl<A> Behavior<A> {
    /// True for built-in behaviors that complete in the tick they start in.
    ///
    /// User actions are only known once converted, so they report false.
    pub fn is_instant(&self) -> bool {
        match self {
            Behavior::Action(_) => false,
            Behavior::Show
            | Behavior::Hide
            | Behavior::ToggleVisibility
            | Behavior::FlipX(_)
            | Behavior::FlipY(_)
            | Behavior::Place(_) => true,
            Behavior::Wait(_) | Behavior::Sequence(_) | Behavior::Repeat(..) => false,
        }
    }
}

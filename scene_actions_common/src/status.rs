/// The progress of an action as observed by whoever drives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Status {
    /// The action has been started and still has work left.
    Running,
    /// The action has applied its whole effect.
    Done,
}

impl Status {
    pub fn from_done(done: bool) -> Self {
        if done { Status::Done } else { Status::Running }
    }
}

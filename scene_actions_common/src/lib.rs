mod behavior;
pub use behavior::*;

mod node;
pub use node::*;

mod state;
pub use state::*;

mod status;
pub use status::*;

pub use kurbo::Point;

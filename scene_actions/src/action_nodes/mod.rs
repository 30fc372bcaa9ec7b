// Instant
mod visibility_node;
pub use visibility_node::*;

mod flip_node;
pub use flip_node::*;

mod place_node;
pub use place_node::*;

mod call_func_node;
pub use call_func_node::*;

// Interval
mod delay_node;
pub use delay_node::*;

// Composite
mod sequence_node;
pub use sequence_node::*;

mod repeat_node;
pub use repeat_node::*;

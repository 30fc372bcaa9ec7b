pub use scene_actions_common::*;

mod error;
pub use error::*;

mod action_interface;
pub use action_interface::*;

mod action_type;
pub use action_type::*;

mod child;
pub use child::*;

mod action_manager;
pub use action_manager::*;

mod action_nodes;
pub use action_nodes::*;

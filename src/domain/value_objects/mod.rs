//! Domain Value Objects
//!
//! Immutable, validated value types.

mod resource_type;
mod stack_name;

pub use resource_type::ResourceType;
pub use stack_name::{StackName, StackNameSource};

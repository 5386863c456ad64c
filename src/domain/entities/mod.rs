//! Domain Entities
//!
//! - `StackResource` / `ResourceDescriptor` - Resources listed from a stack
//! - `OutputDocument` - The aggregated environment document

mod output_document;
mod resource;

pub use output_document::{EnvironmentMap, OutputDocument};
pub use resource::{ResourceDescriptor, StackResource};

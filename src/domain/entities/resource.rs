//! Stack resources as returned by the orchestration control plane.

use crate::domain::value_objects::ResourceType;

/// One resource summary from a stack listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackResource {
    /// Template-defined id, unique within the stack
    pub logical_id: String,
    /// Provider-assigned name. Absent while a resource is still being created.
    pub physical_id: Option<String>,
    pub resource_type: ResourceType,
}

impl StackResource {
    pub fn new(
        logical_id: impl Into<String>,
        physical_id: Option<String>,
        resource_type: impl Into<ResourceType>,
    ) -> Self {
        Self {
            logical_id: logical_id.into(),
            physical_id,
            resource_type: resource_type.into(),
        }
    }

    /// Convert to a descriptor if this is an addressable Lambda function.
    pub fn as_function(&self) -> Option<ResourceDescriptor> {
        if !self.resource_type.is_function() {
            return None;
        }
        self.physical_id
            .as_ref()
            .map(|physical| ResourceDescriptor::new(&self.logical_id, physical))
    }
}

/// A Lambda function inside a stack: (logical name, physical id).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceDescriptor {
    pub logical_id: String,
    pub physical_id: String,
}

impl ResourceDescriptor {
    pub fn new(logical_id: impl Into<String>, physical_id: impl Into<String>) -> Self {
        Self {
            logical_id: logical_id.into(),
            physical_id: physical_id.into(),
        }
    }
}

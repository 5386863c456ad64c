//! Shared fakes for integration tests.
//!
//! The fakes stand in for CloudFormation and Lambda so the full export
//! pipeline runs offline.

#![allow(dead_code)]

use std::collections::HashMap;
use std::future::Future;
use std::io::Write;
use std::sync::{Arc, Mutex};

use samvars::domain::ports::{
    ControlPlaneError, ExportEvent, ExportEventSink, FunctionConfigSource, ResourcePage,
    StackResourceSource,
};
use samvars::{EnvironmentMap, StackName, StackResource};

pub const LAMBDA: &str = "AWS::Lambda::Function";

/// A stack served in fixed-size pages.
pub struct FakeStack {
    pub name: String,
    pub resources: Vec<StackResource>,
    pub page_size: usize,
}

impl FakeStack {
    pub fn new(name: &str, resources: Vec<StackResource>) -> Self {
        Self {
            name: name.to_string(),
            resources,
            page_size: 100,
        }
    }

    pub fn paged(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}

impl StackResourceSource for FakeStack {
    fn list_resources(
        &self,
        stack: &StackName,
        next_token: Option<String>,
    ) -> impl Future<Output = Result<ResourcePage, ControlPlaneError>> + Send {
        let result = if stack.as_str() != self.name {
            Err(ControlPlaneError::StackNotFound {
                stack: stack.to_string(),
            })
        } else {
            let start: usize = next_token.and_then(|t| t.parse().ok()).unwrap_or(0);
            let end = (start + self.page_size).min(self.resources.len());
            Ok(ResourcePage {
                resources: self.resources[start..end].to_vec(),
                next_token: (end < self.resources.len()).then(|| end.to_string()),
            })
        };
        async move { result }
    }
}

/// Lambda control plane keyed by physical function name.
#[derive(Default)]
pub struct FakeLambda {
    pub environments: HashMap<String, EnvironmentMap>,
}

impl FakeLambda {
    pub fn with(mut self, physical_id: &str, vars: &[(&str, &str)]) -> Self {
        self.environments.insert(
            physical_id.to_string(),
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self
    }
}

impl FunctionConfigSource for FakeLambda {
    fn environment(
        &self,
        function_name: &str,
    ) -> impl Future<Output = Result<EnvironmentMap, ControlPlaneError>> + Send {
        let result = self
            .environments
            .get(function_name)
            .cloned()
            .ok_or_else(|| ControlPlaneError::Request {
                operation: "GetFunctionConfiguration",
                message: format!("ResourceNotFoundException: Function not found: {function_name}"),
            });
        async move { result }
    }
}

pub fn lambda(logical: &str, physical: &str) -> StackResource {
    StackResource::new(logical, Some(physical.to_string()), LAMBDA)
}

pub fn other(logical: &str, resource_type: &str) -> StackResource {
    StackResource::new(logical, Some(format!("{logical}-physical")), resource_type)
}

/// Sink that keeps every event for later assertions.
#[derive(Default)]
pub struct RecordingSink(pub Mutex<Vec<ExportEvent>>);

impl RecordingSink {
    pub fn events(&self) -> Vec<ExportEvent> {
        self.0.lock().unwrap().clone()
    }
}

impl ExportEventSink for RecordingSink {
    fn on_event(&self, event: ExportEvent) {
        self.0.lock().unwrap().push(event);
    }
}

/// Cloneable in-memory writer for sinks and prompters.
#[derive(Clone, Default)]
pub struct SharedBuf(pub Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

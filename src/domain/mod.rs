//! Domain Layer
//!
//! The export pipeline's types and rules, independent of AWS and the terminal.
//!
//! ## Structure
//!
//! - `entities/` - Stack resources and the output document
//! - `value_objects/` - Stack names and resource type tags
//! - `services/` - Resolver, enumerator and fetcher
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - Control planes, files and prompts are reached through ports
//! 2. **Ports & Adapters** - Tests substitute in-memory fakes for every port

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
